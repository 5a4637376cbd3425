//! Motorcycles and the kickstand interlock.
//!
//! The interlock couples the stand to the engine: a bike will not start
//! with its stand down, the stand cannot be lowered while the bike moves,
//! and lowering it on a running (but stationary) bike stops the engine.

use super::{
    accelerate_report, brake_report, Outcome, Policy, Report, Vehicle, VehicleKind, VehicleState,
};
use crate::builder::BikeBuilder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Motorcycle category; decides the top speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BikeType {
    Sport,
    Cruiser,
    Touring,
    Standard,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown bike type '{0}'")]
pub struct UnknownBikeType(pub String);

impl BikeType {
    pub fn top_speed(&self) -> u32 {
        match self {
            Self::Sport => 300,
            Self::Cruiser => 180,
            Self::Touring | Self::Standard => 220,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sport => "Sport",
            Self::Cruiser => "Cruiser",
            Self::Touring => "Touring",
            Self::Standard => "Standard",
        }
    }

    /// Case-insensitive lookup that maps unrecognised labels to `Standard`.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Self::Standard)
    }
}

impl FromStr for BikeType {
    type Err = UnknownBikeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Sport, Self::Cruiser, Self::Touring, Self::Standard]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownBikeType(s.to_string()))
    }
}

impl fmt::Display for BikeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kickstand position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kickstand {
    Up,
    Down,
}

/// A motorcycle. Starts parked with its kickstand down.
///
/// ```
/// use motorpool::vehicle::{Bike, BikeType, Kickstand, Outcome, Vehicle};
///
/// let mut bike = Bike::new("Kawasaki", "Ninja", 2023, BikeType::Sport);
/// assert_eq!(bike.start().outcome, Outcome::KickstandDown);
///
/// bike.set_kickstand(Kickstand::Up);
/// bike.start();
/// assert_eq!(bike.accelerate(100).outcome, Outcome::Accelerated { speed: 150 });
/// assert_eq!(bike.set_kickstand(Kickstand::Down).outcome, Outcome::MovingKickstand);
/// ```
///
/// Bikes serialize for reporting only. There is no way to read one back from
/// a document, so a moving bike with its engine off or its stand down cannot
/// be forged:
///
/// ```compile_fail
/// use motorpool::vehicle::Bike;
///
/// let json = r#"{
///     "state": {"make": "Kawasaki", "model": "Ninja", "year": 2023,
///               "current_speed": 999, "running": false},
///     "policy": {"top_speed": 300, "brake_step": 25,
///                "boost_numerator": 3, "boost_denominator": 2},
///     "bike_type": "Sport",
///     "kickstand": "Down"
/// }"#;
/// let bike: Bike = serde_json::from_str(json).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Bike {
    state: VehicleState,
    policy: Policy,
    bike_type: BikeType,
    kickstand: Kickstand,
}

impl Bike {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        bike_type: BikeType,
    ) -> Self {
        Self::with_policy(
            VehicleState::new(make, model, year),
            Policy::bike(bike_type.top_speed()),
            bike_type,
        )
    }

    pub fn builder() -> BikeBuilder {
        BikeBuilder::new()
    }

    pub(crate) fn with_policy(state: VehicleState, policy: Policy, bike_type: BikeType) -> Self {
        Self {
            state,
            policy,
            bike_type,
            kickstand: Kickstand::Down,
        }
    }

    pub fn bike_type(&self) -> BikeType {
        self.bike_type
    }

    pub fn is_stand_down(&self) -> bool {
        self.kickstand == Kickstand::Down
    }

    /// Move the kickstand.
    ///
    /// Lowering is refused while moving. Lowering it on a running bike at
    /// rest also stops the engine.
    pub fn set_kickstand(&mut self, position: Kickstand) -> Report {
        match position {
            Kickstand::Up => {
                self.kickstand = Kickstand::Up;
                Report::new(Outcome::KickstandRaised, "Kickstand up.")
            }
            Kickstand::Down if self.state.current_speed() > 0 => Report::new(
                Outcome::MovingKickstand,
                "Cannot lower kickstand while moving!",
            ),
            Kickstand::Down => {
                self.kickstand = Kickstand::Down;
                if self.state.is_running() {
                    self.state.stop();
                    Report::new(
                        Outcome::KickstandLoweredEngineStopped,
                        "Kickstand down. Engine stopped for safety.",
                    )
                } else {
                    Report::new(Outcome::KickstandLowered, "Kickstand down.")
                }
            }
        }
    }

    pub fn raise_kickstand(&mut self) -> Report {
        self.set_kickstand(Kickstand::Up)
    }

    pub fn lower_kickstand(&mut self) -> Report {
        self.set_kickstand(Kickstand::Down)
    }
}

impl Vehicle for Bike {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Bike
    }

    fn state(&self) -> &VehicleState {
        &self.state
    }

    fn policy(&self) -> Policy {
        self.policy
    }

    fn start(&mut self) -> Report {
        if self.is_stand_down() {
            return Report::new(
                Outcome::KickstandDown,
                "Cannot start: Please raise the kickstand first.",
            );
        }
        self.state.start()
    }

    fn stop(&mut self) -> Report {
        self.state.stop()
    }

    fn accelerate(&mut self, amount: u32) -> Report {
        accelerate_report(&mut self.state, &self.policy, VehicleKind::Bike, amount)
    }

    fn brake(&mut self) -> Report {
        brake_report(&mut self.state, &self.policy, VehicleKind::Bike)
    }

    fn kickstand(&self) -> Option<Kickstand> {
        Some(self.kickstand)
    }
}

impl fmt::Display for Bike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stand = match self.kickstand {
            Kickstand::Down => "DOWN",
            Kickstand::Up => "UP",
        };
        write!(
            f,
            "{} | {} motorcycle (Kickstand {stand})",
            self.state, self.bike_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    fn ninja() -> Bike {
        Bike::new("Kawasaki", "Ninja", 2023, BikeType::Sport)
    }

    fn riding(speed: u32) -> Bike {
        let mut bike = ninja();
        bike.raise_kickstand();
        bike.start();
        if speed > 0 {
            bike.accelerate(speed);
        }
        bike
    }

    #[test]
    fn new_bike_is_parked() {
        let bike = ninja();
        assert!(bike.is_stand_down());
        assert!(!bike.is_running());
        assert_eq!(bike.snapshot().phase, Phase::Parked);
    }

    #[test]
    fn start_with_stand_down_is_refused() {
        let mut bike = ninja();
        let report = bike.start();
        assert_eq!(report.outcome, Outcome::KickstandDown);
        assert_eq!(
            report.message,
            "Cannot start: Please raise the kickstand first."
        );
        assert!(!bike.is_running());
    }

    #[test]
    fn start_with_stand_up_runs_engine() {
        let mut bike = ninja();
        assert_eq!(bike.raise_kickstand().message, "Kickstand up.");
        let report = bike.start();
        assert_eq!(report.outcome, Outcome::Started);
        assert_eq!(report.message, "The Kawasaki Ninja has started.");
        assert!(bike.is_running());
    }

    #[test]
    fn sport_accelerates_by_one_and_a_half() {
        let mut bike = riding(0);
        let report = bike.accelerate(100);
        assert_eq!(report.outcome, Outcome::Accelerated { speed: 150 });
        assert_eq!(report.message, "The motorcycle accelerates rapidly to 150 km/h.");
    }

    #[test]
    fn acceleration_floors_odd_amounts() {
        let mut bike = riding(0);
        bike.accelerate(41);
        assert_eq!(bike.current_speed(), 61);
    }

    #[test]
    fn top_speed_follows_bike_type() {
        assert_eq!(ninja().max_speed(), 300);
        assert_eq!(
            Bike::new("Harley", "Fat Boy", 2022, BikeType::Cruiser).max_speed(),
            180
        );
        assert_eq!(
            Bike::new("BMW", "R1250RT", 2022, BikeType::Touring).max_speed(),
            220
        );
    }

    #[test]
    fn cruiser_is_clamped() {
        let mut bike = Bike::new("Harley", "Fat Boy", 2022, BikeType::Cruiser);
        bike.raise_kickstand();
        bike.start();
        bike.accelerate(500);
        assert_eq!(bike.current_speed(), 180);
    }

    #[test]
    fn brake_removes_twenty_five() {
        let mut bike = riding(40);
        assert_eq!(bike.current_speed(), 60);
        let report = bike.brake();
        assert_eq!(report.outcome, Outcome::Slowed { speed: 35 });
        assert_eq!(report.message, "The motorcycle slows down to 35 km/h.");
    }

    #[test]
    fn brake_at_rest_is_a_no_op() {
        let mut bike = ninja();
        let report = bike.brake();
        assert_eq!(report.outcome, Outcome::Stationary);
        assert_eq!(report.message, "The motorcycle is already stopped.");
    }

    #[test]
    fn lowering_stand_while_moving_is_refused() {
        let mut bike = riding(20);
        let report = bike.set_kickstand(Kickstand::Down);
        assert_eq!(report.outcome, Outcome::MovingKickstand);
        assert_eq!(report.message, "Cannot lower kickstand while moving!");
        assert_eq!(bike.kickstand(), Some(Kickstand::Up));
        assert!(bike.is_running());
        assert_eq!(bike.current_speed(), 30);
    }

    #[test]
    fn lowering_stand_on_idle_engine_stops_it() {
        let mut bike = riding(0);
        let report = bike.set_kickstand(Kickstand::Down);
        assert_eq!(report.outcome, Outcome::KickstandLoweredEngineStopped);
        assert_eq!(report.message, "Kickstand down. Engine stopped for safety.");
        assert!(!bike.is_running());
        assert_eq!(bike.current_speed(), 0);
        assert!(bike.is_stand_down());
    }

    #[test]
    fn lowering_stand_after_braking_to_rest_stops_engine() {
        let mut bike = riding(10);
        bike.brake();
        assert_eq!(bike.current_speed(), 0);
        assert_eq!(
            bike.lower_kickstand().outcome,
            Outcome::KickstandLoweredEngineStopped
        );
        assert_eq!(bike.snapshot().phase, Phase::Parked);
    }

    #[test]
    fn lowering_stand_with_engine_off() {
        let mut bike = ninja();
        bike.raise_kickstand();
        let report = bike.lower_kickstand();
        assert_eq!(report.outcome, Outcome::KickstandLowered);
        assert_eq!(report.message, "Kickstand down.");
    }

    #[test]
    fn bike_type_parses_case_insensitively() {
        assert_eq!("sport".parse::<BikeType>(), Ok(BikeType::Sport));
        assert_eq!("CRUISER".parse::<BikeType>(), Ok(BikeType::Cruiser));
        assert_eq!(
            "scooter".parse::<BikeType>(),
            Err(UnknownBikeType("scooter".to_string()))
        );
    }

    #[test]
    fn from_label_falls_back_to_standard() {
        assert_eq!(BikeType::from_label("Scrambler"), BikeType::Standard);
        assert_eq!(BikeType::from_label("Scrambler").top_speed(), 220);
        assert_eq!(BikeType::from_label("sPoRt"), BikeType::Sport);
    }

    #[test]
    fn serializes_live_state_for_reporting() {
        let mut bike = ninja();
        bike.raise_kickstand();
        bike.start();
        bike.accelerate(40);

        let value = serde_json::to_value(&bike).unwrap();
        assert_eq!(value["state"]["current_speed"], 60);
        assert_eq!(value["state"]["running"], true);
        assert_eq!(value["kickstand"], "Up");
        assert_eq!(value["bike_type"], "Sport");
    }

    #[test]
    fn display_appends_type_and_stand() {
        let mut bike = ninja();
        assert_eq!(
            bike.to_string(),
            "2023 Kawasaki Ninja (Speed: 0 km/h) | Sport motorcycle (Kickstand DOWN)"
        );
        bike.raise_kickstand();
        assert!(bike.to_string().ends_with("(Kickstand UP)"));
    }
}
