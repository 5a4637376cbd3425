//! Vehicle variants and the capability they share.
//!
//! Every variant composes a [`VehicleState`] and a [`Policy`]; the
//! [`Vehicle`] trait is the operation set callers drive. [`AnyVehicle`]
//! closes the set of variants for code that needs to hold either kind.

mod any;
mod base;
mod bike;
mod car;
mod outcome;
mod policy;

pub use any::AnyVehicle;
pub use base::VehicleState;
pub use bike::{Bike, BikeType, Kickstand, UnknownBikeType};
pub use car::Car;
pub use outcome::{Outcome, Report};
pub use policy::{ConfigError, Policy, BIKE_BRAKE_STEP, CAR_BRAKE_STEP, CAR_TOP_SPEED};

use crate::core::Phase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which variant a vehicle is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Car,
    Bike,
}

impl VehicleKind {
    /// Noun used in operation messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "motorcycle",
        }
    }
}

/// Point-in-time view of the mutable state of a vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub running: bool,
    pub speed: u32,
    /// `None` for vehicles without a kickstand.
    pub kickstand: Option<Kickstand>,
}

/// Operations every vehicle variant supports.
///
/// ```
/// use motorpool::vehicle::{Car, Outcome, Vehicle};
///
/// let mut car = Car::new("Toyota", "Camry", 2023, 4, "Automatic");
/// car.start();
/// assert_eq!(car.accelerate(1000).outcome, Outcome::Accelerated { speed: 220 });
/// assert_eq!(car.current_speed(), car.max_speed());
/// ```
pub trait Vehicle: fmt::Display {
    fn kind(&self) -> VehicleKind;

    /// Shared identity and engine/speed state.
    fn state(&self) -> &VehicleState;

    /// Numeric rules this vehicle accelerates and brakes under.
    fn policy(&self) -> Policy;

    fn start(&mut self) -> Report;

    fn stop(&mut self) -> Report;

    /// Raise speed by `amount` (scaled by the policy), clamped to the ceiling.
    fn accelerate(&mut self, amount: u32) -> Report;

    /// Reduce speed by at most one brake step.
    fn brake(&mut self) -> Report;

    fn max_speed(&self) -> u32 {
        self.policy().top_speed
    }

    fn current_speed(&self) -> u32 {
        self.state().current_speed()
    }

    fn is_running(&self) -> bool {
        self.state().is_running()
    }

    fn kickstand(&self) -> Option<Kickstand> {
        None
    }

    fn snapshot(&self) -> Snapshot {
        let kickstand = self.kickstand();
        Snapshot {
            phase: Phase::from_parts(self.is_running(), kickstand == Some(Kickstand::Down)),
            running: self.is_running(),
            speed: self.current_speed(),
            kickstand,
        }
    }
}

/// Accelerate `state` under `policy`, worded for `kind`.
fn accelerate_report(
    state: &mut VehicleState,
    policy: &Policy,
    kind: VehicleKind,
    amount: u32,
) -> Report {
    match state.accelerate_with(policy, amount) {
        None => Report::new(
            Outcome::EngineOff,
            "Cannot accelerate: Engine is not running.",
        ),
        Some(speed) => {
            let verb = match kind {
                VehicleKind::Car => "accelerates",
                VehicleKind::Bike => "accelerates rapidly",
            };
            Report::new(
                Outcome::Accelerated { speed },
                format!("The {} {verb} to {speed} km/h.", kind.noun()),
            )
        }
    }
}

/// Brake `state` under `policy`, worded for `kind`.
fn brake_report(state: &mut VehicleState, policy: &Policy, kind: VehicleKind) -> Report {
    match state.brake_with(policy) {
        None => Report::new(
            Outcome::Stationary,
            format!("The {} is already stopped.", kind.noun()),
        ),
        Some(speed) => Report::new(
            Outcome::Slowed { speed },
            format!("The {} slows down to {speed} km/h.", kind.noun()),
        ),
    }
}
