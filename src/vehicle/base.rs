//! Identity and engine/speed state shared by every vehicle.

use super::outcome::{Outcome, Report};
use super::policy::Policy;
use serde::Serialize;
use std::fmt;

/// Shared base state: identity plus the running/speed state machine.
///
/// Invariant: `current_speed > 0` implies `running`. `stop` is the only way
/// to clear `running` and it always zeroes the speed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VehicleState {
    make: String,
    model: String,
    year: i32,
    current_speed: u32,
    running: bool,
}

impl VehicleState {
    /// A stopped vehicle at rest.
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            current_speed: 0,
            running: false,
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn current_speed(&self) -> u32 {
        self.current_speed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Switch the engine on.
    pub fn start(&mut self) -> Report {
        if self.running {
            return Report::new(Outcome::AlreadyRunning, "The vehicle is already running.");
        }
        self.running = true;
        Report::new(
            Outcome::Started,
            format!("The {} {} has started.", self.make, self.model),
        )
    }

    /// Switch the engine off and bring the vehicle to rest.
    pub fn stop(&mut self) -> Report {
        if !self.running {
            return Report::new(Outcome::AlreadyStopped, "The vehicle is already stopped.");
        }
        self.running = false;
        self.current_speed = 0;
        Report::new(
            Outcome::Stopped,
            format!("The {} {} has stopped.", self.make, self.model),
        )
    }

    pub(crate) fn set_current_speed(&mut self, speed: u32) {
        self.current_speed = speed;
    }

    /// Apply `policy` to an acceleration request.
    ///
    /// Returns the new speed, or `None` when the engine is off.
    pub(crate) fn accelerate_with(&mut self, policy: &Policy, amount: u32) -> Option<u32> {
        if !self.running {
            return None;
        }
        let speed = policy.accelerate(self.current_speed, amount);
        self.set_current_speed(speed);
        Some(speed)
    }

    /// Apply one brake under `policy`.
    ///
    /// Returns the new speed, or `None` when already at rest.
    pub(crate) fn brake_with(&mut self, policy: &Policy) -> Option<u32> {
        if self.current_speed == 0 {
            return None;
        }
        let speed = policy.brake(self.current_speed);
        self.set_current_speed(speed);
        Some(speed)
    }
}

impl fmt::Display for VehicleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} (Speed: {} km/h)",
            self.year, self.make, self.model, self.current_speed
        )
    }
}
