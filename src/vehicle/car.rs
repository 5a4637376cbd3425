//! Cars: linear acceleration, 20 km/h braking, 220 km/h ceiling.

use super::{accelerate_report, brake_report, Policy, Report, Vehicle, VehicleKind, VehicleState};
use crate::builder::CarBuilder;
use serde::Serialize;
use std::fmt;

/// A car. Door count and transmission are descriptive only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Car {
    state: VehicleState,
    policy: Policy,
    doors: u32,
    transmission: String,
}

impl Car {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        doors: u32,
        transmission: impl Into<String>,
    ) -> Self {
        Self::with_policy(
            VehicleState::new(make, model, year),
            Policy::car(),
            doors,
            transmission.into(),
        )
    }

    pub fn builder() -> CarBuilder {
        CarBuilder::new()
    }

    pub(crate) fn with_policy(
        state: VehicleState,
        policy: Policy,
        doors: u32,
        transmission: String,
    ) -> Self {
        Self {
            state,
            policy,
            doors,
            transmission,
        }
    }

    pub fn doors(&self) -> u32 {
        self.doors
    }

    pub fn transmission(&self) -> &str {
        &self.transmission
    }
}

impl Vehicle for Car {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn state(&self) -> &VehicleState {
        &self.state
    }

    fn policy(&self) -> Policy {
        self.policy
    }

    fn start(&mut self) -> Report {
        self.state.start()
    }

    fn stop(&mut self) -> Report {
        self.state.stop()
    }

    fn accelerate(&mut self, amount: u32) -> Report {
        accelerate_report(&mut self.state, &self.policy, VehicleKind::Car, amount)
    }

    fn brake(&mut self) -> Report {
        brake_report(&mut self.state, &self.policy, VehicleKind::Car)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}-door, {} transmission",
            self.state, self.doors, self.transmission
        )
    }
}
