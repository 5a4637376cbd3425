//! Builder for cars.

use super::{BuildError, Identity};
use crate::validation;
use crate::vehicle::{Car, Policy, VehicleState};

/// Fluent builder for [`Car`].
///
/// ```
/// use motorpool::vehicle::{Car, Vehicle};
///
/// let car = Car::builder()
///     .make("Toyota")
///     .model("Camry")
///     .year(2023)
///     .doors(4)
///     .transmission("Automatic")
///     .build()
///     .unwrap();
/// assert_eq!(car.max_speed(), 220);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CarBuilder {
    identity: Identity,
    doors: Option<u32>,
    transmission: Option<String>,
    policy: Option<Policy>,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn make(mut self, make: impl Into<String>) -> Self {
        self.identity.make = Some(make.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.identity.model = Some(model.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.identity.year = Some(year);
        self
    }

    pub fn doors(mut self, doors: u32) -> Self {
        self.doors = Some(doors);
        self
    }

    pub fn transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = Some(transmission.into());
        self
    }

    /// Replace the default car policy.
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Build the car.
    /// Returns an error if a required field is missing or any value is invalid.
    pub fn build(self) -> Result<Car, BuildError> {
        let (make, model, year) = self.identity.require()?;
        let doors = self.doors.ok_or(BuildError::MissingDoors)?;
        let transmission = self.transmission.ok_or(BuildError::MissingTransmission)?;
        let policy = self.policy.unwrap_or_else(Policy::car);

        let mut checks = validation::identity_checks(&make, &model, year);
        checks.extend(validation::car_feature_checks(doors, &transmission));
        checks.extend(validation::policy_checks(&policy));
        validation::into_result(checks).map_err(BuildError::Invalid)?;

        Ok(Car::with_policy(
            VehicleState::new(make, model, year),
            policy,
            doors,
            transmission,
        ))
    }
}
