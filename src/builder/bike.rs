//! Builder for motorcycles.

use super::{BuildError, Identity};
use crate::validation;
use crate::vehicle::{Bike, BikeType, Policy, VehicleState};

/// Fluent builder for [`Bike`].
#[derive(Clone, Debug, Default)]
pub struct BikeBuilder {
    identity: Identity,
    bike_type: Option<BikeType>,
    policy: Option<Policy>,
}

impl BikeBuilder {
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

    pub fn bike_type(mut self, bike_type: BikeType) -> Self {
        self.bike_type = Some(bike_type);
        self
    }

    /// Replace the policy derived from the bike type.
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<Bike, BuildError> {
        let (make, model, year) = self.identity.require()?;
        let bike_type = self.bike_type.ok_or(BuildError::MissingBikeType)?;
        let policy = self
            .policy
            .unwrap_or_else(|| Policy::bike(bike_type.top_speed()));

        let mut checks = validation::identity_checks(&make, &model, year);
        checks.extend(validation::policy_checks(&policy));
        validation::into_result(checks).map_err(BuildError::Invalid)?;

        Ok(Bike::with_policy(
            VehicleState::new(make, model, year),
            policy,
            bike_type,
        ))
    }
}
