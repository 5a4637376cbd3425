//! Numeric speed policy shared by every vehicle variant.

use crate::validation::{self, Violation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a policy from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Policy could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Policy is invalid: {}", validation::describe(.0))]
    Invalid(Vec<Violation>),
}

/// Acceleration, braking and top-speed rules for one kind of vehicle.
///
/// Acceleration requests are scaled by `boost_numerator / boost_denominator`
/// with integer floor division, so a 3/2 boost turns 41 into 61.
///
/// ```
/// use motorpool::vehicle::Policy;
///
/// let bike = Policy::bike(300);
/// assert_eq!(bike.accelerate(0, 100), 150);
/// assert_eq!(bike.brake(15), 0);
/// assert_eq!(Policy::car().accelerate(200, 1000), 220);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Ceiling in km/h.
    pub top_speed: u32,
    /// Largest reduction applied by a single brake.
    pub brake_step: u32,
    pub boost_numerator: u32,
    pub boost_denominator: u32,
}

pub const CAR_TOP_SPEED: u32 = 220;
pub const CAR_BRAKE_STEP: u32 = 20;
pub const BIKE_BRAKE_STEP: u32 = 25;

impl Policy {
    /// Linear acceleration, 20 km/h braking, 220 km/h ceiling.
    pub const fn car() -> Self {
        Self {
            top_speed: CAR_TOP_SPEED,
            brake_step: CAR_BRAKE_STEP,
            boost_numerator: 1,
            boost_denominator: 1,
        }
    }

    /// 1.5x acceleration and 25 km/h braking under the given ceiling.
    pub const fn bike(top_speed: u32) -> Self {
        Self {
            top_speed,
            brake_step: BIKE_BRAKE_STEP,
            boost_numerator: 3,
            boost_denominator: 2,
        }
    }

    /// Parse a policy from JSON and validate it.
    ///
    /// Fields missing from the document keep their car defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let policy: Policy = serde_json::from_str(json)?;
        validation::into_result(validation::policy_checks(&policy)).map_err(ConfigError::Invalid)?;
        Ok(policy)
    }

    /// Scale a requested acceleration by the boost ratio.
    pub fn boosted(&self, amount: u32) -> u32 {
        let scaled = u64::from(amount) * u64::from(self.boost_numerator)
            / u64::from(self.boost_denominator.max(1));
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }

    /// Speed reached after accelerating by `amount` from `current`.
    pub fn accelerate(&self, current: u32, amount: u32) -> u32 {
        current
            .saturating_add(self.boosted(amount))
            .min(self.top_speed)
    }

    /// Speed reached after one brake from `current`; never below zero.
    pub fn brake(&self, current: u32) -> u32 {
        current - current.min(self.brake_step)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::car()
    }
}
