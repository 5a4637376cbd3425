//! Results returned by vehicle operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What an operation did, independent of its wording.
///
/// None of these are errors: refusals and no-ops are ordinary results and
/// leave the vehicle untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Engine switched on.
    Started,
    /// `start` on a running engine.
    AlreadyRunning,
    /// `start` refused because the kickstand is down.
    KickstandDown,
    /// Engine switched off and speed reset.
    Stopped,
    /// `stop` on a stopped engine.
    AlreadyStopped,
    /// Speed raised (possibly clamped) to `speed`.
    Accelerated { speed: u32 },
    /// `accelerate` refused because the engine is off.
    EngineOff,
    /// Speed reduced to `speed`.
    Slowed { speed: u32 },
    /// `brake` with the vehicle already at rest.
    Stationary,
    /// Kickstand lowered on a stopped engine.
    KickstandLowered,
    /// Kickstand lowered on a running engine, which forced it off.
    KickstandLoweredEngineStopped,
    /// Kickstand raised.
    KickstandRaised,
    /// Lowering the kickstand refused because the vehicle is moving.
    MovingKickstand,
}

impl Outcome {
    /// True for refusals and no-ops, i.e. outcomes that changed nothing.
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            Self::AlreadyRunning
                | Self::KickstandDown
                | Self::AlreadyStopped
                | Self::EngineOff
                | Self::Stationary
                | Self::MovingKickstand
        )
    }

    /// Speed reported by the outcome, for accelerate and brake results.
    pub fn speed(&self) -> Option<u32> {
        match self {
            Self::Accelerated { speed } | Self::Slowed { speed } => Some(*speed),
            _ => None,
        }
    }
}

/// An [`Outcome`] together with its human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub outcome: Outcome,
    pub message: String,
}

impl Report {
    pub fn new(outcome: Outcome, message: impl Into<String>) -> Self {
        Self {
            outcome,
            message: message.into(),
        }
    }

    pub fn is_refusal(&self) -> bool {
        self.outcome.is_refusal()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusals_are_classified() {
        assert!(Outcome::AlreadyRunning.is_refusal());
        assert!(Outcome::MovingKickstand.is_refusal());
        assert!(Outcome::Stationary.is_refusal());
        assert!(!Outcome::Started.is_refusal());
        assert!(!Outcome::KickstandLoweredEngineStopped.is_refusal());
        assert!(!Outcome::Slowed { speed: 0 }.is_refusal());
    }

    #[test]
    fn speed_is_reported_for_motion_outcomes() {
        assert_eq!(Outcome::Accelerated { speed: 40 }.speed(), Some(40));
        assert_eq!(Outcome::Slowed { speed: 5 }.speed(), Some(5));
        assert_eq!(Outcome::Started.speed(), None);
    }

    #[test]
    fn report_displays_message() {
        let report = Report::new(Outcome::Stationary, "The car is already stopped.");
        assert_eq!(report.to_string(), "The car is already stopped.");
        assert!(report.is_refusal());
    }
}
