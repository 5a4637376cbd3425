//! Core State trait and the vehicle lifecycle phases.
//!
//! All state machine states implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for reporting
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

crate::state_enum! {
    /// Coarse lifecycle phase of a vehicle.
    ///
    /// A running bike with its stand down is never observable: lowering the
    /// stand on a running bike stops the engine in the same call.
    #[derive(Copy, Eq, Hash)]
    pub enum Phase {
        /// Engine off, no kickstand holding the vehicle.
        Stopped,
        /// Engine off with the kickstand down.
        Parked,
        /// Engine on.
        Running,
    }
}

impl Phase {
    /// Derive the phase from the engine flag and kickstand position.
    pub fn from_parts(running: bool, stand_down: bool) -> Self {
        match (running, stand_down) {
            (true, _) => Self::Running,
            (false, true) => Self::Parked,
            (false, false) => Self::Stopped,
        }
    }
}
