//! Core state machine types.
//!
//! This module contains the pure part of the lifecycle model:
//! - State definitions via the `State` trait and the `Phase` enum
//! - Immutable history of phase changes
//!
//! Nothing here performs I/O or logging.

mod history;
#[macro_use]
mod macros;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::{Phase, State};
