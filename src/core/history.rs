//! Phase transition history tracking.
//!
//! Provides immutable tracking of phase changes over time. Recording a
//! transition returns a new history and leaves the original untouched.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use motorpool::core::{Phase, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::Parked,
///     to: Phase::Stopped,
///     timestamp: Utc::now(),
///     speed: 0,
/// };
/// assert_eq!(transition.speed, 0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Speed in km/h once the transition completed
    pub speed: u32,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use motorpool::core::{Phase, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Phase::Parked,
///         to: Phase::Stopped,
///         timestamp: Utc::now(),
///         speed: 0,
///     })
///     .record(StateTransition {
///         from: Phase::Stopped,
///         to: Phase::Running,
///         timestamp: Utc::now(),
///         speed: 0,
///     });
///
/// assert_eq!(history.get_path(), vec![&Phase::Parked, &Phase::Stopped, &Phase::Running]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Drop the oldest transitions until at most `limit` remain.
    pub fn retain_last(&mut self, limit: usize) {
        if self.transitions.len() > limit {
            let excess = self.transitions.len() - limit;
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the `to` state of each
    /// transition, in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time elapsed between the first and last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// Number of transitions into `state`.
    pub fn visits(&self, state: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == state).count()
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
