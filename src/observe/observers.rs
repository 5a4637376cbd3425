//! Ready-made observers.

use super::event::VehicleEvent;
use super::VehicleObserver;
use crate::core::{Phase, StateHistory, StateTransition};
use chrono::Utc;
use std::sync::{Mutex, PoisonError};
use tracing::{info, warn};

/// Logs every event through `tracing`.
///
/// Changes are logged at info level and refusals at warn level, tagged with
/// the vehicle label.
#[derive(Clone, Debug)]
pub struct TracingObserver {
    label: String,
}

impl TracingObserver {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl VehicleObserver for TracingObserver {
    fn on_event(&self, event: &VehicleEvent) {
        let vehicle = self.label.as_str();
        match event {
            VehicleEvent::Refused { operation, reason } => {
                warn!(vehicle, %operation, reason = %reason, "operation refused");
            }
            VehicleEvent::SpeedChanged { from, to } => {
                info!(vehicle, from, to, "speed changed");
            }
            VehicleEvent::PhaseChanged { from, to, speed } => {
                info!(vehicle, from = ?from, to = ?to, speed, "phase changed");
            }
            VehicleEvent::Started => info!(vehicle, "engine started"),
            VehicleEvent::Stopped => info!(vehicle, "engine stopped"),
            VehicleEvent::KickstandRaised => info!(vehicle, "kickstand raised"),
            VehicleEvent::KickstandLowered => info!(vehicle, "kickstand lowered"),
        }
    }
}

/// Records phase changes into a [`StateHistory`].
///
/// Unbounded by default; [`HistoryRecorder::bounded`] keeps only the most
/// recent transitions for long-lived vehicles.
#[derive(Debug, Default)]
pub struct HistoryRecorder {
    history: Mutex<StateHistory<Phase>>,
    limit: Option<usize>,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that keeps at most `limit` transitions.
    pub fn bounded(limit: usize) -> Self {
        Self {
            history: Mutex::default(),
            limit: Some(limit),
        }
    }

    /// Copy of the history recorded so far.
    pub fn history(&self) -> StateHistory<Phase> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl VehicleObserver for HistoryRecorder {
    fn on_event(&self, event: &VehicleEvent) {
        if let VehicleEvent::PhaseChanged { from, to, speed } = event {
            let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
            history.push(StateTransition {
                from: *from,
                to: *to,
                timestamp: Utc::now(),
                speed: *speed,
            });
            if let Some(limit) = self.limit {
                history.retain_last(limit);
            }
        }
    }
}
