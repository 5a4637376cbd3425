//! Events derived from vehicle state changes.

use crate::core::Phase;
use crate::vehicle::{Kickstand, Report, Snapshot};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation a caller invoked on a vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Start,
    Stop,
    Accelerate,
    Brake,
    Kickstand,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Accelerate => "accelerate",
            Self::Brake => "brake",
            Self::Kickstand => "kickstand",
        };
        f.write_str(name)
    }
}

/// Something observable that happened to a vehicle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleEvent {
    KickstandRaised,
    KickstandLowered,
    Started,
    Stopped,
    SpeedChanged { from: u32, to: u32 },
    PhaseChanged { from: Phase, to: Phase, speed: u32 },
    /// The operation was refused or had nothing to do.
    Refused { operation: Operation, reason: String },
}

/// Events implied by moving from `before` to `after` under `report`.
///
/// Kickstand events come first, then engine, speed and phase, matching the
/// order the interlock applies them.
pub fn diff(
    operation: Operation,
    before: &Snapshot,
    after: &Snapshot,
    report: &Report,
) -> Vec<VehicleEvent> {
    let mut events = Vec::new();

    if report.is_refusal() {
        events.push(VehicleEvent::Refused {
            operation,
            reason: report.message.clone(),
        });
    }

    match (before.kickstand, after.kickstand) {
        (Some(Kickstand::Down), Some(Kickstand::Up)) => events.push(VehicleEvent::KickstandRaised),
        (Some(Kickstand::Up), Some(Kickstand::Down)) => {
            events.push(VehicleEvent::KickstandLowered)
        }
        _ => {}
    }

    match (before.running, after.running) {
        (false, true) => events.push(VehicleEvent::Started),
        (true, false) => events.push(VehicleEvent::Stopped),
        _ => {}
    }

    if before.speed != after.speed {
        events.push(VehicleEvent::SpeedChanged {
            from: before.speed,
            to: after.speed,
        });
    }

    if before.phase != after.phase {
        events.push(VehicleEvent::PhaseChanged {
            from: before.phase,
            to: after.phase,
            speed: after.speed,
        });
    }

    events
}
