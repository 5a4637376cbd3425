//! Observation hooks for vehicle state changes.
//!
//! Vehicles themselves never log. Wrap one in [`Monitored`] to have each
//! operation's effect turned into [`VehicleEvent`]s and handed to every
//! subscribed [`VehicleObserver`].
//!
//! # Example
//!
//! ```rust
//! use motorpool::observe::{HistoryRecorder, Monitored};
//! use motorpool::core::Phase;
//! use motorpool::vehicle::{Bike, BikeType, Vehicle};
//! use std::sync::Arc;
//!
//! let recorder = Arc::new(HistoryRecorder::new());
//! let mut bike = Monitored::new(Bike::new("Ducati", "Monster", 2022, BikeType::Standard))
//!     .with_observer(recorder.clone());
//!
//! bike.raise_kickstand();
//! bike.start();
//! bike.lower_kickstand();
//!
//! let history = recorder.history();
//! assert_eq!(
//!     history.get_path(),
//!     vec![&Phase::Parked, &Phase::Stopped, &Phase::Running, &Phase::Parked]
//! );
//! ```

mod event;
mod observers;

pub use event::{diff, Operation, VehicleEvent};
pub use observers::{HistoryRecorder, TracingObserver};

use crate::vehicle::{
    AnyVehicle, Bike, Kickstand, Policy, Report, Snapshot, Vehicle, VehicleKind, VehicleState,
};
use std::fmt;
use std::sync::Arc;

/// Receives events published by a [`Monitored`] vehicle.
pub trait VehicleObserver: Send + Sync {
    fn on_event(&self, event: &VehicleEvent);
}

/// A vehicle that publishes events for every operation applied to it.
pub struct Monitored<V: Vehicle> {
    vehicle: V,
    observers: Vec<Arc<dyn VehicleObserver>>,
}

impl<V: Vehicle> Monitored<V> {
    pub fn new(vehicle: V) -> Self {
        Self {
            vehicle,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn VehicleObserver>) -> Self {
        self.subscribe(observer);
        self
    }

    pub fn subscribe(&mut self, observer: Arc<dyn VehicleObserver>) {
        self.observers.push(observer);
    }

    pub fn vehicle(&self) -> &V {
        &self.vehicle
    }

    pub fn into_inner(self) -> V {
        self.vehicle
    }

    /// Run `op` against the vehicle and publish the resulting events.
    pub fn apply<F>(&mut self, operation: Operation, op: F) -> Report
    where
        F: FnOnce(&mut V) -> Report,
    {
        let before = self.vehicle.snapshot();
        let report = op(&mut self.vehicle);
        self.publish(operation, &before, &report);
        report
    }

    fn publish(&self, operation: Operation, before: &Snapshot, report: &Report) {
        let after = self.vehicle.snapshot();
        for event in diff(operation, before, &after, report) {
            for observer in &self.observers {
                observer.on_event(&event);
            }
        }
    }
}

impl Monitored<Bike> {
    pub fn set_kickstand(&mut self, position: Kickstand) -> Report {
        self.apply(Operation::Kickstand, |bike| bike.set_kickstand(position))
    }

    pub fn raise_kickstand(&mut self) -> Report {
        self.set_kickstand(Kickstand::Up)
    }

    pub fn lower_kickstand(&mut self) -> Report {
        self.set_kickstand(Kickstand::Down)
    }
}

impl Monitored<AnyVehicle> {
    /// Move the kickstand; `None` for vehicles without one, in which case
    /// nothing is published.
    pub fn set_kickstand(&mut self, position: Kickstand) -> Option<Report> {
        let before = self.vehicle.snapshot();
        let report = self.vehicle.set_kickstand(position)?;
        self.publish(Operation::Kickstand, &before, &report);
        Some(report)
    }
}

impl<V: Vehicle> Vehicle for Monitored<V> {
    fn kind(&self) -> VehicleKind {
        self.vehicle.kind()
    }

    fn state(&self) -> &VehicleState {
        self.vehicle.state()
    }

    fn policy(&self) -> Policy {
        self.vehicle.policy()
    }

    fn start(&mut self) -> Report {
        self.apply(Operation::Start, V::start)
    }

    fn stop(&mut self) -> Report {
        self.apply(Operation::Stop, V::stop)
    }

    fn accelerate(&mut self, amount: u32) -> Report {
        self.apply(Operation::Accelerate, |v| v.accelerate(amount))
    }

    fn brake(&mut self) -> Report {
        self.apply(Operation::Brake, V::brake)
    }

    fn kickstand(&self) -> Option<Kickstand> {
        self.vehicle.kickstand()
    }
}

impl<V: Vehicle> fmt::Display for Monitored<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vehicle, f)
    }
}

impl<V: Vehicle + fmt::Debug> fmt::Debug for Monitored<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monitored")
            .field("vehicle", &self.vehicle)
            .field("observers", &self.observers.len())
            .finish()
    }
}
