//! Motorpool: lifecycle state machines for motor vehicles.
//!
//! Cars and motorcycles share one lifecycle (start, accelerate, brake,
//! stop) but differ in their numeric policy and safety interlocks. Every
//! operation is synchronous, in-memory and infallible: outcomes are
//! reported as values, never as errors.
//!
//! # Core Concepts
//!
//! - **Vehicle**: the capability trait every variant implements
//! - **Policy**: acceleration boost, brake step and top speed per variant
//! - **Kickstand interlock**: a bike will not start with its stand down, and
//!   lowering the stand stops the engine
//! - **Observation**: `Monitored` turns state changes into events for
//!   logging and history without the vehicles logging anything themselves
//!
//! Vehicles are plain owned values with no internal locking. Sharing one
//! across threads requires wrapping it in a `Mutex` for the duration of each
//! operation, since every operation is a read-then-write.
//!
//! # Example
//!
//! ```rust
//! use motorpool::vehicle::{Bike, BikeType, Car, Outcome, Vehicle};
//!
//! let mut car = Car::new("Toyota", "Camry", 2023, 4, "Automatic");
//! car.start();
//! car.accelerate(30);
//! assert_eq!(car.to_string(), "2023 Toyota Camry (Speed: 30 km/h) | 4-door, Automatic transmission");
//!
//! let mut bike = Bike::new("Kawasaki", "Ninja", 2023, BikeType::Sport);
//! assert_eq!(bike.start().outcome, Outcome::KickstandDown);
//! bike.raise_kickstand();
//! bike.start();
//! assert_eq!(bike.accelerate(40).outcome, Outcome::Accelerated { speed: 60 });
//! ```

pub mod builder;
pub mod core;
pub mod observe;
pub mod roster;
pub mod validation;
pub mod vehicle;

// Re-export commonly used types
pub use builder::BuildError;
pub use crate::core::{Phase, State, StateHistory, StateTransition};
pub use observe::{Monitored, VehicleEvent, VehicleObserver};
pub use vehicle::{AnyVehicle, Bike, BikeType, Car, Kickstand, Outcome, Policy, Report, Vehicle};
