//! Vehicle Walkthrough
//!
//! Drives one car and one motorcycle through a typical lifecycle, with
//! every state change logged through `tracing`.
//!
//! Key concepts:
//! - Shared lifecycle with per-variant speed policy
//! - Kickstand interlock on the motorcycle
//! - Observation via `Monitored` instead of logging inside the vehicles
//!
//! Run with: cargo run --example vehicle_demo

use motorpool::observe::{HistoryRecorder, Monitored, TracingObserver};
use motorpool::vehicle::{Bike, BikeType, Car, Vehicle};
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== Vehicle Walkthrough ===\n");

    let car = Car::builder()
        .make("Toyota")
        .model("Camry")
        .year(2023)
        .doors(4)
        .transmission("Automatic")
        .build()
        .expect("demo car is valid");
    let bike = Bike::new("Kawasaki", "Ninja", 2023, BikeType::Sport);

    println!("Created: {car}");
    println!("Created: {bike}\n");

    let history = Arc::new(HistoryRecorder::new());
    let mut car = Monitored::new(car).with_observer(Arc::new(TracingObserver::new("camry")));
    let mut bike = Monitored::new(bike)
        .with_observer(Arc::new(TracingObserver::new("ninja")))
        .with_observer(history.clone());

    println!("Bike kickstand: {}", bike.raise_kickstand());

    println!("Starting car: {}", car.start());
    println!("Starting bike: {}", bike.start());

    println!("Car acceleration: {}", car.accelerate(30));
    println!("Bike acceleration: {}", bike.accelerate(40));

    println!("\nCurrent car state: {car}");
    println!("Current bike state: {bike}\n");

    println!("Car braking: {}", car.brake());
    println!("Bike braking: {}", bike.brake());

    let inner = car.vehicle();
    println!("Car doors: {}", inner.doors());
    println!("Car transmission: {}", inner.transmission());
    println!("Bike type: {}", bike.vehicle().bike_type());

    println!(
        "Lower kickstand while moving: {}",
        bike.lower_kickstand()
    );

    println!("Stopping car: {}", car.stop());
    println!("Stopping bike: {}", bike.stop());

    println!("\nFinal car state: {car}");
    println!("Final bike state: {bike}");

    let path: Vec<_> = history
        .history()
        .get_path()
        .into_iter()
        .map(|phase| format!("{phase:?}"))
        .collect();
    println!("Bike phases: {}", path.join(" -> "));

    println!("\n=== Walkthrough Complete ===");
}
