//! Property-based tests for the vehicle lifecycle.
//!
//! These tests use proptest to drive cars and bikes through random
//! operation sequences and check the invariants after every step.

use motorpool::vehicle::{AnyVehicle, Bike, BikeType, Car, Kickstand, Outcome, Vehicle};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Start,
    Stop,
    Accelerate(u32),
    Brake,
    Kickstand(Kickstand),
}

prop_compose! {
    fn arbitrary_bike_type()(variant in 0..4u8) -> BikeType {
        match variant {
            0 => BikeType::Sport,
            1 => BikeType::Cruiser,
            2 => BikeType::Touring,
            _ => BikeType::Standard,
        }
    }
}

fn arbitrary_vehicle() -> impl Strategy<Value = AnyVehicle> {
    prop_oneof![
        Just(AnyVehicle::Car(Car::new("Toyota", "Camry", 2023, 4, "Automatic"))),
        arbitrary_bike_type()
            .prop_map(|kind| AnyVehicle::Bike(Bike::new("Kawasaki", "Ninja", 2023, kind))),
    ]
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Start),
        Just(Op::Stop),
        (0..400u32).prop_map(Op::Accelerate),
        Just(Op::Brake),
        Just(Op::Kickstand(Kickstand::Up)),
        Just(Op::Kickstand(Kickstand::Down)),
    ]
}

fn apply(vehicle: &mut AnyVehicle, op: &Op) -> Option<Outcome> {
    let report = match op {
        Op::Start => vehicle.start(),
        Op::Stop => vehicle.stop(),
        Op::Accelerate(amount) => vehicle.accelerate(*amount),
        Op::Brake => vehicle.brake(),
        Op::Kickstand(position) => vehicle.set_kickstand(*position)?,
    };
    Some(report.outcome)
}

proptest! {
    #[test]
    fn invariants_hold_after_every_operation(
        mut vehicle in arbitrary_vehicle(),
        ops in prop::collection::vec(arbitrary_op(), 1..60)
    ) {
        for op in &ops {
            let before = vehicle.snapshot();
            let outcome = apply(&mut vehicle, op);
            let after = vehicle.snapshot();

            prop_assert!(after.speed <= vehicle.max_speed());
            if after.speed > 0 {
                prop_assert!(after.running);
            }
            if after.kickstand == Some(Kickstand::Down) {
                prop_assert_eq!(after.speed, 0);
                prop_assert!(!after.running);
            }
            if let Some(outcome) = outcome {
                if outcome.is_refusal() {
                    prop_assert_eq!(before, after);
                }
            }
        }
    }

    #[test]
    fn stop_always_zeroes_speed(
        mut vehicle in arbitrary_vehicle(),
        ops in prop::collection::vec(arbitrary_op(), 0..30)
    ) {
        for op in &ops {
            apply(&mut vehicle, op);
        }
        vehicle.stop();
        prop_assert_eq!(vehicle.current_speed(), 0);
        prop_assert!(!vehicle.is_running());
    }

    #[test]
    fn second_start_reports_already_running(
        mut vehicle in arbitrary_vehicle(),
        ops in prop::collection::vec(arbitrary_op(), 0..30)
    ) {
        for op in &ops {
            apply(&mut vehicle, op);
        }
        vehicle.set_kickstand(Kickstand::Up);
        vehicle.start();
        prop_assert!(vehicle.is_running());

        let snapshot = vehicle.snapshot();
        prop_assert_eq!(vehicle.start().outcome, Outcome::AlreadyRunning);
        prop_assert_eq!(vehicle.snapshot(), snapshot);
    }

    #[test]
    fn brake_at_rest_is_a_no_op(mut vehicle in arbitrary_vehicle(), start in any::<bool>()) {
        if start {
            vehicle.set_kickstand(Kickstand::Up);
            vehicle.start();
        }
        let snapshot = vehicle.snapshot();
        prop_assert_eq!(vehicle.brake().outcome, Outcome::Stationary);
        prop_assert_eq!(vehicle.snapshot(), snapshot);
    }

    #[test]
    fn bike_never_starts_with_stand_down(
        kind in arbitrary_bike_type(),
        ops in prop::collection::vec(arbitrary_op(), 0..30)
    ) {
        let mut vehicle = AnyVehicle::Bike(Bike::new("Honda", "CB500", 2020, kind));
        for op in &ops {
            apply(&mut vehicle, op);
        }
        vehicle.stop();
        vehicle.set_kickstand(Kickstand::Down);

        prop_assert_eq!(vehicle.start().outcome, Outcome::KickstandDown);
        prop_assert!(!vehicle.is_running());
    }

    #[test]
    fn lowering_stand_while_moving_is_refused(
        kind in arbitrary_bike_type(),
        amount in 1..400u32
    ) {
        let mut bike = Bike::new("Honda", "CB500", 2020, kind);
        bike.raise_kickstand();
        bike.start();
        bike.accelerate(amount);
        prop_assume!(bike.current_speed() > 0);

        let speed = bike.current_speed();
        prop_assert_eq!(bike.lower_kickstand().outcome, Outcome::MovingKickstand);
        prop_assert_eq!(bike.kickstand(), Some(Kickstand::Up));
        prop_assert_eq!(bike.current_speed(), speed);
    }

    #[test]
    fn bike_acceleration_is_floored_one_and_a_half(amount in 0..1000u32) {
        let mut bike = Bike::new("Kawasaki", "Ninja", 2023, BikeType::Sport);
        bike.raise_kickstand();
        bike.start();
        bike.accelerate(amount);
        prop_assert_eq!(bike.current_speed(), (amount * 3 / 2).min(300));
    }
}
