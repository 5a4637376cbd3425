//! Closed sum over the vehicle variants.

use super::{Bike, Car, Kickstand, Policy, Report, Vehicle, VehicleKind, VehicleState};
use serde::Serialize;
use std::fmt;

/// Either kind of vehicle, dispatched without trait objects.
///
/// Serializes for reporting; like its variants it has no `Deserialize`
/// impl, so every instance comes from a constructor or builder.
///
/// ```compile_fail
/// use motorpool::vehicle::AnyVehicle;
///
/// let json = r#"{"Car": {
///     "state": {"make": "Toyota", "model": "Camry", "year": 2023,
///               "current_speed": 500, "running": false},
///     "policy": {"top_speed": 220, "brake_step": 20,
///                "boost_numerator": 1, "boost_denominator": 1},
///     "doors": 4,
///     "transmission": "Automatic"
/// }}"#;
/// let car: AnyVehicle = serde_json::from_str(json).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum AnyVehicle {
    Car(Car),
    Bike(Bike),
}

macro_rules! dispatch {
    ($self:expr, $v:ident => $body:expr) => {
        match $self {
            AnyVehicle::Car($v) => $body,
            AnyVehicle::Bike($v) => $body,
        }
    };
}

impl AnyVehicle {
    pub fn as_car(&self) -> Option<&Car> {
        match self {
            Self::Car(car) => Some(car),
            Self::Bike(_) => None,
        }
    }

    pub fn as_bike(&self) -> Option<&Bike> {
        match self {
            Self::Bike(bike) => Some(bike),
            Self::Car(_) => None,
        }
    }

    pub fn as_bike_mut(&mut self) -> Option<&mut Bike> {
        match self {
            Self::Bike(bike) => Some(bike),
            Self::Car(_) => None,
        }
    }

    /// Move the kickstand; `None` for vehicles without one.
    pub fn set_kickstand(&mut self, position: Kickstand) -> Option<Report> {
        self.as_bike_mut().map(|bike| bike.set_kickstand(position))
    }
}

impl Vehicle for AnyVehicle {
    fn kind(&self) -> VehicleKind {
        dispatch!(self, v => v.kind())
    }

    fn state(&self) -> &VehicleState {
        dispatch!(self, v => v.state())
    }

    fn policy(&self) -> Policy {
        dispatch!(self, v => v.policy())
    }

    fn start(&mut self) -> Report {
        dispatch!(self, v => v.start())
    }

    fn stop(&mut self) -> Report {
        dispatch!(self, v => v.stop())
    }

    fn accelerate(&mut self, amount: u32) -> Report {
        dispatch!(self, v => v.accelerate(amount))
    }

    fn brake(&mut self) -> Report {
        dispatch!(self, v => v.brake())
    }

    fn kickstand(&self) -> Option<Kickstand> {
        dispatch!(self, v => v.kickstand())
    }
}

impl fmt::Display for AnyVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, v => fmt::Display::fmt(v, f))
    }
}

impl From<Car> for AnyVehicle {
    fn from(car: Car) -> Self {
        Self::Car(car)
    }
}

impl From<Bike> for AnyVehicle {
    fn from(bike: Bike) -> Self {
        Self::Bike(bike)
    }
}
