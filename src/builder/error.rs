//! Build errors for vehicle builders.

use crate::validation::{self, Violation};
use thiserror::Error;

/// Errors that can occur when building vehicles.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Make not specified. Call .make(name) before .build()")]
    MissingMake,

    #[error("Model not specified. Call .model(name) before .build()")]
    MissingModel,

    #[error("Model year not specified. Call .year(year) before .build()")]
    MissingYear,

    #[error("Door count not specified. Call .doors(n) before .build()")]
    MissingDoors,

    #[error("Transmission not specified. Call .transmission(kind) before .build()")]
    MissingTransmission,

    #[error("Bike type not specified. Call .bike_type(kind) before .build()")]
    MissingBikeType,

    #[error("Invalid vehicle: {}", validation::describe(.0))]
    Invalid(Vec<Violation>),
}
