//! Builder API for vehicle construction.
//!
//! Builders collect identity data and an optional policy override, then
//! validate everything at once in `build()`. The plain constructors
//! (`Car::new`, `Bike::new`) skip validation.

mod bike;
mod car;
pub mod error;

pub use bike::BikeBuilder;
pub use car::CarBuilder;
pub use error::BuildError;

/// Identity fields shared by every builder.
#[derive(Clone, Debug, Default)]
struct Identity {
    make: Option<String>,
    model: Option<String>,
    year: Option<i32>,
}

impl Identity {
    fn require(self) -> Result<(String, String, i32), BuildError> {
        let make = self.make.ok_or(BuildError::MissingMake)?;
        let model = self.model.ok_or(BuildError::MissingModel)?;
        let year = self.year.ok_or(BuildError::MissingYear)?;
        Ok((make, model, year))
    }
}
