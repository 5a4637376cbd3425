//! Accumulating validation of vehicle identity data and policies.
//!
//! Checks are expressed as stillwater `Validation`s and combined with
//! `Validation::all_vec`, so a caller sees every problem with its input in
//! one pass instead of fixing them one at a time.

use crate::vehicle::Policy;
use chrono::{Datelike, Utc};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Earliest model year accepted for a motor vehicle.
pub const FIRST_MODEL_YEAR: i32 = 1885;

pub const MAX_DOORS: u32 = 8;

/// A single problem found while validating input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("year {year} outside {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("door count {doors} outside 1..={max}")]
    DoorsOutOfRange { doors: u32, max: u32 },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Outcome of one or more checks.
pub type Checked = Validation<(), NonEmptyVec<Violation>>;

fn check(ok: bool, violation: impl FnOnce() -> Violation) -> Checked {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn not_empty(field: &'static str, value: &str) -> Checked {
    check(!value.trim().is_empty(), || Violation::Empty { field })
}

fn positive(field: &'static str, value: u32) -> Checked {
    check(value > 0, || Violation::Zero { field })
}

/// Checks on make, model and model year.
pub fn identity_checks(make: &str, model: &str, year: i32) -> Vec<Checked> {
    let max = Utc::now().year() + 1;
    vec![
        not_empty("make", make),
        not_empty("model", model),
        check((FIRST_MODEL_YEAR..=max).contains(&year), || {
            Violation::YearOutOfRange {
                year,
                min: FIRST_MODEL_YEAR,
                max,
            }
        }),
    ]
}

/// Checks on the descriptive car features.
pub fn car_feature_checks(doors: u32, transmission: &str) -> Vec<Checked> {
    vec![
        check((1..=MAX_DOORS).contains(&doors), || Violation::DoorsOutOfRange {
            doors,
            max: MAX_DOORS,
        }),
        not_empty("transmission", transmission),
    ]
}

/// Checks that keep policy arithmetic meaningful.
pub fn policy_checks(policy: &Policy) -> Vec<Checked> {
    vec![
        positive("top_speed", policy.top_speed),
        positive("brake_step", policy.brake_step),
        positive("boost_numerator", policy.boost_numerator),
        positive("boost_denominator", policy.boost_denominator),
    ]
}

/// Run every check, collecting all violations.
pub fn into_result(checks: Vec<Checked>) -> Result<(), Vec<Violation>> {
    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

/// Join violations into one line for error messages.
pub fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_identity_passes() {
        assert!(into_result(identity_checks("Toyota", "Camry", 2023)).is_ok());
    }

    #[test]
    fn identity_accumulates_all_violations() {
        let errors = into_result(identity_checks("", "  ", 1700)).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&Violation::Empty { field: "make" }));
        assert!(errors.contains(&Violation::Empty { field: "model" }));
        assert!(errors
            .iter()
            .any(|e| matches!(e, Violation::YearOutOfRange { year: 1700, .. })));
    }

    #[test]
    fn year_far_in_future_is_rejected() {
        let year = Utc::now().year() + 5;
        let errors = into_result(identity_checks("Toyota", "Camry", year)).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn car_features_are_checked() {
        assert!(into_result(car_feature_checks(4, "Manual")).is_ok());

        let errors = into_result(car_feature_checks(0, "")).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&Violation::DoorsOutOfRange { doors: 0, max: 8 }));
        assert!(errors.contains(&Violation::Empty {
            field: "transmission"
        }));
    }

    #[test]
    fn default_policies_are_valid() {
        assert!(into_result(policy_checks(&Policy::car())).is_ok());
        assert!(into_result(policy_checks(&Policy::bike(180))).is_ok());
    }

    #[test]
    fn zero_denominator_is_rejected() {
        let policy = Policy {
            boost_denominator: 0,
            ..Policy::car()
        };
        let errors = into_result(policy_checks(&policy)).unwrap_err();
        assert_eq!(
            errors,
            vec![Violation::Zero {
                field: "boost_denominator"
            }]
        );
    }

    #[test]
    fn describe_joins_messages() {
        let text = describe(&[
            Violation::Empty { field: "make" },
            Violation::Zero { field: "top_speed" },
        ]);
        assert_eq!(text, "make must not be empty; top_speed must be greater than zero");
    }
}
