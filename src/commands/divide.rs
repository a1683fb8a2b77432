//! The division exercise: divide a numerator by a user-supplied value,
//! recovering from division by zero and non-numeric input.

use serde::Serialize;

use super::Output;
use crate::{Error, Result};

/// Line printed after the division exercise regardless of outcome.
pub const COMPLETION_LINE: &str = "This line runs no matter what.";

/// Report for a single division exercise.
#[derive(Debug, Serialize)]
pub struct DivideReport {
    pub numerator: i64,
    #[serde(flatten)]
    pub outcome: DivideOutcome,
}

/// Outcome of a division exercise. Both error kinds are recovered at the
/// point of occurrence, so they are data here rather than `Err` values.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DivideOutcome {
    Success { divisor: i64, quotient: f64 },
    DivisionByZero,
    InvalidNumber { input: String },
}

/// Parse a divisor from one line of user input.
///
/// The original exercise reads an integer, so "4.5" is rejected the same
/// way "abc" is. Surrounding whitespace is accepted.
pub fn parse_divisor(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| Error::InvalidNumber(trimmed.to_string()))
}

/// Divide `numerator` by `divisor`, rejecting a zero divisor.
pub fn divide(numerator: i64, divisor: i64) -> Result<f64> {
    if divisor == 0 {
        return Err(Error::DivisionByZero);
    }
    Ok(numerator as f64 / divisor as f64)
}

/// Run the exercise on one line of input, folding the two recognized
/// error kinds into the report. This function cannot fail.
pub fn divide_line(numerator: i64, raw: &str) -> DivideReport {
    let outcome = match parse_divisor(raw) {
        Ok(divisor) => match divide(numerator, divisor) {
            Ok(quotient) => DivideOutcome::Success { divisor, quotient },
            // divide only fails on a zero divisor
            Err(_) => DivideOutcome::DivisionByZero,
        },
        // parse_divisor only fails on non-numeric input
        Err(_) => DivideOutcome::InvalidNumber {
            input: raw.trim().to_string(),
        },
    };

    DivideReport { numerator, outcome }
}

impl Output for DivideReport {
    fn to_human(&self) -> String {
        let body = match &self.outcome {
            DivideOutcome::Success { quotient, .. } => {
                format!("Result: {}\nDivision successful!", quotient)
            }
            DivideOutcome::DivisionByZero => {
                "Error: you can't divide by zero!".to_string()
            }
            DivideOutcome::InvalidNumber { .. } => {
                "Error: please enter a valid number!".to_string()
            }
        };
        format!("{}\n{}", body, COMPLETION_LINE)
    }
}
