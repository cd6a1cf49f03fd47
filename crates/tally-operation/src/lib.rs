//! Tally Operation
//!
//! The arithmetic leaf of the Tally workspace. It holds the four pure functions
//! every calculation delegates to and has no knowledge of calculations, registries
//! or identifiers.
//!
//! All functions follow IEEE-754 double precision semantics: NaN and infinite
//! inputs propagate through unchanged. Only [`division`] is fallible.

#![deny(warnings)]
#![deny(missing_docs)]

mod error;
pub use error::{OperationError, Result};

/// Returns `a + b`.
pub fn addition(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
pub fn subtraction(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
pub fn multiplication(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns `a / b`.
///
/// # Errors
/// [`OperationError::DivisionByZero`] when `b` is zero. Negative zero counts as zero.
pub fn division(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(OperationError::DivisionByZero);
    }
    Ok(a / b)
}
