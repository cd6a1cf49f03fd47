//! Executable calculations holding two operands

use crate::error::{CalculationError, Result};
use crate::kind::CalculationKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use tally_operation::{addition, division, multiplication, subtraction};

/// A calculation instance produced by the factory.
///
/// Operands are fixed at construction. `execute` has no side effects and may
/// be called any number of times with the same outcome.
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    kind: CalculationKind,
    #[serde(serialize_with = "crate::float_repr::serialize")]
    a: f64,
    #[serde(serialize_with = "crate::float_repr::serialize")]
    b: f64,
}

impl Calculation {
    pub(crate) fn new(kind: CalculationKind, a: f64, b: f64) -> Self {
        Self { kind, a, b }
    }

    /// Variant this calculation executes
    pub fn kind(&self) -> CalculationKind {
        self.kind
    }

    /// First operand
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Second operand
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Computes the result by delegating to the operation library.
    ///
    /// # Errors
    /// [`CalculationError::DivisionByZero`] for a divide calculation whose
    /// second operand is zero.
    pub fn execute(&self) -> Result<f64> {
        let (a, b) = (self.a, self.b);
        match self.kind {
            CalculationKind::Add => Ok(addition(a, b)),
            CalculationKind::Subtract => Ok(subtraction(a, b)),
            CalculationKind::Multiply => Ok(multiplication(a, b)),
            CalculationKind::Divide => {
                if b == 0.0 {
                    return Err(CalculationError::DivisionByZero);
                }
                Ok(division(a, b)?)
            }
        }
    }

    /// Executes the calculation and captures operands and result together.
    pub fn record(&self) -> Result<CalculationRecord> {
        Ok(CalculationRecord { kind: self.kind, a: self.a, b: self.b, result: self.execute()? })
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?} {} {:?} = ", self.kind.name(), self.a, self.kind.symbol(), self.b)?;
        match self.execute() {
            Ok(result) => write!(f, "{result:?}"),
            Err(e) => write!(f, "error: {e}"),
        }
    }
}

impl fmt::Debug for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Calculation(a={:?}, b={:?})", self.kind.name(), self.a, self.b)
    }
}

/// A successfully executed calculation.
///
/// Non-finite numbers serialize as the strings `"NaN"`, `"inf"` and `"-inf"`
/// so a record always reads back from its own JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Variant that was executed
    pub kind: CalculationKind,
    /// First operand
    #[serde(with = "crate::float_repr")]
    pub a: f64,
    /// Second operand
    #[serde(with = "crate::float_repr")]
    pub b: f64,
    /// Value returned by `execute`
    #[serde(with = "crate::float_repr")]
    pub result: f64,
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} {:?} = {:?}", self.a, self.kind.symbol(), self.b, self.result)
    }
}
