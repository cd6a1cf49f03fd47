//! Error types for calculation creation and execution

use tally_operation::OperationError;
use thiserror::Error;

/// Errors surfaced by the registry, the factory and calculation execution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// The divisor of a divide calculation was zero
    #[error("division by zero is not allowed")]
    DivisionByZero,

    /// An identifier was registered twice during initialization
    #[error("calculation type '{identifier}' is already registered")]
    DuplicateRegistration {
        /// Normalized identifier that was already present
        identifier: String,
    },

    /// `create` was called with an identifier the registry does not know
    #[error(
        "unsupported calculation type '{identifier}'; available types: {}",
        .available.join(", ")
    )]
    UnsupportedType {
        /// Identifier as the caller passed it
        identifier: String,
        /// Registered identifiers, sorted
        available: Vec<String>,
    },
}

impl CalculationError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            CalculationError::DivisionByZero => "arithmetic",
            CalculationError::DuplicateRegistration { .. } => "registration",
            CalculationError::UnsupportedType { .. } => "lookup",
        }
    }
}

impl From<OperationError> for CalculationError {
    fn from(error: OperationError) -> Self {
        match error {
            OperationError::DivisionByZero => CalculationError::DivisionByZero,
        }
    }
}

/// Result alias used throughout the calculator crate
pub type Result<T> = std::result::Result<T, CalculationError>;
