use thiserror::Error;

/// Errors raised by the arithmetic operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    /// The divisor of a division was zero.
    #[error("division by zero is not allowed")]
    DivisionByZero,
}

/// Result alias for fallible operations.
pub type Result<T> = std::result::Result<T, OperationError>;
