//! The closed set of calculation variants

use serde::{Deserialize, Serialize};
use std::fmt;

/// One concrete calculation kind.
///
/// The set is fixed at compile time; the registry maps identifiers onto
/// these variants rather than onto open-ended implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationKind {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, failing on a zero divisor
    Divide,
}

impl CalculationKind {
    /// Every built-in variant, in registration order
    pub const ALL: [CalculationKind; 4] = [
        CalculationKind::Add,
        CalculationKind::Subtract,
        CalculationKind::Multiply,
        CalculationKind::Divide,
    ];

    /// The normalized identifier this variant is registered under
    pub fn identifier(self) -> &'static str {
        match self {
            CalculationKind::Add => "add",
            CalculationKind::Subtract => "subtract",
            CalculationKind::Multiply => "multiply",
            CalculationKind::Divide => "divide",
        }
    }

    /// Human-readable variant name
    pub fn name(self) -> &'static str {
        match self {
            CalculationKind::Add => "Add",
            CalculationKind::Subtract => "Subtract",
            CalculationKind::Multiply => "Multiply",
            CalculationKind::Divide => "Divide",
        }
    }

    /// Infix operator symbol
    pub fn symbol(self) -> char {
        match self {
            CalculationKind::Add => '+',
            CalculationKind::Subtract => '-',
            CalculationKind::Multiply => '*',
            CalculationKind::Divide => '/',
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
