//! Built-in calculation variants and their startup registration.

use crate::calculation::Calculation;
use crate::error::Result;
use crate::kind::CalculationKind;
use crate::registry::{CalculationConstructor, CalculationRegistry};

fn add(a: f64, b: f64) -> Calculation {
    Calculation::new(CalculationKind::Add, a, b)
}

fn subtract(a: f64, b: f64) -> Calculation {
    Calculation::new(CalculationKind::Subtract, a, b)
}

fn multiply(a: f64, b: f64) -> Calculation {
    Calculation::new(CalculationKind::Multiply, a, b)
}

fn divide(a: f64, b: f64) -> Calculation {
    Calculation::new(CalculationKind::Divide, a, b)
}

/// Constructor for a built-in variant
pub(crate) fn constructor(kind: CalculationKind) -> CalculationConstructor {
    match kind {
        CalculationKind::Add => add,
        CalculationKind::Subtract => subtract,
        CalculationKind::Multiply => multiply,
        CalculationKind::Divide => divide,
    }
}

/// Registers every built-in variant under its identifier.
pub fn register_built_ins(registry: &mut CalculationRegistry) -> Result<()> {
    for kind in CalculationKind::ALL {
        registry.register(kind.identifier(), constructor(kind))?;
    }
    Ok(())
}
