//! Tally Prelude
//!
//! This crate re-exports the most frequently used public items from the Tally
//! ecosystem (currently `tally-operation` and `tally-calculator`). Down-stream
//! applications can depend on `tally-prelude` to avoid long import lists and
//! to stay insulated from internal module reshuffles.

#![deny(warnings)]
#![deny(missing_docs)]

// Arithmetic operations -----------------------------------------------------------------------

pub use tally_operation::{OperationError, addition, division, multiplication, subtraction};

// Calculations, registry & factory ------------------------------------------------------------

pub use tally_calculator::{
    Calculation, CalculationConstructor, CalculationError, CalculationFactory, CalculationKind,
    CalculationRecord, CalculationRegistry,
};
