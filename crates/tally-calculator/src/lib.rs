#![deny(warnings)]
#![deny(missing_docs)]
//! Calculations for the Tally calculator.
//!
//! This crate maps lowercase identifiers (`"add"`, `"subtract"`, `"multiply"`,
//! `"divide"`) onto calculation variants and hands out executable
//! [`Calculation`] values through the [`CalculationFactory`]:
//!
//! ```
//! use tally_calculator::CalculationFactory;
//!
//! let factory = CalculationFactory::with_built_ins()?;
//! let calculation = factory.create("Multiply", 4.0, 2.5)?;
//! assert_eq!(calculation.execute()?, 10.0);
//! # Ok::<(), tally_calculator::CalculationError>(())
//! ```

pub mod built_in;
pub mod calculation;
pub mod error;
pub mod factory;
mod float_repr;
pub mod kind;
pub mod registry;

pub use calculation::{Calculation, CalculationRecord};
pub use error::{CalculationError, Result};
pub use factory::CalculationFactory;
pub use kind::CalculationKind;
pub use registry::{CalculationConstructor, CalculationRegistry};
