//! The factory callers use to obtain calculations

use crate::built_in::register_built_ins;
use crate::calculation::Calculation;
use crate::error::{CalculationError, Result};
use crate::registry::{CalculationRegistry, normalize};
use std::sync::LazyLock;
use tracing::{debug, warn};

static GLOBAL_FACTORY: LazyLock<Result<CalculationFactory>> =
    LazyLock::new(CalculationFactory::with_built_ins);

/// Creates calculations by identifier.
///
/// This is the only way callers obtain a [`Calculation`]. The registry it owns
/// is never mutated after construction, so a shared reference can serve any
/// number of threads.
#[derive(Debug, Clone)]
pub struct CalculationFactory {
    registry: CalculationRegistry,
}

impl CalculationFactory {
    /// Wraps an already populated registry.
    pub fn from_registry(registry: CalculationRegistry) -> Self {
        Self { registry }
    }

    /// Builds a factory with the four built-in variants registered.
    pub fn with_built_ins() -> Result<Self> {
        let mut registry = CalculationRegistry::new();
        register_built_ins(&mut registry)?;
        debug!(count = registry.len(), "calculation registry initialized");
        Ok(Self { registry })
    }

    /// Process-wide factory, initialized on first use.
    pub fn global() -> Result<&'static CalculationFactory> {
        GLOBAL_FACTORY.as_ref().map_err(Clone::clone)
    }

    /// Instantiates the variant registered under `identifier`.
    ///
    /// Lookup is case-insensitive.
    ///
    /// # Errors
    /// [`CalculationError::UnsupportedType`] carrying the registered identifiers
    /// when nothing is registered under `identifier`.
    pub fn create(&self, identifier: &str, a: f64, b: f64) -> Result<Calculation> {
        match self.registry.get(identifier) {
            Some(constructor) => {
                debug!(identifier = %normalize(identifier), a, b, "creating calculation");
                Ok(constructor(a, b))
            }
            None => {
                warn!(identifier, "unsupported calculation type requested");
                Err(CalculationError::UnsupportedType {
                    identifier: identifier.to_string(),
                    available: self.registry.identifiers(),
                })
            }
        }
    }

    /// Registered identifiers in sorted order
    pub fn identifiers(&self) -> Vec<String> {
        self.registry.identifiers()
    }

    /// Read-only view of the underlying registry
    pub fn registry(&self) -> &CalculationRegistry {
        &self.registry
    }
}
