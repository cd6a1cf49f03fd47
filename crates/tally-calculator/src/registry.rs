//! Identifier to constructor mapping behind the factory

use crate::built_in::constructor;
use crate::calculation::Calculation;
use crate::kind::CalculationKind;
use crate::error::{CalculationError, Result};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Builds a calculation from its two operands.
pub type CalculationConstructor = fn(f64, f64) -> Calculation;

/// Maps normalized identifiers to variant constructors.
///
/// Populated once during initialization and only read afterwards.
#[derive(Debug, Default, Clone)]
pub struct CalculationRegistry {
    constructors: BTreeMap<String, CalculationConstructor>,
}

/// Lowercases an identifier the way the registry stores it.
pub fn normalize(identifier: &str) -> String {
    identifier.to_lowercase()
}

impl CalculationRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self { constructors: BTreeMap::new() }
    }

    /// Associates `identifier` with `constructor`.
    ///
    /// # Errors
    /// [`CalculationError::DuplicateRegistration`] if the normalized identifier is
    /// already present. The existing mapping is left untouched.
    pub fn register(&mut self, identifier: &str, constructor: CalculationConstructor) -> Result<()> {
        let identifier = normalize(identifier);
        if self.constructors.contains_key(&identifier) {
            warn!(identifier = %identifier, "rejected duplicate calculation registration");
            return Err(CalculationError::DuplicateRegistration { identifier });
        }
        debug!(identifier = %identifier, "registered calculation type");
        self.constructors.insert(identifier, constructor);
        Ok(())
    }

    /// Registers the built-in constructor for `kind` under `identifier`.
    ///
    /// # Errors
    /// Same as [`CalculationRegistry::register`].
    pub fn register_kind(&mut self, identifier: &str, kind: CalculationKind) -> Result<()> {
        self.register(identifier, constructor(kind))
    }

    pub(crate) fn get(&self, identifier: &str) -> Option<CalculationConstructor> {
        self.constructors.get(&normalize(identifier)).copied()
    }

    /// Whether `identifier` is registered, ignoring case
    pub fn contains(&self, identifier: &str) -> bool {
        self.constructors.contains_key(&normalize(identifier))
    }

    /// Registered identifiers in sorted order
    pub fn identifiers(&self) -> Vec<String> {
        self.constructors.keys().cloned().collect()
    }

    /// Number of registered identifiers
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether nothing has been registered yet
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}
