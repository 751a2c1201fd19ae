//! Family registry: maps a [`Family`] to the quantity responsible for it.
//!
//! Registries are built once through a [`RegistryBuilder`] and are immutable afterwards, so lookups need no locking
//! and a `&FamilyRegistry` can be shared freely across threads. The process-wide registry of the predefined
//! quantities is [`FamilyRegistry::standard`], created on first use behind a once-only gate.
//!
//! ```rust
//! use measure_core::charge::Charge;
//! use measure_core::current::Current;
//! use measure_core::{FamilyRegistry, Quantity};
//!
//! let registry = FamilyRegistry::builder()
//!     .register::<Current>()
//!     .unwrap()
//!     .register::<Charge>()
//!     .unwrap()
//!     .build();
//! assert_eq!(registry.lookup(Charge::FAMILY).map(|k| k.name()), Some("charge"));
//! ```

use std::collections::HashMap;

use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::dimensioned::Dimensioned;
use crate::error::{MeasureError, MeasureResult, RegistrationError};
use crate::family::Family;
use crate::quantity::{Quantity, QuantityKind};
use crate::units;

/// What arithmetic does when the result family has no registered quantity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedPolicy {
    /// Return an anonymous [`Dimensioned`] carrying the computed family.
    #[default]
    Anonymous,
    /// Fail with [`MeasureError::UnresolvedFamily`].
    Reject,
}

static STANDARD: Lazy<FamilyRegistry> = Lazy::new(|| {
    FamilyRegistry::builder()
        .with_standard_quantities()
        .expect("predefined quantity families are distinct")
        .build()
});

/// Immutable `Family -> QuantityKind` map plus the unresolved-family policy.
#[derive(Clone, Debug, Default)]
pub struct FamilyRegistry {
    kinds: HashMap<Family, QuantityKind>,
    policy: UnresolvedPolicy,
}

impl FamilyRegistry {
    /// Empty builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry of every predefined quantity, with the [`UnresolvedPolicy::Anonymous`] policy.
    pub fn standard() -> &'static FamilyRegistry {
        &STANDARD
    }

    /// Quantity registered for `family`.
    pub fn lookup(&self, family: Family) -> Option<&QuantityKind> {
        self.kinds.get(&family)
    }

    /// `true` if `Q` itself (not merely some quantity of the same family) is registered.
    pub fn contains<Q: Quantity>(&self) -> bool {
        self.lookup(Q::FAMILY).is_some_and(|k| k.is::<Q>())
    }

    /// Unresolved-family policy.
    pub fn policy(&self) -> UnresolvedPolicy {
        self.policy
    }

    /// Number of registered quantities.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Registered kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = &QuantityKind> {
        self.kinds.values()
    }

    /// Wraps a raw canonical value of `family` into a [`Dimensioned`].
    ///
    /// A registered family yields a value tagged with its quantity (validated by that quantity's restriction);
    /// otherwise the registry policy decides between an anonymous value and an
    /// [`MeasureError::UnresolvedFamily`] error.
    pub fn resolve(&self, family: Family, value: f64) -> MeasureResult<Dimensioned> {
        match self.lookup(family) {
            Some(kind) => Dimensioned::named(value, *kind),
            None => match self.policy {
                UnresolvedPolicy::Anonymous => {
                    trace!("no quantity for family {family}; returning anonymous value");
                    Dimensioned::new(value, family)
                }
                UnresolvedPolicy::Reject => Err(MeasureError::UnresolvedFamily { family }),
            },
        }
    }

    /// Builder seeded with this registry's entries and policy.
    pub fn to_builder(&self) -> RegistryBuilder {
        RegistryBuilder {
            kinds: self.kinds.clone(),
            policy: self.policy,
        }
    }
}

/// Collects quantity registrations before freezing them into a [`FamilyRegistry`].
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    kinds: HashMap<Family, QuantityKind>,
    policy: UnresolvedPolicy,
}

impl RegistryBuilder {
    /// Empty builder with the [`UnresolvedPolicy::Anonymous`] policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unresolved-family policy.
    pub fn with_policy(mut self, policy: UnresolvedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Registers `Q` under `Q::FAMILY`.
    pub fn register<Q: Quantity>(mut self) -> Result<Self, RegistrationError> {
        self.register_kind(Q::kind())?;
        Ok(self)
    }

    /// Registers `kind` under its family.
    ///
    /// Registering the same quantity twice is a no-op. Registering a different quantity for an already taken family
    /// is a [`RegistrationError::Conflict`].
    pub fn register_kind(&mut self, kind: QuantityKind) -> Result<(), RegistrationError> {
        let family = kind.family();
        match self.kinds.get(&family) {
            Some(existing) if *existing == kind => {
                trace!("{} already registered for {family}", kind.name());
                Ok(())
            }
            Some(existing) => {
                warn!(
                    "rejecting {} for family {family}: already owned by {}",
                    kind.name(),
                    existing.name()
                );
                Err(RegistrationError::Conflict {
                    family,
                    existing: existing.name(),
                    incoming: kind.name(),
                })
            }
            None => {
                debug!("registered {} for family {family}", kind.name());
                self.kinds.insert(family, kind);
                Ok(())
            }
        }
    }

    /// Registers every predefined quantity.
    pub fn with_standard_quantities(mut self) -> Result<Self, RegistrationError> {
        units::register_standard(&mut self)?;
        Ok(self)
    }

    /// Freezes the registrations.
    pub fn build(self) -> FamilyRegistry {
        debug!(
            "family registry built with {} quantities ({:?} policy)",
            self.kinds.len(),
            self.policy
        );
        FamilyRegistry {
            kinds: self.kinds,
            policy: self.policy,
        }
    }
}
