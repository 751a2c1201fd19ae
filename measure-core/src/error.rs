//! Error types for measure construction, arithmetic and registry setup.

use crate::family::Family;

/// Result type for fallible measure operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Error type for measure operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeasureError {
    /// Addition, subtraction, comparison or projection between different families.
    #[error("Dimensional mismatch: {left} is not compatible with {right}")]
    DimensionMismatch {
        /// Family of the value operated on.
        left: Family,
        /// Family it was expected to match.
        right: Family,
    },

    /// A value tagged with one quantity was requested as another quantity of the same family.
    #[error("Quantity mismatch: expected {expected}, found {found}")]
    KindMismatch {
        /// Name of the requested quantity.
        expected: &'static str,
        /// Name of the quantity the value is tagged with.
        found: &'static str,
    },

    /// A value outside the quantity's domain.
    #[error(transparent)]
    Domain(#[from] DomainViolation),

    /// A named quantity was required but the family has none.
    #[error("No quantity registered for family {family}")]
    UnresolvedFamily {
        /// The family that has no registered quantity.
        family: Family,
    },

    /// A product, quotient or power whose family exponents do not fit in `i32`.
    #[error("Exponent overflow deriving a family from {family}")]
    ExponentOverflow {
        /// Family of the left-hand operand.
        family: Family,
    },

    /// Division by a zero measure or scalar.
    #[error("Division by zero")]
    DivisionByZero,

    /// Registry setup failed.
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A raw value rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DomainViolation {
    /// NaN or an infinity.
    #[error("Non-finite value for {quantity}: {value}")]
    NonFinite {
        /// Name of the quantity being built.
        quantity: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A negative canonical value for a non-negative quantity.
    #[error("Negative value for non-negative quantity {quantity}: {value}")]
    Negative {
        /// Name of the quantity being built.
        quantity: &'static str,
        /// The rejected canonical value.
        value: f64,
    },
}

/// Conflicting family registration. This is a programming error in the quantity table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// A different quantity already owns the family.
    #[error("Family {family} is already registered to {existing}; cannot register {incoming}")]
    Conflict {
        /// The contested family.
        family: Family,
        /// Name of the quantity already registered.
        existing: &'static str,
        /// Name of the rejected quantity.
        incoming: &'static str,
    },
}

impl MeasureError {
    pub(crate) fn mismatch(left: Family, right: Family) -> Self {
        MeasureError::DimensionMismatch { left, right }
    }

    pub(crate) fn overflow(family: Family) -> Self {
        MeasureError::ExponentOverflow { family }
    }
}

/// Rejects NaN and infinities.
pub fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, DomainViolation> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainViolation::NonFinite { quantity, value })
    }
}
