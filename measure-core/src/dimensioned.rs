//! Runtime-tagged measures.
//!
//! [`Dimensioned`] carries its [`Family`] as data instead of as a type parameter. It is what cross-family arithmetic
//! returns: the registry attaches the named [`QuantityKind`] when one is registered for the result family, and leaves
//! the value anonymous otherwise.

use core::cmp::Ordering;
use core::fmt;

use log::trace;

use crate::error::{ensure_finite, MeasureError, MeasureResult};
use crate::family::{Family, FamilyOp};
use crate::measure::Measure;
use crate::quantity::{Quantity, QuantityKind};
use crate::registry::FamilyRegistry;
use crate::unit::Units;

const ANONYMOUS: &str = "anonymous quantity";

/// A finite canonical value tagged with a family and, when resolved, the quantity that owns that family.
#[derive(Clone, Copy, Debug)]
pub struct Dimensioned {
    value: f64,
    family: Family,
    kind: Option<QuantityKind>,
}

impl Dimensioned {
    /// Anonymous value of `family`. Only finiteness is checked.
    pub fn new(value: f64, family: Family) -> MeasureResult<Self> {
        Ok(Self {
            value: ensure_finite(ANONYMOUS, value)? + 0.0,
            family,
            kind: None,
        })
    }

    /// Value of a named quantity, validated by that quantity's restriction.
    pub fn named(value: f64, kind: QuantityKind) -> MeasureResult<Self> {
        Ok(Self {
            value: kind.validate(value)?,
            family: kind.family(),
            kind: Some(kind),
        })
    }

    /// Erases the static quantity of `measure`, keeping it as the tag.
    pub fn from_measure<Q: Quantity>(measure: Measure<Q>) -> Self {
        Self {
            value: measure.value(),
            family: Q::FAMILY,
            kind: Some(Q::kind()),
        }
    }

    /// Raw value in the canonical unit of the family.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Family of the value.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Named quantity this value resolved to, if any.
    pub fn kind(&self) -> Option<&QuantityKind> {
        self.kind.as_ref()
    }

    /// Like [`Dimensioned::kind`], but an anonymous value is an [`MeasureError::UnresolvedFamily`] error.
    pub fn require_kind(&self) -> MeasureResult<&QuantityKind> {
        self.kind.as_ref().ok_or(MeasureError::UnresolvedFamily {
            family: self.family,
        })
    }

    /// `true` unless the value is anonymous.
    pub fn is_named(&self) -> bool {
        self.kind.is_some()
    }

    /// `true` if this value resolved to quantity `Q`.
    pub fn is<Q: Quantity>(&self) -> bool {
        self.kind.is_some_and(|k| k.is::<Q>())
    }

    /// Recovers a typed measure.
    ///
    /// Fails on family mismatch, if the value is tagged with a different quantity, or if the value violates `Q`'s
    /// restriction. Anonymous values of the right family are accepted.
    pub fn downcast<Q: Quantity>(&self) -> MeasureResult<Measure<Q>> {
        if self.family != Q::FAMILY {
            return Err(MeasureError::mismatch(self.family, Q::FAMILY));
        }
        match self.kind {
            Some(kind) if !kind.is::<Q>() => Err(MeasureError::KindMismatch {
                expected: Q::NAME,
                found: kind.name(),
            }),
            _ => Measure::of(self.value),
        }
    }

    /// Projects the value into `units`, checking the family at runtime.
    pub fn in_units<Q: Quantity>(&self, units: &Units<Q>) -> MeasureResult<f64> {
        self.ensure_family(units.family())?;
        Ok(units.convert_from_canonical(self.value))
    }

    fn ensure_family(&self, family: Family) -> MeasureResult<()> {
        if self.family == family {
            Ok(())
        } else {
            Err(MeasureError::mismatch(self.family, family))
        }
    }

    /// Same family and tag, new value; re-validated against the tagged quantity.
    fn with_value(&self, value: f64) -> MeasureResult<Self> {
        match self.kind {
            Some(kind) => Self::named(value, kind),
            None => Self::new(value, self.family),
        }
    }

    /// Sum of two values of the same family.
    pub fn add(&self, other: &Self) -> MeasureResult<Self> {
        self.ensure_family(other.family)?;
        self.with_value(self.value + other.value)
    }

    /// Difference of two values of the same family.
    pub fn subtract(&self, other: &Self) -> MeasureResult<Self> {
        self.ensure_family(other.family)?;
        self.with_value(self.value - other.value)
    }

    /// Additive inverse, re-validated against the tagged quantity.
    pub fn negate(&self) -> MeasureResult<Self> {
        self.with_value(-self.value)
    }

    /// Multiplies by a plain factor without changing the family.
    pub fn scale(&self, factor: f64) -> MeasureResult<Self> {
        self.with_value(self.value * factor)
    }

    /// Product of two values; the result family is looked up in `registry`.
    pub fn multiply(&self, other: &Self, registry: &FamilyRegistry) -> MeasureResult<Self> {
        let family = self
            .family
            .checked_combine(other.family, FamilyOp::Add)
            .ok_or(MeasureError::overflow(self.family))?;
        registry.resolve(family, self.value * other.value)
    }

    /// Quotient of two values; the result family is looked up in `registry`.
    ///
    /// A zero divisor is a [`MeasureError::DivisionByZero`] error.
    pub fn divide(&self, other: &Self, registry: &FamilyRegistry) -> MeasureResult<Self> {
        if other.value == 0.0 {
            return Err(MeasureError::DivisionByZero);
        }
        let family = self
            .family
            .checked_combine(other.family, FamilyOp::Subtract)
            .ok_or(MeasureError::overflow(self.family))?;
        registry.resolve(family, self.value / other.value)
    }

    /// Integer power; every family exponent is multiplied by `exponent`.
    ///
    /// A negative power of zero is a [`MeasureError::DivisionByZero`] error.
    pub fn powi(&self, exponent: i32, registry: &FamilyRegistry) -> MeasureResult<Self> {
        if exponent < 0 && self.value == 0.0 {
            return Err(MeasureError::DivisionByZero);
        }
        let family = self
            .family
            .checked_scale(exponent)
            .ok_or(MeasureError::overflow(self.family))?;
        registry.resolve(family, self.value.powi(exponent))
    }

    /// Orders two values of the same family; different families are a dimensional mismatch.
    pub fn try_cmp(&self, other: &Self) -> MeasureResult<Ordering> {
        self.ensure_family(other.family)?;
        Ok(self.value.total_cmp(&other.value))
    }

    /// Re-resolves an anonymous value against `registry` (e.g. a registry extended after the value was built).
    pub fn resolve(&self, registry: &FamilyRegistry) -> MeasureResult<Self> {
        if self.kind.is_some() {
            return Ok(*self);
        }
        trace!("re-resolving anonymous value of family {}", self.family);
        registry.resolve(self.family, self.value)
    }
}

impl PartialEq for Dimensioned {
    /// Same family and same canonical value; the quantity tag is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.value == other.value
    }
}

impl<Q: Quantity> From<Measure<Q>> for Dimensioned {
    fn from(measure: Measure<Q>) -> Self {
        Self::from_measure(measure)
    }
}

impl fmt::Display for Dimensioned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.value)?,
            None => write!(f, "{}", self.value)?,
        }
        match self.kind {
            Some(kind) if !kind.canonical_symbol().is_empty() => {
                write!(f, " {}", kind.canonical_symbol())
            }
            Some(_) => Ok(()),
            None if self.family.is_dimensionless() => Ok(()),
            None => write!(f, " {}", self.family),
        }
    }
}
