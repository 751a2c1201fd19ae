//! Quantity declarations and their runtime descriptors.

use core::any::TypeId;
use core::fmt;

use crate::error::{ensure_finite, DomainViolation};
use crate::family::Family;
use crate::names::NameProvider;
use crate::restriction::{Restriction, RestrictionKind};
use crate::unit::Units;

/// Trait implemented by every **quantity** marker type (Current, Length, …).
///
/// * `FAMILY` fixes the dimensional exponents; no two registered quantities may share one.
/// * `CANONICAL` is the SI unit the raw value of a [`Measure`](crate::Measure) is stored in.
/// * `Restriction` decides which finite values are legal ([`Unrestricted`](crate::Unrestricted) or
///   [`NonNegative`](crate::NonNegative)).
///
/// Inside this crate quantities are declared with `#[derive(Quantity)]`; downstream crates implement the trait by
/// hand:
///
/// ```rust
/// use measure_core::{Family, Measure, Quantity, Units, Unrestricted};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// pub struct Jerk;
///
/// impl Quantity for Jerk {
///     const NAME: &'static str = "jerk";
///     const NAME_KEY: &'static str = "quantity.jerk";
///     const FAMILY: Family = Family::DIMENSIONLESS.length(1).time(-3);
///     const CANONICAL: Units<Self> = Units::canonical("m/s³", "units.jerk.canonical");
///     type Restriction = Unrestricted;
/// }
///
/// let j = Measure::<Jerk>::of(-2.0).unwrap();
/// assert_eq!(j.to_string(), "-2 m/s³");
/// ```
pub trait Quantity: Copy + fmt::Debug + PartialEq + 'static {
    /// Built-in display name.
    const NAME: &'static str;

    /// Name-provider key for the display name.
    const NAME_KEY: &'static str;

    /// Dimensional exponents shared by every value of this quantity.
    const FAMILY: Family;

    /// Unit the raw value is stored in.
    const CANONICAL: Units<Self>;

    /// Units this quantity can be written in. The canonical unit is accepted even when it is not listed.
    const UNITS: &'static [Units<Self>] = &[];

    /// Policy deciding which finite values are legal.
    type Restriction: Restriction;

    /// Runtime descriptor used by the family registry.
    fn kind() -> QuantityKind {
        QuantityKind::of::<Self>()
    }

    /// Unit of this quantity written as `symbol`, searched in [`UNITS`](Quantity::UNITS) and then the canonical
    /// unit.
    fn unit_for_symbol(symbol: &str) -> Option<Units<Self>> {
        Self::UNITS
            .iter()
            .copied()
            .chain(core::iter::once(Self::CANONICAL))
            .find(|units| units.symbol() == symbol)
    }
}

/// Finite-check followed by the quantity's restriction policy.
pub(crate) fn validate_raw<Q: Quantity>(value: f64) -> Result<f64, DomainViolation> {
    let value = ensure_finite(Q::NAME, value)?;
    // -0.0 is folded into 0.0 so equality, ordering and hashing agree
    Q::Restriction::validate(Q::NAME, value + 0.0)
}

/// Runtime descriptor of a quantity type: what the registry maps a [`Family`] to.
///
/// `validate` is the factory check that turns a raw canonical value into a legal value of this quantity.
#[derive(Clone, Copy)]
pub struct QuantityKind {
    name: &'static str,
    name_key: &'static str,
    canonical_symbol: &'static str,
    family: Family,
    restriction: RestrictionKind,
    type_id: TypeId,
    validate: fn(f64) -> Result<f64, DomainViolation>,
}

impl QuantityKind {
    /// Descriptor of the quantity `Q`.
    pub fn of<Q: Quantity>() -> Self {
        Self {
            name: Q::NAME,
            name_key: Q::NAME_KEY,
            canonical_symbol: Q::CANONICAL.symbol(),
            family: Q::FAMILY,
            restriction: <Q::Restriction as Restriction>::KIND,
            type_id: TypeId::of::<Q>(),
            validate: validate_raw::<Q>,
        }
    }

    /// Built-in display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name-provider key for the display name.
    pub fn name_key(&self) -> &'static str {
        self.name_key
    }

    /// Symbol of the canonical unit.
    pub fn canonical_symbol(&self) -> &'static str {
        self.canonical_symbol
    }

    /// Family the quantity is registered under.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Runtime tag of the quantity's restriction policy.
    pub fn restriction(&self) -> RestrictionKind {
        self.restriction
    }

    /// `true` if this descriptor was built from `Q`.
    pub fn is<Q: Quantity>(&self) -> bool {
        self.type_id == TypeId::of::<Q>()
    }

    /// Checks a raw canonical value against this quantity's domain.
    pub fn validate(&self, value: f64) -> Result<f64, DomainViolation> {
        (self.validate)(value)
    }

    /// Display name resolved through `names`, falling back to the built-in name.
    pub fn display_name(&self, names: &dyn NameProvider) -> String {
        names
            .lookup(self.name_key)
            .unwrap_or_else(|| self.name.to_string())
    }
}

impl PartialEq for QuantityKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for QuantityKind {}

impl fmt::Debug for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuantityKind")
            .field("name", &self.name)
            .field("family", &self.family)
            .field("restriction", &self.restriction)
            .finish()
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::current::Current;
    use crate::length::Length;
    use crate::names::StaticNames;
    use crate::time::Time;

    #[test]
    fn kind_mirrors_quantity_declaration() {
        let kind = Current::kind();
        assert_eq!(kind.name(), "current");
        assert_eq!(kind.name_key(), "quantity.current");
        assert_eq!(kind.canonical_symbol(), "A");
        assert_eq!(kind.family(), Family::DIMENSIONLESS.current(1));
        assert_eq!(kind.restriction(), RestrictionKind::NonNegative);
        assert!(kind.is::<Current>());
        assert!(!kind.is::<Length>());
    }

    #[test]
    fn kind_equality_is_by_type() {
        assert_eq!(Current::kind(), QuantityKind::of::<Current>());
        assert_ne!(Current::kind(), Time::kind());
    }

    #[test]
    fn validate_applies_finiteness_and_restriction() {
        let current = Current::kind();
        assert_eq!(current.validate(2.0), Ok(2.0));
        assert!(matches!(
            current.validate(-1.0),
            Err(DomainViolation::Negative { quantity: "current", .. })
        ));
        assert!(matches!(
            Time::kind().validate(f64::NAN),
            Err(DomainViolation::NonFinite { quantity: "time", .. })
        ));
        assert_eq!(Time::kind().validate(-1.0), Ok(-1.0));
    }

    #[test]
    fn negative_zero_is_normalized() {
        let v = Current::kind().validate(-0.0).unwrap();
        assert!(v.is_sign_positive());
    }

    #[test]
    fn unit_lookup_by_symbol() {
        use crate::current::MILLIAMPERES;
        use crate::units::temperature::{Temperature, FAHRENHEIT};

        assert_eq!(Current::unit_for_symbol("mA"), Some(MILLIAMPERES));
        assert_eq!(Current::unit_for_symbol("A"), Some(Current::CANONICAL));
        assert_eq!(Current::unit_for_symbol("s"), None);
        assert_eq!(Temperature::unit_for_symbol("°F"), Some(FAHRENHEIT));
    }

    #[test]
    fn display_name_lookup() {
        let names = StaticNames::new().with("quantity.current", "Stromstärke");
        assert_eq!(Current::kind().display_name(&names), "Stromstärke");
        assert_eq!(Time::kind().display_name(&names), "time");
        assert_eq!(Current::kind().to_string(), "current [A]");
    }
}
