//! Statically typed measures and their arithmetic.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::*;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dimensioned::Dimensioned;
use crate::error::{MeasureError, MeasureResult};
use crate::family::{Family, FamilyOp};
use crate::quantity::{validate_raw, Quantity, QuantityKind};
use crate::registry::FamilyRegistry;
use crate::unit::Units;
use crate::units::scalar::Scalar;

/// An immutable value of quantity `Q`, stored in `Q`'s canonical unit.
///
/// A `Measure` can only hold finite values that satisfy `Q`'s restriction. Every operation returns a new measure and
/// re-validates it, so arithmetic that leaves the domain (overflow to infinity, a non-negative quantity going below
/// zero) fails instead of producing an invalid value.
///
/// Because the raw value is always finite, measures of the same quantity are totally ordered.
///
/// # Examples
///
/// ```rust
/// use measure_core::current::{Currents, AMPERES, MILLIAMPERES};
///
/// let a = Currents::of(2.0).unwrap();
/// let b = MILLIAMPERES.measure(3_000.0).unwrap();
/// let sum = (a + b).unwrap();
/// assert_eq!(sum.in_units(&AMPERES), 5.0);
/// assert!(Currents::of(-1.0).is_err());
/// ```
pub struct Measure<Q: Quantity> {
    value: f64,
    _quantity: PhantomData<Q>,
}

impl<Q: Quantity> Measure<Q> {
    /// The zero measure, legal for every restriction.
    pub const ZERO: Self = Self::new_unchecked(0.0);

    const fn new_unchecked(value: f64) -> Self {
        Self {
            value,
            _quantity: PhantomData,
        }
    }

    /// Builds a measure from a raw value in canonical units.
    ///
    /// Fails with a domain violation for NaN, infinities, and values outside `Q`'s restriction.
    pub fn of(raw: f64) -> MeasureResult<Self> {
        Ok(Self::new_unchecked(validate_raw::<Q>(raw)?))
    }

    /// Builds a measure from a value expressed in `units`.
    pub fn from_units(value: f64, units: &Units<Q>) -> MeasureResult<Self> {
        Self::of(units.convert_to_canonical(value))
    }

    /// Raw value in canonical units.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Projects the value into `units`.
    #[inline]
    pub fn in_units(self, units: &Units<Q>) -> f64 {
        units.convert_from_canonical(self.value)
    }

    /// Family of `Q`.
    pub const fn family(self) -> Family {
        Q::FAMILY
    }

    /// Runtime descriptor of `Q`.
    pub fn kind(self) -> QuantityKind {
        Q::kind()
    }

    /// `true` for a zero value.
    pub fn is_zero(self) -> bool {
        self.value == 0.0
    }

    /// Sum of two measures of the same quantity.
    pub fn add(self, other: Self) -> MeasureResult<Self> {
        Self::of(self.value + other.value)
    }

    /// Difference of two measures. For non-negative quantities a result below zero is a domain error.
    pub fn subtract(self, other: Self) -> MeasureResult<Self> {
        Self::of(self.value - other.value)
    }

    /// Additive inverse. Fails for any non-zero value of a non-negative quantity.
    pub fn negate(self) -> MeasureResult<Self> {
        Self::of(-self.value)
    }

    /// Multiplies by a plain scalar factor.
    pub fn scale(self, factor: f64) -> MeasureResult<Self> {
        Self::of(self.value * factor)
    }

    /// Divides by a plain scalar divisor.
    pub fn div_scalar(self, divisor: f64) -> MeasureResult<Self> {
        if divisor == 0.0 {
            return Err(MeasureError::DivisionByZero);
        }
        Self::of(self.value / divisor)
    }

    /// Absolute value.
    pub fn abs(self) -> MeasureResult<Self> {
        Self::of(self.value.abs())
    }

    /// Dimensionless ratio `self / other` of two measures of the same quantity.
    pub fn ratio_to(self, other: Self) -> MeasureResult<Measure<Scalar>> {
        if other.value == 0.0 {
            return Err(MeasureError::DivisionByZero);
        }
        Measure::of(self.value / other.value)
    }

    /// Product with a measure of any quantity; the result family is resolved through `registry`.
    ///
    /// ```rust
    /// use measure_core::charge::Charge;
    /// use measure_core::current::Currents;
    /// use measure_core::time::Times;
    /// use measure_core::FamilyRegistry;
    ///
    /// let q = Currents::of(2.0).unwrap()
    ///     .multiply(Times::of(3.0).unwrap(), FamilyRegistry::standard())
    ///     .unwrap();
    /// assert!(q.is::<Charge>());
    /// assert_eq!(q.downcast::<Charge>().unwrap().value(), 6.0);
    /// ```
    pub fn multiply<R: Quantity>(
        self,
        other: Measure<R>,
        registry: &FamilyRegistry,
    ) -> MeasureResult<Dimensioned> {
        let family = Q::FAMILY
            .checked_combine(R::FAMILY, FamilyOp::Add)
            .ok_or(MeasureError::overflow(Q::FAMILY))?;
        registry.resolve(family, self.value * other.value())
    }

    /// Quotient by a measure of any quantity; the result family is resolved through `registry`.
    pub fn divide<R: Quantity>(
        self,
        other: Measure<R>,
        registry: &FamilyRegistry,
    ) -> MeasureResult<Dimensioned> {
        if other.value() == 0.0 {
            return Err(MeasureError::DivisionByZero);
        }
        let family = Q::FAMILY
            .checked_combine(R::FAMILY, FamilyOp::Subtract)
            .ok_or(MeasureError::overflow(Q::FAMILY))?;
        registry.resolve(family, self.value / other.value())
    }

    /// Integer power; the result family is `Q::FAMILY` scaled by `exponent`.
    pub fn powi(self, exponent: i32, registry: &FamilyRegistry) -> MeasureResult<Dimensioned> {
        if exponent < 0 && self.value == 0.0 {
            return Err(MeasureError::DivisionByZero);
        }
        let family = Q::FAMILY
            .checked_scale(exponent)
            .ok_or(MeasureError::overflow(Q::FAMILY))?;
        registry.resolve(family, self.value.powi(exponent))
    }

    /// Runtime-tagged copy carrying `Q`'s descriptor.
    pub fn to_dimensioned(self) -> Dimensioned {
        Dimensioned::from_measure(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Core trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<Q: Quantity> Clone for Measure<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: Quantity> Copy for Measure<Q> {}

impl<Q: Quantity> fmt::Debug for Measure<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Measure")
            .field("quantity", &Q::NAME)
            .field("value", &self.value)
            .finish()
    }
}

impl<Q: Quantity> fmt::Display for Measure<Q> {
    /// `<value> <canonical symbol>`; dimensionless measures print the bare number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.value)?,
            None => write!(f, "{}", self.value)?,
        }
        let symbol = Q::CANONICAL.symbol();
        if !symbol.is_empty() {
            write!(f, " {}", symbol)?;
        }
        Ok(())
    }
}

impl<Q: Quantity> Default for Measure<Q> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<Q: Quantity> PartialEq for Measure<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

// Values are finite and -0.0 is normalized on construction.
impl<Q: Quantity> Eq for Measure<Q> {}

impl<Q: Quantity> PartialOrd for Measure<Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Q: Quantity> Ord for Measure<Q> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl<Q: Quantity> Hash for Measure<Q> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}

impl<Q: Quantity> TryFrom<Dimensioned> for Measure<Q> {
    type Error = MeasureError;

    fn try_from(value: Dimensioned) -> MeasureResult<Self> {
        value.downcast::<Q>()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<Q: Quantity> Add for Measure<Q> {
    type Output = MeasureResult<Self>;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Measure::add(self, rhs)
    }
}

impl<Q: Quantity> Sub for Measure<Q> {
    type Output = MeasureResult<Self>;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<Q: Quantity> Neg for Measure<Q> {
    type Output = MeasureResult<Self>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<Q: Quantity> Mul<f64> for Measure<Q> {
    type Output = MeasureResult<Self>;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl<Q: Quantity> Mul<Measure<Q>> for f64 {
    type Output = MeasureResult<Measure<Q>>;
    #[inline]
    fn mul(self, rhs: Measure<Q>) -> Self::Output {
        rhs.scale(self)
    }
}

impl<Q: Quantity> Div<f64> for Measure<Q> {
    type Output = MeasureResult<Self>;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.div_scalar(rhs)
    }
}

impl<Q: Quantity> Mul<Measure<Scalar>> for Measure<Q> {
    type Output = MeasureResult<Self>;
    #[inline]
    fn mul(self, rhs: Measure<Scalar>) -> Self::Output {
        self.scale(rhs.value())
    }
}

impl<Q: Quantity> Div<Measure<Scalar>> for Measure<Q> {
    type Output = MeasureResult<Self>;
    #[inline]
    fn div(self, rhs: Measure<Scalar>) -> Self::Output {
        self.div_scalar(rhs.value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

impl<Q: Quantity> Serialize for Measure<Q> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, Q: Quantity> Deserialize<'de> for Measure<Q> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Measure::of(value).map_err(serde::de::Error::custom)
    }
}

/// Serde helper module for serializing measures together with their unit symbol.
///
/// Use it with `#[serde(with = "...")]` for self-describing payloads. Values are written in canonical units with the
/// canonical symbol. On input the unit may be any symbol of the quantity and the value is converted from it; a
/// missing unit means canonical.
///
/// ```rust
/// use measure_core::length::Lengths;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Span {
///     #[serde(with = "measure_core::serde_with_unit")]
///     width: Lengths, // {"value": 2.0, "unit": "m"}, {"value": 2000.0, "unit": "mm"} on input
///     depth: Lengths, // 3.0
/// }
/// ```
pub mod serde_with_unit {
    use super::*;
    use serde::de::Error as _;

    #[derive(Serialize)]
    #[serde(rename = "Measure")]
    struct Tagged {
        value: f64,
        unit: &'static str,
    }

    #[derive(Deserialize)]
    #[serde(rename = "Measure")]
    struct Written {
        value: f64,
        #[serde(default)]
        unit: Option<String>,
    }

    /// Writes `{ "value", "unit" }` in canonical units.
    pub fn serialize<Q, S>(measure: &Measure<Q>, serializer: S) -> Result<S::Ok, S::Error>
    where
        Q: Quantity,
        S: Serializer,
    {
        Tagged {
            value: measure.value(),
            unit: Q::CANONICAL.symbol(),
        }
        .serialize(serializer)
    }

    /// Reads `{ "value", "unit" }`, converting from whichever unit of `Q` the symbol names.
    pub fn deserialize<'de, Q, D>(deserializer: D) -> Result<Measure<Q>, D::Error>
    where
        Q: Quantity,
        D: Deserializer<'de>,
    {
        let written = Written::deserialize(deserializer)?;
        let units = match written.unit.as_deref() {
            None => Q::CANONICAL,
            Some(symbol) => Q::unit_for_symbol(symbol).ok_or_else(|| {
                D::Error::custom(format!("unknown unit '{symbol}' for {}", Q::NAME))
            })?,
        };
        Measure::from_units(written.value, &units).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::{Area, Areas};
    use crate::charge::{Charge, Charges};
    use crate::current::{Current, Currents, AMPERES, MILLIAMPERES};
    use crate::error::DomainViolation;
    use crate::length::Lengths;
    use crate::scalar::Scalars;
    use crate::temperature::{Temperatures, CELSIUS};
    use crate::time::{Times, HOURS};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn registry() -> &'static FamilyRegistry {
        FamilyRegistry::standard()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn amperes_projection_is_identity() {
        let i = Currents::of(5.0).unwrap();
        assert_eq!(i.in_units(&AMPERES), 5.0);
        assert_eq!(i.value(), 5.0);
        assert_eq!(i.family(), Current::FAMILY);
    }

    #[test]
    fn construction_rejects_non_finite() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Times::of(v),
                Err(MeasureError::Domain(DomainViolation::NonFinite { .. }))
            ));
        }
    }

    #[test]
    fn non_negative_rejects_negative_current() {
        assert_eq!(
            Currents::of(-1.0),
            Err(MeasureError::Domain(DomainViolation::Negative {
                quantity: "current",
                value: -1.0,
            }))
        );
        assert!(Currents::of(0.0).is_ok());
    }

    #[test]
    fn from_units_converts_to_canonical() {
        let i = Currents::from_units(250.0, &MILLIAMPERES).unwrap();
        assert_relative_eq!(i.value(), 0.25);
        assert_relative_eq!(i.in_units(&MILLIAMPERES), 250.0);
    }

    #[test]
    fn affine_units_are_validated_in_canonical_space() {
        let t = Temperatures::from_units(-40.0, &CELSIUS).unwrap();
        assert_relative_eq!(t.value(), 233.15, epsilon = 1e-12);
        assert!(Temperatures::from_units(-300.0, &CELSIUS).is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Same-family arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_currents() {
        let a = Currents::of(2.0).unwrap();
        let b = Currents::of(3.0).unwrap();
        assert_eq!((a + b).unwrap().value(), 5.0);
        assert_eq!(a.add(b).unwrap(), Currents::of(5.0).unwrap());
    }

    #[test]
    fn non_negative_underflow_is_domain_error() {
        let a = Currents::of(2.0).unwrap();
        let b = Currents::of(3.0).unwrap();
        assert!(matches!(
            a - b,
            Err(MeasureError::Domain(DomainViolation::Negative { .. }))
        ));
        assert_eq!((b - a).unwrap().value(), 1.0);
        assert!(a.negate().is_err());
    }

    #[test]
    fn unrestricted_negation() {
        let t = Times::of(4.0).unwrap();
        assert_eq!((-t).unwrap().value(), -4.0);
        assert_eq!(t.negate().unwrap().abs().unwrap(), t);
    }

    #[test]
    fn scalar_factors() {
        let t = Times::of(4.0).unwrap();
        assert_eq!((t * 2.5).unwrap().value(), 10.0);
        assert_eq!((2.5 * t).unwrap().value(), 10.0);
        assert_eq!((t / 8.0).unwrap().value(), 0.5);
        assert_eq!(t / 0.0, Err(MeasureError::DivisionByZero));
        assert!(Times::of(f64::MAX).unwrap().scale(10.0).is_err());
    }

    #[test]
    fn divide_current_by_dimensionless_scalar() {
        let i = Currents::of(10.0).unwrap();
        let two = Scalars::of(2.0).unwrap();
        let half: Measure<Current> = (i / two).unwrap();
        assert_eq!(half.value(), 5.0);
        assert_eq!((i * two).unwrap().value(), 20.0);
        assert_eq!(i / Scalars::ZERO, Err(MeasureError::DivisionByZero));
    }

    #[test]
    fn ratio_of_same_quantity_is_scalar() {
        let a = Lengths::of(3.0).unwrap();
        let b = Lengths::of(12.0).unwrap();
        assert_eq!(a.ratio_to(b).unwrap().value(), 0.25);
        assert_eq!(a.ratio_to(Lengths::ZERO), Err(MeasureError::DivisionByZero));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn total_order_by_canonical_value() {
        let small = Currents::from_units(500.0, &MILLIAMPERES).unwrap();
        let large = Currents::of(1.0).unwrap();
        assert!(small < large);
        assert_eq!(small.max(large), large);
        assert_eq!(small.min(large), small);
        let mut values = vec![large, small, Currents::ZERO];
        values.sort();
        assert_eq!(values, vec![Currents::ZERO, small, large]);
    }

    #[test]
    fn negative_zero_equals_zero() {
        let a = Times::of(-0.0).unwrap();
        assert_eq!(a, Times::ZERO);
        assert_eq!(a.cmp(&Times::ZERO), Ordering::Equal);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Cross-family arithmetic through the registry
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn current_times_time_resolves_to_charge() {
        let i = Currents::of(2.0).unwrap();
        let t = Times::from_units(1.0, &HOURS).unwrap();
        let q = i.multiply(t, registry()).unwrap();
        assert!(q.is::<Charge>());
        let charge: Charges = q.downcast().unwrap();
        assert_eq!(charge.value(), 7200.0);
    }

    #[test]
    fn length_squared_is_area() {
        let l = Lengths::of(3.0).unwrap();
        let a = l.powi(2, registry()).unwrap();
        assert!(a.is::<Area>());
        assert_eq!(a.value(), 9.0);
    }

    #[test]
    fn exponent_overflow_is_an_error() {
        let area = Areas::of(3.0).unwrap();
        assert_eq!(
            area.powi(i32::MAX, registry()),
            Err(MeasureError::ExponentOverflow {
                family: Area::FAMILY,
            })
        );
        assert!(Lengths::of(2.0).unwrap().powi(-3, registry()).is_ok());
    }

    #[test]
    fn divide_by_zero_measure_fails() {
        let q = Charges::of(1.0).unwrap();
        assert_eq!(
            q.divide(Times::ZERO, registry()),
            Err(MeasureError::DivisionByZero)
        );
        assert_eq!(
            Times::ZERO.powi(-1, registry()),
            Err(MeasureError::DivisionByZero)
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display and serde
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_formats() {
        assert_eq!(Currents::of(1.5).unwrap().to_string(), "1.5 A");
        assert_eq!(format!("{:.2}", Lengths::of(1.0).unwrap()), "1.00 m");
        assert_eq!(Scalars::of(42.0).unwrap().to_string(), "42");
    }

    #[test]
    fn serde_raw_value_round_trip() {
        let i = Currents::of(2.5).unwrap();
        let json = serde_json::to_string(&i).unwrap();
        assert_eq!(json, "2.5");
        let back: Currents = serde_json::from_str(&json).unwrap();
        assert_eq!(back, i);
        assert!(serde_json::from_str::<Currents>("-1.0").is_err());
    }

    #[test]
    fn serde_with_unit_resolves_symbol() {
        #[derive(Debug, Serialize, Deserialize)]
        struct Wire {
            #[serde(with = "crate::serde_with_unit")]
            current: Currents,
        }

        let json = serde_json::to_string(&Wire {
            current: Currents::of(3.0).unwrap(),
        })
        .unwrap();
        assert_eq!(json, r#"{"current":{"value":3.0,"unit":"A"}}"#);

        let ok: Wire = serde_json::from_str(r#"{"current":{"value":1.0}}"#).unwrap();
        assert_eq!(ok.current.value(), 1.0);

        let milli: Wire =
            serde_json::from_str(r#"{"current":{"value":1500.0,"unit":"mA"}}"#).unwrap();
        assert_relative_eq!(milli.current.value(), 1.5, max_relative = 1e-12);

        let err = serde_json::from_str::<Wire>(r#"{"current":{"value":1.0,"unit":"s"}}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("unknown unit 's' for current"));

        let negative = serde_json::from_str::<Wire>(r#"{"current":{"value":-1.0,"unit":"mA"}}"#);
        assert!(negative.is_err());
    }

    #[test]
    fn serde_with_unit_converts_affine_units() {
        #[derive(Debug, Deserialize)]
        struct Reading {
            #[serde(with = "crate::serde_with_unit")]
            ambient: Temperatures,
        }

        let r: Reading = serde_json::from_str(r#"{"ambient":{"value":25.0,"unit":"°C"}}"#).unwrap();
        assert_relative_eq!(r.ambient.value(), 298.15, max_relative = 1e-12);
        assert_relative_eq!(r.ambient.in_units(&CELSIUS), 25.0, max_relative = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_units_round_trip(v in 0.0..1e9f64) {
            let i = Currents::from_units(v, &MILLIAMPERES).unwrap();
            let back = Currents::from_units(i.in_units(&MILLIAMPERES), &MILLIAMPERES).unwrap();
            prop_assert!((back.value() - i.value()).abs() <= 1e-12 * i.value().max(1.0));
        }

        #[test]
        fn prop_non_negative_construction(v in -1e9..1e9f64) {
            prop_assert_eq!(Currents::of(v).is_ok(), v >= 0.0);
        }

        #[test]
        fn prop_add_then_subtract(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let ma = Times::of(a).unwrap();
            let mb = Times::of(b).unwrap();
            let back = (ma + mb).unwrap().subtract(mb).unwrap();
            prop_assert!((back.value() - a).abs() < 1e-6);
        }
    }
}
