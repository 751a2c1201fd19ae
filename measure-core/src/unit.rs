//! Units of measurement bound to a quantity.

use core::fmt;
use core::marker::PhantomData;

use crate::converter::Converter;
use crate::error::MeasureResult;
use crate::family::Family;
use crate::measure::Measure;
use crate::names::NameProvider;
use crate::quantity::Quantity;

/// A display symbol plus a [`Converter`] into the canonical unit of quantity `Q`.
///
/// The quantity parameter ties every unit to exactly one [`Family`] at compile time, so projecting a
/// [`Measure<Q>`] into units of another quantity does not type-check:
///
/// ```compile_fail
/// use measure_core::current::Currents;
/// use measure_core::length::METERS;
///
/// let i = Currents::of(1.0).unwrap();
/// let _ = i.in_units(&METERS);
/// ```
///
/// Several units may exist per quantity; the canonical one (identity converter) is [`Quantity::CANONICAL`].
pub struct Units<Q> {
    converter: Converter,
    symbol: &'static str,
    key: &'static str,
    _quantity: PhantomData<fn() -> Q>,
}

impl<Q: Quantity> Units<Q> {
    /// Canonical (SI) unit: identity converter.
    pub const fn canonical(symbol: &'static str, key: &'static str) -> Self {
        Self::with_converter(symbol, key, Converter::IDENTITY)
    }

    /// Purely multiplicative unit: `1 symbol == scale` canonical units.
    pub const fn scaled(symbol: &'static str, key: &'static str, scale: f64) -> Self {
        Self::with_converter(symbol, key, Converter::linear(scale))
    }

    /// Affine unit: `v symbol == v * scale + offset` canonical units.
    pub const fn affine(symbol: &'static str, key: &'static str, scale: f64, offset: f64) -> Self {
        Self::with_converter(symbol, key, Converter::affine(scale, offset))
    }

    /// Unit with an explicit converter.
    pub const fn with_converter(
        symbol: &'static str,
        key: &'static str,
        converter: Converter,
    ) -> Self {
        Self {
            converter,
            symbol,
            key,
            _quantity: PhantomData,
        }
    }

    /// Conversion to the canonical unit.
    pub const fn converter(&self) -> Converter {
        self.converter
    }

    /// Built-in display symbol.
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Name-provider key for the symbol.
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Family of `Q`.
    pub const fn family(&self) -> Family {
        Q::FAMILY
    }

    /// `true` for the canonical unit of `Q`.
    pub fn is_canonical(&self) -> bool {
        self.converter.is_identity()
    }

    /// Value in these units to canonical units.
    #[inline]
    pub fn convert_to_canonical(&self, value: f64) -> f64 {
        self.converter.to_canonical(value)
    }

    /// Canonical value to these units.
    #[inline]
    pub fn convert_from_canonical(&self, value: f64) -> f64 {
        self.converter.from_canonical(value)
    }

    /// Converts a raw value expressed in `self` into `target` units.
    ///
    /// ```rust
    /// use measure_core::length::{KILOMETERS, MILES};
    ///
    /// let km = MILES.convert_to(1.0, &KILOMETERS);
    /// assert!((km - 1.609_344).abs() < 1e-12);
    /// ```
    pub fn convert_to(&self, value: f64, target: &Units<Q>) -> f64 {
        target.convert_from_canonical(self.convert_to_canonical(value))
    }

    /// Builds a measure from a value expressed in these units.
    pub fn measure(&self, value: f64) -> MeasureResult<Measure<Q>> {
        Measure::from_units(value, self)
    }

    /// Display symbol resolved through `names`, falling back to the built-in symbol.
    pub fn symbol_in(&self, names: &dyn NameProvider) -> String {
        names
            .lookup(self.key)
            .unwrap_or_else(|| self.symbol.to_string())
    }
}

impl<Q> Clone for Units<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q> Copy for Units<Q> {}

impl<Q> PartialEq for Units<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.converter == other.converter && self.symbol == other.symbol
    }
}

impl<Q> fmt::Debug for Units<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Units")
            .field("symbol", &self.symbol)
            .field("key", &self.key)
            .field("converter", &self.converter)
            .finish()
    }
}

impl<Q> fmt::Display for Units<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}
