//! Linear converters between an external unit and the canonical (SI) representation.

use serde::{Deserialize, Serialize};

/// Affine transform `canonical = value * scale + offset`.
///
/// Most units are purely multiplicative (`offset == 0`); temperature scales such as degrees Celsius need the offset.
/// A converter must be invertible: `scale` finite and non-zero, `offset` finite. Definitions that break this are a
/// bug in the unit table and are caught by [`Converter::is_invertible`] in tests.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Converter {
    scale: f64,
    #[serde(default)]
    offset: f64,
}

impl Converter {
    /// Converter of the canonical unit itself.
    pub const IDENTITY: Converter = Converter {
        scale: 1.0,
        offset: 0.0,
    };

    /// `1 unit == scale canonical units`.
    pub const fn linear(scale: f64) -> Self {
        Self { scale, offset: 0.0 }
    }

    /// `value unit == value * scale + offset canonical units`.
    pub const fn affine(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// Canonical units per display unit.
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Canonical value of a display-unit zero.
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Display-unit value to canonical units.
    #[inline]
    pub fn to_canonical(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    /// Canonical value to display units.
    #[inline]
    pub fn from_canonical(&self, value: f64) -> f64 {
        (value - self.offset) / self.scale
    }

    /// `true` for the canonical unit itself.
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.offset == 0.0
    }

    /// `true` if `from_canonical` undoes `to_canonical` for every finite value.
    pub fn is_invertible(&self) -> bool {
        self.scale.is_finite() && self.scale != 0.0 && self.offset.is_finite()
    }

    /// Converter taking values of `self`'s unit straight into `target`'s unit.
    ///
    /// `self.then_into(target).to_canonical(x) == target.from_canonical(self.to_canonical(x))`.
    pub fn then_into(&self, target: &Converter) -> Converter {
        Converter {
            scale: self.scale / target.scale,
            offset: (self.offset - target.offset) / target.scale,
        }
    }

    /// Absolute error of a `to_canonical` / `from_canonical` round trip at `value`.
    pub fn round_trip_error(&self, value: f64) -> f64 {
        (self.from_canonical(self.to_canonical(value)) - value).abs()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const CELSIUS: Converter = Converter::affine(1.0, 273.15);
    const FAHRENHEIT: Converter = Converter::affine(5.0 / 9.0, 459.67 * 5.0 / 9.0);

    #[test]
    fn identity_is_noop() {
        assert!(Converter::IDENTITY.is_identity());
        assert_eq!(Converter::IDENTITY.to_canonical(5.0), 5.0);
        assert_eq!(Converter::IDENTITY.from_canonical(5.0), 5.0);
        assert_eq!(Converter::default(), Converter::IDENTITY);
    }

    #[test]
    fn linear_scaling() {
        let km = Converter::linear(1000.0);
        assert_eq!(km.to_canonical(1.5), 1500.0);
        assert_eq!(km.from_canonical(250.0), 0.25);
        assert!(!km.is_identity());
    }

    #[test]
    fn affine_temperature() {
        assert_relative_eq!(CELSIUS.to_canonical(0.0), 273.15);
        assert_relative_eq!(CELSIUS.from_canonical(373.15), 100.0, epsilon = 1e-12);
        assert_relative_eq!(FAHRENHEIT.to_canonical(32.0), 273.15, epsilon = 1e-12);
        assert_relative_eq!(FAHRENHEIT.from_canonical(373.15), 212.0, epsilon = 1e-9);
    }

    #[test]
    fn then_into_chains_through_canonical() {
        let direct = CELSIUS.then_into(&FAHRENHEIT);
        assert_relative_eq!(direct.to_canonical(100.0), 212.0, epsilon = 1e-9);
        assert_relative_eq!(direct.to_canonical(-40.0), -40.0, epsilon = 1e-9);

        let km_to_m = Converter::linear(1000.0).then_into(&Converter::IDENTITY);
        assert_eq!(km_to_m.to_canonical(2.0), 2000.0);
    }

    #[test]
    fn invertibility() {
        assert!(Converter::linear(1e-6).is_invertible());
        assert!(CELSIUS.is_invertible());
        assert!(!Converter::linear(0.0).is_invertible());
        assert!(!Converter::linear(f64::INFINITY).is_invertible());
        assert!(!Converter::affine(1.0, f64::NAN).is_invertible());
    }

    proptest! {
        #[test]
        fn prop_round_trip(scale in 1e-9..1e9f64, offset in -1e3..1e3f64, x in -1e6..1e6f64) {
            let c = Converter::affine(scale, offset);
            let back = c.from_canonical(c.to_canonical(x));
            let tolerance = 1e-6 * x.abs().max(1.0) * (1.0 + offset.abs() / scale);
            prop_assert!((back - x).abs() <= tolerance);
        }
    }
}
