//! Length.
//!
//! The canonical unit is [`METERS`]. Imperial units use their exact international definitions
//! (`1 in = 0.0254 m`, `1 mi = 1609.344 m`).
//!
//! ```rust
//! use measure_core::length::{KILOMETERS, MILES};
//!
//! let marathon = KILOMETERS.measure(42.195).unwrap();
//! assert!((marathon.in_units(&MILES) - 26.218_757).abs() < 1e-6);
//! ```

use crate::{Family, Measure, NonNegative, Units};
use measure_derive::Quantity;

/// Length (`m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Quantity)]
#[quantity(
    name = "length",
    family = Family::DIMENSIONLESS.length(1),
    canonical = METERS,
    units = UNITS,
    restriction = NonNegative
)]
pub struct Length;
/// A measure of length.
pub type Lengths = Measure<Length>;

/// Meter (canonical).
pub const METERS: Units<Length> = Units::canonical("m", "units.length.meter");
/// Kilometer.
pub const KILOMETERS: Units<Length> = Units::scaled("km", "units.length.kilometer", 1e3);
/// Centimeter.
pub const CENTIMETERS: Units<Length> = Units::scaled("cm", "units.length.centimeter", 1e-2);
/// Millimeter.
pub const MILLIMETERS: Units<Length> = Units::scaled("mm", "units.length.millimeter", 1e-3);
/// Micrometer.
pub const MICROMETERS: Units<Length> = Units::scaled("µm", "units.length.micrometer", 1e-6);
/// International inch.
pub const INCHES: Units<Length> = Units::scaled("in", "units.length.inch", 0.0254);
/// International foot: `12 in`.
pub const FEET: Units<Length> = Units::scaled("ft", "units.length.foot", 0.3048);
/// International yard: `3 ft`.
pub const YARDS: Units<Length> = Units::scaled("yd", "units.length.yard", 0.9144);
/// Statute mile: `1760 yd`.
pub const MILES: Units<Length> = Units::scaled("mi", "units.length.mile", 1_609.344);

/// Every predefined length unit.
pub const UNITS: &[Units<Length>] = &[
    METERS,
    KILOMETERS,
    CENTIMETERS,
    MILLIMETERS,
    MICROMETERS,
    INCHES,
    FEET,
    YARDS,
    MILES,
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn imperial_ladder() {
        assert_relative_eq!(FEET.convert_to(1.0, &INCHES), 12.0, max_relative = 1e-12);
        assert_relative_eq!(YARDS.convert_to(1.0, &FEET), 3.0, max_relative = 1e-12);
        assert_relative_eq!(MILES.convert_to(1.0, &YARDS), 1_760.0, max_relative = 1e-12);
    }

    #[test]
    fn metric_ladder() {
        assert_abs_diff_eq!(
            KILOMETERS.convert_to(1.0, &CENTIMETERS),
            1e5,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            MILLIMETERS.convert_to(1.0, &MICROMETERS),
            1e3,
            epsilon = 1e-9
        );
    }

    #[test]
    fn negative_length_rejected() {
        assert!(METERS.measure(-0.5).is_err());
        assert!(Lengths::of(0.0).is_ok());
    }

    proptest! {
        #[test]
        fn prop_inches_roundtrip(v in 0.0..1e9f64) {
            let l = INCHES.measure(v).unwrap();
            prop_assert!((l.in_units(&INCHES) - v).abs() <= 1e-9 * v.max(1.0));
        }
    }
}
