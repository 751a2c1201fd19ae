//! Mass.
//!
//! The canonical unit is [`KILOGRAMS`], the SI base unit. Avoirdupois units use the exact definition
//! `1 lb = 0.45359237 kg`.

use crate::{Family, Measure, NonNegative, Units};
use measure_derive::Quantity;

/// Mass (`kg`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Quantity)]
#[quantity(
    name = "mass",
    family = Family::DIMENSIONLESS.mass(1),
    canonical = KILOGRAMS,
    units = UNITS,
    restriction = NonNegative
)]
pub struct Mass;
/// A measure of mass.
pub type Masses = Measure<Mass>;

/// Kilogram (canonical).
pub const KILOGRAMS: Units<Mass> = Units::canonical("kg", "units.mass.kilogram");
/// Gram.
pub const GRAMS: Units<Mass> = Units::scaled("g", "units.mass.gram", 1e-3);
/// Milligram.
pub const MILLIGRAMS: Units<Mass> = Units::scaled("mg", "units.mass.milligram", 1e-6);
/// Tonne: `1000 kg`.
pub const TONNES: Units<Mass> = Units::scaled("t", "units.mass.tonne", 1e3);
/// Avoirdupois pound.
pub const POUNDS: Units<Mass> = Units::scaled("lb", "units.mass.pound", 0.453_592_37);
/// Avoirdupois ounce: `1/16 lb`.
pub const OUNCES: Units<Mass> = Units::scaled("oz", "units.mass.ounce", 0.453_592_37 / 16.0);

/// Every predefined mass unit.
pub const UNITS: &[Units<Mass>] = &[KILOGRAMS, GRAMS, MILLIGRAMS, TONNES, POUNDS, OUNCES];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn pound_in_ounces() {
        assert_relative_eq!(POUNDS.convert_to(1.0, &OUNCES), 16.0, max_relative = 1e-12);
    }

    #[test]
    fn tonne_in_grams() {
        assert_relative_eq!(TONNES.convert_to(2.5, &GRAMS), 2.5e6, max_relative = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_kg_to_g_scale(v in 0.0..1e9f64) {
            let m = Masses::of(v).unwrap();
            prop_assert!((m.in_units(&GRAMS) - v * 1e3).abs() <= 1e-9 * (v * 1e3).max(1.0));
        }
    }
}
