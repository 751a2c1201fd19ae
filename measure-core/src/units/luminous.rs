//! Luminous intensity.

use crate::{Family, Measure, NonNegative, Units};
use measure_derive::Quantity;

/// Luminous intensity (`cd`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Quantity)]
#[quantity(
    name = "luminous intensity",
    family = Family::DIMENSIONLESS.luminous(1),
    canonical = CANDELAS,
    units = UNITS,
    restriction = NonNegative
)]
pub struct LuminousIntensity;
/// A measure of luminous intensity.
pub type LuminousIntensities = Measure<LuminousIntensity>;

/// Candela (canonical).
pub const CANDELAS: Units<LuminousIntensity> = Units::canonical("cd", "units.luminous.candela");
/// Millicandela.
pub const MILLICANDELAS: Units<LuminousIntensity> =
    Units::scaled("mcd", "units.luminous.millicandela", 1e-3);

/// Every predefined luminous intensity unit.
pub const UNITS: &[Units<LuminousIntensity>] = &[CANDELAS, MILLICANDELAS];
