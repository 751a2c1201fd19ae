//! Area (`m²`).

use crate::{Family, Measure, NonNegative, Units};
use measure_derive::Quantity;

/// Area (`m²`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Quantity)]
#[quantity(
    name = "area",
    family = Family::DIMENSIONLESS.length(2),
    canonical = SQUARE_METERS,
    units = UNITS,
    restriction = NonNegative
)]
pub struct Area;
/// A measure of area.
pub type Areas = Measure<Area>;

/// Square meter (canonical).
pub const SQUARE_METERS: Units<Area> = Units::canonical("m²", "units.area.square_meter");
/// Square centimeter.
pub const SQUARE_CENTIMETERS: Units<Area> =
    Units::scaled("cm²", "units.area.square_centimeter", 1e-4);
/// Square kilometer.
pub const SQUARE_KILOMETERS: Units<Area> = Units::scaled("km²", "units.area.square_kilometer", 1e6);
/// Hectare: `10⁴ m²`.
pub const HECTARES: Units<Area> = Units::scaled("ha", "units.area.hectare", 1e4);

/// Every predefined area unit.
pub const UNITS: &[Units<Area>] = &[
    SQUARE_METERS,
    SQUARE_CENTIMETERS,
    SQUARE_KILOMETERS,
    HECTARES,
];
