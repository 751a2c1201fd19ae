//! Frequency (`s⁻¹`).

use crate::{Family, Measure, NonNegative, Units};
use measure_derive::Quantity;

/// Frequency (`Hz`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Quantity)]
#[quantity(
    name = "frequency",
    family = Family::DIMENSIONLESS.time(-1),
    canonical = HERTZ,
    units = UNITS,
    restriction = NonNegative
)]
pub struct Frequency;
/// A measure of frequency.
pub type Frequencies = Measure<Frequency>;

/// Hertz (canonical).
pub const HERTZ: Units<Frequency> = Units::canonical("Hz", "units.frequency.hertz");
/// Kilohertz.
pub const KILOHERTZ: Units<Frequency> = Units::scaled("kHz", "units.frequency.kilohertz", 1e3);
/// Megahertz.
pub const MEGAHERTZ: Units<Frequency> = Units::scaled("MHz", "units.frequency.megahertz", 1e6);
/// Revolutions (or events) per minute.
pub const PER_MINUTE: Units<Frequency> =
    Units::scaled("min⁻¹", "units.frequency.per_minute", 1.0 / 60.0);

/// Every predefined frequency unit.
pub const UNITS: &[Units<Frequency>] = &[HERTZ, KILOHERTZ, MEGAHERTZ, PER_MINUTE];
