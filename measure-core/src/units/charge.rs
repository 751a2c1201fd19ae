//! Electric charge (`A·s`).
//!
//! Charge is signed. Battery capacities are usually given in [`AMPERE_HOURS`] or [`MILLIAMPERE_HOURS`].

use crate::{Family, Measure, Units};
use measure_derive::Quantity;

/// Electric charge (`C`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Quantity)]
#[quantity(
    name = "charge",
    family = Family::DIMENSIONLESS.current(1).time(1),
    canonical = COULOMBS,
    units = UNITS
)]
pub struct Charge;
/// A measure of electric charge.
pub type Charges = Measure<Charge>;

/// Coulomb (canonical).
pub const COULOMBS: Units<Charge> = Units::canonical("C", "units.charge.coulomb");
/// Millicoulomb.
pub const MILLICOULOMBS: Units<Charge> = Units::scaled("mC", "units.charge.millicoulomb", 1e-3);
/// Ampere-hour: `1 A·h = 3600 C`.
pub const AMPERE_HOURS: Units<Charge> = Units::scaled("A·h", "units.charge.ampere_hour", 3_600.0);
/// Milliampere-hour: `1 mA·h = 3.6 C`.
pub const MILLIAMPERE_HOURS: Units<Charge> =
    Units::scaled("mA·h", "units.charge.milliampere_hour", 3.6);

/// Every predefined charge unit.
pub const UNITS: &[Units<Charge>] = &[COULOMBS, MILLICOULOMBS, AMPERE_HOURS, MILLIAMPERE_HOURS];
