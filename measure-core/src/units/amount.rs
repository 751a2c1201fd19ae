//! Amount of substance.

use crate::{Family, Measure, NonNegative, Units};
use measure_derive::Quantity;

/// Amount of substance (`mol`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Quantity)]
#[quantity(
    name = "amount",
    family = Family::DIMENSIONLESS.amount(1),
    canonical = MOLES,
    units = UNITS,
    restriction = NonNegative
)]
pub struct Amount;
/// A measure of amount of substance.
pub type Amounts = Measure<Amount>;

/// Mole (canonical).
pub const MOLES: Units<Amount> = Units::canonical("mol", "units.amount.mole");
/// Millimole.
pub const MILLIMOLES: Units<Amount> = Units::scaled("mmol", "units.amount.millimole", 1e-3);
/// Kilomole.
pub const KILOMOLES: Units<Amount> = Units::scaled("kmol", "units.amount.kilomole", 1e3);

/// Every predefined amount unit.
pub const UNITS: &[Units<Amount>] = &[MOLES, MILLIMOLES, KILOMOLES];
