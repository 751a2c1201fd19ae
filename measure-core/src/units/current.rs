//! Electric current.
//!
//! The canonical unit is [`AMPERES`]. Current is a non-negative quantity: constructing a negative current, or
//! subtracting a larger current from a smaller one, is a domain error.
//!
//! ```rust
//! use measure_core::current::{Currents, AMPERES, MILLIAMPERES};
//!
//! let i = Currents::of(5.0).unwrap();
//! assert_eq!(i.in_units(&AMPERES), 5.0);
//! assert_eq!(i.in_units(&MILLIAMPERES), 5_000.0);
//! assert!(Currents::of(-1.0).is_err());
//! ```

use crate::{Family, Measure, NonNegative, Units};
use measure_derive::Quantity;

/// Electric current (`A`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Quantity)]
#[quantity(
    name = "current",
    family = Family::DIMENSIONLESS.current(1),
    canonical = AMPERES,
    units = UNITS,
    restriction = NonNegative
)]
pub struct Current;
/// A measure of electric current.
pub type Currents = Measure<Current>;

/// Ampere (canonical).
pub const AMPERES: Units<Current> = Units::canonical("A", "units.current.ampere");
/// Milliampere: `1 mA = 1e-3 A`.
pub const MILLIAMPERES: Units<Current> = Units::scaled("mA", "units.current.milliampere", 1e-3);
/// Microampere: `1 µA = 1e-6 A`.
pub const MICROAMPERES: Units<Current> = Units::scaled("µA", "units.current.microampere", 1e-6);
/// Kiloampere: `1 kA = 1e3 A`.
pub const KILOAMPERES: Units<Current> = Units::scaled("kA", "units.current.kiloampere", 1e3);

/// Every predefined current unit.
pub const UNITS: &[Units<Current>] = &[AMPERES, MILLIAMPERES, MICROAMPERES, KILOAMPERES];
