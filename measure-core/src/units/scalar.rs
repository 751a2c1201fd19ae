//! Dimensionless scalars.
//!
//! [`Scalar`] owns the all-zero family. Multiplying or dividing any measure by a scalar keeps the other operand's
//! quantity, and the ratio of two measures of the same quantity is a scalar.
//!
//! ```rust
//! use measure_core::scalar::{Scalars, PERCENT};
//!
//! let half = PERCENT.measure(50.0).unwrap();
//! assert_eq!(half.value(), 0.5);
//! assert_eq!(half, Scalars::of(0.5).unwrap());
//! ```

use crate::{Family, Measure, Units};
use measure_derive::Quantity;

/// Dimensionless quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Quantity)]
#[quantity(
    name = "scalar",
    family = Family::DIMENSIONLESS,
    canonical = UNIT,
    units = UNITS
)]
pub struct Scalar;
/// A dimensionless measure.
pub type Scalars = Measure<Scalar>;

/// Plain number (canonical).
pub const UNIT: Units<Scalar> = Units::canonical("", "units.scalar.unit");
/// Percent: `1 % = 0.01`.
pub const PERCENT: Units<Scalar> = Units::scaled("%", "units.scalar.percent", 0.01);
/// Per mille: `1 ‰ = 0.001`.
pub const PER_MILLE: Units<Scalar> = Units::scaled("‰", "units.scalar.per_mille", 0.001);
/// Parts per million.
pub const PPM: Units<Scalar> = Units::scaled("ppm", "units.scalar.ppm", 1e-6);

/// Every predefined scalar unit.
pub const UNITS: &[Units<Scalar>] = &[UNIT, PERCENT, PER_MILLE, PPM];
