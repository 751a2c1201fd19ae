//! Thermodynamic temperature.
//!
//! The canonical unit is [`KELVIN`]. Celsius and Fahrenheit are affine scales, so converting them involves an offset
//! as well as a factor. Temperature is non-negative in kelvin: a reading below absolute zero is a domain error in any
//! unit.
//!
//! ```rust
//! use measure_core::temperature::{CELSIUS, FAHRENHEIT, KELVIN};
//!
//! let boiling = CELSIUS.measure(100.0).unwrap();
//! assert!((boiling.in_units(&KELVIN) - 373.15).abs() < 1e-9);
//! assert!((boiling.in_units(&FAHRENHEIT) - 212.0).abs() < 1e-9);
//! assert!(CELSIUS.measure(-300.0).is_err());
//! ```

use crate::{Converter, Family, Measure, NonNegative, Units};
use measure_derive::Quantity;

/// Thermodynamic temperature (`K`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Quantity)]
#[quantity(
    name = "temperature",
    family = Family::DIMENSIONLESS.temperature(1),
    canonical = KELVIN,
    units = UNITS,
    restriction = NonNegative
)]
pub struct Temperature;
/// A measure of thermodynamic temperature.
pub type Temperatures = Measure<Temperature>;

/// Kelvin (canonical).
pub const KELVIN: Units<Temperature> = Units::canonical("K", "units.temperature.kelvin");
/// Degree Celsius: `K = °C + 273.15`.
pub const CELSIUS: Units<Temperature> = Units::with_converter(
    "°C",
    "units.temperature.celsius",
    Converter::affine(1.0, 273.15),
);
/// Degree Fahrenheit: `K = (°F + 459.67) × 5/9`.
pub const FAHRENHEIT: Units<Temperature> = Units::with_converter(
    "°F",
    "units.temperature.fahrenheit",
    Converter::affine(5.0 / 9.0, 459.67 * 5.0 / 9.0),
);
/// Degree Rankine: `K = °R × 5/9`.
pub const RANKINE: Units<Temperature> = Units::scaled("°R", "units.temperature.rankine", 5.0 / 9.0);

/// Every predefined temperature unit.
pub const UNITS: &[Units<Temperature>] = &[KELVIN, CELSIUS, FAHRENHEIT, RANKINE];
