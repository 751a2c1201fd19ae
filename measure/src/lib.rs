//! Dimension-checked physical measures.
//!
//! `measure` is the user-facing crate in this workspace. It re-exports the full API from `measure-core` plus the
//! predefined quantity types and their `Measure` aliases at the crate root.
//!
//! A value is always either a [`Measure<Q>`], whose quantity is known at compile time, or a [`Dimensioned`], whose
//! family travels with it at run time. Both store a finite `f64` in the quantity's canonical SI unit.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible quantities (you can't add amperes to seconds).
//! - Enforces quantity restrictions such as non-negative current or temperature above absolute zero.
//! - Names the result of cross-family arithmetic through a registry (`A × s` is a charge).
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: measures are backed by `f64`.
//! - Parsing unit expressions from strings.
//! - Symbolic simplification of unit names; anonymous results print their family (`m·kg`).
//!
//! # Quick start
//!
//! ```rust
//! use measure::{Charge, Currents, FamilyRegistry, Times, HOURS, MILLIAMPERES, MILLIAMPERE_HOURS};
//!
//! let i = MILLIAMPERES.measure(500.0).unwrap();
//! let t = HOURS.measure(2.0).unwrap();
//!
//! // Typed product: the result quantity is known statically.
//! let q = (i * t).unwrap();
//! assert!((q.in_units(&MILLIAMPERE_HOURS) - 1_000.0).abs() < 1e-9);
//!
//! // Registry product: the result quantity is looked up by family.
//! let d = i.multiply(t, FamilyRegistry::standard()).unwrap();
//! assert!(d.is::<Charge>());
//! # let _ = (Currents::ZERO, Times::ZERO);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use measure::{Currents, Times};
//!
//! let i = Currents::of(1.0).unwrap();
//! let t = Times::of(1.0).unwrap();
//! let _ = i + t; // cannot add different quantities
//! ```
//!
//! # Modules
//!
//! Quantities live in one module each (also re-exported at the crate root):
//!
//! - `measure::scalar`, `measure::current`, `measure::charge`, `measure::time`, `measure::frequency`
//! - `measure::length`, `measure::area`, `measure::velocity`, `measure::mass`, `measure::temperature`
//! - `measure::amount`, `measure::luminous`
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use measure_core::*;

pub use measure_core::units::amount::{Amount, Amounts, KILOMOLES, MILLIMOLES, MOLES};
pub use measure_core::units::area::{
    Area, Areas, HECTARES, SQUARE_CENTIMETERS, SQUARE_KILOMETERS, SQUARE_METERS,
};
pub use measure_core::units::charge::{
    Charge, Charges, AMPERE_HOURS, COULOMBS, MILLIAMPERE_HOURS, MILLICOULOMBS,
};
pub use measure_core::units::current::{
    Current, Currents, AMPERES, KILOAMPERES, MICROAMPERES, MILLIAMPERES,
};
pub use measure_core::units::frequency::{
    Frequencies, Frequency, HERTZ, KILOHERTZ, MEGAHERTZ, PER_MINUTE,
};
pub use measure_core::units::length::{
    Length, Lengths, CENTIMETERS, FEET, INCHES, KILOMETERS, METERS, MICROMETERS, MILES,
    MILLIMETERS, YARDS,
};
pub use measure_core::units::luminous::{
    LuminousIntensities, LuminousIntensity, CANDELAS, MILLICANDELAS,
};
pub use measure_core::units::mass::{
    Mass, Masses, GRAMS, KILOGRAMS, MILLIGRAMS, OUNCES, POUNDS, TONNES,
};
pub use measure_core::units::scalar::{Scalar, Scalars, PERCENT, PER_MILLE, PPM, UNIT};
pub use measure_core::units::temperature::{
    Temperature, Temperatures, CELSIUS, FAHRENHEIT, KELVIN, RANKINE,
};
pub use measure_core::units::time::{
    Time, Times, DAYS, HOURS, MICROSECONDS, MILLISECONDS, MINUTES, SECONDS,
};
pub use measure_core::units::velocity::{
    Velocities, Velocity, KILOMETERS_PER_HOUR, KNOTS, METERS_PER_SECOND, MILES_PER_HOUR,
};
