//! Core type system for dimension-checked physical measures.
//!
//! `measure-core` models physical values the way a dimensional-analysis engine does:
//!
//! - A [`Family`] is a vector of integer exponents over the seven SI base dimensions. Multiplying values adds their
//!   exponents, dividing subtracts them.
//! - A *quantity* is a zero-sized marker type implementing [`Quantity`]. It owns exactly one family, one canonical SI
//!   unit and a [`Restriction`] policy (for example non-negative current).
//! - [`Units<Q>`] is a named [`Converter`] between a display unit and the canonical unit of `Q`.
//! - A [`Measure<Q>`] is a finite `f64` stored in canonical units, validated against `Q`'s restriction at every
//!   construction.
//! - Cross-family arithmetic produces a [`Dimensioned`] whose family is looked up in a [`FamilyRegistry`] to find the
//!   quantity it belongs to.
//!
//! Most users should depend on `measure` (the facade crate).
//!
//! # Quick start
//!
//! Convert between units of one quantity:
//!
//! ```rust
//! use measure_core::current::{Currents, MILLIAMPERES};
//!
//! let i = MILLIAMPERES.measure(1_500.0).unwrap();
//! assert_eq!(i, Currents::of(1.5).unwrap());
//! assert_eq!(i.to_string(), "1.5 A");
//! ```
//!
//! Multiply across families and let the registry name the result:
//!
//! ```rust
//! use measure_core::charge::Charge;
//! use measure_core::current::Currents;
//! use measure_core::time::Times;
//! use measure_core::FamilyRegistry;
//!
//! let q = Currents::of(2.0)
//!     .unwrap()
//!     .multiply(Times::of(3.0).unwrap(), FamilyRegistry::standard())
//!     .unwrap();
//! assert!(q.is::<Charge>());
//! assert_eq!(q.value(), 6.0);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use measure_core::current::Currents;
//! use measure_core::time::Times;
//!
//! let _ = Currents::of(1.0).unwrap().add(Times::of(1.0).unwrap());
//! ```
//!
//! # Panics and errors
//!
//! Operations that can produce an illegal value return [`MeasureResult`]. A non-finite result, a value outside the
//! quantity's restriction, a family mismatch between runtime-tagged values and a division by zero are all reported as
//! [`MeasureError`] variants instead of being stored.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod config;
mod converter;
mod dimensioned;
mod error;
mod family;
mod macros;
mod measure;
mod names;
mod quantity;
mod registry;
mod restriction;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use config::{MeasureConfig, RegistrySettings};
pub use converter::Converter;
pub use dimensioned::Dimensioned;
pub use error::{ensure_finite, DomainViolation, MeasureError, MeasureResult, RegistrationError};
pub use family::{BaseDimension, Family, FamilyOp, NDIMS};
pub use measure::{serde_with_unit, Measure};
pub use names::{NameProvider, NoNames, StaticNames};
pub use quantity::{Quantity, QuantityKind};
pub use registry::{FamilyRegistry, RegistryBuilder, UnresolvedPolicy};
pub use restriction::{NonNegative, Restriction, RestrictionKind, Unrestricted};
pub use unit::Units;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined quantities
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined quantities, one module each.
///
/// These are defined in `measure-core` so they can implement the typed product operators without running into Rust's
/// orphan rules.
pub mod units;

pub use units::amount;
pub use units::area;
pub use units::charge;
pub use units::current;
pub use units::frequency;
pub use units::length;
pub use units::luminous;
pub use units::mass;
pub use units::scalar;
pub use units::temperature;
pub use units::time;
pub use units::velocity;
