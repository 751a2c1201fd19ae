//! Predefined quantities and their units.
//!
//! Every module defines one quantity marker type, a `Measure` alias for it, its unit constants and a `UNITS` slice
//! listing them. The families of the predefined quantities are pairwise distinct, so all of them fit in one registry
//! (see [`FamilyRegistry::standard`](crate::FamilyRegistry::standard)).
//!
//! Products and quotients whose result is one of these quantities are available as typed operators:
//!
//! ```rust
//! use measure_core::current::Currents;
//! use measure_core::time::HOURS;
//! use measure_core::charge::AMPERE_HOURS;
//!
//! let q = (Currents::of(2.0).unwrap() * HOURS.measure(1.5).unwrap()).unwrap();
//! assert!((q.in_units(&AMPERE_HOURS) - 3.0).abs() < 1e-12);
//! ```

use crate::error::RegistrationError;
use crate::impl_quantity_products;
use crate::quantity::Quantity;
use crate::registry::RegistryBuilder;

pub mod amount;
pub mod area;
pub mod charge;
pub mod current;
pub mod frequency;
pub mod length;
pub mod luminous;
pub mod mass;
pub mod scalar;
pub mod temperature;
pub mod time;
pub mod velocity;

use amount::Amount;
use area::Area;
use charge::Charge;
use current::Current;
use frequency::Frequency;
use length::Length;
use luminous::LuminousIntensity;
use mass::Mass;
use scalar::Scalar;
use temperature::Temperature;
use time::Time;
use velocity::Velocity;

/// Registers every predefined quantity with `builder`.
pub(crate) fn register_standard(builder: &mut RegistryBuilder) -> Result<(), RegistrationError> {
    builder.register_kind(Scalar::kind())?;
    builder.register_kind(Current::kind())?;
    builder.register_kind(Charge::kind())?;
    builder.register_kind(Time::kind())?;
    builder.register_kind(Frequency::kind())?;
    builder.register_kind(Length::kind())?;
    builder.register_kind(Area::kind())?;
    builder.register_kind(Velocity::kind())?;
    builder.register_kind(Mass::kind())?;
    builder.register_kind(Temperature::kind())?;
    builder.register_kind(Amount::kind())?;
    builder.register_kind(LuminousIntensity::kind())?;
    Ok(())
}

impl_quantity_products! {
    Current * Time => Charge,
    Time * Current => Charge,
    Charge / Time => Current,
    Charge / Current => Time,
    Length * Length => Area,
    Area / Length => Length,
    Length / Time => Velocity,
    Length / Velocity => Time,
    Velocity * Time => Length,
    Time * Velocity => Length,
    Frequency * Time => Scalar,
    Time * Frequency => Scalar,
    Scalar / Time => Frequency,
    Scalar / Frequency => Time,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FamilyRegistry, Units};
    use approx::assert_relative_eq;

    fn check_units<Q: Quantity>(units: &[Units<Q>]) {
        assert_eq!(Q::UNITS, units, "{} must expose its module units", Q::NAME);
        let canonical: Vec<_> = units.iter().filter(|u| u.is_canonical()).collect();
        assert_eq!(
            canonical.len(),
            1,
            "{} needs exactly one canonical unit",
            Q::NAME
        );
        assert_eq!(*canonical[0], Q::CANONICAL);

        for unit in units {
            assert!(
                unit.converter().is_invertible(),
                "{} is not invertible",
                unit.key()
            );
            assert!(unit.key().starts_with("units."));
            assert_eq!(Q::unit_for_symbol(unit.symbol()), Some(*unit));
            for v in [0.0, 1.0, 273.15, 1e6] {
                let back = unit.convert_from_canonical(unit.convert_to_canonical(v));
                assert!(
                    (back - v).abs() <= 1e-9 * v.abs().max(1.0),
                    "{} round trip of {v}",
                    unit.key()
                );
            }
        }

        let mut keys: Vec<_> = units.iter().map(|u| u.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(
            keys.len(),
            units.len(),
            "duplicate unit keys for {}",
            Q::NAME
        );
    }

    #[test]
    fn every_predefined_unit_is_well_formed() {
        check_units(scalar::UNITS);
        check_units(current::UNITS);
        check_units(charge::UNITS);
        check_units(time::UNITS);
        check_units(frequency::UNITS);
        check_units(length::UNITS);
        check_units(area::UNITS);
        check_units(velocity::UNITS);
        check_units(mass::UNITS);
        check_units(temperature::UNITS);
        check_units(amount::UNITS);
        check_units(luminous::UNITS);
    }

    #[test]
    fn standard_registration_covers_every_module() {
        let mut builder = RegistryBuilder::new();
        register_standard(&mut builder).unwrap();
        // Registering twice is idempotent.
        register_standard(&mut builder).unwrap();
        assert_eq!(builder.build().len(), 12);
        assert_eq!(FamilyRegistry::standard().len(), 12);
    }

    #[test]
    fn typed_products() {
        let i = current::Currents::of(2.0).unwrap();
        let t = time::Times::of(3.0).unwrap();
        let q = (i * t).unwrap();
        assert_eq!(q.value(), 6.0);
        assert_eq!((q / t).unwrap(), i);
        assert_eq!((q / i).unwrap(), t);
        assert_eq!((t * i).unwrap(), q);
    }

    #[test]
    fn typed_geometry_and_motion() {
        let side = length::Lengths::of(4.0).unwrap();
        let a = (side * side).unwrap();
        assert_eq!(a.value(), 16.0);
        assert_eq!((a / side).unwrap(), side);

        let d = length::KILOMETERS.measure(36.0).unwrap();
        let t = time::HOURS.measure(1.0).unwrap();
        let v = (d / t).unwrap();
        assert_relative_eq!(
            v.in_units(&velocity::KILOMETERS_PER_HOUR),
            36.0,
            max_relative = 1e-12
        );
        assert_relative_eq!((v * t).unwrap().value(), 36_000.0, max_relative = 1e-12);
        assert_relative_eq!((d / v).unwrap().value(), 3_600.0, max_relative = 1e-12);
    }

    #[test]
    fn typed_frequency() {
        let f = frequency::Frequencies::of(50.0).unwrap();
        let t = time::Times::of(2.0).unwrap();
        assert_eq!((f * t).unwrap().value(), 100.0);
        let period = (scalar::Scalars::of(1.0).unwrap() / f).unwrap();
        assert_relative_eq!(
            period.in_units(&time::MILLISECONDS),
            20.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn typed_quotient_checks_zero_and_restriction() {
        let q = charge::Charges::of(-6.0).unwrap();
        assert_eq!(
            q / time::Times::ZERO,
            Err(crate::MeasureError::DivisionByZero)
        );
        // Negative charge over positive time is a negative current.
        assert!((q / time::Times::of(2.0).unwrap()).is_err());
    }
}
