//! Velocity (`m·s⁻¹`).
//!
//! Velocities are signed.

use crate::{Family, Measure, Units};
use measure_derive::Quantity;

/// Velocity (`m/s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Quantity)]
#[quantity(
    name = "velocity",
    family = Family::DIMENSIONLESS.length(1).time(-1),
    canonical = METERS_PER_SECOND,
    units = UNITS
)]
pub struct Velocity;
/// A measure of velocity.
pub type Velocities = Measure<Velocity>;

/// Meter per second (canonical).
pub const METERS_PER_SECOND: Units<Velocity> =
    Units::canonical("m/s", "units.velocity.meter_per_second");
/// Kilometer per hour: `1 km/h = 1/3.6 m/s`.
pub const KILOMETERS_PER_HOUR: Units<Velocity> =
    Units::scaled("km/h", "units.velocity.kilometer_per_hour", 1.0 / 3.6);
/// Mile per hour: `1 mph = 0.44704 m/s`.
pub const MILES_PER_HOUR: Units<Velocity> =
    Units::scaled("mph", "units.velocity.mile_per_hour", 0.44704);
/// Knot: one nautical mile per hour.
pub const KNOTS: Units<Velocity> = Units::scaled("kn", "units.velocity.knot", 1_852.0 / 3_600.0);

/// Every predefined velocity unit.
pub const UNITS: &[Units<Velocity>] = &[
    METERS_PER_SECOND,
    KILOMETERS_PER_HOUR,
    MILES_PER_HOUR,
    KNOTS,
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn highway_speed() {
        let v = KILOMETERS_PER_HOUR.measure(108.0).unwrap();
        assert_relative_eq!(v.value(), 30.0, max_relative = 1e-12);
        assert_relative_eq!(
            v.in_units(&MILES_PER_HOUR),
            67.108_088_761,
            max_relative = 1e-9
        );
    }

    #[test]
    fn reverse_velocity_allowed() {
        assert_eq!(Velocities::of(-3.0).unwrap().to_string(), "-3 m/s");
    }
}
