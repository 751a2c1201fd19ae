//! Time.
//!
//! The canonical unit is [`SECONDS`]. Time measures are signed so that they can express offsets and differences.

use crate::{Family, Measure, Units};
use measure_derive::Quantity;

/// Time (`s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Quantity)]
#[quantity(
    name = "time",
    family = Family::DIMENSIONLESS.time(1),
    canonical = SECONDS,
    units = UNITS
)]
pub struct Time;
/// A measure of time.
pub type Times = Measure<Time>;

/// Second (canonical).
pub const SECONDS: Units<Time> = Units::canonical("s", "units.time.second");
/// Millisecond.
pub const MILLISECONDS: Units<Time> = Units::scaled("ms", "units.time.millisecond", 1e-3);
/// Microsecond.
pub const MICROSECONDS: Units<Time> = Units::scaled("µs", "units.time.microsecond", 1e-6);
/// Minute: `60 s`.
pub const MINUTES: Units<Time> = Units::scaled("min", "units.time.minute", 60.0);
/// Hour: `3600 s`.
pub const HOURS: Units<Time> = Units::scaled("h", "units.time.hour", 3_600.0);
/// Day: `86400 s`.
pub const DAYS: Units<Time> = Units::scaled("d", "units.time.day", 86_400.0);

/// Every predefined time unit.
pub const UNITS: &[Units<Time>] = &[SECONDS, MILLISECONDS, MICROSECONDS, MINUTES, HOURS, DAYS];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn day_to_seconds() {
        let d = DAYS.measure(1.0).unwrap();
        assert_abs_diff_eq!(d.in_units(&SECONDS), 86_400.0, epsilon = 1e-9);
        assert_relative_eq!(d.in_units(&HOURS), 24.0);
    }

    #[test]
    fn negative_durations_are_allowed() {
        let t = MINUTES.measure(-2.0).unwrap();
        assert_eq!(t.value(), -120.0);
    }

    proptest! {
        #[test]
        fn prop_minutes_seconds_ratio(m in 1e-3..1e6f64) {
            let t = MINUTES.measure(m).unwrap();
            prop_assert!((t.in_units(&SECONDS) / t.in_units(&MINUTES) - 60.0).abs() < 1e-9);
        }
    }
}
