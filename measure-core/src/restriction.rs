//! Domain restriction policies.
//!
//! Every [`Quantity`](crate::Quantity) picks a restriction through its associated `Restriction` type. The policy is
//! consulted whenever a measure of that quantity is built, including results of arithmetic, so an invalid value is
//! never observable.

use serde::{Deserialize, Serialize};

use crate::error::DomainViolation;

/// Runtime tag of a restriction policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionKind {
    /// Any finite value.
    Unrestricted,
    /// Finite values `>= 0`.
    NonNegative,
}

/// Validation capability applied to canonical values at construction time.
///
/// Implementations only see finite values; NaN and infinities are rejected before the policy runs.
pub trait Restriction: 'static {
    /// Runtime tag of this policy.
    const KIND: RestrictionKind;

    /// Returns `value` if legal, otherwise the violation naming `quantity`.
    fn validate(quantity: &'static str, value: f64) -> Result<f64, DomainViolation>;
}

/// Accepts any finite value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unrestricted {}

impl Restriction for Unrestricted {
    const KIND: RestrictionKind = RestrictionKind::Unrestricted;

    #[inline]
    fn validate(_quantity: &'static str, value: f64) -> Result<f64, DomainViolation> {
        Ok(value)
    }
}

/// Rejects negative values. Underflow below zero is an error; nothing is clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NonNegative {}

impl Restriction for NonNegative {
    const KIND: RestrictionKind = RestrictionKind::NonNegative;

    #[inline]
    fn validate(quantity: &'static str, value: f64) -> Result<f64, DomainViolation> {
        if value < 0.0 {
            Err(DomainViolation::Negative { quantity, value })
        } else {
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unrestricted_accepts_negatives() {
        assert_eq!(Unrestricted::validate("time", -3.0), Ok(-3.0));
        assert_eq!(Unrestricted::KIND, RestrictionKind::Unrestricted);
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert_eq!(NonNegative::validate("length", 0.0), Ok(0.0));
        assert_eq!(NonNegative::validate("length", -0.0), Ok(-0.0));
    }

    #[test]
    fn non_negative_rejects_negative() {
        assert_eq!(
            NonNegative::validate("length", -1e-300),
            Err(DomainViolation::Negative {
                quantity: "length",
                value: -1e-300,
            })
        );
    }

    proptest! {
        #[test]
        fn prop_non_negative_partition(v in -1e12..1e12f64) {
            let result = NonNegative::validate("mass", v);
            prop_assert_eq!(result.is_ok(), v >= 0.0);
        }
    }
}
