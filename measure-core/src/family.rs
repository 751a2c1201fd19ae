//! Dimensional families.
//!
//! A [`Family`] is a vector of integer exponents over the seven SI base dimensions. It answers the question "what
//! kind of quantity is this?": a current is `A¹`, a charge is `A¹·s¹`, a velocity is `m¹·s⁻¹`.
//!
//! ```rust
//! use measure_core::{Family, FamilyOp};
//!
//! let length = Family::DIMENSIONLESS.length(1);
//! let time = Family::DIMENSIONLESS.time(1);
//! let velocity = length.combine(time, FamilyOp::Subtract);
//! assert_eq!(velocity, Family::apply(1, 0, -1, 0, 0, 0, 0));
//! assert_eq!(velocity.to_string(), "m·s⁻¹");
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of SI base dimensions.
pub const NDIMS: usize = 7;

/// The seven SI base dimensions, in the order used by [`Family`] exponent vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseDimension {
    /// Length (`m`).
    Length,
    /// Mass (`kg`).
    Mass,
    /// Time (`s`).
    Time,
    /// Electric current (`A`).
    Current,
    /// Thermodynamic temperature (`K`).
    Temperature,
    /// Amount of substance (`mol`).
    Amount,
    /// Luminous intensity (`cd`).
    LuminousIntensity,
}

impl BaseDimension {
    /// Every base dimension, in exponent-vector order.
    pub const ALL: [BaseDimension; NDIMS] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::LuminousIntensity,
    ];

    /// Position of this dimension inside a [`Family`] exponent vector.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// SI base unit symbol for this dimension.
    pub const fn si_symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Amount => "mol",
            BaseDimension::LuminousIntensity => "cd",
        }
    }
}

/// How two families are composed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FamilyOp {
    /// Exponents are added (multiplication of quantities).
    Add,
    /// Exponents are subtracted (division of quantities).
    Subtract,
}

/// Exponent vector over the SI base dimensions.
///
/// Two families are equal iff all seven exponents match. The all-zero family is [`Family::DIMENSIONLESS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Family {
    exponents: [i32; NDIMS],
}

impl Family {
    /// The family of dimensionless scalars.
    pub const DIMENSIONLESS: Family = Family {
        exponents: [0; NDIMS],
    };

    /// Builds a family from a raw exponent vector (see [`BaseDimension::ALL`] for the order).
    pub const fn from_exponents(exponents: [i32; NDIMS]) -> Self {
        Self { exponents }
    }

    /// Builds a family from all seven exponents, in the order length, mass, time, current, temperature, amount,
    /// luminous intensity.
    ///
    /// For sparse families prefer chaining the per-dimension setters on [`Family::DIMENSIONLESS`], which leaves
    /// every unspecified exponent at zero.
    pub const fn apply(
        length: i32,
        mass: i32,
        time: i32,
        current: i32,
        temperature: i32,
        amount: i32,
        luminous: i32,
    ) -> Self {
        Self {
            exponents: [length, mass, time, current, temperature, amount, luminous],
        }
    }

    /// Returns a copy with the exponent of `base` replaced by `exponent`.
    pub const fn with(self, base: BaseDimension, exponent: i32) -> Self {
        let mut exponents = self.exponents;
        exponents[base.index()] = exponent;
        Self { exponents }
    }

    /// Sets the length exponent.
    pub const fn length(self, exponent: i32) -> Self {
        self.with(BaseDimension::Length, exponent)
    }

    /// Sets the mass exponent.
    pub const fn mass(self, exponent: i32) -> Self {
        self.with(BaseDimension::Mass, exponent)
    }

    /// Sets the time exponent.
    pub const fn time(self, exponent: i32) -> Self {
        self.with(BaseDimension::Time, exponent)
    }

    /// Sets the current exponent.
    pub const fn current(self, exponent: i32) -> Self {
        self.with(BaseDimension::Current, exponent)
    }

    /// Sets the temperature exponent.
    pub const fn temperature(self, exponent: i32) -> Self {
        self.with(BaseDimension::Temperature, exponent)
    }

    /// Sets the amount of substance exponent.
    pub const fn amount(self, exponent: i32) -> Self {
        self.with(BaseDimension::Amount, exponent)
    }

    /// Sets the luminous intensity exponent.
    pub const fn luminous(self, exponent: i32) -> Self {
        self.with(BaseDimension::LuminousIntensity, exponent)
    }

    /// Exponent of a single base dimension.
    pub const fn exponent(&self, base: BaseDimension) -> i32 {
        self.exponents[base.index()]
    }

    /// The raw exponent vector.
    pub const fn exponents(&self) -> [i32; NDIMS] {
        self.exponents
    }

    /// `true` for the all-zero family.
    pub const fn is_dimensionless(&self) -> bool {
        self.const_eq(&Family::DIMENSIONLESS)
    }

    /// Component-wise exponent arithmetic: [`FamilyOp::Add`] for products, [`FamilyOp::Subtract`] for quotients.
    ///
    /// Returns `None` if an exponent leaves the `i32` range.
    pub const fn checked_combine(self, other: Family, op: FamilyOp) -> Option<Family> {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < NDIMS {
            let combined = match op {
                FamilyOp::Add => exponents[i].checked_add(other.exponents[i]),
                FamilyOp::Subtract => exponents[i].checked_sub(other.exponents[i]),
            };
            exponents[i] = match combined {
                Some(e) => e,
                None => return None,
            };
            i += 1;
        }
        Some(Family { exponents })
    }

    /// Multiplies every exponent by `factor` (raising a quantity to an integer power).
    ///
    /// Returns `None` if an exponent leaves the `i32` range.
    pub const fn checked_scale(self, factor: i32) -> Option<Family> {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < NDIMS {
            exponents[i] = match exponents[i].checked_mul(factor) {
                Some(e) => e,
                None => return None,
            };
            i += 1;
        }
        Some(Family { exponents })
    }

    /// Infallible [`Family::checked_combine`] for declarations whose exponents are known to be small.
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows; in a `const` context that is a compile error.
    pub const fn combine(self, other: Family, op: FamilyOp) -> Family {
        match self.checked_combine(other, op) {
            Some(family) => family,
            None => panic!("family exponent overflow"),
        }
    }

    /// Infallible [`Family::checked_scale`].
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows.
    pub const fn scale(self, factor: i32) -> Family {
        match self.checked_scale(factor) {
            Some(family) => family,
            None => panic!("family exponent overflow"),
        }
    }

    /// Family of the reciprocal quantity.
    ///
    /// # Panics
    ///
    /// Panics if an exponent is `i32::MIN`.
    pub const fn inverse(self) -> Family {
        self.scale(-1)
    }

    /// Equality usable in `const` contexts (compile-time family assertions).
    pub const fn const_eq(&self, other: &Family) -> bool {
        let mut i = 0;
        while i < NDIMS {
            if self.exponents[i] != other.exponents[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Non-zero exponents with their base dimension.
    pub fn components(&self) -> impl Iterator<Item = (BaseDimension, i32)> + '_ {
        BaseDimension::ALL
            .iter()
            .copied()
            .zip(self.exponents.iter().copied())
            .filter(|(_, e)| *e != 0)
    }
}

fn write_superscript(f: &mut fmt::Formatter<'_>, exponent: i32) -> fmt::Result {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    if exponent < 0 {
        f.write_str("⁻")?;
    }
    for c in exponent.unsigned_abs().to_string().chars() {
        let digit = c.to_digit(10).unwrap_or(0) as usize;
        write!(f, "{}", DIGITS[digit])?;
    }
    Ok(())
}

impl fmt::Display for Family {
    /// Formats as a product of SI base symbols, e.g. `m·s⁻¹`. The dimensionless family prints as `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        for (i, (base, exponent)) in self.components().enumerate() {
            if i > 0 {
                f.write_str("·")?;
            }
            f.write_str(base.si_symbol())?;
            if exponent != 1 {
                write_superscript(f, exponent)?;
            }
        }
        Ok(())
    }
}
