//! Exact rational numbers over unbounded integers

use std::fmt;
use std::ops::{Add, Mul};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{RecoverError, Result};

/// A normalized fraction `numerator / denominator`
///
/// Invariants, held after every operation:
/// - `denominator > 0`
/// - `gcd(|numerator|, denominator) == 1`
/// - zero is always `0/1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Builds a normalized fraction, or `None` when `denominator` is zero
    #[must_use]
    pub fn new(numerator: BigInt, denominator: BigInt) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        Some(Self::normalize(numerator, denominator))
    }

    /// The fraction `value / 1`
    #[must_use]
    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numerator: value,
            denominator: BigInt::one(),
        }
    }

    /// Caller guarantees `denominator != 0`
    fn normalize(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        // gcd(0, d) == d, so zero collapses to 0/1 here
        let divisor = numerator.gcd(&denominator);
        if !divisor.is_one() {
            numerator /= &divisor;
            denominator /= &divisor;
        }

        Self {
            numerator,
            denominator,
        }
    }

    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Collapses the fraction to an integer without truncating
    ///
    /// # Errors
    /// Returns [`RecoverError::NonIntegralResult`] if the denominator is not 1
    pub fn into_integer(self) -> Result<BigInt> {
        if self.is_integer() {
            Ok(self.numerator)
        } else {
            Err(RecoverError::NonIntegralResult {
                numerator: self.numerator,
                denominator: self.denominator,
            })
        }
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        Fraction::normalize(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Add for Fraction {
    type Output = Fraction;

    #[inline]
    fn add(self, rhs: Fraction) -> Fraction {
        &self + &rhs
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Fraction::normalize(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    #[inline]
    fn mul(self, rhs: Fraction) -> Fraction {
        &self * &rhs
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
