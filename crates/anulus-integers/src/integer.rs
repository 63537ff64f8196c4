//! Arbitrary precision integers.
//!
//! `Integer` wraps `dashu::IBig` and adds the Euclidean helpers that the
//! modular domain needs: canonical residues, floor division and modular
//! powering.

use dashu::base::{Abs, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// A signed integer of unbounded size.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true if this integer is odd.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        !(self % &Self::new(2)).is_zero()
    }

    /// Computes the (non-negative) greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Reduces `self` into the canonical range `[0, |modulus|)`.
    ///
    /// The modulus must be non-zero.
    #[must_use]
    pub fn rem_euclid(&self, modulus: &Self) -> Self {
        let r = self % modulus;
        if r.is_negative() {
            r + modulus.abs()
        } else {
            r
        }
    }

    /// Floor division, rounding towards negative infinity.
    #[must_use]
    pub fn div_floor(&self, other: &Self) -> Self {
        let q = Self(&self.0 / &other.0);
        let r = self % other;
        if !r.is_zero() && (r.is_negative() != other.is_negative()) {
            q - Self::one()
        } else {
            q
        }
    }

    /// Computes `self^exp mod modulus` by square-and-multiply, reducing after
    /// every step so intermediates stay below `modulus^2`.
    ///
    /// `exp` must be non-negative and `modulus` positive. The result lies in
    /// `[0, modulus)`.
    #[must_use]
    pub fn mod_pow(&self, exp: &Self, modulus: &Self) -> Self {
        let two = Self::new(2);
        let mut result = Self::one().rem_euclid(modulus);
        let mut base = self.rem_euclid(modulus);
        let mut exp = exp.clone();

        while !exp.is_zero() {
            if exp.is_odd() {
                result = (&result * &base).rem_euclid(modulus);
            }
            base = (&base * &base).rem_euclid(modulus);
            exp = exp / two.clone();
        }

        result
    }

    /// Converts to an i64, or `None` if the value is out of range.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Forwards a binary operator to `IBig` for owned, owned-by-reference and
/// reference-by-reference operands.
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer(self.0 $op rhs.0)
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer(self.0 $op &rhs.0)
            }
        }

        impl $trait for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer(&self.0 $op &rhs.0)
            }
        }
    };
}

forward_binop!(Add, add, +);
forward_binop!(Sub, sub, -);
forward_binop!(Mul, mul, *);
forward_binop!(Rem, rem, %);

impl Div for Integer {
    type Output = Integer;

    fn div(self, rhs: Integer) -> Integer {
        Integer(self.0 / rhs.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}
