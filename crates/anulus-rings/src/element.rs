//! Ring elements.
//!
//! An [`Element`] pairs the ring that produced it with a domain-specific
//! payload. Elements are immutable; every operation returns a new one.
//! Binary operations first bring both operands into a common ring with
//! [`coerce_pair`] and only then run the domain primitive.

use std::cmp::Ordering;
use std::fmt;

use anulus_integers::Integer;
use num_traits::{One, Zero};

use crate::coercion::coerce_pair;
use crate::error::{Result, RingError};
use crate::properties::RingProperty;
use crate::ring::Ring;
use crate::traits::Domain;

/// The payload of an element. Which variant is used is decided by the
/// owning ring.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Value {
    /// An integer.
    Integer(Integer),
    /// A canonical residue in `[0, n)`.
    Residue(Integer),
    /// Normalised coefficients, lowest degree first.
    Polynomial(Vec<Element>),
}

impl Value {
    pub(crate) fn as_integer(&self) -> Result<&Integer> {
        match self {
            Self::Integer(n) | Self::Residue(n) => Ok(n),
            Self::Polynomial(_) => Err(payload_mismatch("integer")),
        }
    }

    pub(crate) fn as_coefficients(&self) -> Result<&[Element]> {
        match self {
            Self::Polynomial(coeffs) => Ok(coeffs),
            _ => Err(payload_mismatch("polynomial")),
        }
    }
}

fn payload_mismatch(expected: &str) -> RingError {
    RingError::Domain(format!("expected a {expected} payload"))
}

/// Either a raw integer or an element of some ring.
///
/// Raw integers are interpreted as elements of [`Ring::integers`].
#[derive(Clone, Debug)]
pub enum Operand {
    /// A raw integer.
    Integer(Integer),
    /// An element of any ring.
    Element(Element),
}

impl Operand {
    /// Turns the operand into an element, mapping raw integers into ZZ.
    #[must_use]
    pub fn into_element(self) -> Element {
        match self {
            Self::Integer(n) => Element::new(Ring::integers(), Value::Integer(n)),
            Self::Element(e) => e,
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Integer(Integer::new(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Integer(Integer::from(value))
    }
}

impl From<Integer> for Operand {
    fn from(value: Integer) -> Self {
        Self::Integer(value)
    }
}

impl From<&Integer> for Operand {
    fn from(value: &Integer) -> Self {
        Self::Integer(value.clone())
    }
}

impl From<Element> for Operand {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<&Element> for Operand {
    fn from(value: &Element) -> Self {
        Self::Element(value.clone())
    }
}

type BinaryOp = fn(&dyn Domain, &Ring, &Element, &Element) -> Result<Element>;

/// An element of a [`Ring`].
///
/// `==` compares ring and payload exactly, without coercion, so it agrees
/// with `Hash`. Use [`Element::try_eq`] to compare across rings.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Element {
    ring: Ring,
    value: Value,
}

impl Element {
    pub(crate) fn new(ring: Ring, value: Value) -> Self {
        Self { ring, value }
    }

    /// The ring that owns this element.
    #[must_use]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub(crate) fn value(&self) -> &Value {
        &self.value
    }

    /// The integer payload, for elements of ZZ and ZZ/nZZ.
    ///
    /// Residues are returned in canonical form `[0, n)`.
    #[must_use]
    pub fn to_integer(&self) -> Option<&Integer> {
        self.value.as_integer().ok()
    }

    /// The coefficients, lowest degree first, for polynomial elements.
    #[must_use]
    pub fn coefficients(&self) -> Option<&[Element]> {
        self.value.as_coefficients().ok()
    }

    fn binary(&self, rhs: impl Into<Operand>, op: BinaryOp) -> Result<Element> {
        let (lhs, rhs) = coerce_pair(self, rhs)?;
        let ring = lhs.ring.clone();
        op(ring.domain(), &ring, &lhs, &rhs)
    }

    /// Computes `self + rhs` in the common ring of both operands.
    ///
    /// # Errors
    ///
    /// Fails if the operands share no common ring.
    pub fn add(&self, rhs: impl Into<Operand>) -> Result<Element> {
        self.binary(rhs, |d, r, a, b| d.add(r, a, b))
    }

    /// Computes `self - rhs` in the common ring of both operands.
    ///
    /// # Errors
    ///
    /// Fails if the operands share no common ring.
    pub fn sub(&self, rhs: impl Into<Operand>) -> Result<Element> {
        self.binary(rhs, |d, r, a, b| d.sub(r, a, b))
    }

    /// Computes `self * rhs` in the common ring of both operands.
    ///
    /// # Errors
    ///
    /// Fails if the operands share no common ring.
    pub fn mul(&self, rhs: impl Into<Operand>) -> Result<Element> {
        self.binary(rhs, |d, r, a, b| d.mul(r, a, b))
    }

    /// Computes `self / rhs`, i.e. `self * rhs^-1`.
    ///
    /// # Errors
    ///
    /// Fails if the operands share no common ring, if the ring has no
    /// division, or if `rhs` is not a unit.
    pub fn div(&self, rhs: impl Into<Operand>) -> Result<Element> {
        self.binary(rhs, |d, r, a, b| d.div(r, a, b))
    }

    /// Computes `-self`.
    ///
    /// # Errors
    ///
    /// Only fails on a corrupted payload.
    pub fn neg(&self) -> Result<Element> {
        self.ring.domain().neg(&self.ring, self)
    }

    /// Raises `self` to the power `exp`.
    ///
    /// Negative exponents are only supported by rings that can invert.
    ///
    /// # Errors
    ///
    /// Fails for negative exponents in rings without inversion, or for a
    /// negative exponent of a non-unit.
    pub fn pow(&self, exp: i64) -> Result<Element> {
        self.ring.domain().pow(&self.ring, self, exp)
    }

    /// Returns the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Fails if the element is not a unit or the ring cannot invert.
    pub fn inv(&self) -> Result<Element> {
        self.ring.domain().inv(&self.ring, self)
    }

    /// Returns true if the element is a unit.
    ///
    /// # Errors
    ///
    /// Fails if the ring cannot decide invertibility.
    pub fn has_inv(&self) -> Result<bool> {
        self.ring.domain().has_inv(&self.ring, self)
    }

    /// Compares `self` and `rhs` after bringing them into a common ring.
    ///
    /// # Errors
    ///
    /// Fails if the operands share no common ring.
    pub fn try_eq(&self, rhs: impl Into<Operand>) -> Result<bool> {
        let (lhs, rhs) = coerce_pair(self, rhs)?;
        Ok(lhs == rhs)
    }

    /// Orders `self` and `rhs` after bringing them into a common ring.
    ///
    /// # Errors
    ///
    /// Fails if the operands share no common ring, or the common ring is
    /// not ordered or has no comparison implemented.
    pub fn try_cmp(&self, rhs: impl Into<Operand>) -> Result<Ordering> {
        let (lhs, rhs) = coerce_pair(self, rhs)?;
        if !lhs.ring.has_property(RingProperty::Ordered) {
            return Err(RingError::Domain(format!("{} is not ordered", lhs.ring)));
        }
        match (&lhs.value, &rhs.value) {
            (Value::Integer(a), Value::Integer(b)) => Ok(a.cmp(b)),
            _ => Err(RingError::Domain(format!(
                "comparison in {} is not implemented",
                lhs.ring
            ))),
        }
    }

    /// Returns true if this is the ring's zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match &self.value {
            Value::Integer(n) | Value::Residue(n) => n.is_zero(),
            Value::Polynomial(coeffs) => coeffs.is_empty(),
        }
    }

    /// Returns true if this is the ring's one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        match &self.value {
            Value::Integer(n) => n.is_one(),
            Value::Residue(r) => self
                .ring
                .modulus()
                .is_some_and(|m| *r == Integer::one().rem_euclid(m)),
            Value::Polynomial(coeffs) => coeffs.len() == 1 && coeffs[0].is_one(),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ring.domain().fmt_element(self, f)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element({self} in {})", self.ring)
    }
}
