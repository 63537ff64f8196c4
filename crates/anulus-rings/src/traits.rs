//! The capability contract every ring domain implements.
//!
//! Operands handed to these primitives have already been coerced into
//! `ring`; no further coercion happens here.

use std::fmt;

use crate::element::Element;
use crate::error::{Result, RingError};
use crate::properties::RingProperties;
use crate::ring::Ring;

/// Domain-specific arithmetic behind a [`Ring`].
pub(crate) trait Domain: fmt::Debug + Send + Sync {
    /// Property flags, computed once when the ring is built.
    fn properties(&self) -> RingProperties;

    /// Returns `a + b`.
    fn add(&self, ring: &Ring, a: &Element, b: &Element) -> Result<Element>;

    /// Returns `a - b`.
    fn sub(&self, ring: &Ring, a: &Element, b: &Element) -> Result<Element>;

    /// Returns `a * b`.
    fn mul(&self, ring: &Ring, a: &Element, b: &Element) -> Result<Element>;

    /// Returns the additive inverse of `a`.
    fn neg(&self, ring: &Ring, a: &Element) -> Result<Element>;

    /// Generic powering by repeated squaring.
    ///
    /// Override if the domain can do it more efficiently or supports
    /// negative exponents.
    fn pow(&self, ring: &Ring, a: &Element, exp: i64) -> Result<Element> {
        if exp < 0 {
            return Err(RingError::Domain(
                "generic powering only supports exp >= 0".to_string(),
            ));
        }
        if exp == 0 {
            return ring.one();
        }
        if exp == 1 {
            return Ok(a.clone());
        }

        let half = self.pow(ring, a, exp / 2)?;
        let mut result = self.mul(ring, &half, &half)?;
        if exp % 2 == 1 {
            result = self.mul(ring, &result, a)?;
        }
        Ok(result)
    }

    /// Returns true if `a` is a unit. Domains without division fail here.
    fn has_inv(&self, ring: &Ring, _a: &Element) -> Result<bool> {
        Err(RingError::Domain(format!("{ring} cannot decide invertibility")))
    }

    /// Returns the multiplicative inverse of `a`, or an error if it has none.
    fn inv(&self, ring: &Ring, _a: &Element) -> Result<Element> {
        Err(RingError::Domain(format!("{ring} does not support inversion")))
    }

    /// Returns `a * b^-1`.
    fn div(&self, ring: &Ring, a: &Element, b: &Element) -> Result<Element> {
        let inverse = self.inv(ring, b)?;
        self.mul(ring, a, &inverse)
    }

    /// Writes the canonical textual form of `a`.
    fn fmt_element(&self, a: &Element, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Writes the ring's name, e.g. `ZZ/5ZZ`.
    fn fmt_ring(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}
