//! The integers modulo n.

use std::fmt;
use std::sync::Arc;

use anulus_integers::{is_prime, Integer};
use num_traits::{One, Zero};

use crate::coercion::{CoercionMap, CoercionTable};
use crate::element::{Element, Value};
use crate::error::{Result, RingError};
use crate::properties::RingProperties;
use crate::ring::{Ring, RingKind};
use crate::traits::Domain;

/// The ring ZZ/nZZ for a modulus `n >= 1`.
///
/// Elements hold the canonical residue in `[0, n)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModularDomain {
    modulus: Integer,
}

impl ModularDomain {
    pub(crate) fn ring(modulus: Integer) -> Result<Ring> {
        if modulus < Integer::one() {
            return Err(RingError::Construction(format!(
                "modulus must be at least 1, got {modulus}"
            )));
        }

        let kind = RingKind::IntegersMod(Self { modulus });
        let from_integers: CoercionMap = Arc::new(|target: &Ring, x: &Element| -> Result<Element> {
            match target.kind() {
                RingKind::IntegersMod(d) => Ok(d.residue(target, x.value().as_integer()?)),
                _ => Err(RingError::Domain(format!("{target} is not ZZ/nZZ"))),
            }
        });

        let mut coercions = CoercionTable::default();
        coercions.register(&kind, Ring::integers(), from_integers)?;
        Ok(Ring::from_parts(kind, coercions))
    }

    /// The modulus n.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    fn residue(&self, ring: &Ring, value: &Integer) -> Element {
        Element::new(ring.clone(), Value::Residue(value.rem_euclid(&self.modulus)))
    }

    /// Inverts `a` modulo n with the extended Euclidean algorithm.
    ///
    /// Runs the remainder sequence `r` of gcd(n, a) alongside a sequence `s`
    /// with `a*s = r (mod n)` at every step, so when `r` reaches the gcd,
    /// `s` is the inverse if that gcd is 1.
    fn inverse(&self, a: &Integer) -> Result<Integer> {
        let n = &self.modulus;

        let (mut r, mut r_next) = (n.clone(), a.clone());
        let (mut s, mut s_next) = (Integer::zero(), Integer::one());

        while !r_next.is_zero() {
            // r = q*r' + r''  =>  a(s - q*s') = r - q*r' = r''
            let q = r.div_floor(&r_next);
            let r_new = &r - &(&q * &r_next);
            let s_new = &s - &(&q * &s_next);
            r = std::mem::replace(&mut r_next, r_new);
            s = std::mem::replace(&mut s_next, s_new);
        }

        if !r.is_one() {
            return Err(RingError::NotInvertible {
                value: a.to_string(),
                modulus: n.to_string(),
            });
        }
        Ok(s.rem_euclid(n))
    }
}

impl Domain for ModularDomain {
    fn properties(&self) -> RingProperties {
        RingProperties {
            finite: true,
            field: is_prime(&self.modulus),
            ordered: false,
        }
    }

    fn add(&self, ring: &Ring, a: &Element, b: &Element) -> Result<Element> {
        Ok(self.residue(ring, &(a.value().as_integer()? + b.value().as_integer()?)))
    }

    fn sub(&self, ring: &Ring, a: &Element, b: &Element) -> Result<Element> {
        Ok(self.residue(ring, &(a.value().as_integer()? - b.value().as_integer()?)))
    }

    fn mul(&self, ring: &Ring, a: &Element, b: &Element) -> Result<Element> {
        Ok(self.residue(ring, &(a.value().as_integer()? * b.value().as_integer()?)))
    }

    fn neg(&self, ring: &Ring, a: &Element) -> Result<Element> {
        let value = a.value().as_integer()?;
        Ok(self.residue(ring, &-value))
    }

    /// Negative exponents invert first; the power itself is taken with
    /// modular square-and-multiply.
    fn pow(&self, ring: &Ring, a: &Element, exp: i64) -> Result<Element> {
        let value = a.value().as_integer()?;
        let base = if exp < 0 {
            self.inverse(value)?
        } else {
            value.clone()
        };
        let exp = Integer::from(exp.unsigned_abs());
        Ok(self.residue(ring, &base.mod_pow(&exp, &self.modulus)))
    }

    fn has_inv(&self, _ring: &Ring, a: &Element) -> Result<bool> {
        Ok(self.modulus.gcd(a.value().as_integer()?).is_one())
    }

    fn inv(&self, ring: &Ring, a: &Element) -> Result<Element> {
        let inverse = self.inverse(a.value().as_integer()?)?;
        Ok(self.residue(ring, &inverse))
    }

    fn fmt_element(&self, a: &Element, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match a.value() {
            Value::Residue(r) => write!(f, "{r}"),
            _ => Err(fmt::Error),
        }
    }

    fn fmt_ring(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZZ/{}ZZ", self.modulus)
    }
}

impl Ring {
    /// Iterates over every residue `0, 1, ..., n - 1` of ZZ/nZZ.
    ///
    /// # Errors
    ///
    /// Returns a domain error if this is not a ring of integers mod n.
    pub fn elements(&self) -> Result<impl Iterator<Item = Element>> {
        let modulus = self
            .modulus()
            .ok_or_else(|| RingError::Domain(format!("{self} is not finite")))?
            .clone();
        let ring = self.clone();

        Ok(
            std::iter::successors(Some(Integer::zero()), |k| Some(k + &Integer::one()))
                .take_while(move |k| *k < modulus)
                .map(move |k| Element::new(ring.clone(), Value::Residue(k))),
        )
    }
}
