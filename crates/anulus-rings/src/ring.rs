//! Ring handles.
//!
//! A [`Ring`] is a cheap, cloneable handle to an immutable domain together
//! with its property flags and its table of incoming coercions. Rings are
//! compared and hashed structurally: two rings of the same kind with the
//! same parameters are equal, whichever handle they came from.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use anulus_integers::Integer;

use crate::coercion::{self, CoercionTable};
use crate::config::CoercionConfig;
use crate::element::{Element, Operand};
use crate::error::Result;
use crate::integers::IntegerDomain;
use crate::poly_ring::PolynomialDomain;
use crate::properties::{RingProperties, RingProperty};
use crate::traits::Domain;
use crate::zmod::ModularDomain;

/// The structural identity of a ring.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RingKind {
    /// The integers ZZ.
    Integers(IntegerDomain),
    /// The integers modulo n.
    IntegersMod(ModularDomain),
    /// Univariate polynomials over a base ring.
    Polynomial(PolynomialDomain),
}

impl RingKind {
    pub(crate) fn domain(&self) -> &dyn Domain {
        match self {
            Self::Integers(d) => d,
            Self::IntegersMod(d) => d,
            Self::Polynomial(d) => d,
        }
    }
}

impl fmt::Display for RingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.domain().fmt_ring(f)
    }
}

struct RingData {
    kind: RingKind,
    properties: RingProperties,
    coercions: CoercionTable,
}

/// An algebraic ring.
///
/// Elements are produced only through their ring: see [`Ring::element`],
/// [`Ring::coerce`], and the domain-specific constructors.
#[derive(Clone)]
pub struct Ring(Arc<RingData>);

impl Ring {
    pub(crate) fn from_parts(kind: RingKind, coercions: CoercionTable) -> Self {
        let properties = kind.domain().properties();
        let ring = Self(Arc::new(RingData {
            kind,
            properties,
            coercions,
        }));
        log::debug!("constructed ring {ring} with {properties:?}");
        ring
    }

    /// The ring of integers.
    ///
    /// Every other ring coerces from it, directly or transitively.
    #[must_use]
    pub fn integers() -> Self {
        static ZZ: OnceLock<Ring> = OnceLock::new();
        ZZ.get_or_init(|| {
            Self::from_parts(RingKind::Integers(IntegerDomain), CoercionTable::default())
        })
        .clone()
    }

    /// The integers modulo `modulus`.
    ///
    /// The field flag is decided once here with a strong pseudoprime test,
    /// which is exact for moduli below about 3.2e23 and costs a dozen
    /// modular exponentiations for any size.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Construction`](crate::RingError::Construction)
    /// if `modulus < 1`.
    pub fn integers_mod(modulus: impl Into<Integer>) -> Result<Self> {
        ModularDomain::ring(modulus.into())
    }

    /// Univariate polynomials over `base` in the single-character variable `var`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Construction`](crate::RingError::Construction)
    /// if `var` is not exactly one character.
    pub fn polynomials(base: &Ring, var: &str) -> Result<Self> {
        PolynomialDomain::ring(base, var)
    }

    /// Returns the structural identity of this ring.
    #[must_use]
    pub fn kind(&self) -> &RingKind {
        &self.0.kind
    }

    /// Returns the property flags.
    #[must_use]
    pub fn properties(&self) -> RingProperties {
        self.0.properties
    }

    /// Returns true if the ring has the given property.
    #[must_use]
    pub fn has_property(&self, property: RingProperty) -> bool {
        self.0.properties.has(property)
    }

    /// Returns the incoming coercion edges registered at construction.
    #[must_use]
    pub fn coercions(&self) -> &CoercionTable {
        &self.0.coercions
    }

    pub(crate) fn domain(&self) -> &dyn Domain {
        self.0.kind.domain()
    }

    /// Coerces a raw integer or an element of any ring into this ring.
    ///
    /// # Errors
    ///
    /// Returns a coercion error if no path leads into this ring.
    pub fn coerce(&self, operand: impl Into<Operand>) -> Result<Element> {
        self.coerce_with(&CoercionConfig::default(), operand)
    }

    /// Like [`Ring::coerce`], with an explicit resolution config.
    ///
    /// # Errors
    ///
    /// Returns a coercion error if no path leads into this ring within
    /// `config.max_depth` edges.
    pub fn coerce_with(&self, config: &CoercionConfig, operand: impl Into<Operand>) -> Result<Element> {
        coercion::resolve(self, operand.into().into_element(), config, 0)
    }

    /// Builds an element of this ring from a raw integer or another element.
    ///
    /// # Errors
    ///
    /// Returns a coercion error if the value cannot be brought into this ring.
    pub fn element(&self, operand: impl Into<Operand>) -> Result<Element> {
        self.coerce(operand)
    }

    /// The additive identity.
    ///
    /// # Errors
    ///
    /// Fails only if the ring has no coercion path from the integers.
    pub fn zero(&self) -> Result<Element> {
        self.coerce(0)
    }

    /// The multiplicative identity.
    ///
    /// # Errors
    ///
    /// Fails only if the ring has no coercion path from the integers.
    pub fn one(&self) -> Result<Element> {
        self.coerce(1)
    }

    /// The modulus, for rings of integers mod n.
    #[must_use]
    pub fn modulus(&self) -> Option<&Integer> {
        match self.kind() {
            RingKind::IntegersMod(d) => Some(d.modulus()),
            _ => None,
        }
    }

    /// The coefficient ring, for polynomial rings.
    #[must_use]
    pub fn base_ring(&self) -> Option<&Ring> {
        match self.kind() {
            RingKind::Polynomial(d) => Some(d.base()),
            _ => None,
        }
    }

    /// The variable symbol, for polynomial rings.
    #[must_use]
    pub fn variable_name(&self) -> Option<char> {
        match self.kind() {
            RingKind::Polynomial(d) => Some(d.var()),
            _ => None,
        }
    }
}

impl PartialEq for Ring {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.kind == other.0.kind
    }
}

impl Eq for Ring {}

impl Hash for Ring {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.kind.hash(state);
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.kind.fmt(f)
    }
}

impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_structural_equality() {
        let zx = Ring::polynomials(&Ring::integers(), "x").unwrap();
        let zx_again = Ring::polynomials(&Ring::integers(), "x").unwrap();
        let zy = Ring::polynomials(&Ring::integers(), "y").unwrap();

        assert_eq!(zx, zx_again);
        assert_ne!(zx, zy);
        assert_eq!(Ring::integers_mod(7).unwrap(), Ring::integers_mod(7).unwrap());
        assert_ne!(Ring::integers_mod(7).unwrap(), Ring::integers_mod(8).unwrap());
        assert_ne!(Ring::integers(), Ring::integers_mod(7).unwrap());
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let mut seen = HashSet::new();
        seen.insert(Ring::integers_mod(5).unwrap());
        seen.insert(Ring::integers_mod(5).unwrap());
        seen.insert(Ring::polynomials(&Ring::integers_mod(5).unwrap(), "x").unwrap());
        seen.insert(Ring::polynomials(&Ring::integers_mod(5).unwrap(), "x").unwrap());
        seen.insert(Ring::integers());
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_display() {
        let z5 = Ring::integers_mod(5).unwrap();
        assert_eq!(Ring::integers().to_string(), "ZZ");
        assert_eq!(z5.to_string(), "ZZ/5ZZ");
        assert_eq!(Ring::polynomials(&Ring::integers(), "x").unwrap().to_string(), "ZZ[x]");
        assert_eq!(Ring::polynomials(&z5, "t").unwrap().to_string(), "(ZZ/5ZZ)[t]");
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Ring>();
        assert_send_sync::<crate::Element>();

        let z23 = Ring::integers_mod(23).unwrap();
        let handle = {
            let z23 = z23.clone();
            std::thread::spawn(move || z23.coerce(25).unwrap())
        };
        assert_eq!(handle.join().unwrap(), z23.coerce(2).unwrap());
    }

    #[test]
    fn test_accessors() {
        let z5 = Ring::integers_mod(5).unwrap();
        let r = Ring::polynomials(&z5, "x").unwrap();
        assert_eq!(z5.modulus(), Some(&Integer::new(5)));
        assert_eq!(r.base_ring(), Some(&z5));
        assert_eq!(r.variable_name(), Some('x'));
        assert_eq!(Ring::integers().modulus(), None);
    }
}
