//! The ring of integers ZZ.

use std::fmt;

use anulus_integers::Integer;

use crate::element::{Element, Value};
use crate::error::Result;
use crate::properties::RingProperties;
use crate::ring::Ring;
use crate::traits::Domain;

/// The ring of integers.
///
/// Stateless: there is exactly one integer ring, obtained with
/// [`Ring::integers`]. It sits at the root of every coercion graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntegerDomain;

fn integer(ring: &Ring, value: Integer) -> Element {
    Element::new(ring.clone(), Value::Integer(value))
}

impl Domain for IntegerDomain {
    fn properties(&self) -> RingProperties {
        RingProperties {
            finite: false,
            field: false,
            ordered: true,
        }
    }

    fn add(&self, ring: &Ring, a: &Element, b: &Element) -> Result<Element> {
        Ok(integer(ring, a.value().as_integer()? + b.value().as_integer()?))
    }

    fn sub(&self, ring: &Ring, a: &Element, b: &Element) -> Result<Element> {
        Ok(integer(ring, a.value().as_integer()? - b.value().as_integer()?))
    }

    fn mul(&self, ring: &Ring, a: &Element, b: &Element) -> Result<Element> {
        Ok(integer(ring, a.value().as_integer()? * b.value().as_integer()?))
    }

    fn neg(&self, ring: &Ring, a: &Element) -> Result<Element> {
        let value = a.value().as_integer()?;
        Ok(integer(ring, -value))
    }

    fn fmt_element(&self, a: &Element, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match a.value() {
            Value::Integer(n) => write!(f, "{n}"),
            _ => Err(fmt::Error),
        }
    }

    fn fmt_ring(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ZZ")
    }
}
