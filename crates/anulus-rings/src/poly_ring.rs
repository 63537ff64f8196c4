//! Univariate polynomial rings R[x].
//!
//! Elements store their coefficients in ascending degree order and are
//! always kept in normal form: the highest coefficient is never zero, and
//! the zero polynomial is the empty sequence.

use std::fmt;
use std::sync::Arc;

use crate::coercion::{CoercionMap, CoercionTable};
use crate::element::{Element, Operand, Value};
use crate::error::{Result, RingError};
use crate::properties::{RingProperties, RingProperty};
use crate::ring::{Ring, RingKind};
use crate::traits::Domain;

/// The ring of polynomials over `base` in one variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PolynomialDomain {
    base: Ring,
    var: char,
}

impl PolynomialDomain {
    pub(crate) fn ring(base: &Ring, var: &str) -> Result<Ring> {
        let mut chars = var.chars();
        let var = match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => c,
            _ => {
                return Err(RingError::Construction(format!(
                    "polynomial variable must be a single character, got {var:?}"
                )))
            }
        };

        let kind = RingKind::Polynomial(Self {
            base: base.clone(),
            var,
        });
        let from_base: CoercionMap = Arc::new(|target: &Ring, r: &Element| -> Result<Element> {
            match target.kind() {
                RingKind::Polynomial(d) => d.constant(target, r),
                _ => Err(RingError::Domain(format!("{target} is not a polynomial ring"))),
            }
        });

        let mut coercions = CoercionTable::default();
        coercions.register(&kind, base.clone(), from_base)?;
        Ok(Ring::from_parts(kind, coercions))
    }

    /// The coefficient ring.
    #[must_use]
    pub fn base(&self) -> &Ring {
        &self.base
    }

    /// The variable symbol.
    #[must_use]
    pub fn var(&self) -> char {
        self.var
    }

    /// Wraps an element of the base ring as a degree-0 polynomial.
    fn constant(&self, ring: &Ring, r: &Element) -> Result<Element> {
        if r.ring() != &self.base {
            return Err(RingError::Domain(format!(
                "constant {r} belongs to {}, not {}",
                r.ring(),
                self.base
            )));
        }
        Ok(self.normalized(ring, vec![r.clone()]))
    }

    /// Drops zero coefficients from the high-degree end.
    fn normalized(&self, ring: &Ring, mut coeffs: Vec<Element>) -> Element {
        while coeffs.last().is_some_and(Element::is_zero) {
            coeffs.pop();
        }
        Element::new(ring.clone(), Value::Polynomial(coeffs))
    }

    fn from_operands(&self, ring: &Ring, coeffs: impl IntoIterator<Item = Operand>) -> Result<Element> {
        let coeffs = coeffs
            .into_iter()
            .map(|c| self.base.coerce(c))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.normalized(ring, coeffs))
    }

    /// Combines coefficients pairwise, padding the shorter operand with zeros.
    fn zip_with(
        &self,
        ring: &Ring,
        a: &Element,
        b: &Element,
        op: impl Fn(&Element, &Element) -> Result<Element>,
    ) -> Result<Element> {
        let a = a.value().as_coefficients()?;
        let b = b.value().as_coefficients()?;
        let zero = self.base.zero()?;

        let coeffs = (0..a.len().max(b.len()))
            .map(|i| op(a.get(i).unwrap_or(&zero), b.get(i).unwrap_or(&zero)))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.normalized(ring, coeffs))
    }

    fn fmt_monomial(&self, c: &Element, n: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match n {
            0 => write!(f, "{c}"),
            1 => write!(f, "{c} {}", self.var),
            _ => write!(f, "{c} {}^{n}", self.var),
        }
    }
}

impl Domain for PolynomialDomain {
    /// Never a field, since `x` has no inverse; ordered iff the base is.
    fn properties(&self) -> RingProperties {
        RingProperties {
            finite: false,
            field: false,
            ordered: self.base.has_property(RingProperty::Ordered),
        }
    }

    fn add(&self, ring: &Ring, a: &Element, b: &Element) -> Result<Element> {
        let base = self.base.domain();
        self.zip_with(ring, a, b, |x, y| base.add(&self.base, x, y))
    }

    fn sub(&self, ring: &Ring, a: &Element, b: &Element) -> Result<Element> {
        let base = self.base.domain();
        self.zip_with(ring, a, b, |x, y| base.sub(&self.base, x, y))
    }

    fn mul(&self, ring: &Ring, a: &Element, b: &Element) -> Result<Element> {
        let a = a.value().as_coefficients()?;
        let b = b.value().as_coefficients()?;
        if a.is_empty() || b.is_empty() {
            return Ok(self.normalized(ring, Vec::new()));
        }

        let base = self.base.domain();
        let mut coeffs = vec![self.base.zero()?; a.len() + b.len() - 1];
        for (i, x) in a.iter().enumerate() {
            for (j, y) in b.iter().enumerate() {
                let term = base.mul(&self.base, x, y)?;
                coeffs[i + j] = base.add(&self.base, &coeffs[i + j], &term)?;
            }
        }
        Ok(self.normalized(ring, coeffs))
    }

    fn neg(&self, ring: &Ring, a: &Element) -> Result<Element> {
        let base = self.base.domain();
        let coeffs = a
            .value()
            .as_coefficients()?
            .iter()
            .map(|c| base.neg(&self.base, c))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.normalized(ring, coeffs))
    }

    fn fmt_element(&self, a: &Element, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(coeffs) = a.value().as_coefficients() else {
            return Err(fmt::Error);
        };
        if coeffs.is_empty() {
            let zero = self.base.zero().map_err(|_| fmt::Error)?;
            return write!(f, "{zero}");
        }

        let mut first = true;
        for (n, c) in coeffs.iter().enumerate().filter(|(_, c)| !c.is_zero()) {
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            self.fmt_monomial(c, n, f)?;
        }
        Ok(())
    }

    fn fmt_ring(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.base.kind() {
            RingKind::IntegersMod(_) => write!(f, "({})[{}]", self.base, self.var),
            _ => write!(f, "{}[{}]", self.base, self.var),
        }
    }
}

impl Ring {
    fn polynomial_domain(&self) -> Result<&PolynomialDomain> {
        match self.kind() {
            RingKind::Polynomial(d) => Ok(d),
            _ => Err(RingError::Domain(format!("{self} is not a polynomial ring"))),
        }
    }

    /// Builds a polynomial from coefficients in ascending degree order.
    ///
    /// Every coefficient is coerced into the base ring, and trailing zeros
    /// are dropped.
    ///
    /// # Errors
    ///
    /// Fails if this is not a polynomial ring or a coefficient does not
    /// coerce into the base ring.
    pub fn poly<I>(&self, coeffs: I) -> Result<Element>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        self.polynomial_domain()?
            .from_operands(self, coeffs.into_iter().map(Into::into))
    }

    /// The polynomial `x`.
    ///
    /// # Errors
    ///
    /// Fails if this is not a polynomial ring.
    pub fn variable(&self) -> Result<Element> {
        self.poly([0, 1])
    }
}

impl Element {
    /// The degree of a polynomial.
    ///
    /// # Errors
    ///
    /// Fails for the zero polynomial, whose degree is undefined, and for
    /// elements of rings that are not polynomial rings.
    pub fn degree(&self) -> Result<usize> {
        let coeffs = self.value().as_coefficients()?;
        if coeffs.is_empty() {
            return Err(RingError::Domain(
                "zero polynomial has no degree".to_string(),
            ));
        }
        Ok(coeffs.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zx() -> Ring {
        Ring::polynomials(&Ring::integers(), "x").unwrap()
    }

    #[test]
    fn test_constants() {
        let zx = zx();
        assert_eq!(zx.coerce(4).unwrap(), zx.poly([4]).unwrap());
        assert_eq!(zx.coerce(0).unwrap(), zx.poly(Vec::<i64>::new()).unwrap());

        let four = Ring::integers().coerce(4).unwrap();
        assert_eq!(zx.coerce(&four).unwrap(), zx.poly([4]).unwrap());
    }

    #[test]
    fn test_normal_form() {
        let zx = zx();
        assert_eq!(zx.poly([1, 2, 0]).unwrap(), zx.poly([1, 2]).unwrap());
        assert_eq!(zx.poly([0, 0, 0]).unwrap(), zx.zero().unwrap());
        assert_eq!(zx.poly([1, 2, 0, 0]).unwrap().coefficients().unwrap().len(), 2);
    }

    #[test]
    fn test_arithmetic() {
        let zx = zx();
        let x = zx.variable().unwrap();

        let linear = zx.coerce(4).unwrap().add(zx.coerce(5).unwrap().mul(&x).unwrap()).unwrap();
        assert_eq!(zx.poly([4, 5]).unwrap(), linear);

        let cubic = x.pow(3).unwrap().sub(4).unwrap();
        assert_eq!(zx.poly([-4, 0, 0, 1]).unwrap(), cubic);

        let product = zx.poly([1, 1]).unwrap().mul(zx.poly([-1, 1]).unwrap()).unwrap();
        assert_eq!(product, zx.poly([-1, 0, 1]).unwrap());

        // x^2 - x^2 collapses to zero
        let diff = x.pow(2).unwrap().sub(x.pow(2).unwrap()).unwrap();
        assert!(diff.is_zero());
    }

    #[test]
    fn test_mul_by_zero() {
        let zx = zx();
        let p = zx.poly([3, 2, 1]).unwrap();
        assert!(p.mul(zx.zero().unwrap()).unwrap().is_zero());
        assert!(zx.zero().unwrap().mul(&p).unwrap().is_zero());
    }

    #[test]
    fn test_degree() {
        let zx = zx();
        assert_eq!(zx.poly([3, 2, 1, 5]).unwrap().degree().unwrap(), 3);
        assert_eq!(zx.coerce(4).unwrap().degree().unwrap(), 0);
        assert!(matches!(zx.coerce(0).unwrap().degree(), Err(RingError::Domain(_))));
        assert!(Ring::integers().coerce(3).unwrap().degree().is_err());
    }

    #[test]
    fn test_negative_power() {
        let x = zx().variable().unwrap();
        assert!(matches!(x.pow(-1), Err(RingError::Domain(_))));
    }

    #[test]
    fn test_display() {
        let r = Ring::polynomials(&Ring::integers_mod(5).unwrap(), "x").unwrap();
        assert_eq!(r.zero().unwrap().to_string(), "0");
        assert_eq!(r.one().unwrap().to_string(), "1");
        assert_eq!(r.poly([1, 2, -3]).unwrap().to_string(), "1 + 2 x + 2 x^2");
        assert_eq!(r.poly(Vec::<i64>::new()).unwrap().to_string(), "0");
        assert_eq!(r.poly([1]).unwrap().to_string(), "1");
        assert_eq!(r.poly([0, 0, 3]).unwrap().to_string(), "3 x^2");
    }

    #[test]
    fn test_reduction_in_coefficients() {
        let z5 = Ring::integers_mod(5).unwrap();
        let r = Ring::polynomials(&z5, "x").unwrap();
        assert_eq!(r.poly([5, 10]).unwrap(), r.zero().unwrap());
        let sum = r.poly([3, 4]).unwrap().add(r.poly([2, 1]).unwrap()).unwrap();
        assert!(sum.is_zero());
    }

    #[test]
    fn test_construction_errors() {
        let zz = Ring::integers();
        assert!(matches!(Ring::polynomials(&zz, "xy"), Err(RingError::Construction(_))));
        assert!(matches!(Ring::polynomials(&zz, ""), Err(RingError::Construction(_))));
        assert!(matches!(zz.poly([1, 2]), Err(RingError::Domain(_))));
    }

    #[test]
    fn test_properties() {
        let zx = zx();
        assert!(!zx.has_property(RingProperty::Finite));
        assert!(!zx.has_property(RingProperty::Field));
        assert!(zx.has_property(RingProperty::Ordered));

        let over_field = Ring::polynomials(&Ring::integers_mod(5).unwrap(), "x").unwrap();
        assert!(!over_field.has_property(RingProperty::Field));
        assert!(!over_field.has_property(RingProperty::Ordered));
    }

    #[test]
    fn test_nested_polynomials() {
        let zx = zx();
        let zxy = Ring::polynomials(&zx, "y").unwrap();
        assert_eq!(zxy.to_string(), "ZZ[x][y]");

        // ZZ -> ZZ[x] -> ZZ[x][y]
        let seven = zxy.coerce(7).unwrap();
        assert_eq!(seven.coefficients().unwrap(), &[zx.coerce(7).unwrap()]);

        let x = zx.variable().unwrap();
        let y = zxy.variable().unwrap();
        let sum = y.add(&x).unwrap();
        assert_eq!(sum.ring(), &zxy);
        assert_eq!(sum, zxy.poly([x.clone(), zx.one().unwrap()]).unwrap());
    }

    #[test]
    fn test_coefficients_from_other_rings() {
        let z5 = Ring::integers_mod(5).unwrap();
        let r = Ring::polynomials(&z5, "x").unwrap();
        let three = z5.coerce(3).unwrap();
        let p = r.poly([Operand::from(&three), Operand::from(1)]).unwrap();
        assert_eq!(p, r.poly([3, 1]).unwrap());

        let seven = Ring::integers_mod(7).unwrap().coerce(3).unwrap();
        assert!(matches!(r.poly([seven]), Err(RingError::Coercion { .. })));
    }

    #[test]
    fn test_constant_rejects_foreign_element() {
        let z5 = Ring::integers_mod(5).unwrap();
        let r = Ring::polynomials(&z5, "x").unwrap();
        let RingKind::Polynomial(domain) = r.kind() else {
            panic!("expected a polynomial ring");
        };

        let three = z5.coerce(3).unwrap();
        assert_eq!(domain.constant(&r, &three).unwrap(), r.poly([3]).unwrap());
        assert!(domain.constant(&r, &z5.zero().unwrap()).unwrap().is_zero());

        // an integer is not a residue until it has been coerced
        let raw = Ring::integers().coerce(3).unwrap();
        assert!(matches!(domain.constant(&r, &raw), Err(RingError::Domain(_))));
        let other = Ring::integers_mod(7).unwrap().coerce(3).unwrap();
        assert!(matches!(domain.constant(&r, &other), Err(RingError::Domain(_))));
    }
}
