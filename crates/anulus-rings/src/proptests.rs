//! Property-based tests for the ring domains.

#[cfg(test)]
mod tests {
    use anulus_integers::{is_prime, Integer};
    use proptest::prelude::*;

    use crate::{Ring, RingError, RingProperty};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn coeffs() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-20i64..20i64, 0..6)
    }

    fn rings() -> Vec<Ring> {
        let zz = Ring::integers();
        let z23 = Ring::integers_mod(23).unwrap();
        let z22 = Ring::integers_mod(22).unwrap();
        vec![
            Ring::polynomials(&zz, "x").unwrap(),
            Ring::polynomials(&Ring::integers_mod(5).unwrap(), "x").unwrap(),
            zz,
            z23,
            z22,
        ]
    }

    proptest! {
        #[test]
        fn ring_homomorphism(a in small_int(), b in small_int()) {
            for ring in rings() {
                let ea = ring.coerce(a).unwrap();
                let eb = ring.coerce(b).unwrap();
                prop_assert_eq!(ea.add(&eb).unwrap(), ring.coerce(a + b).unwrap());
                prop_assert_eq!(ea.sub(&eb).unwrap(), ring.coerce(a - b).unwrap());
                prop_assert_eq!(ea.mul(&eb).unwrap(), ring.coerce(a * b).unwrap());
                prop_assert_eq!(ea.neg().unwrap(), ring.coerce(-a).unwrap());
            }
        }

        #[test]
        fn literals_coerce_into_every_ring(a in small_int()) {
            for ring in rings() {
                let explicit = ring.element(Ring::integers().coerce(a).unwrap()).unwrap();
                prop_assert!(explicit.try_eq(a).unwrap());
                prop_assert_eq!(explicit, ring.coerce(a).unwrap());
            }
        }

        #[test]
        fn normal_form_idempotent(c in coeffs(), zeros in 0usize..4) {
            let zx = Ring::polynomials(&Ring::integers(), "x").unwrap();
            let mut padded = c.clone();
            padded.extend(std::iter::repeat(0).take(zeros));
            let p = zx.poly(padded).unwrap();
            prop_assert_eq!(&p, &zx.poly(c).unwrap());
            prop_assert!(p.coefficients().unwrap().last().map_or(true, |c| !c.is_zero()));
        }

        #[test]
        fn polynomial_mul_commutes(a in coeffs(), b in coeffs()) {
            let zx = Ring::polynomials(&Ring::integers(), "x").unwrap();
            let p = zx.poly(a).unwrap();
            let q = zx.poly(b).unwrap();
            prop_assert_eq!(p.mul(&q).unwrap(), q.mul(&p).unwrap());
        }

        #[test]
        fn polynomial_degree_adds(a in coeffs(), b in coeffs()) {
            let zx = Ring::polynomials(&Ring::integers(), "x").unwrap();
            let p = zx.poly(a).unwrap();
            let q = zx.poly(b).unwrap();
            prop_assume!(!p.is_zero() && !q.is_zero());
            let product = p.mul(&q).unwrap();
            prop_assert_eq!(product.degree().unwrap(), p.degree().unwrap() + q.degree().unwrap());
        }

        #[test]
        fn inverse_correct(n in 2i64..200, a in small_int()) {
            let ring = Ring::integers_mod(n).unwrap();
            let x = ring.coerce(a).unwrap();
            let coprime = Integer::new(a).gcd(&Integer::new(n)) == Integer::new(1);
            prop_assert_eq!(x.has_inv().unwrap(), coprime);
            match x.inv() {
                Ok(inverse) => {
                    prop_assert!(coprime);
                    prop_assert!(x.mul(&inverse).unwrap().is_one());
                }
                Err(err) => {
                    prop_assert!(!coprime);
                    let is_not_invertible = matches!(err, RingError::NotInvertible { .. });
                    prop_assert!(is_not_invertible);
                }
            }
        }

        #[test]
        fn negative_powers_invert(n in 2i64..100, a in small_int(), e in 0i64..20) {
            let ring = Ring::integers_mod(n).unwrap();
            let x = ring.coerce(a).unwrap();
            prop_assume!(x.has_inv().unwrap());
            let product = x.pow(e).unwrap().mul(x.pow(-e).unwrap()).unwrap();
            prop_assert!(product.is_one());
        }

        #[test]
        fn field_iff_prime(n in 1i64..500) {
            let ring = Ring::integers_mod(n).unwrap();
            prop_assert_eq!(ring.has_property(RingProperty::Field), is_prime(&Integer::new(n)));
        }
    }
}
