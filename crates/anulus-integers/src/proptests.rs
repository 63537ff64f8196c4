//! Property-based tests for integer helpers.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{factorize, is_prime, Integer};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn modulus() -> impl Strategy<Value = i64> {
        1i64..500i64
    }

    proptest! {
        #[test]
        fn rem_euclid_in_range(a in small_int(), n in modulus()) {
            let n = Integer::new(n);
            let r = Integer::new(a).rem_euclid(&n);
            prop_assert!(!r.is_negative());
            prop_assert!(r < n);
        }

        #[test]
        fn rem_euclid_congruent(a in small_int(), n in modulus()) {
            let a = Integer::new(a);
            let n = Integer::new(n);
            let r = a.rem_euclid(&n);
            prop_assert!(((a - r) % n).is_zero());
        }

        #[test]
        fn div_floor_matches_i64(a in small_int(), b in modulus()) {
            let q = Integer::new(a).div_floor(&Integer::new(b));
            prop_assert_eq!(q.to_i64(), Some(a.div_euclid(b)));
        }

        #[test]
        fn mod_pow_matches_repeated_mul(a in small_int(), e in 0u32..12, n in modulus()) {
            let a = Integer::new(a);
            let n = Integer::new(n);
            let expected = a.pow(e).rem_euclid(&n);
            prop_assert_eq!(a.mod_pow(&Integer::from(i64::from(e)), &n), expected);
        }

        #[test]
        fn factorize_multiplies_back(n in 2i64..5000) {
            let factors = factorize(&Integer::new(n));
            let product = factors.iter().fold(Integer::one(), |acc, f| acc * f.clone());
            prop_assert_eq!(product, Integer::new(n));
            prop_assert!(factors.iter().all(is_prime));
        }

        #[test]
        fn prime_iff_single_factor(n in 2i64..5000) {
            let n = Integer::new(n);
            prop_assert_eq!(is_prime(&n), factorize(&n).len() == 1);
        }
    }
}
