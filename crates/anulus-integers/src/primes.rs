//! Primality testing and factorisation.
//!
//! [`is_prime`] runs a strong pseudoprime (Miller-Rabin) test, so it stays
//! cheap for moduli of any size. [`factorize`] still uses trial division
//! and is only practical when the second-largest prime factor is small.

use num_traits::{One, Zero};

use crate::Integer;

/// Witness bases for the strong pseudoprime test. Together they give no
/// false positives below 318_665_857_834_031_151_167_461 (about 3.2e23).
const WITNESSES: [i64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Returns the smallest prime factor of `n`, or `n` itself if `n` is prime.
///
/// `n` must be at least 2. Takes O(sqrt(p)) divisions for smallest factor `p`.
fn smallest_factor(n: &Integer) -> Integer {
    let two = Integer::new(2);
    if (n % &two).is_zero() {
        return two;
    }

    let mut r = Integer::new(3);
    while &r * &r <= *n {
        if (n % &r).is_zero() {
            return r;
        }
        r = r + &two;
    }
    n.clone()
}

/// One strong pseudoprime round for odd `n` with `n - 1 = d * 2^s`, `d` odd.
fn passes_round(a: &Integer, n: &Integer, n_minus_one: &Integer, d: &Integer, s: u32) -> bool {
    let mut x = a.mod_pow(d, n);
    if x.is_one() || x == *n_minus_one {
        return true;
    }
    for _ in 1..s {
        x = (&x * &x).rem_euclid(n);
        if x == *n_minus_one {
            return true;
        }
    }
    false
}

/// Returns true if `n` is prime. Values below 2 are never prime.
///
/// Exact below about 3.2e23; above that a composite is reported as prime
/// only if it is a strong pseudoprime to all twelve bases 2..=37.
#[must_use]
pub fn is_prime(n: &Integer) -> bool {
    if *n < Integer::new(2) {
        return false;
    }
    for w in WITNESSES {
        let w = Integer::new(w);
        if *n == w {
            return true;
        }
        if (n % &w).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - &Integer::one();
    let two = Integer::new(2);
    let mut d = n_minus_one.clone();
    let mut s = 0;
    while !d.is_odd() {
        d = d / two.clone();
        s += 1;
    }

    WITNESSES
        .iter()
        .all(|&a| passes_round(&Integer::new(a), n, &n_minus_one, &d, s))
}

/// Factors `n` into primes, returned in ascending order with multiplicity.
///
/// Returns an empty vector for `n < 2`. Uses trial division, so the cost
/// grows with the square root of the second-largest prime factor.
#[must_use]
pub fn factorize(n: &Integer) -> Vec<Integer> {
    let mut factors = Vec::new();
    if *n < Integer::new(2) {
        return factors;
    }

    let mut n = n.clone();
    while !n.is_one() {
        if is_prime(&n) {
            factors.push(n);
            break;
        }
        let k = smallest_factor(&n);
        n = n / k.clone();
        factors.push(k);
    }
    factors.sort();
    factors
}
