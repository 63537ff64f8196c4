//! # anulus-integers
//!
//! Arbitrary precision integer arithmetic for anulus.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Euclidean helpers used by the modular domain (`rem_euclid`, `mod_pow`)
//! - Trial-division primality and factorisation (`is_prime`, `factorize`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod primes;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use primes::{factorize, is_prime};
