//! # anulus-rings
//!
//! Rings, their elements, and coercion between them.
//!
//! This crate provides:
//! - [`Ring`] handles with structural identity and property flags
//! - [`Element`] values that always know their owning ring
//! - A per-ring coercion graph and the resolution algorithm over it
//! - Concrete domains: ZZ, ZZ/nZZ, and univariate polynomials R[x]
//!
//! ## Coercion
//!
//! ```text
//! ZZ ──> ZZ/nZZ ──> (ZZ/nZZ)[x]
//!  └───────────────> ZZ[x] ──> ZZ[x][y]
//! ```
//!
//! Binary operations coerce the right operand into the left operand's ring
//! first and fall back to the other direction, so `x + 1` and `1 + x` both
//! land in `ZZ[x]`. The graph must stay acyclic; registration enforces this
//! and resolution is bounded by [`CoercionConfig::max_depth`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coercion;
pub mod config;
pub mod element;
pub mod error;
pub mod integers;
pub mod poly_ring;
pub mod properties;
pub mod ring;
mod traits;
pub mod zmod;

#[cfg(test)]
mod proptests;

pub use coercion::{coerce_pair, coerce_pair_with, CoercionEdge, CoercionTable};
pub use config::CoercionConfig;
pub use element::{Element, Operand};
pub use error::{Result, RingError};
pub use properties::{RingProperties, RingProperty};
pub use ring::{Ring, RingKind};
