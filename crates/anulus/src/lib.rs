//! # anulus
//!
//! A small computer-algebra kernel.
//!
//! Three kinds of ring compose through automatic coercion:
//!
//! - **Integers**: `ZZ`, the root every other ring coerces from
//! - **Integers mod n**: `ZZ/nZZ`, with inverses by extended Euclid
//! - **Polynomials**: `R[x]` over any ring `R`, including other polynomial rings
//!
//! ## Quick Start
//!
//! ```rust
//! use anulus::prelude::*;
//!
//! let z5 = Ring::integers_mod(5)?;
//! let r = Ring::polynomials(&z5, "x")?;
//! let x = r.variable()?;
//!
//! // (x + 1)^2 over ZZ/5ZZ
//! let square = x.add(1)?.pow(2)?;
//! assert_eq!(square.to_string(), "1 + 2 x + 1 x^2");
//! # Ok::<(), anulus::rings::RingError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use anulus_integers as integers;
pub use anulus_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use anulus_integers::Integer;
    pub use anulus_rings::{
        coerce_pair, CoercionConfig, Element, Operand, Ring, RingError, RingProperty,
    };
}
