//! Errors raised by ring construction, coercion, and arithmetic.

use thiserror::Error;

/// Errors that can occur while building rings or operating on their elements.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RingError {
    /// No coercion path leads from the element's ring into the target ring.
    #[error("unable to coerce {value} from {from} into {to} by any path")]
    Coercion {
        /// The rendered element.
        value: String,
        /// The ring the element belongs to.
        from: String,
        /// The ring it was being coerced into.
        to: String,
    },

    /// Neither operand of a binary operation coerces into the other's ring.
    #[error("could not find a common ring for {lhs} and {rhs}")]
    NoCommonRing {
        /// Ring of the left operand.
        lhs: String,
        /// Ring of the right operand.
        rhs: String,
    },

    /// Coercion resolution recursed deeper than the configured bound.
    #[error("coercion exceeded the maximum depth of {max_depth}")]
    CoercionDepthExceeded {
        /// The configured bound.
        max_depth: usize,
    },

    /// The operation is undefined for the given operand.
    #[error("{0}")]
    Domain(String),

    /// Division by an element with no multiplicative inverse.
    #[error("{value} has no inverse mod {modulus}")]
    NotInvertible {
        /// The non-unit residue.
        value: String,
        /// The modulus of its ring.
        modulus: String,
    },

    /// Malformed ring parameters or coercion graph.
    #[error("invalid ring construction: {0}")]
    Construction(String),
}

impl RingError {
    /// Returns true if this error means "no path found", which lets the
    /// resolver move on to the next candidate edge.
    #[must_use]
    pub fn is_coercion_miss(&self) -> bool {
        matches!(self, Self::Coercion { .. } | Self::NoCommonRing { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = RingError> = std::result::Result<T, E>;
