//! Structural properties of a ring.

use std::fmt;

/// A single property a ring may have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RingProperty {
    /// The ring has finitely many elements.
    Finite,
    /// Every nonzero element is a unit.
    Field,
    /// The ring carries a total order compatible with its arithmetic.
    Ordered,
}

/// The property flags of a ring, fixed when the ring is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RingProperties {
    /// See [`RingProperty::Finite`].
    pub finite: bool,
    /// See [`RingProperty::Field`].
    pub field: bool,
    /// See [`RingProperty::Ordered`].
    pub ordered: bool,
}

impl RingProperties {
    /// Looks up a single flag.
    #[must_use]
    pub const fn has(self, property: RingProperty) -> bool {
        match property {
            RingProperty::Finite => self.finite,
            RingProperty::Field => self.field,
            RingProperty::Ordered => self.ordered,
        }
    }
}

impl fmt::Display for RingProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Finite => "FINITE",
            Self::Field => "FIELD",
            Self::Ordered => "ORDERED",
        };
        f.write_str(name)
    }
}
