//! The coercion graph and its resolution algorithm.
//!
//! Every ring owns a table of incoming edges `source -> self`, registered
//! once at construction. Resolving an element into a ring is a depth-first
//! search over these tables: an element already in the target is returned
//! as-is, otherwise each edge is tried in registration order by first
//! resolving the element into the edge's source and then applying the
//! edge's map. The first edge that succeeds wins.
//!
//! Registration rejects edges that would close a cycle, and resolution is
//! additionally bounded by [`CoercionConfig::max_depth`].

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::config::CoercionConfig;
use crate::element::{Element, Operand};
use crate::error::{Result, RingError};
use crate::ring::{Ring, RingKind};

/// Maps an element of an edge's source ring into the target ring, which is
/// passed as the first argument.
pub type CoercionMap = Arc<dyn Fn(&Ring, &Element) -> Result<Element> + Send + Sync>;

/// A directed edge `source -> target` in the coercion graph.
#[derive(Clone)]
pub struct CoercionEdge {
    source: Ring,
    map: CoercionMap,
}

impl CoercionEdge {
    /// The ring elements are coerced from.
    #[must_use]
    pub fn source(&self) -> &Ring {
        &self.source
    }

    fn apply(&self, target: &Ring, element: &Element) -> Result<Element> {
        (self.map)(target, element)
    }
}

impl fmt::Debug for CoercionEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoercionEdge")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// The incoming coercion edges of one ring, in registration order.
#[derive(Clone, Debug, Default)]
pub struct CoercionTable {
    edges: SmallVec<[CoercionEdge; 2]>,
}

impl CoercionTable {
    /// Registers an edge `source -> target`.
    ///
    /// Fails if `source` already has an edge into `target`, or if `target`
    /// is reachable from `source` (the new edge would close a cycle).
    pub(crate) fn register(&mut self, target: &RingKind, source: Ring, map: CoercionMap) -> Result<()> {
        if self.edges.iter().any(|e| e.source == source) {
            return Err(RingError::Construction(format!(
                "coercion {source} -> {target} is already registered"
            )));
        }
        if reaches(&source, target) {
            return Err(RingError::Construction(format!(
                "coercion {source} -> {target} would create a cycle"
            )));
        }

        log::debug!("registered coercion {source} -> {target}");
        self.edges.push(CoercionEdge { source, map });
        Ok(())
    }

    /// Iterates over the edges in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CoercionEdge> {
        self.edges.iter()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edges are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Returns true if a ring with identity `target` is `from` or one of its
/// transitive coercion sources.
fn reaches(from: &Ring, target: &RingKind) -> bool {
    let mut visited: FxHashSet<Ring> = FxHashSet::default();
    let mut stack = vec![from.clone()];

    while let Some(ring) = stack.pop() {
        if ring.kind() == target {
            return true;
        }
        if visited.insert(ring.clone()) {
            stack.extend(ring.coercions().iter().map(|e| e.source().clone()));
        }
    }

    false
}

/// Resolves `element` into `target`, following at most
/// `config.max_depth` edges.
pub(crate) fn resolve(
    target: &Ring,
    element: Element,
    config: &CoercionConfig,
    depth: usize,
) -> Result<Element> {
    if depth > config.max_depth {
        return Err(RingError::CoercionDepthExceeded {
            max_depth: config.max_depth,
        });
    }

    // Identity must short-circuit: no ring has an edge from itself.
    if element.ring() == target {
        return Ok(element);
    }

    for edge in target.coercions().iter() {
        log::trace!(
            "coercing {element} from {} into {target} via {}",
            element.ring(),
            edge.source()
        );
        let attempt = resolve(edge.source(), element.clone(), config, depth + 1)
            .and_then(|e| edge.apply(target, &e));
        match attempt {
            Ok(result) => return Ok(result),
            Err(err) if err.is_coercion_miss() => continue,
            Err(err) => return Err(err),
        }
    }

    Err(RingError::Coercion {
        value: element.to_string(),
        from: element.ring().to_string(),
        to: target.to_string(),
    })
}

/// Brings two operands into a common ring.
///
/// The right operand is first coerced into the left operand's ring, and
/// only if that fails is the left coerced into the right's. When both
/// directions would succeed the left operand's ring wins.
///
/// # Errors
///
/// Returns [`RingError::NoCommonRing`] if neither direction succeeds.
pub fn coerce_pair(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Result<(Element, Element)> {
    coerce_pair_with(&CoercionConfig::default(), lhs, rhs)
}

/// Like [`coerce_pair`], with an explicit resolution config.
///
/// # Errors
///
/// Returns [`RingError::NoCommonRing`] if neither direction succeeds, or a
/// depth error if resolution exceeds `config.max_depth`.
pub fn coerce_pair_with(
    config: &CoercionConfig,
    lhs: impl Into<Operand>,
    rhs: impl Into<Operand>,
) -> Result<(Element, Element)> {
    let lhs = lhs.into().into_element();
    let rhs = rhs.into().into_element();

    match resolve(lhs.ring(), rhs.clone(), config, 0) {
        Ok(rhs) => return Ok((lhs, rhs)),
        Err(err) if err.is_coercion_miss() => {}
        Err(err) => return Err(err),
    }

    match resolve(rhs.ring(), lhs.clone(), config, 0) {
        Ok(lhs) => return Ok((lhs, rhs)),
        Err(err) if err.is_coercion_miss() => {}
        Err(err) => return Err(err),
    }

    Err(RingError::NoCommonRing {
        lhs: lhs.ring().to_string(),
        rhs: rhs.ring().to_string(),
    })
}
