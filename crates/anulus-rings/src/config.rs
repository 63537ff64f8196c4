//! Configuration for coercion resolution.

/// Bounds applied while searching the coercion graph.
#[derive(Clone, Debug)]
pub struct CoercionConfig {
    /// Maximum number of edges followed in a single resolution.
    pub max_depth: usize,
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self { max_depth: 16 }
    }
}

impl CoercionConfig {
    /// Creates a config with the given depth bound.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}
