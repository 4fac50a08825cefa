/*!
# Errors

Fallible graph mutations report failures through [`GraphError`] instead of
panicking; the panicking variants (e.g. `RouteGraph::add_edge`) are thin
asserting wrappers around their `try_*` counterparts.
*/

use thiserror::Error;

/// Errors produced by graph mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge was added from a node that was never added to the graph.
    #[error("unknown source node '{0}'")]
    UnknownSource(String),
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, GraphError>;
