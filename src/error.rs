/*!
# Errors

All algorithms of this crate are *fail-soft*: misuse never aborts the process. Instead, a
diagnostic is emitted via [`tracing`] and a [`GraphError`] is returned so that callers can
compose algorithms with `?`.

Queries on unknown vertices do not produce errors at all; they report absence through
`Option` (e.g. [`AdjacencyList::in_degree_of`](crate::ops::AdjacencyList::in_degree_of)) or
empty iterators.
*/

use thiserror::Error;

/// Errors returned by graph algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GraphError {
    /// The request itself is malformed (e.g. a walk on an undirected graph without start vertices).
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The algorithm does not apply to this kind of graph or is not implemented.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// A vertex that was explicitly referenced is not part of the graph.
    #[error("Vertex not found: {0}")]
    NotFound(&'static str),
}

/// Shorthand for results of fallible graph algorithms.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            GraphError::UnsupportedOperation("directed graph").to_string(),
            "Unsupported operation: directed graph"
        );
        assert_eq!(
            GraphError::NotFound("walk start").to_string(),
            "Vertex not found: walk start"
        );
    }
}
