use super::*;

/// A weighted undirected graph over vertex data `T`.
///
/// Inserting `{u, v}` makes `v` an out- and in-neighbor of `u` and vice versa.
/// [`GraphEdgeOrder::edges`] reports every edge once, oriented from the earlier created endpoint.
pub type UndirectedGraph<T> = Graph<T, Undirected>;
