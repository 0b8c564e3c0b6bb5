/*!
# Vertex Representation

Vertices are identified by **caller-owned data** of some type `T: VertexData`.
In most cases `T` is a shared reference `&'a D` to data living outside of the graph; the borrow
checker then guarantees that the data outlives every graph (and every derived graph) that
mentions it. Small `Copy` keys such as integers or `&'static str` work just as well.

Internally, each graph stores its vertices in an arena and refers to them via [`VertexId`]s.
Ids are handed out in creation order and are **never reused**: once a vertex is removed, its id
stays dead forever, so stale ids can only ever resolve to "unknown".
*/

use std::hash::Hash;

/// Underlying integer type of a [`VertexId`].
/// We use `u32` as almost all use-cases involve less than `2^32` vertices.
pub type RawVertex = u32;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumVertices = RawVertex;

/// Requirements for data identifying a vertex.
///
/// Two vertices are the same iff their data compares equal.
pub trait VertexData: Copy + Eq + Hash {}

impl<T> VertexData for T where T: Copy + Eq + Hash {}

/// Opaque handle of a vertex inside one specific graph.
///
/// Ids are ordered by creation time which makes them usable as a deterministic tie-breaker.
/// They carry no meaning across different graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct VertexId(RawVertex);

impl VertexId {
    /// Creates an id from its raw value
    pub const fn new(raw: RawVertex) -> Self {
        Self(raw)
    }

    /// Returns the raw value of the id
    pub const fn raw(&self) -> RawVertex {
        self.0
    }

    /// Returns the id as an index into the vertex arena
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < RawVertex::MAX as usize);
        Self(index as RawVertex)
    }
}
