use itertools::Itertools;
use smallvec::SmallVec;

use super::*;

/// Number of arcs stored inline before a neighborhood spills to the heap
pub const INLINE_EDGES: usize = 4;

/// One half of an adjacency entry: the vertex on the other end and the weight of the edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub vertex: VertexId,
    pub weight: Weight,
}

/// Weighted neighborhood of a single vertex.
///
/// Arcs are kept in insertion order; a removal preserves the order of the remaining arcs.
/// Every target occurs at most once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    arcs: SmallVec<[Arc; INLINE_EDGES]>,
}

impl Neighborhood {
    /// Returns the number of neighbors in the Neighborhood
    pub fn num_of_neighbors(&self) -> NumEdges {
        self.arcs.len() as NumEdges
    }

    /// Returns an iterator over all neighbors in the Neighborhood
    pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.arcs.iter().map(|a| a.vertex)
    }

    /// Returns all arcs in insertion order
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Returns the weight of the arc towards `v` if present
    pub fn weight_to(&self, v: VertexId) -> Option<Weight> {
        self.arcs.iter().find(|a| a.vertex == v).map(|a| a.weight)
    }

    /// Returns *true* if `v` is in the Neighborhood
    pub fn has_neighbor(&self, v: VertexId) -> bool {
        self.weight_to(v).is_some()
    }

    /// Adds an arc towards `v` or updates its weight if it already exists.
    /// Returns the previous weight.
    pub fn try_add_neighbor(&mut self, v: VertexId, weight: Weight) -> Option<Weight> {
        if let Some(arc) = self.arcs.iter_mut().find(|a| a.vertex == v) {
            Some(std::mem::replace(&mut arc.weight, weight))
        } else {
            self.arcs.push(Arc { vertex: v, weight });
            None
        }
    }

    /// Removes the arc towards `v` and returns its weight if it was present
    pub fn try_remove_neighbor(&mut self, v: VertexId) -> Option<Weight> {
        let (pos, _) = self.arcs.iter().find_position(|a| a.vertex == v)?;
        Some(self.arcs.remove(pos).weight)
    }

    /// Removes all neighbors in the Neighborhood
    pub fn clear(&mut self) {
        self.arcs.clear();
    }
}
