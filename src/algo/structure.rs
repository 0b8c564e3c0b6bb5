/*!
# Structural Operations

Copying, reversing and comparing whole graphs. Cloning is provided by [`Clone`] on
[`Graph`](crate::repr::Graph); the copy shares the caller-owned vertex data but owns all
adjacency structures.
*/

use super::*;

/// Whole-graph transformations and comparisons
pub trait GraphStructure: AdjacencyList + GraphNew + GraphEdgeEditing {
    /// Returns a new graph with every edge `(u, v, w)` replaced by `(v, u, w)`.
    /// Vertices are created in the same order as in `self`.
    /// For undirected graphs this is a plain copy.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let graph = DirectedGraph::from_edges([("a", "b", 3), ("b", "c", 4)]);
    /// let rev = graph.reversed();
    ///
    /// assert_eq!(rev.weight_of("b", "a"), Some(3));
    /// assert!(!rev.has_edge("a", "b"));
    /// assert_eq!(rev.vertices().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    /// ```
    fn reversed(&self) -> Self {
        let mut rev = Self::new();
        for u in self.vertices() {
            rev.add_vertex(u);
        }
        rev.add_edges(self.edges().map(|e| e.reverse()));
        rev
    }

    /// Returns *true* if `other` has the same kind, the same vertex data and the same edges with
    /// the same weights. Creation order is irrelevant.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let a = UndirectedGraph::from_edges([(1, 2, 5), (2, 3, 1)]);
    /// let b = UndirectedGraph::from_edges([(3, 2, 1), (2, 1, 5)]);
    /// assert!(a.is_same(&b));
    ///
    /// let c = DirectedGraph::from_edges([(1, 2, 5), (2, 3, 1)]);
    /// assert!(!a.is_same(&c));
    /// ```
    fn is_same<G>(&self, other: &G) -> bool
    where
        G: AdjacencyList<Data = Self::Data>,
    {
        Self::kind() == G::kind()
            && self.number_of_vertices() == other.number_of_vertices()
            && self.number_of_edges() == other.number_of_edges()
            && self.adjacency_map() == other.adjacency_map()
    }
}

impl<G: AdjacencyList + GraphNew + GraphEdgeEditing> GraphStructure for G {}
