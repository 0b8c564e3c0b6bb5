/*!
# Graph Operations

Basic graph operations are split into small traits so that algorithms can state exactly what
they need from a graph:

- [`GraphType`] tells whether a graph is directed or undirected (at type level and at runtime),
- [`GraphVertexOrder`] / [`GraphEdgeOrder`] give access to the vertex/edge sets,
- [`AdjacencyList`] provides neighborhood, degree & edge queries,
- [`GraphNew`] / [`GraphEdgeEditing`] create & mutate graphs.

All queries are keyed by the caller's vertex data. Queries on unknown vertices never panic:
iterators are empty and degrees are `None`.
*/

use std::fmt::Debug;

use fxhash::FxHashMap;
use itertools::Either;

use crate::*;

/// Runtime tag distinguishing directed from undirected graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    Directed,
    Undirected,
}

/// Type-level marker for the direction of a graph
pub trait GraphDir: Debug + Copy + Default + Send + Sync + 'static {
    const KIND: GraphKind;
}

/// Marker for directed graphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker for undirected graphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl GraphDir for Directed {
    const KIND: GraphKind = GraphKind::Directed;
}

impl GraphDir for Undirected {
    const KIND: GraphKind = GraphKind::Undirected;
}

/// Associates a graph with its direction
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns the runtime tag of the graph type
    fn kind() -> GraphKind {
        <Self::Dir as GraphDir>::KIND
    }

    /// Returns *true* if edges are directed
    fn is_directed() -> bool {
        Self::kind() == GraphKind::Directed
    }

    /// Returns *true* if edges are undirected
    fn is_undirected() -> bool {
        Self::kind() == GraphKind::Undirected
    }

    /// Same as [`GraphType::kind`] but callable on an instance
    fn graph_kind(&self) -> GraphKind {
        Self::kind()
    }
}

/// Provides getters pertaining to the vertex-size of a graph
pub trait GraphVertexOrder {
    /// Caller-owned data identifying a vertex
    type Data: VertexData;

    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns an iterator over V in creation order
    fn vertices(&self) -> impl Iterator<Item = Self::Data> + '_;

    /// Returns *true* if the vertex is part of the graph
    fn has_vertex(&self, u: Self::Data) -> bool;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder: GraphVertexOrder {
    /// Returns the number of logical edges of the graph.
    /// An undirected edge `{u, v}` is counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over all edges in the graph.
    /// For undirected graphs, every edge is reported exactly once.
    fn edges(&self) -> impl Iterator<Item = Edge<Self::Data>> + '_;

    /// Returns the sum of all edge weights
    fn total_weight(&self) -> Weight {
        self.edges().map(|e| e.weight).sum()
    }

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges.
///
/// For undirected graphs, out- and in-neighborhoods coincide.
pub trait AdjacencyList: GraphEdgeOrder + GraphType + Sized {
    /// Returns an iterator over all `v` with an edge `(u, v)`.
    /// Empty if `u` is unknown.
    fn out_neighbors_of(&self, u: Self::Data) -> impl Iterator<Item = Self::Data> + '_;

    /// Returns an iterator over all `v` with an edge `(v, u)`.
    /// Empty if `u` is unknown.
    fn in_neighbors_of(&self, u: Self::Data) -> impl Iterator<Item = Self::Data> + '_;

    /// Returns the number of outgoing edges of `u` or `None` if `u` is unknown
    fn out_degree_of(&self, u: Self::Data) -> Option<NumEdges>;

    /// Returns the number of incoming edges of `u` or `None` if `u` is unknown
    fn in_degree_of(&self, u: Self::Data) -> Option<NumEdges>;

    /// Returns an iterator over all edges `(u, v)`
    fn out_edges_of(&self, u: Self::Data) -> impl Iterator<Item = Edge<Self::Data>> + '_;

    /// Returns an iterator over all edges `(v, u)`
    fn in_edges_of(&self, u: Self::Data) -> impl Iterator<Item = Edge<Self::Data>> + '_;

    /// Returns the weight of edge `(u, v)` if it exists
    fn weight_of(&self, u: Self::Data, v: Self::Data) -> Option<Weight>;

    /// Returns *true* if the edge `(u, v)` exists
    fn has_edge(&self, u: Self::Data, v: Self::Data) -> bool {
        self.weight_of(u, v).is_some()
    }

    /// Returns successors of `u`, or predecessors if `reverse` is set
    fn directed_neighbors_of(
        &self,
        u: Self::Data,
        reverse: bool,
    ) -> impl Iterator<Item = Self::Data> + '_ {
        if reverse {
            Either::Left(self.in_neighbors_of(u))
        } else {
            Either::Right(self.out_neighbors_of(u))
        }
    }

    /// Replaces the content of `out` by all edges `(u, v)`
    fn out_edges_into(&self, u: Self::Data, out: &mut Vec<Edge<Self::Data>>) {
        out.clear();
        out.extend(self.out_edges_of(u));
    }

    /// Replaces the content of `out` by all edges `(v, u)`
    fn in_edges_into(&self, u: Self::Data, out: &mut Vec<Edge<Self::Data>>) {
        out.clear();
        out.extend(self.in_edges_of(u));
    }

    /// Replaces the content of `out` by all edges incident to `u`:
    /// incoming edges first and, for directed graphs, outgoing edges afterwards.
    fn edges_into(&self, u: Self::Data, out: &mut Vec<Edge<Self::Data>>) {
        self.in_edges_into(u, out);
        if Self::is_directed() {
            out.extend(self.out_edges_of(u));
        }
    }

    /// Returns all vertices without incoming edges in creation order
    fn sources(&self) -> impl Iterator<Item = Self::Data> + '_ {
        self.vertices()
            .filter(|&u| self.in_degree_of(u) == Some(0))
    }

    /// Returns all vertices without outgoing edges in creation order
    fn sinks(&self) -> impl Iterator<Item = Self::Data> + '_ {
        self.vertices()
            .filter(|&u| self.out_degree_of(u) == Some(0))
    }

    /// Snapshot `u -> {v -> w}` of all edges `(u, v)` of weight `w`.
    /// Vertices without outgoing edges map to an empty inner map.
    fn adjacency_map(&self) -> FxHashMap<Self::Data, FxHashMap<Self::Data, Weight>> {
        self.vertices()
            .map(|u| (u, self.out_edges_of(u).map(|e| (e.to, e.weight)).collect()))
            .collect()
    }

    /// Snapshot `v -> {u -> w}` of all edges `(u, v)` of weight `w`.
    /// Vertices without incoming edges map to an empty inner map.
    fn reverse_adjacency_map(&self) -> FxHashMap<Self::Data, FxHashMap<Self::Data, Weight>> {
        self.vertices()
            .map(|v| (v, self.in_edges_of(v).map(|e| (e.from, e.weight)).collect()))
            .collect()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph
    fn new() -> Self;
}

/// Provides functions to insert/delete vertices and edges
pub trait GraphEdgeEditing: GraphVertexOrder {
    /// Adds a vertex and returns its id.
    /// If the vertex is already present, its existing id is returned.
    fn add_vertex(&mut self, u: Self::Data) -> VertexId;

    /// Removes a vertex together with all incident edges.
    /// Returns *false* if the vertex was not present.
    fn remove_vertex(&mut self, u: Self::Data) -> bool;

    /// Adds the edge `(u, v)` of weight `w`, registering missing endpoints.
    /// If the edge already exists, its weight is updated and the previous weight is returned.
    fn add_edge(&mut self, u: Self::Data, v: Self::Data, w: Weight) -> Option<Weight>;

    /// Adds the edge `(u, v)` of weight `0`
    fn add_unweighted_edge(&mut self, u: Self::Data, v: Self::Data) -> Option<Weight> {
        self.add_edge(u, v, 0)
    }

    /// Removes the edge `(u, v)` and returns its weight if it was present
    fn remove_edge(&mut self, u: Self::Data, v: Self::Data) -> Option<Weight>;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge<Self::Data>>>) {
        for e in edges.into_iter().map(|e| e.into()) {
            self.add_edge(e.from, e.to, e.weight);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of vertices and edges
pub trait GraphFromScratch: GraphVertexOrder {
    /// Create a graph from an iterator over edges
    fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge<Self::Data>>>) -> Self;

    /// Create a graph from vertices (added first, in order) and edges
    fn from_vertices_and_edges(
        vertices: impl IntoIterator<Item = Self::Data>,
        edges: impl IntoIterator<Item = impl Into<Edge<Self::Data>>>,
    ) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge<Self::Data>>>) -> Self {
        let mut graph = Self::new();
        graph.add_edges(edges);
        graph
    }

    fn from_vertices_and_edges(
        vertices: impl IntoIterator<Item = Self::Data>,
        edges: impl IntoIterator<Item = impl Into<Edge<Self::Data>>>,
    ) -> Self {
        let mut graph = Self::new();
        for u in vertices {
            graph.add_vertex(u);
        }
        graph.add_edges(edges);
        graph
    }
}
