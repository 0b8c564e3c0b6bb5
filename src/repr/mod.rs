/*!
# Graph Representation

A single adjacency-list representation [`Graph<T, D>`] parameterized by the vertex data `T` and
a direction marker `D` ([`Directed`] or [`Undirected`]). Use the aliases [`DirectedGraph`] and
[`UndirectedGraph`].

Vertices live in an arena of slots indexed by [`VertexId`]; a side table maps the caller's data
to its id. Every vertex stores a list of outgoing and a list of incoming arcs. Each arc appears
in exactly one out-list and one in-list with the same weight. Undirected graphs store both arcs
`u -> v` and `v -> u` (a self-loop is stored once).

Removing a vertex leaves an empty slot behind and ids are never handed out twice, so a stale
[`VertexId`] resolves to `None` instead of a different vertex. The arena therefore grows with
the number of vertices ever created, and scans such as `vertices()` and `edges()` run in time
linear in that number. Graphs with heavy vertex churn should be rebuilt from their live
vertices and edges (e.g. via [`GraphFromScratch`]) once the arena is mostly empty.
*/

use std::{fmt::Debug, marker::PhantomData};

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{ops::*, *};

mod directed;
mod neighborhood;
mod undirected;

pub use directed::*;
pub use neighborhood::*;
pub use undirected::*;

#[derive(Clone)]
struct VertexEntry<T> {
    data: T,
    out_nbs: Neighborhood,
    in_nbs: Neighborhood,
}

impl<T> VertexEntry<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            out_nbs: Neighborhood::default(),
            in_nbs: Neighborhood::default(),
        }
    }
}

/// Weighted adjacency-list graph over caller-owned vertex data
#[derive(Clone)]
pub struct Graph<T, D> {
    slots: Vec<Option<VertexEntry<T>>>,
    lookup: FxHashMap<T, VertexId>,
    num_vertices: NumVertices,
    num_edges: NumEdges,
    _dir: PhantomData<D>,
}

impl<T: VertexData, D: GraphDir> Graph<T, D> {
    /// Returns the id of a vertex if it is part of the graph
    pub fn vertex_id(&self, u: T) -> Option<VertexId> {
        self.lookup.get(&u).copied()
    }

    /// Returns the data of a vertex id if the id refers to a live vertex
    pub fn data_of(&self, id: VertexId) -> Option<T> {
        self.slot(id).map(|e| e.data)
    }

    fn slot(&self, id: VertexId) -> Option<&VertexEntry<T>> {
        self.slots.get(id.index())?.as_ref()
    }

    fn slot_mut(&mut self, id: VertexId) -> Option<&mut VertexEntry<T>> {
        self.slots.get_mut(id.index())?.as_mut()
    }

    fn entry(&self, u: T) -> Option<&VertexEntry<T>> {
        self.slot(self.vertex_id(u)?)
    }

    fn live_slots(&self) -> impl Iterator<Item = (VertexId, &VertexEntry<T>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|e| (VertexId::from_index(i), e)))
    }

    /// Inserts `u -> v` into the out-list of `u` and the in-list of `v`
    fn insert_arc(&mut self, u: VertexId, v: VertexId, w: Weight) -> Option<Weight> {
        let prev = self
            .slot_mut(u)
            .and_then(|e| e.out_nbs.try_add_neighbor(v, w));
        if let Some(e) = self.slot_mut(v) {
            e.in_nbs.try_add_neighbor(u, w);
        }
        prev
    }

    /// Removes `u -> v` from the out-list of `u` and the in-list of `v`
    fn remove_arc(&mut self, u: VertexId, v: VertexId) -> Option<Weight> {
        let w = self.slot_mut(u)?.out_nbs.try_remove_neighbor(v)?;
        if let Some(e) = self.slot_mut(v) {
            e.in_nbs.try_remove_neighbor(u);
        }
        Some(w)
    }
}

impl<T: VertexData, D: GraphDir> Default for Graph<T, D> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            lookup: FxHashMap::default(),
            num_vertices: 0,
            num_edges: 0,
            _dir: PhantomData,
        }
    }
}

impl<T: VertexData + Debug, D: GraphDir> Debug for Graph<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("kind", &D::KIND)
            .field("vertices", &self.vertices().collect_vec())
            .field("edges", &self.edges().collect_vec())
            .finish()
    }
}

/// Graphs are equal if they have the same vertices and the same weighted edges
impl<T: VertexData, D: GraphDir> PartialEq for Graph<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.num_vertices == other.num_vertices
            && self.num_edges == other.num_edges
            && self.adjacency_map() == other.adjacency_map()
    }
}

impl<T: VertexData, D: GraphDir> Eq for Graph<T, D> {}

impl<T: VertexData, D: GraphDir> GraphType for Graph<T, D> {
    type Dir = D;
}

impl<T: VertexData, D: GraphDir> GraphVertexOrder for Graph<T, D> {
    type Data = T;

    fn number_of_vertices(&self) -> NumVertices {
        self.num_vertices
    }

    fn vertices(&self) -> impl Iterator<Item = T> + '_ {
        self.slots.iter().flatten().map(|e| e.data)
    }

    fn has_vertex(&self, u: T) -> bool {
        self.lookup.contains_key(&u)
    }
}

impl<T: VertexData, D: GraphDir> GraphEdgeOrder for Graph<T, D> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    fn edges(&self) -> impl Iterator<Item = Edge<T>> + '_ {
        let all_arcs = D::KIND == GraphKind::Directed;
        self.live_slots().flat_map(move |(u, entry)| {
            entry
                .out_nbs
                .arcs()
                .iter()
                .filter(move |a| all_arcs || u <= a.vertex)
                .filter_map(move |a| Some(Edge::new(entry.data, self.data_of(a.vertex)?, a.weight)))
        })
    }
}

impl<T: VertexData, D: GraphDir> AdjacencyList for Graph<T, D> {
    fn out_neighbors_of(&self, u: T) -> impl Iterator<Item = T> + '_ {
        self.entry(u)
            .into_iter()
            .flat_map(|e| e.out_nbs.neighbors())
            .filter_map(move |v| self.data_of(v))
    }

    fn in_neighbors_of(&self, u: T) -> impl Iterator<Item = T> + '_ {
        self.entry(u)
            .into_iter()
            .flat_map(|e| e.in_nbs.neighbors())
            .filter_map(move |v| self.data_of(v))
    }

    fn out_degree_of(&self, u: T) -> Option<NumEdges> {
        self.entry(u).map(|e| e.out_nbs.num_of_neighbors())
    }

    fn in_degree_of(&self, u: T) -> Option<NumEdges> {
        self.entry(u).map(|e| e.in_nbs.num_of_neighbors())
    }

    fn out_edges_of(&self, u: T) -> impl Iterator<Item = Edge<T>> + '_ {
        self.entry(u).into_iter().flat_map(move |e| {
            e.out_nbs
                .arcs()
                .iter()
                .filter_map(move |a| Some(Edge::new(e.data, self.data_of(a.vertex)?, a.weight)))
        })
    }

    fn in_edges_of(&self, u: T) -> impl Iterator<Item = Edge<T>> + '_ {
        self.entry(u).into_iter().flat_map(move |e| {
            e.in_nbs
                .arcs()
                .iter()
                .filter_map(move |a| Some(Edge::new(self.data_of(a.vertex)?, e.data, a.weight)))
        })
    }

    fn weight_of(&self, u: T, v: T) -> Option<Weight> {
        let v = self.vertex_id(v)?;
        self.entry(u)?.out_nbs.weight_to(v)
    }
}

impl<T: VertexData, D: GraphDir> GraphNew for Graph<T, D> {
    fn new() -> Self {
        Self::default()
    }
}

impl<T: VertexData, D: GraphDir> GraphEdgeEditing for Graph<T, D> {
    fn add_vertex(&mut self, u: T) -> VertexId {
        if let Some(id) = self.vertex_id(u) {
            return id;
        }

        let id = VertexId::from_index(self.slots.len());
        self.slots.push(Some(VertexEntry::new(u)));
        self.lookup.insert(u, id);
        self.num_vertices += 1;
        id
    }

    fn remove_vertex(&mut self, u: T) -> bool {
        let Some(id) = self.lookup.remove(&u) else {
            return false;
        };
        let Some(entry) = self.slots.get_mut(id.index()).and_then(Option::take) else {
            return false;
        };

        for v in entry.out_nbs.neighbors().filter(|&v| v != id) {
            if let Some(e) = self.slot_mut(v) {
                e.in_nbs.try_remove_neighbor(id);
            }
        }
        for v in entry.in_nbs.neighbors().filter(|&v| v != id) {
            if let Some(e) = self.slot_mut(v) {
                e.out_nbs.try_remove_neighbor(id);
            }
        }

        let incident = match D::KIND {
            GraphKind::Directed => {
                entry.out_nbs.num_of_neighbors() + entry.in_nbs.num_of_neighbors()
                    - entry.out_nbs.has_neighbor(id) as NumEdges
            }
            GraphKind::Undirected => entry.out_nbs.num_of_neighbors(),
        };

        self.num_edges -= incident;
        self.num_vertices -= 1;
        true
    }

    fn add_edge(&mut self, u: T, v: T, w: Weight) -> Option<Weight> {
        let u = self.add_vertex(u);
        let v = self.add_vertex(v);

        let prev = self.insert_arc(u, v, w);
        if D::KIND == GraphKind::Undirected && u != v {
            self.insert_arc(v, u, w);
        }

        if prev.is_none() {
            self.num_edges += 1;
        }
        prev
    }

    fn remove_edge(&mut self, u: T, v: T) -> Option<Weight> {
        let u = self.vertex_id(u)?;
        let v = self.vertex_id(v)?;

        let w = self.remove_arc(u, v)?;
        if D::KIND == GraphKind::Undirected && u != v {
            self.remove_arc(v, u);
        }

        self.num_edges -= 1;
        Some(w)
    }
}
