/*!
`wgraphs` is a weighted graph data structure & algorithms library for graphs whose vertices are
identified by **caller-owned data**.

# Representation

A vertex is any value `T: Copy + Eq + Hash`, typically a reference `&'a D` to data the caller
owns. The graph never copies or frees the pointee; the borrow checker makes sure it outlives
every graph that mentions it. Internally, vertices are stored in an arena and addressed by
[`VertexId`](crate::vertex::VertexId)s which are handed out in creation order and never reused.

Edges are weighted (`i64`) and unique per ordered pair of endpoints: re-inserting an edge
updates its weight.

### Directed vs Undirected

- [`DirectedGraph<T>`](crate::repr::DirectedGraph) keeps outgoing and incoming arcs per vertex.
- [`UndirectedGraph<T>`](crate::repr::UndirectedGraph) stores every edge in both directions and
  reports it only once when enumerating all edges.

# Design

All algorithms are provided as configurable structs/enums that one can alter to their needs using
the *Builder* / *Setter* pattern before running them on a provided graph. The most commonly used
functionalities are also implemented via traits on the graph itself.

Errors are reported through [`GraphError`](crate::error::GraphError); algorithms never panic on
unsuitable input but return an error and emit a `tracing` diagnostic.

# Usage

```
use wgraphs::{prelude::*, algo::*};

let mut graph = UndirectedGraph::new();
graph.add_edge("a", "b", 2);
graph.add_edge("b", "c", 1);
graph.add_edge("a", "c", 3);

let forest = graph.minimum_spanning_forest(MstAlgo::Kruskal).unwrap();
assert_eq!(forest.len(), 1);
assert_eq!(forest[0].total_weight(), 3);
```

There are *2* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, errors, basic graph operations and both graph variants,
- [`algo`] includes traversals, union-find, spanning forests/arborescences, cycle/bipartite checks and topological sorting.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod vertex;

pub use edge::*;
pub use error::*;
pub use vertex::*;

/// `wgraphs::prelude` includes definitions for vertices, edges and errors, all basic graph operation traits as well as both graph variants.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, ops::*, repr::*, vertex::*};
}
