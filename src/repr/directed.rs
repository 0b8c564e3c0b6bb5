/*!
# Directed Graphs

[`DirectedGraph`] stores outgoing and incoming arcs per vertex, so both successors and
predecessors are available without scanning the whole graph.

```
use wgraphs::prelude::*;

let mut graph = DirectedGraph::new();
graph.add_edge("a", "b", 3);
graph.add_edge("b", "c", 1);

assert_eq!(graph.in_neighbors_of("b").collect::<Vec<_>>(), vec!["a"]);
assert_eq!(graph.out_degree_of("c"), Some(0));
assert_eq!(graph.out_degree_of("x"), None);
```
*/

use super::*;

/// A weighted directed graph over vertex data `T`
pub type DirectedGraph<T> = Graph<T, Directed>;
