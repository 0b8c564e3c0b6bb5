/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversals, union-find, minimum spanning forests and arborescences, cycle and
bipartiteness checks, topological sorting and whole-graph operations.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
Algorithms that only make sense for one kind of graph return a [`GraphError`] for the other.
*/

mod acyclic;
mod arborescence;
mod bipartite;
mod mst;
mod structure;
mod topo;
mod traversal;
mod union_find;

use crate::{Result, prelude::*};
use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use tracing::{debug, trace, warn};

pub use acyclic::*;
pub use arborescence::*;
pub use bipartite::*;
pub use mst::*;
pub use structure::*;
pub use topo::*;
pub use traversal::*;
pub use union_find::*;

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: [(char, char, Weight); 8] = [
        ('A', 'B', 2),
        ('A', 'C', 3),
        ('B', 'C', 1),
        ('B', 'D', 4),
        ('C', 'D', 5),
        ('C', 'E', 6),
        ('D', 'E', 7),
        ('F', 'G', 8),
    ];

    fn summary<G: AdjacencyList<Data = char>>(forest: &[G]) -> Vec<(String, Weight)> {
        forest
            .iter()
            .map(|t| (t.vertices().sorted().collect(), t.total_weight()))
            .collect_vec()
    }

    #[test]
    fn spanning_forest_of_example() {
        let directed = DirectedGraph::from_edges(EXAMPLE);
        for algo in [MstAlgo::Kruskal, MstAlgo::Prim] {
            assert!(matches!(
                minimum_spanning_forest(&directed, algo),
                Err(GraphError::UnsupportedOperation(_))
            ));
        }

        let undirected = UndirectedGraph::from_edges(EXAMPLE);
        for algo in [MstAlgo::Kruskal, MstAlgo::Prim] {
            let forest = undirected.minimum_spanning_forest(algo).unwrap();
            assert_eq!(
                summary(&forest),
                vec![(String::from("ABCDE"), 13), (String::from("FG"), 8)]
            );
        }
    }

    #[test]
    fn arborescences_of_example() {
        let directed = DirectedGraph::from_edges(EXAMPLE);
        let trees = directed
            .minimum_spanning_arborescences(DmstAlgo::ChuLiuEdmonds)
            .unwrap();

        assert_eq!(
            summary(&trees),
            vec![(String::from("ABCDE"), 13), (String::from("FG"), 8)]
        );
        assert_eq!(trees[0].sources().collect_vec(), vec!['A']);
        assert_eq!(trees[0].weight_of('B', 'C'), Some(1));

        let undirected = UndirectedGraph::from_edges(EXAMPLE);
        assert!(
            undirected
                .minimum_spanning_arborescences(DmstAlgo::ChuLiuEdmonds)
                .is_err()
        );
    }

    #[test]
    fn traversal_of_example() {
        let graph = DirectedGraph::from_edges([
            ('A', 'B'),
            ('A', 'C'),
            ('B', 'D'),
            ('C', 'E'),
            ('E', 'D'),
            ('F', 'G'),
        ]);

        let pre: String = graph
            .walk(&Walk::new(WalkOrder::DfsPreorder))
            .unwrap()
            .into_iter()
            .collect();
        let post: String = graph
            .walk(&Walk::new(WalkOrder::DfsPostorder))
            .unwrap()
            .into_iter()
            .collect();

        assert_eq!(pre, "ABDCEFG");
        assert_eq!(post, "DBECAGF");

        assert!(graph.is_dag());
        assert!(!graph.has_cycle());
        assert!(!graph.is_bipartite());

        for algo in [TopoSortAlgo::Kahn, TopoSortAlgo::ReversePostorder] {
            let order = graph.topological_sort(algo).unwrap();
            let position: FxHashMap<_, _> =
                order.iter().enumerate().map(|(i, &u)| (u, i)).collect();
            assert_eq!(order.len(), graph.len());
            assert!(graph.edges().all(|e| position[&e.from] < position[&e.to]));
        }
    }

    #[test]
    fn borrowed_vertex_data() {
        let cities = ["Bonn", "Kiel", "Jena", "Gera"].map(String::from);
        let [bonn, kiel, jena, gera] = &cities;

        let mut graph = UndirectedGraph::new();
        graph.add_edge(bonn, kiel, 5);
        graph.add_edge(kiel, jena, 2);
        graph.add_edge(bonn, jena, 4);
        graph.add_vertex(gera);

        let forest = graph.minimum_spanning_forest(MstAlgo::Prim).unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].total_weight(), 6);
        assert!(forest[1].has_vertex(gera));

        let copy = graph.reversed();
        assert!(copy.is_same(&graph));
    }
}
