/*!
# Bipartiteness

A graph is bipartite if its vertices can be split into two sides such that every edge joins
vertices of different sides. Edge directions are ignored: a directed graph is bipartite iff its
underlying undirected graph is. Graphs with self-loops are never bipartite.

```
use wgraphs::{prelude::*, algo::*};

let square = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
assert!(square.is_bipartite());

let triangle = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)]);
assert!(!triangle.is_bipartite());
```
*/

use super::*;

/// Two-colouring based checks on graphs
pub trait BipartiteTest: AdjacencyList {
    /// Checks whether `side` is a valid bipartition: every edge must have exactly one endpoint
    /// contained in `side`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    /// use fxhash::FxHashSet;
    ///
    /// let graph = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
    ///
    /// let good: FxHashSet<_> = [1].into_iter().collect();
    /// let bad: FxHashSet<_> = [0, 1].into_iter().collect();
    /// assert!(graph.is_bipartition(&good));
    /// assert!(!graph.is_bipartition(&bad));
    /// ```
    fn is_bipartition(&self, side: &FxHashSet<Self::Data>) -> bool {
        self.edges()
            .all(|e| side.contains(&e.from) != side.contains(&e.to))
    }

    /// Computes a bipartition of the graph and returns one of its sides, or `None` if the graph
    /// is not bipartite. The returned side contains the first vertex of every component.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (5, 6)]);
    /// let side = graph.compute_bipartition().unwrap();
    ///
    /// assert!(side.contains(&0) && side.contains(&2) && side.contains(&5));
    /// assert!(!side.contains(&1) && !side.contains(&6));
    /// ```
    fn compute_bipartition(&self) -> Option<FxHashSet<Self::Data>> {
        let mut colour: FxHashMap<Self::Data, bool> = FxHashMap::default();

        for root in self.vertices() {
            if colour.contains_key(&root) {
                continue;
            }
            colour.insert(root, true);

            // the successor closure colours every newly reached neighbour opposite to `u`
            BreadthFirstSearch::new([root], |u| {
                let side = colour.get(&u).copied().unwrap_or(true);
                let nbs = self
                    .out_neighbors_of(u)
                    .chain(self.in_neighbors_of(u))
                    .collect_vec();
                for &v in &nbs {
                    colour.entry(v).or_insert(!side);
                }
                nbs
            })
            .for_each(drop);
        }

        let side: FxHashSet<_> = colour
            .into_iter()
            .filter_map(|(u, s)| s.then_some(u))
            .collect();

        if self.is_bipartition(&side) {
            Some(side)
        } else {
            trace!("two-colouring is inconsistent; graph is not bipartite");
            None
        }
    }

    /// Returns *true* if the graph is bipartite
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G: AdjacencyList> BipartiteTest for G {}

/// Returns *true* if the graph is bipartite. See [`BipartiteTest::is_bipartite`].
pub fn is_bipartite<G: AdjacencyList>(graph: &G) -> bool {
    graph.is_bipartite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path() {
        for n in 1..10u32 {
            let mut graph = UndirectedGraph::new();
            graph.add_vertex(0);
            for u in 0..n - 1 {
                graph.add_unweighted_edge(u, u + 1);
            }

            assert!(graph.is_bipartite());

            if n > 2 {
                let mut graph = graph.clone();
                graph.remove_edge(n / 2, n / 2 - 1);
                assert!(graph.is_bipartite());
            }

            if n > 2 {
                let mut graph = graph.clone();
                graph.add_unweighted_edge(1 - (n % 2), n - 1);
                assert!(!graph.is_bipartite());
            }
        }
    }

    #[test]
    fn direction_is_ignored() {
        // a triangle once directions are dropped
        let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (0, 2)]);
        assert!(!graph.is_bipartite());

        let graph = DirectedGraph::from_edges([(0, 1), (2, 1), (2, 3), (0, 3)]);
        let side = graph.compute_bipartition().unwrap();
        assert!(graph.is_bipartition(&side));
        assert!(side.contains(&0) && side.contains(&2));
    }

    #[test]
    fn self_loops_and_empty() {
        let graph = UndirectedGraph::from_edges([(0, 0)]);
        assert!(!is_bipartite(&graph));

        let empty: DirectedGraph<u32> = DirectedGraph::new();
        assert!(empty.compute_bipartition().unwrap().is_empty());
    }
}
