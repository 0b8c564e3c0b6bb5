/*!
# Cycle Detection

Directed graphs are acyclic iff a Kahn pass consumes all vertices. Undirected graphs are acyclic
iff they are forests: scanning all edges with a union-find, an edge whose endpoints are already
connected (or a self-loop) closes a cycle.
*/

use super::*;

/// Provides cycle and DAG checks on graphs
pub trait AcyclicTest: AdjacencyList {
    /// Returns *true* if the graph contains a cycle.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let path = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
    /// assert!(!path.has_cycle());
    ///
    /// let triangle = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)]);
    /// assert!(triangle.has_cycle());
    /// ```
    fn has_cycle(&self) -> bool {
        if Self::is_directed() {
            return kahn_order(self, false).len() < self.len();
        }

        let mut sets = UnionFind::from_items(self.vertices());
        self.edges().any(|e| !sets.merge(e.from, e.to))
    }

    /// Returns *true* if the graph is directed and acyclic
    fn is_dag(&self) -> bool {
        Self::is_directed() && !self.has_cycle()
    }
}

impl<G: AdjacencyList> AcyclicTest for G {}

/// Returns *true* if the graph contains a cycle. See [`AcyclicTest::has_cycle`].
pub fn has_cycle<G: AdjacencyList>(graph: &G) -> bool {
    graph.has_cycle()
}

/// Returns *true* if the graph is a directed acyclic graph. See [`AcyclicTest::is_dag`].
pub fn is_dag<G: AdjacencyList>(graph: &G) -> bool {
    graph.is_dag()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed() {
        let mut graph = DirectedGraph::from_edges([(0, 1), (1, 2), (0, 2), (3, 2)]);
        assert!(!graph.has_cycle());
        assert!(graph.is_dag());

        graph.add_unweighted_edge(2, 3);
        assert!(has_cycle(&graph));
        assert!(!is_dag(&graph));

        graph.remove_edge(3, 2);
        graph.add_unweighted_edge(1, 1);
        assert!(graph.has_cycle());
    }

    #[test]
    fn undirected() {
        let mut graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (3, 4)]);
        assert!(!graph.has_cycle());
        assert!(!graph.is_dag());

        graph.add_unweighted_edge(2, 0);
        assert!(graph.has_cycle());

        let graph = UndirectedGraph::from_edges([(5, 5)]);
        assert!(graph.has_cycle());
    }

    #[test]
    fn empty() {
        let graph: DirectedGraph<u32> = DirectedGraph::new();
        assert!(!graph.has_cycle());
        assert!(graph.is_dag());
    }
}
