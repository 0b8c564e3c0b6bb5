/*!
# Topological Sorting

Orders the vertices of a DAG such that every edge points forward. Two algorithms are available:
Kahn's algorithm repeatedly removes vertices without remaining predecessors (FIFO, seeded in
creation order) and the reverse-postorder algorithm reverses a depth-first search postorder.
*/

use super::*;
use std::collections::VecDeque;

/// Algorithm used by [`topological_sort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TopoSortAlgo {
    #[default]
    Kahn,
    ReversePostorder,
}

/// Kahn's algorithm. If `reverse` is set, edges are followed backwards.
/// The result is shorter than the number of vertices iff the graph has a cycle.
pub(crate) fn kahn_order<G: AdjacencyList>(graph: &G, reverse: bool) -> Vec<G::Data> {
    let mut remaining: FxHashMap<G::Data, NumEdges> = graph
        .vertices()
        .map(|u| {
            let deg = if reverse {
                graph.out_degree_of(u)
            } else {
                graph.in_degree_of(u)
            };
            (u, deg.unwrap_or(0))
        })
        .collect();

    let mut queue: VecDeque<G::Data> = graph
        .vertices()
        .filter(|u| remaining.get(u) == Some(&0))
        .collect();
    let mut order = Vec::with_capacity(graph.len());

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for v in graph.directed_neighbors_of(u, reverse) {
            if let Some(deg) = remaining.get_mut(&v) {
                *deg -= 1;
                if *deg == 0 {
                    queue.push_back(v);
                }
            }
        }
    }

    order
}

/// Computes a topological order of a directed acyclic graph.
/// If `reverse` is set, the order of the reversed graph is returned.
///
/// Returns [`GraphError::InvalidArgument`] if the graph is not a DAG, i.e. if it is undirected or
/// has a cycle.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = DirectedGraph::from_edges([("shirt", "tie"), ("tie", "jacket"), ("pants", "shoes")]);
///
/// let order = topological_sort(&graph, false, TopoSortAlgo::Kahn).unwrap();
/// assert_eq!(order, vec!["shirt", "pants", "tie", "shoes", "jacket"]);
///
/// let order = topological_sort(&graph, true, TopoSortAlgo::Kahn).unwrap();
/// assert_eq!(order, vec!["jacket", "shoes", "tie", "pants", "shirt"]);
/// ```
pub fn topological_sort<G>(graph: &G, reverse: bool, algo: TopoSortAlgo) -> Result<Vec<G::Data>>
where
    G: AdjacencyList,
{
    if G::is_undirected() {
        warn!(?algo, "topological sort requested for an undirected graph");
        return Err(GraphError::InvalidArgument(
            "topological sort of an undirected graph",
        ));
    }

    let order = kahn_order(graph, reverse);
    if order.len() < graph.len() {
        warn!(
            ?algo,
            vertices = graph.len(),
            sorted = order.len(),
            "topological sort requested for a cyclic graph"
        );
        return Err(GraphError::InvalidArgument("graph has a cycle"));
    }

    Ok(match algo {
        TopoSortAlgo::Kahn => order,
        TopoSortAlgo::ReversePostorder => {
            let mut order = DepthFirstSearch::new(graph.vertices(), |u| {
                graph.directed_neighbors_of(u, reverse)
            })
            .postorder()
            .collect_vec();
            order.reverse();
            order
        }
    })
}

/// Provides topological sorting as a method on graphs
pub trait TopologicalSort: AdjacencyList {
    /// See [`topological_sort`]
    fn topological_sort(&self, algo: TopoSortAlgo) -> Result<Vec<Self::Data>> {
        topological_sort(self, false, algo)
    }

    /// See [`topological_sort`]
    fn reverse_topological_sort(&self, algo: TopoSortAlgo) -> Result<Vec<Self::Data>> {
        topological_sort(self, true, algo)
    }
}

impl<G: AdjacencyList> TopologicalSort for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_edges;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn is_topological<G: AdjacencyList>(graph: &G, order: &[G::Data], reverse: bool) -> bool {
        let position: FxHashMap<_, _> = order.iter().enumerate().map(|(i, &u)| (u, i)).collect();
        order.len() == graph.len()
            && graph.edges().all(|e| {
                let (before, after) = if reverse { (e.to, e.from) } else { (e.from, e.to) };
                position[&before] < position[&after]
            })
    }

    #[test]
    fn rpo_follows_dfs() {
        let graph = DirectedGraph::from_edges([(0, 1), (0, 2), (2, 1), (3, 1)]);
        let order = graph.topological_sort(TopoSortAlgo::ReversePostorder).unwrap();
        assert_eq!(order, vec![3, 0, 2, 1]);

        let order = graph.reverse_topological_sort(TopoSortAlgo::ReversePostorder).unwrap();
        assert!(is_topological(&graph, &order, true));
    }

    #[test]
    fn rejects_cycles_and_undirected() {
        let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 1)]);
        for algo in [TopoSortAlgo::Kahn, TopoSortAlgo::ReversePostorder] {
            assert!(matches!(
                graph.topological_sort(algo),
                Err(GraphError::InvalidArgument(_))
            ));
        }

        let graph = UndirectedGraph::from_edges([(0, 1)]);
        assert!(matches!(
            graph.topological_sort(TopoSortAlgo::Kahn),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn random_dags() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [1u32, 8, 40] {
            for _ in 0..20 {
                // orienting every edge towards the larger vertex keeps the graph acyclic
                let edges = random_edges(rng, n, 2 * n, 0..1)
                    .into_iter()
                    .filter(|e| !e.is_loop())
                    .map(|e| Edge::unweighted(e.from.min(e.to), e.from.max(e.to)));
                let graph = DirectedGraph::from_vertices_and_edges((0..n).rev(), edges);

                for algo in [TopoSortAlgo::Kahn, TopoSortAlgo::ReversePostorder] {
                    for reverse in [false, true] {
                        let order = topological_sort(&graph, reverse, algo).unwrap();
                        assert!(is_topological(&graph, &order, reverse));
                    }
                }
            }
        }
    }
}
