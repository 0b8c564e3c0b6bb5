/*!
# Minimum Spanning Forests

Computes a minimum spanning tree for every connected component of an undirected graph using
either Kruskal's or Prim's algorithm. The output contains one [`UndirectedGraph`] per component,
ordered by the earliest created vertex of the component; vertices without edges become
single-vertex graphs.
*/

use super::*;
use std::{cmp::Reverse, collections::BinaryHeap};

/// Algorithm used by [`minimum_spanning_forest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MstAlgo {
    /// Globally sort all edges and join components via union-find
    #[default]
    Kruskal,
    /// Grow one tree per component with a priority queue of candidate edges
    Prim,
}

/// Computes a minimum spanning forest of an undirected graph.
///
/// Returns [`GraphError::UnsupportedOperation`] for directed graphs.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = UndirectedGraph::from_edges([(1, 2, 4), (2, 3, 1), (1, 3, 2), (7, 8, 5)]);
///
/// let forest = minimum_spanning_forest(&graph, MstAlgo::Prim).unwrap();
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest[0].total_weight(), 3);
/// assert_eq!(forest[1].total_weight(), 5);
///
/// let directed = DirectedGraph::from_edges([(1, 2, 4)]);
/// assert!(minimum_spanning_forest(&directed, MstAlgo::Kruskal).is_err());
/// ```
pub fn minimum_spanning_forest<G>(graph: &G, algo: MstAlgo) -> Result<Vec<UndirectedGraph<G::Data>>>
where
    G: AdjacencyList,
{
    if G::is_directed() {
        warn!(?algo, "minimum spanning forest requested for a directed graph");
        return Err(GraphError::UnsupportedOperation(
            "minimum spanning forest of a directed graph",
        ));
    }

    let forest = match algo {
        MstAlgo::Kruskal => kruskal(graph),
        MstAlgo::Prim => prim(graph),
    };

    debug!(
        ?algo,
        components = forest.len(),
        total_weight = forest.iter().map(|t| t.total_weight()).sum::<Weight>(),
        "computed minimum spanning forest"
    );
    Ok(forest)
}

fn kruskal<G: AdjacencyList>(graph: &G) -> Vec<UndirectedGraph<G::Data>> {
    let mut sets = UnionFind::from_items(graph.vertices());

    let mut edges = graph.edges().collect_vec();
    edges.sort_by_key(|e| e.weight);

    let tree_edges = edges
        .into_iter()
        .filter(|e| sets.merge(e.from, e.to))
        .collect_vec();

    sets.into_graphs(tree_edges)
}

fn prim<G: AdjacencyList>(graph: &G) -> Vec<UndirectedGraph<G::Data>> {
    let mut visited: FxHashSet<G::Data> = FxHashSet::default();
    let mut forest = Vec::new();

    // heap entries refer to `candidates`; the index breaks weight ties in insertion order
    let mut candidates: Vec<Edge<G::Data>> = Vec::new();
    let mut heap: BinaryHeap<Reverse<(Weight, usize)>> = BinaryHeap::new();

    for root in graph.vertices() {
        if !visited.insert(root) {
            continue;
        }

        let mut tree = UndirectedGraph::new();
        tree.add_vertex(root);

        let mut reached = Some(root);
        while let Some(u) = reached.take() {
            for e in graph.out_edges_of(u).filter(|e| !visited.contains(&e.to)) {
                heap.push(Reverse((e.weight, candidates.len())));
                candidates.push(e);
            }

            while let Some(Reverse((_, idx))) = heap.pop() {
                let e = candidates[idx];
                if visited.insert(e.to) {
                    tree.add_edge(e.from, e.to, e.weight);
                    reached = Some(e.to);
                    break;
                }
            }
        }

        forest.push(tree);
    }

    forest
}

/// Provides spanning tree algorithms as methods on graphs
pub trait SpanningTrees: AdjacencyList {
    /// See [`minimum_spanning_forest`]
    fn minimum_spanning_forest(&self, algo: MstAlgo) -> Result<Vec<UndirectedGraph<Self::Data>>> {
        minimum_spanning_forest(self, algo)
    }

    /// See [`minimum_spanning_arborescences`]
    fn minimum_spanning_arborescences(
        &self,
        algo: DmstAlgo,
    ) -> Result<Vec<DirectedGraph<Self::Data>>> {
        minimum_spanning_arborescences(self, algo)
    }
}

impl<G: AdjacencyList> SpanningTrees for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_graph;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn components_and_weights(forest: &[UndirectedGraph<u32>]) -> Vec<(Vec<u32>, Weight)> {
        forest
            .iter()
            .map(|t| (t.vertices().sorted().collect_vec(), t.total_weight()))
            .collect_vec()
    }

    #[test]
    fn isolated_vertices_form_own_trees() {
        let mut graph = UndirectedGraph::from_edges([(0, 1, 3)]);
        graph.add_vertex(2);

        for algo in [MstAlgo::Kruskal, MstAlgo::Prim] {
            let forest = graph.minimum_spanning_forest(algo).unwrap();
            assert_eq!(forest.len(), 2);
            assert_eq!(forest[1].vertices().collect_vec(), vec![2]);
            assert!(forest[1].is_singleton_graph());
        }

        let empty: UndirectedGraph<u32> = UndirectedGraph::new();
        assert!(empty.minimum_spanning_forest(MstAlgo::Prim).unwrap().is_empty());
    }

    #[test]
    fn ignores_self_loops_and_negative_weights() {
        let graph = UndirectedGraph::from_edges([(0, 0, -10), (0, 1, -2), (1, 2, 5), (0, 2, 1)]);

        for algo in [MstAlgo::Kruskal, MstAlgo::Prim] {
            let forest = graph.minimum_spanning_forest(algo).unwrap();
            assert_eq!(forest.len(), 1);
            assert_eq!(forest[0].number_of_edges(), 2);
            assert_eq!(forest[0].total_weight(), -1);
        }
    }

    #[test]
    fn directed_input_is_rejected() {
        let graph = DirectedGraph::from_edges([(0, 1, 3)]);
        assert!(matches!(
            graph.minimum_spanning_forest(MstAlgo::Kruskal),
            Err(GraphError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn kruskal_and_prim_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [5u32, 10, 30, 60] {
            for m_ub in [n / 2, n, 3 * n] {
                for _ in 0..10 {
                    let graph: UndirectedGraph<u32> = random_graph(rng, n, m_ub, -10..30);

                    let kruskal = graph.minimum_spanning_forest(MstAlgo::Kruskal).unwrap();
                    let prim = graph.minimum_spanning_forest(MstAlgo::Prim).unwrap();

                    assert_eq!(components_and_weights(&kruskal), components_and_weights(&prim));

                    for tree in kruskal.iter().chain(prim.iter()) {
                        assert_eq!(tree.number_of_edges() + 1, tree.number_of_vertices());
                        for e in tree.edges() {
                            assert_eq!(graph.weight_of(e.from, e.to), Some(e.weight));
                        }
                    }

                    let covered: usize = kruskal.iter().map(|t| t.len()).sum();
                    assert_eq!(covered, graph.len());
                }
            }
        }
    }
}
