//! Shared test helpers.
//!
//! Every graph variant should pass the tests generated by `test_graph_ops!`.

use fxhash::FxHashMap;
use itertools::Itertools;
use rand::Rng;

use crate::{ops::*, *};

/// Creates a list of at most `m_ub` random weighted edges between vertices `0..n`.
/// Pairs may repeat; the last occurrence of a pair determines its weight.
pub(crate) fn random_edges<R: Rng>(
    rng: &mut R,
    n: u32,
    m_ub: u32,
    weights: std::ops::Range<Weight>,
) -> Vec<Edge<u32>> {
    (0..m_ub)
        .map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            Edge::new(u, v, rng.random_range(weights.clone()))
        })
        .collect_vec()
}

/// Creates a random graph on vertices `0..n` without self-loops
pub(crate) fn random_graph<G, R>(rng: &mut R, n: u32, m_ub: u32, weights: std::ops::Range<Weight>) -> G
where
    G: GraphFromScratch<Data = u32>,
    R: Rng,
{
    let edges = random_edges(rng, n, m_ub, weights)
        .into_iter()
        .filter(|e| !e.is_loop());
    G::from_vertices_and_edges(0..n, edges)
}

/// Reference adjacency `u -> {v -> w}` of a list of edges (later edges overwrite earlier ones)
pub(crate) fn reference_adjacency(
    n: u32,
    edges: &[Edge<u32>],
    undirected: bool,
) -> FxHashMap<u32, FxHashMap<u32, Weight>> {
    let mut adj: FxHashMap<u32, FxHashMap<u32, Weight>> =
        (0..n).map(|u| (u, FxHashMap::default())).collect();
    for e in edges {
        adj.entry(e.from).or_default().insert(e.to, e.weight);
        if undirected {
            adj.entry(e.to).or_default().insert(e.from, e.weight);
        }
    }
    adj
}

/// Generates the shared tests of a graph variant
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::*, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            type TestGraph = $graph<u32>;

            $(
                test_graph_ops!($graph<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let mut graph = TestGraph::new();
                assert!(graph.is_empty());

                for u in 0..n {
                    assert_eq!(graph.add_vertex(u).raw(), u);
                }
                for u in 0..n {
                    assert_eq!(graph.add_vertex(u).raw(), u);
                }

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_vertices(), n);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(TestGraph::is_undirected(), $undirected);
            }
        }
    };
    ($graph:ident<$undirected:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10u32, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub, -20..20);
                        let adj = reference_adjacency(n, &edges, $undirected);
                        let graph = TestGraph::from_vertices_and_edges(0..n, edges.iter().copied());

                        let m: usize = if $undirected {
                            adj.iter()
                                .map(|(u, nbs)| nbs.keys().filter(|v| *v >= u).count())
                                .sum()
                        } else {
                            adj.values().map(|nbs| nbs.len()).sum()
                        };

                        assert_eq!(graph.number_of_vertices(), n);
                        assert_eq!(graph.number_of_edges() as usize, m);
                        assert_eq!(graph.edges().count(), m);
                        assert_eq!(graph.adjacency_map(), adj);

                        for e in graph.edges() {
                            assert_eq!(adj[&e.from][&e.to], e.weight);
                        }

                        for u in 0..n {
                            assert_eq!(
                                graph.out_neighbors_of(u).sorted().collect_vec(),
                                adj[&u].keys().copied().sorted().collect_vec()
                            );
                            assert_eq!(graph.out_degree_of(u), Some(adj[&u].len() as NumEdges));
                            for (&v, &w) in &adj[&u] {
                                assert_eq!(graph.weight_of(u, v), Some(w));
                            }
                        }

                        assert_eq!(graph.out_degree_of(n), None);
                        assert_eq!(graph.out_neighbors_of(n).count(), 0);
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            assert!(!$undirected);

            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10u32, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub, 0..10);
                        let adj = reference_adjacency(n, &edges, false);
                        let graph = TestGraph::from_vertices_and_edges(0..n, edges.iter().copied());

                        assert_eq!(graph.reverse_adjacency_map().values().map(|nbs| nbs.len()).sum::<usize>(),
                            graph.number_of_edges() as usize);

                        for v in 0..n {
                            let expected = (0..n).filter(|u| adj[u].contains_key(&v)).collect_vec();
                            assert_eq!(graph.in_neighbors_of(v).sorted().collect_vec(), expected);
                            assert_eq!(graph.in_degree_of(v), Some(expected.len() as NumEdges));
                            for e in graph.in_edges_of(v) {
                                assert_eq!(e.to, v);
                                assert_eq!(adj[&e.from][&v], e.weight);
                            }
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10u32, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let mut graph = TestGraph::new();
                        let mut adj = reference_adjacency(n, &[], $undirected);
                        for u in 0..n {
                            graph.add_vertex(u);
                        }

                        for e in random_edges(rng, n, m_ub, 0..100) {
                            let prev = adj.get_mut(&e.from).and_then(|nbs| nbs.insert(e.to, e.weight));
                            if $undirected {
                                adj.get_mut(&e.to).and_then(|nbs| nbs.insert(e.from, e.weight));
                            }
                            assert_eq!(graph.add_edge(e.from, e.to, e.weight), prev);
                        }

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            let expected = adj.get_mut(&u).and_then(|nbs| nbs.remove(&v));
                            assert_eq!(graph.remove_edge(u, v), expected);
                            if expected.is_some() {
                                m -= 1;
                                if $undirected && u != v {
                                    assert!(adj.get_mut(&v).and_then(|nbs| nbs.remove(&u)).is_some());
                                }
                            }

                            assert_eq!(m, graph.number_of_edges());
                            assert!(!graph.has_edge(u, v));
                        }

                        for u in 0..n {
                            assert!(graph.remove_vertex(u));
                            assert!(!graph.remove_vertex(u));
                            assert_eq!(graph.in_degree_of(u), None);
                            assert!(graph.edges().all(|e| e.from != u && e.to != u));
                            assert_eq!(graph.edges().count(), graph.number_of_edges() as usize);
                        }

                        assert!(graph.is_empty());
                        assert!(graph.is_singleton_graph());
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
