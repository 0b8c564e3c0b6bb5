/*!
# Minimum Spanning Arborescences

Computes a minimum-weight spanning arborescence per component of a directed graph using the
Chu-Liu/Edmonds algorithm.

A virtual root is connected to every vertex with a sentinel weight strictly larger than the sum
of all absolute edge weights. A minimum arborescence of this augmented graph uses as few virtual
edges as possible and, among those, has minimum weight. Dropping the virtual edges afterwards
yields one arborescence per component, rooted wherever the algorithm chose to enter it.

Each recursion step of the algorithm is an explicit [`ContractionLevel`]: vertices are dense
indices `0..num_vertices` and every edge remembers its index in the previous level (`origin`),
so a solution of a contracted level can be mapped back edge by edge.
*/

use super::*;

/// Algorithm used by [`minimum_spanning_arborescences`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DmstAlgo {
    /// Recursive cycle contraction in `O(nm)`
    #[default]
    ChuLiuEdmonds,
    /// Tarjan's `O(m log n)` variant (not implemented)
    Tarjan,
}

/// Cost of a [`LevelEdge`]. Wider than [`Weight`] so that the sentinel and all reduced costs of
/// arbitrary `i64` weights are representable.
pub type LevelCost = i128;

/// Edge of a [`ContractionLevel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelEdge {
    pub from: usize,
    pub to: usize,
    /// Weight (possibly reduced by contractions)
    pub cost: LevelCost,
    /// Index of the edge this one was derived from in the previous level
    pub origin: usize,
}

/// One level of the recursive contraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractionLevel {
    pub num_vertices: usize,
    pub root: usize,
    pub edges: Vec<LevelEdge>,
}

/// Bookkeeping needed to expand the solution of a contracted level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contraction {
    /// Vertices of every contracted cycle
    pub cycles: Vec<Vec<usize>>,
    /// Cycle index per vertex of the uncontracted level
    pub cycle_of: Vec<Option<usize>>,
    /// Chosen incoming edge per vertex of the uncontracted level
    pub min_in: Vec<Option<usize>>,
}

impl ContractionLevel {
    pub fn new(num_vertices: usize, root: usize, edges: Vec<LevelEdge>) -> Self {
        debug_assert!(root < num_vertices);
        debug_assert!(edges.iter().all(|e| e.from < num_vertices && e.to < num_vertices));
        Self {
            num_vertices,
            root,
            edges,
        }
    }

    /// Selects the cheapest incoming edge of every non-root vertex (first one on ties).
    /// Self-loops are never selected.
    /// Returns `None` if some non-root vertex has no incoming edge.
    pub fn select_min_incoming(&self) -> Option<Vec<Option<usize>>> {
        let mut min_in: Vec<Option<usize>> = vec![None; self.num_vertices];

        for (i, e) in self.edges.iter().enumerate() {
            if e.to == self.root || e.from == e.to {
                continue;
            }

            match min_in[e.to] {
                Some(best) if self.edges[best].cost <= e.cost => {}
                _ => min_in[e.to] = Some(i),
            }
        }

        (0..self.num_vertices)
            .all(|v| v == self.root || min_in[v].is_some())
            .then_some(min_in)
    }

    fn predecessor(&self, min_in: &[Option<usize>], v: usize) -> Option<usize> {
        min_in[v].map(|i| self.edges[i].from)
    }

    /// Returns all cycles of the graph formed by the selected edges
    pub fn find_cycles(&self, min_in: &[Option<usize>]) -> Vec<Vec<usize>> {
        const UNSEEN: usize = usize::MAX;
        let mut seen_in_walk = vec![UNSEEN; self.num_vertices];
        let mut cycles = Vec::new();

        for v in 0..self.num_vertices {
            let mut u = v;
            while seen_in_walk[u] == UNSEEN {
                seen_in_walk[u] = v;
                match self.predecessor(min_in, u) {
                    Some(p) => u = p,
                    None => break,
                }
            }

            // `u` was first seen during this walk: the walk closed a cycle through `u`
            if seen_in_walk[u] == v && self.predecessor(min_in, u).is_some() {
                let mut cycle = vec![u];
                let mut w = u;
                while let Some(p) = self.predecessor(min_in, w).filter(|&p| p != u) {
                    cycle.push(p);
                    w = p;
                }
                cycles.push(cycle);
            }
        }

        cycles
    }

    /// Contracts every cycle into a single vertex.
    ///
    /// An edge entering a cycle at `x` gets the reduced cost `cost - cost(min_in[x])`; edges
    /// inside a cycle are dropped. Every edge of the returned level refers to its origin in `self`.
    pub fn contract(
        &self,
        min_in: Vec<Option<usize>>,
        cycles: Vec<Vec<usize>>,
    ) -> (ContractionLevel, Contraction) {
        let mut cycle_of = vec![None; self.num_vertices];
        for (c, cycle) in cycles.iter().enumerate() {
            for &v in cycle {
                cycle_of[v] = Some(c);
            }
        }

        let mut cycle_vertex: Vec<Option<usize>> = vec![None; cycles.len()];
        let mut new_id = vec![0; self.num_vertices];
        let mut num_vertices = 0;
        for v in 0..self.num_vertices {
            new_id[v] = match cycle_of[v] {
                Some(c) => *cycle_vertex[c].get_or_insert_with(|| {
                    num_vertices += 1;
                    num_vertices - 1
                }),
                None => {
                    num_vertices += 1;
                    num_vertices - 1
                }
            };
        }

        let edges = self
            .edges
            .iter()
            .enumerate()
            .filter(|(_, e)| new_id[e.from] != new_id[e.to])
            .map(|(origin, e)| {
                let cost = match (cycle_of[e.to], min_in[e.to]) {
                    (Some(_), Some(best)) => e.cost - self.edges[best].cost,
                    _ => e.cost,
                };
                LevelEdge {
                    from: new_id[e.from],
                    to: new_id[e.to],
                    cost,
                    origin,
                }
            })
            .collect_vec();

        (
            ContractionLevel::new(num_vertices, new_id[self.root], edges),
            Contraction {
                cycles,
                cycle_of,
                min_in,
            },
        )
    }

    /// Returns the indices of the edges of a minimum spanning arborescence rooted at `root`,
    /// or `None` if some vertex cannot be reached.
    pub fn solve(&self) -> Option<Vec<usize>> {
        let min_in = self.select_min_incoming()?;
        let cycles = self.find_cycles(&min_in);

        if cycles.is_empty() {
            return Some(min_in.into_iter().flatten().collect());
        }

        trace!(
            vertices = self.num_vertices,
            edges = self.edges.len(),
            cycles = cycles.len(),
            "contracting arborescence level"
        );

        let (contracted, contraction) = self.contract(min_in, cycles);
        let solution = contracted.solve()?;
        Some(contraction.expand(self, &contracted, &solution))
    }
}

impl Contraction {
    /// Maps the solution of `contracted` back to `level`: the edge entering a cycle determines
    /// its entry vertex, and all cycle edges except the one into the entry vertex are kept.
    pub fn expand(
        &self,
        level: &ContractionLevel,
        contracted: &ContractionLevel,
        solution: &[usize],
    ) -> Vec<usize> {
        let mut edges = solution
            .iter()
            .map(|&i| contracted.edges[i].origin)
            .collect_vec();

        let mut entry: Vec<Option<usize>> = vec![None; self.cycles.len()];
        for &i in &edges {
            let to = level.edges[i].to;
            if let Some(c) = self.cycle_of[to] {
                entry[c] = Some(to);
            }
        }

        for (cycle, entry) in self.cycles.iter().zip(entry) {
            debug_assert!(entry.is_some());
            edges.extend(
                cycle
                    .iter()
                    .filter(|&&v| Some(v) != entry)
                    .filter_map(|&v| self.min_in[v]),
            );
        }

        edges
    }
}

/// Computes minimum spanning arborescences of a directed graph, one per component.
///
/// Self-loops are ignored. Every vertex of the graph appears in exactly one output graph;
/// vertices without a chosen incoming edge are roots. The output is ordered by the earliest
/// created vertex of each component.
///
/// Returns [`GraphError::UnsupportedOperation`] for undirected graphs and for [`DmstAlgo::Tarjan`].
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = DirectedGraph::from_edges([
///     ('r', 'a', 5), ('r', 'b', 1), ('b', 'a', 2), ('a', 'c', 3), ('c', 'a', 1),
/// ]);
///
/// let trees = minimum_spanning_arborescences(&graph, DmstAlgo::ChuLiuEdmonds).unwrap();
/// assert_eq!(trees.len(), 1);
/// assert_eq!(trees[0].total_weight(), 6);
/// assert_eq!(trees[0].in_degree_of('r'), Some(0));
/// ```
pub fn minimum_spanning_arborescences<G>(
    graph: &G,
    algo: DmstAlgo,
) -> Result<Vec<DirectedGraph<G::Data>>>
where
    G: AdjacencyList,
{
    if G::is_undirected() {
        warn!(?algo, "minimum spanning arborescence requested for an undirected graph");
        return Err(GraphError::UnsupportedOperation(
            "minimum spanning arborescence of an undirected graph",
        ));
    }

    if algo == DmstAlgo::Tarjan {
        warn!(?algo, "arborescence algorithm is not implemented");
        return Err(GraphError::UnsupportedOperation(
            "Tarjan's arborescence algorithm is not implemented",
        ));
    }

    let vertices = graph.vertices().collect_vec();
    let index_of: FxHashMap<G::Data, usize> =
        vertices.iter().enumerate().map(|(i, &u)| (u, i)).collect();

    let originals = graph.edges().filter(|e| !e.is_loop()).collect_vec();
    let sentinel: LevelCost = 1 + originals
        .iter()
        .map(|e| LevelCost::from(e.weight).abs())
        .sum::<LevelCost>();

    let root = vertices.len();
    let edges = originals
        .iter()
        .enumerate()
        .map(|(origin, e)| LevelEdge {
            from: index_of[&e.from],
            to: index_of[&e.to],
            cost: LevelCost::from(e.weight),
            origin,
        })
        .chain((0..vertices.len()).map(|v| LevelEdge {
            from: root,
            to: v,
            cost: sentinel,
            origin: originals.len() + v,
        }))
        .collect_vec();

    let level = ContractionLevel::new(vertices.len() + 1, root, edges);
    let Some(solution) = level.solve() else {
        warn!("augmented graph has no spanning arborescence");
        return Err(GraphError::InvalidArgument("graph without spanning arborescence"));
    };

    let chosen = solution
        .into_iter()
        .filter_map(|i| originals.get(level.edges[i].origin).copied())
        .collect_vec();

    let mut sets = UnionFind::from_items(vertices);
    for e in &chosen {
        sets.merge(e.from, e.to);
    }
    let trees: Vec<DirectedGraph<G::Data>> = sets.into_graphs(chosen);

    debug!(
        ?algo,
        components = trees.len(),
        total_weight = trees.iter().map(|t| t.total_weight()).sum::<Weight>(),
        "computed minimum spanning arborescences"
    );
    Ok(trees)
}
