/*!
Graph traversal algorithms.

This module provides:
- Generic, multi-source traversal iterators ([`DepthFirstSearch`], [`BreadthFirstSearch`]) that
  are driven by an externally supplied successor function and therefore work on any identity type,
  independent of a graph representation.
- The callback-style entry points [`dfs`] and [`bfs`].
- A configurable [`Walk`] that picks default start vertices and dispatches to pre-/post-order
  variants of both searches on a graph.
- A high-level [`Traversal`] trait that exposes traversals directly as methods on graphs.

Supplying predecessors instead of successors yields a traversal of the reversed graph without
building it.
*/

use super::*;
use std::{collections::VecDeque, hash::Hash};

/// Items yielded by a [`DepthFirstSearch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalEvent<N> {
    /// The node is seen for the first time (preorder)
    Discover(N),
    /// All successors of the node are finished (postorder)
    Finish(N),
}

impl<N: Copy> TraversalEvent<N> {
    /// Returns the node the event refers to
    pub fn node(&self) -> N {
        match *self {
            TraversalEvent::Discover(u) | TraversalEvent::Finish(u) => u,
        }
    }
}

/// State of a node during a depth-first search. Unvisited nodes have no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitState {
    Discovered,
    Finished,
}

/// Iterative, multi-source depth-first search.
///
/// Every node is discovered at most once. Starts are processed in the given order; a start that
/// was already reached from an earlier start is skipped. The successors of a node are requested
/// lazily once its `Discover` event has been consumed. A node is finished after all of its
/// successors are finished, which yields the same event order as a recursive depth-first search.
pub struct DepthFirstSearch<N, F, I>
where
    I: IntoIterator<Item = N>,
{
    successors: F,
    starts: std::vec::IntoIter<N>,
    states: FxHashMap<N, VisitState>,
    stack: Vec<(N, Option<I::IntoIter>)>,
}

impl<N, F, I> DepthFirstSearch<N, F, I>
where
    N: Copy + Eq + Hash,
    F: FnMut(N) -> I,
    I: IntoIterator<Item = N>,
{
    /// Creates a new search over the given start nodes
    pub fn new(starts: impl IntoIterator<Item = N>, successors: F) -> Self {
        Self {
            successors,
            starts: starts.into_iter().collect::<Vec<_>>().into_iter(),
            states: FxHashMap::default(),
            stack: Vec::new(),
        }
    }

    /// Returns the state of a node or `None` if it was not visited yet
    pub fn state_of(&self, u: N) -> Option<VisitState> {
        self.states.get(&u).copied()
    }

    fn discover(&mut self, u: N) -> TraversalEvent<N> {
        self.states.insert(u, VisitState::Discovered);
        self.stack.push((u, None));
        TraversalEvent::Discover(u)
    }
}

impl<N, F, I> Iterator for DepthFirstSearch<N, F, I>
where
    N: Copy + Eq + Hash,
    F: FnMut(N) -> I,
    I: IntoIterator<Item = N>,
{
    type Item = TraversalEvent<N>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((u, succs)) = self.stack.last_mut() {
                let u = *u;
                let succs = succs.get_or_insert_with(|| (self.successors)(u).into_iter());

                let states = &self.states;
                match succs.find(|v| !states.contains_key(v)) {
                    Some(v) => return Some(self.discover(v)),
                    None => {
                        self.stack.pop();
                        self.states.insert(u, VisitState::Finished);
                        return Some(TraversalEvent::Finish(u));
                    }
                }
            }

            let start = self.starts.next()?;
            if !self.states.contains_key(&start) {
                return Some(self.discover(start));
            }
        }
    }
}

/// Extension trait for iterators over [`TraversalEvent`]s
pub trait TraversalEvents<N>: Iterator<Item = TraversalEvent<N>> + Sized {
    /// Consumes the events and returns all nodes in preorder
    fn preorder(self) -> impl Iterator<Item = N> {
        self.filter_map(|e| match e {
            TraversalEvent::Discover(u) => Some(u),
            TraversalEvent::Finish(_) => None,
        })
    }

    /// Consumes the events and returns all nodes in postorder
    fn postorder(self) -> impl Iterator<Item = N> {
        self.filter_map(|e| match e {
            TraversalEvent::Discover(_) => None,
            TraversalEvent::Finish(u) => Some(u),
        })
    }
}

impl<N, It: Iterator<Item = TraversalEvent<N>>> TraversalEvents<N> for It {}

/// Queue-based, multi-source breadth-first search.
///
/// All distinct starts are enqueued up front at distance `0`. The iterator yields nodes in FIFO
/// order and expands a node right before returning it.
pub struct BreadthFirstSearch<N, F> {
    successors: F,
    queue: VecDeque<N>,
    visited: FxHashSet<N>,
}

impl<N, F, I> BreadthFirstSearch<N, F>
where
    N: Copy + Eq + Hash,
    F: FnMut(N) -> I,
    I: IntoIterator<Item = N>,
{
    /// Creates a new search over the given start nodes
    pub fn new(starts: impl IntoIterator<Item = N>, successors: F) -> Self {
        let mut visited = FxHashSet::default();
        let queue = starts.into_iter().filter(|&u| visited.insert(u)).collect();
        Self {
            successors,
            queue,
            visited,
        }
    }

    /// Returns *true* if the node was enqueued at some point
    pub fn did_visit_node(&self, u: N) -> bool {
        self.visited.contains(&u)
    }

    fn expand(&mut self, u: N) {
        for v in (self.successors)(u) {
            if self.visited.insert(v) {
                self.queue.push_back(v);
            }
        }
    }
}

impl<N, F, I> Iterator for BreadthFirstSearch<N, F>
where
    N: Copy + Eq + Hash,
    F: FnMut(N) -> I,
    I: IntoIterator<Item = N>,
{
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        self.expand(u);
        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), None)
    }
}

/// Runs a depth-first search from `starts`, calling `pre` at discovery and `post` once a node is
/// finished. Returns all nodes in preorder.
///
/// # Examples
/// ```
/// use wgraphs::algo::dfs;
///
/// let succ = |u: u32| (u < 3).then_some(u + 1);
/// let mut post = Vec::new();
/// let pre = dfs([0], succ, |_| {}, |u| post.push(u));
///
/// assert_eq!(pre, vec![0, 1, 2, 3]);
/// assert_eq!(post, vec![3, 2, 1, 0]);
/// ```
pub fn dfs<N, F, I>(
    starts: impl IntoIterator<Item = N>,
    successors: F,
    mut pre: impl FnMut(N),
    mut post: impl FnMut(N),
) -> Vec<N>
where
    N: Copy + Eq + Hash,
    F: FnMut(N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut order = Vec::new();
    for event in DepthFirstSearch::new(starts, successors) {
        match event {
            TraversalEvent::Discover(u) => {
                pre(u);
                order.push(u);
            }
            TraversalEvent::Finish(u) => post(u),
        }
    }
    order
}

/// Runs a multi-source breadth-first search from `starts`, calling `pre` when a node is dequeued
/// and `post` right after its successors were enqueued. Returns all nodes in visiting order.
///
/// # Examples
/// ```
/// use wgraphs::algo::bfs;
///
/// let succ = |u: u32| [2 * u + 1, 2 * u + 2].into_iter().filter(|&v| v < 7);
/// assert_eq!(bfs([0], succ, |_| {}, |_| {}), vec![0, 1, 2, 3, 4, 5, 6]);
/// ```
pub fn bfs<N, F, I>(
    starts: impl IntoIterator<Item = N>,
    successors: F,
    mut pre: impl FnMut(N),
    mut post: impl FnMut(N),
) -> Vec<N>
where
    N: Copy + Eq + Hash,
    F: FnMut(N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut search = BreadthFirstSearch::new(starts, successors);
    let mut order = Vec::new();
    while let Some(u) = search.queue.pop_front() {
        pre(u);
        search.expand(u);
        post(u);
        order.push(u);
    }
    order
}

/// Order in which a [`Walk`] reports vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WalkOrder {
    BfsPreorder,
    BfsPostorder,
    #[default]
    DfsPreorder,
    DfsPostorder,
}

/// Configurable traversal of a graph.
///
/// Without explicit starts, a forward walk starts at all vertices without incoming edges and a
/// reverse walk (following predecessors) at all vertices without outgoing edges. This heuristic
/// is meaningless for undirected graphs, which therefore require explicit starts.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = DirectedGraph::from_edges([(1, 2), (2, 3), (4, 3)]);
///
/// let order = Walk::new(WalkOrder::DfsPostorder).collect(&graph).unwrap();
/// assert_eq!(order, vec![3, 2, 1, 4]);
///
/// let order = Walk::new(WalkOrder::BfsPreorder).reverse(true).collect(&graph).unwrap();
/// assert_eq!(order, vec![3, 2, 4, 1]);
///
/// let undirected = UndirectedGraph::from_edges([(1, 2)]);
/// assert!(Walk::new(WalkOrder::DfsPreorder).collect(&undirected).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Walk<T> {
    order: WalkOrder,
    reverse: bool,
    starts: Option<Vec<T>>,
}

impl<T: VertexData> Default for Walk<T> {
    fn default() -> Self {
        Self::new(WalkOrder::default())
    }
}

impl<T: VertexData> Walk<T> {
    /// Creates a forward walk with default starts
    pub fn new(order: WalkOrder) -> Self {
        Self {
            order,
            reverse: false,
            starts: None,
        }
    }

    /// Sets the order in which vertices are reported
    pub fn set_order(&mut self, order: WalkOrder) {
        self.order = order;
    }

    /// Sets the order in which vertices are reported
    pub fn order(mut self, order: WalkOrder) -> Self {
        self.set_order(order);
        self
    }

    /// If set, the walk follows incoming instead of outgoing edges
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// If set, the walk follows incoming instead of outgoing edges
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.set_reverse(reverse);
        self
    }

    /// Sets explicit start vertices
    pub fn set_starts(&mut self, starts: impl IntoIterator<Item = T>) {
        self.starts = Some(starts.into_iter().collect());
    }

    /// Sets explicit start vertices
    pub fn starts(mut self, starts: impl IntoIterator<Item = T>) -> Self {
        self.set_starts(starts);
        self
    }

    fn start_vertices<G>(&self, graph: &G) -> Result<Vec<T>>
    where
        G: AdjacencyList<Data = T>,
    {
        match &self.starts {
            Some(starts) => {
                if starts.iter().any(|&u| !graph.has_vertex(u)) {
                    warn!(order = ?self.order, "walk start is not a vertex of the graph");
                    return Err(GraphError::NotFound("walk start"));
                }
                Ok(starts.clone())
            }
            None if G::is_undirected() => {
                warn!(order = ?self.order, "walk on an undirected graph requires explicit starts");
                Err(GraphError::InvalidArgument(
                    "undirected walk without start vertices",
                ))
            }
            None if self.reverse => Ok(graph.sinks().collect()),
            None => Ok(graph.sources().collect()),
        }
    }

    /// Runs the walk and calls `visitor` for every reached vertex in the configured order
    pub fn run<G>(&self, graph: &G, mut visitor: impl FnMut(T)) -> Result<()>
    where
        G: AdjacencyList<Data = T>,
    {
        let starts = self.start_vertices(graph)?;
        let reverse = self.reverse;
        let successors = move |u| graph.directed_neighbors_of(u, reverse);

        match self.order {
            WalkOrder::DfsPreorder => dfs(starts, successors, &mut visitor, |_| {}),
            WalkOrder::DfsPostorder => dfs(starts, successors, |_| {}, &mut visitor),
            WalkOrder::BfsPreorder => bfs(starts, successors, &mut visitor, |_| {}),
            WalkOrder::BfsPostorder => bfs(starts, successors, |_| {}, &mut visitor),
        };
        Ok(())
    }

    /// Runs the walk and returns all reached vertices in the configured order
    pub fn collect<G>(&self, graph: &G) -> Result<Vec<T>>
    where
        G: AdjacencyList<Data = T>,
    {
        let mut order = Vec::new();
        self.run(graph, |u| order.push(u))?;
        Ok(order)
    }
}

/// Provides convenient traversal methods on graphs
pub trait Traversal: AdjacencyList {
    /// Returns a depth-first search following outgoing edges from `starts`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([(0, 1), (1, 2), (0, 2)]);
    ///
    /// let order: Vec<_> = g.depth_first_search([0]).preorder().collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn depth_first_search(
        &self,
        starts: impl IntoIterator<Item = Self::Data>,
    ) -> impl Iterator<Item = TraversalEvent<Self::Data>> + '_ {
        DepthFirstSearch::new(starts, move |u| self.out_neighbors_of(u))
    }

    /// Returns a breadth-first search following outgoing edges from `starts`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges([(0, 1), (1, 2), (0, 3)]);
    ///
    /// let order: Vec<_> = g.breadth_first_search([0]).collect();
    /// assert_eq!(order, vec![0, 1, 3, 2]);
    /// ```
    fn breadth_first_search(
        &self,
        starts: impl IntoIterator<Item = Self::Data>,
    ) -> impl Iterator<Item = Self::Data> + '_ {
        BreadthFirstSearch::new(starts, move |u| self.out_neighbors_of(u))
    }

    /// Runs a configured [`Walk`] and returns the reached vertices
    fn walk(&self, walk: &Walk<Self::Data>) -> Result<Vec<Self::Data>> {
        walk.collect(self)
    }
}

impl<G: AdjacencyList> Traversal for G {}
