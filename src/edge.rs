use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

/// Edge weights are signed integers.
pub type Weight = i64;

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

/// A weighted edge `from -> to`.
///
/// Two edges are considered equal iff their endpoints are equal: the weight is metadata that can
/// be updated in place by re-inserting the same pair into a graph.
/// It is up to the graph whether an edge is interpreted as directed or not.
#[derive(Copy, Clone)]
pub struct Edge<T> {
    pub from: T,
    pub to: T,
    pub weight: Weight,
}

impl<T> Edge<T> {
    /// Creates a new weighted edge
    pub const fn new(from: T, to: T, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Creates a new edge of weight `0`
    pub const fn unweighted(from: T, to: T) -> Self {
        Self::new(from, to, 0)
    }
}

impl<T: Copy> Edge<T> {
    /// Returns both endpoints as a tuple
    pub fn endpoints(&self) -> (T, T) {
        (self.from, self.to)
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Self::new(self.to, self.from, self.weight)
    }
}

impl<T: PartialEq> Edge<T> {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<T: PartialEq> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl<T: Eq> Eq for Edge<T> {}

impl<T: Hash> Hash for Edge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl<T: Display> Display for Edge<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}:{})", self.from, self.to, self.weight)
    }
}

impl<T: Debug> Debug for Edge<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?}:{})", self.from, self.to, self.weight)
    }
}

impl<T> From<(T, T)> for Edge<T> {
    fn from(value: (T, T)) -> Self {
        Edge::unweighted(value.0, value.1)
    }
}

impl<T> From<(T, T, Weight)> for Edge<T> {
    fn from(value: (T, T, Weight)) -> Self {
        Edge::new(value.0, value.1, value.2)
    }
}

impl<T: Copy> From<&Edge<T>> for Edge<T> {
    fn from(value: &Edge<T>) -> Self {
        *value
    }
}
