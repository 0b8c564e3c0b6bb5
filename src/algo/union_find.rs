/*!
# Union-Find

Disjoint-set forest over opaque identities. Every registered identity is mapped to a compact
slot; slots form a forest via parent pointers with union by rank and path compression.

```
use wgraphs::algo::UnionFind;

let mut sets = UnionFind::new();
for city in ["Oslo", "Bergen", "Turku", "Espoo"] {
    sets.add(city);
}

assert!(sets.merge("Oslo", "Bergen"));
assert!(sets.merge("Turku", "Espoo"));
assert!(!sets.merge("Bergen", "Oslo"));

assert!(sets.same_set("Oslo", "Bergen"));
assert_eq!(sets.find("Paris"), None);
assert_eq!(sets.groups().len(), 2);
```
*/

use super::*;
use std::hash::Hash;

/// Disjoint sets over identities of type `T`
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    slots: FxHashMap<T, usize>,
    items: Vec<T>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl<T: Copy + Eq + Hash> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Eq + Hash> UnionFind<T> {
    /// Creates an empty union-find
    pub fn new() -> Self {
        Self {
            slots: FxHashMap::default(),
            items: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
        }
    }

    /// Creates a union-find with every item in its own set
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut sets = Self::new();
        for item in items {
            sets.add(item);
        }
        sets
    }

    /// Registers an item as a singleton set. Returns *false* if it was already registered.
    pub fn add(&mut self, item: T) -> bool {
        if self.slots.contains_key(&item) {
            return false;
        }

        let slot = self.items.len();
        self.slots.insert(item, slot);
        self.items.push(item);
        self.parent.push(slot);
        self.rank.push(0);
        true
    }

    /// Returns the number of registered items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns *true* if no item is registered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns *true* if the item is registered
    pub fn contains(&self, item: T) -> bool {
        self.slots.contains_key(&item)
    }

    fn find_slot(&mut self, mut slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[slot] != slot {
            let parent = self.parent[slot];
            self.parent[slot] = root;
            slot = parent;
        }

        root
    }

    /// Returns the representative of the set containing `item`, or `None` if it is unknown
    pub fn find(&mut self, item: T) -> Option<T> {
        let slot = *self.slots.get(&item)?;
        let root = self.find_slot(slot);
        Some(self.items[root])
    }

    /// Returns *true* if both items are registered and belong to the same set
    pub fn same_set(&mut self, a: T, b: T) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// Joins the sets of `a` and `b`.
    /// Returns *false* if either item is unknown or both already share a set.
    pub fn merge(&mut self, a: T, b: T) -> bool {
        let (Some(&a), Some(&b)) = (self.slots.get(&a), self.slots.get(&b)) else {
            return false;
        };

        let mut left = self.find_slot(a);
        let mut right = self.find_slot(b);
        if left == right {
            return false;
        }

        if self.rank[left] < self.rank[right] {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if self.rank[left] == self.rank[right] {
            self.rank[left] = self.rank[left].saturating_add(1);
        }
        true
    }

    /// Returns every set as `(representative, members)`.
    /// Sets are ordered by their first registered member, members by registration.
    pub fn groups(&mut self) -> Vec<(T, Vec<T>)> {
        let mut group_of_root: FxHashMap<usize, usize> = FxHashMap::default();
        let mut groups: Vec<(T, Vec<T>)> = Vec::new();

        for slot in 0..self.items.len() {
            let root = self.find_slot(slot);
            let group = *group_of_root.entry(root).or_insert_with(|| {
                groups.push((self.items[root], Vec::new()));
                groups.len() - 1
            });
            groups[group].1.push(self.items[slot]);
        }

        groups
    }

    /// Distributes the given edges over the sets of their endpoints and builds one graph per set.
    /// Every registered item becomes a vertex of its graph (in registration order), even if no
    /// edge touches it. Edges with an unregistered endpoint or with endpoints in different sets
    /// are dropped.
    pub fn into_graphs<G>(mut self, edges: impl IntoIterator<Item = Edge<T>>) -> Vec<G>
    where
        T: VertexData,
        G: GraphNew + GraphEdgeEditing<Data = T>,
    {
        let groups = self.groups();
        let mut index_of: FxHashMap<T, usize> = FxHashMap::default();
        let mut graphs: Vec<G> = Vec::with_capacity(groups.len());

        for (i, (_, members)) in groups.into_iter().enumerate() {
            let mut graph = G::new();
            for u in members {
                graph.add_vertex(u);
                index_of.insert(u, i);
            }
            graphs.push(graph);
        }

        for e in edges {
            match (index_of.get(&e.from), index_of.get(&e.to)) {
                (Some(&i), Some(&j)) if i == j => {
                    graphs[i].add_edge(e.from, e.to, e.weight);
                }
                _ => {}
            }
        }

        graphs
    }
}
