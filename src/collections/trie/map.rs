use core::hash::Hash;

use super::count::Count;
use super::iter::{Children, Iter};
use super::node::Node;
use super::position::TriePosition;

/// A prefix trie accumulating occurrence counts over token shingles.
///
/// Every inserted shingle adds its count to each prefix along its path, so
/// `count(&[a, b])` is the total weight of all shingles starting with `a, b`.
/// The empty prefix holds the total weight of everything inserted.
///
/// Positions use the compact single-branch form until a second token is
/// observed after the same prefix; see [`TriePosition`].
#[derive(Debug)]
pub struct ShingleTrie<T, C = u32> {
    /// First-level position. `None` until a non-empty shingle is inserted.
    root: Option<TriePosition<T, C>>,
    /// Weight recorded for the empty prefix.
    total: C,
}

impl<T, C: Count> ShingleTrie<T, C> {
    /// Creates a new empty trie.
    pub fn new() -> Self {
        Self {
            root: None,
            total: C::zero(),
        }
    }

    /// Returns the total weight of every inserted shingle.
    pub fn total(&self) -> C {
        self.total
    }

    /// Returns true if no non-empty shingle has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node and resets the total.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(total = ?self.total, "clearing shingle trie");

        self.root = None;
        self.total = C::zero();
    }

    /// Returns the first-level position, if anything has been inserted.
    pub fn root(&self) -> Option<&TriePosition<T, C>> {
        self.root.as_ref()
    }

    /// Iterates over the nodes at depth one.
    pub fn roots(&self) -> Children<'_, T, C> {
        match &self.root {
            Some(position) => position.nodes(),
            None => Children::empty(),
        }
    }

    /// Iterates over every stored prefix and its count, depth first.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter::new(self.roots())
    }

    /// Walks the trie and reports how its positions are represented.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        if let Some(position) = &self.root {
            tally(position, &mut stats);
        }
        stats
    }
}

impl<T, C> ShingleTrie<T, C>
where
    T: Eq + Hash + Clone,
    C: Count,
{
    /// Records that `shingle` occurred `count` times.
    ///
    /// An empty shingle only adds to the total.
    pub fn insert(&mut self, shingle: &[T], count: C) {
        self.total = self.total.accumulate(count);
        if shingle.is_empty() {
            return;
        }

        match &mut self.root {
            Some(position) => position.insert(shingle, count),
            None => self.root = Some(TriePosition::chain(shingle, count)),
        }
    }

    /// Returns the node at the end of `prefix`, or `None` if that path was
    /// never recorded. The empty prefix has no node.
    pub fn get(&self, prefix: &[T]) -> Option<&Node<T, C>> {
        if prefix.is_empty() {
            return None;
        }
        self.root.as_ref()?.get(prefix)
    }

    /// Returns the accumulated count of `prefix`, or `None` if absent.
    /// The empty prefix always yields the total.
    pub fn count(&self, prefix: &[T]) -> Option<C> {
        if prefix.is_empty() {
            return Some(self.total);
        }
        self.get(prefix).map(Node::count)
    }

    /// Returns the accumulated count of `prefix`, treating absence as zero.
    pub fn count_or_zero(&self, prefix: &[T]) -> C {
        self.count(prefix).unwrap_or_else(C::zero)
    }

    /// Returns true if `prefix` was recorded. The empty prefix is always
    /// contained, matching `count(&[])`.
    pub fn contains(&self, prefix: &[T]) -> bool {
        prefix.is_empty() || self.get(prefix).is_some()
    }

    /// Iterates over the continuations observed after `prefix`.
    /// The empty prefix yields the depth-one nodes; an absent prefix yields nothing.
    pub fn children(&self, prefix: &[T]) -> Children<'_, T, C> {
        if prefix.is_empty() {
            return self.roots();
        }
        match self.get(prefix) {
            Some(node) => node.children(),
            None => Children::empty(),
        }
    }
}

impl<T, C: Count> Default for ShingleTrie<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C, S> Extend<(S, C)> for ShingleTrie<T, C>
where
    T: Eq + Hash + Clone,
    C: Count,
    S: AsRef<[T]>,
{
    fn extend<I: IntoIterator<Item = (S, C)>>(&mut self, iter: I) {
        for (shingle, count) in iter {
            self.insert(shingle.as_ref(), count);
        }
    }
}

impl<T, C, S> FromIterator<(S, C)> for ShingleTrie<T, C>
where
    T: Eq + Hash + Clone,
    C: Count,
    S: AsRef<[T]>,
{
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, T: Clone, C: Count> IntoIterator for &'a ShingleTrie<T, C> {
    type Item = (Vec<T>, C);
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Shape of a trie's positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrieStats {
    /// Number of nodes (distinct non-empty prefixes).
    pub nodes: usize,
    /// Positions still in single-branch form.
    pub single_positions: usize,
    /// Positions promoted to multi-branch form.
    pub multi_positions: usize,
    /// Length of the longest stored prefix.
    pub max_depth: usize,
}

fn tally<T, C>(root: &TriePosition<T, C>, stats: &mut TrieStats) {
    let mut pending = vec![(root, 1)];
    while let Some((position, depth)) = pending.pop() {
        if position.is_branching() {
            stats.multi_positions += 1;
        } else {
            stats.single_positions += 1;
        }
        stats.max_depth = stats.max_depth.max(depth);

        for node in position.nodes() {
            stats.nodes += 1;
            if let Some(next) = node.next() {
                pending.push((next, depth + 1));
            }
        }
    }
}
