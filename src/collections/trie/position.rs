use core::hash::Hash;
use core::mem;

use super::count::Count;
use super::iter::Children;
use super::multi::MultiBranch;
use super::node::Node;
use super::single::SingleBranch;

/// An addressable point in the trie: every continuation observed after one prefix.
///
/// A position starts out as [`SingleBranch`] and is promoted in place to
/// [`MultiBranch`] the first time a second distinct token is recorded at it.
/// Promotion is local to the diverging position and is never undone.
#[derive(Debug)]
pub enum TriePosition<T, C = u32> {
    /// Exactly one continuation has been observed.
    Single(SingleBranch<T, C>),
    /// Two or more continuations have been observed.
    Multi(MultiBranch<T, C>),
}

#[allow(clippy::len_without_is_empty)]
impl<T, C> TriePosition<T, C> {
    /// Returns the number of branches (distinct tokens) at this position.
    /// A position always holds at least one.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multi(multi) => multi.len(),
        }
    }

    /// Returns true once this position has been promoted.
    pub fn is_branching(&self) -> bool {
        matches!(self, Self::Multi(_))
    }

    /// Iterates over the nodes stored at this position.
    pub fn nodes(&self) -> Children<'_, T, C> {
        match self {
            Self::Single(single) => Children::single(single.node()),
            Self::Multi(multi) => Children::multi(multi.nodes()),
        }
    }
}

impl<T, C> TriePosition<T, C>
where
    T: Eq + Hash + Clone,
    C: Count,
{
    /// Builds a chain of single-branch positions holding `shingle` with `count`.
    ///
    /// # Panics
    /// Panics if `shingle` is empty.
    #[track_caller]
    pub fn chain(shingle: &[T], count: C) -> Self {
        Self::Single(SingleBranch::new(shingle, count))
    }

    /// Returns the node at the end of `shingle`, if every token matches an edge.
    ///
    /// # Panics
    /// Panics if `shingle` is empty.
    #[track_caller]
    pub fn get(&self, shingle: &[T]) -> Option<&Node<T, C>> {
        let (mut head, mut rest) = split_shingle(shingle);
        let mut position = self;
        loop {
            let node = position.child(head)?;
            let Some((next_head, tail)) = rest.split_first() else {
                return Some(node);
            };
            position = node.next()?;
            head = next_head;
            rest = tail;
        }
    }

    /// Records that `shingle` occurred `count` times.
    ///
    /// Every node along the path gains `count`; missing nodes are created.
    /// If the head token diverges from a single-branch position, `self` is
    /// replaced by a multi-branch position seeded with the existing node.
    ///
    /// # Panics
    /// Panics if `shingle` is empty.
    #[track_caller]
    pub fn insert(&mut self, shingle: &[T], count: C) {
        let (head, rest) = split_shingle(shingle);
        if let Some(node) = self.descend(head, rest, count) {
            node.extend(rest, count);
        }
    }

    /// Returns the node stored here for `token`, if any.
    pub fn child(&self, token: &T) -> Option<&Node<T, C>> {
        match self {
            Self::Single(single) if single.node().token() == token => Some(single.node()),
            Self::Single(_) => None,
            Self::Multi(multi) => multi.child(token),
        }
    }

    /// Records one step of an insertion at this position.
    ///
    /// When `head` is already stored, its node gains `count` and is returned
    /// so the caller can continue with `rest`. Otherwise the whole of
    /// `head, rest` is stored as a new chain, promoting this position if it
    /// was single-branch, and `None` is returned.
    pub(crate) fn descend(&mut self, head: &T, rest: &[T], count: C) -> Option<&mut Node<T, C>> {
        if matches!(self, Self::Single(single) if single.node().token() != head) {
            self.promote();
        }

        match self {
            Self::Single(single) => {
                let node = single.node_mut();
                node.record(count);
                Some(node)
            }
            Self::Multi(multi) => multi.descend(head, rest, count),
        }
    }

    /// Replaces a single-branch position with a multi-branch one holding the same node.
    fn promote(&mut self) {
        let prior = mem::replace(self, Self::Multi(MultiBranch::with_capacity(2)));
        match (prior, &mut *self) {
            (Self::Single(single), Self::Multi(multi)) => multi.adopt(single.into_node()),
            _ => unreachable!("only a single-branch position is promoted"),
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("promoted single-branch position");
    }
}

/// Splits the cursor into its head token and the remaining tokens.
#[track_caller]
pub(crate) fn split_shingle<T>(shingle: &[T]) -> (&T, &[T]) {
    match shingle.split_first() {
        Some(parts) => parts,
        None => panic!("shingle cursor must not be empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_is_single_branch() {
        let position: TriePosition<char> = TriePosition::chain(&['a', 'b'], 1);
        assert!(!position.is_branching());
        assert_eq!(position.len(), 1);
    }

    #[test]
    fn test_matching_insert_stays_single() {
        let mut position: TriePosition<char> = TriePosition::chain(&['a', 'b'], 1);
        position.insert(&['a', 'b', 'c'], 2);

        assert!(!position.is_branching());
        assert_eq!(position.get(&['a']).unwrap().count(), 3);
        assert_eq!(position.get(&['a', 'b']).unwrap().count(), 3);
        assert_eq!(position.get(&['a', 'b', 'c']).unwrap().count(), 2);
    }

    #[test]
    fn test_divergent_insert_promotes_in_place() {
        let mut position: TriePosition<char> = TriePosition::chain(&['a', 'b'], 5);
        position.insert(&['x'], 3);

        assert!(position.is_branching());
        assert_eq!(position.len(), 2);
        assert_eq!(position.get(&['a']).unwrap().count(), 5);
        assert_eq!(position.get(&['a', 'b']).unwrap().count(), 5);
        assert_eq!(position.get(&['x']).unwrap().count(), 3);
    }

    #[test]
    fn test_promotion_is_local() {
        let mut position: TriePosition<char> = TriePosition::chain(&['a', 'b'], 5);
        position.insert(&['a', 'd'], 3);

        // The top position saw a single token; only the one below diverged.
        assert!(!position.is_branching());
        let below = position.get(&['a']).unwrap().next().unwrap();
        assert!(below.is_branching());
        assert_eq!(below.len(), 2);
    }

    #[test]
    fn test_nodes_lists_every_token() {
        let mut position: TriePosition<u8> = TriePosition::chain(&[1], 1);
        position.insert(&[2], 1);
        position.insert(&[3], 1);

        let mut tokens: Vec<u8> = position.nodes().map(|node| *node.token()).collect();
        tokens.sort_unstable();
        assert_eq!(tokens, vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "shingle cursor must not be empty")]
    fn test_insert_empty_shingle_panics() {
        let mut position: TriePosition<u8> = TriePosition::chain(&[1], 1);
        position.insert(&[], 1);
    }

    #[test]
    #[should_panic(expected = "shingle cursor must not be empty")]
    fn test_get_empty_shingle_panics() {
        let position: TriePosition<u8> = TriePosition::chain(&[1], 1);
        let _ = position.get(&[]);
    }

    #[test]
    fn test_child_lookup() {
        let mut position: TriePosition<u8> = TriePosition::chain(&[1, 2], 1);
        assert_eq!(position.child(&1).map(Node::count), Some(1));
        assert!(position.child(&2).is_none());

        position.insert(&[3], 4);
        assert_eq!(position.child(&3).map(Node::count), Some(4));
        assert!(position.child(&2).is_none());
    }

    #[test]
    fn test_promotion_deep_in_long_path() {
        let tokens: Vec<u32> = (0..100_000).collect();
        let mut position: TriePosition<u32> = TriePosition::chain(&tokens, 1);

        let mut divergent = tokens[..50_000].to_vec();
        divergent.push(u32::MAX);
        position.insert(&divergent, 2);

        assert_eq!(position.get(&tokens[..50_000]).unwrap().count(), 3);
        assert_eq!(position.get(&tokens).unwrap().count(), 1);
        assert_eq!(position.get(&divergent).unwrap().count(), 2);
        assert!(position.get(&tokens[..50_000]).unwrap().next().unwrap().is_branching());
        assert!(!position.get(&tokens[..49_999]).unwrap().next().unwrap().is_branching());
    }
}
