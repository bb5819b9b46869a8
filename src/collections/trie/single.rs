use core::hash::Hash;

use super::count::Count;
use super::node::Node;
use super::position::{split_shingle, TriePosition};

/// A trie position that has only ever seen one continuation.
///
/// The node is stored inline: no map, no extra allocation. Most positions
/// deep in an n-gram trie stay in this form for their whole life.
#[derive(Debug)]
pub struct SingleBranch<T, C = u32> {
    node: Node<T, C>,
}

impl<T, C> SingleBranch<T, C> {
    /// Returns the only node at this position.
    pub fn node(&self) -> &Node<T, C> {
        &self.node
    }

    pub(crate) fn from_node(node: Node<T, C>) -> Self {
        Self { node }
    }

    pub(crate) fn node_mut(&mut self) -> &mut Node<T, C> {
        &mut self.node
    }

    pub(crate) fn into_node(self) -> Node<T, C> {
        self.node
    }
}

impl<T, C> SingleBranch<T, C>
where
    T: Eq + Hash + Clone,
    C: Count,
{
    /// Builds a single-branch chain for `shingle`, every node carrying `count`.
    ///
    /// # Panics
    /// Panics if `shingle` is empty.
    #[track_caller]
    pub fn new(shingle: &[T], count: C) -> Self {
        let (head, rest) = split_shingle(shingle);
        Self {
            node: Node::chain(head, rest, count),
        }
    }

    /// Looks up `shingle` below this position.
    ///
    /// Only the one stored path can match; any other head token is absent.
    ///
    /// # Panics
    /// Panics if `shingle` is empty.
    #[track_caller]
    pub fn get(&self, shingle: &[T]) -> Option<&Node<T, C>> {
        let (head, rest) = split_shingle(shingle);
        if self.node.token() != head {
            return None;
        }
        self.node.get(rest)
    }

    /// Records `shingle` with `count`, consuming this position and returning
    /// the one that must now occupy its slot.
    ///
    /// The result is `self` (mutated) when the head token matches, otherwise
    /// a [`TriePosition::Multi`] seeded with this position's node.
    ///
    /// # Panics
    /// Panics if `shingle` is empty.
    #[track_caller]
    #[must_use]
    pub fn insert(self, shingle: &[T], count: C) -> TriePosition<T, C> {
        let mut position = TriePosition::Single(self);
        position.insert(shingle, count);
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chains_every_token() {
        let single: SingleBranch<&str> = SingleBranch::new(&["le", "petit", "chat"], 2);
        assert_eq!(*single.node().token(), "le");
        assert_eq!(single.get(&["le"]).unwrap().count(), 2);
        assert_eq!(single.get(&["le", "petit"]).unwrap().count(), 2);
        assert_eq!(single.get(&["le", "petit", "chat"]).unwrap().count(), 2);
        assert!(single.get(&["le", "petit", "chat", "noir"]).is_none());
    }

    #[test]
    fn test_get_rejects_other_head() {
        let single: SingleBranch<&str> = SingleBranch::new(&["le", "chat"], 1);
        assert!(single.get(&["la"]).is_none());
        assert!(single.get(&["le", "chien"]).is_none());
    }

    #[test]
    fn test_insert_matching_returns_same_representation() {
        let single: SingleBranch<&str> = SingleBranch::new(&["le"], 1);
        let position = single.insert(&["le", "chat"], 2);

        assert!(!position.is_branching());
        assert_eq!(position.get(&["le"]).unwrap().count(), 3);
        assert_eq!(position.get(&["le", "chat"]).unwrap().count(), 2);
    }

    #[test]
    fn test_insert_divergent_returns_replacement() {
        let single: SingleBranch<&str> = SingleBranch::new(&["le", "chat"], 1);
        let position = single.insert(&["la", "souris"], 4);

        let TriePosition::Multi(multi) = &position else {
            panic!("expected promotion");
        };
        assert_eq!(multi.len(), 2);
        assert_eq!(position.get(&["le", "chat"]).unwrap().count(), 1);
        assert_eq!(position.get(&["la", "souris"]).unwrap().count(), 4);
    }

    #[test]
    #[should_panic(expected = "shingle cursor must not be empty")]
    fn test_new_empty_shingle_panics() {
        let _: SingleBranch<u8> = SingleBranch::new(&[], 1);
    }

    #[test]
    #[should_panic(expected = "shingle cursor must not be empty")]
    fn test_get_empty_shingle_panics() {
        let single: SingleBranch<u8> = SingleBranch::new(&[1], 1);
        let _ = single.get(&[]);
    }

    #[test]
    #[should_panic(expected = "shingle cursor must not be empty")]
    fn test_insert_empty_shingle_panics() {
        let single: SingleBranch<u8> = SingleBranch::new(&[1], 1);
        let _ = single.insert(&[], 1);
    }
}
