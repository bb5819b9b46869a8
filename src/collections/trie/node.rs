use std::boxed::Box;
use std::vec::Vec;
use core::hash::Hash;

use super::count::Count;
use super::iter::Children;
use super::position::TriePosition;
use super::single::SingleBranch;

/// A node in the shingle trie.
///
/// Each node contains:
/// - The token on the edge from its parent position.
/// - The number of times the path ending at this edge was observed.
/// - The continuations observed after this token, if any.
///
/// A node owns its continuation outright; dropping a node drops the whole
/// subtree below it.
#[derive(Debug)]
pub struct Node<T, C = u32> {
    token: T,
    count: C,
    next: Option<Box<TriePosition<T, C>>>,
}

impl<T, C> Node<T, C> {
    /// Returns the token labelling this edge.
    pub fn token(&self) -> &T {
        &self.token
    }

    /// Overwrites the accumulated count.
    pub fn set_count(&mut self, count: C) {
        self.count = count;
    }

    /// Returns the position holding every continuation observed after this
    /// token, or `None` if no longer shingle has passed through here.
    pub fn next(&self) -> Option<&TriePosition<T, C>> {
        self.next.as_deref()
    }

    /// Returns true if nothing has been observed after this token.
    pub fn is_leaf(&self) -> bool {
        self.next.is_none()
    }

    /// Iterates over the nodes one token deeper than this one.
    pub fn children(&self) -> Children<'_, T, C> {
        match self.next.as_deref() {
            Some(position) => position.nodes(),
            None => Children::empty(),
        }
    }
}

impl<T, C: Copy> Node<T, C> {
    /// Returns the accumulated count of the path ending at this node.
    pub fn count(&self) -> C {
        self.count
    }
}

impl<T, C: Count> Node<T, C> {
    /// Adds `count` to this node without touching anything below it.
    pub(crate) fn record(&mut self, count: C) {
        self.count = self.count.accumulate(count);
    }
}

impl<T, C> Node<T, C>
where
    T: Eq + Hash + Clone,
    C: Count,
{
    /// Builds the node for `head` with `count`, chaining single branches for `rest`.
    ///
    /// The chain is assembled from the last token upward.
    pub(crate) fn chain(head: &T, rest: &[T], count: C) -> Self {
        let mut next = None;
        for token in rest.iter().rev() {
            let node = Self {
                token: token.clone(),
                count,
                next,
            };
            next = Some(Box::new(TriePosition::Single(SingleBranch::from_node(node))));
        }

        Self {
            token: head.clone(),
            count,
            next,
        }
    }

    /// Follows `rest` below this node. An empty `rest` matches this node.
    pub(crate) fn get(&self, rest: &[T]) -> Option<&Self> {
        if rest.is_empty() {
            return Some(self);
        }
        self.next.as_deref()?.get(rest)
    }

    /// Records `rest` with `count` below this node, whose own count has
    /// already been updated. Walks one position per token.
    pub(crate) fn extend(&mut self, mut rest: &[T], count: C) {
        let mut node = self;
        while let Some((head, tail)) = rest.split_first() {
            if node.next.is_none() {
                node.next = Some(Box::new(TriePosition::chain(rest, count)));
                return;
            }

            let Some(position) = node.next.as_deref_mut() else {
                return;
            };
            match position.descend(head, tail, count) {
                Some(child) => node = child,
                None => return,
            }
            rest = tail;
        }
    }
}

impl<T, C> Drop for Node<T, C> {
    // Tears the subtree down with an explicit stack so depth never reaches
    // the call stack.
    fn drop(&mut self) {
        let Some(next) = self.next.take() else {
            return;
        };

        let mut pending: Vec<Box<TriePosition<T, C>>> = vec![next];
        while let Some(mut position) = pending.pop() {
            match &mut *position {
                TriePosition::Single(single) => pending.extend(single.node_mut().next.take()),
                TriePosition::Multi(multi) => {
                    pending.extend(multi.nodes_mut().filter_map(|node| node.next.take()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_builds_single_path() {
        let node: Node<char, u32> = Node::chain(&'a', &['b', 'c'], 4);
        assert_eq!(*node.token(), 'a');
        assert_eq!(node.count(), 4);
        assert!(!node.is_leaf());

        let c = node.get(&['b', 'c']).unwrap();
        assert_eq!(*c.token(), 'c');
        assert_eq!(c.count(), 4);
        assert!(c.is_leaf());
        assert!(node.get(&['b', 'x']).is_none());
    }

    #[test]
    fn test_absorb_accumulates_along_path() {
        let mut node: Node<char, u32> = Node::chain(&'a', &[], 1);
        assert!(node.is_leaf());

        node.record(2);
        node.extend(&['b'], 2);
        node.record(3);
        node.extend(&['b', 'c'], 3);

        assert_eq!(node.count(), 6);
        assert_eq!(node.get(&['b']).unwrap().count(), 5);
        assert_eq!(node.get(&['b', 'c']).unwrap().count(), 3);
    }

    #[test]
    fn test_set_count_overwrites() {
        let mut node: Node<u8, u64> = Node::chain(&7, &[], 10);
        node.set_count(2);
        assert_eq!(node.count(), 2);
    }

    #[test]
    fn test_children_of_leaf_is_empty() {
        let node: Node<u8> = Node::chain(&1, &[], 1);
        assert_eq!(node.children().count(), 0);
    }

    #[test]
    fn test_chain_and_drop_long_path() {
        let tokens: Vec<u32> = (0..100_000).collect();
        let node: Node<u32, u32> = Node::chain(&0, &tokens[1..], 1);
        let last = node.get(&tokens[1..]).unwrap();
        assert_eq!(*last.token(), 99_999);
        assert!(last.is_leaf());
        drop(node);
    }
}
