use std::boxed::Box;
use std::collections::hash_map::{HashMap, Values, ValuesMut};
use core::hash::Hash;

use super::count::Count;
use super::node::Node;
use super::position::split_shingle;

/// A trie position with two or more observed continuations, indexed by token.
///
/// The map is boxed so that a position costs no more than an inline
/// [`SingleBranch`](super::SingleBranch) node plus its tag.
#[derive(Debug)]
pub struct MultiBranch<T, C = u32> {
    children: Box<HashMap<T, Node<T, C>>>,
}

impl<T, C> MultiBranch<T, C> {
    /// Returns the number of distinct tokens at this position.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if no token is stored. Only transiently true during promotion.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn nodes(&self) -> Values<'_, T, Node<T, C>> {
        self.children.values()
    }

    pub(crate) fn nodes_mut(&mut self) -> ValuesMut<'_, T, Node<T, C>> {
        self.children.values_mut()
    }
}

impl<T, C> MultiBranch<T, C>
where
    T: Eq + Hash + Clone,
    C: Count,
{
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            children: Box::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Moves an existing node, with its count and subtree, into the map.
    pub(crate) fn adopt(&mut self, node: Node<T, C>) {
        self.children.insert(node.token().clone(), node);
    }

    /// Returns the node stored for `token`, if any.
    pub fn child(&self, token: &T) -> Option<&Node<T, C>> {
        self.children.get(token)
    }

    /// Looks up `shingle` below this position.
    ///
    /// # Panics
    /// Panics if `shingle` is empty.
    #[track_caller]
    pub fn get(&self, shingle: &[T]) -> Option<&Node<T, C>> {
        let (head, rest) = split_shingle(shingle);
        self.children.get(head)?.get(rest)
    }

    /// Records `shingle` with `count`. A multi-branch position is never
    /// replaced; new tokens simply become new entries.
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

    /// Adds `count` to the node for `head` and returns it, or stores
    /// `head, rest` as a new entry and returns `None`.
    pub(crate) fn descend(&mut self, head: &T, rest: &[T], count: C) -> Option<&mut Node<T, C>> {
        if !self.children.contains_key(head) {
            self.children.insert(head.clone(), Node::chain(head, rest, count));
            return None;
        }

        let node = self.children.get_mut(head)?;
        node.record(count);
        Some(node)
    }
}
