use std::collections::hash_map::Values;
use std::vec::Vec;
use core::iter::FusedIterator;

use super::node::Node;

/// Iterator over the nodes stored at one trie position.
///
/// Yields one node for a single-branch position, every map entry for a
/// multi-branch one, in unspecified order.
pub struct Children<'a, T, C> {
    inner: ChildrenInner<'a, T, C>,
}

enum ChildrenInner<'a, T, C> {
    Single(Option<&'a Node<T, C>>),
    Multi(Values<'a, T, Node<T, C>>),
}

impl<'a, T, C> Children<'a, T, C> {
    pub(crate) fn empty() -> Self {
        Self::single_opt(None)
    }

    pub(crate) fn single(node: &'a Node<T, C>) -> Self {
        Self::single_opt(Some(node))
    }

    pub(crate) fn multi(values: Values<'a, T, Node<T, C>>) -> Self {
        Self {
            inner: ChildrenInner::Multi(values),
        }
    }

    fn single_opt(node: Option<&'a Node<T, C>>) -> Self {
        Self {
            inner: ChildrenInner::Single(node),
        }
    }
}

impl<'a, T, C> Iterator for Children<'a, T, C> {
    type Item = &'a Node<T, C>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ChildrenInner::Single(node) => node.take(),
            ChildrenInner::Multi(values) => values.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            ChildrenInner::Single(node) => {
                let n = usize::from(node.is_some());
                (n, Some(n))
            }
            ChildrenInner::Multi(values) => values.size_hint(),
        }
    }
}

impl<T, C> ExactSizeIterator for Children<'_, T, C> {}

impl<T, C> FusedIterator for Children<'_, T, C> {}

/// Depth-first iterator over every prefix stored in a trie.
/// Yields `(Vec<T>, C)`; a prefix is always yielded before its extensions.
pub struct Iter<'a, T, C> {
    // One pending sibling iterator per depth.
    stack: Vec<Children<'a, T, C>>,
    // Tokens of the most recently yielded prefix.
    prefix: Vec<T>,
}

impl<'a, T, C> Iter<'a, T, C> {
    pub(crate) fn new(roots: Children<'a, T, C>) -> Self {
        Self {
            stack: vec![roots],
            prefix: Vec::new(),
        }
    }
}

impl<T: Clone, C: Copy> Iterator for Iter<'_, T, C> {
    type Item = (Vec<T>, C);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            match self.stack[depth].next() {
                Some(node) => {
                    self.prefix.truncate(depth);
                    self.prefix.push(node.token().clone());
                    self.stack.push(node.children());
                    return Some((self.prefix.clone(), node.count()));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<T: Clone, C: Copy> FusedIterator for Iter<'_, T, C> {}
