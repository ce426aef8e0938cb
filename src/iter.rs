use std::iter::FusedIterator;

use crate::{Arena, NodeId, Tree};

/// An iterator over the keys of a [`Tree`] in ascending order.
///
/// Keeps the path of pending ancestors on an explicit stack, so it never
/// consults parent links.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K> {
    nodes: &'a Arena<K>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut link: Option<NodeId>) {
        while let Some(id) = link {
            self.stack.push(id);
            link = self.nodes[id].left;
        }
    }

    // Every stack entry sits in the left subtree of the one below it, so the
    // largest key left is in the right subtree of the bottom entry, or is the
    // bottom entry itself.
    fn max_pending(&self) -> Option<&'a K> {
        let nodes = self.nodes;
        let bottom = *self.stack.first()?;
        let last = match nodes[bottom].right {
            Some(right) => nodes.last_below(right),
            None => bottom,
        };
        Some(&nodes[last].key)
    }
}

impl<K> Tree<K> {
    /// Visits every key in ascending order.
    ///
    /// ```
    /// use rbtag::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(vec![&1, &2, &3], tree.iter().collect::<Vec<_>>());
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            nodes: &self.nodes,
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root);
        iter
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let id = self.stack.pop()?;
        let nodes = self.nodes;
        let node = &nodes[id];
        self.push_left_spine(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(self) -> Option<&'a K> {
        self.max_pending()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}
