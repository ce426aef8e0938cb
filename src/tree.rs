use std::{
    borrow::Borrow,
    cmp::Ordering::*,
    fmt::{self, Debug},
    mem,
};

use log::debug;

use crate::{Arena, Link, Node, NodeId, Side, Tree, root::MovedUp};

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    pub const fn new() -> Self {
        Tree {
            root: None,
            nodes: Arena::new(),
            len: 0,
        }
    }

    /// An empty tree with room for `capacity` keys before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            root: None,
            nodes: Arena::with_capacity(capacity),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every key and payload.
    pub fn clear(&mut self) {
        debug!("clearing {} nodes", self.len);
        self.root = None;
        self.nodes.clear();
        self.len = 0;
    }

    pub fn first(&self) -> Option<&K> {
        self.root.map(|root| &self.nodes[self.nodes.first_below(root)].key)
    }

    pub fn last(&self) -> Option<&K> {
        self.root.map(|root| &self.nodes[self.nodes.last_below(root)].key)
    }

    /// Number of nodes on the longest path from the root down to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = pending.pop() {
            height = height.max(depth);
            let node = &self.nodes[id];
            for child in [node.left, node.right].into_iter().flatten() {
                pending.push((child, depth + 1));
            }
        }
        height
    }

    /// Every key in ascending order.
    pub fn in_order_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<K> Tree<K> {
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Link
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut link = self.root;
        while let Some(current) = link {
            let node = &self.nodes[current];
            match key.cmp(node.key.borrow()) {
                Equal => break,
                Greater => link = node.right,
                Less => link = node.left,
            }
        }
        link
    }

    /// Adds `key`, returning `false` and leaving the tree untouched when it
    /// is already present.
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut link = self.root;
        while let Some(current) = link {
            side = match key.cmp(&self.nodes[current].key) {
                Equal => return false,
                Greater => Side::Right,
                Less => Side::Left,
            };
            parent = Some(current);
            link = self.nodes.child(current, side);
        }

        let node = self.nodes.alloc(Node::new(key, parent));
        match parent {
            Some(parent) => self.nodes.attach(parent, side, Some(node)),
            None => self.root = Some(node),
        }
        self.len += 1;
        self.insert_fixup(node);
        true
    }

    /// Removes `key` along with its payload. Returns `false` when the key is
    /// absent.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(target) = self.find(key) else {
            return false;
        };

        let victim = match (self.nodes[target].left, self.nodes[target].right) {
            (Some(_), Some(right)) => {
                // The successor's entry moves into target; its node goes.
                let successor = self.nodes.first_below(right);
                let (target, successor_node) = self.nodes.pair_mut(target, successor);
                mem::swap(&mut target.key, &mut successor_node.key);
                mem::swap(&mut target.payload, &mut successor_node.payload);
                successor
            }
            _ => target,
        };

        let moved_up = self.unlink(victim);
        let removed = self.nodes.release(victim);
        self.len -= 1;
        if removed.is_black() {
            if let Some(moved_up) = moved_up {
                self.erase_fixup(moved_up);
            }
        }
        true
    }

    /// Splices `victim`, which has at most one child, out of the tree.
    fn unlink(&mut self, victim: NodeId) -> Option<MovedUp> {
        let node = &self.nodes[victim];
        debug_assert!(node.left.is_none() || node.right.is_none());
        let (parent, child) = (node.parent, node.left.or(node.right));
        match parent {
            Some(parent) => {
                let side = self.nodes.side_of(parent, victim);
                self.nodes.attach(parent, side, child);
                Some(match child {
                    Some(child) => MovedUp::Node(child),
                    None => MovedUp::Vacant { parent, side },
                })
            }
            None => {
                self.root = child;
                if let Some(child) = child {
                    self.nodes[child].parent = None;
                }
                child.map(MovedUp::Node)
            }
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Tree<K> {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Debug> Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
impl<K: Ord> Tree<K> {
    /// Plain binary search tree insert, colors left alone.
    pub(crate) fn attach_unbalanced(&mut self, key: K) {
        let mut parent = None;
        let mut side = Side::Left;
        let mut link = self.root;
        while let Some(current) = link {
            side = if key < self.nodes[current].key {
                Side::Left
            } else {
                Side::Right
            };
            parent = Some(current);
            link = self.nodes.child(current, side);
        }
        let node = self.nodes.alloc(Node::new(key, parent));
        match parent {
            Some(parent) => self.nodes.attach(parent, side, Some(node)),
            None => self.root = Some(node),
        }
        self.len += 1;
    }
}

#[cfg(test)]
impl<K> Tree<K> {
    pub(crate) fn ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut pending: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = pending.pop() {
            ids.push(id);
            pending.extend([self.nodes[id].left, self.nodes[id].right].into_iter().flatten());
        }
        ids
    }
}
