//! A red-black tree set whose keys can be tagged once with a payload.
//!
//! Nodes live in an arena and refer to each other through handles: children
//! are owned links, the parent is a back-reference used only to walk upwards
//! during rebalancing.

mod arena;
mod check;
mod iter;
mod node;
mod payload;
mod root;
mod tree;

pub use check::Violation;
pub use iter::Iter;

use std::ops::Not;

use slab::Slab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child slot of a parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Not for Side {
    type Output = Side;

    fn not(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Stable handle to a node slot in the arena, wrapping the slab key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

pub(crate) type Link = Option<NodeId>;

pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) parent: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
    // Written at most once; see `Tree::set_payload`.
    pub(crate) payload: Option<K>,
}

pub(crate) struct Arena<K> {
    slab: Slab<Node<K>>,
}

/// An ordered set of unique keys kept balanced as a red-black tree.
///
/// Every key owns a single payload slot which [`Tree::set_payload`] fills the
/// first time the key is claimed and never overwrites afterwards.
pub struct Tree<K> {
    root: Link,
    nodes: Arena<K>,
    len: usize,
}
