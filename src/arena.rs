use std::ops::{Index, IndexMut};

use slab::Slab;

use crate::{Arena, Node, NodeId};

impl<K> Arena<K> {
    pub(crate) const fn new() -> Self {
        Arena { slab: Slab::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slab: Slab::with_capacity(capacity),
        }
    }

    /// Stores `node` and hands back its handle. Released slots are reused.
    #[inline]
    pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeId {
        NodeId(self.slab.insert(node))
    }

    /// Releases the slot behind `id` and returns the node it held.
    ///
    /// The handle is dangling afterwards; the caller must have unlinked it.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<K> {
        self.slab
            .try_remove(id.0)
            .unwrap_or_else(|| panic!("double release of node {id:?}"))
    }

    /// Mutable access to two distinct nodes at once.
    pub(crate) fn pair_mut(&mut self, a: NodeId, b: NodeId) -> (&mut Node<K>, &mut Node<K>) {
        assert_ne!(a, b, "aliased node handles");
        self.slab
            .get2_mut(a.0, b.0)
            .expect("dangling node handle")
    }

    pub(crate) fn clear(&mut self) {
        self.slab.clear();
    }
}

impl<K> Index<NodeId> for Arena<K> {
    type Output = Node<K>;

    #[inline(always)]
    fn index(&self, id: NodeId) -> &Node<K> {
        self.slab
            .get(id.0)
            .unwrap_or_else(|| panic!("dangling node handle {id:?}"))
    }
}

impl<K> IndexMut<NodeId> for Arena<K> {
    #[inline(always)]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K> {
        self.slab
            .get_mut(id.0)
            .unwrap_or_else(|| panic!("dangling node handle {id:?}"))
    }
}
