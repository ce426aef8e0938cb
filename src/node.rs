use crate::{Arena, Color, Link, Node, NodeId, Side};

impl<K> Node<K> {
    /// A detached node about to hang below `parent`; red unless it is going
    /// to be the root.
    pub(crate) fn new(key: K, parent: Link) -> Self {
        Node {
            key,
            color: if parent.is_some() {
                Color::Red
            } else {
                Color::Black
            },
            parent,
            left: None,
            right: None,
            payload: None,
        }
    }

    #[inline(always)]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline(always)]
    pub(crate) fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline(always)]
    pub(crate) fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline(always)]
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

// Link-level accessors. An absent link is a black leaf.
impl<K> Arena<K> {
    #[inline(always)]
    pub(crate) fn is_red(&self, link: Link) -> bool {
        link.is_some_and(|id| self[id].is_red())
    }

    #[inline(always)]
    pub(crate) fn is_black(&self, link: Link) -> bool {
        !self.is_red(link)
    }

    #[inline(always)]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self[id].color = color;
    }

    #[inline(always)]
    pub(crate) fn parent(&self, id: NodeId) -> Link {
        self[id].parent
    }

    #[inline(always)]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> Link {
        self[id].child(side)
    }

    /// Points `parent`'s `side` slot at `child` and `child` back at `parent`.
    #[inline(always)]
    pub(crate) fn attach(&mut self, parent: NodeId, side: Side, child: Link) {
        *self[parent].child_mut(side) = child;
        if let Some(child) = child {
            self[child].parent = Some(parent);
        }
    }

    /// The slot of `parent` that holds `child`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not recognize `child`, which means the links
    /// are corrupted.
    pub(crate) fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        let node = &self[parent];
        if node.left == Some(child) {
            Side::Left
        } else if node.right == Some(child) {
            Side::Right
        } else {
            panic!("bad parent: {parent:?} does not own {child:?}")
        }
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub(crate) fn first_below(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self[id].left {
            id = left;
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`.
    pub(crate) fn last_below(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self[id].right {
            id = right;
        }
        id
    }
}
