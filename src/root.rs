use log::trace;

use crate::{Color, NodeId, Side, Tree};

/// What took the place of a node unlinked by [`Tree::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MovedUp {
    /// The removed node's only child was promoted.
    Node(NodeId),
    /// The removed node was a leaf: the emptied `side` slot of `parent` is
    /// where the missing black now has to be made up.
    Vacant { parent: NodeId, side: Side },
}

// Rotations
impl<K> Tree<K> {
    /// Rotates the subtree rooted at `node` towards `side`: the child on the
    /// other side is promoted into `node`'s position and `node` becomes its
    /// `side` child.
    ///
    /// ```text
    ///  rotate(n, Left)           rotate(n, Right)
    ///
    ///     n            p            n          p
    ///    / \          / \          / \        / \
    ///   a   p   -->  n   c        p   c -->  a   n
    ///      / \      / \          / \            / \
    ///     b   c    a   b        a   b          b   c
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `node` has no child to promote.
    pub(crate) fn rotate(&mut self, node: NodeId, side: Side) {
        // Read every link first, then commit.
        let pivot = self
            .nodes
            .child(node, !side)
            .expect("rotation needs a child to promote");
        let inner = self.nodes.child(pivot, side);
        let parent = self.nodes.parent(node);
        let slot = parent.map(|parent| (parent, self.nodes.side_of(parent, node)));

        trace!("rotate {side:?} at {node:?}, promoting {pivot:?}");

        self.nodes.attach(node, !side, inner);
        self.nodes.attach(pivot, side, Some(node));
        match slot {
            Some((parent, slot)) => self.nodes.attach(parent, slot, Some(pivot)),
            None => {
                self.nodes[pivot].parent = None;
                self.root = Some(pivot);
            }
        }
    }

    /// Promotes the right child of `node` into its place.
    #[allow(dead_code)]
    #[inline]
    pub(crate) fn rotate_left(&mut self, node: NodeId) {
        self.rotate(node, Side::Left);
    }

    /// Promotes the left child of `node` into its place.
    #[allow(dead_code)]
    #[inline]
    pub(crate) fn rotate_right(&mut self, node: NodeId) {
        self.rotate(node, Side::Right);
    }
}

// Rebalancing
impl<K> Tree<K> {
    /// Restores the red-black properties after `node` was linked in as a red
    /// leaf.
    pub(crate) fn insert_fixup(&mut self, mut node: NodeId) {
        loop {
            /*
             * Loop invariant: node is red.
             */
            let Some(mut parent) = self.nodes.parent(node) else {
                // Case A - node is the root.
                self.nodes.set_color(node, Color::Black);
                break;
            };

            // Case B - a black parent absorbs a red child.
            if self.nodes[parent].is_black() {
                break;
            }

            let Some(gparent) = self.nodes.parent(parent) else {
                // Case C - red root, repaint it.
                self.nodes.set_color(parent, Color::Black);
                break;
            };

            let line = self.nodes.side_of(gparent, parent);
            let uncle = self.nodes.child(gparent, !line);

            if let Some(uncle) = uncle.filter(|&uncle| self.nodes[uncle].is_red()) {
                /*
                 * Case D - node's uncle is red (color flips).
                 *
                 *       G            g
                 *      / \          / \
                 *     p   u  -->   P   U
                 *    /            /
                 *   n            n
                 *
                 * g's parent may be red as well, so go on from g.
                 */
                trace!("insert fixup: red uncle at {uncle:?}");
                self.nodes.set_color(parent, Color::Black);
                self.nodes.set_color(uncle, Color::Black);
                self.nodes.set_color(gparent, Color::Red);
                node = gparent;
                continue;
            }

            if self.nodes.side_of(parent, node) != line {
                /*
                 * Case E - node's uncle is black and node is an inner
                 * grandchild (rotate at parent, shown for a left line).
                 *
                 *      G             G
                 *     / \           / \
                 *    p   U  -->    n   U
                 *     \           /
                 *      n         p
                 *
                 * Still two reds in a row; Case F takes care of it.
                 */
                trace!("insert fixup: inner grandchild {node:?}");
                self.rotate(parent, line);
                parent = node;
            }

            /*
             * Case F - node's uncle is black and node is an outer
             * grandchild (rotate at gparent, shown for a left line).
             *
             *        G           P
             *       / \         / \
             *      p   U  -->  n   g
             *     /                 \
             *    n                   U
             */
            trace!("insert fixup: outer grandchild below {gparent:?}");
            self.rotate(gparent, !line);
            self.nodes.set_color(parent, Color::Black);
            self.nodes.set_color(gparent, Color::Red);
            break;
        }
    }

    /// Makes up for a black node taken out of the tree. `moved_up` is
    /// whatever now occupies its position.
    pub(crate) fn erase_fixup(&mut self, moved_up: MovedUp) {
        let (mut parent, mut side) = match moved_up {
            MovedUp::Node(node) => {
                if self.nodes[node].is_red() {
                    // Case 0 - a red replacement takes over the black.
                    self.nodes.set_color(node, Color::Black);
                    return;
                }
                match self.nodes.parent(node) {
                    Some(parent) => (parent, self.nodes.side_of(parent, node)),
                    // Case 1 - the root absorbs the deficiency.
                    None => return,
                }
            }
            MovedUp::Vacant { parent, side } => (parent, side),
        };

        loop {
            /*
             * Loop invariants:
             * - the slot (parent, side) is black or empty;
             * - every leaf path through that slot has one black node
             *   fewer than the other leaf paths through parent.
             */
            let mut sibling = self
                .nodes
                .child(parent, !side)
                .expect("black height guarantees a sibling");

            if self.nodes[sibling].is_red() {
                /*
                 * Case 2 - red sibling, rotate at parent towards N.
                 *
                 *     P               S
                 *    / \             / \
                 *   N   s    -->    p   Sr
                 *      / \         / \
                 *     Sl  Sr      N   Sl
                 */
                trace!("erase fixup: red sibling {sibling:?}");
                self.nodes.set_color(sibling, Color::Black);
                self.nodes.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self
                    .nodes
                    .child(parent, !side)
                    .expect("a red sibling has two black children");
            }

            let inner = self.nodes.child(sibling, side);
            let outer = self.nodes.child(sibling, !side);

            if self.nodes.is_black(inner) && self.nodes.is_black(outer) {
                /*
                 * Cases 3/4 - sibling color flip.
                 *
                 *    (p)           (p)
                 *    / \           / \
                 *   N   S    -->  N   s
                 *      / \           / \
                 *     Sl  Sr        Sl  Sr
                 *
                 * A red p turns black and settles it (Case 3); otherwise the
                 * whole of p is short of a black (Case 4).
                 */
                self.nodes.set_color(sibling, Color::Red);
                if self.nodes[parent].is_red() {
                    trace!("erase fixup: red parent {parent:?} absorbs");
                    self.nodes.set_color(parent, Color::Black);
                    return;
                }
                trace!("erase fixup: deficiency moves up to {parent:?}");
                let Some(gparent) = self.nodes.parent(parent) else {
                    // Case 1
                    return;
                };
                side = self.nodes.side_of(gparent, parent);
                parent = gparent;
                continue;
            }

            if self.nodes.is_black(outer) {
                /*
                 * Case 5 - red inner nephew, rotate at sibling away from N.
                 *
                 *   (p)           (p)
                 *   / \           / \
                 *  N   S    -->  N   Sl
                 *     / \             \
                 *    sl  Sr            s
                 *                       \
                 *                        Sr
                 */
                let inner = inner.expect("a red inner nephew");
                trace!("erase fixup: red inner nephew {inner:?}");
                self.nodes.set_color(inner, Color::Black);
                self.nodes.set_color(sibling, Color::Red);
                self.rotate(sibling, !side);
                sibling = inner;
            }

            /*
             * Case 6 - red outer nephew, rotate at parent towards N.
             *
             *      (p)             (s)
             *      / \             / \
             *     N   S     -->   P   Sr
             *        / \         / \
             *      (sl) sr      N  (sl)
             */
            let outer = self
                .nodes
                .child(sibling, !side)
                .expect("a red outer nephew");
            trace!("erase fixup: red outer nephew {outer:?}");
            let color = self.nodes[parent].color;
            self.nodes.set_color(sibling, color);
            self.nodes.set_color(parent, Color::Black);
            self.nodes.set_color(outer, Color::Black);
            self.rotate(parent, side);
            return;
        }
    }
}
