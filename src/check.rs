use thiserror::Error;

use crate::{Link, Tree};

/// A broken red-black or search-tree property reported by [`Tree::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("key at in-order position {position} is not greater than its predecessor")]
    OutOfOrder { position: usize },
    #[error("the root is red")]
    RedRoot,
    #[error("red node at depth {depth} has a red child")]
    RedRed { depth: usize },
    #[error("black height differs below depth {depth}: {left} on the left, {right} on the right")]
    BlackHeight {
        depth: usize,
        left: usize,
        right: usize,
    },
    #[error("node at depth {depth} does not point back at its parent")]
    BrokenParent { depth: usize },
    #[error("tree records {recorded} keys but holds {counted} nodes")]
    Len { recorded: usize, counted: usize },
}

impl<K: Ord> Tree<K> {
    /// Audits the whole tree and returns its black height, the number of
    /// black nodes on every path from the root down to an absent child.
    ///
    /// ```
    /// use rbtag::Tree;
    ///
    /// let tree: Tree<u32> = (0..100).collect();
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<usize, Violation> {
        if self.nodes.is_red(self.root) {
            return Err(Violation::RedRoot);
        }
        if let Some(position) = self
            .iter()
            .zip(self.iter().skip(1))
            .position(|(previous, next)| previous >= next)
        {
            return Err(Violation::OutOfOrder {
                position: position + 1,
            });
        }

        let mut counted = 0;
        let black_height = self.black_height(self.root, None, 0, &mut counted)?;
        if counted != self.len {
            return Err(Violation::Len {
                recorded: self.len,
                counted,
            });
        }
        Ok(black_height)
    }

    fn black_height(
        &self,
        link: Link,
        parent: Link,
        depth: usize,
        counted: &mut usize,
    ) -> Result<usize, Violation> {
        let Some(id) = link else {
            return Ok(0);
        };
        let node = &self.nodes[id];
        *counted += 1;

        if node.parent != parent {
            return Err(Violation::BrokenParent { depth });
        }
        if node.is_red() && (self.nodes.is_red(node.left) || self.nodes.is_red(node.right)) {
            return Err(Violation::RedRed { depth });
        }

        let left = self.black_height(node.left, link, depth + 1, counted)?;
        let right = self.black_height(node.right, link, depth + 1, counted)?;
        if left != right {
            return Err(Violation::BlackHeight { depth, left, right });
        }
        Ok(left + usize::from(node.is_black()))
    }
}

#[cfg(test)]
mod test {
    use super::Violation;
    use crate::{Color, Tree};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_tree_is_valid() {
        assert_eq!(Ok(0), Tree::<u32>::new().validate());
    }

    #[test]
    fn single_node() {
        let tree: Tree<u32> = [1].into_iter().collect();
        assert_eq!(Ok(1), tree.validate());
    }

    #[test]
    fn detects_red_root() {
        let mut tree: Tree<u32> = [1].into_iter().collect();
        let root = tree.root.unwrap();
        tree.nodes.set_color(root, Color::Red);
        assert_eq!(Err(Violation::RedRoot), tree.validate());
    }

    #[test]
    fn detects_red_red() {
        let mut tree: Tree<u32> = [2, 1, 3, 4].into_iter().collect();
        let three = tree.find(&3).unwrap();
        tree.nodes.set_color(three, Color::Red);
        assert_eq!(Err(Violation::RedRed { depth: 1 }), tree.validate());
    }

    #[test]
    fn detects_black_height_mismatch() {
        let mut tree: Tree<u32> = [2, 1, 3].into_iter().collect();
        let one = tree.find(&1).unwrap();
        tree.nodes.set_color(one, Color::Black);
        let three = tree.find(&3).unwrap();
        tree.nodes.set_color(three, Color::Red);
        assert_eq!(
            Err(Violation::BlackHeight {
                depth: 0,
                left: 1,
                right: 0
            }),
            tree.validate()
        );
    }

    #[test]
    fn detects_unordered_keys() {
        let mut tree = Tree::new();
        tree.attach_unbalanced(2u32);
        tree.attach_unbalanced(1);
        let one = tree.find(&1).unwrap();
        tree.nodes[one].key = 3;
        assert_eq!(Err(Violation::OutOfOrder { position: 1 }), tree.validate());
    }

    #[test]
    fn detects_broken_parent() {
        let mut tree: Tree<u32> = [2, 1, 3].into_iter().collect();
        let one = tree.find(&1).unwrap();
        let three = tree.find(&3).unwrap();
        tree.nodes[one].parent = Some(three);
        assert_eq!(Err(Violation::BrokenParent { depth: 1 }), tree.validate());
    }

    #[test]
    fn messages() {
        assert_eq!("the root is red", Violation::RedRoot.to_string());
        assert_eq!(
            "tree records 3 keys but holds 2 nodes",
            Violation::Len {
                recorded: 3,
                counted: 2
            }
            .to_string()
        );
    }
}
