use std::borrow::Borrow;

use log::trace;

use crate::Tree;

impl<K: Ord + Clone> Tree<K> {
    /// Tags every present key of `candidates` other than `winner` with
    /// `winner`, unless that key already carries a tag.
    ///
    /// Tags are write-once: the first claim on a key wins and later calls
    /// leave it alone. Candidates missing from the tree are skipped.
    ///
    /// ```
    /// use rbtag::Tree;
    ///
    /// let mut tree: Tree<u32> = (1..=7).collect();
    /// tree.set_payload(5, 1..=4);
    /// tree.set_payload(7, 4..=6);
    /// assert_eq!(Some(&5), tree.get_payload(&4));
    /// assert_eq!(Some(&7), tree.get_payload(&5));
    /// assert_eq!(None, tree.get_payload(&7));
    /// ```
    pub fn set_payload<I>(&mut self, winner: K, candidates: I)
    where
        I: IntoIterator<Item = K>,
    {
        let mut tagged = 0usize;
        for candidate in candidates {
            if candidate == winner {
                continue;
            }
            let Some(id) = self.find(&candidate) else {
                continue;
            };
            let payload = &mut self.nodes[id].payload;
            if payload.is_none() {
                *payload = Some(winner.clone());
                tagged += 1;
            }
        }
        trace!("set_payload tagged {tagged} keys");
    }
}

impl<K> Tree<K> {
    /// The tag of `key`, or `None` when the key is absent or untagged.
    pub fn get_payload<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).and_then(|id| self.nodes[id].payload.as_ref())
    }
}
