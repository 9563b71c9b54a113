use crate::internal::consts;

/// A node of the implicit tree, together with the inclusive range of positions it covers.
///
/// The range is carried along instead of being recomputed from `index`,
/// since the midpoint split of `[1, len]` depends on `len`.
#[derive(Copy, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq, Debug))]
pub(crate) struct NodeId {
    index: usize,
    low: usize,
    high: usize,
}

impl NodeId {
    #[cfg(test)]
    pub(crate) fn new(index: usize, low: usize, high: usize) -> Self {
        NodeId { index, low, high }
    }

    pub(crate) fn root(len: usize) -> Self {
        debug_assert!(len >= 1);
        debug_assert!(len <= consts::MAX_LEN);

        NodeId {
            index: 1,
            low: 1,
            high: len,
        }
    }

    pub(crate) fn node_index(&self) -> usize {
        self.index
    }

    pub(crate) fn low(&self) -> usize {
        self.low
    }

    pub(crate) fn high(&self) -> usize {
        self.high
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.low == self.high
    }

    pub(crate) fn covers(&self, position: usize) -> bool {
        self.low <= position && position <= self.high
    }

    /// The last position of the left child. `low <= middle < high` for non-leaf nodes.
    pub(crate) fn middle(&self) -> usize {
        self.low + (self.high - self.low) / 2
    }

    pub(crate) fn left_child(&self) -> NodeId {
        debug_assert!(!self.is_leaf());

        NodeId {
            index: self.index * 2,
            low: self.low,
            high: self.middle(),
        }
    }

    pub(crate) fn right_child(&self) -> NodeId {
        debug_assert!(!self.is_leaf());

        NodeId {
            index: self.index * 2 + 1,
            low: self.middle() + 1,
            high: self.high,
        }
    }
}

/// Gets the number of node slots required to store a tree over `len` elements.
///
/// The midpoint recursion over `[1, len]` never produces a node index of `4 * len` or more,
/// whatever the parity of `len`. Slot `0` is never used.
pub(crate) fn get_nodes_len_for(len: usize) -> usize {
    debug_assert!(len <= consts::MAX_LEN);

    len * 4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: usize, low: usize, high: usize) -> NodeId {
        NodeId::new(index, low, high)
    }

    #[test]
    fn test_childs() {
        let root = NodeId::root(5);
        assert_eq!(root, id(1, 1, 5));
        assert_eq!(root.middle(), 3);
        assert_eq!(root.left_child(), id(2, 1, 3));
        assert_eq!(root.right_child(), id(3, 4, 5));

        let node = id(2, 1, 3);
        assert_eq!(node.left_child(), id(4, 1, 2));
        assert_eq!(node.right_child(), id(5, 3, 3));

        let node = id(4, 1, 2);
        assert_eq!(node.left_child(), id(8, 1, 1));
        assert_eq!(node.right_child(), id(9, 2, 2));

        let node = id(3, 4, 5);
        assert_eq!(node.left_child(), id(6, 4, 4));
        assert_eq!(node.right_child(), id(7, 5, 5));
    }

    #[test]
    fn test_leaf_and_covers() {
        let leaf = id(9, 2, 2);
        assert!(leaf.is_leaf());
        assert!(leaf.covers(2));
        assert!(!leaf.covers(1));
        assert!(!leaf.covers(3));

        let node = id(3, 4, 8);
        assert!(!node.is_leaf());
        assert!(node.covers(4));
        assert!(node.covers(8));
        assert!(!node.covers(9));
    }

    #[test]
    fn test_children_tile_parent() {
        fn walk(node: NodeId) {
            if node.is_leaf() {
                return;
            }

            let left = node.left_child();
            let right = node.right_child();
            assert_eq!(left.low(), node.low());
            assert_eq!(left.high() + 1, right.low());
            assert_eq!(right.high(), node.high());
            assert!(left.low() <= left.high());
            assert!(right.low() <= right.high());

            walk(left);
            walk(right);
        }

        for len in 1..=64 {
            walk(NodeId::root(len));
        }
    }

    #[test]
    fn test_node_index_fits_in_nodes_len() {
        fn max_index(node: NodeId) -> usize {
            if node.is_leaf() {
                return node.node_index();
            }

            max_index(node.left_child()).max(max_index(node.right_child()))
        }

        for len in 1..=1000 {
            let max = max_index(NodeId::root(len));
            assert!(max < get_nodes_len_for(len), "len = {len}, max = {max}");
        }
    }
}
