//! # Internal operations
//!
//! All operations recurse from the root along [`NodeId`]s, so the recursion depth is *O*(log *n*).
//!
//! Internal nodes become dirty when a child is modified. ("DIRTY:" tag)
//! They need to be cleaned by merging their children again. ("CLEAN:" tag)

use crate::MaxSubarrayTree;
use crate::aggregate::Aggregate;
use crate::internal::node_id::NodeId;

// internal operations: node access
impl MaxSubarrayTree {
    pub(crate) fn root_id(&self) -> NodeId {
        NodeId::root(self.len())
    }

    pub(crate) fn get_node(&self, id: NodeId) -> &Aggregate {
        &self.nodes[id.node_index()]
    }

    /// DIRTY: ancestors of `id`, when you modify the value of the returned reference
    fn get_node_mut(&mut self, id: NodeId) -> &mut Aggregate {
        &mut self.nodes[id.node_index()]
    }

    /// Returns the leaf node for `position`.
    ///
    /// # Time complexity
    ///
    /// *O*(log [`len`])
    ///
    /// [`len`]: MaxSubarrayTree::len
    pub(crate) fn get_leaf_node(&self, position: usize) -> &Aggregate {
        debug_assert!(1 <= position && position <= self.len());

        let mut id = self.root_id();
        while !id.is_leaf() {
            let left = id.left_child();
            id = if left.covers(position) {
                left
            } else {
                id.right_child()
            };
        }

        self.get_node(id)
    }
}

// internal operations: build and update
impl MaxSubarrayTree {
    /// Fills `id` and all of its descendants from `values`, where `values[0]` is position 1.
    ///
    /// CLEAN: `id` and its descendants
    pub(crate) fn build_node(&mut self, id: NodeId, values: &[i64]) {
        // Unreachable from the root, since children of a non-leaf are never empty.
        if id.low() > id.high() {
            return;
        }

        if id.is_leaf() {
            *self.get_node_mut(id) = Aggregate::leaf(values[id.low() - 1]);
            return;
        }

        self.build_node(id.left_child(), values);
        self.build_node(id.right_child(), values);
        self.recalculate_node(id);
    }

    /// Replaces the leaf for `position` below `id`, then recalculates the path back up to `id`.
    ///
    /// # Time complexity
    ///
    /// *O*(log [`len`])
    ///
    /// [`len`]: MaxSubarrayTree::len
    ///
    /// CLEAN: `id` and the nodes between `id` and the leaf
    pub(crate) fn update_node(&mut self, id: NodeId, position: usize, value: i64) {
        debug_assert!(id.covers(position));

        if id.is_leaf() {
            *self.get_node_mut(id) = Aggregate::leaf(value); // DIRTY: ancestors of `id`
            return;
        }

        let left = id.left_child();
        if left.covers(position) {
            self.update_node(left, position, value);
        } else {
            self.update_node(id.right_child(), position, value);
        }

        self.recalculate_node(id);
    }

    /// Recalculate a node at `id` using its children.
    ///
    /// CLEAN: `id`
    fn recalculate_node(&mut self, id: NodeId) {
        debug_assert!(!id.is_leaf());

        let merged = self
            .get_node(id.left_child())
            .merge(self.get_node(id.right_child()));
        *self.get_node_mut(id) = merged;
    }
}

// internal operations: query
impl MaxSubarrayTree {
    /// Aggregates `[left, right]`, which must lie within the range of `id`.
    ///
    /// Nodes whose range equals the requested range are returned as they are.
    /// Otherwise, the range is clipped at the midpoint and partial results are merged in order.
    ///
    /// # Time complexity
    ///
    /// *O*(log [`len`])
    ///
    /// [`len`]: MaxSubarrayTree::len
    pub(crate) fn query_node(&self, id: NodeId, left: usize, right: usize) -> Aggregate {
        debug_assert!(id.low() <= left);
        debug_assert!(left <= right);
        debug_assert!(right <= id.high());

        if id.low() == left && id.high() == right {
            return *self.get_node(id);
        }

        let middle = id.middle();
        if right <= middle {
            self.query_node(id.left_child(), left, right)
        } else if left > middle {
            self.query_node(id.right_child(), left, right)
        } else {
            let left_part = self.query_node(id.left_child(), left, middle);
            let right_part = self.query_node(id.right_child(), middle + 1, right);
            left_part.merge(&right_part)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::node_id::get_nodes_len_for;

    fn tree_over(values: &[i64]) -> MaxSubarrayTree {
        MaxSubarrayTree::build(values).unwrap()
    }

    /// Counts nodes that are returned as a whole while answering `[left, right]`.
    fn count_full_matches(id: NodeId, left: usize, right: usize) -> usize {
        if id.low() == left && id.high() == right {
            return 1;
        }

        let middle = id.middle();
        if right <= middle {
            count_full_matches(id.left_child(), left, right)
        } else if left > middle {
            count_full_matches(id.right_child(), left, right)
        } else {
            count_full_matches(id.left_child(), left, middle)
                + count_full_matches(id.right_child(), middle + 1, right)
        }
    }

    #[test]
    fn test_build_fills_every_reachable_node() {
        fn check(tree: &MaxSubarrayTree, values: &[i64], id: NodeId) {
            let expected = Aggregate::from_values(&values[id.low() - 1..id.high()]).unwrap();
            assert_eq!(*tree.get_node(id), expected, "node {}", id.node_index());

            if !id.is_leaf() {
                check(tree, values, id.left_child());
                check(tree, values, id.right_child());
            }
        }

        let values = [3, -1, 4, -1, -5, 9, -2, 6, -5, 3, 5];
        for len in 1..=values.len() {
            let tree = tree_over(&values[..len]);
            assert_eq!(tree.nodes_len(), get_nodes_len_for(len));
            check(&tree, &values[..len], tree.root_id());
        }
    }

    #[test]
    fn test_build_node_ignores_empty_range() {
        let mut tree = tree_over(&[1, 2, 3]);
        let before = tree.nodes.clone();

        tree.build_node(NodeId::new(5, 3, 2), &[1, 2, 3]);
        assert_eq!(tree.nodes, before);
    }

    #[test]
    fn test_update_recalculates_path() {
        let mut tree = tree_over(&[1, -2, 3, -4, 5]);
        let root = tree.root_id();
        tree.update_node(root, 2, 10);

        assert_eq!(*tree.get_leaf_node(2), Aggregate::leaf(10));
        assert_eq!(
            *tree.get_node(root),
            Aggregate::from_values(&[1, 10, 3, -4, 5]).unwrap()
        );
    }

    #[test]
    fn test_get_leaf_node() {
        let values = [7, -3, 0, 12, -8, 5, 1];
        let tree = tree_over(&values);
        for (i, &value) in values.iter().enumerate() {
            assert_eq!(*tree.get_leaf_node(i + 1), Aggregate::leaf(value));
        }
    }

    #[test]
    fn test_query_node_decomposition_is_logarithmic() {
        for len in 1..=128usize {
            let root = NodeId::root(len);
            let bound = 2 * (usize::BITS - len.leading_zeros()) as usize;

            for left in 1..=len {
                for right in left..=len {
                    let count = count_full_matches(root, left, right);
                    assert!(count <= bound.max(1), "len = {len}, [{left}, {right}] took {count}");
                }
            }
        }
    }
}
