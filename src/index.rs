use crate::MaxSubarrayTree;

impl MaxSubarrayTree {
    /// Returns the element at `position`, or `None` if it is outside `[1, len]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use max_subarray_segment_tree::MaxSubarrayTree;
    ///
    /// let tree = MaxSubarrayTree::build(&[1, 2, i64::MIN]).unwrap();
    /// assert_eq!(tree.get(2), Some(2));
    /// assert_eq!(tree.get(3), Some(i64::MIN));
    /// assert_eq!(tree.get(0), None);
    /// assert_eq!(tree.get(4), None);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// *O*(log [`len`])
    ///
    /// [`len`]: MaxSubarrayTree::len
    pub fn get(&self, position: usize) -> Option<i64> {
        if position == 0 || position > self.len() {
            return None;
        }

        // a leaf's total is the `i64` it was built from
        i64::try_from(self.get_leaf_node(position).total()).ok()
    }
}
