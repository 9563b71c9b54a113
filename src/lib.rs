//! [`MaxSubarrayTree`] is a Segment Tree that answers maximum subarray sum queries over any range.
//!
//! # Overview
//!
//! It works over a fixed-size array of integers with 1-based positions:
//! * *O*(*n*) to [`build`] the tree once.
//! * *O*(log *n*) to [`update`] an element in the tree.
//! * *O*(log *n*) to [`query`] the best sum of a non-empty contiguous subrange of `[left, right]`.
//!
//! Unlike a sum or minimum tree, a node can't just add up its children.
//! The best subrange of a node may lie in either child, or straddle the boundary between them.
//! So each node keeps an [`Aggregate`] of four values (`total`, `prefix`, `suffix`, `best`),
//! and two adjacent aggregates are merged in *O*(1). See [`Aggregate::merge`].
//!
//! [`build`]: MaxSubarrayTree::build
//! [`update`]: MaxSubarrayTree::update
//! [`query`]: MaxSubarrayTree::query
//!
//! # Encoding Layout
//!
//! Nodes are stored in a single [`Vec`] in the conventional prefix order,
//! which forms an implicit binary tree without child links.
//! The root is the node `1` and covers `[1, n]`.
//! The node `i` covering `[low, high]` has children `2 * i` and `2 * i + 1`,
//! covering `[low, middle]` and `[middle + 1, high]` where `middle = (low + high) / 2`.
//!
//! ```text
//!         n = 5
//!  node:  [              1              ]
//!         [       2       ] [     3     ]
//!         [   4   ] [  5  ] [  6  ] [ 7 ]
//!         [ 8 ] [ 9 ]
//!  pos:     1     2     3     4     5
//! ```
//!
//! Node indices never reach `4 * n`, whatever the parity of `n`, so `4 * n` slots are allocated.
//!
//! # Queries
//!
//! A query descends from the root. A node whose range is exactly the requested range
//! is used as it is. Otherwise the range is either passed down to the one child that contains it,
//! or clipped at `middle` and both partial results are merged from left to right.
//! There are at most *O*(log *n*) such nodes.
//!
//! # Errors
//!
//! Positions are checked before anything is touched.
//! Out-of-range positions and inverted ranges are reported as [`TreeError`], never clamped.
//!
//! # Concurrency
//!
//! [`query`] takes `&self` and [`update`] takes `&mut self`,
//! so a shared tree already follows a single-writer, multiple-reader discipline.
//! Wrap it in a [`RwLock`](std::sync::RwLock) when several threads need it.
mod aggregate;
pub mod driver;
mod error;
mod index;
mod internal;
mod iterator;

pub use crate::aggregate::Aggregate;
pub use crate::error::TreeError;
pub use crate::iterator::ElementIterator;

use crate::internal::consts;
use crate::internal::node_id::get_nodes_len_for;

/// A Segment Tree over `i64` values that answers maximum subarray sum queries as `i128`.
#[derive(Clone, Debug)]
pub struct MaxSubarrayTree {
    pub(crate) nodes: Vec<Aggregate>,
    pub(crate) len: usize,
}

// construction
impl MaxSubarrayTree {
    /// Builds a tree over `values`. `values[0]` becomes position 1.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use max_subarray_segment_tree::{MaxSubarrayTree, TreeError};
    ///
    /// let tree = MaxSubarrayTree::build(&[1, -2, 3, -4, 5]).unwrap();
    /// assert_eq!(tree.len(), 5);
    /// assert_eq!(tree.query(1, 5), Ok(5));
    ///
    /// assert_eq!(MaxSubarrayTree::build(&[]).unwrap_err(), TreeError::Empty);
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(`values.len()`)
    pub fn build(values: &[i64]) -> Result<Self, TreeError> {
        if values.is_empty() {
            return Err(TreeError::Empty);
        }
        debug_assert!(values.len() <= consts::MAX_LEN);

        let len = values.len();
        // unused slots keep a zero leaf
        let mut tree = MaxSubarrayTree {
            nodes: vec![Aggregate::leaf(0); get_nodes_len_for(len)],
            len,
        };
        let root = tree.root_id();
        tree.build_node(root, values); // CLEAN: all nodes reachable from the root

        log::debug!(
            "built max subarray tree over {} elements with {} node slots",
            len,
            tree.nodes_len()
        );
        Ok(tree)
    }

    /// Returns the total number of elements, which is the total number of leaf nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use max_subarray_segment_tree::MaxSubarrayTree;
    ///
    /// let tree = MaxSubarrayTree::build(&[4, 5, 6]).unwrap();
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of node slots, which is `4 * len`.
    pub fn nodes_len(&self) -> usize {
        self.nodes.len()
    }
}

// queries
impl MaxSubarrayTree {
    /// Returns the maximum sum of a non-empty contiguous subrange of `[left, right]`.
    ///
    /// A range of negative values yields its largest value, never 0.
    /// The sum is an `i128`, so it can't overflow even when the values are close to `i64` bounds.
    ///
    /// # Errors
    ///
    /// * [`TreeError::BoundOutOfRange`] if `left` or `right` is outside `[1, len]`.
    /// * [`TreeError::InvertedRange`] if `left > right`.
    ///
    /// # Examples
    ///
    /// ```
    /// use max_subarray_segment_tree::{MaxSubarrayTree, TreeError};
    ///
    /// let tree = MaxSubarrayTree::build(&[-3, 4, -1, 2, -8, -2]).unwrap();
    /// assert_eq!(tree.query(1, 6), Ok(5));
    /// assert_eq!(tree.query(3, 4), Ok(2));
    /// assert_eq!(tree.query(5, 6), Ok(-2));
    ///
    /// assert_eq!(tree.query(0, 3), Err(TreeError::BoundOutOfRange { bound: 0, len: 6 }));
    /// assert_eq!(tree.query(4, 2), Err(TreeError::InvertedRange { left: 4, right: 2 }));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log [`len`])
    ///
    /// [`len`]: MaxSubarrayTree::len
    pub fn query(&self, left: usize, right: usize) -> Result<i128, TreeError> {
        self.query_aggregate(left, right)
            .map(|aggregate| aggregate.best())
    }

    /// Returns the whole [`Aggregate`] of `[left, right]`.
    ///
    /// Fails the same way as [`query`](MaxSubarrayTree::query).
    ///
    /// # Examples
    ///
    /// ```
    /// use max_subarray_segment_tree::MaxSubarrayTree;
    ///
    /// let tree = MaxSubarrayTree::build(&[2, -1, 3, -6]).unwrap();
    /// let aggregate = tree.query_aggregate(1, 4).unwrap();
    /// assert_eq!(aggregate.total(), -2);
    /// assert_eq!(aggregate.prefix(), 4);
    /// assert_eq!(aggregate.suffix(), -2);
    /// assert_eq!(aggregate.best(), 4);
    /// ```
    pub fn query_aggregate(&self, left: usize, right: usize) -> Result<Aggregate, TreeError> {
        self.check_bound(left)?;
        self.check_bound(right)?;
        if left > right {
            return Err(TreeError::InvertedRange { left, right });
        }

        let aggregate = self.query_node(self.root_id(), left, right);
        log::trace!("query [{}, {}] -> {}", left, right, aggregate.best());
        Ok(aggregate)
    }

    /// Returns the [`Aggregate`] of the whole array. It is the root node.
    ///
    /// # Time complexity
    ///
    /// *O*(1)
    pub fn summary(&self) -> &Aggregate {
        self.get_node(self.root_id())
    }

    fn check_bound(&self, bound: usize) -> Result<(), TreeError> {
        if bound == 0 || bound > self.len() {
            return Err(TreeError::BoundOutOfRange {
                bound,
                len: self.len(),
            });
        }

        Ok(())
    }
}

// update operations
impl MaxSubarrayTree {
    /// Analogous to `elements[position] = value`
    ///
    /// ```
    /// use max_subarray_segment_tree::{MaxSubarrayTree, TreeError};
    ///
    /// let mut tree = MaxSubarrayTree::build(&[1, -2, 3, -4, 5]).unwrap();
    /// tree.update(2, 10).unwrap();
    ///
    /// // elements are updated
    /// assert_eq!(tree.get(2), Some(10));
    ///
    /// // aggregates are also updated
    /// assert_eq!(tree.query(1, 3), Ok(14));
    /// assert_eq!(tree.query(1, 5), Ok(15));
    ///
    /// assert_eq!(
    ///     tree.update(6, 0),
    ///     Err(TreeError::PositionOutOfRange { position: 6, len: 5 })
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// [`TreeError::PositionOutOfRange`] if `position` is outside `[1, len]`. The tree is untouched.
    ///
    /// # Time complexity
    ///
    /// *O*(log [`len`])
    ///
    /// [`len`]: MaxSubarrayTree::len
    pub fn update(&mut self, position: usize, value: i64) -> Result<(), TreeError> {
        if position == 0 || position > self.len() {
            return Err(TreeError::PositionOutOfRange {
                position,
                len: self.len(),
            });
        }

        let root = self.root_id();
        self.update_node(root, position, value); // CLEAN: path from `position` to the root

        log::trace!("update {} <- {}", position, value);
        Ok(())
    }
}
