use std::iter::FusedIterator;

use crate::MaxSubarrayTree;

impl MaxSubarrayTree {
    /// Returns an [`ElementIterator`], which is an iterator for elements on this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use max_subarray_segment_tree::MaxSubarrayTree;
    ///
    /// let mut tree = MaxSubarrayTree::build(&[1, 2, 3]).unwrap();
    /// tree.update(3, -3).unwrap();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2, -3]);
    /// assert_eq!(tree.iter().rev().collect::<Vec<_>>(), vec![-3, 2, 1]);
    /// ```
    pub fn iter(&self) -> ElementIterator<'_> {
        ElementIterator::new(self, 1, self.len() + 1)
    }
}

/// Iterator for elements on [`MaxSubarrayTree`], in position order.
///
/// Each step descends to a leaf, so it takes *O*(log *n*).
pub struct ElementIterator<'a> {
    tree: &'a MaxSubarrayTree,
    position: usize,
    end: usize,
}

impl<'a> ElementIterator<'a> {
    pub(crate) fn new(tree: &'a MaxSubarrayTree, position: usize, end: usize) -> Self {
        debug_assert!(position <= end);

        ElementIterator {
            tree,
            position,
            end,
        }
    }
}

impl Iterator for ElementIterator<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.end {
            return None;
        }

        let value = self.tree.get(self.position);
        self.position += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.position;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.end - self.position {
            self.position = self.end;
            return None;
        }

        self.position += n;
        self.next()
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl FusedIterator for ElementIterator<'_> {}

impl ExactSizeIterator for ElementIterator<'_> {}

impl DoubleEndedIterator for ElementIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.position >= self.end {
            return None;
        }

        self.end -= 1;
        self.tree.get(self.end)
    }
}

impl<'a> IntoIterator for &'a MaxSubarrayTree {
    type Item = i64;
    type IntoIter = ElementIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
