//! # Aggregate
//!
//! Every node of [`MaxSubarrayTree`] summarizes the range it covers with an [`Aggregate`].
//! Four numbers are enough to answer "what is the best non-empty subrange here?"
//! and to combine two adjacent ranges in *O*(1):
//!
//! ```text
//!            [ A ........... ][ B ........... ]
//!  prefix     |-------->        (or all of A, then B's prefix)
//!  suffix              (or A's suffix, then all of B)   <--------|
//!  best              |------- A.suffix + B.prefix -------|
//! ```
//!
//! Values are `i64`, but sums are kept as `i128`.
//! A tree holds at most `usize::MAX / 4` values, so no sum of them can overflow an `i128`.
//!
//! [`MaxSubarrayTree`]: crate::MaxSubarrayTree

/// Summary of a non-empty contiguous range of values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Aggregate {
    total: i128,
    prefix: i128,
    suffix: i128,
    best: i128,
}

impl Aggregate {
    /// Aggregate of a range holding the single `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use max_subarray_segment_tree::Aggregate;
    ///
    /// let leaf = Aggregate::leaf(-3);
    /// assert_eq!(leaf.total(), -3);
    /// assert_eq!(leaf.prefix(), -3);
    /// assert_eq!(leaf.suffix(), -3);
    /// assert_eq!(leaf.best(), -3);
    /// ```
    pub const fn leaf(value: i64) -> Self {
        let value = value as i128;
        Aggregate {
            total: value,
            prefix: value,
            suffix: value,
            best: value,
        }
    }

    /// Folds `values` from left to right. Returns `None` for an empty slice,
    /// since an empty range has no aggregate.
    ///
    /// # Examples
    ///
    /// ```
    /// use max_subarray_segment_tree::Aggregate;
    ///
    /// let agg = Aggregate::from_values(&[2, -5, 4, 1]).unwrap();
    /// assert_eq!(agg.total(), 2);
    /// assert_eq!(agg.best(), 5);
    ///
    /// assert_eq!(Aggregate::from_values(&[]), None);
    /// ```
    pub fn from_values(values: &[i64]) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let aggregate = rest
            .iter()
            .fold(Aggregate::leaf(*first), |acc, &value| {
                acc.merge(&Aggregate::leaf(value))
            });

        Some(aggregate)
    }

    /// Aggregate of `self`'s range immediately followed by `right`'s range.
    ///
    /// The ranges must be adjacent and in this order. Swapping the arguments describes
    /// a different concatenation and generally yields a different result.
    ///
    /// # Examples
    ///
    /// ```
    /// use max_subarray_segment_tree::Aggregate;
    ///
    /// let left = Aggregate::from_values(&[-1, 3]).unwrap();
    /// let right = Aggregate::from_values(&[2, -7]).unwrap();
    ///
    /// let merged = left.merge(&right);
    /// assert_eq!(merged, Aggregate::from_values(&[-1, 3, 2, -7]).unwrap());
    /// assert_eq!(merged.best(), 5);
    /// ```
    pub fn merge(&self, right: &Aggregate) -> Aggregate {
        let left = self;

        let total = left.total + right.total;
        let prefix = left.prefix.max(left.total + right.prefix);
        let suffix = right.suffix.max(right.total + left.suffix);
        let best = [right.best, prefix, suffix, left.suffix + right.prefix]
            .into_iter()
            .fold(left.best, i128::max);

        Aggregate {
            total,
            prefix,
            suffix,
            best,
        }
    }

    /// Sum of every value in the range.
    pub fn total(&self) -> i128 {
        self.total
    }

    /// Best sum of a non-empty prefix of the range.
    pub fn prefix(&self) -> i128 {
        self.prefix
    }

    /// Best sum of a non-empty suffix of the range.
    pub fn suffix(&self) -> i128 {
        self.suffix
    }

    /// Best sum of a non-empty contiguous subrange, i.e. the maximum subarray sum.
    pub fn best(&self) -> i128 {
        self.best
    }
}

impl From<i64> for Aggregate {
    fn from(value: i64) -> Self {
        Aggregate::leaf(value)
    }
}
