use thiserror::Error;

/// Contract violations reported by [`MaxSubarrayTree`](crate::MaxSubarrayTree).
///
/// Positions are 1-based. Nothing is clamped: a failing call leaves the tree untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("cannot build a tree over an empty array")]
    Empty,
    #[error("update position {position} is out of range 1..={len}")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("query bound {bound} is out of range 1..={len}")]
    BoundOutOfRange { bound: usize, len: usize },
    #[error("query range [{left}, {right}] is inverted")]
    InvertedRange { left: usize, right: usize },
}
