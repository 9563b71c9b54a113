pub(crate) mod node_id;
pub(crate) mod operations;

pub(crate) mod consts {
    /// Largest supported element count, so that `4 * len` node slots never overflow.
    pub const MAX_LEN: usize = usize::MAX / 4;
}
