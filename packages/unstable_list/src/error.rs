use thiserror::Error;

/// An index did not refer to a live item of an [`UnstableList`][crate::UnstableList].
///
/// Returned by operations that address the list by position when the position is past the
/// end of the list. The list is left unchanged when this error is returned.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("index {index} is out of range for list of length {len}")]
#[non_exhaustive]
pub struct IndexOutOfRange {
    /// The index that the caller provided.
    pub index: usize,

    /// The length of the list (or destination) at the time of the call.
    pub len: usize,
}

impl IndexOutOfRange {
    pub(crate) fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }
}

/// A specialized `Result` type for list operations, returning the crate's
/// [`IndexOutOfRange`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, IndexOutOfRange>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(IndexOutOfRange: Send, Sync, Debug, Copy);

    #[test]
    fn message_names_index_and_length() {
        let error = IndexOutOfRange::new(7, 3);

        assert_eq!(
            error.to_string(),
            "index 7 is out of range for list of length 3"
        );
    }
}
