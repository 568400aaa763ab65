use thiserror::Error;

/// Errors recognized by the classification core.
///
/// An empty classification result is not an error: a read whose k-mer is
/// absent from the index (splice junction, sequencing noise, unindexed
/// region) classifies to the empty set, which callers must treat as data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SprigError {
    /// A sequence shorter than k has no k-mer windows; it is rejected up
    /// front rather than truncated or silently skipped.
    #[error("{what} length {len} is shorter than k = {k}")]
    InvalidInput {
        what: &'static str,
        len: usize,
        k: usize,
    },
}
