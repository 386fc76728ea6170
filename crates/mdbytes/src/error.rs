use thiserror::Error;

/// Rejected [`FilterOptions`](crate::FilterOptions).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// `buckets` was zero.
    #[error("a bytes filter needs at least one bucket")]
    ZeroBuckets,
    /// `prefix_threshold` exceeded the width of the per-byte mask.
    #[error("prefix threshold {threshold} exceeds the maximum of {max}")]
    PrefixThresholdTooLarge {
        /// The requested threshold.
        threshold: usize,
        /// The largest threshold the mask can represent.
        max: usize,
    },
}
