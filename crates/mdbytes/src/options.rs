/// Configuration for a [`BytesFilter`](crate::BytesFilter).
///
/// # Examples
///
/// ```rust
/// use mdbytes::{BytesFilter, FilterOptions};
///
/// let filter = BytesFilter::with_options(FilterOptions {
///     buckets: 16,
///     ..Default::default()
/// })?;
/// assert!(filter.is_empty());
/// # Ok::<(), mdbytes::FilterError>(())
/// ```
///
/// # Default
///
/// A prefix threshold of 3 and 64 buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(default))]
pub struct FilterOptions {
    /// How many leading bytes of each member are recorded in the per-byte
    /// mask.
    ///
    /// Lookups whose first bytes never appeared at those positions are
    /// rejected without hashing. Must not exceed 8, since the mask keeps one
    /// bit per position.
    ///
    /// # Default
    ///
    /// `3`
    pub prefix_threshold: usize,

    /// Number of hash buckets.
    ///
    /// # Default
    ///
    /// `64`
    pub buckets: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            prefix_threshold: 3,
            buckets: 64,
        }
    }
}
