//! Set membership for short byte strings such as HTML tag names.
//!
//! A [`BytesFilter`] answers most misses without hashing: for each of the
//! first `prefix_threshold` positions it records which byte values any member
//! has there. A lookup whose leading bytes fail that mask is rejected
//! immediately, and the rest are confirmed by exact comparison inside a djb2
//! hash bucket.
use std::sync::Arc;

use tracing::instrument;

use crate::{FilterError, FilterOptions};

/// The mask keeps one bit per prefix position in a `u8`.
const MAX_PREFIX_THRESHOLD: usize = u8::BITS as usize;

const DJB2_SEED: u64 = 5381;

/// A grow-only set of byte strings with a cheap negative path.
///
/// Adding requires `&mut self`, so a filter shared between threads through `&`
/// or an `Arc` is read-only. To give one consumer extra members without
/// affecting others, derive a private copy with [`BytesFilter::extend`].
///
/// ```rust
/// use mdbytes::BytesFilter;
///
/// let base: BytesFilter = [&b"div"[..], b"pre", b"script"].into_iter().collect();
/// let extended = base.extend([&b"textarea"[..]]);
///
/// assert!(base.contains(b"pre"));
/// assert!(!base.contains(b"textarea"));
/// assert!(extended.contains(b"textarea"));
/// ```
#[derive(Debug, Clone)]
pub struct BytesFilter {
    chars: [u8; 256],
    options: FilterOptions,
    buckets: Vec<Vec<Arc<[u8]>>>,
    len: usize,
}

impl BytesFilter {
    /// Creates an empty filter with the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::build(FilterOptions::default())
    }

    /// Creates an empty filter with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ZeroBuckets`] when `buckets` is zero and
    /// [`FilterError::PrefixThresholdTooLarge`] when `prefix_threshold` is
    /// larger than 8.
    pub fn with_options(options: FilterOptions) -> Result<Self, FilterError> {
        if options.buckets == 0 {
            return Err(FilterError::ZeroBuckets);
        }
        if options.prefix_threshold > MAX_PREFIX_THRESHOLD {
            return Err(FilterError::PrefixThresholdTooLarge {
                threshold: options.prefix_threshold,
                max: MAX_PREFIX_THRESHOLD,
            });
        }
        Ok(Self::build(options))
    }

    fn build(options: FilterOptions) -> Self {
        tracing::trace!(
            buckets = options.buckets,
            prefix_threshold = options.prefix_threshold,
            "created bytes filter"
        );
        Self {
            chars: [0; 256],
            options,
            buckets: vec![Vec::new(); options.buckets],
            len: 0,
        }
    }

    /// Adds `b` to the set.
    ///
    /// Adding a value that is already present stores it again; membership is
    /// unaffected.
    pub fn add(&mut self, b: &[u8]) {
        for (i, &c) in b.iter().take(self.options.prefix_threshold).enumerate() {
            self.chars[usize::from(c)] |= 1 << i;
        }
        let bucket = self.bucket_of(b);
        self.buckets[bucket].push(Arc::from(b));
        self.len += 1;
    }

    /// Returns `true` if `b` was added to this filter or the filter it was
    /// extended from.
    #[must_use]
    pub fn contains(&self, b: &[u8]) -> bool {
        let masked_out = b
            .iter()
            .take(self.options.prefix_threshold)
            .enumerate()
            .any(|(i, &c)| self.chars[usize::from(c)] & (1 << i) == 0);
        if masked_out {
            return false;
        }
        self.buckets[self.bucket_of(b)]
            .iter()
            .any(|member| **member == *b)
    }

    /// Returns a new filter holding this filter's members plus `bs`.
    ///
    /// `self` is left unchanged, and adds to the returned filter never show up
    /// in `self`.
    #[must_use]
    #[instrument(level = "trace", skip_all, fields(members = self.len))]
    pub fn extend<'b>(&self, bs: impl IntoIterator<Item = &'b [u8]>) -> Self {
        let mut derived = self.clone();
        for b in bs {
            derived.add(b);
        }
        tracing::trace!(added = derived.len - self.len, "derived bytes filter");
        derived
    }

    /// Number of values added, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The options this filter was built with.
    #[must_use]
    pub fn options(&self) -> FilterOptions {
        self.options
    }

    // The modulus is a `usize`, so the remainder fits.
    #[allow(clippy::cast_possible_truncation)]
    fn bucket_of(&self, b: &[u8]) -> usize {
        (djb2(b) % self.buckets.len() as u64) as usize
    }
}

impl Default for BytesFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl<'b> FromIterator<&'b [u8]> for BytesFilter {
    fn from_iter<I: IntoIterator<Item = &'b [u8]>>(iter: I) -> Self {
        let mut filter = Self::new();
        for b in iter {
            filter.add(b);
        }
        filter
    }
}

/// djb2: `h = h * 33 + byte`, seeded with 5381.
fn djb2(b: &[u8]) -> u64 {
    b.iter().fold(DJB2_SEED, |h, &c| {
        (h << 5).wrapping_add(h).wrapping_add(u64::from(c))
    })
}
