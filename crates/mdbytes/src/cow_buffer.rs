//! Copy-on-write byte accumulator shared by every transform in this crate.
//!
//! A [`CowBuffer`] starts as a borrowed view over the input and becomes an
//! owned `Vec<u8>` the first time a transform needs output that differs from
//! that input. Until then no allocation happens, and the transform can hand
//! the caller its own slice back through [`CowBuffer::into_cow`].
//!
//! Two mutation families exist because scanners use them differently:
//!
//! - `write`/`write_byte` start the owned buffer *empty*. A scanner that keeps
//!   a "last flushed" cursor re-emits the untouched span itself before the
//!   substitution, so copying the whole input up front would duplicate it.
//! - `append`/`append_byte` start the owned buffer with a copy of the current
//!   content, for callers that build incrementally and never re-emit.
//!
//! Invariants
//! - `Borrowed` content is byte-identical to the input view.
//! - The only transition is `Borrowed` to `Owned`; it never goes back.
use std::{borrow::Cow, fmt};

use bstr::BStr;

/// Extra capacity reserved on materialization, so a handful of short
/// substitutions fit without regrowing.
const SLACK: usize = 20;

/// A byte buffer that borrows its source until the first mutation.
///
/// ```rust
/// use mdbytes::CowBuffer;
///
/// let source = b"a<b";
/// let mut buf = CowBuffer::new(source);
/// assert!(!buf.is_copied());
///
/// buf.write(&source[..1]);
/// buf.write(b"&lt;");
/// buf.write(&source[2..]);
/// assert!(buf.is_copied());
/// assert_eq!(buf.bytes(), b"a&lt;b");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum CowBuffer<'a> {
    /// Untouched view over the input.
    Borrowed(&'a [u8]),
    /// Materialized, growable copy.
    Owned(Vec<u8>),
}

impl<'a> CowBuffer<'a> {
    /// Creates a buffer that borrows `source`.
    #[must_use]
    pub fn new(source: &'a [u8]) -> Self {
        CowBuffer::Borrowed(source)
    }

    /// Writes `value` to the buffer.
    ///
    /// On the first mutation the borrowed content is discarded and a fresh
    /// empty buffer is allocated.
    pub fn write(&mut self, value: &[u8]) {
        self.owned_empty().extend_from_slice(value);
    }

    /// Writes a single byte; see [`CowBuffer::write`].
    pub fn write_byte(&mut self, c: u8) {
        self.owned_empty().push(c);
    }

    /// Appends `value` to the buffer.
    ///
    /// On the first mutation the borrowed content is copied into the owned
    /// buffer before appending.
    pub fn append(&mut self, value: &[u8]) {
        self.owned_copy().extend_from_slice(value);
    }

    /// Appends a single byte; see [`CowBuffer::append`].
    pub fn append_byte(&mut self, c: u8) {
        self.owned_copy().push(c);
    }

    /// Returns `true` once the buffer has diverged from its source.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        matches!(self, CowBuffer::Owned(_))
    }

    /// Current content, either the source view or the owned copy.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        match self {
            CowBuffer::Borrowed(b) => b,
            CowBuffer::Owned(v) => v,
        }
    }

    /// Length of the current content.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    /// Whether the current content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }

    /// Consumes the buffer, keeping the borrow when nothing was written.
    #[must_use]
    pub fn into_cow(self) -> Cow<'a, [u8]> {
        match self {
            CowBuffer::Borrowed(b) => Cow::Borrowed(b),
            CowBuffer::Owned(v) => Cow::Owned(v),
        }
    }

    /// Consumes the buffer into an owned vector, copying if still borrowed.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            CowBuffer::Borrowed(b) => b.to_vec(),
            CowBuffer::Owned(v) => v,
        }
    }

    fn owned_empty(&mut self) -> &mut Vec<u8> {
        if let CowBuffer::Borrowed(b) = *self {
            *self = CowBuffer::Owned(Vec::with_capacity(b.len() + SLACK));
        }
        match self {
            CowBuffer::Owned(v) => v,
            CowBuffer::Borrowed(_) => unreachable!(),
        }
    }

    fn owned_copy(&mut self) -> &mut Vec<u8> {
        if let CowBuffer::Borrowed(b) = *self {
            let mut out = Vec::with_capacity(b.len() + SLACK);
            out.extend_from_slice(b);
            *self = CowBuffer::Owned(out);
        }
        match self {
            CowBuffer::Owned(v) => v,
            CowBuffer::Borrowed(_) => unreachable!(),
        }
    }
}

/// Runs `f` over the result of a previous transform, keeping the original
/// borrow when neither step copied.
pub(crate) fn pipe<'a>(
    input: Cow<'a, [u8]>,
    f: for<'b> fn(&'b [u8]) -> Cow<'b, [u8]>,
) -> Cow<'a, [u8]> {
    match input {
        Cow::Borrowed(b) => f(b),
        Cow::Owned(owned) => {
            let changed = match f(&owned) {
                Cow::Owned(v) => Some(v),
                Cow::Borrowed(_) => None,
            };
            Cow::Owned(changed.unwrap_or(owned))
        }
    }
}

impl fmt::Debug for CowBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (tag, bytes) = match self {
            CowBuffer::Borrowed(b) => ("Borrowed", *b),
            CowBuffer::Owned(v) => ("Owned", v.as_slice()),
        };
        f.debug_tuple(tag).field(&BStr::new(bytes)).finish()
    }
}

impl AsRef<[u8]> for CowBuffer<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::CowBuffer;

    #[test]
    fn untouched_buffer_stays_borrowed() {
        let src = b"hello";
        let buf = CowBuffer::new(src);
        assert!(!buf.is_copied());
        assert_eq!(buf.bytes(), b"hello");
        match buf.into_cow() {
            Cow::Borrowed(b) => assert!(std::ptr::eq(b, src.as_slice())),
            Cow::Owned(_) => panic!("expected borrowed"),
        }
    }

    #[test]
    fn write_discards_borrowed_content() {
        let mut buf = CowBuffer::new(b"hello");
        buf.write(b"he");
        assert!(buf.is_copied());
        assert_eq!(buf.bytes(), b"he");
        buf.write_byte(b'y');
        assert_eq!(buf.bytes(), b"hey");
    }

    #[test]
    fn append_keeps_borrowed_content() {
        let mut buf = CowBuffer::new(b"hello");
        buf.append(b", world");
        assert_eq!(buf.bytes(), b"hello, world");
        buf.append_byte(b'!');
        assert_eq!(buf.bytes(), b"hello, world!");
    }

    #[test]
    fn write_after_append_does_not_reset() {
        // The owned state is sticky: a later `write` appends rather than
        // starting over.
        let mut buf = CowBuffer::new(b"ab");
        buf.append_byte(b'c');
        buf.write(b"d");
        assert_eq!(buf.bytes(), b"abcd");
    }

    #[test]
    fn materialized_capacity_includes_slack() {
        let mut buf = CowBuffer::new(b"0123456789");
        buf.write_byte(b'x');
        match &buf {
            CowBuffer::Owned(v) => assert!(v.capacity() >= 30),
            CowBuffer::Borrowed(_) => panic!("expected owned"),
        }
    }

    #[test]
    fn empty_write_still_materializes() {
        let mut buf = CowBuffer::new(b"abc");
        buf.write(b"");
        assert!(buf.is_copied());
        assert!(buf.is_empty());
        assert_eq!(buf.into_bytes(), b"");
    }

    #[test]
    fn debug_shows_bytes_as_text() {
        let buf = CowBuffer::new(b"a<b");
        assert_eq!(format!("{buf:?}"), r#"Borrowed("a<b")"#);
    }
}
