//! Small scanning helpers shared by the transforms and by callers that slice
//! markup lines.
use std::{borrow::Cow, ops::Range};

use crate::{
    byte_class::{is_punct, is_space},
    cow_buffer::CowBuffer,
};

/// Bytes removed by the `trim_*_space` family: `\t \n \v \f \r` and space.
///
/// This is wider than [`is_space`], which does not treat `\v` and `\f` as
/// spaces.
pub const TRIM_SPACES: &[u8] = b" \t\n\x0b\x0c\r";

/// Advances through `source[range]` while `pred` holds.
///
/// Returns the index of the first byte that failed `pred` (or `range.end`),
/// and whether at least one byte matched.
#[must_use]
pub fn read_while(source: &[u8], range: Range<usize>, pred: impl Fn(u8) -> bool) -> (usize, bool) {
    let end = range.end.min(source.len());
    let start = range.start.min(end);
    let stop = source[start..end]
        .iter()
        .position(|&c| !pred(c))
        .map_or(end, |off| start + off);
    (stop, stop > start)
}

/// Returns `true` if the byte at `i` is a backslash followed by ASCII
/// punctuation.
#[must_use]
pub fn is_escaped_punctuation(source: &[u8], i: usize) -> bool {
    source.get(i) == Some(&b'\\') && source.get(i + 1).is_some_and(|&c| is_punct(c))
}

/// Returns `true` if every byte is a space (including the empty slice).
#[must_use]
pub fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| is_space(b))
}

/// Strips leading bytes contained in `set`.
#[must_use]
pub fn trim_left<'a>(source: &'a [u8], set: &[u8]) -> &'a [u8] {
    let start = source
        .iter()
        .position(|c| !set.contains(c))
        .unwrap_or(source.len());
    &source[start..]
}

/// Strips trailing bytes contained in `set`.
#[must_use]
pub fn trim_right<'a>(source: &'a [u8], set: &[u8]) -> &'a [u8] {
    let end = source
        .iter()
        .rposition(|c| !set.contains(c))
        .map_or(0, |i| i + 1);
    &source[..end]
}

/// Strips leading [`TRIM_SPACES`].
#[must_use]
pub fn trim_left_space(source: &[u8]) -> &[u8] {
    trim_left(source, TRIM_SPACES)
}

/// Strips trailing [`TRIM_SPACES`].
#[must_use]
pub fn trim_right_space(source: &[u8]) -> &[u8] {
    trim_right(source, TRIM_SPACES)
}

/// Number of leading bytes for which [`is_space`] holds.
#[must_use]
pub fn trim_left_space_length(source: &[u8]) -> usize {
    source.iter().take_while(|&&c| is_space(c)).count()
}

/// Number of trailing bytes for which [`is_space`] holds.
#[must_use]
pub fn trim_right_space_length(source: &[u8]) -> usize {
    source.iter().rev().take_while(|&&c| is_space(c)).count()
}

/// Collapses every maximal run of [`is_space`] bytes into a single `repl`.
///
/// Returns the input borrowed when every run is already a lone `repl`.
#[must_use]
pub fn replace_spaces(source: &[u8], repl: u8) -> Cow<'_, [u8]> {
    let mut cob = CowBuffer::new(source);
    let mut n = 0;
    let mut i = 0;
    while i < source.len() {
        if !is_space(source[i]) {
            i += 1;
            continue;
        }
        let (stop, _) = read_while(source, i..source.len(), is_space);
        if stop - i > 1 || source[i] != repl {
            cob.write(&source[n..i]);
            cob.write_byte(repl);
            n = stop;
        }
        i = stop;
    }
    if cob.is_copied() {
        cob.write(&source[n..]);
    }
    cob.into_cow()
}

/// Decodes the rune that covers byte `pos`, walking back to its leading byte.
///
/// Returns U+FFFD when the bytes there are not valid UTF-8.
#[must_use]
pub fn to_rune(source: &[u8], pos: usize) -> char {
    if pos >= source.len() {
        return char::REPLACEMENT_CHARACTER;
    }
    // A UTF-8 sequence is at most four bytes, so the lead is within three
    // bytes back.
    let floor = pos.saturating_sub(3);
    let start = (floor..=pos)
        .rev()
        .find(|&i| !is_continuation(source[i]))
        .unwrap_or(pos);
    let (decoded, _) = bstr::decode_utf8(&source[start..]);
    decoded.unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Maps a code point to a `char`, substituting U+FFFD for zero, surrogates and
/// values past U+10FFFF.
#[must_use]
pub fn to_valid_rune(v: u32) -> char {
    if v == 0 {
        return char::REPLACEMENT_CHARACTER;
    }
    char::from_u32(v).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Renders invisible characters as bracketed names, for diagnostics and test
/// output.
#[must_use]
pub fn visualize_spaces(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        let name: &[u8] = match c {
            b' ' => b"[SPACE]",
            b'\t' => b"[TAB]",
            b'\n' => b"[NEWLINE]\n",
            b'\r' => b"[CR]",
            0x0b => b"[VTAB]",
            0x00 => b"[NUL]",
            0xEF if bytes[i..].starts_with("\u{FFFD}".as_bytes()) => {
                i += 3;
                out.extend_from_slice(b"[U+FFFD]");
                continue;
            }
            _ => {
                out.push(c);
                i += 1;
                continue;
            }
        };
        out.extend_from_slice(name);
        i += 1;
    }
    out
}

#[inline]
pub(crate) fn is_continuation(c: u8) -> bool {
    c & 0xC0 == 0x80
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use rstest::rstest;

    use super::*;

    #[test]
    fn read_while_reports_stop_and_match() {
        assert_eq!(read_while(b"123abc", 0..6, |c| c.is_ascii_digit()), (3, true));
        assert_eq!(read_while(b"abc", 0..3, |c| c.is_ascii_digit()), (0, false));
        assert_eq!(read_while(b"12", 0..2, |c| c.is_ascii_digit()), (2, true));
        // Range end past the slice is clamped.
        assert_eq!(read_while(b"12", 1..10, |c| c.is_ascii_digit()), (2, true));
    }

    #[test]
    fn escaped_punctuation() {
        assert!(is_escaped_punctuation(br"a\*", 1));
        assert!(!is_escaped_punctuation(br"a\b", 1));
        assert!(!is_escaped_punctuation(br"a\", 1));
        assert!(!is_escaped_punctuation(b"", 0));
    }

    #[test]
    fn blank_lines() {
        assert!(is_blank(b""));
        assert!(is_blank(b" \t\r\n"));
        assert!(!is_blank(b"  x"));
        // Vertical tab is not a space for classification purposes.
        assert!(!is_blank(b"\x0b"));
    }

    #[rstest]
    #[case(b"  abc  ", b"abc  ", b"  abc")]
    #[case(b"\x0b\x0cabc\x0c", b"abc\x0c", b"\x0b\x0cabc")]
    #[case(b"   ", b"", b"")]
    #[case(b"", b"", b"")]
    fn trims(#[case] input: &[u8], #[case] left: &[u8], #[case] right: &[u8]) {
        assert_eq!(trim_left_space(input), left);
        assert_eq!(trim_right_space(input), right);
    }

    #[test]
    fn trim_with_custom_set() {
        assert_eq!(trim_left(b"--x--", b"-"), b"x--");
        assert_eq!(trim_right(b"--x--", b"-"), b"--x");
    }

    #[test]
    fn trim_lengths() {
        assert_eq!(trim_left_space_length(b"  \tx "), 3);
        assert_eq!(trim_right_space_length(b"x \n"), 2);
        assert_eq!(trim_right_space_length(b"   "), 3);
        assert_eq!(trim_left_space_length(b""), 0);
    }

    #[quickcheck_macros::quickcheck]
    #[allow(clippy::needless_pass_by_value)]
    fn trimming_twice_changes_nothing(v: Vec<u8>) -> bool {
        let once = trim_right_space(trim_left_space(&v));
        trim_right_space(trim_left_space(once)) == once
    }

    #[quickcheck_macros::quickcheck]
    #[allow(clippy::needless_pass_by_value)]
    fn collapsed_spaces_never_repeat(v: Vec<u8>) -> bool {
        let out = replace_spaces(&v, b' ');
        !out.windows(2).any(|w| is_space(w[0]) && is_space(w[1]))
    }

    #[test]
    fn replace_spaces_collapses_runs() {
        assert_eq!(&*replace_spaces(b"a  \t b\n\nc", b' '), b"a b c");
        assert_eq!(&*replace_spaces(b"a\tb", b' '), b"a b");
        assert_eq!(&*replace_spaces(b"  a  ", b'_'), b"_a_");
    }

    #[test]
    fn replace_spaces_borrows_when_already_collapsed() {
        assert!(matches!(replace_spaces(b"a b c", b' '), Cow::Borrowed(_)));
        assert!(matches!(replace_spaces(b"abc", b' '), Cow::Borrowed(_)));
    }

    #[test]
    fn to_rune_walks_back_to_the_lead() {
        let s = "a☃b".as_bytes();
        assert_eq!(to_rune(s, 0), 'a');
        assert_eq!(to_rune(s, 1), '☃');
        assert_eq!(to_rune(s, 2), '☃');
        assert_eq!(to_rune(s, 3), '☃');
        assert_eq!(to_rune(s, 4), 'b');
        assert_eq!(to_rune(s, 9), char::REPLACEMENT_CHARACTER);
        assert_eq!(to_rune(b"\x80", 0), char::REPLACEMENT_CHARACTER);
    }

    #[rstest]
    #[case(0, '\u{FFFD}')]
    #[case(0x41, 'A')]
    #[case(0xD800, '\u{FFFD}')]
    #[case(0x11_0000, '\u{FFFD}')]
    #[case(0x2603, '☃')]
    fn valid_runes(#[case] v: u32, #[case] expected: char) {
        assert_eq!(to_valid_rune(v), expected);
    }

    #[test]
    fn visualize() {
        let out = visualize_spaces("a b\t\n\r\x0b\0\u{FFFD}".as_bytes());
        assert_eq!(
            out,
            b"a[SPACE]b[TAB][NEWLINE]\n[CR][VTAB][NUL][U+FFFD]".as_slice()
        );
    }
}
