//! Unicode case folding and link reference normalization.
use std::{borrow::Cow, iter};

use bstr::BString;
use caseless::Caseless;

use crate::{
    cow_buffer::CowBuffer,
    scan::{is_continuation, replace_spaces, trim_left_space, trim_right_space},
};

/// Applies Unicode full case folding to `v`.
///
/// ASCII letters are lowered in place. Other code points go through the
/// full folding table, so one character may become several (`ß` becomes
/// `ss`). Bytes that do not decode as UTF-8 are copied unchanged.
///
/// ```rust
/// assert_eq!(&*mdbytes::do_full_unicode_case_folding("Straße".as_bytes()), b"strasse");
/// ```
#[must_use]
pub fn do_full_unicode_case_folding(v: &[u8]) -> Cow<'_, [u8]> {
    let mut cob = CowBuffer::new(v);
    let mut n = 0;
    let mut i = 0;
    while i < v.len() {
        let c = v[i];
        if c.is_ascii() {
            if c.is_ascii_uppercase() {
                cob.write(&v[n..i]);
                cob.write_byte(c.to_ascii_lowercase());
                n = i + 1;
            }
            i += 1;
            continue;
        }
        if is_continuation(c) {
            i += 1;
            continue;
        }
        let (decoded, size) = bstr::decode_utf8(&v[i..]);
        let size = size.max(1);
        let Some(ch) = decoded else {
            i += size;
            continue;
        };
        if !folds_to_self(ch) {
            cob.write(&v[n..i]);
            let mut buf = [0u8; 4];
            for folded in iter::once(ch).default_case_fold() {
                cob.write(folded.encode_utf8(&mut buf).as_bytes());
            }
            n = i + size;
        }
        i += size;
    }
    if cob.is_copied() {
        cob.write(&v[n..]);
    }
    cob.into_cow()
}

fn folds_to_self(ch: char) -> bool {
    let mut folded = iter::once(ch).default_case_fold();
    folded.next() == Some(ch) && folded.next().is_none()
}

/// Normalizes a link label into the key used to match link reference
/// definitions.
///
/// Leading and trailing whitespace is trimmed, the label is case folded, and
/// each inner run of spaces, tabs and line endings becomes one space.
///
/// ```rust
/// assert_eq!(mdbytes::to_link_reference(b"  Foo \n\t BAR "), "foo bar");
/// ```
#[must_use]
pub fn to_link_reference(v: &[u8]) -> BString {
    let trimmed = trim_right_space(trim_left_space(v));
    let folded = do_full_unicode_case_folding(trimmed);
    BString::from(replace_spaces(&folded, b' ').into_owned())
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use bstr::ByteSlice;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ABC", "abc")]
    #[case("MiXeD 123", "mixed 123")]
    #[case("ΣΑΣ", "σασ")]
    #[case("Straße", "strasse")]
    #[case("ẞ", "ss")]
    #[case("ﬃ", "ffi")]
    #[case("\u{212A}elvin", "kelvin")]
    #[case("ÀÉÎ", "àéî")]
    fn folds(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(
            do_full_unicode_case_folding(input.as_bytes()).as_bstr(),
            expected.as_bytes().as_bstr()
        );
    }

    #[rstest]
    #[case("abc")]
    #[case("strasse")]
    #[case("σασ")]
    #[case("日本語")]
    #[case("")]
    fn folded_input_is_borrowed(#[case] input: &str) {
        assert!(matches!(
            do_full_unicode_case_folding(input.as_bytes()),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn invalid_utf8_is_copied_through() {
        assert_eq!(
            do_full_unicode_case_folding(b"\xFFA\x80B\xE2").as_bstr(),
            b"\xFFa\x80b\xE2".as_bstr()
        );
    }

    #[rstest]
    #[case(b"  Foo   Bar  ", b"foo bar")]
    #[case(b"foo bar", b"foo bar")]
    #[case(b"\tFOO\n\nbar\r\n", b"foo bar")]
    #[case(b"\x0b\x0cx\x0c", b"x")]
    #[case(b"   ", b"")]
    fn link_references(#[case] input: &[u8], #[case] expected: &[u8]) {
        assert_eq!(to_link_reference(input).as_bstr(), expected.as_bstr());
    }
}
