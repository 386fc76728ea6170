//! HTML escaping, reference resolution and URL percent-escaping.
//!
//! Every scanner here follows the same shape: a [`CowBuffer`] over the input
//! and a cursor `n` marking the end of the last flushed span. When a
//! substitution is found, `input[n..pos]` is flushed, the replacement is
//! written, and `n` moves past the consumed input. If nothing was substituted
//! the caller gets its own slice back.
//!
//! Malformed input is never an error. A reference that does not match the
//! full grammar leaves its `&` as literal text and scanning resumes at the
//! next byte.
use std::borrow::Cow;

use bstr::ByteSlice;

use crate::{
    byte_class::{is_alpha_numeric, is_hex_decimal, is_numeric, is_punct, is_url_safe, utf8_len},
    cow_buffer::{CowBuffer, pipe},
    entity::lookup_entity,
    scan::{read_while, to_valid_rune},
};

/// Longest decimal numeric reference accepted (`&#9999999;`).
const MAX_DECIMAL_DIGITS: usize = 7;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

static HTML_ESCAPES: [Option<&[u8]>; 256] = {
    let mut table: [Option<&[u8]>; 256] = [None; 256];
    table[b'"' as usize] = Some(b"&quot;");
    table[b'&' as usize] = Some(b"&amp;");
    table[b'<' as usize] = Some(b"&lt;");
    table[b'>' as usize] = Some(b"&gt;");
    table
};

/// Returns the HTML reference for `b` if it must be escaped in HTML text.
///
/// ```rust
/// assert_eq!(mdbytes::escape_html_byte(b'<'), Some(&b"&lt;"[..]));
/// assert_eq!(mdbytes::escape_html_byte(b'a'), None);
/// ```
#[inline]
#[must_use]
pub fn escape_html_byte(b: u8) -> Option<&'static [u8]> {
    HTML_ESCAPES[b as usize]
}

/// Replaces `"`, `&`, `<` and `>` with their named HTML references.
///
/// ```rust
/// use std::borrow::Cow;
///
/// assert_eq!(&*mdbytes::escape_html(b"a < b"), b"a &lt; b");
/// assert!(matches!(mdbytes::escape_html(b"plain"), Cow::Borrowed(_)));
/// ```
#[must_use]
pub fn escape_html(v: &[u8]) -> Cow<'_, [u8]> {
    let mut cob = CowBuffer::new(v);
    let mut n = 0;
    for (i, &c) in v.iter().enumerate() {
        if let Some(escaped) = escape_html_byte(c) {
            cob.write(&v[n..i]);
            cob.write(escaped);
            n = i + 1;
        }
    }
    if cob.is_copied() {
        cob.write(&v[n..]);
    }
    cob.into_cow()
}

/// Removes the backslash from backslash-escaped ASCII punctuation.
///
/// A backslash before anything else, including a trailing backslash, is kept.
#[must_use]
pub fn unescape_punctuations(source: &[u8]) -> Cow<'_, [u8]> {
    let mut cob = CowBuffer::new(source);
    let mut n = 0;
    let mut i = 0;
    while let Some(off) = source[i..].find_byte(b'\\') {
        let pos = i + off;
        match source.get(pos + 1) {
            Some(&c) if is_punct(c) => {
                cob.write(&source[n..pos]);
                cob.write_byte(c);
                i = pos + 2;
                n = i;
            }
            _ => i = pos + 1,
        }
    }
    if cob.is_copied() {
        cob.write(&source[n..]);
    }
    cob.into_cow()
}

/// Resolves decimal (`&#1234;`) and hexadecimal (`&#x4D2;`) character
/// references.
///
/// Decimal references take at most seven digits. A reference to zero or to a
/// value that is not a Unicode scalar value resolves to U+FFFD.
///
/// ```rust
/// assert_eq!(&*mdbytes::resolve_numeric_references(b"&#9731;"), "☃".as_bytes());
/// assert_eq!(&*mdbytes::resolve_numeric_references(b"&#X2603;"), "☃".as_bytes());
/// assert_eq!(&*mdbytes::resolve_numeric_references(b"&#99999999;"), b"&#99999999;");
/// ```
#[must_use]
pub fn resolve_numeric_references(source: &[u8]) -> Cow<'_, [u8]> {
    let mut cob = CowBuffer::new(source);
    let mut n = 0;
    let mut i = 0;
    while let Some(off) = source[i..].find_byte(b'&') {
        let pos = i + off;
        if let Some((ch, end)) = numeric_reference_at(source, pos) {
            let mut buf = [0u8; 4];
            cob.write(&source[n..pos]);
            cob.write(ch.encode_utf8(&mut buf).as_bytes());
            i = end;
            n = end;
        } else {
            i = pos + 1;
        }
    }
    if cob.is_copied() {
        cob.write(&source[n..]);
    }
    cob.into_cow()
}

/// Resolves named character references such as `&ouml;`.
///
/// The name must be a run of ASCII letters and digits, terminated by `;`, and
/// present in the HTML5 entity table. Anything else is copied through.
#[must_use]
pub fn resolve_entity_names(source: &[u8]) -> Cow<'_, [u8]> {
    let mut cob = CowBuffer::new(source);
    let mut n = 0;
    let mut i = 0;
    while let Some(off) = source[i..].find_byte(b'&') {
        let pos = i + off;
        if let Some((characters, end)) = entity_reference_at(source, pos) {
            cob.write(&source[n..pos]);
            cob.write(characters.as_bytes());
            i = end;
            n = end;
        } else {
            i = pos + 1;
        }
    }
    if cob.is_copied() {
        cob.write(&source[n..]);
    }
    cob.into_cow()
}

/// Unescapes punctuation, then resolves numeric and named references.
#[must_use]
pub fn resolve_references(source: &[u8]) -> Cow<'_, [u8]> {
    let unescaped = unescape_punctuations(source);
    let numeric = pipe(unescaped, resolve_numeric_references);
    pipe(numeric, resolve_entity_names)
}

/// Percent-escapes a URL destination.
///
/// With `resolve_references`, the input first goes through
/// [`resolve_references`]. Then:
///
/// - URL-safe bytes and existing `%XX` escapes are kept;
/// - a space becomes `%20`;
/// - any other byte starts a UTF-8 sequence whose bytes are escaped as `%XX`;
///   a lead byte whose sequence would run past the end is escaped alone;
/// - bytes that cannot lead a UTF-8 sequence are kept as they are.
///
/// ```rust
/// assert_eq!(&*mdbytes::url_escape(b"a b", false), b"a%20b");
/// assert_eq!(&*mdbytes::url_escape("/ö".as_bytes(), false), b"/%C3%B6");
/// assert_eq!(&*mdbytes::url_escape(b"&amp;%2F", true), b"&%2F");
/// ```
#[must_use]
pub fn url_escape(v: &[u8], resolve_references: bool) -> Cow<'_, [u8]> {
    if !resolve_references {
        return percent_escape(v).into_cow();
    }
    match self::resolve_references(v) {
        Cow::Borrowed(b) => percent_escape(b).into_cow(),
        Cow::Owned(resolved) => {
            let escaped = match percent_escape(&resolved) {
                CowBuffer::Owned(escaped) => Some(escaped),
                CowBuffer::Borrowed(_) => None,
            };
            Cow::Owned(escaped.unwrap_or(resolved))
        }
    }
}

fn percent_escape(v: &[u8]) -> CowBuffer<'_> {
    let mut cob = CowBuffer::new(v);
    let limit = v.len();
    let mut n = 0;
    let mut i = 0;
    while i < limit {
        let c = v[i];
        if is_url_safe(c) {
            i += 1;
            continue;
        }
        if c == b'%'
            && v.get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(|&h| is_hex_decimal(h)))
        {
            i += 3;
            continue;
        }
        let Some(len) = utf8_len(c) else {
            tracing::trace!(offset = i, byte = c, "kept invalid UTF-8 lead byte unescaped");
            i += 1;
            continue;
        };
        cob.write(&v[n..i]);
        if c == b' ' {
            cob.write(b"%20");
            i += 1;
        } else {
            let stop = if i + len > limit { i + 1 } else { i + len };
            for &b in &v[i..stop] {
                write_percent_byte(&mut cob, b);
            }
            i = stop;
        }
        n = i;
    }
    if cob.is_copied() && n < limit {
        cob.write(&v[n..]);
    }
    cob
}

/// Writes `b` as `%XX` unless it is in the RFC 3986 unreserved set.
fn write_percent_byte(cob: &mut CowBuffer<'_>, b: u8) {
    if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
        cob.write_byte(b);
    } else {
        cob.write(&[
            b'%',
            HEX_UPPER[usize::from(b >> 4)],
            HEX_UPPER[usize::from(b & 0x0F)],
        ]);
    }
}

/// Matches `&#[0-9]{1,7};` or `&#[xX][0-9a-fA-F]+;` at `pos`, returning the
/// decoded rune and the index just past the `;`.
fn numeric_reference_at(source: &[u8], pos: usize) -> Option<(char, usize)> {
    if source.get(pos + 1) != Some(&b'#') {
        return None;
    }
    let start = pos + 2;
    let (digits, radix) = match *source.get(start)? {
        b'x' | b'X' => (start + 1, 16),
        c if is_numeric(c) => (start, 10),
        _ => return None,
    };
    let (stop, ok) = if radix == 16 {
        read_while(source, digits..source.len(), is_hex_decimal)
    } else {
        read_while(source, digits..source.len(), is_numeric)
    };
    if !ok || source.get(stop) != Some(&b';') {
        return None;
    }
    if radix == 10 && stop - digits > MAX_DECIMAL_DIGITS {
        return None;
    }
    let code = parse_code_point(&source[digits..stop], radix);
    Some((to_valid_rune(code), stop + 1))
}

/// Parses digits already validated for `radix`; values past `u32` saturate,
/// which [`to_valid_rune`] then maps to U+FFFD.
fn parse_code_point(digits: &[u8], radix: u32) -> u32 {
    digits
        .iter()
        .try_fold(0u32, |acc, &d| {
            acc.checked_mul(radix)?
                .checked_add(char::from(d).to_digit(radix)?)
        })
        .unwrap_or(u32::MAX)
}

/// Matches `&name;` at `pos` for a known entity name, returning its characters
/// and the index just past the `;`.
fn entity_reference_at(source: &[u8], pos: usize) -> Option<(&'static str, usize)> {
    let start = pos + 1;
    if source.get(start) == Some(&b'#') {
        return None;
    }
    let (stop, ok) = read_while(source, start..source.len(), is_alpha_numeric);
    if !ok || source.get(stop) != Some(&b';') {
        return None;
    }
    lookup_entity(&source[start..stop]).map(|characters| (characters, stop + 1))
}
