//! Prefix matchers for bare URLs and email addresses.
use crate::byte_class::is_email_local;

/// Longest scheme accepted, in bytes.
const MAX_SCHEME_LEN: usize = 32;
/// Longest DNS label accepted, in bytes.
const MAX_LABEL_LEN: usize = 63;

/// Returns the end of a URL at the start of `b`.
///
/// Matches a scheme of 2-32 characters (`[A-Za-z][A-Za-z0-9.+-]*`), a `:`,
/// and then every byte up to the first `<`, `>`, space or lower control byte.
///
/// ```rust
/// assert_eq!(mdbytes::find_url_index(b"https://x.org rest"), Some(13));
/// assert_eq!(mdbytes::find_url_index(b"a:b"), None);
/// ```
#[must_use]
pub fn find_url_index(b: &[u8]) -> Option<usize> {
    if !b.first().is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }
    let scheme = 1 + b[1..]
        .iter()
        .take_while(|&&c| c.is_ascii_alphanumeric() || matches!(c, b'+' | b'-' | b'.'))
        .count();
    if !(2..=MAX_SCHEME_LEN).contains(&scheme) || b.get(scheme) != Some(&b':') {
        return None;
    }
    let rest = b[scheme + 1..]
        .iter()
        .take_while(|&&c| c > b' ' && c != b'<' && c != b'>')
        .count();
    Some(scheme + 1 + rest)
}

/// Returns the end of an email address at the start of `b`.
///
/// The local part is one or more bytes from the email-local set. The domain
/// is one or more dot-separated labels of up to 63 letters, digits and
/// hyphens that neither start nor end with a hyphen.
///
/// ```rust
/// assert_eq!(mdbytes::find_email_index(b"foo@bar.example>"), Some(15));
/// assert_eq!(mdbytes::find_email_index(b"@bar.example"), None);
/// ```
#[must_use]
pub fn find_email_index(b: &[u8]) -> Option<usize> {
    let local = b.iter().take_while(|&&c| is_email_local(c)).count();
    if local == 0 || b.get(local) != Some(&b'@') {
        return None;
    }
    let mut end = match_label(b, local + 1)?;
    while b.get(end) == Some(&b'.') {
        match match_label(b, end + 1) {
            Some(next) => end = next,
            None => break,
        }
    }
    Some(end)
}

/// Matches one DNS label starting at `start`, returning its end.
fn match_label(b: &[u8], start: usize) -> Option<usize> {
    if !b.get(start).is_some_and(u8::is_ascii_alphanumeric) {
        return None;
    }
    let run = b[start..]
        .iter()
        .take(MAX_LABEL_LEN)
        .take_while(|&&c| c.is_ascii_alphanumeric() || c == b'-')
        .count();
    // Give back trailing hyphens; the first byte is alphanumeric so this
    // always finds one.
    let last = b[start..start + run]
        .iter()
        .rposition(u8::is_ascii_alphanumeric)?;
    Some(start + last + 1)
}
