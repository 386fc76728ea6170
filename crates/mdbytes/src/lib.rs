//! Byte-level helpers for rendering markdown to HTML.
//!
//! Every transform takes a byte slice and returns `Cow<'_, [u8]>`. When the
//! input needs no change the result borrows it, so the common case of clean
//! text costs one scan and no allocation. Malformed input never fails: a
//! reference that does not parse is kept as literal text, an invalid code
//! point becomes U+FFFD, and stray UTF-8 bytes are passed along one at a
//! time.
//!
//! ```rust
//! use std::borrow::Cow;
//!
//! assert_eq!(&*mdbytes::escape_html(b"1 < 2"), b"1 &lt; 2");
//! assert_eq!(&*mdbytes::resolve_entity_names(b"caf&eacute;"), "café".as_bytes());
//! assert!(matches!(mdbytes::url_escape(b"/docs/", true), Cow::Borrowed(_)));
//! ```
//!
//! The crate also carries the small scanning, indentation and autolink
//! helpers a block parser needs, and [`BytesFilter`], a set tuned for short
//! keys like tag names.

mod autolink;
mod byte_class;
mod case_fold;
mod cow_buffer;
mod entity;
mod error;
mod escape;
mod filter;
mod indent;
mod options;
mod scan;

#[cfg(test)]
mod tests;

pub use autolink::{find_email_index, find_url_index};
pub use byte_class::{
    EastAsianWidth, east_asian_width, is_alpha_numeric, is_east_asian_wide_rune, is_email_local,
    is_hex_decimal, is_numeric, is_punct, is_space, is_space_discarding_unicode_rune,
    is_space_rune, is_url_safe, utf8_len,
};
pub use case_fold::{do_full_unicode_case_folding, to_link_reference};
pub use cow_buffer::CowBuffer;
pub use entity::lookup_entity;
pub use error::FilterError;
pub use escape::{
    escape_html, escape_html_byte, resolve_entity_names, resolve_numeric_references,
    resolve_references, unescape_punctuations, url_escape,
};
pub use filter::BytesFilter;
pub use indent::{
    first_non_space_position, indent_position, indent_position_padding, indent_width, tab_width,
};
pub use options::FilterOptions;
pub use scan::{
    TRIM_SPACES, is_blank, is_escaped_punctuation, read_while, replace_spaces, to_rune,
    to_valid_rune, trim_left, trim_left_space, trim_left_space_length, trim_right,
    trim_right_space, trim_right_space_length, visualize_spaces,
};
