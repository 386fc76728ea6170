//! Named HTML5 character reference lookup.
//!
//! The WHATWG table (from the `entities` crate) lists each name both with and
//! without its trailing `;` for the legacy forms. References here always carry
//! the terminator, so only the `&name;` rows are indexed: once, on first use,
//! into a name-sorted table searched by binary search.
use std::sync::OnceLock;

struct Entry {
    name: &'static [u8],
    characters: &'static str,
}

static INDEX: OnceLock<Vec<Entry>> = OnceLock::new();

fn index() -> &'static [Entry] {
    INDEX.get_or_init(|| {
        let mut entries: Vec<Entry> = ::entities::ENTITIES
            .iter()
            .filter_map(|e| {
                let name = e.entity.strip_prefix('&')?.strip_suffix(';')?;
                Some(Entry {
                    name: name.as_bytes(),
                    characters: e.characters,
                })
            })
            .collect();
        entries.sort_unstable_by(|a, b| a.name.cmp(b.name));
        entries.dedup_by(|a, b| a.name == b.name);
        tracing::trace!(entries = entries.len(), "indexed named character references");
        entries
    })
}

/// Looks up the expansion of a named character reference.
///
/// `name` excludes the leading `&` and trailing `;`; matching is exact and
/// case-sensitive (`&Amp;` and `&amp;` are distinct names).
///
/// ```rust
/// assert_eq!(mdbytes::lookup_entity(b"ouml"), Some("ö"));
/// assert_eq!(mdbytes::lookup_entity(b"notanentity"), None);
/// ```
#[must_use]
pub fn lookup_entity(name: &[u8]) -> Option<&'static str> {
    let table = index();
    table
        .binary_search_by(|e| e.name.cmp(name))
        .ok()
        .map(|i| table[i].characters)
}
