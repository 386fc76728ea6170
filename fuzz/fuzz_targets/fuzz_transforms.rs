#![no_main]
use std::{borrow::Cow, cell::RefCell};

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use mdbytes::BytesFilter;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// Fragments that reach the interesting branches of the scanners.
static MARKUP: &[&[u8]] = &[
    b"&",
    b"&amp;",
    b"&ngE;",
    b"&#",
    b"&#x",
    b"&#9731;",
    b"&#x2603;",
    b"&#99999999;",
    b"&#0;",
    b";",
    b"\\",
    b"\\*",
    b"%",
    b"%2F",
    b" ",
    b"\t",
    b"\x0b",
    b"<",
    b"\"",
    "ß".as_bytes(),
    "\u{130}".as_bytes(),
    b"\xE2",
    b"\x80",
    b"\xFF",
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Splices markup fragments into the input one time in four, otherwise defers
/// to the built-in mutator.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size == 0 || !seed.is_multiple_of(4) {
        return fuzzer_mutate(data, size, max_size);
    }
    with_rng(|rng| {
        let fragment = MARKUP[rng.random_range(0..MARKUP.len())];
        if size + fragment.len() > max_size {
            return fuzzer_mutate(data, size, max_size);
        }
        let at = rng.random_range(0..=size);
        data.copy_within(at..size, at + fragment.len());
        data[at..at + fragment.len()].copy_from_slice(fragment);
        size + fragment.len()
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
struct FilterCase<'a> {
    members: Vec<&'a [u8]>,
    added: Vec<&'a [u8]>,
    probe: &'a [u8],
}

fn check_borrowed_is_unchanged(name: &str, input: &[u8], out: &Cow<'_, [u8]>) {
    if let Cow::Borrowed(b) = out {
        assert!(std::ptr::eq(*b, input), "{name}: borrowed a different slice");
    }
}

fn transforms(data: &[u8]) {
    let html = mdbytes::escape_html(data);
    check_borrowed_is_unchanged("escape_html", data, &html);
    assert!(!html.iter().any(|&b| matches!(b, b'<' | b'>' | b'"')));

    let resolved = mdbytes::resolve_references(data);
    check_borrowed_is_unchanged("resolve_references", data, &resolved);

    let url = mdbytes::url_escape(data, true);
    assert!(!url.contains(&b' '));
    assert_eq!(*mdbytes::url_escape(&url, false), *url);

    let folded = mdbytes::do_full_unicode_case_folding(data);
    check_borrowed_is_unchanged("case_fold", data, &folded);
    assert!(!folded.iter().any(u8::is_ascii_uppercase));

    let key = mdbytes::to_link_reference(data);
    assert!(!key.starts_with(b" ") && !key.ends_with(b" "));
}

fn filter(data: &[u8]) {
    let Ok(case) = FilterCase::arbitrary(&mut Unstructured::new(data)) else {
        return;
    };
    let base: BytesFilter = case.members.iter().copied().collect();
    let derived = base.extend(case.added.iter().copied());
    assert_eq!(base.contains(case.probe), case.members.contains(&case.probe));
    assert_eq!(
        derived.contains(case.probe),
        case.members.contains(&case.probe) || case.added.contains(&case.probe)
    );
}

fuzz_target!(|data: &[u8]| {
    transforms(data);
    filter(data);
});
