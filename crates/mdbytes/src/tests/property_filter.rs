use quickcheck::QuickCheck;

use super::quickcheck_tests;
use crate::{BytesFilter, FilterOptions};

fn options(threshold: u8, buckets: u8) -> FilterOptions {
    FilterOptions {
        prefix_threshold: usize::from(threshold % 9),
        buckets: usize::from(buckets % 128) + 1,
    }
}

/// Property: the filter agrees with a linear scan of what was added, for any
/// valid shape.
#[test]
fn filter_matches_linear_scan() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(members: Vec<Vec<u8>>, probes: Vec<Vec<u8>>, threshold: u8, buckets: u8) -> bool {
        let Ok(mut filter) = BytesFilter::with_options(options(threshold, buckets)) else {
            return false;
        };
        for m in &members {
            filter.add(m);
        }
        members.iter().all(|m| filter.contains(m))
            && probes
                .iter()
                .all(|p| filter.contains(p) == members.contains(p))
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<Vec<u8>>, Vec<Vec<u8>>, u8, u8) -> bool);
}

/// Property: `extend` never changes the filter it was called on, and later
/// adds to the derived filter stay private to it.
#[test]
fn extend_is_isolated() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(base: Vec<Vec<u8>>, added: Vec<Vec<u8>>, later: Vec<u8>) -> bool {
        let original: BytesFilter = base.iter().map(Vec::as_slice).collect();
        let mut derived = original.extend(added.iter().map(Vec::as_slice));
        derived.add(&later);

        let untouched = added
            .iter()
            .chain(std::iter::once(&later))
            .filter(|x| !base.contains(*x))
            .all(|x| !original.contains(x));
        let inherited = base
            .iter()
            .chain(&added)
            .chain(std::iter::once(&later))
            .all(|x| derived.contains(x));
        untouched && inherited && original.len() == base.len()
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<Vec<u8>>, Vec<Vec<u8>>, Vec<u8>) -> bool);
}
