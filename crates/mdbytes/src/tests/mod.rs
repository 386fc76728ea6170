mod property_filter;

/// Number of cases per property: more on CI, a handful under miri.
fn quickcheck_tests() -> u64 {
    if cfg!(miri) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}
