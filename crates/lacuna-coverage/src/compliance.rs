//! Coverage invariant test helpers.
//!
//! Verify that a [`MergedCoverage`] satisfies the canonical-form
//! invariants gap detection relies on. Reused by the merge unit tests
//! and property tests.

use crate::merge::MergedCoverage;

/// Assert every interval is well-formed (`low <= high`).
pub fn assert_intervals_well_formed(coverage: &MergedCoverage) {
    for interval in coverage.iter() {
        assert!(
            interval.low <= interval.high,
            "interval {interval} is empty"
        );
    }
}

/// Assert intervals are sorted strictly ascending by `low`.
pub fn assert_sorted(coverage: &MergedCoverage) {
    for pair in coverage.as_slice().windows(2) {
        assert!(
            pair[0].low < pair[1].low,
            "intervals {} and {} are out of order",
            pair[0],
            pair[1]
        );
    }
}

/// Assert consecutive intervals leave a genuine gap:
/// `next.low > current.high + 1`.
pub fn assert_non_adjacent(coverage: &MergedCoverage) {
    for pair in coverage.as_slice().windows(2) {
        assert!(
            pair[1].low > pair[0].high + 1,
            "intervals {} and {} touch or overlap",
            pair[0],
            pair[1]
        );
    }
}

/// Run all canonical-form checks.
pub fn assert_canonical(coverage: &MergedCoverage) {
    assert_intervals_well_formed(coverage);
    assert_sorted(coverage);
    assert_non_adjacent(coverage);
}
