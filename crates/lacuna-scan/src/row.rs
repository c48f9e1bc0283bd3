//! Per-row queries: exclusion counts and gap detection.
//!
//! Both queries are pure functions of the immutable detector slice and
//! the row index; no state crosses rows. Projections are gathered into
//! a stack-allocated scratch buffer before merging, keeping the hot
//! scan loop allocation-light for typical field sizes.

use indexmap::IndexSet;
use lacuna_core::{Detector, Point};
use lacuna_coverage::{merge, project, project_clamped, Interval, MergedCoverage};
use smallvec::SmallVec;

/// Projection scratch capacity; fields larger than this spill to the heap.
const ROW_SCRATCH: usize = 32;

/// Merged coverage of `row`, clamped to `[0, max]` when a bound is given.
///
/// `bound = None` projects across the full integer line.
pub fn row_coverage(detectors: &[Detector], row: i64, bound: Option<i64>) -> MergedCoverage {
    let projected: SmallVec<[Interval; ROW_SCRATCH]> = match bound {
        None => detectors.iter().filter_map(|d| project(d, row)).collect(),
        Some(max) => detectors
            .iter()
            .filter_map(|d| project_clamped(d, row, max))
            .collect(),
    };
    merge(projected)
}

/// Count the integer positions on `row`, across the full integer line,
/// that are covered by some detector's diamond and are not themselves a
/// known reference point.
///
/// A reference point occupying a covered cell is a confirmed location,
/// not a candidate for the hidden target, so it is not counted. Several
/// detectors may share one reference; distinct reference x-coordinates
/// are deduplicated deterministically.
///
/// With no detectors the coverage is empty and nothing is excluded.
pub fn excluded_positions(detectors: &[Detector], row: i64) -> u64 {
    let coverage = row_coverage(detectors, row, None);
    let references: IndexSet<i64> = detectors
        .iter()
        .map(Detector::reference)
        .filter(|r| r.y == row)
        .map(|r| r.x)
        .collect();
    // Every reference on the row sits inside its own detector's
    // unbounded projection, so the subtraction cannot underflow.
    coverage.covered_cells() - references.len() as u64
}

/// Locate the uncovered position on `row` within `[0, max_coordinate]`,
/// if the row has one.
///
/// `None` means the row is fully covered. Otherwise the single
/// uncovered cell (guaranteed by the search contract) sits either
/// before the first merged interval (`x = 0`) or immediately after it
/// (`x = first.high + 1`). A row no detector reaches reports `x = 0`.
pub fn row_gap(detectors: &[Detector], row: i64, max_coordinate: i64) -> Option<Point> {
    let coverage = row_coverage(detectors, row, Some(max_coordinate));
    match coverage.as_slice() {
        [] => Some(Point::new(0, row)),
        [only] if only.low == 0 && only.high == max_coordinate => None,
        [first, ..] => {
            if first.low > 0 {
                Some(Point::new(0, row))
            } else {
                Some(Point::new(first.high + 1, row))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lacuna_test_utils::{detector, sample_field};
    use proptest::prelude::*;

    #[test]
    fn sample_field_row_ten_excludes_twenty_six() {
        assert_eq!(excluded_positions(&sample_field(), 10), 26);
    }

    #[test]
    fn empty_field_excludes_nothing() {
        assert_eq!(excluded_positions(&[], 10), 0);
    }

    #[test]
    fn shared_references_are_counted_once() {
        // Two detectors locked onto the same reference on the queried
        // row: coverage merges to [0, 8], and the shared reference cell
        // is subtracted exactly once.
        let field = vec![detector(2, 0, 4, 0), detector(6, 0, 4, 0)];
        assert_eq!(excluded_positions(&field, 0), 9 - 1);
    }

    #[test]
    fn references_off_the_row_are_not_subtracted() {
        // Reach 3 around (0, 0); reference on row 3 is outside row 0's
        // span of 7 cells.
        let field = vec![detector(0, 0, 0, 3)];
        assert_eq!(excluded_positions(&field, 0), 7);
        assert_eq!(excluded_positions(&field, 3), 0);
    }

    #[test]
    fn unreached_row_excludes_nothing() {
        let field = vec![detector(0, 0, 2, 0)];
        assert_eq!(excluded_positions(&field, 5), 0);
    }

    #[test]
    fn sample_field_row_eleven_has_the_gap() {
        assert_eq!(row_gap(&sample_field(), 11, 20), Some(Point::new(14, 11)));
    }

    #[test]
    fn sample_field_row_ten_is_fully_covered() {
        assert_eq!(row_gap(&sample_field(), 10, 20), None);
    }

    #[test]
    fn unreached_row_reports_the_gap_at_zero() {
        assert_eq!(row_gap(&[], 7, 20), Some(Point::new(0, 7)));
        let field = vec![detector(0, 0, 2, 0)];
        assert_eq!(row_gap(&field, 100, 20), Some(Point::new(0, 100)));
    }

    #[test]
    fn coverage_starting_past_zero_reports_the_gap_at_zero() {
        // Reach 3 around (4, 0) covers [1, 7] on row 0, clamped to [1, 4].
        let field = vec![detector(4, 0, 1, 0)];
        assert_eq!(row_gap(&field, 0, 4), Some(Point::new(0, 0)));
    }

    #[test]
    fn gap_sits_after_the_first_interval() {
        // [0, 0] and [2, 4]: the uncovered cell is x = 1.
        let field = vec![detector(0, 0, 0, 0), detector(3, 0, 2, 0)];
        assert_eq!(row_gap(&field, 0, 4), Some(Point::new(1, 0)));
    }

    #[test]
    fn row_coverage_unbounded_vs_clamped() {
        let field = vec![detector(8, 7, 2, 10)];
        let unbounded = row_coverage(&field, 10, None);
        assert_eq!(unbounded.as_slice(), &[Interval::new(2, 14)]);
        let clamped = row_coverage(&field, 10, Some(10));
        assert_eq!(clamped.as_slice(), &[Interval::new(2, 10)]);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_field() -> impl Strategy<Value = Vec<Detector>> {
        proptest::collection::vec(
            (-50i64..50, -50i64..50, -50i64..50, -50i64..50)
                .prop_map(|(px, py, rx, ry)| detector(px, py, rx, ry)),
            1..12,
        )
    }

    proptest! {
        #[test]
        fn adding_a_detector_never_reduces_exclusion(
            field in arb_field(),
            row in -80i64..80,
        ) {
            let partial = excluded_positions(&field[..field.len() - 1], row);
            let full = excluded_positions(&field, row);
            prop_assert!(full >= partial.saturating_sub(1),
                "dropped detector may only have contributed its own reference");
            // The precise statement: coverage never shrinks.
            let partial_cells =
                row_coverage(&field[..field.len() - 1], row, None).covered_cells();
            let full_cells = row_coverage(&field, row, None).covered_cells();
            prop_assert!(full_cells >= partial_cells);
        }

        #[test]
        fn reported_gap_is_never_covered(
            field in arb_field(),
            row in -80i64..80,
            max in 0i64..60,
        ) {
            if let Some(gap) = row_gap(&field, row, max) {
                prop_assert_eq!(gap.y, row);
                prop_assert!((0..=max).contains(&gap.x));
                prop_assert!(
                    !row_coverage(&field, row, Some(max)).contains(gap.x),
                    "reported gap {} lies inside merged coverage", gap,
                );
            }
        }
    }
}
