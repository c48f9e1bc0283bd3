//! Interval merging into canonical row coverage.

use crate::interval::Interval;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Sort-buffer scratch capacity. Typical detector fields project a few
/// dozen intervals per row, so the sweep usually runs without touching
/// the heap; larger fields spill transparently.
const MERGE_SCRATCH: usize = 32;

/// Canonical coverage of a single row: disjoint, non-adjacent intervals
/// sorted ascending by `low`.
///
/// Consecutive intervals always leave a genuine gap of at least one
/// uncovered cell (`next.low > current.high + 1`); exact adjacency has
/// been merged away. Gap detection relies on this: the boundary of a
/// merged interval is always the boundary of an uncovered region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergedCoverage {
    intervals: Vec<Interval>,
}

impl MergedCoverage {
    /// The merged intervals, sorted ascending by `low`.
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Iterate over the merged intervals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// The leftmost merged interval, if any.
    pub fn first(&self) -> Option<&Interval> {
        self.intervals.first()
    }

    /// Number of disjoint intervals.
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Whether nothing on the row is covered.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Total number of covered integer cells across all intervals.
    pub fn covered_cells(&self) -> u64 {
        self.intervals.iter().map(Interval::len).sum()
    }

    /// Whether `x` is covered, by binary search over the sorted intervals.
    pub fn contains(&self, x: i64) -> bool {
        self.intervals
            .binary_search_by(|iv| {
                if iv.high < x {
                    Ordering::Less
                } else if iv.low > x {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }
}

impl<'a> IntoIterator for &'a MergedCoverage {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Merge arbitrary intervals into canonical [`MergedCoverage`].
///
/// Sorts by `(low, high)` ascending and sweeps left to right with an
/// accumulator. An interval extends the accumulator when it overlaps it
/// *or* touches it exactly (`r.low <= current.high + 1`): adjacent
/// ranges leave no integer gap between them, so only a true gap of at
/// least one uncovered cell splits coverage. Using strict overlap here
/// would leave touching ranges apart and misreport gaps downstream.
///
/// Empty input yields empty coverage. O(n log n) sort + O(n) sweep per
/// call, which the row scan relies on staying cheap.
///
/// # Examples
///
/// ```
/// use lacuna_coverage::{merge, Interval};
///
/// let coverage = merge([
///     Interval::new(12, 12),
///     Interval::new(2, 14),
///     Interval::new(15, 25),
///     Interval::new(28, 30),
/// ]);
/// assert_eq!(
///     coverage.as_slice(),
///     &[Interval::new(2, 25), Interval::new(28, 30)],
/// );
/// assert_eq!(coverage.covered_cells(), 27);
/// ```
pub fn merge(intervals: impl IntoIterator<Item = Interval>) -> MergedCoverage {
    let mut sorted: SmallVec<[Interval; MERGE_SCRATCH]> = intervals.into_iter().collect();
    sorted.sort_unstable_by_key(|iv| (iv.low, iv.high));

    let mut out = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(mut current) = iter.next() else {
        return MergedCoverage { intervals: out };
    };
    for r in iter {
        // Saturating: coverage ending at i64::MAX has no cell after it.
        if r.low <= current.high.saturating_add(1) {
            current.high = current.high.max(r.high);
        } else {
            out.push(current);
            current = r;
        }
    }
    out.push(current);
    MergedCoverage { intervals: out }
}
