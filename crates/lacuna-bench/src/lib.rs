//! Benchmark profiles for the lacuna coverage analysis library.
//!
//! Provides pre-built detector fields at the scales the benches and
//! stress tests care about:
//!
//! - [`reference_field`]: 1 000 detectors over a 4M × 4M region — the
//!   production-scale search space.
//! - [`dense_row_field`]: detectors stacked near one row so every one
//!   of them projects onto it, exercising the merge at full fan-in.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lacuna_core::Detector;
use lacuna_test_utils::{detector, synthetic_field};

/// Production-scale search space bound (4 million cells per axis).
pub const REFERENCE_SPAN: i64 = 4_000_000;

/// Build the reference benchmark field: 1 000 detectors spread over
/// `[0, REFERENCE_SPAN)^2`.
pub fn reference_field() -> Vec<Detector> {
    synthetic_field(1_000, REFERENCE_SPAN)
}

/// Build a field of `count` detectors whose diamonds all intersect
/// row 0, so a row query merges `count` projected intervals.
pub fn dense_row_field(count: usize) -> Vec<Detector> {
    (0..count as i64)
        .map(|i| {
            // Wide, heavily overlapping diamonds centred near row 0.
            let x = i * 7;
            detector(x, i % 5, x + 40, i % 5)
        })
        .collect()
}
