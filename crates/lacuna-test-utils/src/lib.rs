//! Reusable detector-field fixtures for lacuna development.
//!
//! Provides the [`sample_field`] whose known answers anchor the
//! integration tests, a terse [`detector`] constructor, and
//! [`synthetic_field`] for generating larger deterministic fields for
//! benchmarks and stress tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use lacuna_core::{Detector, Point};

/// Build a detector from raw coordinates: position `(px, py)`, paired
/// reference `(rx, ry)`.
pub fn detector(px: i64, py: i64, rx: i64, ry: i64) -> Detector {
    Detector::new(Point::new(px, py), Point::new(rx, ry))
}

/// The classic 14-detector sample field.
///
/// Known answers for bound 20: row 10 excludes 26 positions; the single
/// uncovered position is `(14, 11)`; its tuning frequency is
/// `56000011`.
pub fn sample_field() -> Vec<Detector> {
    vec![
        detector(2, 18, -2, 15),
        detector(9, 16, 10, 16),
        detector(13, 2, 15, 3),
        detector(12, 14, 10, 16),
        detector(10, 20, 10, 16),
        detector(14, 17, 10, 16),
        detector(8, 7, 2, 10),
        detector(2, 0, 2, 10),
        detector(0, 11, 2, 10),
        detector(20, 14, 25, 17),
        detector(17, 20, 21, 22),
        detector(16, 7, 15, 3),
        detector(14, 3, 15, 3),
        detector(20, 1, 15, 3),
    ]
}

/// Deterministic synthetic field of `count` detectors spread over
/// `[0, span)` on both axes. `span` must be positive.
///
/// Positions come from fixed multiplicative hashing of the index, so
/// two calls with the same arguments produce the same field without an
/// RNG dependency.
pub fn synthetic_field(count: usize, span: i64) -> Vec<Detector> {
    let span = span as u64;
    (0..count as u64)
        .map(|i| {
            let px = (i.wrapping_mul(6364136223846793005) % span) as i64;
            let py = (i.wrapping_mul(1442695040888963407) % span) as i64;
            let rx = (i.wrapping_mul(2862933555777941757) % span) as i64;
            let ry = (i.wrapping_mul(3202034522624059733) % span) as i64;
            detector(px, py, rx, ry)
        })
        .collect()
}
