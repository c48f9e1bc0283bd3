//! Lacuna: coverage analysis for detector fields on the integer plane.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the lacuna sub-crates. For most users, adding `lacuna` as a
//! single dependency is sufficient.
//!
//! Each detector covers a diamond-shaped region (all cells within
//! Manhattan-distance *reach* of its position). The library answers two
//! questions about a field of detectors: how many positions on a given
//! row cannot hold a hidden target, and which single position inside a
//! bounded square no detector reaches.
//!
//! # Quick start
//!
//! ```rust
//! use lacuna::prelude::*;
//!
//! // Two detectors whose diamonds cover the 3x3 region [0, 2]^2
//! // except for a single cell.
//! let detectors = vec![
//!     Detector::new(Point::new(0, 0), Point::new(0, 2)),
//!     Detector::new(Point::new(2, 0), Point::new(2, 2)),
//! ];
//!
//! // Positions on row 1, across the full integer line, that cannot
//! // hold an unseen target.
//! assert_eq!(excluded_positions(&detectors, 1), 5);
//!
//! // The one position in [0, 2]^2 that no diamond reaches.
//! let gap = locate_gap(&detectors, 2).unwrap();
//! assert_eq!(gap, Point::new(1, 2));
//! assert_eq!(tuning_frequency(gap, TUNING_MULTIPLIER), 4_000_002);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for anything not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lacuna-core` | `Point`, `Detector`, the Manhattan metric |
//! | [`coverage`] | `lacuna-coverage` | `Interval`, projection, merging |
//! | [`scan`] | `lacuna-scan` | Row queries, search drivers, config, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core geometry types (`lacuna-core`).
pub use lacuna_core as types;

/// Diamond-to-row projection and interval merging (`lacuna-coverage`).
pub use lacuna_coverage as coverage;

/// Row queries and gap search drivers (`lacuna-scan`).
pub use lacuna_scan as scan;

pub mod prelude {
    //! Single-import surface for the common workflow.

    pub use lacuna_core::{Detector, Point};
    pub use lacuna_coverage::{merge, project, project_clamped, Interval, MergedCoverage};
    pub use lacuna_scan::{
        excluded_positions, locate_gap, locate_gap_parallel, row_coverage, row_gap,
        tuning_frequency, ScanConfig, ScanError, TUNING_MULTIPLIER,
    };
}
