//! Row queries and gap search drivers for detector fields.
//!
//! Built on `lacuna-coverage`'s projection/merge pipeline, this crate
//! answers the two questions a detector field is interrogated for:
//!
//! - [`excluded_positions`]: on one row, how many positions cannot hold
//!   a hidden target.
//! - [`locate_gap`] / [`locate_gap_parallel`]: across the bounded
//!   square `[0, max]^2`, the single position no detector reaches,
//!   convertible to a scalar with [`tuning_frequency`].
//!
//! Every row query is a pure function of the immutable detector slice,
//! which is what makes the bounded scan embarrassingly parallel: the
//! parallel driver shares the slice read-only across workers and only
//! synchronizes the "first gap found" signal.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod row;
pub mod search;

pub use config::ScanConfig;
pub use error::ScanError;
pub use row::{excluded_positions, row_coverage, row_gap};
pub use search::{locate_gap, locate_gap_parallel, tuning_frequency, TUNING_MULTIPLIER};
