//! Error types for gap searches.

use std::error::Error;
use std::fmt;

/// Errors from the bounded gap search.
///
/// Per-row outcomes are not errors: a fully covered row is the common
/// case and is expressed as `None` by
/// [`row_gap`](crate::row::row_gap). These variants cover the truly
/// exceptional whole-search failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanError {
    /// The detector set is empty. With no coverage information every
    /// cell is uncovered, so no *single* gap can be singled out; the
    /// search rejects the input up front.
    NoDetectors,
    /// Every row in `[0, max_coordinate]` is fully covered. The search
    /// contract guarantees exactly one gap, so exhaustion signals
    /// malformed input and is surfaced rather than defaulted to a
    /// sentinel point.
    NoGapFound {
        /// Inclusive upper bound of the exhausted search region.
        max_coordinate: i64,
    },
    /// A scan worker thread could not be spawned.
    WorkerSpawn {
        /// Description of the failing worker.
        reason: String,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDetectors => write!(f, "detector set is empty"),
            Self::NoGapFound { max_coordinate } => {
                write!(f, "no uncovered position within [0, {max_coordinate}]")
            }
            Self::WorkerSpawn { reason } => {
                write!(f, "scan worker spawn failed: {reason}")
            }
        }
    }
}

impl Error for ScanError {}
