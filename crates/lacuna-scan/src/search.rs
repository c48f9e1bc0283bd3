//! Gap search drivers: the sequential reference scan and the chunked
//! parallel scan.
//!
//! Workers share the immutable detector slice read-only; the only
//! synchronized state is the "first gap found" signal (a relaxed stop
//! flag plus a bounded result channel).

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use lacuna_core::{Detector, Point};

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::row::row_gap;

/// Conventional tuning-frequency multiplier.
pub const TUNING_MULTIPLIER: i64 = 4_000_000;

/// Rows between progress events in the sequential scan.
const PROGRESS_INTERVAL: i64 = 1_000_000;

/// Scalar encoding of a located gap: `x * multiplier + y`.
///
/// With the conventional [`TUNING_MULTIPLIER`], the two coordinates of
/// any gap inside a bound up to the multiplier occupy disjoint digit
/// ranges and the encoding is unambiguous.
pub fn tuning_frequency(point: Point, multiplier: i64) -> i64 {
    point.x * multiplier + point.y
}

/// Scan rows `0..=max_coordinate` for the single uncovered position.
///
/// This is the reference driver: rows are visited in ascending order
/// and the first gap wins. Errors are explicit — an empty detector set
/// is rejected up front, and a scan that exhausts every row reports
/// [`ScanError::NoGapFound`] rather than defaulting to a sentinel
/// point.
pub fn locate_gap(detectors: &[Detector], max_coordinate: i64) -> Result<Point, ScanError> {
    if detectors.is_empty() {
        return Err(ScanError::NoDetectors);
    }
    log::debug!(
        "scanning rows [0, {max_coordinate}] across {} detectors",
        detectors.len()
    );
    for row in 0..=max_coordinate {
        if row > 0 && row % PROGRESS_INTERVAL == 0 {
            log::trace!("scanned up to row {row} of [0, {max_coordinate}]");
        }
        if let Some(gap) = row_gap(detectors, row, max_coordinate) {
            log::debug!("gap located at {gap}");
            return Ok(gap);
        }
    }
    Err(ScanError::NoGapFound { max_coordinate })
}

/// Scan rows `0..=max_coordinate` across a pool of worker threads.
///
/// Rows are split into contiguous chunks, one per worker; every worker
/// reads the same immutable detector slice. The first worker to find a
/// gap raises the stop flag, and the remaining workers abandon their
/// chunks at the next row boundary. If several workers report — only
/// possible for malformed multi-gap input — the lowest `(y, x)` result
/// wins, so every well-formed search returns exactly what
/// [`locate_gap`] would.
///
/// Searches too small to amortize thread startup (see
/// [`ScanConfig::min_rows_per_worker`]) fall back to the sequential
/// driver.
pub fn locate_gap_parallel(
    detectors: &[Detector],
    max_coordinate: i64,
    config: &ScanConfig,
) -> Result<Point, ScanError> {
    if detectors.is_empty() {
        return Err(ScanError::NoDetectors);
    }
    if max_coordinate < 0 {
        // Empty search region: nothing to scan.
        return Err(ScanError::NoGapFound { max_coordinate });
    }
    let rows = max_coordinate as u64 + 1;
    let max_useful = (rows / config.min_rows_per_worker.max(1)).max(1) as usize;
    let workers = config.resolved_worker_count().min(max_useful);
    if workers <= 1 {
        return locate_gap(detectors, max_coordinate);
    }

    let chunk = rows.div_ceil(workers as u64);
    let stop = AtomicBool::new(false);
    let (tx, rx) = crossbeam_channel::bounded::<Point>(workers);
    log::debug!(
        "scanning rows [0, {max_coordinate}] across {workers} workers, {chunk} rows per chunk"
    );

    let spawn_failure = thread::scope(|scope| {
        for w in 0..workers as u64 {
            let lo = w * chunk;
            if lo >= rows {
                break;
            }
            let hi = ((w + 1) * chunk).min(rows) - 1;
            let tx = tx.clone();
            let stop = &stop;
            let spawned = thread::Builder::new()
                .name(format!("lacuna-scan-{w}"))
                .spawn_scoped(scope, move || {
                    for row in lo..=hi {
                        if stop.load(Ordering::Relaxed) {
                            return;
                        }
                        if let Some(gap) = row_gap(detectors, row as i64, max_coordinate) {
                            stop.store(true, Ordering::Relaxed);
                            // Capacity covers one result per worker, so
                            // this send cannot block or be lost.
                            let _ = tx.try_send(gap);
                            return;
                        }
                    }
                });
            if let Err(e) = spawned {
                stop.store(true, Ordering::Relaxed);
                return Some(ScanError::WorkerSpawn {
                    reason: format!("scan worker {w}: {e}"),
                });
            }
        }
        None
    });
    drop(tx);
    if let Some(err) = spawn_failure {
        return Err(err);
    }

    match rx.try_iter().min_by_key(|p| (p.y, p.x)) {
        Some(gap) => {
            log::debug!("gap located at {gap}");
            Ok(gap)
        }
        None => Err(ScanError::NoGapFound { max_coordinate }),
    }
}
