//! Scan driver configuration.

/// Configuration for [`locate_gap_parallel`](crate::search::locate_gap_parallel).
///
/// Controls the worker pool size and the search size below which the
/// scan stays on the calling thread.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Number of scan worker threads. `None` = auto-detect
    /// (`available_parallelism / 2`, clamped to `[2, 16]`).
    pub worker_count: Option<usize>,
    /// Minimum rows each worker must receive before the scan fans out.
    /// Searches smaller than `worker_count * min_rows_per_worker` run
    /// sequentially, where thread startup would otherwise dominate.
    /// Default: 1024.
    pub min_rows_per_worker: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            worker_count: None,
            min_rows_per_worker: 1024,
        }
    }
}

impl ScanConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`. Zero workers would
    /// leave the scan with no thread to run on.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                (cpus / 2).clamp(2, 16)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_worker_count_clamps_zero() {
        let cfg = ScanConfig {
            worker_count: Some(0),
            ..ScanConfig::default()
        };
        assert_eq!(cfg.resolved_worker_count(), 1);
    }

    #[test]
    fn resolved_worker_count_clamps_large() {
        let cfg = ScanConfig {
            worker_count: Some(200),
            ..ScanConfig::default()
        };
        assert_eq!(cfg.resolved_worker_count(), 64);
    }

    #[test]
    fn resolved_worker_count_auto() {
        let cfg = ScanConfig::default();
        let count = cfg.resolved_worker_count();
        assert!(
            (2..=16).contains(&count),
            "auto count {count} out of [2, 16]"
        );
    }
}
