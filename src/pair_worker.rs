//! # Distance worker
//!
//! Per-thread routine that scans the pairs owned by one [`WorkerTask`].
//!
//! ## Pair ownership
//! -----------------
//! The worker owning row `i` evaluates exactly the pairs `(i, j)` with `j > i`: the upper
//! triangle of the distance matrix, row by row. Since row ranges are disjoint and cover the
//! catalog, every unordered pair `{i, j}` belongs to exactly one row of exactly one task.
//! No shared "already computed" structure is needed and the diagonal is never visited.
//!
//! ## Failure
//! -----------------
//! A non-finite distance stops the worker with [`AngularError::NonFiniteDistance`] before the
//! value reaches the [`Aggregator`]. The orchestrator then fails the whole run.
use std::time::{Duration, Instant};

use tracing::debug;

use crate::{
    aggregator::Aggregator,
    angular_errors::AngularError,
    catalog::{Catalog, Point},
    constants::Radian,
    partition::WorkerTask,
    progress_bar::RowProgress,
};

/// What a worker did, returned once its range is exhausted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkerReport {
    pub worker_id: usize,
    pub rows: usize,
    pub pairs: u64,
    pub elapsed: Duration,
}

/// Scan every pair owned by `task` and fold each distance into `aggregator`.
///
/// Arguments
/// -----------------
/// * `task` – row range and worker id.
/// * `catalog` – the full catalog, read-only.
/// * `aggregator` – shared statistics, one `observe` per pair.
/// * `metric` – distance between two points, in radians.
/// * `progress` – advanced once per completed row.
///
/// Return
/// ----------
/// * A [`WorkerReport`] with the number of rows and pairs processed, or
///   [`AngularError::NonFiniteDistance`] for the first pair whose distance is not finite.
///
/// Panics
/// ----------
/// * If the task range extends past the end of the catalog.
pub fn run_distance_worker<F>(
    task: &WorkerTask,
    catalog: &Catalog,
    aggregator: &Aggregator,
    metric: &F,
    progress: &RowProgress,
) -> Result<WorkerReport, AngularError>
where
    F: Fn(&Point, &Point) -> Radian + ?Sized,
{
    let started = Instant::now();
    let points = catalog.points();
    let mut pairs = 0u64;

    for row in task.rows() {
        let anchor = &points[row];
        for (offset, other) in points[row + 1..].iter().enumerate() {
            let distance = metric(anchor, other);
            if !distance.is_finite() {
                return Err(AngularError::NonFiniteDistance {
                    row,
                    column: row + 1 + offset,
                });
            }
            aggregator.observe(distance);
            pairs += 1;
        }
        progress.row_done();
    }

    let report = WorkerReport {
        worker_id: task.worker_id,
        rows: task.len(),
        pairs,
        elapsed: started.elapsed(),
    };
    debug!(
        worker = report.worker_id,
        rows = report.rows,
        pairs = report.pairs,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "distance worker finished"
    );
    Ok(report)
}
