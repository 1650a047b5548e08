//! # Parallel separation run
//!
//! Entry points that drive a full exhaustive run over a [`Catalog`].
//!
//! ## Overview
//! -----------------
//! 1. The catalog rows are split into one [`WorkerTask`](crate::partition::WorkerTask) per worker
//!    ([`partition_rows`]).
//! 2. One OS thread per task runs [`run_distance_worker`] inside a
//!    [`std::thread::scope`]; all of them borrow the catalog and the shared [`Aggregator`].
//! 3. Every thread is joined. Only once the scope has closed is the aggregator consumed
//!    into a [`SeparationSummary`](crate::aggregator::SeparationSummary).
//!
//! Workers are never cancelled and have no timeout.
//!
//! ## Error Semantics
//! -----------------
//! The run is all-or-nothing. If any worker panics, fails to spawn, or reports a
//! non-finite distance, the whole run returns an error after every spawned thread has been
//! joined, and no statistic is produced. A panic never happens while the aggregator lock is
//! held (the metric runs outside of it), so the lock is never left in a half-updated state.
//!
//! ## Example
//! -----------------
//! ```rust
//! use findangular::catalog::{Catalog, Point};
//! use findangular::orchestrator::compute_separation_stats;
//! use findangular::run_params::RunParams;
//!
//! let catalog = Catalog::from_points(vec![
//!     Point::new(1, 0.0, 0.0),
//!     Point::new(2, 90.0, 0.0),
//!     Point::new(3, 180.0, 0.0),
//!     Point::new(4, 0.0, 90.0),
//! ]);
//! let params = RunParams::builder().workers(4).build().unwrap();
//! let report = compute_separation_stats(&catalog, &params).unwrap();
//!
//! let summary = report.summary.unwrap().to_degrees();
//! assert_eq!(summary.count, 6);
//! assert!((summary.max - 180.0).abs() < 1e-9);
//! ```
use std::{any::Any, thread, time::Instant};

use tracing::{error, info, warn};

use crate::{
    aggregator::Aggregator,
    angular_errors::AngularError,
    catalog::{Catalog, Point},
    constants::Radian,
    pair_worker::{run_distance_worker, WorkerReport},
    partition::partition_rows,
    progress_bar::{fmt_dur, RowProgress},
    report::RunReport,
    run_params::RunParams,
};

/// Great-circle separation statistics over every unordered pair of `catalog`.
///
/// Arguments
/// -----------------
/// * `catalog` – the points to compare.
/// * `params` – worker count, partition strategy, progress display.
///
/// Return
/// ----------
/// * A [`RunReport`]; its summary is `None` when the catalog has fewer than two points.
///
/// See also
/// ------------
/// * [`compute_with_metric`] – Same engine with a caller-supplied distance.
pub fn compute_separation_stats(
    catalog: &Catalog,
    params: &RunParams,
) -> Result<RunReport, AngularError> {
    compute_with_metric(catalog, params, |a: &Point, b: &Point| a.separation(b))
}

/// Run the pairwise engine with an arbitrary distance function.
///
/// `metric` is called exactly once for every unordered pair `{i, j}` (`i ≠ j`), from
/// whichever worker owns row `min(i, j)`, with the lower-index point first.
pub fn compute_with_metric<F>(
    catalog: &Catalog,
    params: &RunParams,
    metric: F,
) -> Result<RunReport, AngularError>
where
    F: Fn(&Point, &Point) -> Radian + Sync,
{
    let started = Instant::now();
    let tasks = partition_rows(catalog.len(), params.workers.get(), params.partition)?;

    info!(
        points = catalog.len(),
        pairs = catalog.pair_count(),
        "starting separation run ({params})"
    );
    for task in tasks.iter().filter(|t| t.is_empty()) {
        warn!(worker = task.worker_id, "worker has no rows assigned");
    }

    let aggregator = Aggregator::new();
    let progress = RowProgress::new(catalog.len() as u64, params.progress);

    let (outcomes, spawn_error) = thread::scope(|scope| {
        let aggregator = &aggregator;
        let metric = &metric;
        let progress = &progress;

        let mut handles = Vec::with_capacity(tasks.len());
        let mut spawn_error = None;
        for task in &tasks {
            let spawned = thread::Builder::new()
                .name(format!("pair-worker-{}", task.worker_id))
                .spawn_scoped(scope, move || {
                    run_distance_worker(task, catalog, aggregator, metric, progress)
                });
            match spawned {
                Ok(handle) => handles.push((task.worker_id, handle)),
                Err(source) => {
                    spawn_error = Some(AngularError::WorkerSpawn {
                        worker_id: task.worker_id,
                        source,
                    });
                    break;
                }
            }
        }

        // Completion barrier: every spawned worker is joined, even after a failure.
        let outcomes: Vec<Result<WorkerReport, AngularError>> = handles
            .into_iter()
            .map(|(worker_id, handle)| {
                handle
                    .join()
                    .map_err(|payload| AngularError::WorkerPanicked {
                        worker_id,
                        message: panic_message(payload.as_ref()),
                    })
                    .and_then(|outcome| outcome)
            })
            .collect();
        (outcomes, spawn_error)
    });
    progress.finish();

    if let Some(err) = spawn_error {
        error!("{err}");
        return Err(err);
    }

    let mut workers = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            Ok(report) => workers.push(report),
            Err(err) => {
                error!("separation run aborted: {err}");
                return Err(err);
            }
        }
    }

    let summary = aggregator.into_summary();
    let elapsed = started.elapsed();
    let report = RunReport {
        point_count: catalog.len(),
        summary,
        workers,
        elapsed,
    };
    debug_assert_eq!(report.pair_count(), catalog.pair_count());

    info!(
        pairs = report.pair_count(),
        "separation run finished in {}",
        fmt_dur(elapsed)
    );
    Ok(report)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
