//! # Row partitioning
//!
//! Splits the row indices `[0, N)` of a catalog into one contiguous slice per worker.
//!
//! ## Contract
//! -----------------
//! For `N` rows and `T ≥ 1` workers, [`partition_rows`] returns exactly `T`
//! [`WorkerTask`]s, ordered by `worker_id`, such that:
//!
//! * each task covers a contiguous half-open range `[start, end)`,
//! * consecutive tasks touch (`tasks[k].end == tasks[k + 1].start`),
//! * the first task starts at `0` and the last one ends at `N`.
//!
//! The ranges are therefore disjoint and exhaustive. Rows left over when `N` is not a
//! multiple of `T` are always assigned to some task; when `T > N` some tasks are empty.
//!
//! ## Strategies
//! -----------------
//! Row `i` owns the `N − 1 − i` pairs `(i, j)` with `j > i`, so equal row counts do not mean
//! equal work:
//!
//! * [`PartitionStrategy::EvenRows`] – row counts differ by at most one; the first
//!   `N mod T` tasks take one extra row.
//! * [`PartitionStrategy::BalancedPairs`] – boundaries are placed on the cumulative pair
//!   count so that each task owns about `N·(N−1)/(2T)` pairs.
use std::{fmt, ops::Range, str::FromStr};

use crate::angular_errors::AngularError;

/// Number of unordered pairs among `n` items, `n·(n−1)/2`.
#[inline]
pub fn unique_pairs(n: usize) -> u64 {
    let n = n as u64;
    n * n.saturating_sub(1) / 2
}

/// Row slice handed to a single worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerTask {
    pub worker_id: usize,
    /// First row, inclusive
    pub start: usize,
    /// Last row, exclusive
    pub end: usize,
}

impl WorkerTask {
    #[inline]
    pub fn rows(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of upper-triangle pairs owned by this task in a catalog of `n` rows.
    pub fn owned_pairs(&self, n: usize) -> u64 {
        // Pairs owned by rows [0, r) are P(n) − P(n − r).
        unique_pairs(n - self.start) - unique_pairs(n - self.end)
    }
}

/// How row boundaries are chosen, see the module documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionStrategy {
    EvenRows,
    #[default]
    BalancedPairs,
}

impl fmt::Display for PartitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionStrategy::EvenRows => write!(f, "even-rows"),
            PartitionStrategy::BalancedPairs => write!(f, "balanced-pairs"),
        }
    }
}

impl FromStr for PartitionStrategy {
    type Err = AngularError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "even-rows" | "even" => Ok(PartitionStrategy::EvenRows),
            "balanced-pairs" | "balanced" => Ok(PartitionStrategy::BalancedPairs),
            other => Err(AngularError::InvalidRunParameter(format!(
                "unknown partition strategy '{other}' (expected even-rows or balanced-pairs)"
            ))),
        }
    }
}

/// Split `[0, n)` into `workers` contiguous row ranges.
///
/// Arguments
/// -----------------
/// * `n` – number of catalog rows.
/// * `workers` – number of tasks to produce, must be at least 1.
/// * `strategy` – boundary placement policy.
///
/// Return
/// ----------
/// * Exactly `workers` tasks covering `[0, n)` without gap or overlap, or
///   [`AngularError::InvalidWorkerCount`] when `workers == 0`.
pub fn partition_rows(
    n: usize,
    workers: usize,
    strategy: PartitionStrategy,
) -> Result<Vec<WorkerTask>, AngularError> {
    if workers == 0 {
        return Err(AngularError::InvalidWorkerCount(0));
    }

    let mut bounds: Vec<usize> = Vec::new();
    bounds
        .try_reserve_exact(workers + 1)
        .map_err(|err| AngularError::AllocationFailed {
            what: "partition bounds",
            reason: err.to_string(),
        })?;

    match strategy {
        PartitionStrategy::EvenRows => even_row_bounds(n, workers, &mut bounds),
        PartitionStrategy::BalancedPairs => balanced_pair_bounds(n, workers, &mut bounds),
    }
    debug_assert_eq!(bounds.len(), workers + 1);

    Ok(bounds
        .windows(2)
        .enumerate()
        .map(|(worker_id, w)| WorkerTask {
            worker_id,
            start: w[0],
            end: w[1],
        })
        .collect())
}

fn even_row_bounds(n: usize, workers: usize, bounds: &mut Vec<usize>) {
    let base = n / workers;
    let remainder = n % workers;

    let mut cursor = 0;
    bounds.push(cursor);
    for k in 0..workers {
        cursor += base + usize::from(k < remainder);
        bounds.push(cursor);
    }
}

fn balanced_pair_bounds(n: usize, workers: usize, bounds: &mut Vec<usize>) {
    let total = unique_pairs(n) as u128;

    bounds.push(0);
    let mut row = 0usize;
    // Pairs owned by rows [0, row)
    let mut covered: u128 = 0;
    for k in 1..workers {
        let target = total * k as u128 / workers as u128;
        while row < n && covered < target {
            covered += (n - 1 - row) as u128;
            row += 1;
        }
        bounds.push(row);
    }
    bounds.push(n);
}
