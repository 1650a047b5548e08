//! # Shared separation aggregator
//!
//! A mutex-guarded accumulator folding angular distances from every worker into
//! `count`, `min`, `max` and a running mean.
//!
//! ## Overview
//! -----------------
//! * [`Aggregator::observe`] is the only operation available while workers run. The whole
//!   update (count, min, max, mean) happens under one lock acquisition.
//! * [`Aggregator::into_summary`] consumes the aggregator. Holding it by value means every
//!   borrow handed to the workers has ended, so the snapshot is taken after all of them
//!   completed.
//! * The result is a [`SeparationSummary`], or `None` when nothing was observed: the mean of
//!   zero values is undefined and the `±∞` sentinels are never exposed.
//!
//! ## Mean update
//! -----------------
//! The mean is maintained incrementally,
//!
//! ```text
//! mean ← mean + (x − mean) / count
//! ```
//!
//! which keeps full precision over hundreds of millions of observations where a plain
//! running sum would not.
use parking_lot::Mutex;

use crate::constants::{AngleUnit, Radian};

#[derive(Debug, Clone, Copy)]
struct RunningStats {
    count: u64,
    min: f64,
    max: f64,
    mean: f64,
}

impl RunningStats {
    const fn new() -> Self {
        RunningStats {
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            mean: 0.0,
        }
    }

    #[inline]
    fn push(&mut self, value: f64) {
        self.count += 1;
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
        self.mean += (value - self.mean) / self.count as f64;
    }
}

/// Thread-safe accumulator shared by all distance workers.
#[derive(Debug)]
pub struct Aggregator {
    state: Mutex<RunningStats>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Aggregator {
            state: Mutex::new(RunningStats::new()),
        }
    }

    /// Fold one angular distance into the statistics as a single locked transaction.
    #[inline]
    pub fn observe(&self, value: Radian) {
        debug_assert!(!value.is_nan(), "NaN folded into the aggregator");
        self.state.lock().push(value);
    }

    /// Final snapshot of the statistics.
    ///
    /// Return
    /// ----------
    /// * `Some(summary)` when at least one value was observed.
    /// * `None` otherwise; the aggregate is undefined for an empty run.
    pub fn into_summary(self) -> Option<SeparationSummary> {
        let stats = self.state.into_inner();
        (stats.count > 0).then_some(SeparationSummary {
            count: stats.count,
            min: stats.min,
            max: stats.max,
            mean: stats.mean,
        })
    }
}

/// Final statistics of a run, angles in **radians**.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparationSummary {
    pub count: u64,
    pub min: Radian,
    pub max: Radian,
    pub mean: Radian,
}

impl SeparationSummary {
    /// The same statistics expressed in `unit`.
    pub fn in_unit(&self, unit: AngleUnit) -> SeparationSummary {
        SeparationSummary {
            count: self.count,
            min: unit.from_radians(self.min),
            max: unit.from_radians(self.max),
            mean: unit.from_radians(self.mean),
        }
    }

    pub fn to_degrees(&self) -> SeparationSummary {
        self.in_unit(AngleUnit::Degrees)
    }
}
