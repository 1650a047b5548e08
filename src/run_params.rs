//! # Run configuration
//!
//! [`RunParams`] gathers every knob of a separation run and is built through
//! [`RunParamsBuilder`], which validates the values on [`RunParamsBuilder::build`].
//!
//! ## Parameters
//! -----------------
//! * `workers` – number of worker threads, at least 1. Zero or negative counts are rejected,
//!   never coerced.
//! * `partition` – row boundary policy, see [`PartitionStrategy`].
//! * `progress` – display a progress bar (requires the `progress` feature).
//!
//! ## Example
//! -----------------
//! ```rust
//! use findangular::run_params::RunParams;
//! use findangular::partition::PartitionStrategy;
//!
//! let params = RunParams::builder()
//!     .workers(4)
//!     .partition(PartitionStrategy::EvenRows)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.workers.get(), 4);
//!
//! assert!(RunParams::builder().workers(0).build().is_err());
//! ```
use std::{fmt, num::NonZeroUsize, str::FromStr};

use crate::{angular_errors::AngularError, constants::DEFAULT_WORKERS, partition::PartitionStrategy};

/// Validated worker count (`>= 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerCount(NonZeroUsize);

impl WorkerCount {
    /// Validate a raw, possibly negative, worker count.
    pub fn new(count: i64) -> Result<Self, AngularError> {
        usize::try_from(count)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(WorkerCount)
            .ok_or(AngularError::InvalidWorkerCount(count))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for WorkerCount {
    fn default() -> Self {
        WorkerCount(NonZeroUsize::new(DEFAULT_WORKERS).unwrap_or(NonZeroUsize::MIN))
    }
}

impl FromStr for WorkerCount {
    type Err = AngularError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count: i64 = s.trim().parse().map_err(|_| {
            AngularError::InvalidRunParameter(format!("worker count '{s}' is not an integer"))
        })?;
        WorkerCount::new(count)
    }
}

impl fmt::Display for WorkerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunParams {
    pub workers: WorkerCount,
    pub partition: PartitionStrategy,
    pub progress: bool,
}

impl RunParams {
    pub fn builder() -> RunParamsBuilder {
        RunParamsBuilder::new()
    }
}

#[derive(Debug, Clone)]
pub struct RunParamsBuilder {
    workers: i64,
    partition: PartitionStrategy,
    progress: bool,
}

impl Default for RunParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RunParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            workers: DEFAULT_WORKERS as i64,
            partition: PartitionStrategy::default(),
            progress: false,
        }
    }

    pub fn workers(mut self, v: i64) -> Self {
        self.workers = v;
        self
    }

    pub fn partition(mut self, v: PartitionStrategy) -> Self {
        self.partition = v;
        self
    }

    pub fn progress(mut self, v: bool) -> Self {
        self.progress = v;
        self
    }

    pub fn build(self) -> Result<RunParams, AngularError> {
        Ok(RunParams {
            workers: WorkerCount::new(self.workers)?,
            partition: self.partition,
            progress: self.progress,
        })
    }
}

impl fmt::Display for RunParams {
    /// Compact by default; multi-line when using the alternate flag (`{:#}`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Separation run parameters")?;
            writeln!(f, "-------------------------")?;
            writeln!(f, "workers   : {}", self.workers)?;
            writeln!(f, "partition : {}", self.partition)?;
            write!(f, "progress  : {}", self.progress)
        } else {
            write!(
                f,
                "workers={}, partition={}, progress={}",
                self.workers, self.partition, self.progress
            )
        }
    }
}
