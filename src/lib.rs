//! Exhaustive great-circle separation statistics over a star catalog.
//!
//! Every unordered pair of catalog points is visited exactly once, split across a fixed
//! number of worker threads, and folded into a single minimum / maximum / mean summary.
//! See [`orchestrator::compute_separation_stats`] for the entry point.
pub mod aggregator;
pub mod angular_errors;
pub mod catalog;
pub mod constants;
pub mod orchestrator;
pub mod pair_worker;
pub mod partition;
pub mod progress_bar;
pub mod report;
pub mod run_params;
pub mod separation;

pub use angular_errors::AngularError;
pub use catalog::{Catalog, LoaderOptions, Point};
pub use orchestrator::{compute_separation_stats, compute_with_metric};
pub use report::RunReport;
pub use run_params::RunParams;
