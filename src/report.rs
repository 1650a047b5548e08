//! # Run report
//!
//! Outcome of a completed separation run and its plain-text rendering.
//!
//! ## Output
//! -----------------
//! The default rendering is the summary printed by the command line tool:
//!
//! ```text
//! Pairs compared: 6
//! Average distance found is 105.000000 deg
//! Minimum distance found is 90.000000 deg
//! Maximum distance found is 180.000000 deg
//! Time taken - 0.000213s (213µs)
//! ```
//!
//! When the catalog holds fewer than two points no pair exists; the three statistics are
//! printed as `undefined` instead of any sentinel value. The alternate flag (`{:#}`) appends
//! one line per worker.
use std::{fmt, time::Duration};

use crate::{
    aggregator::SeparationSummary, constants::AngleUnit, pair_worker::WorkerReport,
    progress_bar::fmt_dur,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Catalog size `N`
    pub point_count: usize,
    /// `None` when no pair was observed
    pub summary: Option<SeparationSummary>,
    /// One entry per worker, ordered by worker id
    pub workers: Vec<WorkerReport>,
    /// Wall-clock time of the whole computation
    pub elapsed: Duration,
}

impl RunReport {
    /// Number of pairs folded into the statistics.
    pub fn pair_count(&self) -> u64 {
        self.summary.map_or(0, |s| s.count)
    }

    /// Render the report with angles expressed in `unit`.
    pub fn display(&self, unit: AngleUnit) -> ReportDisplay<'_> {
        ReportDisplay { report: self, unit }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(AngleUnit::default()), f)
    }
}

/// Borrowed view of a [`RunReport`] bound to a display unit.
pub struct ReportDisplay<'a> {
    report: &'a RunReport,
    unit: AngleUnit,
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let suffix = self.unit.suffix();

        writeln!(f, "Pairs compared: {}", report.pair_count())?;
        match report.summary.map(|s| s.in_unit(self.unit)) {
            Some(s) => {
                writeln!(f, "Average distance found is {:.6} {suffix}", s.mean)?;
                writeln!(f, "Minimum distance found is {:.6} {suffix}", s.min)?;
                writeln!(f, "Maximum distance found is {:.6} {suffix}", s.max)?;
            }
            None => {
                writeln!(f, "Average distance found is undefined (fewer than two points)")?;
                writeln!(f, "Minimum distance found is undefined")?;
                writeln!(f, "Maximum distance found is undefined")?;
            }
        }
        write!(
            f,
            "Time taken - {:.6}s ({})",
            report.elapsed.as_secs_f64(),
            fmt_dur(report.elapsed)
        )?;

        if f.alternate() {
            for w in &report.workers {
                write!(
                    f,
                    "\n  worker {:>3}: {:>8} rows, {:>12} pairs, {}",
                    w.worker_id,
                    w.rows,
                    w.pairs,
                    fmt_dur(w.elapsed)
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod report_test {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn report(summary: Option<SeparationSummary>) -> RunReport {
        RunReport {
            point_count: 4,
            summary,
            workers: vec![WorkerReport {
                worker_id: 0,
                rows: 4,
                pairs: summary.map_or(0, |s| s.count),
                elapsed: Duration::from_micros(40),
            }],
            elapsed: Duration::from_micros(250),
        }
    }

    #[test]
    fn test_render_degrees() {
        let r = report(Some(SeparationSummary {
            count: 6,
            min: FRAC_PI_2,
            max: PI,
            mean: 105.0_f64.to_radians(),
        }));
        let text = r.to_string();
        assert!(text.contains("Pairs compared: 6"));
        assert!(text.contains("Average distance found is 105.000000 deg"));
        assert!(text.contains("Minimum distance found is 90.000000 deg"));
        assert!(text.contains("Maximum distance found is 180.000000 deg"));
        assert!(text.contains("Time taken - 0.000250s (250µs)"));
        assert!(!text.contains("worker"));
    }

    #[test]
    fn test_render_radians_with_workers() {
        let r = report(Some(SeparationSummary {
            count: 1,
            min: 1.0,
            max: 1.0,
            mean: 1.0,
        }));
        let text = format!("{:#}", r.display(AngleUnit::Radians));
        assert!(text.contains("Average distance found is 1.000000 rad"));
        assert!(text.contains("worker   0:"));
    }

    #[test]
    fn test_render_undefined() {
        let r = report(None);
        let text = r.to_string();
        assert_eq!(r.pair_count(), 0);
        assert!(text.contains("Pairs compared: 0"));
        assert!(text.contains("Average distance found is undefined"));
        assert!(!text.contains("inf"));
    }
}
