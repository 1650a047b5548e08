//! Run progress and duration formatting.
//!
//! Components
//! -----------------
//! * [`fmt_dur`] – Human-readable formatter for [`Duration`] values,
//!   producing strings like `"253µs"`, `"42ms"`, or `"3.14s"` depending
//!   on the scale.
//!
//! * [`RowProgress`] – Row counter shared by every distance worker. With the
//!   `progress` feature it drives an `indicatif` bar advanced once per finished
//!   row; without it every call is a no-op.
use std::time::Duration;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

#[inline]
pub fn fmt_dur(d: Duration) -> String {
    let us = d.as_micros();
    if us < 1_000 {
        format!("{us}µs")
    } else {
        let ms = d.as_millis();
        if ms < 1_000 {
            format!("{ms}ms")
        } else {
            let s = d.as_secs_f32();
            format!("{s:.2}s")
        }
    }
}

/// Progress handle shared by reference across worker threads.
#[derive(Default)]
pub struct RowProgress {
    #[cfg(feature = "progress")]
    bar: Option<ProgressBar>,
}

impl RowProgress {
    /// Create a progress handle for `total_rows` rows; `enabled == false` yields a silent handle.
    #[cfg(feature = "progress")]
    pub fn new(total_rows: u64, enabled: bool) -> Self {
        if !enabled {
            return RowProgress { bar: None };
        }

        let pb = ProgressBar::new(total_rows.max(1));
        let style = ProgressStyle::with_template(
            "{bar:40.cyan/blue} {pos}/{len} rows ({percent:>3}%) | {per_sec} | ETA {eta_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(200));
        RowProgress { bar: Some(pb) }
    }

    #[cfg(not(feature = "progress"))]
    pub fn new(_total_rows: u64, enabled: bool) -> Self {
        if enabled {
            tracing::warn!("progress display requested but the `progress` feature is disabled");
        }
        RowProgress {}
    }

    #[cfg(feature = "progress")]
    #[inline]
    pub fn row_done(&self) {
        if let Some(pb) = &self.bar {
            pb.inc(1);
        }
    }

    #[cfg(not(feature = "progress"))]
    #[inline]
    pub fn row_done(&self) {}

    #[cfg(feature = "progress")]
    pub fn finish(&self) {
        if let Some(pb) = &self.bar {
            pb.disable_steady_tick();
            pb.finish_and_clear();
        }
    }

    #[cfg(not(feature = "progress"))]
    pub fn finish(&self) {}
}

#[cfg(test)]
mod progress_bar_test {
    use super::*;

    #[test]
    fn test_fmt_dur_scales() {
        assert_eq!(fmt_dur(Duration::from_micros(253)), "253µs");
        assert_eq!(fmt_dur(Duration::from_millis(42)), "42ms");
        assert_eq!(fmt_dur(Duration::from_millis(3_140)), "3.14s");
    }

    #[test]
    fn test_disabled_progress_is_silent() {
        let progress = RowProgress::new(10, false);
        for _ in 0..10 {
            progress.row_done();
        }
        progress.finish();
    }
}
