//! findangular: exhaustive pairwise angular separation over a star catalog.
//!
//! Usage: `findangular [-t <threads>] [-c <catalog>] [--unit degrees|radians] [-v]`

mod cli;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use findangular::{compute_separation_stats, Catalog, RunParams};

fn init_tracing(level: &str) {
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_thread_names(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let params = RunParams::builder()
        .workers(cli.threads)
        .partition(cli.partition)
        .progress(cli.progress)
        .build()
        .context("invalid run parameters")?;
    info!("{params:#}");

    let catalog = Catalog::from_file(&cli.catalog, &cli.loader_options())
        .with_context(|| format!("failed to load catalog {}", cli.catalog))?;
    println!("{} records read", catalog.len());

    let report = compute_separation_stats(&catalog, &params)
        .context("separation run failed")?;

    if cli.per_worker {
        println!("{:#}", report.display(cli.unit));
    } else {
        println!("{}", report.display(cli.unit));
    }
    Ok(())
}
