//! CLI argument definitions for findangular

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};
use findangular::{
    catalog::LoaderOptions,
    constants::{AngleUnit, DEFAULT_CATALOG_PATH},
    partition::PartitionStrategy,
};

#[derive(Parser, Debug)]
#[command(name = "findangular")]
#[command(about = "Minimum, maximum and mean angular separation over every pair of catalog stars")]
#[command(version)]
pub struct Cli {
    /// Number of worker threads (must be at least 1)
    #[arg(short = 't', long = "threads", default_value_t = 1, allow_negative_numbers = true)]
    pub threads: i64,

    /// Catalog file, one `id ra dec` record per line
    #[arg(short, long, default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: Utf8PathBuf,

    /// Field delimiter: `space`, `tab`, `comma`, or any single ASCII character
    #[arg(long, default_value = "space", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Refuse catalogs holding more than N records
    #[arg(long)]
    pub max_records: Option<usize>,

    /// Row partitioning strategy (`even-rows` or `balanced-pairs`)
    #[arg(long, default_value_t = PartitionStrategy::default())]
    pub partition: PartitionStrategy,

    /// Unit used to print the separations (`degrees` or `radians`)
    #[arg(long, default_value_t = AngleUnit::default())]
    pub unit: AngleUnit,

    /// Show a progress bar while pairs are scanned
    #[arg(long)]
    pub progress: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print one timing line per worker after the summary
    #[arg(long)]
    pub per_worker: bool,
}

impl Cli {
    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            delimiter: self.delimiter,
            max_records: self.max_records,
            ..LoaderOptions::default()
        }
    }

    /// Level used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "space" => Ok(b' '),
        "tab" | "\\t" => Ok(b'\t'),
        "comma" => Ok(b','),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(format!(
                "delimiter must be space, tab, comma or a single ASCII character, got '{s}'"
            )),
        },
    }
}
