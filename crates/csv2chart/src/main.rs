// File: crates/csv2chart/src/main.rs
// Summary: CLI that converts CSV files into heat charts and prints a summary per file.

use anyhow::{Context, Result};
use clap::Parser;
use csv2chart_core::config::{DEFAULT_COMMENT, LEGEND_TICK_COUNT};
use csv2chart_core::{HeatChart, LoaderOptions, PaintScale};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "csv2chart")]
#[command(version, about = "Convert CSV files with inline csv2chart directives into heat charts", long_about = None)]
struct Cli {
    /// Field separator (a single ASCII character)
    #[arg(short, long, default_value_t = ',', value_parser = parse_separator)]
    separator: char,

    /// Prefix that marks comment/directive lines
    #[arg(short, long, default_value = DEFAULT_COMMENT)]
    comment: String,

    /// CSV files to convert
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn parse_separator(s: &str) -> Result<char, String> {
    let s = if s == "\\t" { "\t" } else { s };
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(format!("expected a single ASCII character, got `{s}`")),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = LoaderOptions::new(cli.separator as u8, cli.comment);

    let failed = run(&cli.files, &options);
    if failed > 0 {
        tracing::warn!(failed, total = cli.files.len(), "some files could not be converted");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Convert every file; one failure does not stop the batch.
/// Returns the number of files that failed.
fn run(files: &[PathBuf], options: &LoaderOptions) -> usize {
    let mut failed = 0usize;
    for path in files {
        match convert(path, options) {
            Ok(chart) => print_summary(path, &chart),
            Err(err) => {
                tracing::error!(path = %path.display(), "{err:#}");
                failed += 1;
            }
        }
    }
    failed
}

fn convert(path: &Path, options: &LoaderOptions) -> Result<HeatChart> {
    HeatChart::from_path(path, options).with_context(|| format!("failed to convert '{}'", path.display()))
}

fn print_summary(path: &Path, chart: &HeatChart) {
    let scale = chart.scale();
    println!("{}", path.display());
    println!("  title:   {}", chart.title.as_deref().unwrap_or("-"));
    println!("  headers: {} row(s), {} column(s)", chart.header_rows, chart.header_columns);
    println!("  points:  {}", chart.plot.dataset.len());
    println!("  z:       [{:.4}, {:.4}]", chart.z_extent.0, chart.z_extent.1);
    for (name, axis) in [("rows", chart.vertical_axis()), ("columns", chart.horizontal_axis())] {
        println!(
            "  {name:<8} {} [{:.4}, {:.4}]",
            axis.label.as_deref().unwrap_or("-"),
            axis.min,
            axis.max
        );
    }
    println!(
        "  scale:   {} [{:.4}, {:.4}]",
        scale.shape_name(),
        scale.lower_bound(),
        scale.upper_bound()
    );
    match &chart.legend {
        Some(legend) => {
            let ticks = legend
                .axis
                .ticks(LEGEND_TICK_COUNT)
                .iter()
                .map(|&v| format!("{v:.4}={}", scale.paint(v)))
                .collect::<Vec<_>>()
                .join(" ");
            println!("  legend:  {} {ticks}", legend.axis.label.as_deref().unwrap_or("-"));
        }
        None => println!("  legend:  off"),
    }
}
