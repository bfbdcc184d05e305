//! CLI administration tool for newscheck.
//!
//! Provides commands for inspecting the reference dataset of flagged
//! news sources without starting the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Validate the reference dataset
//! cargo run --bin admin -- dataset validate
//!
//! # Look up a URL or domain against the dataset
//! cargo run --bin admin -- dataset lookup https://100percentfedup.com/article
//!
//! # Show dataset statistics
//! cargo run --bin admin -- dataset stats
//!
//! # Point at a different CSV file
//! cargo run --bin admin -- dataset validate --path /tmp/sources.csv
//! ```
//!
//! # Environment Variables
//!
//! - `DATASET_PATH` (optional): path to the reference CSV; `--path` takes
//!   precedence, `data/unreliable_sources.csv` is the fallback
//!
//! # Features
//!
//! - **Validation**: Load the dataset and report parse errors with line numbers
//! - **Lookup**: Offline verdict for a URL or bare domain
//! - **Statistics**: Record counts broken down by reporting level and bias
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use newscheck::config::DEFAULT_DATASET_PATH;
use newscheck::infrastructure::dataset::SourceCatalog;
use newscheck::utils::domain_extractor::{DomainExtractionError, extract_domain, normalize_host};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use std::collections::BTreeMap;

/// CLI tool for managing newscheck.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Reference dataset operations
    Dataset {
        /// Path to the dataset CSV (overrides DATASET_PATH)
        #[arg(short, long, global = true)]
        path: Option<String>,

        #[command(subcommand)]
        action: DatasetAction,
    },
}

/// Dataset inspection subcommands.
#[derive(Subcommand)]
enum DatasetAction {
    /// Load the dataset and report whether it is usable
    Validate,

    /// Check a URL or bare domain against the dataset
    Lookup {
        /// URL (http/https) or bare domain, e.g. "usatoday.com.co"
        target: String,
    },

    /// Show record counts and breakdowns
    Stats,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dataset { path, action } => {
            let path = resolve_path(path);

            match action {
                DatasetAction::Validate => validate_dataset(&path),
                DatasetAction::Lookup { target } => {
                    let catalog = load_catalog(&path)?;
                    lookup_target(&catalog, &target)
                }
                DatasetAction::Stats => {
                    let catalog = load_catalog(&path)?;
                    show_stats(&catalog)
                }
            }
        }
    }
}

/// Resolves the dataset path from CLI flag, environment, or default.
fn resolve_path(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("DATASET_PATH").ok())
        .unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string())
}

fn load_catalog(path: &str) -> Result<SourceCatalog> {
    SourceCatalog::from_path(path).with_context(|| format!("Failed to load dataset from {path}"))
}

/// Loads the dataset and reports the result.
///
/// Exits non-zero when the file is missing or malformed; an empty but
/// well-formed dataset is reported as a warning.
fn validate_dataset(path: &str) -> Result<()> {
    println!("{}", "🔍 Validating reference dataset".bright_blue().bold());
    println!("  Path: {}", path.cyan());
    println!();

    match SourceCatalog::from_path(path) {
        Ok(catalog) => {
            if catalog.is_empty() {
                println!(
                    "{}",
                    "⚠️  Dataset loaded but contains no records".yellow().bold()
                );
            } else {
                println!("{}", "✅ Dataset OK".green().bold());
            }
            println!(
                "  Records: {}",
                catalog.len().to_string().bright_white().bold()
            );
            println!();

            Ok(())
        }
        Err(e) => {
            println!("{}", "❌ Dataset invalid".red().bold());
            println!();

            Err(e.into())
        }
    }
}

/// Prints the offline verdict for a URL or bare domain.
///
/// # Lookup
///
/// - HTTP/HTTPS URLs go through the same domain extraction as the
///   `/check` endpoint
/// - Inputs that do not parse as URLs are treated as bare host names
/// - Non-HTTP protocols are rejected
fn lookup_target(catalog: &SourceCatalog, target: &str) -> Result<()> {
    let domain = resolve_domain(target)?;

    println!("{}", "🔎 Dataset Lookup".bright_blue().bold());
    println!();
    println!("  Input:  {}", target.bright_black());
    println!("  Domain: {}", domain.cyan());
    println!();

    match catalog.lookup(&domain) {
        Some(record) => {
            println!("{}", "⚠️  FLAGGED as unreliable".red().bold());
            println!();
            println!(
                "  Publisher:         {}",
                record.publisher_name.bright_white()
            );
            println!("  Factual reporting: {}", record.factual_reporting.yellow());
            println!("  Bias:              {}", record.bias.yellow());
            println!("  Source:            {}", record.source_url.bright_black());
        }
        None => {
            println!("{}", "✅ Not in the flagged dataset".green().bold());
        }
    }
    println!();

    Ok(())
}

/// Maps CLI input to a normalized dataset key.
fn resolve_domain(target: &str) -> Result<String> {
    match extract_domain(target) {
        Ok(domain) => Ok(domain),
        Err(DomainExtractionError::UnsupportedProtocol) => {
            bail!("Only HTTP and HTTPS URLs can be checked")
        }
        // Bare domains fail URL parsing, treat the input as a host name.
        Err(DomainExtractionError::InvalidFormat(_)) => {
            let domain = normalize_host(target.trim());
            if domain.is_empty() {
                bail!("Empty domain");
            }
            Ok(domain)
        }
    }
}

/// Displays dataset statistics.
///
/// Shows:
/// - Total number of records
/// - Breakdown by factual-reporting level
/// - Breakdown by bias label
fn show_stats(catalog: &SourceCatalog) -> Result<()> {
    println!("{}", "📊 Dataset Statistics".bright_blue().bold());
    println!();
    println!(
        "  Records: {}",
        catalog.len().to_string().bright_green().bold()
    );
    println!();

    if catalog.is_empty() {
        println!("{}", "  No records loaded".yellow());
        println!();
        return Ok(());
    }

    print_breakdown(
        "By factual reporting",
        catalog.records().map(|r| r.factual_reporting.as_str()),
    );
    print_breakdown("By bias", catalog.records().map(|r| r.bias.as_str()));

    Ok(())
}

/// Prints a sorted value-to-count table for one record field.
fn print_breakdown<'a>(title: &str, values: impl Iterator<Item = &'a str>) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    println!("  {}", title.bright_white().bold());
    for (value, count) in &counts {
        println!("    {:<28} {}", value, count.to_string().bright_green());
    }
    println!();
}
