//! Find command - score every pair of contacts in a file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{AccuracyArg, OutputFormat};
use crate::core::types::Accuracy;
use crate::matching::engine::{DuplicateFinder, FinderStats, MatchResult, MatchingConfig};
use crate::parsing::contacts::read_contacts_file;
use crate::parsing::results::{write_results, write_results_file};
use crate::utils::validation::{pair_count, parse_delimiter};

#[derive(Args)]
pub struct FindArgs {
    /// Contacts file (CSV with a header row, optionally .gz)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Write results as CSV to this file ('-' for stdout) instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Field delimiter of the input file (a character, or tab/comma/semicolon/pipe)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Only report pairs at or above this accuracy
    #[arg(long, value_enum)]
    pub min_accuracy: Option<AccuracyArg>,
}

/// Execute the find command
///
/// # Errors
///
/// Returns an error if the input cannot be read or the results cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FindArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let contacts = read_contacts_file(&args.input, args.delimiter)
        .with_context(|| format!("Failed to read contacts from {}", args.input.display()))?;

    if verbose {
        eprintln!(
            "Read {} contacts ({} pairs to compare)",
            contacts.len(),
            pair_count(contacts.len())
        );
    }

    let finder = DuplicateFinder::new();
    let (results, stats) = finder.find_duplicates_with_stats(&contacts);

    if !matches!(format, OutputFormat::Json) || verbose {
        eprintln!(
            "Sequential execution time: {} seconds",
            stats.elapsed.as_secs_f64()
        );
    }
    if stats.pairs_skipped > 0 {
        eprintln!(
            "Warning: {} pairs could not be scored and were left out",
            stats.pairs_skipped
        );
    }

    let min_accuracy = args.min_accuracy.map(Accuracy::from);
    let results: Vec<MatchResult> = results
        .into_iter()
        .filter(|r| min_accuracy.map_or(true, |min| r.accuracy >= min))
        .collect();

    if let Some(path) = &args.output {
        write_results_file(path, &results, b',')
            .with_context(|| format!("Failed to write results to {}", path.display()))?;
        if verbose {
            eprintln!("Wrote {} results to {}", results.len(), path.display());
        }
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&results, &stats),
        OutputFormat::Json => {
            print_json_results(&results, &stats, finder.config(), min_accuracy)?;
        }
        OutputFormat::Tsv => write_results(std::io::stdout().lock(), &results, b'\t')?,
    }

    Ok(())
}

fn print_text_results(results: &[MatchResult], stats: &FinderStats) {
    let (high, medium, low) = tier_counts(results);

    println!("Duplicate Search Results");
    println!("{}", "=".repeat(60));
    println!("  Contacts: {}", stats.contacts);
    println!("  Pairs compared: {}", stats.pairs_compared);
    if stats.pairs_skipped > 0 {
        println!("  Pairs skipped: {}", stats.pairs_skipped);
    }
    println!("  High: {high}  Medium: {medium}  Low: {low}");

    if results.is_empty() {
        println!("\nNo pairs to report.");
        return;
    }

    println!("\n{:<20} {:<20} Accuracy", "Source", "Match");
    println!("{}", "-".repeat(60));
    for r in results {
        println!("{:<20} {:<20} {}", r.source, r.matched, r.accuracy);
    }
}

fn print_json_results(
    results: &[MatchResult],
    stats: &FinderStats,
    config: &MatchingConfig,
    min_accuracy: Option<Accuracy>,
) -> anyhow::Result<()> {
    let (high, medium, low) = tier_counts(results);

    let output = serde_json::json!({
        "contacts": stats.contacts,
        "pairs_compared": stats.pairs_compared,
        "pairs_skipped": stats.pairs_skipped,
        "elapsed_seconds": stats.elapsed.as_secs_f64(),
        "min_accuracy": min_accuracy,
        "config": config,
        "counts": {
            "High": high,
            "Medium": medium,
            "Low": low,
        },
        "results": results,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn tier_counts(results: &[MatchResult]) -> (usize, usize, usize) {
    results
        .iter()
        .fold((0, 0, 0), |(high, medium, low), r| match r.accuracy {
            Accuracy::High => (high + 1, medium, low),
            Accuracy::Medium => (high, medium + 1, low),
            Accuracy::Low => (high, medium, low + 1),
        })
}
