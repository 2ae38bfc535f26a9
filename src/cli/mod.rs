//! Command-line interface for contact-dedup.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **find**: Score every pair of contacts in a file and report likely duplicates
//! - **compare**: Show the per-field score breakdown for two contacts
//!
//! ## Usage
//!
//! ```text
//! # Write all pairs to a results file
//! contact-dedup find contacts.csv -o results.csv
//!
//! # Only show likely duplicates, as JSON
//! contact-dedup find contacts.csv --min-accuracy medium --format json
//!
//! # Read from a pipe
//! zcat contacts.csv.gz | contact-dedup find -
//!
//! # Explain why two contacts were classified the way they were
//! contact-dedup compare contacts.csv 1001 1042
//! ```

use clap::{Parser, Subcommand};

use crate::core::types::Accuracy;

pub mod compare;
pub mod find;

#[derive(Parser)]
#[command(name = "contact-dedup")]
#[command(version)]
#[command(about = "Find likely duplicate contacts by weighted pairwise similarity")]
#[command(
    long_about = "contact-dedup compares every pair of contacts in a CSV file and classifies each pair as a High, Medium or Low confidence duplicate.\n\nScores combine exact email and postal code matches with similarity of email, first name, last name and address."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every pair of contacts in a file
    Find(find::FindArgs),

    /// Show the score breakdown for two contacts
    Compare(compare::CompareArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Accuracy tier as a command-line value
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum AccuracyArg {
    Low,
    Medium,
    High,
}

impl From<AccuracyArg> for Accuracy {
    fn from(arg: AccuracyArg) -> Self {
        match arg {
            AccuracyArg::Low => Accuracy::Low,
            AccuracyArg::Medium => Accuracy::Medium,
            AccuracyArg::High => Accuracy::High,
        }
    }
}
