use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::contact::{fields, Contact, ContactRecord};
use crate::matching::scoring::{MatchScore, ScoringWeights};
use crate::parsing::contacts::read_contacts_file;
use crate::utils::validation::parse_delimiter;

#[derive(Args)]
pub struct CompareArgs {
    /// Contacts file (CSV with a header row, optionally .gz)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Contact ID of the first contact
    #[arg(required = true)]
    pub id_a: String,

    /// Contact ID of the second contact
    #[arg(required = true)]
    pub id_b: String,

    /// Field delimiter of the input file
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

/// Execute the compare command
///
/// # Errors
///
/// Returns an error if the input cannot be read, either ID is not found, or
/// a contact is missing a required column.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records = read_contacts_file(&args.input, args.delimiter)
        .with_context(|| format!("Failed to read contacts from {}", args.input.display()))?;

    if verbose {
        eprintln!("Read {} contacts", records.len());
    }

    let contact_a = find_contact(&records, &args.id_a)?;
    let contact_b = find_contact(&records, &args.id_b)?;

    let score = MatchScore::calculate(&contact_a, &contact_b)
        .with_context(|| format!("Failed to score {} against {}", args.id_a, args.id_b))?;

    match format {
        OutputFormat::Text => print_text_comparison(&contact_a, &contact_b, &score),
        OutputFormat::Json => print_json_comparison(&contact_a, &contact_b, &score)?,
        OutputFormat::Tsv => print_tsv_comparison(&contact_a, &contact_b, &score),
    }

    Ok(())
}

/// First contact in file order with the given ID
fn find_contact(records: &[ContactRecord], id: &str) -> anyhow::Result<Contact> {
    let record = records
        .iter()
        .find(|r| r.get(fields::CONTACT_ID).is_some_and(|v| v == id))
        .ok_or_else(|| anyhow::anyhow!("Contact '{id}' not found"))?;

    Contact::from_record(record).with_context(|| format!("Contact '{id}' cannot be scored"))
}

fn print_text_comparison(a: &Contact, b: &Contact, score: &MatchScore) {
    let weights = ScoringWeights::default();

    println!("Comparison Results");
    println!("{}", "=".repeat(60));

    for (label, contact) in [("A", a), ("B", b)] {
        println!("\nContact {label}: {}", contact.id);
        println!("  Email: {}", contact.email);
        println!("  Name: {} {}", contact.first_name, contact.last_name);
        println!("  Address: {}", contact.address);
        println!("  Postal code: {}", contact.postal_zip);
    }

    let email_max = if score.email_exact {
        weights.email_exact
    } else {
        weights.email_similarity
    };

    println!("\nField Scores:");
    println!(
        "  Email: {:.2} / {:.0}{}",
        score.email,
        email_max,
        if score.email_exact { " (exact)" } else { "" }
    );
    println!("  First name: {:.2} / {:.0}", score.first_name, weights.first_name);
    println!("  Last name: {:.2} / {:.0}", score.last_name, weights.last_name);
    println!("  Address: {:.2} / {:.0}", score.address, weights.address);
    println!(
        "  Postal code: {:.2} / {:.0}",
        score.postal_zip, weights.postal_zip_exact
    );
    println!("  Total: {:.2}", score.total);
    println!("  Accuracy: {}", score.accuracy);
}

fn print_json_comparison(a: &Contact, b: &Contact, score: &MatchScore) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "contact_a": a,
        "contact_b": b,
        "score": score,
        "weights": ScoringWeights::default(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_comparison(a: &Contact, b: &Contact, score: &MatchScore) {
    println!("source\tmatch\temail\tfirst_name\tlast_name\taddress\tpostal_zip\ttotal\taccuracy");
    println!(
        "{}\t{}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{}",
        a.id,
        b.id,
        score.email,
        score.first_name,
        score.last_name,
        score.address,
        score.postal_zip,
        score.total,
        score.accuracy,
    );
}
