//! Reading contacts and writing match results as delimited text.
//!
//! - **Contacts**: a header row naming the columns, then one contact per row.
//!   Comma by default; any single-byte delimiter works. `.gz` input is
//!   decompressed and `-` reads stdin.
//! - **Results**: `ContactID Source`, `ContactID Match`, `Accuracy`, one row per
//!   scored pair, in the order the pairs were generated.
//!
//! ## Example
//!
//! ```rust,no_run
//! use contact_dedup::parsing::contacts::read_contacts_file;
//! use contact_dedup::parsing::results::write_results_file;
//! use contact_dedup::find_duplicates;
//! use std::path::Path;
//!
//! let contacts = read_contacts_file(Path::new("contacts.csv"), b',').unwrap();
//! let results = find_duplicates(&contacts);
//! write_results_file(Path::new("results.csv"), &results, b',').unwrap();
//! ```

pub mod contacts;
pub mod results;

pub use contacts::ParseError;
