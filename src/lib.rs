//! # contact-dedup
//!
//! A library for finding likely duplicate contacts in a contact list.
//!
//! Exports from CRMs, mailing lists and sign-up forms tend to accumulate the
//! same person several times over: a typo in the street number, a work and a
//! personal email, a shortened last name. `contact-dedup` compares every pair
//! of contacts and classifies how likely each pair is to be the same person.
//!
//! ## Features
//!
//! - **Weighted field scoring**: exact email and postal code matches plus
//!   similarity of email, first name, last name and address
//! - **Three tiers**: each pair is classified High, Medium or Low
//! - **Exhaustive**: every unordered pair is compared exactly once, in input order
//! - **Resilient**: a bad value or missing column degrades a single pair, never the run
//! - **CSV in, CSV out**: reads contact exports (plain or gzipped) and writes a results table
//!
//! ## Example
//!
//! ```rust
//! use contact_dedup::{find_duplicates, Accuracy, Contact};
//!
//! let records: Vec<_> = [
//!     Contact::new("1")
//!         .with_email("test@example.com")
//!         .with_name("John", "Doe")
//!         .with_address("123 Main St")
//!         .with_postal_zip("12345"),
//!     Contact::new("2")
//!         .with_email("test@example.com")
//!         .with_name("John", "Doe")
//!         .with_address("123 Main St")
//!         .with_postal_zip("12345"),
//! ]
//! .iter()
//! .map(Contact::to_record)
//! .collect();
//!
//! let results = find_duplicates(&records);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].accuracy, Accuracy::High);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Contact records and result types
//! - [`matching`]: String similarity, pair scoring and the duplicate finder
//! - [`parsing`]: Reading contacts and writing results as CSV
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::contact::{Contact, ContactError, ContactRecord};
pub use core::types::{Accuracy, ContactId};
pub use matching::engine::{find_duplicates, DuplicateFinder, MatchResult, MatchingConfig};
pub use matching::scoring::{classify, MatchScore};
pub use matching::similarity::similarity;
