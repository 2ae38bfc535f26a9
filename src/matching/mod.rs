//! Contact similarity scoring and duplicate finding.
//!
//! This module provides the core matching functionality:
//!
//! - [`similarity`](similarity::similarity): Ratcliff–Obershelp ratio between two strings
//! - [`MatchScore`]: Weighted per-field score between two contacts
//! - [`DuplicateFinder`]: Classifies every pair of contacts in a list
//!
//! ## Scoring
//!
//! | Field       | Rule                                                  | Max |
//! |-------------|-------------------------------------------------------|-----|
//! | `email`     | identical and non-empty: 50, else similarity × 20     | 50  |
//! | `name`      | similarity × 10                                       | 10  |
//! | `name1`     | similarity × 10                                       | 10  |
//! | `address`   | similarity × 30                                       | 30  |
//! | `postalZip` | identical and non-empty: 10, else 0                   | 10  |
//!
//! A total of 80 or more is **High**, 50 or more is **Medium**, anything
//! lower is **Low**.
//!
//! ## Failure handling
//!
//! No single bad value aborts a run:
//!
//! - a pair that cannot be scored (e.g. a missing column) is classified Low
//! - a pair with no usable contact ID is skipped
//!
//! Each fallback is logged as a warning. A pair absent from the results means
//! "could not be scored", not "not a duplicate".
//!
//! ## Example
//!
//! ```rust
//! use contact_dedup::{Accuracy, Contact, DuplicateFinder};
//!
//! let a = Contact::new("1").with_email("ann@example.com").with_name("Ann", "Lee");
//! let b = Contact::new("2").with_email("ann@example.com").with_name("Ann", "Lee");
//!
//! let results = DuplicateFinder::new().find_contact_duplicates(&[a, b]);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].accuracy, Accuracy::Medium);
//! ```

pub mod engine;
pub mod scoring;
pub mod similarity;

pub use engine::{find_duplicates, DuplicateFinder, MatchResult, MatchingConfig};
pub use scoring::{classify, classify_records, classify_with, MatchScore, ScoringWeights};
pub use similarity::similarity;
