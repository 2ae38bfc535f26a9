//! Core data types for contact deduplication.
//!
//! - [`ContactRecord`]: a raw CSV row, column name to value
//! - [`Contact`]: a validated contact built from a record
//! - [`ContactId`], [`Accuracy`]: identifiers and result classification
//!
//! ## Columns
//!
//! | Column      | Meaning         |
//! |-------------|-----------------|
//! | `contactID` | Opaque identifier |
//! | `email`     | Email address   |
//! | `name`      | First name      |
//! | `name1`     | Last name       |
//! | `address`   | Street address  |
//! | `postalZip` | Postal/ZIP code |
//!
//! Values are compared as-is; no trimming or case folding is applied.

pub mod contact;
pub mod types;

pub use contact::{Contact, ContactError, ContactRecord};
pub use types::{Accuracy, ContactId, TierThresholds};
