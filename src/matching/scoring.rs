use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::contact::{record_id, Contact, ContactRecord};
use crate::core::types::{Accuracy, TierThresholds};
use crate::matching::similarity::similarity;

/// Shown in place of a contact ID that could not be read
const UNKNOWN_ID: &str = "<unknown>";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("score {0} is outside the range 0-{1}")]
    OutOfRange(f64, f64),
}

/// Points awarded per field.
///
/// These are fixed business rules; the defaults are the only supported values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringWeights {
    /// Awarded when both emails are identical and non-empty
    pub email_exact: f64,
    /// Multiplier for email similarity when the emails are not an exact match
    pub email_similarity: f64,
    pub first_name: f64,
    pub last_name: f64,
    pub address: f64,
    /// Awarded when both postal codes are identical and non-empty
    pub postal_zip_exact: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            email_exact: 50.0,
            email_similarity: 20.0,
            first_name: 10.0,
            last_name: 10.0,
            address: 30.0,
            postal_zip_exact: 10.0,
        }
    }
}

impl ScoringWeights {
    /// Highest score a pair can reach
    #[must_use]
    pub fn max_score(&self) -> f64 {
        self.email_exact.max(self.email_similarity)
            + self.first_name
            + self.last_name
            + self.address
            + self.postal_zip_exact
    }
}

/// Per-field breakdown of the score between two contacts
#[derive(Debug, Clone, Serialize)]
pub struct MatchScore {
    /// Email contribution: exact-match bonus or weighted similarity
    pub email: f64,

    /// Whether the email contribution came from an exact match
    pub email_exact: bool,

    pub first_name: f64,

    pub last_name: f64,

    pub address: f64,

    /// Postal code contribution: exact-match bonus or zero
    pub postal_zip: f64,

    /// Sum of all contributions (0-110 with default weights)
    pub total: f64,

    /// Tier derived from the total
    pub accuracy: Accuracy,
}

impl MatchScore {
    /// Score two contacts with the default weights and thresholds
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` if the total is not a finite value
    /// within the achievable range.
    pub fn calculate(a: &Contact, b: &Contact) -> Result<Self, ScoreError> {
        Self::calculate_with(a, b, &ScoringWeights::default(), &TierThresholds::default())
    }

    /// Score two contacts with explicit weights and thresholds
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` if the total is not a finite value
    /// within the achievable range.
    pub fn calculate_with(
        a: &Contact,
        b: &Contact,
        weights: &ScoringWeights,
        thresholds: &TierThresholds,
    ) -> Result<Self, ScoreError> {
        // Two blank values are never an exact match
        let email_exact = exact_non_empty(&a.email, &b.email);
        let email = if email_exact {
            weights.email_exact
        } else {
            similarity(&a.email, &b.email) * weights.email_similarity
        };

        let first_name = similarity(&a.first_name, &b.first_name) * weights.first_name;
        let last_name = similarity(&a.last_name, &b.last_name) * weights.last_name;
        let address = similarity(&a.address, &b.address) * weights.address;

        let postal_zip = if exact_non_empty(&a.postal_zip, &b.postal_zip) {
            weights.postal_zip_exact
        } else {
            0.0
        };

        let total = email + first_name + last_name + address + postal_zip;

        let max = weights.max_score();
        if !total.is_finite() || !(0.0..=max).contains(&total) {
            return Err(ScoreError::OutOfRange(total, max));
        }

        Ok(Self {
            email,
            email_exact,
            first_name,
            last_name,
            address,
            postal_zip,
            total,
            accuracy: thresholds.classify(total),
        })
    }
}

fn exact_non_empty(a: &str, b: &str) -> bool {
    !a.is_empty() && a == b
}

/// Classify a pair of contacts as High, Medium or Low.
///
/// A scoring failure is logged with both contact IDs and the pair is
/// classified Low; this never fails.
#[must_use]
pub fn classify(a: &Contact, b: &Contact) -> Accuracy {
    classify_with(a, b, &ScoringWeights::default(), &TierThresholds::default())
}

/// [`classify`] with explicit weights and thresholds
#[must_use]
pub fn classify_with(
    a: &Contact,
    b: &Contact,
    weights: &ScoringWeights,
    thresholds: &TierThresholds,
) -> Accuracy {
    match MatchScore::calculate_with(a, b, weights, thresholds) {
        Ok(score) => {
            debug!(
                source = %a.id,
                matched = %b.id,
                score = score.total,
                accuracy = %score.accuracy,
                "Scored pair"
            );
            score.accuracy
        }
        Err(e) => {
            warn!(
                "Error scoring match between contacts {} and {}: {e}",
                a.id, b.id
            );
            Accuracy::Low
        }
    }
}

/// Classify two raw records.
///
/// A record missing a required column cannot be scored: the failure is
/// logged with both contact IDs and the pair is classified Low.
#[must_use]
pub fn classify_records(a: &ContactRecord, b: &ContactRecord) -> Accuracy {
    match (Contact::from_record(a), Contact::from_record(b)) {
        (Ok(a), Ok(b)) => classify(&a, &b),
        (Err(e), _) | (_, Err(e)) => {
            warn!(
                "Error scoring match between contacts {} and {}: {e}",
                display_id(a),
                display_id(b)
            );
            Accuracy::Low
        }
    }
}

pub(crate) fn display_id(record: &ContactRecord) -> String {
    record_id(record).map_or_else(|| UNKNOWN_ID.to_string(), |id| id.to_string())
}
