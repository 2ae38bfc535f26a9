use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::contact::{record_id, Contact, ContactError, ContactRecord};
use crate::core::types::{Accuracy, ContactId, TierThresholds};
use crate::matching::scoring::{classify_with, ScoringWeights};
use crate::utils::validation::pair_count;

/// One scored pair. `source` always precedes `matched` in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    #[serde(rename = "ContactID Source")]
    pub source: ContactId,

    #[serde(rename = "ContactID Match")]
    pub matched: ContactId,

    #[serde(rename = "Accuracy")]
    pub accuracy: Accuracy,
}

impl MatchResult {
    pub fn new(source: ContactId, matched: ContactId, accuracy: Accuracy) -> Self {
        Self {
            source,
            matched,
            accuracy,
        }
    }
}

/// Why a pair produced no result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairError {
    #[error("contact at row {0} has no contactID")]
    MissingId(usize),
}

/// Configuration for the duplicate finder
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchingConfig {
    /// Points awarded per field
    pub scoring_weights: ScoringWeights,
    /// Score needed for the High and Medium tiers
    pub thresholds: TierThresholds,
}

/// Counters from one duplicate-finding run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinderStats {
    pub contacts: usize,
    pub pairs_compared: usize,
    pub pairs_skipped: usize,
    pub elapsed: Duration,
}

/// A record checked once before pair enumeration
struct Entry {
    id: Option<ContactId>,
    contact: Result<Contact, ContactError>,
}

impl Entry {
    fn new(record: &ContactRecord) -> Self {
        Self {
            id: record_id(record),
            contact: Contact::from_record(record),
        }
    }
}

/// Compares every pair of contacts and classifies each pair.
///
/// Work is quadratic: n contacts produce n(n-1)/2 comparisons.
#[derive(Debug, Clone, Default)]
pub struct DuplicateFinder {
    config: MatchingConfig,
}

impl DuplicateFinder {
    /// Create a finder with the standard weights and thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: MatchingConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Score a pair of validated contacts, falling back to Low on failure
    #[must_use]
    pub fn classify(&self, a: &Contact, b: &Contact) -> Accuracy {
        classify_with(
            a,
            b,
            &self.config.scoring_weights,
            &self.config.thresholds,
        )
    }

    /// Classify every unordered pair of records.
    ///
    /// Pairs come out in input order: (0,1), (0,2), ..., (1,2), ... A pair
    /// that cannot be scored is logged and left out; the rest still run.
    #[must_use]
    pub fn find_duplicates(&self, records: &[ContactRecord]) -> Vec<MatchResult> {
        self.find_duplicates_with_stats(records).0
    }

    /// Like [`Self::find_duplicates`], also returning run counters
    #[must_use]
    pub fn find_duplicates_with_stats(
        &self,
        records: &[ContactRecord],
    ) -> (Vec<MatchResult>, FinderStats) {
        let start = Instant::now();
        let entries: Vec<Entry> = records.iter().map(Entry::new).collect();

        let mut results = Vec::with_capacity(pair_count(entries.len()));
        let mut stats = FinderStats {
            contacts: entries.len(),
            ..FinderStats::default()
        };

        for (i, source) in entries.iter().enumerate() {
            for (offset, matched) in entries[i + 1..].iter().enumerate() {
                let j = i + 1 + offset;
                match self.score_pair((i, source), (j, matched)) {
                    Ok(result) => {
                        stats.pairs_compared += 1;
                        results.push(result);
                    }
                    Err(e) => {
                        stats.pairs_skipped += 1;
                        warn!("Skipping pair ({i}, {j}): {e}");
                    }
                }
            }
        }

        stats.elapsed = start.elapsed();
        info!(
            contacts = stats.contacts,
            compared = stats.pairs_compared,
            skipped = stats.pairs_skipped,
            "Finished duplicate search in {:.3}s",
            stats.elapsed.as_secs_f64()
        );

        (results, stats)
    }

    /// Classify every unordered pair of already-validated contacts
    #[must_use]
    pub fn find_contact_duplicates(&self, contacts: &[Contact]) -> Vec<MatchResult> {
        let mut results = Vec::with_capacity(pair_count(contacts.len()));
        for (i, source) in contacts.iter().enumerate() {
            for matched in &contacts[i + 1..] {
                results.push(MatchResult::new(
                    source.id.clone(),
                    matched.id.clone(),
                    self.classify(source, matched),
                ));
            }
        }
        results
    }

    fn score_pair(
        &self,
        (i, source): (usize, &Entry),
        (j, matched): (usize, &Entry),
    ) -> Result<MatchResult, PairError> {
        let source_id = source.id.clone().ok_or(PairError::MissingId(i))?;
        let matched_id = matched.id.clone().ok_or(PairError::MissingId(j))?;

        let accuracy = match (&source.contact, &matched.contact) {
            (Ok(a), Ok(b)) => self.classify(a, b),
            (Err(e), _) | (_, Err(e)) => {
                warn!("Error scoring match between contacts {source_id} and {matched_id}: {e}");
                Accuracy::Low
            }
        };

        Ok(MatchResult::new(source_id, matched_id, accuracy))
    }
}

/// Classify every unordered pair of records with the default configuration
#[must_use]
pub fn find_duplicates(records: &[ContactRecord]) -> Vec<MatchResult> {
    DuplicateFinder::new().find_duplicates(records)
}
