use serde::Serialize;

/// Opaque identifier of a contact (the `contactID` column)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContactId(pub String);

impl ContactId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discrete accuracy tier for a pair of contacts.
///
/// The textual forms `"High"`, `"Medium"` and `"Low"` are part of the output
/// format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Accuracy {
    Low,
    Medium,
    High,
}

impl Accuracy {
    /// Map a weighted score onto a tier using the default thresholds
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        TierThresholds::default().classify(score)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower bounds (inclusive) of the High and Medium tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 80.0,
            medium: 50.0,
        }
    }
}

impl TierThresholds {
    /// Evaluated in precedence order: High, then Medium, else Low
    #[must_use]
    pub fn classify(&self, score: f64) -> Accuracy {
        if score >= self.high {
            Accuracy::High
        } else if score >= self.medium {
            Accuracy::Medium
        } else {
            Accuracy::Low
        }
    }
}
