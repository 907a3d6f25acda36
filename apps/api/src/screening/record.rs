//! The evaluation record, modelled as values that grow by one field per stage:
//! `Submission` → `ScoredSubmission` → `Evaluation`.

use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize, Serializer};

/// Match score as returned by the model. Intended 0–100, but the digit
/// extraction can produce arbitrarily long values, so it is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(BigUint);

impl Score {
    /// Parses a non-empty run of ASCII decimal digits of any length.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        BigUint::parse_bytes(digits.as_bytes(), 10).map(Self)
    }
}

impl From<u64> for Score {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// JSON number when it fits in a `u64`, decimal string otherwise.
impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match u64::try_from(&self.0) {
            Ok(value) => serializer.serialize_u64(value),
            Err(_) => serializer.collect_str(&self.0),
        }
    }
}

/// Caller-supplied inputs. Emptiness is checked by the caller, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub job_description: String,
    pub resume: String,
}

impl Submission {
    pub fn new(job_description: impl Into<String>, resume: impl Into<String>) -> Self {
        Self {
            job_description: job_description.into(),
            resume: resume.into(),
        }
    }

    /// True when either field is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.job_description.trim().is_empty() || self.resume.trim().is_empty()
    }

    pub fn with_score(self, score: Score) -> ScoredSubmission {
        ScoredSubmission {
            job_description: self.job_description,
            resume: self.resume,
            score,
        }
    }
}

/// Output of the scoring stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSubmission {
    pub job_description: String,
    pub resume: String,
    pub score: Score,
}

impl ScoredSubmission {
    pub fn with_reasons(self, reasons: Vec<String>) -> Evaluation {
        Evaluation {
            job_description: self.job_description,
            resume: self.resume,
            score: self.score,
            reasons,
        }
    }
}

/// Output of the reasoning stage; the finished record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub job_description: String,
    pub resume: String,
    pub score: Score,
    /// At most three entries, each non-empty after trimming.
    pub reasons: Vec<String>,
}
