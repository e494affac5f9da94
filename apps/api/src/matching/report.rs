use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status suggested by the matcher. Serialised values are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestedStatus {
    #[serde(rename = "Hired")]
    Hired,
    #[serde(rename = "interviewing")]
    Interviewing,
    #[serde(rename = "rejected")]
    Rejected,
}

impl SuggestedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestedStatus::Hired => "Hired",
            SuggestedStatus::Interviewing => "interviewing",
            SuggestedStatus::Rejected => "rejected",
        }
    }
}

/// Output of one scoring call. Sub-scores and score carry two-decimal precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Overall match percentage, clamped to [0, 100].
    pub score: f64,
    pub suggested_status: SuggestedStatus,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_match: f64,
    /// Not clamped: a candidate above the required level scores over 100.
    pub education_match: f64,
}

impl MatchReport {
    /// The worst-case report substituted for any internal failure.
    pub fn fallback() -> Self {
        Self {
            score: 0.0,
            suggested_status: SuggestedStatus::Rejected,
            matched_skills: vec![],
            missing_skills: vec![],
            experience_match: 0.0,
            education_match: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Invalid match config: {0}")]
    InvalidConfig(String),

    #[error("Score is not a finite number (skills={skills}, experience={experience}, education={education})")]
    NonFiniteScore {
        skills: f64,
        experience: f64,
        education: f64,
    },
}

/// Result of a scoring call that keeps internal failures visible to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Scored(MatchReport),
    Failed(MatchError),
}

impl MatchOutcome {
    pub fn is_scored(&self) -> bool {
        matches!(self, MatchOutcome::Scored(_))
    }

    pub fn failure(&self) -> Option<&MatchError> {
        match self {
            MatchOutcome::Scored(_) => None,
            MatchOutcome::Failed(e) => Some(e),
        }
    }

    /// Collapses `Failed` into `MatchReport::fallback()`.
    pub fn into_report(self) -> MatchReport {
        match self {
            MatchOutcome::Scored(report) => report,
            MatchOutcome::Failed(_) => MatchReport::fallback(),
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
