use serde::{Deserialize, Serialize};

use crate::matching::report::SuggestedStatus;

/// Weights of the three sub-scores in the overall match score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skills: 0.6,
            experience: 0.2,
            education: 0.2,
        }
    }
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education
    }

    /// skills*w_s + experience*w_e + education*w_d, unclamped.
    pub fn combine(&self, skills: f64, experience: f64, education: f64) -> f64 {
        self.skills * skills + self.experience * experience + self.education * education
    }
}

/// Lower bounds (inclusive) of the suggested statuses. Checked top-down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusThresholds {
    pub hired: f64,
    pub interviewing: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            hired: 80.0,
            interviewing: 30.0,
        }
    }
}

impl StatusThresholds {
    pub fn status_for(&self, score: f64) -> SuggestedStatus {
        if score >= self.hired {
            SuggestedStatus::Hired
        } else if score >= self.interviewing {
            SuggestedStatus::Interviewing
        } else {
            SuggestedStatus::Rejected
        }
    }
}

/// One rung of the education ladder: a term searched for as a substring and its weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationTier {
    pub term: String,
    pub weight: f64,
}

impl EducationTier {
    fn new(term: &str, weight: f64) -> Self {
        Self {
            term: term.to_string(),
            weight,
        }
    }
}

/// Ordered as searched: the first term found in a text wins.
fn default_education_ladder() -> Vec<EducationTier> {
    vec![
        EducationTier::new("phd", 100.0),
        EducationTier::new("doctorate", 100.0),
        EducationTier::new("master", 80.0),
        EducationTier::new("bachelor", 60.0),
        EducationTier::new("associate", 40.0),
        EducationTier::new("diploma", 30.0),
        EducationTier::new("certificate", 20.0),
    ]
}

/// Immutable scoring constants, bound to a `ResumeMatcher` at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub weights: ScoreWeights,
    pub thresholds: StatusThresholds,
    pub education: Vec<EducationTier>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            thresholds: StatusThresholds::default(),
            education: default_education_ladder(),
        }
    }
}

impl MatchConfig {
    /// Returns a description of the first problem found, if any.
    pub fn validate(&self) -> Result<(), String> {
        let w = &self.weights;
        for (name, value) in [
            ("skills", w.skills),
            ("experience", w.experience),
            ("education", w.education),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("weight '{name}' must be finite and >= 0, got {value}"));
            }
        }
        if (w.sum() - 1.0).abs() > 1e-9 {
            return Err(format!("weights must sum to 1, got {}", w.sum()));
        }

        let t = &self.thresholds;
        if !t.hired.is_finite() || !t.interviewing.is_finite() {
            return Err("status thresholds must be finite".to_string());
        }
        if t.interviewing > t.hired {
            return Err(format!(
                "interviewing threshold {} exceeds hired threshold {}",
                t.interviewing, t.hired
            ));
        }

        for tier in &self.education {
            if tier.term.trim().is_empty() {
                return Err("education term cannot be empty".to_string());
            }
            if tier.term != tier.term.to_lowercase() {
                return Err(format!("education term '{}' must be lower-case", tier.term));
            }
            if !tier.weight.is_finite() || tier.weight <= 0.0 {
                return Err(format!(
                    "education weight for '{}' must be finite and > 0, got {}",
                    tier.term, tier.weight
                ));
            }
        }
        Ok(())
    }
}

/// Valid config whose education ratio overflows to infinity for "phd" against "bachelor".
#[cfg(test)]
pub(crate) fn overflowing_education_config() -> MatchConfig {
    MatchConfig {
        education: vec![
            EducationTier::new("phd", f64::MAX),
            EducationTier::new("bachelor", f64::MIN_POSITIVE),
        ],
        ..MatchConfig::default()
    }
}
