use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::matching::config::MatchConfig;
use crate::matching::education::{detect_level, education_match};
use crate::matching::experience::{experience_match, experience_regex, extract_years};
use crate::matching::report::{round2, MatchError, MatchOutcome, MatchReport};
use crate::matching::skills::{partition_skills, skill_match_score, tokenize};

/// Scores free-text resumes against free-text job requirements.
///
/// Holds no mutable state: one instance is shared across requests and tasks.
///
/// Algorithm:
/// 1. Lower-case both texts and split them into tokens on `,` `.` `\n`
/// 2. Partition requirement tokens by bidirectional substring containment
/// 3. Sub-scores: skills (matched ratio), experience (`<n> years experience`),
///    education (first ladder term in each text, weight ratio)
/// 4. score = weighted sum, clamped to [0, 100] and rounded to 2 decimals
/// 5. Status from the score thresholds
#[derive(Debug, Clone)]
pub struct ResumeMatcher {
    config: MatchConfig,
    experience_pattern: Regex,
}

impl ResumeMatcher {
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate().map_err(MatchError::InvalidConfig)?;
        Ok(Self {
            config,
            experience_pattern: experience_regex()?,
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Scores one resume, surfacing internal failures as `MatchOutcome::Failed`.
    pub fn evaluate(&self, resume_text: &str, requirements_text: &str) -> MatchOutcome {
        match self.try_score(resume_text, requirements_text) {
            Ok(report) => MatchOutcome::Scored(report),
            Err(e) => MatchOutcome::Failed(e),
        }
    }

    /// Scores one resume. Never fails: internal failures yield `MatchReport::fallback()`.
    pub fn match_resume(&self, resume_text: &str, requirements_text: &str) -> MatchReport {
        let outcome = self.evaluate(resume_text, requirements_text);
        if let Some(e) = outcome.failure() {
            warn!("Resume matching failed, using fallback report: {e}");
        }
        outcome.into_report()
    }

    fn try_score(
        &self,
        resume_text: &str,
        requirements_text: &str,
    ) -> Result<MatchReport, MatchError> {
        let resume = resume_text.to_lowercase();
        let requirements = requirements_text.to_lowercase();

        let required_skills = tokenize(&requirements);
        let resume_tokens = tokenize(&resume);
        let (matched_skills, missing_skills) = partition_skills(&required_skills, &resume_tokens);
        let skills = skill_match_score(matched_skills.len(), required_skills.len());

        let required_years = extract_years(&self.experience_pattern, &requirements);
        let candidate_years = extract_years(&self.experience_pattern, &resume);
        let experience = experience_match(candidate_years, required_years);

        let ladder = &self.config.education;
        let education = education_match(
            detect_level(ladder, &resume),
            detect_level(ladder, &requirements),
        );

        let raw = self.config.weights.combine(skills, experience, education);
        if !raw.is_finite() {
            return Err(MatchError::NonFiniteScore {
                skills,
                experience,
                education,
            });
        }
        let score = round2(raw.clamp(0.0, 100.0));
        let suggested_status = self.config.thresholds.status_for(score);

        debug!(
            "Matched {}/{} skills; experience {candidate_years}/{required_years}y; score {score} ({})",
            matched_skills.len(),
            required_skills.len(),
            suggested_status.as_str()
        );

        Ok(MatchReport {
            score,
            suggested_status,
            matched_skills,
            missing_skills,
            experience_match: round2(experience),
            education_match: round2(education),
        })
    }
}

fn default_matcher() -> &'static Result<ResumeMatcher, MatchError> {
    static DEFAULT: OnceLock<Result<ResumeMatcher, MatchError>> = OnceLock::new();
    DEFAULT.get_or_init(|| ResumeMatcher::new(MatchConfig::default()))
}

/// Scores with the default constants. Total: always returns a well-formed report.
pub fn match_resume(resume_text: &str, requirements_text: &str) -> MatchReport {
    match default_matcher() {
        Ok(matcher) => matcher.match_resume(resume_text, requirements_text),
        Err(e) => {
            warn!("Default matcher unavailable, using fallback report: {e}");
            MatchReport::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::config::{overflowing_education_config, ScoreWeights};
    use crate::matching::report::SuggestedStatus;

    fn matcher() -> ResumeMatcher {
        ResumeMatcher::new(MatchConfig::default()).unwrap()
    }

    #[test]
    fn test_full_match_is_hired() {
        let report = matcher().match_resume(
            "i have 5 years experience and a bachelor degree. skills: javascript, react, node",
            "3 years experience, bachelor degree, javascript, react",
        );
        assert_eq!(
            report.matched_skills,
            ["3 years experience", "bachelor degree", "javascript", "react"]
        );
        assert!(report.missing_skills.is_empty());
        assert_eq!(report.experience_match, 100.0);
        assert_eq!(report.education_match, 100.0);
        assert_eq!(report.score, 100.0);
        assert_eq!(report.suggested_status, SuggestedStatus::Hired);
    }

    #[test]
    fn test_empty_requirements_scores_forty() {
        let report = matcher().match_resume("rust, go", "");
        assert!(report.matched_skills.is_empty());
        assert!(report.missing_skills.is_empty());
        assert_eq!(report.experience_match, 100.0);
        assert_eq!(report.education_match, 100.0);
        assert_eq!(report.score, 40.0);
        assert_eq!(report.suggested_status, SuggestedStatus::Interviewing);
    }

    #[test]
    fn test_underqualified_candidate_rejected() {
        let report = matcher().match_resume(
            "no experience mentioned, bachelor degree only",
            "5 years experience, phd required",
        );
        assert_eq!(report.experience_match, 0.0);
        assert_eq!(report.education_match, 60.0);
        assert_eq!(report.missing_skills, ["5 years experience", "phd required"]);
        assert_eq!(report.score, 12.0);
        assert_eq!(report.suggested_status, SuggestedStatus::Rejected);
    }

    #[test]
    fn test_input_is_case_insensitive() {
        let report = matcher().match_resume("PYTHON", "Python");
        assert_eq!(report.matched_skills, ["python"]);
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn test_both_empty_is_well_formed() {
        let report = matcher().match_resume("", "");
        assert_eq!(report.score, 40.0);
        assert!(report.matched_skills.is_empty() && report.missing_skills.is_empty());
    }

    #[test]
    fn test_overqualified_education_clamps_score() {
        // Resume level resolves to "phd" (first in ladder order), requirement to "bachelor".
        let report = matcher().match_resume("phd, bachelor, rust", "bachelor, rust");
        assert_eq!(report.education_match, 166.67);
        assert_eq!(report.score, 100.0);
        assert_eq!(report.suggested_status, SuggestedStatus::Hired);
    }

    #[test]
    fn test_partial_match_rounds_to_two_decimals() {
        // skills 1/3 → 33.333…; 0.6*33.33 + 20 + 20 = 60.0
        let report = matcher().match_resume("rust", "rust, kafka, terraform");
        assert_eq!(report.matched_skills, ["rust"]);
        assert_eq!(report.missing_skills, ["kafka", "terraform"]);
        assert_eq!(report.score, 60.0);
        assert_eq!(report.suggested_status, SuggestedStatus::Interviewing);
    }

    #[test]
    fn test_partial_experience_two_decimals() {
        let report = matcher().match_resume("1 yr experience", "3 yrs experience");
        assert_eq!(report.experience_match, 33.33);
    }

    #[test]
    fn test_huge_year_count_still_scores() {
        let report = matcher().match_resume("rust, go, 10000000000 years experience", "rust, go");
        assert_eq!(report.matched_skills, ["rust", "go"]);
        assert_eq!(report.experience_match, 100.0);
        assert_eq!(report.score, 100.0);
        assert_eq!(report.suggested_status, SuggestedStatus::Hired);
    }

    #[test]
    fn test_year_count_beyond_f64_meets_requirement() {
        let resume = format!("{} years experience, rust", "9".repeat(400));
        let report = matcher().match_resume(&resume, "2 years experience, rust");
        assert_eq!(report.experience_match, 100.0);
        assert_eq!(report.matched_skills, ["rust"]);
    }

    #[test]
    fn test_non_finite_score_falls_back() {
        let m = ResumeMatcher::new(overflowing_education_config()).unwrap();
        let outcome = m.evaluate("phd", "bachelor");
        assert!(matches!(
            outcome,
            MatchOutcome::Failed(MatchError::NonFiniteScore { .. })
        ));
        assert_eq!(m.match_resume("phd", "bachelor"), MatchReport::fallback());
    }

    #[test]
    fn test_matching_is_idempotent() {
        let m = matcher();
        let a = m.match_resume("rust, 2 years experience", "rust, go, 4 years experience");
        let b = m.match_resume("rust, 2 years experience", "rust, go, 4 years experience");
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_partition_covers_requirement_tokens() {
        let requirements = "Rust. Go, SQL\nSQL, kafka";
        let report = matcher().match_resume("sql and rust", requirements);
        let mut all: Vec<_> = report
            .matched_skills
            .iter()
            .chain(report.missing_skills.iter())
            .cloned()
            .collect();
        all.sort();
        let mut expected = tokenize(&requirements.to_lowercase());
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_custom_weights_change_score() {
        let config = MatchConfig {
            weights: ScoreWeights {
                skills: 1.0,
                experience: 0.0,
                education: 0.0,
            },
            ..MatchConfig::default()
        };
        let report = ResumeMatcher::new(config)
            .unwrap()
            .match_resume("rust", "rust, go");
        assert_eq!(report.score, 50.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = MatchConfig::default();
        config.weights.skills = f64::NAN;
        assert!(matches!(
            ResumeMatcher::new(config),
            Err(MatchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_non_convex_weights_rejected() {
        let mut config = MatchConfig::default();
        config.weights.skills = 0.8;
        assert!(matches!(
            ResumeMatcher::new(config),
            Err(MatchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_free_function_uses_defaults() {
        let report = match_resume("python", "python");
        assert_eq!(report.score, 100.0);
        assert_eq!(report.suggested_status, SuggestedStatus::Hired);
    }
}
