use crate::matching::config::EducationTier;

/// First tier (in ladder order) whose term appears in `text`.
pub fn detect_level<'a>(ladder: &'a [EducationTier], text: &str) -> Option<&'a EducationTier> {
    ladder.iter().find(|tier| text.contains(tier.term.as_str()))
}

/// 100 when nothing is required, 0 when the resume names no level,
/// otherwise the ratio of tier weights (which exceeds 100 for a higher level).
pub fn education_match(
    resume_level: Option<&EducationTier>,
    required_level: Option<&EducationTier>,
) -> f64 {
    match (required_level, resume_level) {
        (None, _) => 100.0,
        (Some(_), None) => 0.0,
        (Some(required), Some(candidate)) => 100.0 * candidate.weight / required.weight,
    }
}
