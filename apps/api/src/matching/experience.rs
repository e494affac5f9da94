use regex::Regex;

use crate::matching::report::MatchError;

/// `<n> years|yrs|yr experience`, case-insensitive. ASCII digits only.
pub const EXPERIENCE_PATTERN: &str = r"(?i)([0-9]+)\s*(?:years|yrs|yr)\s*experience";

pub fn experience_regex() -> Result<Regex, MatchError> {
    Regex::new(EXPERIENCE_PATTERN)
        .map_err(|e| MatchError::InvalidConfig(format!("experience pattern: {e}")))
}

/// Years stated by the first experience phrase in `text`, 0 when there is none.
///
/// Parsed as `f64`: any digit run is a number, however long (very long runs become infinite).
pub fn extract_years(pattern: &Regex, text: &str) -> f64 {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|digits| digits.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// 100 when nothing is required or the candidate meets it, otherwise the proportion met.
pub fn experience_match(candidate_years: f64, required_years: f64) -> f64 {
    if required_years <= 0.0 || candidate_years >= required_years {
        return 100.0;
    }
    // An infinite requirement is unreachable by any finite candidate.
    if required_years.is_infinite() {
        return 0.0;
    }
    100.0 * candidate_years / required_years
}
