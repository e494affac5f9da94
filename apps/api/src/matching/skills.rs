//! Requirement tokenization and skill matching.

/// Splits already lower-cased text on commas, periods and newlines.
/// Tokens are trimmed; empty tokens are dropped. Duplicates and order are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split([',', '.', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// A requirement token matches when it and some resume token contain one another.
pub fn is_covered(requirement: &str, resume_tokens: &[String]) -> bool {
    resume_tokens
        .iter()
        .any(|token| token.contains(requirement) || requirement.contains(token.as_str()))
}

/// Splits the required tokens into (matched, missing), each in original order.
pub fn partition_skills(
    required: &[String],
    resume_tokens: &[String],
) -> (Vec<String>, Vec<String>) {
    required
        .iter()
        .cloned()
        .partition(|requirement| is_covered(requirement, resume_tokens))
}

/// Percentage of required tokens matched. No requirements scores 0.
pub fn skill_match_score(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    100.0 * matched as f64 / required as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_splits_on_all_separators() {
        let out = tokenize("rust, go.python\nsql");
        assert_eq!(out, tokens(&["rust", "go", "python", "sql"]));
    }

    #[test]
    fn test_tokenize_drops_empty_and_trims() {
        let out = tokenize(" rust ,, . \n\n  react  \r\n");
        assert_eq!(out, tokens(&["rust", "react"]));
    }

    #[test]
    fn test_tokenize_keeps_duplicates() {
        assert_eq!(tokenize("sql, sql"), tokens(&["sql", "sql"]));
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" , . \n").is_empty());
    }

    #[test]
    fn test_exact_token_matches() {
        assert!(is_covered("python", &tokens(&["python"])));
    }

    #[test]
    fn test_resume_token_containing_requirement_matches() {
        assert!(is_covered("react", &tokens(&["skills: react and redux"])));
    }

    #[test]
    fn test_requirement_containing_resume_token_matches() {
        assert!(is_covered("senior react developer", &tokens(&["react"])));
    }

    #[test]
    fn test_unrelated_tokens_do_not_match() {
        assert!(!is_covered("kubernetes", &tokens(&["docker", "aws"])));
        assert!(!is_covered("kubernetes", &[]));
    }

    #[test]
    fn test_partition_preserves_order_and_covers_all() {
        let required = tokens(&["rust", "kafka", "sql", "go", "sql"]);
        let resume = tokens(&["rust and go", "postgres sql"]);
        let (matched, missing) = partition_skills(&required, &resume);
        assert_eq!(matched, tokens(&["rust", "sql", "go", "sql"]));
        assert_eq!(missing, tokens(&["kafka"]));
        assert_eq!(matched.len() + missing.len(), required.len());
    }

    #[test]
    fn test_skill_score_empty_requirements_is_zero() {
        assert_eq!(skill_match_score(0, 0), 0.0);
    }

    #[test]
    fn test_skill_score_ratio() {
        assert_eq!(skill_match_score(3, 4), 75.0);
        assert_eq!(skill_match_score(4, 4), 100.0);
    }
}
