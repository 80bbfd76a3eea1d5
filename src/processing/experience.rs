//! Experience heuristics: years of experience, role titles, industry overlap

use crate::processing::vocabulary::{INDUSTRY_KEYWORDS, ROLE_KEYWORDS};
use regex::Regex;
use std::sync::LazyLock;

/// Score given when the job description states no years requirement.
pub const NEUTRAL_EXPERIENCE_SCORE: u8 = 85;

/// Patterns for years of experience claimed by a resume.
static RESUME_YEAR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_patterns(&[
        r"(?i)([0-9]+)\+?\s*years?\s*(?:of\s*)?experience",
        r"(?i)experience\s*(?:of\s*)?([0-9]+)\+?\s*years?",
        r"(?i)([0-9]+)\+?\s*years?\s*in",
    ])
});

/// Patterns for years of experience demanded by a job description.
static REQUIRED_YEAR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_patterns(&[
        r"(?i)([0-9]+)\+?\s*years?\s*(?:of\s*)?experience",
        r"(?i)minimum\s*(?:of\s*)?([0-9]+)\+?\s*years?",
        r"(?i)at\s*least\s*([0-9]+)\+?\s*years?",
    ])
});

static FIRST_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid integer regex"));

fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid years regex"))
        .collect()
}

/// Largest year count mentioned in any match of any pattern, 0 if none.
fn max_years(text: &str, patterns: &[Regex]) -> u64 {
    patterns
        .iter()
        .flat_map(|pattern| pattern.find_iter(text))
        .filter_map(|mat| FIRST_INTEGER.find(mat.as_str()))
        // Only overflow can fail here; treat it as the largest count
        .map(|digits| digits.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .max()
        .unwrap_or(0)
}

/// Years of experience a resume claims.
pub fn extract_experience_years(text: &str) -> u64 {
    max_years(text, &RESUME_YEAR_PATTERNS)
}

/// Years of experience a job description asks for.
pub fn extract_required_years(text: &str) -> u64 {
    max_years(text, &REQUIRED_YEAR_PATTERNS)
}

/// Step function over the resume/required years ratio.
pub fn experience_score(resume_years: u64, required_years: u64) -> u8 {
    if required_years == 0 {
        return NEUTRAL_EXPERIENCE_SCORE;
    }

    let ratio = resume_years as f64 / required_years as f64;
    match ratio {
        r if r >= 1.0 => 100,
        r if r >= 0.8 => 85,
        r if r >= 0.6 => 70,
        r if r >= 0.4 => 55,
        _ => 40,
    }
}

/// Role titles mentioned by both texts. Expects lowercased input.
pub fn matching_roles(resume: &str, job: &str) -> Vec<&'static str> {
    ROLE_KEYWORDS.find_in_both(resume, job)
}

/// Whether both texts mention the same industry. Expects lowercased input.
pub fn industry_match(resume: &str, job: &str) -> bool {
    INDUSTRY_KEYWORDS.any_in_both(resume, job)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_years_patterns() {
        assert_eq!(extract_experience_years("5 years of experience"), 5);
        assert_eq!(extract_experience_years("Experience of 7 years"), 7);
        assert_eq!(extract_experience_years("3+ years in fintech"), 3);
        assert_eq!(extract_experience_years("10+ YEARS EXPERIENCE"), 10);
    }

    #[test]
    fn test_resume_years_takes_maximum() {
        let text = "2 years in retail, then 8 years of experience in software. 4 years in QA.";
        assert_eq!(extract_experience_years(text), 8);
    }

    #[test]
    fn test_required_years_patterns() {
        assert_eq!(extract_required_years("5+ years experience with Rust"), 5);
        assert_eq!(extract_required_years("minimum of 3 years"), 3);
        assert_eq!(extract_required_years("At least 6 years in the field"), 6);
        // "N years in" only counts for resumes
        assert_eq!(extract_required_years("4 years in banking"), 0);
    }

    #[test]
    fn test_no_years_mentioned() {
        assert_eq!(extract_experience_years(""), 0);
        assert_eq!(extract_required_years("years of experience preferred"), 0);
    }

    #[test]
    fn test_huge_year_counts_do_not_panic() {
        assert_eq!(extract_experience_years("99999999999 years experience"), 99_999_999_999);
        assert_eq!(
            extract_experience_years("999999999999999999999 years experience"),
            u64::MAX
        );
    }

    #[test]
    fn test_year_counts_beyond_u32() {
        let resume = extract_experience_years("4294967295 years of experience");
        let required = extract_required_years("at least 5000000000 years");
        assert_eq!(resume, 4_294_967_295);
        assert_eq!(required, 5_000_000_000);
        // ratio 0.86
        assert_eq!(experience_score(resume, required), 85);
    }

    #[test]
    fn test_experience_score_steps() {
        assert_eq!(experience_score(0, 0), NEUTRAL_EXPERIENCE_SCORE);
        assert_eq!(experience_score(12, 0), NEUTRAL_EXPERIENCE_SCORE);
        assert_eq!(experience_score(6, 5), 100);
        assert_eq!(experience_score(5, 5), 100);
        assert_eq!(experience_score(4, 5), 85);
        assert_eq!(experience_score(3, 5), 70);
        assert_eq!(experience_score(2, 5), 55);
        assert_eq!(experience_score(1, 5), 40);
        assert_eq!(experience_score(0, 5), 40);
    }

    #[test]
    fn test_roles_and_industry() {
        let resume = "senior software engineer and technical consultant";
        let job = "we need an engineer, ideally a former consultant, for our software team";

        assert_eq!(matching_roles(resume, job), vec!["engineer", "consultant"]);
        assert!(industry_match(resume, job));
        assert!(!industry_match("retail associate", "finance associate"));
    }
}
