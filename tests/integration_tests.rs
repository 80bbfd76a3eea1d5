//! Integration tests for the resume scanner

use resume_scanner::config::{InputConfig, OutputFormat};
use resume_scanner::input::InputManager;
use resume_scanner::output::{ReportGenerator, ScanReport};
use resume_scanner::processing::vocabulary::{SOFT_SKILL_TERMS, TECHNICAL_SKILL_TERMS};
use resume_scanner::{analyze_resume, AnalysisResult, ResumeScannerError};
use std::collections::HashSet;
use std::path::Path;

const RESUME_TXT: &str = "tests/fixtures/sample_resume.txt";
const RESUME_MD: &str = "tests/fixtures/sample_resume.md";
const JOB_TXT: &str = "tests/fixtures/sample_job.txt";

async fn load(path: &str) -> String {
    InputManager::new().extract_text(Path::new(path)).await.unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let text = load(RESUME_TXT).await;

    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let text = load(RESUME_MD).await;

    assert!(text.contains("John Doe"));
    assert!(text.contains("Senior Software Engineer"));
    assert!(text.contains("Node.js"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new(RESUME_TXT);

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = InputManager::from_config(&InputConfig {
        enable_cache: false,
        max_file_size_kb: 1024,
    });

    manager.extract_text(Path::new(RESUME_TXT)).await.unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;

    assert!(matches!(result, Err(ResumeScannerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;

    assert!(matches!(result, Err(ResumeScannerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_file_size_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.txt");
    std::fs::write(&path, "python ".repeat(1024)).unwrap();

    let mut manager = InputManager::new().with_max_file_size(1024);
    let result = manager.extract_text(&path).await;
    assert!(matches!(result, Err(ResumeScannerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_fixture_analysis() {
    let resume = load(RESUME_TXT).await;
    let job = load(JOB_TXT).await;
    let result = analyze_resume(&resume, &job);

    assert_eq!(
        result.matched_skills,
        vec![
            "react", "node.js", "typescript", "sql", "postgresql", "docker", "aws", "agile",
            "leadership", "mentoring",
        ]
    );
    assert_eq!(result.missing_skills, vec!["kubernetes", "graphql"]);
    assert_eq!(result.category_scores.skills, 83);

    assert_eq!(result.detailed_analysis.experience_analysis.relevant_years, 7);
    assert_eq!(result.category_scores.experience, 100);
    assert_eq!(result.category_scores.education, 100);

    assert_eq!(
        result.matched_keywords,
        vec!["experience", "bachelor", "years", "senior", "lead", "engineer"]
    );
    assert_eq!(result.category_scores.keywords, 60);

    // 83*0.4 + 100*0.3 + 60*0.2 + 100*0.1 = 85.2
    assert_eq!(result.overall_score, 85);

    assert_eq!(result.detailed_analysis.experience_analysis.matching_roles, vec!["engineer"]);
    assert!(result.detailed_analysis.experience_analysis.industry_match);
    assert_eq!(
        result.recommendations,
        vec![
            "Consider adding these missing skills to your resume: kubernetes, graphql",
            "Tailor your resume summary to better match the specific role requirements",
        ]
    );
}

#[tokio::test]
async fn test_fixture_reports_render() {
    let resume = load(RESUME_TXT).await;
    let job = load(JOB_TXT).await;
    let report = ScanReport::new(analyze_resume(&resume, &job), RESUME_TXT, JOB_TXT);
    let generator = ReportGenerator::with_options(false, true, true, true);

    let json = generator.generate_report(&report, OutputFormat::Json).unwrap();
    let parsed: ScanReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.analysis, report.analysis);

    let markdown = generator.generate_report(&report, OutputFormat::Markdown).unwrap();
    assert!(markdown.contains("`kubernetes`, `graphql`"));
}

fn sample_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("", ""),
        ("python", ""),
        ("", "python and 3 years experience"),
        ("Rust, Go, Docker", "Looking for RUST and GO engineers, minimum 10 years"),
        (
            "15 years in retail management. MBA from a university.",
            "Retail store manager, at least 3 years. Bachelor or master degree from college.",
        ),
        (
            "Teamwork teamwork teamwork. Customer service, negotiation, conflict resolution.",
            "Customer service agent: negotiation, conflict resolution, teamwork, time management, \
             presentation skills, creativity.",
        ),
        (
            "ci/cd c++ c# .net vue.js node.js rest api",
            "C++ C# .NET Vue.js Node.js REST API CI/CD machine learning artificial intelligence",
        ),
        ("!!! ??? ...", "!!!! ???? .... ,,,, ;;;; ::::"),
        (
            "Ünïcödé résumé — 5 years experience",
            "Ünïcödé jöb — 5+ years experience required",
        ),
    ]
}

fn assert_well_formed(result: &AnalysisResult, job: &str) {
    let scores = result.category_scores;
    let all = [
        scores.skills,
        scores.experience,
        scores.education,
        scores.keywords,
        result.overall_score,
    ];
    for score in all {
        assert!(score <= 100);
    }

    // Matched and missing partition the required skills
    let job_lower = job.to_lowercase();
    let required: Vec<&str> = TECHNICAL_SKILL_TERMS
        .iter()
        .chain(SOFT_SKILL_TERMS)
        .copied()
        .filter(|skill| job_lower.contains(skill))
        .collect();
    let matched: HashSet<&str> = result.matched_skills.iter().map(String::as_str).collect();
    let missing: HashSet<&str> = result.missing_skills.iter().map(String::as_str).collect();
    assert!(matched.is_disjoint(&missing));
    let union: HashSet<&str> = matched.union(&missing).copied().collect();
    assert_eq!(union, required.iter().copied().collect::<HashSet<_>>());

    // Technical matches precede soft matches, each in vocabulary order
    let ordered: Vec<&str> = required.iter().copied().filter(|s| matched.contains(s)).collect();
    let actual: Vec<&str> = result.matched_skills.iter().map(String::as_str).collect();
    assert_eq!(actual, ordered);

    if required.is_empty() {
        assert_eq!(scores.skills, 85);
    }

    assert_eq!(
        scores.keywords as usize,
        (result.matched_keywords.len() * 10).min(100)
    );

    let density = &result.detailed_analysis.keyword_density;
    assert!(density.len() <= 10);
    let job_words: HashSet<&str> = job_lower.split_whitespace().collect();
    for word in density.keys() {
        assert!(word.encode_utf16().count() > 3);
        assert!(job_words.contains(word));
    }

    assert!(result.recommendations.last().unwrap().starts_with("Tailor your resume summary"));
    assert!(result.strengths.last().unwrap().starts_with("Resume shows clear career progression"));
    assert!(result.improvements.ends_with(&[
        "Consider adding quantifiable achievements and impact metrics".to_string(),
        "Ensure your resume format is ATS-friendly for better parsing".to_string(),
    ]));
}

#[test]
fn test_results_are_well_formed() {
    for (resume, job) in sample_pairs() {
        let result = analyze_resume(resume, job);
        assert_well_formed(&result, job);
    }
}

#[test]
fn test_analysis_is_idempotent() {
    for (resume, job) in sample_pairs() {
        let first = serde_json::to_string(&analyze_resume(resume, job)).unwrap();
        let second = serde_json::to_string(&analyze_resume(resume, job)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_skills_score_ignores_resume_without_requirements() {
    let job = "Friendly office with great coffee";
    for resume in ["", "python rust docker leadership", "nothing relevant"] {
        assert_eq!(analyze_resume(resume, job).category_scores.skills, 85);
    }
}

#[test]
fn test_requirements_but_short_experience() {
    let result = analyze_resume(
        "Rust, Go, Docker",
        "Looking for RUST and GO engineers, minimum 10 years",
    );

    // no years in resume: ratio 0
    assert_eq!(result.category_scores.experience, 40);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.starts_with("Emphasize relevant work experience")));
}

#[test]
fn test_education_counts_quirk() {
    let result = analyze_resume(
        "15 years in retail management. MBA from a university.",
        "Retail store manager, at least 3 years. Bachelor or master degree from college.",
    );

    // job: bachelor, master, degree, college (4); resume: university (1)
    assert_eq!(result.category_scores.education, 25);
    assert_eq!(result.category_scores.experience, 100);
    assert!(result.detailed_analysis.experience_analysis.industry_match);
}
