//! Resume scorer combining skill, experience, education and keyword heuristics

use crate::processing::density::KeywordDensity;
use crate::processing::education::education_score;
use crate::processing::experience::{
    experience_score, extract_experience_years, extract_required_years, industry_match,
    matching_roles,
};
use crate::processing::feedback::{self, FeedbackScores};
use crate::processing::result::{
    AnalysisResult, CategoryScores, DetailedAnalysis, ExperienceAnalysis, SkillsAnalysis,
};
use crate::processing::skills::{keywords_score, matched_keywords, ExtractedSkills, SkillComparison};
use log::debug;

/// Relative weight of each category in the overall score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryWeights {
    pub skills: f64,
    pub experience: f64,
    pub keywords: f64,
    pub education: f64,
}

pub const CATEGORY_WEIGHTS: CategoryWeights = CategoryWeights {
    skills: 0.4,
    experience: 0.3,
    keywords: 0.2,
    education: 0.1,
};

impl CategoryWeights {
    pub fn overall(&self, scores: &CategoryScores) -> u8 {
        let weighted = scores.skills as f64 * self.skills
            + scores.experience as f64 * self.experience
            + scores.keywords as f64 * self.keywords
            + scores.education as f64 * self.education;
        weighted.round().clamp(0.0, 100.0) as u8
    }
}

/// Scores resumes against job descriptions.
///
/// Stateless: every call is independent and the same inputs always produce
/// the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeScorer;

impl ResumeScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, resume_text: &str, job_description: &str) -> AnalysisResult {
        let resume = resume_text.to_lowercase();
        let job = job_description.to_lowercase();

        let required_skills = ExtractedSkills::from_text(&job);
        let resume_skills = ExtractedSkills::from_text(&resume);
        let skills = SkillComparison::compare(&required_skills, &resume_skills);
        let keywords = matched_keywords(&resume, &job);

        let resume_years = extract_experience_years(resume_text);
        let required_years = extract_required_years(job_description);

        debug!(
            "Skills: {} required, {} matched; keywords: {} matched",
            skills.required.len(),
            skills.matched.len(),
            keywords.len()
        );
        debug!("Experience: resume claims {} years, job requires {}", resume_years, required_years);

        let category_scores = CategoryScores {
            skills: skills.score(),
            experience: experience_score(resume_years, required_years),
            education: education_score(&resume, &job),
            keywords: keywords_score(keywords.len()),
        };
        let overall_score = CATEGORY_WEIGHTS.overall(&category_scores);

        let feedback_scores = FeedbackScores {
            skills: category_scores.skills,
            experience: category_scores.experience,
            keywords: category_scores.keywords,
        };

        AnalysisResult {
            overall_score,
            category_scores,
            matched_skills: to_owned(&skills.matched),
            missing_skills: to_owned(&skills.missing),
            matched_keywords: to_owned(&keywords),
            recommendations: feedback::recommendations(&skills.missing, feedback_scores),
            strengths: feedback::strengths(&skills.matched, feedback_scores),
            improvements: feedback::improvements(&skills.missing, feedback_scores),
            detailed_analysis: DetailedAnalysis {
                skills_analysis: SkillsAnalysis {
                    technical: to_owned(&resume_skills.technical),
                    soft: to_owned(&resume_skills.soft),
                    missing: to_owned(&skills.missing),
                },
                experience_analysis: ExperienceAnalysis {
                    relevant_years: resume_years,
                    matching_roles: to_owned(&matching_roles(&resume, &job)),
                    industry_match: industry_match(&resume, &job),
                },
                keyword_density: KeywordDensity::calculate(resume_text, job_description),
            },
        }
    }
}

/// Score a resume against a job description.
pub fn analyze_resume(resume_text: &str, job_description: &str) -> AnalysisResult {
    ResumeScorer::new().analyze(resume_text, job_description)
}

fn to_owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|term| term.to_string()).collect()
}
