//! Canned recommendations, strengths and improvements

use crate::processing::vocabulary::LEADERSHIP_TERMS;

/// How many missing skills a sentence names at most.
const NAMED_SKILLS: usize = 3;

/// Category scores the feedback sentences are keyed on
#[derive(Debug, Clone, Copy)]
pub struct FeedbackScores {
    pub skills: u8,
    pub experience: u8,
    pub keywords: u8,
}

fn first_skills(skills: &[&str]) -> String {
    skills
        .iter()
        .take(NAMED_SKILLS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn recommendations(missing_skills: &[&str], scores: FeedbackScores) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !missing_skills.is_empty() {
        recommendations.push(format!(
            "Consider adding these missing skills to your resume: {}",
            first_skills(missing_skills)
        ));
    }

    if scores.skills < 70 {
        recommendations.push(
            "Highlight more technical skills that match the job requirements in your resume"
                .to_string(),
        );
    }

    if scores.experience < 60 {
        recommendations.push(
            "Emphasize relevant work experience and quantify your achievements with \
             specific metrics"
                .to_string(),
        );
    }

    if scores.keywords < 50 {
        recommendations.push(
            "Include more industry-specific keywords from the job description in your resume"
                .to_string(),
        );
    }

    recommendations.push(
        "Tailor your resume summary to better match the specific role requirements".to_string(),
    );

    recommendations
}

pub fn strengths(matched_skills: &[&str], scores: FeedbackScores) -> Vec<String> {
    let mut strengths = Vec::new();

    if !matched_skills.is_empty() {
        strengths.push(format!(
            "Strong skill alignment with {} matching technical competencies",
            matched_skills.len()
        ));
    }

    if scores.skills >= 80 {
        strengths.push("Excellent skills match for the position requirements".to_string());
    }

    if scores.experience >= 80 {
        strengths.push(
            "Relevant professional experience aligns well with job expectations".to_string(),
        );
    }

    if matched_skills
        .iter()
        .any(|skill| LEADERSHIP_TERMS.iter().any(|term| term == skill))
    {
        strengths.push("Demonstrates leadership and management capabilities".to_string());
    }

    strengths.push(
        "Resume shows clear career progression and professional development".to_string(),
    );

    strengths
}

pub fn improvements(missing_skills: &[&str], scores: FeedbackScores) -> Vec<String> {
    let mut improvements = Vec::new();

    if missing_skills.len() > NAMED_SKILLS {
        improvements.push(format!(
            "Consider developing skills in: {}",
            first_skills(missing_skills)
        ));
    }

    if scores.skills < 60 {
        improvements.push(
            "Add more specific technical skills mentioned in the job posting".to_string(),
        );
    }

    if scores.keywords < 40 {
        improvements.push(
            "Incorporate more relevant industry keywords throughout your resume".to_string(),
        );
    }

    improvements.push("Consider adding quantifiable achievements and impact metrics".to_string());
    improvements.push("Ensure your resume format is ATS-friendly for better parsing".to_string());

    improvements
}
