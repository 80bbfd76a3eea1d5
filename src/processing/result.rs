//! Analysis result returned by the scorer

use crate::processing::density::KeywordDensity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub category_scores: CategoryScores,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub detailed_analysis: DetailedAnalysis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
    pub keywords: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    pub skills_analysis: SkillsAnalysis,
    pub experience_analysis: ExperienceAnalysis,
    pub keyword_density: KeywordDensity,
}

/// Skills found in the resume, plus the job's unmet skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsAnalysis {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceAnalysis {
    /// Years of experience claimed by the resume
    pub relevant_years: u64,
    pub matching_roles: Vec<String>,
    pub industry_match: bool,
}

impl CategoryScores {
    /// Category scores paired with display labels, in report order.
    pub fn labelled(&self) -> [(&'static str, u8); 4] {
        [
            ("Skills Match", self.skills),
            ("Experience", self.experience),
            ("Education", self.education),
            ("Keywords", self.keywords),
        ]
    }
}

/// Qualitative band for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Strong,
            60..=79 => ScoreBand::Moderate,
            _ => ScoreBand::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "Strong match",
            ScoreBand::Moderate => "Partial match",
            ScoreBand::Weak => "Weak match",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "score-strong",
            ScoreBand::Moderate => "score-moderate",
            ScoreBand::Weak => "score-weak",
        }
    }
}
