//! Skill extraction and keyword matching

use crate::processing::vocabulary::{IMPORTANT_KEYWORDS, SOFT_SKILLS, TECHNICAL_SKILLS};

/// Score given when the job description names no vocabulary skills.
pub const NEUTRAL_SKILLS_SCORE: u8 = 85;

/// Points awarded per keyword found in both texts.
pub const POINTS_PER_KEYWORD: usize = 10;

/// Skills of one text, split by vocabulary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedSkills {
    pub technical: Vec<&'static str>,
    pub soft: Vec<&'static str>,
}

impl ExtractedSkills {
    /// Extract skills from an already lowercased text.
    pub fn from_text(text: &str) -> Self {
        Self {
            technical: TECHNICAL_SKILLS.find_in(text),
            soft: SOFT_SKILLS.find_in(text),
        }
    }

    /// Technical skills followed by soft skills.
    pub fn all(&self) -> Vec<&'static str> {
        self.technical.iter().chain(&self.soft).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.technical.len() + self.soft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.technical.iter().chain(&self.soft).any(|known| *known == skill)
    }
}

/// Outcome of comparing the job's required skills with the resume's skills
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillComparison {
    pub required: Vec<&'static str>,
    pub matched: Vec<&'static str>,
    pub missing: Vec<&'static str>,
}

impl SkillComparison {
    pub fn compare(required: &ExtractedSkills, resume: &ExtractedSkills) -> Self {
        let required = required.all();
        let (matched, missing) = required
            .iter()
            .copied()
            .partition(|skill| resume.contains(skill));

        Self { required, matched, missing }
    }

    /// Share of required skills the resume covers, as a 0-100 score.
    pub fn score(&self) -> u8 {
        if self.required.is_empty() {
            return NEUTRAL_SKILLS_SCORE;
        }
        let ratio = self.matched.len() as f64 / self.required.len() as f64;
        (ratio * 100.0).round() as u8
    }
}

/// Important keywords present in both texts, in vocabulary order.
pub fn matched_keywords(resume: &str, job: &str) -> Vec<&'static str> {
    IMPORTANT_KEYWORDS.find_in_both(resume, job)
}

/// Ten points per matched keyword, capped at 100.
pub fn keywords_score(matched: usize) -> u8 {
    matched.saturating_mul(POINTS_PER_KEYWORD).min(100) as u8
}
