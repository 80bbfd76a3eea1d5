//! Education scoring

use crate::processing::vocabulary::EDUCATION_KEYWORDS;

/// Score given when the job description mentions no education terms.
pub const NEUTRAL_EDUCATION_SCORE: u8 = 90;

/// Compare how many distinct education terms each text mentions.
///
/// The score is the ratio of the two counts, not of the terms they share: a
/// resume naming "bachelor" and "master" against a job naming only "degree"
/// scores 100. Expects lowercased input.
pub fn education_score(resume: &str, job: &str) -> u8 {
    let required = EDUCATION_KEYWORDS.count_in(job);
    if required == 0 {
        return NEUTRAL_EDUCATION_SCORE;
    }

    let present = EDUCATION_KEYWORDS.count_in(resume);
    let ratio = present as f64 / required as f64;
    (ratio * 100.0).round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_when_job_is_silent() {
        assert_eq!(education_score("phd, university of somewhere", "rust engineer"), 90);
        assert_eq!(education_score("", ""), 90);
    }

    #[test]
    fn test_counts_not_overlap() {
        assert_eq!(education_score("bachelor and master", "degree required"), 100);
    }

    #[test]
    fn test_partial_ratio() {
        // job: bachelor, degree, university -> 3; resume: degree -> 1
        assert_eq!(education_score("degree", "bachelor degree from a university"), 33);
        assert_eq!(education_score("", "bachelor degree"), 0);
        assert_eq!(education_score("college degree", "phd degree"), 100);
    }
}
