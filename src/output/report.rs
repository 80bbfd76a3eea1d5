//! Report structure wrapping an analysis result with run metadata

use crate::processing::result::{AnalysisResult, ScoreBand};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a formatter renders: the analysis plus where it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub metadata: ReportMetadata,

    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    /// Resume file path, or a label for inline text
    pub resume_source: String,
    /// Job description file path, or a label for inline text
    pub job_source: String,
    pub scanner_version: String,
}

impl ScanReport {
    pub fn new(
        analysis: AnalysisResult,
        resume_source: impl Into<String>,
        job_source: impl Into<String>,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                resume_source: resume_source.into(),
                job_source: job_source.into(),
                scanner_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            analysis,
        }
    }

    pub fn overall_band(&self) -> ScoreBand {
        ScoreBand::of(self.analysis.overall_score)
    }

    /// One-line summary of the overall score.
    pub fn verdict(&self) -> String {
        let analysis = &self.analysis;
        let required = analysis.matched_skills.len() + analysis.missing_skills.len();
        match self.overall_band() {
            ScoreBand::Strong => format!(
                "Strong match: {} of {} required skills covered",
                analysis.matched_skills.len(),
                required
            ),
            ScoreBand::Moderate => format!(
                "Partial match: {} required skills missing",
                analysis.missing_skills.len()
            ),
            ScoreBand::Weak => "Weak match: the resume needs tailoring for this role".to_string(),
        }
    }

    pub fn generated_at_display(&self) -> String {
        self.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}
