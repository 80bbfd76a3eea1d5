//! Resume scoring: vocabularies, heuristics and the scorer that combines them

pub mod vocabulary;
pub mod skills;
pub mod experience;
pub mod education;
pub mod density;
pub mod feedback;
pub mod result;
pub mod analyzer;

pub use analyzer::{analyze_resume, ResumeScorer};
pub use result::AnalysisResult;
