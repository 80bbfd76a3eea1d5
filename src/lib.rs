//! Resume scanner library
//!
//! Scores resume text against a job description with fixed vocabularies and
//! simple heuristics. [`analyze_resume`] is the entry point; the remaining
//! modules read inputs, load configuration and render results.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{Result, ResumeScannerError};
pub use config::Config;
pub use processing::{analyze_resume, AnalysisResult, ResumeScorer};
