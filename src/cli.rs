//! CLI interface for the resume scanner

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-scanner")]
#[command(about = "Score a resume against a job description")]
#[command(long_about = "Score resume compatibility with a job description using skill \
vocabularies, experience and education heuristics, and keyword matching")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze(AnalyzeArgs),

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub resume: ResumeSource,

    #[command(flatten)]
    pub job: JobSource,

    /// Output format: console, json, markdown, html
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to file
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Include the detailed analysis section
    #[arg(short, long)]
    pub detailed: bool,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct ResumeSource {
    /// Path to resume file (TXT, MD, PDF)
    #[arg(short, long)]
    pub resume: Option<PathBuf>,

    /// Resume text given inline
    #[arg(long)]
    pub resume_text: Option<String>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct JobSource {
    /// Path to job description file (TXT, MD)
    #[arg(short, long)]
    pub job: Option<PathBuf>,

    /// Job description given inline
    #[arg(long)]
    pub job_text: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

pub const RESUME_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "pdf"];
pub const JOB_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

/// Reject input with no text at all; whitespace-only text is scored as given
pub fn validate_input_text(label: &str, text: &str) -> Result<(), String> {
    if text.is_empty() {
        Err(format!("{} is empty", label))
    } else {
        Ok(())
    }
}
