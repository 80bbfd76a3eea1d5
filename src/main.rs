//! Resume scanner: keyword and heuristic resume scoring against job descriptions

use clap::Parser;
use indicatif::{ProgressBar, ProgressFinish, ProgressStyle};
use log::{error, info};
use resume_scanner::cli::{self, AnalyzeArgs, Cli, Commands, ConfigAction};
use resume_scanner::config::{Config, OutputConfig, OutputFormat};
use resume_scanner::error::{Result, ResumeScannerError};
use resume_scanner::input::InputManager;
use resume_scanner::output::{save_report_to_file, suggest_filename, ReportGenerator, ScanReport};
use resume_scanner::processing::ResumeScorer;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

const INLINE_SOURCE: &str = "inline text";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze(args, config).await,

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config)
                        .map_err(|e| ResumeScannerError::Configuration(e.to_string()))?;
                    println!("⚙️  Configuration ({})\n", config_path.display());
                    println!("{}", content);
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(config_path)?;
                    println!("✅ Configuration reset: {}", config_path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", config_path.display());
                }
            }
            Ok(())
        }
    }
}

async fn analyze(args: AnalyzeArgs, config: Config) -> Result<()> {
    info!("Starting resume analysis");

    if let Some(resume) = &args.resume.resume {
        cli::validate_file_extension(resume, cli::RESUME_EXTENSIONS)
            .map_err(|e| ResumeScannerError::InvalidInput(format!("Resume file: {}", e)))?;
    }
    if let Some(job) = &args.job.job {
        cli::validate_file_extension(job, cli::JOB_EXTENSIONS).map_err(|e| {
            ResumeScannerError::InvalidInput(format!("Job description file: {}", e))
        })?;
    }

    let output_format = match &args.output {
        Some(format) => cli::parse_output_format(format).map_err(ResumeScannerError::InvalidInput)?,
        None => config.output.format,
    };

    let spinner = ProgressBar::new_spinner().with_finish(ProgressFinish::AndClear);
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut input_manager = InputManager::from_config(&config.input);

    let (resume_text, resume_source) = match (&args.resume.resume, &args.resume.resume_text) {
        (Some(path), _) => {
            spinner.set_message("Reading resume...");
            (input_manager.extract_text(path).await?, path.display().to_string())
        }
        (None, Some(text)) => (text.clone(), INLINE_SOURCE.to_string()),
        (None, None) => {
            return Err(ResumeScannerError::InvalidInput("No resume given".to_string()));
        }
    };

    let (job_text, job_source) = match (&args.job.job, &args.job.job_text) {
        (Some(path), _) => {
            spinner.set_message("Reading job description...");
            (input_manager.extract_text(path).await?, path.display().to_string())
        }
        (None, Some(text)) => (text.clone(), INLINE_SOURCE.to_string()),
        (None, None) => {
            return Err(ResumeScannerError::InvalidInput("No job description given".to_string()));
        }
    };

    cli::validate_input_text("Resume text", &resume_text)
        .and_then(|_| cli::validate_input_text("Job description", &job_text))
        .map_err(ResumeScannerError::InvalidInput)?;

    spinner.set_message("Scoring resume...");
    let analysis = ResumeScorer::new().analyze(&resume_text, &job_text);
    spinner.finish_and_clear();
    info!("Overall score: {}%", analysis.overall_score);

    let report = ScanReport::new(analysis, resume_source, job_source);

    let output_config = OutputConfig {
        detailed: args.detailed || config.output.detailed,
        // Never write color escapes into a saved file
        color_output: config.output.color_output && !args.no_color && args.save.is_none(),
        ..config.output
    };
    let generator = ReportGenerator::from_config(&output_config);
    let rendered = generator.generate_report(&report, output_format)?;

    match args.save {
        Some(save) => {
            let target = resolve_save_path(
                save,
                output_format,
                args.resume.resume.as_deref(),
                output_config.timestamp_filenames,
            );
            save_report_to_file(&rendered, &target)?;
            println!("✅ Report saved to {}", target.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// A directory target gets a file name derived from the resume file, if any.
fn resolve_save_path(
    save: PathBuf,
    format: OutputFormat,
    resume: Option<&Path>,
    timestamp: bool,
) -> PathBuf {
    if save.is_dir() {
        let resume_name = resume.map_or_else(|| "resume".into(), Path::to_string_lossy);
        save.join(suggest_filename(format, &resume_name, timestamp))
    } else {
        save
    }
}
