//! Output formatters for analysis reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::report::ScanReport;
use crate::processing::result::ScoreBand;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Width of the console score bars, in cells.
const BAR_WIDTH: usize = 20;

/// Trait for formatting scan reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String>;
}

/// Console formatter with colors and score bars
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with per-category progress bars
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Analysis Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; border-bottom: 3px solid #2563eb; padding-bottom: 20px; }
        .overall { font-size: 3em; font-weight: bold; }
        .score-strong { color: #16a34a; }
        .score-moderate { color: #ca8a04; }
        .score-weak { color: #dc2626; }
        .categories { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 15px; }
        .category { background: #f8f9fa; padding: 15px; border-radius: 6px; }
        .bar { background: #e5e7eb; border-radius: 9999px; height: 8px; }
        .bar > div { height: 8px; border-radius: 9999px; }
        .bar .score-strong { background: #22c55e; }
        .bar .score-moderate { background: #eab308; }
        .bar .score-weak { background: #ef4444; }
        .chip { display: inline-block; padding: 2px 12px; margin: 3px; border-radius: 9999px; font-size: 0.9em; }
        .matched { background: #dcfce7; color: #166534; }
        .missing { background: #fee2e2; color: #991b1b; }
        .keyword { background: #f3e8ff; color: #6b21a8; }
        .recommendation { background: #fefce8; border-left: 4px solid #facc15; padding: 10px 15px; margin: 8px 0; }
        .metadata { background: #e9ecef; padding: 15px; border-radius: 6px; margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Resume Analysis Report</h1>
            <div class="overall {{ overall_class }}">{{ overall_score }}%</div>
            <p><strong>{{ verdict }}</strong></p>
        </div>

        <div class="categories">
            {% for category in categories %}
            <div class="category">
                <h4>{{ category.label }}: {{ category.score }}%</h4>
                <div class="bar"><div class="{{ category.css_class }}" style="width: {{ category.score }}%"></div></div>
            </div>
            {% endfor %}
        </div>

        <h2>Strengths</h2>
        <ul>
            {% for strength in strengths %}<li>{{ strength }}</li>{% endfor %}
        </ul>

        <h2>Areas for Improvement</h2>
        <ul>
            {% for improvement in improvements %}<li>{{ improvement }}</li>{% endfor %}
        </ul>

        <h2>Skills Analysis</h2>
        <h4>Matched Skills ({{ matched_skills.len() }})</h4>
        <div>{% for skill in matched_skills %}<span class="chip matched">{{ skill }}</span>{% endfor %}</div>
        <h4>Missing Skills ({{ missing_skills.len() }})</h4>
        <div>{% for skill in missing_skills %}<span class="chip missing">{{ skill }}</span>{% endfor %}</div>

        <h2>Recommendations</h2>
        {% for recommendation in recommendations %}
        <div class="recommendation">{{ recommendation }}</div>
        {% endfor %}

        <h2>Keyword Analysis</h2>
        <h4>Found Keywords</h4>
        <div>{% for keyword in matched_keywords %}<span class="chip keyword">{{ keyword }}</span>{% endfor %}</div>

        <div class="metadata">
            <p><strong>Generated by Resume Scanner v{{ version }}</strong> on {{ generated_at }}</p>
            <p><strong>Resume:</strong> {{ resume_source }} | <strong>Job:</strong> {{ job_source }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate<'a> {
    include_styles: bool,
    overall_score: u8,
    overall_class: &'static str,
    verdict: String,
    categories: Vec<HtmlCategory>,
    strengths: &'a [String],
    improvements: &'a [String],
    matched_skills: &'a [String],
    missing_skills: &'a [String],
    recommendations: &'a [String],
    matched_keywords: &'a [String],
    version: &'a str,
    generated_at: String,
    resume_source: &'a str,
    job_source: &'a str,
}

struct HtmlCategory {
    label: &'static str,
    score: u8,
    css_class: &'static str,
}

fn band_color(score: u8) -> Color {
    match ScoreBand::of(score) {
        ScoreBand::Strong => Color::Green,
        ScoreBand::Moderate => Color::Yellow,
        ScoreBand::Weak => Color::Red,
    }
}

/// Filled/empty cell bar proportional to a 0-100 score.
fn score_bar(score: u8, width: usize) -> String {
    let filled = ((score.min(100) as usize * width) + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score(&self, score: u8) -> String {
        self.colorize(&format!("{:>3}%", score), band_color(score))
    }

    fn format_list(&self, output: &mut String, title: &str, items: &[String], color: Color) {
        output.push_str(&self.format_header(title, 3));
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
    }

    fn format_detailed(&self, output: &mut String, report: &ScanReport) {
        let details = &report.analysis.detailed_analysis;

        output.push_str(&self.format_header("📊 Detailed Analysis", 2));
        output.push_str(&format!(
            "Technical skills in resume: {}\n",
            join_or_none(&details.skills_analysis.technical)
        ));
        output.push_str(&format!(
            "Soft skills in resume: {}\n",
            join_or_none(&details.skills_analysis.soft)
        ));
        output.push_str(&format!(
            "Years of experience: {}\n",
            details.experience_analysis.relevant_years
        ));
        output.push_str(&format!(
            "Matching roles: {}\n",
            join_or_none(&details.experience_analysis.matching_roles)
        ));
        output.push_str(&format!(
            "Industry match: {}\n",
            if details.experience_analysis.industry_match { "yes" } else { "no" }
        ));

        if !details.keyword_density.is_empty() {
            output.push_str(&self.format_header("Keyword Density", 3));
            for (word, count) in details.keyword_density.iter() {
                let count_text = if count == 0 {
                    self.colorize("missing", Color::Red)
                } else {
                    count.to_string()
                };
                output.push_str(&format!("  {:<24} {}\n", word, count_text));
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME ANALYSIS", 1));
        output.push_str(&format!("Generated: {}\n", report.generated_at_display()));

        output.push_str(&self.format_header("Overall Score", 2));
        output.push_str(&format!(
            "Overall Score: {} [{}]\n",
            self.format_score(analysis.overall_score),
            report.overall_band().label()
        ));
        output.push_str(&format!("Verdict: {}\n", self.colorize(&report.verdict(), Color::Cyan)));

        output.push_str(&self.format_header("Category Scores", 3));
        for (label, score) in analysis.category_scores.labelled() {
            output.push_str(&format!(
                "  {:<14} {} {}\n",
                label,
                self.colorize(&score_bar(score, BAR_WIDTH), band_color(score)),
                self.format_score(score)
            ));
        }

        output.push_str(&self.format_header("🎯 Skills Analysis", 2));
        output.push_str(&format!(
            "Matched Skills ({}): {}\n",
            analysis.matched_skills.len(),
            self.colorize(&join_or_none(&analysis.matched_skills), Color::Green)
        ));
        output.push_str(&format!(
            "Missing Skills ({}): {}\n",
            analysis.missing_skills.len(),
            self.colorize(&join_or_none(&analysis.missing_skills), Color::Red)
        ));
        output.push_str(&format!(
            "Found Keywords ({}): {}\n",
            analysis.matched_keywords.len(),
            self.colorize(&join_or_none(&analysis.matched_keywords), Color::Magenta)
        ));

        self.format_list(&mut output, "✅ Strengths", &analysis.strengths, Color::Green);
        self.format_list(
            &mut output,
            "🎯 Areas for Improvement",
            &analysis.improvements,
            Color::Yellow,
        );

        output.push_str(&self.format_header("💡 Recommendations", 2));
        for (i, recommendation) in analysis.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, recommendation));
        }

        if self.detailed {
            self.format_detailed(&mut output, report);
        }

        output.push_str(&format!(
            "\n{} Generated by Resume Scanner v{} | Resume: {} | Job: {}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.scanner_version,
            report.metadata.resume_source,
            report.metadata.job_source
        ));

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match ScoreBand::of(score) {
            ScoreBand::Strong => "🟢",
            ScoreBand::Moderate => "🟡",
            ScoreBand::Weak => "🔴",
        }
    }

    fn push_bullets(output: &mut String, title: &str, items: &[String]) {
        output.push_str(&format!("## {}\n\n", title));
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }

    fn code_list(items: &[String]) -> String {
        if items.is_empty() {
            "_none_".to_string()
        } else {
            format!("`{}`", items.join("`, `"))
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str("# 📊 Resume Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!("**Generated:** {}\n", report.generated_at_display()));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.resume_source, report.metadata.job_source
            ));
        }

        output.push_str(&format!(
            "**Overall Score:** {}% {} {}\n\n",
            analysis.overall_score,
            Self::markdown_score_badge(analysis.overall_score),
            report.overall_band().label()
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.verdict()));

        output.push_str("## Category Scores\n\n");
        output.push_str("| Category | Score |\n");
        output.push_str("|----------|-------|\n");
        for (label, score) in analysis.category_scores.labelled() {
            let badge = Self::markdown_score_badge(score);
            output.push_str(&format!("| {} | {}% {} |\n", label, score, badge));
        }
        output.push('\n');

        output.push_str("## Skills Analysis\n\n");
        output.push_str(&format!(
            "**Matched Skills ({}):** {}\n\n",
            analysis.matched_skills.len(),
            Self::code_list(&analysis.matched_skills)
        ));
        output.push_str(&format!(
            "**Missing Skills ({}):** {}\n\n",
            analysis.missing_skills.len(),
            Self::code_list(&analysis.missing_skills)
        ));
        output.push_str(&format!(
            "**Found Keywords:** {}\n\n",
            Self::code_list(&analysis.matched_keywords)
        ));

        Self::push_bullets(&mut output, "✅ Strengths", &analysis.strengths);
        Self::push_bullets(&mut output, "🎯 Areas for Improvement", &analysis.improvements);
        Self::push_bullets(&mut output, "💡 Recommendations", &analysis.recommendations);

        let density = &analysis.detailed_analysis.keyword_density;
        if !density.is_empty() {
            output.push_str("## Keyword Density\n\n");
            output.push_str("| Job keyword | Count in job (0 if absent from resume) |\n");
            output.push_str("|-------------|------|\n");
            for (word, count) in density.iter() {
                output.push_str(&format!("| `{}` | {} |\n", word, count));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Resume Scanner v{}*\n",
                report.metadata.scanner_version
            ));
        }

        Ok(output)
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data<'a>(&self, report: &'a ScanReport) -> HtmlTemplate<'a> {
        let analysis = &report.analysis;

        let categories = analysis
            .category_scores
            .labelled()
            .into_iter()
            .map(|(label, score)| HtmlCategory {
                label,
                score,
                css_class: ScoreBand::of(score).css_class(),
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            overall_score: analysis.overall_score,
            overall_class: report.overall_band().css_class(),
            verdict: report.verdict(),
            categories,
            strengths: &analysis.strengths,
            improvements: &analysis.improvements,
            matched_skills: &analysis.matched_skills,
            missing_skills: &analysis.missing_skills,
            recommendations: &analysis.recommendations,
            matched_keywords: &analysis.matched_keywords,
            version: &report.metadata.scanner_version,
            generated_at: report.generated_at_display(),
            resume_source: &report.metadata.resume_source,
            job_source: &report.metadata.job_source,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &ScanReport) -> Result<String> {
        Ok(self.create_template_data(report).render()?)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::with_options(config.color_output, config.detailed, config.pretty_json, true)
    }

    pub fn generate_report(&self, report: &ScanReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    format!("{}_analysis{}.{}", base_name, timestamp_suffix, format.extension())
}
