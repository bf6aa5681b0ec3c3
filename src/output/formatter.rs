//! Output formatters: console, JSON, and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::optimizer::Priority;
use crate::output::report::MatchReport;
use colored::Colorize;
use std::fmt::Write as _;
use std::path::Path;

/// Trait for rendering a match report into a target format.
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
}

/// Console formatter with colors and optional detail sections.
pub struct ConsoleFormatter {
    pub use_colors: bool,
    pub detailed: bool,
}

/// JSON formatter for API integration and structured data.
pub struct JsonFormatter {
    pub pretty: bool,
}

/// Markdown formatter for documentation and saved reports.
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    fn score_line(&self, report: &MatchReport) -> String {
        let text = format!("{:.2} / 100 ({})", report.total_score, report.rating());
        if !self.use_colors {
            return text;
        }
        match report.rating() {
            "Excellent" => text.as_str().green().bold().to_string(),
            "Good" => text.as_str().cyan().bold().to_string(),
            "Fair" => text.as_str().yellow().bold().to_string(),
            _ => text.as_str().red().bold().to_string(),
        }
    }

    fn priority_tag(&self, priority: Priority) -> String {
        let tag = format!("[{}]", priority);
        if !self.use_colors {
            return tag;
        }
        match priority {
            Priority::High => tag.as_str().red().to_string(),
            Priority::Medium => tag.as_str().yellow().to_string(),
            Priority::Low => tag.as_str().green().to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "{}", self.heading("Resume Match Report")).ok();
        writeln!(
            out,
            "Resume: {} ({} words)",
            report.resume_path, report.resume_word_count
        )
        .ok();
        writeln!(out, "Job:    {} ({} words)", report.job_path, report.job_word_count).ok();
        writeln!(out).ok();
        writeln!(out, "Match score: {}", self.score_line(report)).ok();
        writeln!(out).ok();

        writeln!(out, "{}", self.heading("Category breakdown")).ok();
        let scores = &report.breakdown.scores;
        writeln!(out, "  Technical skills  {:>6.2} / 40", scores.technical_skills).ok();
        writeln!(out, "  Required skills   {:>6.2} / 30", scores.required_skills).ok();
        writeln!(out, "  Soft skills       {:>6.2} / 15", scores.soft_skills).ok();
        writeln!(out, "  Action words      {:>6.2} / 15", scores.action_words).ok();
        writeln!(out).ok();

        if !report.breakdown.matching_skills.is_empty() {
            writeln!(
                out,
                "Matching skills: {}",
                join_set(&report.breakdown.matching_skills)
            )
            .ok();
        }
        if !report.breakdown.missing_required_skills.is_empty() {
            writeln!(
                out,
                "Missing required skills: {}",
                join_set(&report.breakdown.missing_required_skills)
            )
            .ok();
        }
        if !report.breakdown.missing_action_words.is_empty() {
            writeln!(
                out,
                "Missing action words: {}",
                join_set(&report.breakdown.missing_action_words)
            )
            .ok();
        }

        if !report.suggestions.is_empty() {
            writeln!(out).ok();
            writeln!(out, "{}", self.heading("Suggestions")).ok();
            for suggestion in &report.suggestions {
                writeln!(
                    out,
                    "  {} {}",
                    self.priority_tag(suggestion.priority),
                    suggestion.message
                )
                .ok();
                writeln!(out, "      {}", suggestion.impact).ok();
            }
        }

        if self.detailed {
            writeln!(out).ok();
            writeln!(out, "{}", self.heading("Job details")).ok();
            if report.job_analysis.experience_years > 0 {
                writeln!(
                    out,
                    "  Experience required: {} years",
                    report.job_analysis.experience_years
                )
                .ok();
            }
            if !report.job_analysis.education_requirements.is_empty() {
                writeln!(
                    out,
                    "  Education markers: {}",
                    join_set(&report.job_analysis.education_requirements)
                )
                .ok();
            }
            if !report.job_analysis.key_phrases.is_empty() {
                writeln!(out, "  Key phrases: {}", report.job_analysis.key_phrases.join(", "))
                    .ok();
            }
            if !report.resume_analysis.achievements.is_empty() {
                writeln!(out, "{}", self.heading("Resume achievements")).ok();
                for achievement in &report.resume_analysis.achievements {
                    writeln!(out, "  - {}", achievement).ok();
                }
            }
            if !report.job_analysis.keyword_frequency.is_empty() {
                writeln!(out, "{}", self.heading("Job keyword frequency")).ok();
                for (keyword, count) in &report.job_analysis.keyword_frequency {
                    writeln!(out, "  {:>2}  {}", count, keyword).ok();
                }
            }
        }

        Ok(out)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "# Resume Match Report").ok();
        writeln!(out).ok();
        writeln!(out, "- **Resume**: `{}` ({} words)", report.resume_path, report.resume_word_count).ok();
        writeln!(out, "- **Job**: `{}` ({} words)", report.job_path, report.job_word_count).ok();
        writeln!(out, "- **Generated**: {}", report.generated_at.to_rfc3339()).ok();
        writeln!(out).ok();
        writeln!(out, "## Score: {:.2} / 100 ({})", report.total_score, report.rating()).ok();
        writeln!(out).ok();

        writeln!(out, "| Category | Score | Weight |").ok();
        writeln!(out, "|----------|-------|--------|").ok();
        let scores = &report.breakdown.scores;
        writeln!(out, "| Technical skills | {:.2} | 40 |", scores.technical_skills).ok();
        writeln!(out, "| Required skills | {:.2} | 30 |", scores.required_skills).ok();
        writeln!(out, "| Soft skills | {:.2} | 15 |", scores.soft_skills).ok();
        writeln!(out, "| Action words | {:.2} | 15 |", scores.action_words).ok();
        writeln!(out).ok();

        writeln!(out, "## Skills").ok();
        writeln!(out).ok();
        writeln!(out, "- Matching: {}", join_set(&report.breakdown.matching_skills)).ok();
        writeln!(
            out,
            "- Missing required: {}",
            join_set(&report.breakdown.missing_required_skills)
        )
        .ok();
        writeln!(
            out,
            "- Missing action words: {}",
            join_set(&report.breakdown.missing_action_words)
        )
        .ok();

        if !report.suggestions.is_empty() {
            writeln!(out).ok();
            writeln!(out, "## Suggestions").ok();
            writeln!(out).ok();
            for suggestion in &report.suggestions {
                writeln!(
                    out,
                    "- **{}** ({}): {} -- _{}_",
                    suggestion.kind, suggestion.priority, suggestion.message, suggestion.impact
                )
                .ok();
            }
        }

        Ok(out)
    }
}

/// Dispatches to the formatter matching the requested output format and
/// handles saving to disk.
pub struct ReportGenerator {
    use_colors: bool,
    detailed: bool,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    pub fn format(&self, report: &MatchReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => ConsoleFormatter {
                use_colors: self.use_colors,
                detailed: self.detailed,
            }
            .format_report(report),
            OutputFormat::Json => JsonFormatter { pretty: true }.format_report(report),
            OutputFormat::Markdown => MarkdownFormatter.format_report(report),
        }
    }

    pub async fn save(
        &self,
        report: &MatchReport,
        format: OutputFormat,
        path: &Path,
    ) -> Result<()> {
        // Saved console output should stay free of ANSI escapes
        let rendered = match format {
            OutputFormat::Console => ConsoleFormatter {
                use_colors: false,
                detailed: self.detailed,
            }
            .format_report(report)?,
            other => self.format(report, other)?,
        };
        tokio::fs::write(path, rendered).await?;
        Ok(())
    }
}

fn join_set(set: &std::collections::BTreeSet<String>) -> String {
    if set.is_empty() {
        return "none".to_string();
    }
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}
