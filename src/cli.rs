//! CLI interface for the resume matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Deterministic resume and job description match scoring tool")]
#[command(
    long_about = "Score how well a resume matches a job posting using lexicon-based \
                  keyword extraction and a weighted, explainable match score"
)]
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
    /// Score a resume against a job description
    Score {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include detailed analysis sections
        #[arg(short, long)]
        detailed: bool,

        /// Skip improvement suggestions
        #[arg(long)]
        no_suggestions: bool,
    },

    /// Analyze a single job description or resume and dump the record
    Analyze {
        /// Path to the text file (TXT, MD)
        file: PathBuf,

        /// Treat the file as a job description or a resume
        #[arg(short, long, value_enum)]
        kind: AnalysisKind,

        /// Output format: json, console
        #[arg(short, long, default_value = "json")]
        output: String,
    },

    /// Print improvement suggestions for a resume/job pair
    Suggest {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,
    },

    /// Generate a cover letter for a resume/job pair
    CoverLetter {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Company name to address
        #[arg(long)]
        company: String,

        /// Job title to reference
        #[arg(long)]
        title: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum AnalysisKind {
    Job,
    Resume,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

pub fn validate_file_extension(
    path: &Path,
    allowed: &[&str],
) -> std::result::Result<(), String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    if allowed.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(format!(
            "unsupported extension '{}' (expected one of: {})",
            extension,
            allowed.join(", ")
        ))
    }
}

pub fn parse_output_format(value: &str) -> std::result::Result<OutputFormat, String> {
    match value.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        other => Err(format!(
            "unknown output format '{}' (expected console, json, or markdown)",
            other
        )),
    }
}
