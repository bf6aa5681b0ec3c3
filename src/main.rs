//! Resume matcher: deterministic resume and job description match scoring

use clap::Parser;
use log::{error, info};
use resume_matcher::cli::{self, AnalysisKind, Cli, Commands, ConfigAction};
use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::error::{MatcherError, Result};
use resume_matcher::input::manager::InputManager;
use resume_matcher::optimizer::{suggest_improvements, MockGenerator, TextGenerator};
use resume_matcher::output::{MatchReport, ReportGenerator};
use resume_matcher::processing::analyzer::Analyzer;
use resume_matcher::processing::scorer::calculate_match_score;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            output,
            save,
            detailed,
            no_suggestions,
        } => {
            validate_text_file(&resume, "Resume")?;
            validate_text_file(&job, "Job description")?;

            let output_format =
                cli::parse_output_format(&output).map_err(MatcherError::InvalidInput)?;
            let detailed = detailed || config.output.detailed;
            let include_suggestions = !no_suggestions && config.output.include_suggestions;

            info!("Scoring {} against {}", resume.display(), job.display());

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let analyzer = Analyzer::new();
            let report = MatchReport::generate(
                &analyzer,
                &resume_text,
                &job_text,
                &resume.to_string_lossy(),
                &job.to_string_lossy(),
                include_suggestions,
            );

            let generator = ReportGenerator::new(config.output.color_output, detailed);
            println!("{}", generator.format(&report, output_format)?);

            if let Some(save_path) = save {
                generator.save(&report, output_format, &save_path).await?;
                info!("Report saved to {}", save_path.display());
            }
        }

        Commands::Analyze { file, kind, output } => {
            validate_text_file(&file, "Input")?;

            let mut input_manager = InputManager::new();
            let text = input_manager.extract_text(&file).await?;

            let analyzer = Analyzer::new();
            let record = match kind {
                AnalysisKind::Job => analyzer.analyze_job_description(&text),
                AnalysisKind::Resume => analyzer.analyze_resume(&text),
            };

            match cli::parse_output_format(&output).map_err(MatcherError::InvalidInput)? {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
                OutputFormat::Console => print_record(&record, kind),
                OutputFormat::Markdown => {
                    return Err(MatcherError::InvalidInput(
                        "analyze supports json or console output".to_string(),
                    ))
                }
            }
        }

        Commands::Suggest { resume, job } => {
            validate_text_file(&resume, "Resume")?;
            validate_text_file(&job, "Job description")?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let analyzer = Analyzer::new();
            let resume_record = analyzer.analyze_resume(&resume_text);
            let job_record = analyzer.analyze_job_description(&job_text);
            let (score, _) = calculate_match_score(&resume_record, &job_record);

            println!("Match score: {:.2}", score);
            let suggestions = suggest_improvements(&resume_text, &job_record, score);
            if suggestions.is_empty() {
                println!("No suggestions - the resume already covers the job's leading asks.");
            }
            for suggestion in suggestions {
                println!("[{}] {}", suggestion.priority, suggestion.message);
                println!("    {}", suggestion.impact);
            }
        }

        Commands::CoverLetter {
            resume,
            job,
            company,
            title,
        } => {
            validate_text_file(&resume, "Resume")?;
            validate_text_file(&job, "Job description")?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let letter =
                MockGenerator.generate_cover_letter(&resume_text, &job_text, &company, &title)?;
            println!("{}", letter);
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    MatcherError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
            }
            ConfigAction::Reset => {
                Config::default().save()?;
                println!("Configuration reset to defaults.");
            }
            ConfigAction::Path => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}

fn validate_text_file(path: &Path, label: &str) -> Result<()> {
    cli::validate_file_extension(path, &["txt", "md", "markdown"])
        .map_err(|e| MatcherError::InvalidInput(format!("{} file: {}", label, e)))
}

fn print_record(record: &resume_matcher::AnalysisRecord, kind: AnalysisKind) {
    match kind {
        AnalysisKind::Job => {
            println!("Required skills:  {}", record.required_skills.join(", "));
            println!("Preferred skills: {}", record.preferred_skills.join(", "));
            println!("Experience years: {}", record.experience_years);
            println!(
                "Education:        {}",
                record
                    .education_requirements
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!("Key phrases:      {}", record.key_phrases.join(", "));
        }
        AnalysisKind::Resume => {
            println!("Achievements:");
            for achievement in &record.achievements {
                println!("  - {}", achievement);
            }
        }
    }
    println!("Technical skills: {}", record.technical_skills.join(", "));
    println!("Soft skills:      {}", record.soft_skills.join(", "));
    println!("Action words:     {}", record.action_words.join(", "));
}
