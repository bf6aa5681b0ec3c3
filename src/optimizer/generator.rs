//! Pluggable text-generation seam for resume rewriting and cover letters
//!
//! The real generative backend is an external capability. This module
//! defines the trait the rest of the tool talks to and ships a
//! deterministic mock so every command works offline.

use crate::error::Result;
use crate::processing::analyzer::AnalysisRecord;
use serde::{Deserialize, Serialize};

const MAX_INJECTED_SKILLS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationLevel {
    Conservative,
    Balanced,
    Aggressive,
}

impl Default for OptimizationLevel {
    fn default() -> Self {
        Self::Balanced
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub optimized_content: String,
    pub optimizations_applied: Vec<String>,
    pub suggested_improvements: Vec<String>,
    pub action_words_added: Vec<String>,
}

/// Text-generation capability consumed by the optimizer boundary. Callers
/// with access to a real generative service implement this themselves.
pub trait TextGenerator {
    fn optimize_resume(
        &self,
        resume_text: &str,
        job: &AnalysisRecord,
        resume: &AnalysisRecord,
        level: OptimizationLevel,
    ) -> Result<OptimizationResult>;

    fn generate_cover_letter(
        &self,
        resume_text: &str,
        job_text: &str,
        company_name: &str,
        job_title: &str,
    ) -> Result<String>;
}

/// Deterministic fallback generator. Appends the job's leading missing
/// technical skills to a skills line and emits a templated cover letter.
pub struct MockGenerator;

impl MockGenerator {
    fn missing_skills<'a>(job: &'a AnalysisRecord, resume: &AnalysisRecord) -> Vec<&'a str> {
        job.technical_skills
            .iter()
            .map(String::as_str)
            .filter(|skill| !resume.all_keywords.contains(*skill))
            .take(MAX_INJECTED_SKILLS)
            .collect()
    }
}

impl TextGenerator for MockGenerator {
    fn optimize_resume(
        &self,
        resume_text: &str,
        job: &AnalysisRecord,
        resume: &AnalysisRecord,
        _level: OptimizationLevel,
    ) -> Result<OptimizationResult> {
        let missing = Self::missing_skills(job, resume);

        let optimizations_applied = missing
            .iter()
            .map(|skill| format!("Added keyword '{}' to skills section", skill))
            .collect();

        let optimized_content = if missing.is_empty() {
            resume_text.to_string()
        } else {
            format!("{}\n\nSkills: {}", resume_text, missing.join(", "))
        };

        Ok(OptimizationResult {
            optimized_content,
            optimizations_applied,
            suggested_improvements: vec![
                "Consider adding quantifiable achievements".to_string(),
                "Use more action verbs like 'implemented', 'optimized', 'led'".to_string(),
                "Tailor your summary to match the job description".to_string(),
            ],
            action_words_added: vec![
                "implemented".to_string(),
                "optimized".to_string(),
                "developed".to_string(),
            ],
        })
    }

    fn generate_cover_letter(
        &self,
        _resume_text: &str,
        _job_text: &str,
        company_name: &str,
        job_title: &str,
    ) -> Result<String> {
        Ok(format!(
            "Dear Hiring Manager,\n\n\
             I am writing to express my strong interest in the {title} position at \
             {company}. With my background in software development and proven track \
             record of delivering high-quality solutions, I am confident I would be \
             a valuable addition to your team.\n\n\
             Throughout my career, I have developed expertise in modern development \
             technologies and practices. I am particularly excited about this \
             opportunity at {company} because of your innovative approach and \
             commitment to excellence.\n\n\
             My experience aligns well with your requirements, and I am eager to \
             contribute to your team's success. I would welcome the opportunity to \
             discuss how my skills and experience can benefit {company}.\n\n\
             Thank you for considering my application.\n\n\
             Best regards,\n\
             [Your Name]\n",
            title = job_title,
            company = company_name,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::Analyzer;

    #[test]
    fn test_mock_optimize_appends_missing_skills() {
        let analyzer = Analyzer::new();
        let job = analyzer.analyze_job_description("Requirements: python, docker, aws.");
        let resume_text = "Shipped services in python.";
        let resume = analyzer.analyze_resume(resume_text);

        let result = MockGenerator
            .optimize_resume(resume_text, &job, &resume, OptimizationLevel::Balanced)
            .unwrap();

        assert!(result.optimized_content.starts_with(resume_text));
        assert!(result.optimized_content.contains("docker"));
        assert!(result.optimized_content.contains("aws"));
        assert!(!result
            .optimizations_applied
            .iter()
            .any(|o| o.contains("'python'")));
    }

    #[test]
    fn test_mock_optimize_is_deterministic() {
        let analyzer = Analyzer::new();
        let job = analyzer.analyze_job_description("Requirements: python, react.");
        let resume = analyzer.analyze_resume("I use go.");

        let first = MockGenerator
            .optimize_resume("I use go.", &job, &resume, OptimizationLevel::Aggressive)
            .unwrap();
        let second = MockGenerator
            .optimize_resume("I use go.", &job, &resume, OptimizationLevel::Aggressive)
            .unwrap();
        assert_eq!(first.optimized_content, second.optimized_content);
        assert_eq!(first.optimizations_applied, second.optimizations_applied);
    }

    #[test]
    fn test_mock_cover_letter_mentions_company_and_title() {
        let letter = MockGenerator
            .generate_cover_letter("resume", "job", "Acme Corp", "Staff Engineer")
            .unwrap();
        assert!(letter.contains("Acme Corp"));
        assert!(letter.contains("Staff Engineer"));
        assert!(letter.starts_with("Dear Hiring Manager,"));
    }
}
