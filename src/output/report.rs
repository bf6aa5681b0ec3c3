//! Match report assembly

use crate::optimizer::{suggest_improvements, Suggestion};
use crate::processing::analyzer::{AnalysisRecord, Analyzer};
use crate::processing::scorer::{calculate_match_score, MatchBreakdown};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Everything one scoring run produces, ready for any formatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub resume_path: String,
    pub job_path: String,
    pub generated_at: DateTime<Utc>,
    pub total_score: f64,
    pub breakdown: MatchBreakdown,
    pub resume_analysis: AnalysisRecord,
    pub job_analysis: AnalysisRecord,
    pub suggestions: Vec<Suggestion>,
    pub resume_word_count: usize,
    pub job_word_count: usize,
}

impl MatchReport {
    /// Run the full analysis pipeline over a resume/job text pair.
    pub fn generate(
        analyzer: &Analyzer,
        resume_text: &str,
        job_text: &str,
        resume_path: &str,
        job_path: &str,
        include_suggestions: bool,
    ) -> Self {
        let resume_analysis = analyzer.analyze_resume(resume_text);
        let job_analysis = analyzer.analyze_job_description(job_text);
        let (total_score, breakdown) = calculate_match_score(&resume_analysis, &job_analysis);

        let suggestions = if include_suggestions {
            suggest_improvements(resume_text, &job_analysis, total_score)
        } else {
            Vec::new()
        };

        Self {
            resume_path: resume_path.to_string(),
            job_path: job_path.to_string(),
            generated_at: Utc::now(),
            total_score,
            breakdown,
            resume_analysis,
            job_analysis,
            suggestions,
            resume_word_count: resume_text.unicode_words().count(),
            job_word_count: job_text.unicode_words().count(),
        }
    }

    /// Coarse quality bucket for presentation.
    pub fn rating(&self) -> &'static str {
        match self.total_score {
            s if s >= 80.0 => "Excellent",
            s if s >= 60.0 => "Good",
            s if s >= 40.0 => "Fair",
            _ => "Poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_generation() {
        let analyzer = Analyzer::new();
        let report = MatchReport::generate(
            &analyzer,
            "Built python services. Led migrations.",
            "Requirements: python, docker. You will have built and led projects.",
            "resume.txt",
            "job.txt",
            true,
        );

        assert!(report.total_score > 0.0);
        assert!(report.total_score <= 100.0);
        assert_eq!(report.total_score, report.breakdown.total_score);
        assert!(report.resume_word_count > 0);
        assert!(report.job_word_count > 0);
        assert!(report.breakdown.missing_required_skills.contains("docker"));
    }

    #[test]
    fn test_suggestions_can_be_disabled() {
        let analyzer = Analyzer::new();
        let report = MatchReport::generate(
            &analyzer,
            "empty resume",
            "Requirements: python.",
            "resume.txt",
            "job.txt",
            false,
        );
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_rating_buckets() {
        let analyzer = Analyzer::new();
        let mut report =
            MatchReport::generate(&analyzer, "", "", "resume.txt", "job.txt", false);

        report.total_score = 85.0;
        assert_eq!(report.rating(), "Excellent");
        report.total_score = 60.0;
        assert_eq!(report.rating(), "Good");
        report.total_score = 45.5;
        assert_eq!(report.rating(), "Fair");
        report.total_score = 12.0;
        assert_eq!(report.rating(), "Poor");
    }
}
