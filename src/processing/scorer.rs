//! Weighted match scoring between a resume record and a job record

use crate::processing::analyzer::AnalysisRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const TECHNICAL_SKILLS_WEIGHT: f64 = 40.0;
const REQUIRED_SKILLS_WEIGHT: f64 = 30.0;
const SOFT_SKILLS_WEIGHT: f64 = 15.0;
const ACTION_WORDS_WEIGHT: f64 = 15.0;

/// Weighted sub-score per category. The weights sum to 100, so the total
/// is bounded to [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub technical_skills: f64,
    pub required_skills: f64,
    pub soft_skills: f64,
    pub action_words: f64,
}

impl CategoryScores {
    pub fn total(&self) -> f64 {
        self.technical_skills + self.required_skills + self.soft_skills + self.action_words
    }
}

/// Detailed breakdown accompanying a match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub scores: CategoryScores,
    /// Sum of the sub-scores, rounded to two decimals.
    pub total_score: f64,
    pub missing_required_skills: BTreeSet<String>,
    pub matching_skills: BTreeSet<String>,
    pub missing_action_words: BTreeSet<String>,
}

/// Score how well a resume matches a job description, 0 to 100.
///
/// Each category contributes `|resume ∩ job| / |job| * weight`; a category
/// the job does not mention contributes 0 rather than penalizing the
/// resume, which also keeps the ratios free of division by zero. The
/// required-skills category compares the resume's technical skills against
/// the job's required list, since resumes carry no required section.
pub fn calculate_match_score(
    resume: &AnalysisRecord,
    job: &AnalysisRecord,
) -> (f64, MatchBreakdown) {
    let resume_tech: BTreeSet<&str> = resume.technical_skills.iter().map(String::as_str).collect();
    let job_tech: BTreeSet<&str> = job.technical_skills.iter().map(String::as_str).collect();
    let job_required: BTreeSet<&str> = job.required_skills.iter().map(String::as_str).collect();
    let resume_soft: BTreeSet<&str> = resume.soft_skills.iter().map(String::as_str).collect();
    let job_soft: BTreeSet<&str> = job.soft_skills.iter().map(String::as_str).collect();
    let resume_actions: BTreeSet<&str> = resume.action_words.iter().map(String::as_str).collect();
    let job_actions: BTreeSet<&str> = job.action_words.iter().map(String::as_str).collect();

    let scores = CategoryScores {
        technical_skills: weighted_overlap(&resume_tech, &job_tech, TECHNICAL_SKILLS_WEIGHT),
        required_skills: weighted_overlap(&resume_tech, &job_required, REQUIRED_SKILLS_WEIGHT),
        soft_skills: weighted_overlap(&resume_soft, &job_soft, SOFT_SKILLS_WEIGHT),
        action_words: weighted_overlap(&resume_actions, &job_actions, ACTION_WORDS_WEIGHT),
    };

    let total_score = round2(scores.total());

    let breakdown = MatchBreakdown {
        missing_required_skills: job_required
            .difference(&resume_tech)
            .map(|s| s.to_string())
            .collect(),
        matching_skills: resume_tech
            .intersection(&job_tech)
            .map(|s| s.to_string())
            .collect(),
        missing_action_words: job_actions
            .difference(&resume_actions)
            .map(|s| s.to_string())
            .collect(),
        scores,
        total_score,
    };

    (total_score, breakdown)
}

fn weighted_overlap(resume: &BTreeSet<&str>, job: &BTreeSet<&str>, weight: f64) -> f64 {
    if job.is_empty() {
        return 0.0;
    }
    let matched = resume.intersection(job).count();
    matched as f64 / job.len() as f64 * weight
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
