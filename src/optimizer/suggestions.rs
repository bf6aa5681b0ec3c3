//! Rule-based improvement suggestions derived from a job analysis

use crate::processing::analyzer::AnalysisRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Only the leading entries of each job list are worth nagging about.
const TOP_ENTRIES: usize = 5;
const ACHIEVEMENT_THRESHOLD: f64 = 70.0;
const KEYWORD_THRESHOLD: f64 = 60.0;
const MAX_LISTED_KEYWORDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    MissingSkill,
    ActionWord,
    Achievement,
    Keywords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SuggestionKind::MissingSkill => "missing_skill",
            SuggestionKind::ActionWord => "action_word",
            SuggestionKind::Achievement => "achievement",
            SuggestionKind::Keywords => "keywords",
        };
        write!(f, "{}", name)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub priority: Priority,
    pub message: String,
    pub impact: String,
}

/// Suggest concrete edits that would raise the match score.
///
/// Emission order: missing required skills, then action words, then the
/// achievement nudge (score below 70), then the keyword gap list (score
/// below 60). Each block is emitted only when its condition holds.
pub fn suggest_improvements(
    resume_text: &str,
    job: &AnalysisRecord,
    match_score: f64,
) -> Vec<Suggestion> {
    let resume_lower = resume_text.to_lowercase();
    let mut suggestions = Vec::new();

    for skill in job.required_skills.iter().take(TOP_ENTRIES) {
        if !resume_lower.contains(&skill.to_lowercase()) {
            suggestions.push(Suggestion {
                kind: SuggestionKind::MissingSkill,
                priority: Priority::High,
                message: format!(
                    "Add \"{}\" to your skills or experience section if you have experience with it",
                    skill
                ),
                impact: "Could increase match score by 5-10%".to_string(),
            });
        }
    }

    for word in job.action_words.iter().take(TOP_ENTRIES) {
        if !resume_lower.contains(word.as_str()) {
            suggestions.push(Suggestion {
                kind: SuggestionKind::ActionWord,
                priority: Priority::Medium,
                message: format!(
                    "Consider using the action verb \"{}\" to describe your achievements",
                    word
                ),
                impact: "Improves readability and ATS compatibility".to_string(),
            });
        }
    }

    if match_score < ACHIEVEMENT_THRESHOLD {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Achievement,
            priority: Priority::High,
            message: "Add quantifiable achievements (e.g., \"Increased performance by 30%\")"
                .to_string(),
            impact: "Makes your impact more concrete and impressive".to_string(),
        });
    }

    if match_score < KEYWORD_THRESHOLD {
        let tokens: HashSet<&str> = resume_lower.split_whitespace().collect();
        let missing_keywords: Vec<&str> = job
            .technical_skills
            .iter()
            .map(String::as_str)
            .filter(|skill| !tokens.contains(skill))
            .take(MAX_LISTED_KEYWORDS)
            .collect();

        if !missing_keywords.is_empty() {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Keywords,
                priority: Priority::High,
                message: format!("Add these relevant keywords: {}", missing_keywords.join(", ")),
                impact: "Improves ATS scan score significantly".to_string(),
            });
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::Analyzer;

    fn job_record(required: &[&str], technical: &[&str], actions: &[&str]) -> AnalysisRecord {
        let mut record = Analyzer::new().analyze_job_description("");
        record.required_skills = required.iter().map(|s| s.to_string()).collect();
        record.technical_skills = technical.iter().map(|s| s.to_string()).collect();
        record.action_words = actions.iter().map(|s| s.to_string()).collect();
        record
    }

    #[test]
    fn test_missing_skill_suggestions() {
        let job = job_record(&["python", "docker", "aws"], &[], &[]);
        let suggestions = suggest_improvements("I know Python well.", &job, 80.0);

        let missing: Vec<&Suggestion> = suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::MissingSkill)
            .collect();
        assert_eq!(missing.len(), 2);
        assert!(missing[0].message.contains("docker"));
        assert!(missing[1].message.contains("aws"));
        assert!(missing.iter().all(|s| s.priority == Priority::High));
    }

    #[test]
    fn test_only_first_five_required_skills_checked() {
        let job = job_record(
            &["python", "java", "ruby", "go", "rust", "docker"],
            &[],
            &[],
        );
        let suggestions = suggest_improvements("", &job, 80.0);
        // "docker" is sixth and never inspected
        assert_eq!(suggestions.len(), 5);
        assert!(!suggestions.iter().any(|s| s.message.contains("docker")));
    }

    #[test]
    fn test_action_word_suggestions_follow_skills() {
        let job = job_record(&["docker"], &[], &["implemented", "led"]);
        let suggestions = suggest_improvements("I led a team.", &job, 80.0);

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].kind, SuggestionKind::MissingSkill);
        assert_eq!(suggestions[1].kind, SuggestionKind::ActionWord);
        assert_eq!(suggestions[1].priority, Priority::Medium);
        assert!(suggestions[1].message.contains("implemented"));
    }

    #[test]
    fn test_achievement_suggestion_below_seventy() {
        let job = job_record(&[], &[], &[]);
        let at_threshold = suggest_improvements("", &job, 70.0);
        assert!(at_threshold.is_empty());

        let below = suggest_improvements("", &job, 69.9);
        assert_eq!(below.len(), 1);
        assert_eq!(below[0].kind, SuggestionKind::Achievement);
    }

    #[test]
    fn test_keyword_suggestion_below_sixty() {
        let job = job_record(&[], &["python", "react", "docker", "aws", "gcp", "sql"], &[]);
        let suggestions = suggest_improvements("I ship things with python", &job, 55.0);

        let keyword_suggestions: Vec<&Suggestion> = suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::Keywords)
            .collect();
        assert_eq!(keyword_suggestions.len(), 1);
        // python is present as a token; the other five fill the cap
        let message = &keyword_suggestions[0].message;
        assert!(!message.contains("python"));
        assert!(message.contains("react"));
        assert!(message.contains("sql"));
    }

    #[test]
    fn test_keyword_suggestion_skipped_when_nothing_missing() {
        let job = job_record(&[], &["python"], &[]);
        let suggestions = suggest_improvements("python everywhere", &job, 30.0);
        assert!(suggestions
            .iter()
            .all(|s| s.kind != SuggestionKind::Keywords));
    }

    #[test]
    fn test_token_matching_is_whitespace_split() {
        // "python," with trailing punctuation is a different token than
        // "python", so the keyword block still fires.
        let job = job_record(&[], &["python"], &[]);
        let suggestions = suggest_improvements("I use python, daily", &job, 50.0);
        assert!(suggestions
            .iter()
            .any(|s| s.kind == SuggestionKind::Keywords));
    }
}
