//! Integration tests for the resume matcher

use resume_matcher::input::manager::InputManager;
use resume_matcher::optimizer::{suggest_improvements, SuggestionKind};
use resume_matcher::output::MatchReport;
use resume_matcher::processing::analyzer::Analyzer;
use resume_matcher::processing::scorer::calculate_match_score;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("python"));
    assert!(text.contains("node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("python"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_full_scoring_pipeline() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let analyzer = Analyzer::new();
    let resume = analyzer.analyze_resume(&resume_text);
    let job = analyzer.analyze_job_description(&job_text);

    assert_eq!(
        job.required_skills,
        vec!["python".to_string(), "aws".to_string(), "docker".to_string()]
    );
    assert_eq!(job.preferred_skills, vec!["kubernetes".to_string()]);
    assert_eq!(job.experience_years, 5);
    assert!(job.education_requirements.contains("bachelor"));

    assert_eq!(
        resume.achievements,
        vec![
            "increased deployments by 40%".to_string(),
            "reduced costs by 25%".to_string(),
        ]
    );

    let (score, breakdown) = calculate_match_score(&resume, &job);
    // tech 4/5*40 + required 3/3*30 + soft 2/2*15 + action 1/3*15
    assert!((score - 82.0).abs() < 1e-9);
    assert!(breakdown.missing_required_skills.is_empty());
    assert!(breakdown.matching_skills.contains("python"));
    assert!(breakdown.missing_action_words.contains("designed"));
}

#[tokio::test]
async fn test_report_matches_direct_scoring() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let analyzer = Analyzer::new();
    let report = MatchReport::generate(
        &analyzer,
        &resume_text,
        &job_text,
        "sample_resume.txt",
        "sample_job.txt",
        true,
    );

    let resume = analyzer.analyze_resume(&resume_text);
    let job = analyzer.analyze_job_description(&job_text);
    let (score, breakdown) = calculate_match_score(&resume, &job);

    assert_eq!(report.total_score, score);
    assert_eq!(report.breakdown, breakdown);
}

#[tokio::test]
async fn test_suggestions_for_weak_resume() {
    let mut manager = InputManager::new();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let analyzer = Analyzer::new();
    let job = analyzer.analyze_job_description(&job_text);

    let weak_resume = "Filing clerk. Organized paperwork and answered phones.";
    let resume = analyzer.analyze_resume(weak_resume);
    let (score, _) = calculate_match_score(&resume, &job);
    assert!(score < 60.0);

    let suggestions = suggest_improvements(weak_resume, &job, score);
    assert!(suggestions
        .iter()
        .any(|s| s.kind == SuggestionKind::MissingSkill));
    assert!(suggestions
        .iter()
        .any(|s| s.kind == SuggestionKind::Achievement));
    assert!(suggestions
        .iter()
        .any(|s| s.kind == SuggestionKind::Keywords));
}
