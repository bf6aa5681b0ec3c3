//! Analysis orchestration: raw text in, structured analysis record out

use crate::processing::extractor::Extractor;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Number of entries kept in `keyword_frequency`.
const KEYWORD_FREQUENCY_CAP: usize = 20;

/// Structured extraction result for one text, either a job description or
/// a resume. A pure value object: constructed fresh per analysis call and
/// immutable once returned.
///
/// `all_keywords` is always the union of `technical_skills`, `soft_skills`
/// and `action_words` from the same record; the constructor derives it, so
/// the invariant holds for every record this module hands out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Technical skills found in the requirements section (job only).
    pub required_skills: Vec<String>,
    /// Technical skills found in the preferred section (job only).
    pub preferred_skills: Vec<String>,
    /// Lexicon subset found in the text, in lexicon order.
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub action_words: Vec<String>,
    /// Maximum years-of-experience requirement; 0 means unspecified (job only).
    pub experience_years: u32,
    pub education_requirements: BTreeSet<String>,
    pub key_phrases: Vec<String>,
    /// Presence count per extracted keyword across categories, top 20 by
    /// descending count.
    pub keyword_frequency: BTreeMap<String, u32>,
    pub all_keywords: BTreeSet<String>,
    /// Quantified achievement statements (resume only).
    pub achievements: Vec<String>,
}

/// Orchestrates the extractor over a job description or resume text.
///
/// Holds no mutable state; a single analyzer can serve any number of
/// concurrent callers.
pub struct Analyzer {
    extractor: Extractor,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            extractor: Extractor::new(),
        }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Analyze a job description: skills, section requirements, experience,
    /// education, and key phrases.
    pub fn analyze_job_description(&self, description: &str) -> AnalysisRecord {
        let lexicon = self.extractor.lexicon();

        let required_skills = self.extractor.extract_required_skills(description);
        let preferred_skills = self.extractor.extract_preferred_skills(description);
        let technical_skills = self
            .extractor
            .extract_skills(description, lexicon.technical_skills());
        let soft_skills = self
            .extractor
            .extract_skills(description, lexicon.soft_skills());
        let action_words = self
            .extractor
            .extract_skills(description, lexicon.action_verbs());

        let experience_years = self.extractor.extract_experience_years(description);
        let education_requirements = self.extractor.extract_education(description);
        let key_phrases = self.extractor.extract_key_phrases(description);

        AnalysisRecord::build(
            required_skills,
            preferred_skills,
            technical_skills,
            soft_skills,
            action_words,
            experience_years,
            education_requirements,
            key_phrases,
            Vec::new(),
        )
    }

    /// Analyze a resume: skills, action verbs, and quantified achievements.
    /// Job-only fields stay empty.
    pub fn analyze_resume(&self, resume_text: &str) -> AnalysisRecord {
        let lexicon = self.extractor.lexicon();

        let technical_skills = self
            .extractor
            .extract_skills(resume_text, lexicon.technical_skills());
        let soft_skills = self
            .extractor
            .extract_skills(resume_text, lexicon.soft_skills());
        let action_words = self
            .extractor
            .extract_skills(resume_text, lexicon.action_verbs());
        let achievements = self.extractor.extract_achievements(resume_text);

        AnalysisRecord::build(
            Vec::new(),
            Vec::new(),
            technical_skills,
            soft_skills,
            action_words,
            0,
            BTreeSet::new(),
            Vec::new(),
            achievements,
        )
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisRecord {
    #[allow(clippy::too_many_arguments)]
    fn build(
        required_skills: Vec<String>,
        preferred_skills: Vec<String>,
        technical_skills: Vec<String>,
        soft_skills: Vec<String>,
        action_words: Vec<String>,
        experience_years: u32,
        education_requirements: BTreeSet<String>,
        key_phrases: Vec<String>,
        achievements: Vec<String>,
    ) -> Self {
        let keyword_frequency =
            Self::keyword_frequency(&technical_skills, &soft_skills, &action_words);
        let all_keywords: BTreeSet<String> = technical_skills
            .iter()
            .chain(soft_skills.iter())
            .chain(action_words.iter())
            .cloned()
            .collect();

        Self {
            required_skills,
            preferred_skills,
            technical_skills,
            soft_skills,
            action_words,
            experience_years,
            education_requirements,
            key_phrases,
            keyword_frequency,
            all_keywords,
            achievements,
        }
    }

    /// Presence counts over the concatenated category lists. Each list is
    /// already deduplicated per source, so counts above 1 only arise when a
    /// phrase belongs to more than one lexicon category. Capped at the top
    /// 20 entries by descending count, ties resolved by first appearance.
    fn keyword_frequency(
        technical_skills: &[String],
        soft_skills: &[String],
        action_words: &[String],
    ) -> BTreeMap<String, u32> {
        let mut counts: Vec<(String, u32)> = Vec::new();

        for keyword in technical_skills
            .iter()
            .chain(soft_skills.iter())
            .chain(action_words.iter())
        {
            match counts.iter_mut().find(|(existing, _)| existing == keyword) {
                Some((_, count)) => *count += 1,
                None => counts.push((keyword.clone(), 1)),
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .take(KEYWORD_FREQUENCY_CAP)
            .collect()
    }
}
