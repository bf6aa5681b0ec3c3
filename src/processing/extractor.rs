//! Pattern-based extraction of skills, sections, and achievements from raw text

use crate::processing::lexicon::{Lexicon, PhraseSet};
use regex::Regex;
use std::collections::BTreeSet;

/// Rule-based extractor over the static lexicons.
///
/// All extraction is case-insensitive and pure: empty input yields empty
/// results, never an error.
pub struct Extractor {
    lexicon: Lexicon,
    required_section_patterns: Vec<Regex>,
    preferred_section_patterns: Vec<Regex>,
    experience_years_pattern: Regex,
    achievement_patterns: Vec<Regex>,
}

impl Extractor {
    pub fn new() -> Self {
        // Section body runs from the heading to the next heading keyword
        // or end of text. Lazy capture keeps the body minimal.
        let required_section_patterns = vec![
            Regex::new(r"(?is)requirements?:(.+?)(?:responsibilities|qualifications|preferred|$)")
                .expect("Invalid requirements section regex"),
            Regex::new(r"(?is)required:(.+?)(?:responsibilities|qualifications|preferred|$)")
                .expect("Invalid required section regex"),
            Regex::new(r"(?is)must have:(.+?)(?:responsibilities|qualifications|preferred|$)")
                .expect("Invalid must-have section regex"),
        ];

        let preferred_section_patterns = vec![
            Regex::new(r"(?is)preferred:(.+?)(?:responsibilities|requirements|$)")
                .expect("Invalid preferred section regex"),
            Regex::new(r"(?is)nice to have:(.+?)(?:responsibilities|requirements|$)")
                .expect("Invalid nice-to-have section regex"),
            Regex::new(r"(?is)bonus:(.+?)(?:responsibilities|requirements|$)")
                .expect("Invalid bonus section regex"),
        ];

        let experience_years_pattern =
            Regex::new(r"(?i)(\d+)\+?\s*years?").expect("Invalid experience years regex");

        let achievement_patterns = vec![
            Regex::new(r"\d+%\s+(?:increase|improvement|reduction|growth)")
                .expect("Invalid achievement regex"),
            Regex::new(r"increased\s+\w+\s+by\s+\d+%").expect("Invalid achievement regex"),
            Regex::new(r"reduced\s+\w+\s+by\s+\d+%").expect("Invalid achievement regex"),
            Regex::new(r"improved\s+\w+\s+by\s+\d+%").expect("Invalid achievement regex"),
        ];

        Self {
            lexicon: Lexicon::new(),
            required_section_patterns,
            preferred_section_patterns,
            experience_years_pattern,
            achievement_patterns,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Return the subset of lexicon phrases present in the text, in lexicon
    /// order. Matches must be whole words or whole phrases: a boundary is
    /// the text edge or a non-alphanumeric, non-underscore byte, so "go"
    /// never matches inside "going".
    pub fn extract_skills(&self, text: &str, set: &PhraseSet) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let bytes = text.as_bytes();
        let mut found = vec![false; set.len()];

        for mat in set.automaton().find_overlapping_iter(text) {
            if is_word_bounded(bytes, mat.start(), mat.end()) {
                found[mat.pattern().as_usize()] = true;
            }
        }

        set.phrases()
            .iter()
            .zip(found)
            .filter(|(_, hit)| *hit)
            .map(|(phrase, _)| phrase.clone())
            .collect()
    }

    /// Technical skills listed in the job's requirements section, if one
    /// can be located. Best-effort: no heading means an empty result.
    pub fn extract_required_skills(&self, text: &str) -> Vec<String> {
        self.extract_section_skills(text, &self.required_section_patterns)
    }

    /// Technical skills listed in the preferred / nice-to-have section.
    pub fn extract_preferred_skills(&self, text: &str) -> Vec<String> {
        self.extract_section_skills(text, &self.preferred_section_patterns)
    }

    fn extract_section_skills(&self, text: &str, patterns: &[Regex]) -> Vec<String> {
        for pattern in patterns {
            if let Some(captures) = pattern.captures(text) {
                if let Some(body) = captures.get(1) {
                    return self.extract_skills(body.as_str(), self.lexicon.technical_skills());
                }
            }
        }
        Vec::new()
    }

    /// Maximum years-of-experience figure mentioned in the text, 0 when
    /// none is found.
    pub fn extract_experience_years(&self, text: &str) -> u32 {
        self.experience_years_pattern
            .captures_iter(text)
            .filter_map(|captures| captures[1].parse::<u32>().ok())
            .max()
            .unwrap_or(0)
    }

    /// Education markers mentioned anywhere in the text, as a deduplicated
    /// set. Substring membership, so "bachelor" also surfaces "ba".
    pub fn extract_education(&self, text: &str) -> BTreeSet<String> {
        let lower = text.to_lowercase();
        self.lexicon
            .education_markers()
            .iter()
            .filter(|marker| lower.contains(marker.as_str()))
            .cloned()
            .collect()
    }

    /// Quantified achievement statements, lowercased, in pattern-then-
    /// occurrence order. Duplicates are kept.
    pub fn extract_achievements(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut achievements = Vec::new();
        for pattern in &self.achievement_patterns {
            achievements.extend(pattern.find_iter(&lower).map(|m| m.as_str().to_string()));
        }
        achievements
    }

    /// Key phrases from the fixed phrase lexicon present in the text, in
    /// lexicon order.
    pub fn extract_key_phrases(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.lexicon
            .key_phrases()
            .iter()
            .filter(|phrase| lower.contains(phrase.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn is_word_bounded(bytes: &[u8], start: usize, end: usize) -> bool {
    let left = start == 0 || !is_word_byte(bytes[start - 1]);
    let right = end == bytes.len() || !is_word_byte(bytes[end]);
    left && right
}
