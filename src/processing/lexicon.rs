//! Static reference lexicons used for keyword presence-testing
//!
//! All phrases are stored lowercase. The lexicons are immutable for the
//! process lifetime and safe to share across threads by reference.

use aho_corasick::AhoCorasick;

/// An ordered phrase list with a prebuilt case-insensitive automaton
/// for whole-word matching.
pub struct PhraseSet {
    phrases: Vec<String>,
    automaton: AhoCorasick,
}

impl PhraseSet {
    fn new(phrases: &[&str]) -> Self {
        let phrases: Vec<String> = phrases.iter().map(|s| s.to_string()).collect();
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&phrases)
            .expect("Invalid lexicon patterns");

        Self { phrases, automaton }
    }

    /// Phrases in lexicon order. Pattern ids of the automaton index into
    /// this slice.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn automaton(&self) -> &AhoCorasick {
        &self.automaton
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// The full set of reference lexicons.
pub struct Lexicon {
    technical_skills: PhraseSet,
    soft_skills: PhraseSet,
    action_verbs: PhraseSet,
    education_markers: Vec<String>,
    key_phrases: Vec<String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            technical_skills: PhraseSet::new(TECHNICAL_SKILLS),
            soft_skills: PhraseSet::new(SOFT_SKILLS),
            action_verbs: PhraseSet::new(ACTION_VERBS),
            education_markers: EDUCATION_MARKERS.iter().map(|s| s.to_string()).collect(),
            key_phrases: KEY_PHRASES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn technical_skills(&self) -> &PhraseSet {
        &self.technical_skills
    }

    pub fn soft_skills(&self) -> &PhraseSet {
        &self.soft_skills
    }

    pub fn action_verbs(&self) -> &PhraseSet {
        &self.action_verbs
    }

    pub fn education_markers(&self) -> &[String] {
        &self.education_markers
    }

    pub fn key_phrases(&self) -> &[String] {
        &self.key_phrases
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

const TECHNICAL_SKILLS: &[&str] = &[
    // Languages
    "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "go", "rust",
    // Frameworks
    "react", "angular", "vue", "node.js", "express", "django", "flask", "spring",
    // Cloud and infrastructure
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "gitlab", "github",
    // Databases
    "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch",
    // Data and ML
    "machine learning", "deep learning", "tensorflow", "pytorch", "scikit-learn",
    "data science", "data analysis", "big data", "hadoop", "spark",
    // Practices
    "rest api", "graphql", "microservices", "agile", "scrum", "devops",
    "ci/cd", "git", "linux", "bash", "testing", "tdd", "unit testing",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "problem-solving", "analytical",
    "critical thinking", "creativity", "adaptability", "time management",
    "collaboration", "interpersonal", "presentation", "negotiation",
    "decision making", "conflict resolution", "mentoring", "coaching",
];

const ACTION_VERBS: &[&str] = &[
    "achieved", "administered", "analyzed", "architected", "automated",
    "built", "collaborated", "coordinated", "created", "delivered",
    "designed", "developed", "directed", "engineered", "enhanced",
    "established", "executed", "generated", "implemented", "improved",
    "increased", "initiated", "integrated", "launched", "led",
    "maintained", "managed", "optimized", "organized", "performed",
    "planned", "produced", "programmed", "reduced", "redesigned",
    "resolved", "streamlined", "supported", "transformed", "upgraded",
];

const EDUCATION_MARKERS: &[&str] = &[
    "bachelor", "master", "phd", "degree", "bs", "ms", "ba", "ma",
];

const KEY_PHRASES: &[&str] = &[
    "machine learning", "data science", "software development",
    "full stack", "front end", "back end", "cloud computing",
    "agile methodology", "cross-functional team", "rest api",
    "microservices architecture", "ci/cd pipeline", "version control",
    "problem solving", "team player", "self-motivated",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_creation() {
        let lexicon = Lexicon::new();
        assert!(lexicon.technical_skills().len() > 50);
        assert_eq!(lexicon.action_verbs().len(), 40);
        assert_eq!(lexicon.soft_skills().len(), 17);
        assert_eq!(lexicon.education_markers().len(), 8);
        assert_eq!(lexicon.key_phrases().len(), 16);
    }

    #[test]
    fn test_phrases_are_lowercase() {
        let lexicon = Lexicon::new();
        for set in [
            lexicon.technical_skills(),
            lexicon.soft_skills(),
            lexicon.action_verbs(),
        ] {
            for phrase in set.phrases() {
                assert_eq!(phrase, &phrase.to_lowercase());
            }
        }
    }

    #[test]
    fn test_automaton_covers_all_phrases() {
        let lexicon = Lexicon::new();
        let set = lexicon.technical_skills();
        assert_eq!(set.automaton().patterns_len(), set.len());
    }
}
