//! Text analysis and scoring engine

pub mod analyzer;
pub mod extractor;
pub mod lexicon;
pub mod scorer;
