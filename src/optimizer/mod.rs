//! Optimizer boundary: rule-based suggestions and the text-generation seam

pub mod generator;
pub mod suggestions;

pub use generator::{MockGenerator, OptimizationLevel, OptimizationResult, TextGenerator};
pub use suggestions::{suggest_improvements, Priority, Suggestion, SuggestionKind};
