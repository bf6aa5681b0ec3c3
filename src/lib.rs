//! Resume matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod optimizer;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{MatcherError, Result};
pub use optimizer::{suggest_improvements, MockGenerator, TextGenerator};
pub use processing::analyzer::{AnalysisRecord, Analyzer};
pub use processing::scorer::{calculate_match_score, MatchBreakdown};
