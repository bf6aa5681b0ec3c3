//! Input handling: text extraction from resume and job description files

pub mod manager;
pub mod text_extractor;
