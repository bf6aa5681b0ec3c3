//! Input manager dispatching file paths to the right text extractor

use crate::error::{MatcherError, Result};
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Reads resume and job description files and caches extracted text by
/// path. The engine itself only ever sees plain text.
pub struct InputManager {
    cache: HashMap<PathBuf, String>,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if let Some(cached) = self.cache.get(path) {
            log::debug!("Using cached text for {}", path.display());
            return Ok(cached.clone());
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        let text = match extension.as_str() {
            "txt" => PlainTextExtractor.extract(path).await?,
            "md" | "markdown" => MarkdownExtractor::new().extract(path).await?,
            other => {
                return Err(MatcherError::UnsupportedFormat(format!(
                    "'{}' ({})",
                    path.display(),
                    if other.is_empty() { "no extension" } else { other }
                )))
            }
        };

        self.cache.insert(path.to_path_buf(), text.clone());
        Ok(text)
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
