//! Text extraction from supported file formats

use crate::error::Result;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

/// HTML entities emitted by the markdown renderer that need decoding once
/// the tags are gone.
const HTML_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

pub struct MarkdownExtractor {
    tag_pattern: Regex,
}

impl MarkdownExtractor {
    pub fn new() -> Self {
        Self {
            tag_pattern: Regex::new(r"<[^>]*>").expect("Invalid tag-stripping pattern"),
        }
    }

    fn html_to_text(&self, html: &str) -> String {
        let with_breaks = html.replace("<br>", "\n").replace("</p>", "\n\n");
        let stripped = self.tag_pattern.replace_all(&with_breaks, "");

        let mut text = stripped.into_owned();
        for (entity, replacement) in HTML_ENTITIES {
            text = text.replace(entity, replacement);
        }

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for MarkdownExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await?;

        let parser = Parser::new(&markdown);
        let mut rendered = String::new();
        html::push_html(&mut rendered, parser);

        Ok(self.html_to_text(&rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_strips_tags_and_decodes_entities() {
        let extractor = MarkdownExtractor::new();
        let text = extractor.html_to_text("<p><strong>C&amp;I</strong> team &#39;lead&#39;</p>");
        assert_eq!(text, "C&I team 'lead'");
    }

    #[test]
    fn test_html_to_text_drops_blank_lines() {
        let extractor = MarkdownExtractor::new();
        let text = extractor.html_to_text("<p>one</p><p>  </p><p>two</p>");
        assert_eq!(text, "one\ntwo");
    }
}
