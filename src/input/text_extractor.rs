//! Text extraction from various file formats

use crate::error::{Result, ResumeScannerError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Drop the leading byte order mark some editors (Notepad) write.
fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
}

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeScannerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        // Resumes exported from word processors are not always valid UTF-8
        let text = String::from_utf8_lossy(&bytes);
        Ok(strip_bom(&text).to_string())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(Self::markdown_to_text(strip_bom(&markdown_content)))
    }
}

impl MarkdownExtractor {
    /// Strip markdown formatting, keeping one line per block element.
    pub fn markdown_to_text(markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(content) | Event::Code(content) => text.push_str(&content),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                Event::Start(Tag::Item) => text.push('\n'),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
                _ => {}
            }
        }

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text() {
        let markdown = "# Jane Doe\n\n**Senior Engineer** with *Rust*.\n\n- Docker\n- `kubectl`\n";
        let text = MarkdownExtractor::markdown_to_text(markdown);

        assert_eq!(text, "Jane Doe\nSenior Engineer with Rust.\nDocker\nkubectl");
    }

    #[test]
    fn test_markdown_soft_breaks_become_spaces() {
        let text = MarkdownExtractor::markdown_to_text("5 years\nexperience in Go");
        assert_eq!(text, "5 years experience in Go");
    }

    #[tokio::test]
    async fn test_byte_order_mark_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("job.txt");
        let md = dir.path().join("job.md");
        std::fs::write(&txt, "\u{feff}Senior engineer").unwrap();
        std::fs::write(&md, "\u{feff}# Senior engineer").unwrap();

        let text = PlainTextExtractor.extract(&txt).await.unwrap();
        assert_eq!(text, "Senior engineer");

        let text = MarkdownExtractor.extract(&md).await.unwrap();
        assert_eq!(text, "Senior engineer");
    }

    #[test]
    fn test_strip_bom_keeps_inner_marks() {
        assert_eq!(strip_bom("rust"), "rust");
        assert_eq!(strip_bom("\u{feff}a\u{feff}b"), "a\u{feff}b");
    }
}
