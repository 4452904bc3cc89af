use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One captured job posting: the flattened page text plus whatever page
/// metadata the capturing side could supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInput {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    pub raw_text: String,
}

impl JobInput {
    /// Bare posting text with no page metadata.
    pub fn from_text(raw: &str) -> JobInput {
        JobInput {
            url: String::new(),
            title: String::new(),
            company: String::new(),
            raw_text: clean_text(raw),
        }
    }

    /// Load a capture file: `.json` for structured captures, anything else
    /// as bare posting text.
    pub fn from_path(path: &Path) -> Result<JobInput> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading capture {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            let mut input: JobInput = serde_json::from_str(&contents)
                .with_context(|| format!("decoding capture {}", path.display()))?;
            input.raw_text = clean_text(&input.raw_text);
            Ok(input)
        } else {
            Ok(JobInput::from_text(&contents))
        }
    }
}

/// Normalize flattened page text: collapse runs of horizontal whitespace
/// within each line and squeeze consecutive blank lines. Line structure is
/// preserved; the extractor's first-line fallback depends on it.
pub fn clean_text(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut previous_blank = false;

    for line in text.lines() {
        let cleaned = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if cleaned.is_empty() {
            if !previous_blank && !lines.is_empty() {
                lines.push(String::new());
            }
            previous_blank = true;
        } else {
            lines.push(cleaned);
            previous_blank = false;
        }
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_horizontal_whitespace() {
        assert_eq!(clean_text("Job Title:    QA\t\tAnalyst"), "Job Title: QA Analyst");
    }

    #[test]
    fn squeezes_blank_lines() {
        assert_eq!(clean_text("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn trims_leading_and_trailing_blanks() {
        assert_eq!(clean_text("\n\n  a  \n\n"), "a");
    }

    #[test]
    fn preserves_line_structure() {
        let cleaned = clean_text("Work Term Duration: flexible\nJob Summary: x");
        assert_eq!(cleaned.lines().count(), 2);
    }

    #[test]
    fn json_capture_round_trips() {
        let raw = r#"{"url":"https://x.example/1","title":"T","raw_text":"body  text"}"#;
        let input: JobInput = serde_json::from_str(raw).unwrap();
        assert_eq!(input.url, "https://x.example/1");
        assert_eq!(input.company, "");
        assert_eq!(input.raw_text, "body  text");
    }

    #[test]
    fn bare_text_has_no_metadata() {
        let input = JobInput::from_text("Job Title: X");
        assert!(input.url.is_empty());
        assert!(input.title.is_empty());
        assert_eq!(input.raw_text, "Job Title: X");
    }
}
