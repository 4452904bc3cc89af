//! Field extraction from WaterlooWorks posting text.
//!
//! Six independent extractions share the bounded scanning primitive and the
//! raw input text; a missing label in one never blocks the others.

pub mod location;
pub mod salary;
pub mod skills;

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::{scan, ParserConfig};
use crate::record::ParsedJobRecord;

// "4 months", "8-month", "16 weeks", optionally "... work term".
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+[\s-]*(?:month|week)s?(?:\s*work\s*term)?").unwrap());

// Absolute URL, terminated by whitespace or quote/angle characters.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?i)https?://[^\s"'<>]+"#).unwrap());

/// Parse one posting's text into a structured record. Total: unrecognized
/// input yields a record with every field absent, never an error.
pub fn parse(text: &str, cfg: &ParserConfig) -> ParsedJobRecord {
    ParsedJobRecord {
        title: title(text),
        location: location::extract(text),
        duration: duration(text),
        salary: salary::extract(text, cfg),
        apply_url: apply_url(text),
        skills: skills_section(text)
            .map(|section| skills::scan(&section))
            .unwrap_or_default(),
    }
}

fn title(text: &str) -> Option<String> {
    scan::between(text, "Job Title:", &["Note:", "Job Openings:", "Level:"], 100)
}

/// Normalized "<N> month(s)/week(s) [work term]" token when one is present,
/// with a "(Preferred)" suffix when the raw value says so; else the first
/// line of the raw value, truncated.
fn duration(text: &str) -> Option<String> {
    let raw = scan::between(text, "Work Term Duration:", &["Special Work Term", "Job Summary"], 200)?;

    match DURATION_RE.find(&raw) {
        Some(m) => {
            let mut value = m.as_str().to_string();
            if raw.to_lowercase().contains("prefer") {
                value.push_str(" (Preferred)");
            }
            Some(value)
        }
        None => Some(scan::first_line(&raw, 30)),
    }
}

/// First absolute URL within 2000 characters of the application marker.
fn apply_url(text: &str) -> Option<String> {
    let at = text
        .find("If By Website, Go To:")
        .or_else(|| text.find("Application Information"))?;

    let mut end = (at + 2000).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    URL_RE.find(&text[at..end]).map(|m| m.as_str().to_string())
}

fn skills_section(text: &str) -> Option<String> {
    const STOPS: [&str; 2] = ["Eligible applicants must:", "Compensation and Benefits"];
    scan::between(text, "Required Skills:", &STOPS, 5000)
        .or_else(|| scan::between(text, "Qualifications:", &STOPS, 5000))
}

// ── Tests ──
