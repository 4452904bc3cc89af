//! Fallback extraction for postings that are not WaterlooWorks-formatted.
//!
//! Without the fixed label layout there is little to anchor on, so the
//! record leans on the capture metadata: page title and page URL, plus a
//! global salary-range search and a full-text skills scan.

use std::sync::LazyLock;

use regex::Regex;

use crate::input::JobInput;
use crate::parser::extract::skills;
use crate::record::ParsedJobRecord;

static SALARY_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[\d,.]+\s*-\s*\$[\d,.]+").unwrap());

pub fn parse(input: &JobInput) -> ParsedJobRecord {
    let non_empty = |s: &str| {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    ParsedJobRecord {
        title: non_empty(&input.title),
        location: None,
        duration: None,
        salary: SALARY_RANGE_RE
            .find(&input.raw_text)
            .map(|m| m.as_str().to_string()),
        apply_url: non_empty(&input.url),
        skills: skills::scan(&input.raw_text),
    }
}

// ── Tests ──
