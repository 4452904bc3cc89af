//! Bounded label/value scanning over flattened page text.
//!
//! Job-posting dumps follow a semi-fixed "Label: value" layout, so every
//! field extractor shares one primitive: take the text after a start marker,
//! bounded by the nearest stop marker or a character limit, trimmed.

/// Extract the text between `start` and the nearest of `stops`, capped at
/// `limit` characters past the marker. Returns `None` when the marker is
/// absent or the bounded slice trims to nothing.
///
/// Single pass, case-sensitive, first occurrence only — no backtracking
/// across repeated markers. A stop occurring beyond `limit` does not extend
/// the window.
pub fn between(text: &str, start: &str, stops: &[&str], limit: usize) -> Option<String> {
    let at = text.find(start)?;
    let rest = &text[at + start.len()..];

    let mut end = limit.min(rest.len());
    while !rest.is_char_boundary(end) {
        end -= 1;
    }
    for stop in stops {
        if let Some(pos) = rest.find(stop) {
            if pos < end {
                end = pos;
            }
        }
    }

    let value = rest[..end].trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Slice a page dump from its posting header onward, if one exists.
/// WaterlooWorks renders navigation chrome above the posting body; everything
/// of interest sits below one of these headers.
pub fn posting_section(text: &str) -> &str {
    const HEADERS: [&str; 2] = ["JOB POSTING INFORMATION", "Job Posting Information"];
    HEADERS
        .iter()
        .find_map(|h| text.find(h))
        .map(|at| &text[at..])
        .unwrap_or(text)
}

/// First line of `text`, truncated to `max` characters.
pub fn first_line(text: &str, max: usize) -> String {
    text.lines().next().unwrap_or("").chars().take(max).collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_nearest_marker() {
        let text = "Job Title: Software Engineer Intern\nNote: repost";
        let got = between(text, "Job Title:", &["Note:", "Level:"], 100);
        assert_eq!(got.as_deref(), Some("Software Engineer Intern"));
    }

    #[test]
    fn missing_marker_is_none() {
        assert_eq!(between("no labels here", "Job Title:", &["Note:"], 100), None);
    }

    #[test]
    fn empty_value_is_none() {
        let text = "Job - City: \nJob - Province/State: Ontario";
        assert_eq!(between(text, "Job - City:", &["Job -"], 100), None);
    }

    #[test]
    fn limit_caps_the_window() {
        let text = format!("Key:{}", "x".repeat(500));
        let got = between(&text, "Key:", &[], 10).unwrap();
        assert_eq!(got.len(), 10);
    }

    #[test]
    fn stop_beyond_limit_is_ignored() {
        let text = format!("Key:{}STOP", "x".repeat(50));
        let got = between(&text, "Key:", &["STOP"], 10).unwrap();
        assert_eq!(got, "x".repeat(10));
    }

    #[test]
    fn limit_respects_char_boundaries() {
        let text = "Key:aééééé rest";
        // A limit landing inside a multi-byte char must not panic.
        for limit in 1..8 {
            let _ = between(text, "Key:", &[], limit);
        }
    }

    #[test]
    fn first_start_occurrence_wins() {
        let text = "Level: Junior\nLevel: Senior";
        assert_eq!(between(text, "Level:", &["\nLevel:"], 100).as_deref(), Some("Junior"));
    }

    #[test]
    fn posting_section_slices_from_header() {
        let text = "Home | Dashboard\nJOB POSTING INFORMATION\nJob Title: QA Analyst";
        assert!(posting_section(text).starts_with("JOB POSTING INFORMATION"));
    }

    #[test]
    fn posting_section_without_header_is_identity() {
        let text = "Job Title: QA Analyst";
        assert_eq!(posting_section(text), text);
    }

    #[test]
    fn first_line_truncates() {
        assert_eq!(first_line("abcdef\nsecond", 4), "abcd");
        assert_eq!(first_line("", 30), "");
    }
}
