pub mod extract;
pub mod generic;
pub mod scan;

use std::ops::RangeInclusive;

use tracing::debug;

use crate::input::JobInput;
use crate::record::ParsedJobRecord;
use crate::site::Site;

/// Tunables for the field extractor.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Inclusive range of numeric values treated as calendar years rather
    /// than pay when scanning compensation text.
    pub year_guard: RangeInclusive<u32>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { year_guard: 1990..=2030 }
    }
}

/// True when the text carries the WaterlooWorks posting layout.
pub fn looks_like_waterlooworks(text: &str) -> bool {
    text.contains("WaterlooWorks")
        || text.contains("JOB POSTING INFORMATION")
        || text.contains("Job Posting Information")
}

/// Two-step pipeline: detect the posting format, then run the matching
/// extractor over the capture.
pub fn process(input: &JobInput, cfg: &ParserConfig) -> ParsedJobRecord {
    let site = Site::detect(&input.url);

    if site == Site::WaterlooWorks || looks_like_waterlooworks(&input.raw_text) {
        debug!(%site, "waterlooworks layout detected");
        let body = scan::posting_section(&input.raw_text);
        let mut record = extract::parse(body, cfg);
        // The posting body sometimes omits the title line; the captured page
        // title is the next best signal.
        if record.title.is_none() && !input.title.trim().is_empty() {
            record.title = Some(input.title.trim().to_string());
        }
        record
    } else {
        debug!(%site, "generic extraction");
        generic::parse(input)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(url: &str, title: &str, raw_text: &str) -> JobInput {
        JobInput {
            url: url.to_string(),
            title: title.to_string(),
            company: String::new(),
            raw_text: raw_text.to_string(),
        }
    }

    #[test]
    fn waterlooworks_by_text_marker() {
        let input = capture(
            "",
            "",
            "JOB POSTING INFORMATION\nJob Title: QA Analyst\nLevel: Junior",
        );
        let record = process(&input, &ParserConfig::default());
        assert_eq!(record.title.as_deref(), Some("QA Analyst"));
    }

    #[test]
    fn waterlooworks_by_host() {
        let input = capture(
            "https://waterlooworks.uwaterloo.ca/myAccount/co-op/direct/jobs.htm",
            "",
            "Job Title: QA Analyst\nLevel: Junior",
        );
        let record = process(&input, &ParserConfig::default());
        assert_eq!(record.title.as_deref(), Some("QA Analyst"));
    }

    #[test]
    fn page_title_backfills_missing_title_line() {
        let input = capture("", "Hardware Intern - WaterlooWorks", "JOB POSTING INFORMATION\nLevel: Junior");
        let record = process(&input, &ParserConfig::default());
        assert_eq!(record.title.as_deref(), Some("Hardware Intern - WaterlooWorks"));
    }

    #[test]
    fn linkedin_capture_fixture() {
        let input =
            JobInput::from_path(std::path::Path::new("tests/fixtures/linkedin_swe.json")).unwrap();
        let record = process(&input, &ParserConfig::default());

        assert_eq!(record.title.as_deref(), Some("Software Engineer, Backend"));
        assert_eq!(record.apply_url.as_deref(), Some("https://www.linkedin.com/jobs/view/3948271102"));
        assert_eq!(record.salary.as_deref(), Some("$120,000 - $150,000"));
        for expected in ["Go", "Rust", "PostgreSQL", "Redis", "Kafka", "Docker", "Kubernetes", "Terraform", "AWS"] {
            assert!(record.skills.iter().any(|s| s == expected), "missing {expected}");
        }
    }

    #[test]
    fn other_sites_take_the_generic_path() {
        let input = capture(
            "https://www.linkedin.com/jobs/view/123",
            "Platform Engineer",
            "Join us. Experience with Terraform and AWS.",
        );
        let record = process(&input, &ParserConfig::default());
        assert_eq!(record.title.as_deref(), Some("Platform Engineer"));
        assert_eq!(record.apply_url.as_deref(), Some("https://www.linkedin.com/jobs/view/123"));
        assert!(record.skills.iter().any(|s| s == "Terraform"));
        // Generic extraction has no location signal.
        assert_eq!(record.location, None);
    }
}
