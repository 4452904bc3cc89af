//! Salary extraction with pay-vs-year disambiguation.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::{scan, ParserConfig};

// Explicit hourly amount: "$28.50 per hour", "24 CAD/hr".
static HOURLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\$|USD|CAD)?\s*\b(\d{1,3}(?:,\d{3})*(?:\.\d{2})?)\b\s*(?:USD|CAD)?\s*(?:per hour|/hr)")
        .unwrap()
});

// Currency-shaped amount: optional $/USD/CAD affixes around a whole digit
// token with optional thousands separators and cents. Anchored to whole
// tokens so a bare year like "2025" cannot half-match as "202".
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\$|USD|CAD)?\s*\b(\d{1,3}(?:,\d{3})*(?:\.\d{2})?)\b\s*(?:USD|CAD)?").unwrap()
});

// Dash-separated dollar range, used verbatim as a last resort.
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$[\d,.]+\s*-?\s*\$[\d,.]+").unwrap());

/// Extract a salary string from the posting text.
///
/// The search is scoped to the compensation section; an explicit hourly rate
/// wins, otherwise the first amount that is plausibly pay (at least 15,
/// outside the year guard band) is classified by magnitude. Falls back to a
/// `$X - $Y` range anywhere in the text.
pub fn extract(text: &str, cfg: &ParserConfig) -> Option<String> {
    let section = scan::between(text, "Compensation and Benefits:", &["Targeted Degrees"], 1000)
        .unwrap_or_default();

    if let Some(caps) = HOURLY_RE.captures(&section) {
        return Some(format!("${}/hr", &caps[1]));
    }

    for caps in AMOUNT_RE.captures_iter(&section) {
        let Ok(value) = caps[1].replace(',', "").parse::<f64>() else {
            continue;
        };
        if value < 15.0 {
            continue;
        }
        if value >= f64::from(*cfg.year_guard.start()) && value <= f64::from(*cfg.year_guard.end()) {
            continue;
        }

        let interval = if value < 150.0 {
            "/hr"
        } else if value > 20000.0 {
            "/yr"
        } else if value > 2000.0 && value < 10000.0 {
            "/mo"
        } else {
            "?"
        };
        return Some(format!("${}{}", &caps[1], interval));
    }

    RANGE_RE.find(text).map(|m| m.as_str().to_string())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<String> {
        extract(text, &ParserConfig::default())
    }

    fn comp(body: &str) -> String {
        format!("Compensation and Benefits: {}\nTargeted Degrees and Disciplines: Any", body)
    }

    #[test]
    fn explicit_hourly_wins() {
        assert_eq!(parse(&comp("$28.50 per hour plus benefits")).as_deref(), Some("$28.50/hr"));
    }

    #[test]
    fn slash_hr_notation() {
        assert_eq!(parse(&comp("rate of 24 CAD/hr")).as_deref(), Some("$24/hr"));
    }

    #[test]
    fn bare_year_is_not_pay() {
        assert_eq!(parse(&comp("Rates effective for the 2025 cohort")), None);
    }

    #[test]
    fn small_amount_after_year_is_still_found() {
        assert_eq!(parse(&comp("For 2025: $35 hourly rate")).as_deref(), Some("$35/hr"));
    }

    #[test]
    fn minimum_wage_floor_skips_tiny_numbers() {
        assert_eq!(parse(&comp("$12 lunch stipend, then $30 hourly")).as_deref(), Some("$30/hr"));
    }

    #[test]
    fn monthly_magnitude() {
        assert_eq!(parse(&comp("Monthly stipend of 4,800 CAD")).as_deref(), Some("$4,800/mo"));
    }

    #[test]
    fn yearly_magnitude() {
        assert_eq!(parse(&comp("$85,000 annually, reviewed yearly")).as_deref(), Some("$85,000/yr"));
    }

    #[test]
    fn unclassifiable_magnitude_is_flagged() {
        // 150..=2000 sits between the hourly and monthly bands.
        assert_eq!(parse(&comp("$500 signing bonus")).as_deref(), Some("$500?"));
    }

    #[test]
    fn comma_formatted_year_hits_guard_band() {
        assert_eq!(parse(&comp("Class of 2,026 program")), None);
    }

    #[test]
    fn guard_band_is_configurable() {
        let cfg = ParserConfig { year_guard: 1900..=2100 };
        let text = comp("Founded 1,995, paying 4,800 monthly");
        assert_eq!(extract(&text, &cfg).as_deref(), Some("$4,800/mo"));
        // Default band starts at 1990, so 1,995 is also skipped there.
        assert_eq!(parse(&text).as_deref(), Some("$4,800/mo"));
        // A narrower band admits it as (unclassifiable) pay.
        let narrow = ParserConfig { year_guard: 2020..=2030 };
        assert_eq!(extract(&text, &narrow).as_deref(), Some("$1,995?"));
    }

    #[test]
    fn global_range_fallback_without_section() {
        let text = "Posting mentions $20 - $25 somewhere outside any labeled section";
        assert_eq!(parse(text).as_deref(), Some("$20 - $25"));
    }

    #[test]
    fn section_scoping_beats_global_noise() {
        let text = format!("$99 early mention\n{}", comp("$30.00 per hour"));
        assert_eq!(parse(&text).as_deref(), Some("$30.00/hr"));
    }

    #[test]
    fn nothing_found_is_none() {
        assert_eq!(parse("no compensation details at all"), None);
    }
}
