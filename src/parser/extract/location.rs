//! Location assembly from two independent signals: a place name and a work
//! arrangement qualifier.

use crate::parser::scan;

const LONG_LOCATION_LABEL: &str =
    "Job Location (If Exact Address Unknown or Multiple Locations):";

// The location sub-fields are single-line values. The newline stop keeps a
// missing follow-up label from pulling the rest of the page into the value.
const CITY_STOPS: [&str; 3] = ["Job -", "Job Location", "\n"];
const GENERIC_STOPS: [&str; 3] = ["Job -", "Employment Location", "\n"];
const ARRANGEMENT_STOPS: [&str; 3] = ["Work Term Duration:", "Special Work", "\n"];

/// Work-location modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    Hybrid,
    Remote,
    InPerson,
}

impl Arrangement {
    pub fn label(self) -> &'static str {
        match self {
            Arrangement::Hybrid => "Hybrid",
            Arrangement::Remote => "Remote",
            Arrangement::InPerson => "In-person",
        }
    }
}

pub fn extract(text: &str) -> Option<String> {
    let place = place(text);
    let arrangement = arrangement(text);

    match (place, arrangement) {
        (Some(place), Some(arr)) => Some(format!("{} ({})", place, arr.label())),
        (Some(place), None) => Some(place),
        (None, Some(arr)) => Some(arr.label().to_string()),
        // Postings that name no location at all are local by convention.
        (None, None) => Some("Local".to_string()),
    }
}

/// Place name, tried in priority order: city, then the generic location
/// labels, then province with an optional country suffix.
fn place(text: &str) -> Option<String> {
    let city = scan::between(text, "Job - City:", &CITY_STOPS, 100);
    if let Some(city) = city.filter(|c| c.chars().count() > 2) {
        return Some(city);
    }

    let generic = scan::between(text, LONG_LOCATION_LABEL, &GENERIC_STOPS, 150)
        .or_else(|| scan::between(text, "Job Location:", &GENERIC_STOPS, 150));
    if let Some(generic) = generic.filter(|g| g.chars().count() > 2) {
        return Some(generic);
    }

    let province = scan::between(text, "Job - Province/State:", &CITY_STOPS, 100)?;
    let country = scan::between(text, "Job - Country:", &CITY_STOPS, 100);
    Some(match country {
        Some(country) => format!("{}, {}", province, country),
        None => province,
    })
}

/// Arrangement qualifier, classified by substring with hybrid taking
/// precedence over remote, remote over in-person.
fn arrangement(text: &str) -> Option<Arrangement> {
    let raw = scan::between(text, "Employment Location Arrangement:", &ARRANGEMENT_STOPS, 100)?;
    let lower = raw.to_lowercase();

    if lower.contains("hybrid") {
        Some(Arrangement::Hybrid)
    } else if lower.contains("remote") || lower.contains("virtual") {
        Some(Arrangement::Remote)
    } else if lower.contains("in-person") || lower.contains("site") {
        Some(Arrangement::InPerson)
    } else {
        None
    }
}

// ── Tests ──
