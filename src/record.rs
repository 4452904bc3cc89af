use serde::Serialize;

/// Structured fields extracted from one job posting. Every field is
/// independently optional; a missing marker in the source text leaves its
/// field `None` (or empty, for skills) without affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedJobRecord {
    pub title: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub salary: Option<String>,
    pub apply_url: Option<String>,
    pub skills: Vec<String>,
}

impl ParsedJobRecord {
    /// Number of scalar fields that were found, for batch summaries.
    pub fn found_fields(&self) -> usize {
        [
            self.title.is_some(),
            self.location.is_some(),
            self.duration.is_some(),
            self.salary.is_some(),
            self.apply_url.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}
