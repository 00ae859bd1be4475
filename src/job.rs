use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A job posting from the feed.
///
/// Every display field is a trusted, pre-formatted string. Fields other than
/// `id` default to blank when missing from the feed, so an incomplete record
/// renders with gaps instead of failing to load.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Job {
    /// A unique identifier for the job.
    pub id: u32,
    /// The job title.
    #[serde(default)]
    pub title: String,
    /// The name of the company offering the job.
    #[serde(default)]
    pub company: String,
    /// A short glyph shown as the company logo.
    #[serde(default)]
    pub logo: String,
    /// A `#rrggbb` accent color for the card.
    #[serde(default)]
    pub color: String,
    /// The job location.
    #[serde(default)]
    pub location: String,
    /// The job category (e.g. Design, Marketing).
    #[serde(default)]
    pub category: String,
    /// The experience level, lowercase in the feed (entry, mid, senior).
    #[serde(default)]
    pub experience: String,
    /// The employment type (e.g. Full-time, Contract).
    #[serde(rename = "type", default)]
    pub job_type: String,
    /// A one-paragraph summary shown on the card.
    #[serde(default)]
    pub description: String,
    /// Long-form text shown in the detail view.
    #[serde(default)]
    pub about: String,
    /// The salary range, pre-formatted for display.
    #[serde(default)]
    pub salary: String,
    /// A human-readable posting label ("2 days ago").
    #[serde(default)]
    pub posted: String,
    /// An ordered list of requirement strings.
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_blank() {
        let job: Job = serde_json::from_str(r#"{"id": 7, "title": "Data Analyst"}"#).unwrap();
        assert_eq!(job.id, 7);
        assert_eq!(job.title, "Data Analyst");
        assert_eq!(job.company, "");
        assert_eq!(job.salary, "");
        assert!(job.requirements.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let job: Job =
            serde_json::from_str(r#"{"id": 1, "title": "QA Tester", "remote_ok": true}"#).unwrap();
        assert_eq!(job.title, "QA Tester");
    }

    #[test]
    fn type_field_maps_to_job_type() {
        let job: Job = serde_json::from_str(r#"{"id": 2, "type": "Contract"}"#).unwrap();
        assert_eq!(job.job_type, "Contract");
    }
}
