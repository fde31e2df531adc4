//! Job postings as returned by `/api/jobs`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobPosting {
    #[serde(rename = "job_title")]
    pub title: Option<String>,
    pub company: Option<String>,
    pub category: Option<String>,
    pub country: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    #[serde(rename = "job_description")]
    pub description: Option<String>,
    #[serde(rename = "date_posted")]
    pub posted: Option<String>,
}

impl JobPosting {
    /// Upper-cased country code, the key used by the country table.
    pub fn country_code(&self) -> String {
        self.country.trim().to_uppercase()
    }

    pub fn has_salary(&self) -> bool {
        self.salary_min.is_some_and(|s| s > 0.0) || self.salary_max.is_some_and(|s| s > 0.0)
    }

    pub fn description_lowercase(&self) -> String {
        self.description.as_deref().unwrap_or_default().to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobListing {
    pub jobs: Vec<JobPosting>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_parses_backend_payload_with_missing_fields() {
        let payload = r#"{
            "total": 2, "skip": 0, "limit": 10, "count": 2,
            "jobs": [
                {"job_title": "Data Analyst", "company": "Acme", "country": "sg",
                 "salary_min": 50000, "salary_max": null, "date_posted": "2024-03-01"},
                {"job_title": "Engineer", "country": "us", "job_description": "Python"}
            ]
        }"#;
        let listing: JobListing = serde_json::from_str(payload).unwrap();
        assert_eq!(listing.total, 2);
        assert_eq!(listing.jobs[0].country_code(), "SG");
        assert_eq!(listing.jobs[0].salary_min, Some(50000.0));
        assert!(listing.jobs[0].has_salary());
        assert_eq!(listing.jobs[1].company, None);
        assert!(!listing.jobs[1].has_salary());
        assert_eq!(listing.jobs[1].description_lowercase(), "python");
    }
}
