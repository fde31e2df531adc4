//! Table rows and the detail view for job postings.

use crate::{
    countries::country_display,
    format::{PLACEHOLDER_NA, PLACEHOLDER_UNKNOWN, format_count, format_date, format_salary_range, or_placeholder, truncate_text},
    job_const::{COMPANY_TRUNCATE, TITLE_TRUNCATE},
    job_listing::JobPosting,
    render::category::display_category,
};

pub const UNTITLED: &str = "Untitled";
pub const NO_DESCRIPTION: &str = "No detailed description";

#[derive(Debug, Clone, PartialEq)]
pub struct JobRow {
    pub title: String,
    pub category: String,
    pub company: String,
    pub country: String,
    pub salary: String,
}

impl JobRow {
    pub fn from_job(job: &JobPosting) -> Self {
        Self {
            title: truncate_text(&or_placeholder(job.title.as_deref(), UNTITLED), TITLE_TRUNCATE),
            category: display_category(job),
            company: truncate_text(&or_placeholder(job.company.as_deref(), PLACEHOLDER_UNKNOWN), COMPANY_TRUNCATE),
            country: country_display(&job.country),
            salary: format_salary_range(job.salary_min, job.salary_max),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobDetail {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub category: String,
    pub description: String,
    /// Absent when the posting has no date.
    pub posted: Option<String>,
}

impl JobDetail {
    pub fn from_job(job: &JobPosting) -> Self {
        Self {
            title: or_placeholder(job.title.as_deref(), UNTITLED),
            company: or_placeholder(job.company.as_deref(), PLACEHOLDER_UNKNOWN),
            location: format!("{}, {}", country_display(&job.country), or_placeholder(job.city.as_deref(), PLACEHOLDER_NA)),
            salary: format_salary_range(job.salary_min, job.salary_max),
            category: or_placeholder(job.category.as_deref(), PLACEHOLDER_NA),
            description: or_placeholder(job.description.as_deref(), NO_DESCRIPTION),
            posted: job.posted.as_deref().filter(|p| !p.trim().is_empty()).map(|p| format_date(Some(p))),
        }
    }
}

pub fn results_label(count: u64) -> String {
    match count {
        1 => "Found 1 job".to_string(),
        n => format!("Found {} jobs", format_count(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_render_placeholders() {
        let job = JobPosting { country: "fr".into(), ..JobPosting::default() };
        let row = JobRow::from_job(&job);
        assert_eq!(row.title, "Untitled");
        assert_eq!(row.company, "Unknown");
        assert_eq!(row.country, "FR");
        assert_eq!(row.salary, "Not disclosed");
        assert_eq!(row.category, "IT General");

        let detail = JobDetail::from_job(&job);
        assert_eq!(detail.location, "FR, N/A");
        assert_eq!(detail.category, "N/A");
        assert_eq!(detail.description, NO_DESCRIPTION);
        assert_eq!(detail.posted, None);
    }

    #[test]
    fn full_row() {
        let job = JobPosting {
            title: Some("Senior Software Engineer (Payments Platform, Distributed Systems Team)".into()),
            company: Some("Globex".into()),
            country: "sg".into(),
            city: Some("Singapore".into()),
            salary_min: Some(90000.0),
            salary_max: Some(120000.0),
            posted: Some("2024-02-29".into()),
            ..JobPosting::default()
        };
        let row = JobRow::from_job(&job);
        assert_eq!(row.title.chars().count(), TITLE_TRUNCATE + 3);
        assert!(row.title.ends_with("..."));
        assert_eq!(row.category, "Software Engineering");
        assert_eq!(row.country, "🇸🇬 Singapore");
        assert_eq!(row.salary, "$90,000 - $120,000");

        let detail = JobDetail::from_job(&job);
        assert_eq!(detail.location, "🇸🇬 Singapore, Singapore");
        assert_eq!(detail.posted.as_deref(), Some("Feb 29, 2024"));
    }

    #[test]
    fn results_labels() {
        assert_eq!(results_label(1), "Found 1 job");
        assert_eq!(results_label(1234), "Found 1,234 jobs");
    }
}
