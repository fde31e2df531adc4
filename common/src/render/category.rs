//! Category inference from job titles.

use crate::{
    format::format_count,
    job_listing::JobPosting,
    render::{
        chart::{ChartBar, ChartDataset, palette_color},
        ranking::{tally, top_n},
    },
};

pub const FALLBACK_CATEGORY: &str = "IT General";

/// Keyword groups in priority order. Groups overlap, so the first match wins.
pub const CATEGORY_KEYWORDS: [(&str, &[&str]); 12] = [
    ("Data Science", &["data scientist", "data analyst", "machine learning", "ml engineer", "ai engineer", "analytics"]),
    ("Software Engineering", &["software engineer", "developer", "programmer", "full stack", "backend", "frontend"]),
    ("DevOps", &["devops", "sre", "site reliability", "cloud engineer", "infrastructure"]),
    ("Security", &["security", "cybersecurity", "infosec", "penetration test", "ethical hacker"]),
    ("Product Management", &["product manager", "product owner", "pm"]),
    ("Design", &["designer", "ux", "ui", "graphics", "visual"]),
    ("QA/Testing", &["qa", "tester", "quality assurance", "test engineer"]),
    ("Mobile Development", &["ios", "android", "mobile", "flutter", "react native"]),
    ("Database", &["database", "dba", "sql"]),
    ("Network", &["network", "networking", "cisco"]),
    ("Support", &["support", "helpdesk", "technical support"]),
    ("Management", &["manager", "director", "lead", "head of", "cto", "cio"]),
];

/// First keyword group whose keyword occurs in the lower-cased title.
pub fn infer_category(title: &str) -> Option<&'static str> {
    let title = title.to_lowercase();
    if title.trim().is_empty() {
        return None;
    }
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| title.contains(k)))
        .map(|(category, _)| *category)
}

/// Explicit category if present, else inferred from the title, else the generic fallback.
pub fn display_category(job: &JobPosting) -> String {
    if let Some(category) = job.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        return category.to_string();
    }
    job.title
        .as_deref()
        .and_then(infer_category)
        .unwrap_or(FALLBACK_CATEGORY)
        .to_string()
}

/// Jobs per displayed category, largest first.
pub fn category_chart(jobs: &[JobPosting], limit: usize) -> ChartDataset {
    let counts = top_n(tally(jobs.iter().map(display_category)), limit, |(_, count)| *count);
    ChartDataset {
        title: "Jobs by category".to_string(),
        bars: counts
            .into_iter()
            .enumerate()
            .map(|(i, (category, count))| ChartBar {
                value: count as f64,
                value_label: format_count(count),
                color: palette_color(i).to_string(),
                target: Some(category.clone()),
                label: category,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_group_wins_over_management() {
        assert_eq!(infer_category("Senior Backend Developer and Team Lead"), Some("Software Engineering"));
        assert_eq!(infer_category("Engineering Team Lead"), Some("Management"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(infer_category("MACHINE LEARNING Engineer"), Some("Data Science"));
        assert_eq!(infer_category("Site Reliability Engineer"), Some("DevOps"));
        assert_eq!(infer_category("iOS Engineer"), Some("Mobile Development"));
    }

    #[test]
    fn no_match_or_empty() {
        assert_eq!(infer_category("Accountant"), None);
        assert_eq!(infer_category(""), None);
    }

    #[test]
    fn explicit_category_takes_precedence() {
        let job = JobPosting {
            title: Some("Backend Developer".into()),
            category: Some("Data Engineer".into()),
            ..JobPosting::default()
        };
        assert_eq!(display_category(&job), "Data Engineer");

        let inferred = JobPosting { title: Some("Backend Developer".into()), ..JobPosting::default() };
        assert_eq!(display_category(&inferred), "Software Engineering");

        let fallback = JobPosting { title: Some("Accountant".into()), category: Some(" ".into()), ..JobPosting::default() };
        assert_eq!(display_category(&fallback), FALLBACK_CATEGORY);
    }

    #[test]
    fn category_chart_mixes_explicit_and_inferred() {
        let job = |category: Option<&str>, title: &str| JobPosting {
            category: category.map(str::to_string),
            title: Some(title.to_string()),
            ..JobPosting::default()
        };
        let jobs = vec![
            job(None, "Android Developer"),
            job(Some("Data Engineer"), "Data Engineer"),
            job(None, "Office Assistant"),
            job(Some("Data Engineer"), "Senior Data Engineer"),
        ];
        let chart = category_chart(&jobs, 8);
        let bars: Vec<(&str, f64)> = chart.bars.iter().map(|b| (b.label.as_str(), b.value)).collect();
        assert_eq!(bars, vec![("Data Engineer", 2.0), ("Software Engineering", 1.0), ("IT General", 1.0)]);
    }
}
