//! Filter criteria for the jobs listing and their mapping onto `/api/jobs` parameters.
//!
//! `FilterCriteria` is a value: every update builds a new one, and views hold
//! the applied criteria in a signal instead of mutating a shared record.

use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use chrono::{Duration, NaiveDateTime};
use thiserror::Error;

use crate::{format::parse_posted_date, job_const::SALARY_RANGE_MAX, job_listing::JobPosting};

/// Query parameters in the order they are sent.
pub type QueryParams = Vec<(&'static str, String)>;

/// Salary bounds with `min <= max` enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SalaryRange {
    min: u32,
    max: u32,
}

impl SalaryRange {
    /// Builds a range from two slider values; reversed bounds are swapped.
    pub fn new(a: u32, b: u32) -> Self {
        let (a, b) = (a.min(SALARY_RANGE_MAX), b.min(SALARY_RANGE_MAX));
        if a > b {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    pub const fn full() -> Self {
        Self { min: 0, max: SALARY_RANGE_MAX }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_full(&self) -> bool {
        *self == Self::full()
    }
}

impl Default for SalaryRange {
    fn default() -> Self {
        Self::full()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Recency {
    #[default]
    All,
    Last24Hours,
    Last7Days,
    Last30Days,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown recency bucket: {0:?}")]
pub struct ParseRecencyError(pub String);

impl Recency {
    pub const BUCKETS: [Recency; 4] = [Recency::All, Recency::Last24Hours, Recency::Last7Days, Recency::Last30Days];

    pub fn as_str(&self) -> &'static str {
        match self {
            Recency::All => "all",
            Recency::Last24Hours => "24h",
            Recency::Last7Days => "7d",
            Recency::Last30Days => "30d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recency::All => "All time",
            Recency::Last24Hours => "Last 24 hours",
            Recency::Last7Days => "Last 7 days",
            Recency::Last30Days => "Last 30 days",
        }
    }

    pub fn max_age(&self) -> Option<Duration> {
        match self {
            Recency::All => None,
            Recency::Last24Hours => Some(Duration::hours(24)),
            Recency::Last7Days => Some(Duration::days(7)),
            Recency::Last30Days => Some(Duration::days(30)),
        }
    }

    /// Postings without a usable date only pass the `All` bucket.
    pub fn includes(&self, posted: Option<NaiveDateTime>, now: NaiveDateTime) -> bool {
        match (self.max_age(), posted) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(age), Some(posted)) => now - posted <= age,
        }
    }
}

impl Display for Recency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recency {
    type Err = ParseRecencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(Recency::All),
            "24h" => Ok(Recency::Last24Hours),
            "7d" => Ok(Recency::Last7Days),
            "30d" => Ok(Recency::Last30Days),
            other => Err(ParseRecencyError(other.to_string())),
        }
    }
}

/// Raw values of the filter panel controls, exactly as the widgets hold them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterControls {
    pub category: String,
    pub keyword: String,
    pub countries: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub salary: SalaryRange,
    pub recency: String,
    pub has_salary: bool,
}

impl FilterControls {
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        Self {
            category: criteria.category.clone().unwrap_or_default(),
            keyword: criteria.keyword.clone().unwrap_or_default(),
            countries: criteria.countries.clone(),
            skills: criteria.skills.clone(),
            salary: criteria.salary,
            recency: criteria.recency.as_str().to_string(),
            has_salary: criteria.has_salary,
        }
    }

    /// Widget values to show for `applied`, or `None` when the current values
    /// already read back as `applied` and must be left as typed.
    pub fn reconcile(&self, applied: &FilterCriteria) -> Option<Self> {
        if FilterCriteria::from_controls(self) == *applied {
            return None;
        }
        Some(Self::from_criteria(applied))
    }

    pub fn toggle_country(&mut self, code: &str) {
        toggle(&mut self.countries, code.to_uppercase());
    }

    pub fn toggle_skill(&mut self, skill: &str) {
        toggle(&mut self.skills, skill.to_lowercase());
    }

    /// Moves one slider; the stored range stays ordered.
    pub fn set_salary_min(&mut self, value: u32) {
        self.salary = SalaryRange::new(value, self.salary.max());
    }

    pub fn set_salary_max(&mut self, value: u32) {
        self.salary = SalaryRange::new(self.salary.min(), value);
    }
}

fn toggle(set: &mut BTreeSet<String>, value: String) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub keyword: Option<String>,
    pub countries: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub salary: SalaryRange,
    pub recency: Recency,
    pub has_salary: bool,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

impl FilterCriteria {
    /// Reads the current control values into a criteria record.
    pub fn from_controls(controls: &FilterControls) -> Self {
        let recency: Recency = controls.recency.parse().unwrap_or_else(|e: ParseRecencyError| {
            tracing::warn!("{e}, falling back to all");
            Recency::All
        });
        Self {
            category: non_empty(&controls.category),
            keyword: non_empty(&controls.keyword),
            countries: controls.countries.iter().filter_map(|c| non_empty(c)).map(|c| c.to_uppercase()).collect(),
            skills: controls.skills.iter().filter_map(|s| non_empty(s)).map(|s| s.to_lowercase()).collect(),
            salary: controls.salary,
            recency,
            has_salary: controls.has_salary,
        }
    }

    /// Builds the initial criteria from the jobs page URL, e.g. `?country=SG` or `?keyword=python+sql`.
    pub fn from_page_context(country: &str, countries: &str, keyword: &str, category: &str) -> Self {
        let mut codes: BTreeSet<String> = split_list(country).map(str::to_uppercase).collect();
        codes.extend(split_list(countries).map(str::to_uppercase));
        Self {
            category: non_empty(category),
            keyword: non_empty(keyword),
            countries: codes,
            ..Self::default()
        }
    }

    /// The state after "clear all".
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn is_default(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of criteria that deviate from their defaults.
    pub fn active_count(&self) -> usize {
        [
            self.category.as_deref().is_some_and(|c| !c.is_empty()),
            self.keyword.as_deref().is_some_and(|k| !k.is_empty()),
            !self.countries.is_empty(),
            !self.salary.is_full(),
            !self.skills.is_empty(),
            self.recency != Recency::All,
            self.has_salary,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Backend parameters for every non-default criterion; defaults are left out entirely.
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(keyword) = self.keyword.as_deref().filter(|k| !k.is_empty()) {
            params.push(("keyword", keyword.to_string()));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            params.push(("category", category.to_string()));
        }
        match self.countries.len() {
            0 => {}
            1 => params.push(("country", self.countries.iter().cloned().collect())),
            _ => params.push(("countries", self.countries.iter().cloned().collect::<Vec<_>>().join(","))),
        }
        if self.has_salary {
            params.push(("has_salary", "true".to_string()));
        }
        if self.salary.min() > 0 {
            params.push(("salary_min", self.salary.min().to_string()));
        }
        if self.salary.max() < SALARY_RANGE_MAX {
            params.push(("salary_max", self.salary.max().to_string()));
        }
        if !self.skills.is_empty() {
            params.push(("skills", self.skills.iter().cloned().collect::<Vec<_>>().join(",")));
        }
        if self.recency != Recency::All {
            params.push(("recency", self.recency.as_str().to_string()));
        }
        params
    }

    /// Applies the criteria the backend does not evaluate itself (salary presence, recency).
    pub fn refine(&self, jobs: Vec<JobPosting>, now: NaiveDateTime) -> Vec<JobPosting> {
        jobs.into_iter()
            .filter(|job| !self.has_salary || job.has_salary())
            .filter(|job| {
                let posted = job.posted.as_deref().and_then(parse_posted_date);
                self.recency.includes(posted, now)
            })
            .collect()
    }

    /// Whether `refine` may drop rows, which makes the backend total unreliable.
    pub fn needs_refinement(&self) -> bool {
        self.has_salary || self.recency != Recency::All
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = non_empty(keyword);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = non_empty(category);
        self
    }

    pub fn with_country(mut self, code: &str) -> Self {
        if let Some(code) = non_empty(code) {
            self.countries.insert(code.to_uppercase());
        }
        self
    }

    pub fn with_skill(mut self, skill: &str) -> Self {
        if let Some(skill) = non_empty(skill) {
            self.skills.insert(skill.to_lowercase());
        }
        self
    }

    pub fn with_salary(mut self, a: u32, b: u32) -> Self {
        self.salary = SalaryRange::new(a, b);
        self
    }

    pub fn with_recency(mut self, recency: Recency) -> Self {
        self.recency = recency;
        self
    }

    pub fn with_has_salary(mut self, has_salary: bool) -> Self {
        self.has_salary = has_salary;
        self
    }
}

/// One `/api/jobs` request: a page slice plus the active criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct JobsQuery {
    pub skip: u64,
    pub limit: u64,
    pub criteria: FilterCriteria,
}

impl JobsQuery {
    pub fn new(skip: u64, limit: u64, criteria: FilterCriteria) -> Self {
        Self { skip, limit, criteria }
    }

    pub fn to_query_params(&self) -> QueryParams {
        let mut params: QueryParams = vec![("skip", self.skip.to_string()), ("limit", self.limit.to_string())];
        params.extend(self.criteria.to_query_params());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn keys(params: &QueryParams) -> Vec<&'static str> {
        params.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn default_criteria_produce_no_params() {
        let criteria = FilterCriteria::default();
        assert!(criteria.to_query_params().is_empty());
        assert_eq!(criteria.active_count(), 0);
        assert!(criteria.is_default());
    }

    #[test]
    fn each_field_is_sent_only_when_changed() {
        let cases: Vec<(FilterCriteria, &str, &str)> = vec![
            (FilterCriteria::default().with_keyword("python"), "keyword", "python"),
            (FilterCriteria::default().with_category("Data Engineer"), "category", "Data Engineer"),
            (FilterCriteria::default().with_country("sg"), "country", "SG"),
            (FilterCriteria::default().with_has_salary(true), "has_salary", "true"),
            (FilterCriteria::default().with_salary(20000, SALARY_RANGE_MAX), "salary_min", "20000"),
            (FilterCriteria::default().with_salary(0, 150000), "salary_max", "150000"),
            (FilterCriteria::default().with_skill("SQL"), "skills", "sql"),
            (FilterCriteria::default().with_recency(Recency::Last7Days), "recency", "7d"),
        ];
        for (criteria, key, value) in cases {
            let params = criteria.to_query_params();
            assert_eq!(params, vec![(key, value.to_string())], "for {key}");
            assert_eq!(criteria.active_count(), 1, "for {key}");
        }
    }

    #[test]
    fn empty_keyword_and_all_recency_are_omitted() {
        let controls = FilterControls {
            keyword: "   ".to_string(),
            recency: "all".to_string(),
            category: "Data Analyst".to_string(),
            ..FilterControls::default()
        };
        let params = FilterCriteria::from_controls(&controls).to_query_params();
        assert_eq!(keys(&params), vec!["category"]);
    }

    #[test]
    fn several_countries_and_skills_are_comma_joined() {
        let criteria = FilterCriteria::default()
            .with_country("us")
            .with_country("GB")
            .with_skill("python")
            .with_skill("aws");
        let params = criteria.to_query_params();
        assert_eq!(
            params,
            vec![("countries", "GB,US".to_string()), ("skills", "aws,python".to_string())]
        );
        assert_eq!(criteria.active_count(), 2);
    }

    #[test]
    fn reversed_salary_bounds_are_swapped() {
        let range = SalaryRange::new(400000, 100000);
        assert_eq!((range.min(), range.max()), (100000, 400000));

        let mut controls = FilterControls::default();
        controls.set_salary_max(100000);
        controls.set_salary_min(400000);
        let criteria = FilterCriteria::from_controls(&controls);
        assert_eq!((criteria.salary.min(), criteria.salary.max()), (100000, 400000));
        assert_eq!(
            criteria.to_query_params(),
            vec![("salary_min", "100000".to_string()), ("salary_max", "400000".to_string())]
        );
    }

    #[test]
    fn salary_bounds_are_capped() {
        let range = SalaryRange::new(0, 900000);
        assert!(range.is_full());
    }

    #[test]
    fn update_reads_controls() {
        let mut controls = FilterControls {
            category: "Software Engineer".to_string(),
            keyword: "  rust ".to_string(),
            recency: "24h".to_string(),
            has_salary: true,
            ..FilterControls::default()
        };
        controls.toggle_country("nz");
        controls.toggle_country("sg");
        controls.toggle_country("nz");
        controls.toggle_skill("Excel");
        let criteria = FilterCriteria::from_controls(&controls);
        assert_eq!(criteria.keyword.as_deref(), Some("rust"));
        assert_eq!(criteria.countries, BTreeSet::from(["SG".to_string()]));
        assert_eq!(criteria.skills, BTreeSet::from(["excel".to_string()]));
        assert_eq!(criteria.recency, Recency::Last24Hours);
        assert_eq!(criteria.active_count(), 6);

        assert_eq!(FilterControls::from_criteria(&criteria).keyword, "rust");
    }

    #[test]
    fn unknown_recency_falls_back_to_all() {
        let controls = FilterControls { recency: "1y".to_string(), ..FilterControls::default() };
        assert_eq!(FilterCriteria::from_controls(&controls).recency, Recency::All);
        assert_eq!("1y".parse::<Recency>(), Err(ParseRecencyError("1y".to_string())));
        assert_eq!("30d".parse::<Recency>(), Ok(Recency::Last30Days));
    }

    #[test]
    fn clear_resets_everything() {
        let criteria = FilterCriteria::default()
            .with_keyword("sql")
            .with_country("DE")
            .with_recency(Recency::Last30Days)
            .with_has_salary(true);
        assert_eq!(criteria.active_count(), 4);
        let cleared = FilterCriteria::cleared();
        assert!(cleared.to_query_params().is_empty());
        assert_eq!(cleared.active_count(), 0);
    }

    #[test]
    fn page_context_from_url() {
        let criteria = FilterCriteria::from_page_context("sg", "", "python sql", "");
        assert_eq!(criteria.countries, BTreeSet::from(["SG".to_string()]));
        assert_eq!(criteria.keyword.as_deref(), Some("python sql"));
        assert_eq!(criteria.category, None);

        let region = FilterCriteria::from_page_context("", "US, CA", "", "");
        assert_eq!(
            region.to_query_params(),
            vec![("countries", "CA,US".to_string())]
        );
    }

    #[test]
    fn jobs_query_puts_paging_first() {
        let query = JobsQuery::new(20, 10, FilterCriteria::default().with_keyword("aws"));
        assert_eq!(keys(&query.to_query_params()), vec!["skip", "limit", "keyword"]);
    }

    #[test]
    fn refine_applies_salary_presence_and_recency() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let job = |posted: Option<&str>, salary: Option<f64>| JobPosting {
            posted: posted.map(str::to_string),
            salary_min: salary,
            ..JobPosting::default()
        };
        let jobs = vec![
            job(Some("2024-06-10"), Some(50000.0)),
            job(Some("2024-06-01"), Some(70000.0)),
            job(Some("2024-06-09"), None),
            job(None, Some(90000.0)),
        ];

        let week = FilterCriteria::default().with_recency(Recency::Last7Days);
        assert_eq!(week.refine(jobs.clone(), now).len(), 2);

        let paid = FilterCriteria::default().with_has_salary(true);
        assert_eq!(paid.refine(jobs.clone(), now).len(), 3);
        assert!(paid.needs_refinement());

        assert_eq!(FilterCriteria::default().refine(jobs, now).len(), 4);
    }

    #[test]
    fn typed_keyword_survives_its_own_apply() {
        let typed = FilterControls { keyword: "data ".to_string(), ..FilterControls::default() };
        let applied = FilterCriteria::from_controls(&typed);
        assert_eq!(applied.keyword.as_deref(), Some("data"));
        assert_eq!(typed.reconcile(&applied), None);

        let mut edited = typed.clone();
        edited.toggle_country("sg");
        assert_eq!(edited.reconcile(&applied), Some(FilterControls::from_criteria(&applied)));
    }

    #[test]
    fn outside_changes_are_mirrored_into_controls() {
        let typed = FilterControls { keyword: "python sql".to_string(), ..FilterControls::default() };
        let mirrored = typed.reconcile(&FilterCriteria::cleared());
        assert_eq!(mirrored, Some(FilterControls::from_criteria(&FilterCriteria::cleared())));

        let linked = FilterCriteria::from_page_context("us", "", "", "Data Engineer");
        let mirrored = FilterControls::default().reconcile(&linked).unwrap();
        assert_eq!(mirrored.category, "Data Engineer");
        assert!(mirrored.countries.contains("US"));
    }
}
