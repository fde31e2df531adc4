//! Client calls for the job market statistics backend.
//!
//! Every call resolves to `None` on failure after logging and raising an error toast,
//! so sections only have to handle the empty case.

use anyhow::Context;
use common::{
    aggregates::{AggregateResponse, CountryCount, Kpi, RegionCount, RoleSalary, SkillShare},
    api_config::{ApiConfig, ApiEndpoint},
    filter_criteria::{FilterCriteria, JobsQuery, QueryParams},
    job_const::MAX_FETCH_LIMIT,
    job_listing::{JobListing, JobPosting},
};
use dioxus::logger::tracing::{debug, warn};
use serde::de::DeserializeOwned;

use crate::data_definitions::app_status::{IN_FLIGHT, show_error};

/// Holds one slot of the global in-flight counter until dropped.
struct InFlightGuard;

impl InFlightGuard {
    fn begin() -> Self {
        IN_FLIGHT.write().begin();
        Self
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        IN_FLIGHT.write().finish();
    }
}

async fn get_json<T: DeserializeOwned>(endpoint: ApiEndpoint, params: &QueryParams) -> anyhow::Result<T> {
    let url = ApiConfig::default().endpoint_url(endpoint);
    debug!("GET {url} {params:?}");
    let body = reqwest::Client::new()
        .get(&url)
        .query(params)
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?
        .error_for_status()?
        .text()
        .await
        .with_context(|| format!("reading body of {url}"))?;
    serde_json::from_str(&body).with_context(|| format!("malformed response from {url}"))
}

async fn fetch<T: DeserializeOwned>(endpoint: ApiEndpoint, params: QueryParams, what: &str) -> Option<T> {
    let _guard = InFlightGuard::begin();
    match get_json(endpoint, &params).await {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("could not load {what}: {e:#}");
            show_error(format!("Could not load {what}"));
            None
        }
    }
}

pub async fn fetch_kpi() -> Option<Kpi> {
    fetch(ApiEndpoint::Kpi, QueryParams::new(), "statistics").await
}

pub async fn fetch_jobs(query: JobsQuery) -> Option<JobListing> {
    fetch(ApiEndpoint::Jobs, query.to_query_params(), "jobs").await
}

pub async fn fetch_jobs_by_country() -> Option<Vec<CountryCount>> {
    fetch::<AggregateResponse<CountryCount>>(ApiEndpoint::JobsByCountry, QueryParams::new(), "country data")
        .await
        .map(|r| r.data)
}

pub async fn fetch_jobs_by_region() -> Option<Vec<RegionCount>> {
    fetch::<AggregateResponse<RegionCount>>(ApiEndpoint::JobsByRegion, QueryParams::new(), "region data")
        .await
        .map(|r| r.data)
}

pub async fn fetch_top_skills() -> Option<Vec<SkillShare>> {
    fetch::<AggregateResponse<SkillShare>>(ApiEndpoint::TopSkills, QueryParams::new(), "skill data")
        .await
        .map(|r| r.data)
}

pub async fn fetch_salary_by_role() -> Option<Vec<RoleSalary>> {
    fetch::<AggregateResponse<RoleSalary>>(ApiEndpoint::SalaryByRole, QueryParams::new(), "salary data")
        .await
        .map(|r| r.data)
}

/// Up to the backend maximum of postings matching `criteria`, with client-side filters applied.
pub async fn fetch_matching_jobs(criteria: FilterCriteria) -> Option<Vec<JobPosting>> {
    let listing = fetch_jobs(JobsQuery::new(0, MAX_FETCH_LIMIT, criteria.clone())).await?;
    Some(criteria.refine(listing.jobs, now()))
}

pub fn now() -> chrono::NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
