//! Backend location and the fixed set of endpoints the dashboard reads.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiEndpoint {
    Kpi,
    Jobs,
    JobsByCountry,
    JobsByRegion,
    TopSkills,
    SalaryByRole,
}

impl ApiEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            ApiEndpoint::Kpi => "/api/kpi",
            ApiEndpoint::Jobs => "/api/jobs",
            ApiEndpoint::JobsByCountry => "/api/jobs-by-country",
            ApiEndpoint::JobsByRegion => "/api/jobs-by-region",
            ApiEndpoint::TopSkills => "/api/top-skills",
            ApiEndpoint::SalaryByRole => "/api/salary-by-role",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Base URL baked in at build time through `JOB_MARKET_API_BASE_URL`, else localhost.
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("JOB_MARKET_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_string() }
    }

    pub fn endpoint_url(&self, endpoint: ApiEndpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
