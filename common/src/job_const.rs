//! Fixed sizes and limits shared by the whole dashboard.

/// Rows per page on the jobs listing.
pub const PAGE_SIZE: u64 = 10;

/// Largest `limit` the backend accepts; used for exports and client-side analysis.
pub const MAX_FETCH_LIMIT: u64 = 500;

pub const SALARY_RANGE_MAX: u32 = 500_000;
pub const SALARY_RANGE_STEP: u32 = 5_000;

pub const KEYWORD_DEBOUNCE_MS: u32 = 500;

pub const ERROR_TOAST_TTL_MS: u32 = 5_000;
pub const SUCCESS_TOAST_TTL_MS: u32 = 3_000;

pub const TOP_COMPANIES_PER_COUNTRY: usize = 3;
pub const TOP_SKILLS: usize = 5;
pub const TOP_SKILL_PAIRS: usize = 6;
pub const DASHBOARD_TOP_COUNTRIES: usize = 7;
pub const COUNTRY_COMPARISON_LIMIT: usize = 8;

pub const TITLE_TRUNCATE: usize = 60;
pub const COMPANY_TRUNCATE: usize = 30;
pub const COMPANY_CARD_TRUNCATE: usize = 25;
pub const CATEGORY_CHART_LIMIT: usize = 8;
