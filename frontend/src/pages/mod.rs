pub mod countries_page;
pub mod dashboard_page;
pub mod home_page;
pub mod jobs_page;
pub mod map_page;
pub mod skills_page;
