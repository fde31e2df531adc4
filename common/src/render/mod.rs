//! Pure mappings from fetched data to view descriptors consumed by the page components.

pub mod category;
pub mod chart;
pub mod country_views;
pub mod dashboard;
pub mod job_rows;
pub mod map;
pub mod ranking;
pub mod shares;
pub mod skills;
