//! Data shaping shared by the dashboard frontend: wire types, filters, paging and view models.

extern crate serde;

pub mod aggregates;
pub mod api_config;
pub mod countries;
pub mod csv_export;
pub mod debounce;
pub mod filter_criteria;
pub mod format;
pub mod job_const;
pub mod job_listing;
pub mod jobs_view;
pub mod notifications;
pub mod pagination;
pub mod render;
