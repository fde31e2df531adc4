pub mod app_status;
pub mod jobs_page_state;
