use common::{filter_criteria::FilterCriteria, job_listing::JobPosting, jobs_view::JobsViewState};
use dioxus::prelude::*;

/// Shared by every section of the jobs page; sections re-fetch whenever `view` changes.
#[derive(Clone, Copy)]
pub struct JobsPageState {
    pub view: ReadSignal<JobsViewState>,
    pub apply_criteria: Callback<FilterCriteria>,
    pub goto_page: Callback<u64>,
    pub selected_job: Signal<Option<JobPosting>>,
}
