//! Jobs table and the posting detail dialog.

use common::{
    job_listing::JobPosting,
    render::job_rows::{JobDetail, JobRow},
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::{components::suspend_boundary::EmptyState, data_definitions::jobs_page_state::JobsPageState};

#[component]
pub fn JobTable(jobs: Vec<JobPosting>) -> Element {
    let mut selected_job = use_context::<JobsPageState>().selected_job;
    if jobs.is_empty() {
        return rsx! { EmptyState { message: "No jobs match the current filters" } };
    }

    rsx! {
        table {
            id: "x-jobs-table",
            class: "x-table",
            thead {
                tr {
                    th { "Title" }
                    th { "Category" }
                    th { "Company" }
                    th { "Country" }
                    th { "Salary" }
                }
            }
            tbody {
                for (i, (row, job)) in jobs.into_iter().map(|job| (JobRow::from_job(&job), job)).enumerate() {
                    JobTableRow {
                        key: "{i}",
                        row,
                        onselect: move |_| selected_job.set(Some(job.clone())),
                    }
                }
            }
        }
    }
}

#[component]
fn JobTableRow(row: JobRow, onselect: Callback<()>) -> Element {
    rsx! {
        tr {
            style: "cursor: pointer;",
            onclick: move |_| onselect(()),
            td { style: "font-weight: 600;", "{row.title}" }
            td { span { class: "x-badge", "{row.category}" } }
            td { "{row.company}" }
            td { "{row.country}" }
            td { "{row.salary}" }
        }
    }
}

#[component]
pub fn JobDetailModal() -> Element {
    let mut selected_job = use_context::<JobsPageState>().selected_job;
    let Some(job) = selected_job.read().clone() else {
        return rsx! {};
    };
    let detail = JobDetail::from_job(&job);

    rsx! {
        div {
            id: "x-job-modal",
            style: "
                position: fixed;
                inset: 0;
                z-index: 1800;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(2, 6, 23, 0.7);
            ",
            onclick: move |_| selected_job.set(None),
            div {
                class: "x-section-card",
                style: "max-width: 720px; width: 90%; max-height: 80vh; overflow-y: auto;",
                // clicks inside the dialog must not close it
                onclick: move |e| e.stop_propagation(),
                div {
                    style: "display:flex; flex-direction: row; align-items: flex-start; gap: 12px;",
                    h2 { style: "margin: 0; flex-grow: 1;", "{detail.title}" }
                    button {
                        style: "background: transparent; border: none; color: #94A3B8; cursor: pointer;",
                        onclick: move |_| selected_job.set(None),
                        Icon { icon: MdClose, style: "width: 22px; height: 22px;" }
                    }
                }
                div {
                    style: "display:flex; flex-wrap: wrap; gap: 14px; margin: 14px 0; color: #CBD5E1;",
                    span { "🏢 {detail.company}" }
                    span { "📍 {detail.location}" }
                    span { "💰 {detail.salary}" }
                    span { "📂 {detail.category}" }
                }
                h3 { style: "font-size: 16px; margin-bottom: 6px;", "Job description" }
                p { style: "white-space: pre-wrap; line-height: 1.6; color: #E2E8F0;", "{detail.description}" }
                if let Some(posted) = detail.posted {
                    small { style: "color: #94A3B8;", "Posted {posted}" }
                }
            }
        }
    }
}
