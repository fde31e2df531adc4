//! Jobs listing: filter panel, result count, paged table, category breakdown and export.

use common::{
    filter_criteria::{FilterCriteria, JobsQuery},
    job_const::{CATEGORY_CHART_LIMIT, PAGE_SIZE},
    jobs_view::JobsViewState,
    render::{category::category_chart, job_rows::results_label},
};
use dioxus::prelude::*;

use crate::{
    api::job_market_api::{fetch_jobs, fetch_matching_jobs, now},
    components::{
        bar_chart::BarChart,
        csv_download::ExportCsvButton,
        filter_panel::FilterPanel,
        job_table::{JobDetailModal, JobTable},
        pagination_controls::PaginationControls,
        section_card::{PageHeader, SectionCard},
        suspend_boundary::{EmptyState, LoadingIndicator, SuspendWrapper},
    },
    data_definitions::jobs_page_state::JobsPageState,
};

/// Jobs page; the query string seeds the initial filters.
#[component]
pub fn JobsPage(country: String, countries: String, keyword: String, category: String) -> Element {
    let initial = FilterCriteria::from_page_context(&country, &countries, &keyword, &category);
    rsx! {
        Title { "Job Market Dashboard - Jobs" }
        JobsPageRootComponent { initial }
    }
}

#[component]
fn JobsPageRootComponent(initial: ReadSignal<FilterCriteria>) -> Element {
    let mut view = use_signal(|| JobsViewState::new(initial.peek().clone()));
    let selected_job = use_signal(|| None);

    // a new query string (e.g. a link from another page) starts over
    use_effect(move || {
        let fresh = JobsViewState::new(initial.read().clone());
        if *view.peek() != fresh {
            view.set(fresh);
        }
    });

    let apply_criteria = Callback::new(move |criteria: FilterCriteria| {
        let next = view.peek().apply(criteria);
        dioxus::logger::tracing::info!("applying filters: {:?}", next.criteria.to_query_params());
        view.set(next);
    });
    let goto_page = Callback::new(move |page: u64| {
        let next = view.peek().goto(page);
        view.set(next);
    });
    use_context_provider(move || JobsPageState { view: view.into(), apply_criteria, goto_page, selected_job });

    let criteria = use_memo(move || view.read().criteria.clone());

    rsx! {
        div {
            id: "x-jobs-container",
            class: "x-page",
            PageHeader { title: "Jobs", subtitle: "Browse, filter and export job postings." }

            div {
                style: "display:grid; grid-template-columns: 320px 1fr; gap: 20px; align-items: start;",
                FilterPanel {}

                div {
                    style: "display:flex; flex-direction: column; gap: 20px; min-width: 0;",
                    div {
                        style: "display:flex; flex-direction: row; align-items: center; gap: 12px;",
                        h2 {
                            id: "x-results-count",
                            style: "margin: 0; flex-grow: 1; font-size: 20px; font-weight: 500;",
                            SuspendWrapper { ResultsCount {} }
                        }
                        ExportCsvButton { criteria }
                    }
                    SectionCard { title: "Postings",
                        SuspendWrapper { JobsTableSection {} }
                    }
                    SectionCard { title: "Categories in this selection",
                        SuspendWrapper { CategoryBreakdownSection {} }
                    }
                }
            }
            JobDetailModal {}
        }
    }
}

/// Backend total, or the number of rows left after client-side refinement when it applies.
#[component]
fn ResultsCount() -> Element {
    let view = use_context::<JobsPageState>().view;
    let criteria = use_memo(move || view.read().criteria.clone());
    let count = use_resource(move || {
        let criteria = criteria();
        async move {
            if criteria.needs_refinement() {
                fetch_matching_jobs(criteria).await.map(|jobs| jobs.len() as u64)
            } else {
                fetch_jobs(JobsQuery::new(0, 1, criteria)).await.map(|listing| listing.total)
            }
        }
    });

    match (*count.read()).clone() {
        None => rsx! { "Searching..." },
        Some(None) => rsx! { "Results unavailable" },
        Some(Some(count)) => rsx! { "{results_label(count)}" },
    }
}

#[component]
fn JobsTableSection() -> Element {
    let state = use_context::<JobsPageState>();
    let view = state.view;
    let page = use_resource(move || {
        let query = view.read().page_query();
        async move {
            let criteria = query.criteria.clone();
            let listing = fetch_jobs(query).await?;
            Some((criteria.refine(listing.jobs, now()), listing.total))
        }
    });

    let Some(page) = (*page.read()).clone() else {
        return rsx! { LoadingIndicator {} };
    };
    let Some((jobs, total)) = page else {
        return rsx! { EmptyState { message: "Jobs could not be loaded" } };
    };

    rsx! {
        JobTable { jobs }
        PaginationControls {
            total,
            page_size: PAGE_SIZE,
            current_page: view.read().page,
            goto_page: state.goto_page,
        }
    }
}

#[component]
fn CategoryBreakdownSection() -> Element {
    let view = use_context::<JobsPageState>().view;
    let criteria = use_memo(move || view.read().criteria.clone());
    let jobs = use_resource(move || fetch_matching_jobs(criteria()));

    match (*jobs.read()).clone() {
        None => rsx! { LoadingIndicator {} },
        Some(None) => rsx! { EmptyState { message: "Category data is unavailable" } },
        Some(Some(jobs)) => rsx! { BarChart { dataset: category_chart(&jobs, CATEGORY_CHART_LIMIT) } },
    }
}
