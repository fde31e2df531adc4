use common::render::dashboard::{dashboard_country_chart, kpi_cards, region_chart, salary_by_role_rows, summary_insight};
use dioxus::prelude::*;
use futures_util::future::join3;

use crate::api::job_market_api::{fetch_jobs_by_country, fetch_jobs_by_region, fetch_kpi, fetch_salary_by_role};
use crate::components::bar_chart::BarChart;
use crate::components::kpi_cards::KpiCardRow;
use crate::components::section_card::{PageHeader, SectionCard};
use crate::components::suspend_boundary::{EmptyState, LoadingIndicator, SuspendWrapper};
use crate::routes::Route;

/// Dashboard page
#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        Title { "Job Market Dashboard - Overview" }
        div {
            id: "x-dashboard-container",
            class: "x-page",
            PageHeader { title: "Dashboard", subtitle: "An overview of every posting collected so far." }

            SuspendWrapper { DashboardKpis {} }

            div {
                class: "x-two-columns",
                SectionCard { title: "Jobs by region",
                    SuspendWrapper { RegionChartSection {} }
                }
                SectionCard { title: "Top countries", subtitle: "Click a country to browse its jobs".to_string(),
                    SuspendWrapper { CountryChartSection {} }
                }
            }

            SectionCard { title: "Summary",
                SuspendWrapper { SummarySection {} }
            }

            SectionCard { title: "Average salary by role",
                SuspendWrapper { SalaryByRoleSection {} }
            }
        }
    }
}

#[component]
fn DashboardKpis() -> Element {
    let kpi = use_resource(move || fetch_kpi());
    match (*kpi.read()).clone() {
        None => rsx! { LoadingIndicator {} },
        Some(None) => rsx! { EmptyState { message: "Statistics are unavailable right now" } },
        Some(Some(kpi)) => rsx! { KpiCardRow { cards: kpi_cards(&kpi) } },
    }
}

#[component]
fn RegionChartSection() -> Element {
    let regions = use_resource(move || fetch_jobs_by_region());
    match (*regions.read()).clone() {
        None => rsx! { LoadingIndicator {} },
        Some(None) => rsx! { EmptyState { message: "Region data is unavailable" } },
        Some(Some(regions)) => rsx! { BarChart { dataset: region_chart(&regions) } },
    }
}

#[component]
fn CountryChartSection() -> Element {
    let countries = use_resource(move || fetch_jobs_by_country());
    let open_country = move |code: String| {
        navigator().push(Route::jobs_for_countries(&code));
    };
    match (*countries.read()).clone() {
        None => rsx! { LoadingIndicator {} },
        Some(None) => rsx! { EmptyState { message: "Country data is unavailable" } },
        Some(Some(countries)) => rsx! {
            BarChart { dataset: dashboard_country_chart(&countries), onselect: open_country }
        },
    }
}

/// Waits for all three aggregates; any missing one leaves the summary empty.
#[component]
fn SummarySection() -> Element {
    let summary = use_resource(move || async move {
        match join3(fetch_kpi(), fetch_jobs_by_region(), fetch_jobs_by_country()).await {
            (Some(kpi), Some(regions), Some(countries)) => Some(summary_insight(&kpi, &regions, &countries)),
            _ => None,
        }
    });

    let Some(summary) = (*summary.read()).clone() else {
        return rsx! { LoadingIndicator {} };
    };
    let Some(summary) = summary else {
        return rsx! { EmptyState { message: "The summary needs every statistic to load" } };
    };

    rsx! {
        div {
            id: "x-summary-content",
            style: "display:flex; flex-direction: column; gap: 12px; line-height: 1.7; color: #E2E8F0;",
            p {
                "🎯 "
                strong { "Headline: " }
                "the dataset holds "
                strong { "{summary.total_jobs}" }
                " jobs from "
                strong { "{summary.total_countries}" }
                " countries, posted by "
                strong { "{summary.total_companies}" }
                " different companies."
            }
            if let Some(region) = summary.top_region.clone() {
                p {
                    "📍 "
                    strong { "Regions: " }
                    strong { "{region.name}" }
                    " leads with "
                    strong { "{region.count_label()}" }
                    " jobs, about "
                    strong { "{summary.top_region_share}%" }
                    " of the total."
                }
            }
            if let Some(country) = summary.top_country.clone() {
                p {
                    "🌏 "
                    strong { "Countries: " }
                    strong { "{country.name}" }
                    " has the most openings with "
                    strong { "{country.count_label()}" }
                    " jobs."
                }
            }
            p {
                "💰 "
                strong { "Salaries: " }
                strong { "{summary.salary_percentage}" }
                " of postings disclose a salary."
            }
        }
    }
}

#[component]
fn SalaryByRoleSection() -> Element {
    let roles = use_resource(move || fetch_salary_by_role());
    let Some(roles) = (*roles.read()).clone() else {
        return rsx! { LoadingIndicator {} };
    };
    let rows = roles.map(|roles| salary_by_role_rows(&roles)).unwrap_or_default();
    if rows.is_empty() {
        return rsx! { EmptyState { message: "No salary data available" } };
    }

    rsx! {
        table {
            class: "x-table",
            thead {
                tr {
                    th { "Role" }
                    th { "Average min" }
                    th { "Average max" }
                    th { "Jobs" }
                }
            }
            tbody {
                for row in rows {
                    tr {
                        key: "{row.role}",
                        td { "{row.role}" }
                        td { "{row.average_min}" }
                        td { "{row.average_max}" }
                        td { "{row.count}" }
                    }
                }
            }
        }
    }
}
