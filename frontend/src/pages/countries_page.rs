use common::{
    filter_criteria::FilterCriteria,
    format::format_count,
    render::country_views::{country_cards, country_comparison_chart, regional_stats, top_companies_by_country},
};
use dioxus::prelude::*;

use crate::api::job_market_api::{fetch_jobs_by_country, fetch_jobs_by_region, fetch_matching_jobs};
use crate::components::bar_chart::BarChart;
use crate::components::section_card::{PageHeader, SectionCard};
use crate::components::suspend_boundary::{EmptyState, LoadingIndicator, SuspendWrapper};
use crate::routes::Route;

/// Countries page
#[component]
pub fn CountriesPage() -> Element {
    rsx! {
        Title { "Job Market Dashboard - Countries" }
        div {
            id: "x-countries-container",
            class: "x-page",
            PageHeader { title: "Countries", subtitle: "How postings are spread across the markets we track." }

            SuspendWrapper { CountryCardsSection {} }

            div {
                class: "x-two-columns",
                SectionCard { title: "Country comparison", subtitle: "Click a bar to browse that country's jobs".to_string(),
                    SuspendWrapper { ComparisonChartSection {} }
                }
                SectionCard { title: "Regions",
                    SuspendWrapper { RegionalStatsSection {} }
                }
            }

            SectionCard { title: "Top companies by country", subtitle: "Based on the latest postings".to_string(),
                SuspendWrapper { TopCompaniesSection {} }
            }
        }
    }
}

#[component]
fn CountryCardsSection() -> Element {
    let countries = use_resource(move || fetch_jobs_by_country());
    let Some(countries) = (*countries.read()).clone() else {
        return rsx! { LoadingIndicator {} };
    };
    let Some(countries) = countries else {
        return rsx! { EmptyState { message: "Country data is unavailable" } };
    };

    rsx! {
        div {
            id: "x-countries-grid",
            style: "display:grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 16px; margin-bottom: 20px;",
            for card in country_cards(&countries) {
                Link {
                    key: "{card.code}",
                    to: Route::jobs_for_countries(&card.code),
                    div {
                        class: "x-section-card x-feature-card",
                        style: "text-align: center;",
                        div { style: "font-size: 40px;", "{card.flag}" }
                        div { style: "font-size: 18px; font-weight: 600;", "{card.name}" }
                        div { style: "font-size: 28px; font-weight: 700; color: #A78BFA;", "{format_count(card.count)}" }
                        div { style: "color: #94A3B8; font-size: 13px;", "jobs" }
                        div { style: "color: #CBD5E1; font-size: 13px; margin-top: 6px;", "{card.percentage_label()}" }
                        span { class: "x-badge", style: "margin-top: 8px; display: inline-block;", "{card.region}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ComparisonChartSection() -> Element {
    let countries = use_resource(move || fetch_jobs_by_country());
    match (*countries.read()).clone() {
        None => rsx! { LoadingIndicator {} },
        Some(None) => rsx! { EmptyState { message: "Country data is unavailable" } },
        Some(Some(countries)) => rsx! {
            BarChart {
                dataset: country_comparison_chart(&countries),
                onselect: move |code: String| {
                    navigator().push(Route::jobs_for_countries(&code));
                },
            }
        },
    }
}

#[component]
fn RegionalStatsSection() -> Element {
    let regions = use_resource(move || fetch_jobs_by_region());
    let Some(regions) = (*regions.read()).clone() else {
        return rsx! { LoadingIndicator {} };
    };
    let rows = regions.map(|regions| regional_stats(&regions)).unwrap_or_default();
    if rows.is_empty() {
        return rsx! { EmptyState { message: "Region data is unavailable" } };
    }

    rsx! {
        div {
            id: "x-region-stats",
            style: "display:flex; flex-direction: column; gap: 14px;",
            for row in rows {
                div {
                    key: "{row.key}",
                    div {
                        style: "display:flex; flex-direction: row; justify-content: space-between;",
                        strong { "{row.key}" }
                        span { "{format_count(row.count)}" }
                    }
                    div {
                        style: "height: 8px; background: rgba(255,255,255,0.06); border-radius: 4px; margin: 6px 0; overflow: hidden;",
                        div { style: "height: 100%; width: {row.percentage}%; background: linear-gradient(90deg, #8B5CF6, #06B6D4);" }
                    }
                    span { style: "color: #94A3B8; font-size: 13px;", "{row.percentage_label()} of all jobs" }
                }
            }
        }
    }
}

#[component]
fn TopCompaniesSection() -> Element {
    let jobs = use_resource(move || fetch_matching_jobs(FilterCriteria::default()));
    let Some(jobs) = (*jobs.read()).clone() else {
        return rsx! { LoadingIndicator {} };
    };
    let grouped = jobs.map(|jobs| top_companies_by_country(&jobs)).unwrap_or_default();
    if grouped.is_empty() {
        return rsx! { EmptyState { message: "No company data available" } };
    }

    rsx! {
        div {
            id: "x-top-companies",
            style: "display:grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px;",
            for country in grouped {
                div {
                    key: "{country.code}",
                    class: "x-inner-card",
                    h4 { style: "margin: 0 0 10px 0;", "{country.heading}" }
                    for company in country.companies {
                        div {
                            key: "{company.rank}",
                            style: "display:flex; flex-direction: row; gap: 8px; padding: 4px 0;",
                            span { style: "color: #A78BFA; width: 28px;", "#{company.rank}" }
                            span { style: "flex-grow: 1;", "{company.company}" }
                            span { style: "color: #94A3B8;", "{company.count} jobs" }
                        }
                    }
                }
            }
        }
    }
}
