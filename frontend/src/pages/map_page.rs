//! World map with one marker per region.

use common::{
    format::format_count,
    render::map::{RegionMarker, region_details, region_markers},
};
use dioxus::prelude::*;
use futures_util::future::join;

use crate::api::job_market_api::{fetch_jobs_by_region, fetch_kpi};
use crate::components::section_card::{PageHeader, SectionCard};
use crate::components::suspend_boundary::{EmptyState, LoadingIndicator, SuspendWrapper};
use crate::routes::Route;

/// Map page
#[component]
pub fn MapPage() -> Element {
    rsx! {
        Title { "Job Market Dashboard - Map" }
        div {
            id: "x-map-container",
            class: "x-page",
            PageHeader { title: "World map", subtitle: "Select a region to see its share of the market." }
            SuspendWrapper { MapSection {} }
        }
    }
}

#[component]
fn MapSection() -> Element {
    let mut selected_region = use_signal(|| None::<String>);
    let data = use_resource(move || async move {
        let (kpi, regions) = join(fetch_kpi(), fetch_jobs_by_region()).await;
        let total_jobs = kpi.map(|k| k.total_jobs).unwrap_or(0);
        (total_jobs, regions.unwrap_or_default())
    });

    let Some((total_jobs, regions)) = (*data.read()).clone() else {
        return rsx! { LoadingIndicator {} };
    };
    let markers = region_markers(&regions);
    let details = selected_region.read().as_deref().and_then(|name| region_details(name, &regions, total_jobs));
    let selected_label = selected_region.read().clone().unwrap_or_else(|| "none".to_string());

    rsx! {
        div {
            style: "display:flex; flex-direction: row; gap: 12px; margin-bottom: 16px; color: #CBD5E1;",
            span { "Total jobs: " strong { id: "x-total-jobs", "{format_count(total_jobs)}" } }
            span {
                "Selected region: "
                strong { id: "x-selected-region", "{selected_label}" }
            }
        }
        div {
            id: "x-world-map",
            style: "
                position: relative;
                width: 100%;
                aspect-ratio: 2 / 1;
                border-radius: 16px;
                overflow: hidden;
                background-color: rgba(15, 23, 42, 0.6);
                background-image:
                    linear-gradient(rgba(255,255,255,0.05) 1px, transparent 1px),
                    linear-gradient(90deg, rgba(255,255,255,0.05) 1px, transparent 1px);
                background-size: 10% 10%;
            ",
            for marker in markers {
                MapMarker {
                    key: "{marker.region.name}",
                    selected: selected_region.read().as_deref() == Some(marker.region.name),
                    onselect: move |name: String| selected_region.set(Some(name)),
                    marker,
                }
            }
        }
        if regions.is_empty() {
            EmptyState { message: "Region data is unavailable" }
        }
        if let Some(details) = details {
            SectionCard { title: "📍 {details.name}",
                div {
                    id: "x-region-details",
                    style: "display:grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin-bottom: 16px;",
                    Stat { label: "Jobs", value: details.jobs.clone() }
                    Stat { label: "Countries", value: details.country_count.to_string() }
                    Stat { label: "Share of all jobs", value: details.percentage.clone() }
                }
                Link {
                    to: Route::jobs_for_countries(&details.jobs_countries),
                    class: "x-button",
                    "View jobs in {details.name}"
                }
            }
        }
    }
}

#[component]
fn MapMarker(marker: RegionMarker, selected: bool, onselect: Callback<String>) -> Element {
    let color = marker.region.color;
    let ring = if selected { "0 0 0 4px rgba(255,255,255,0.8)" } else { "none" };
    let name = marker.region.name;
    rsx! {
        div {
            class: "x-region-marker",
            style: "
                position: absolute;
                left: {marker.left_percent()}%;
                top: {marker.top_percent()}%;
                width: {marker.diameter_percent()}%;
                aspect-ratio: 1 / 1;
                transform: translate(-50%, -50%);
                border-radius: 50%;
                background: radial-gradient(circle, {color} 0%, {color} 60%, transparent 61%), {color}4D;
                box-shadow: {ring};
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                color: white;
                cursor: pointer;
            ",
            onclick: move |_| onselect(name.to_string()),
            span { style: "position: absolute; bottom: 100%; margin-bottom: 6px; font-weight: 700; white-space: nowrap;", "{name}" }
            strong { style: "font-size: 18px;", "{marker.jobs_label}" }
            span { style: "font-size: 11px; opacity: 0.8;", "jobs" }
        }
    }
}

#[component]
fn Stat(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "x-inner-card",
            div { style: "color: #94A3B8; font-size: 13px;", "{label}" }
            div { style: "font-size: 24px; font-weight: 700;", "{value}" }
        }
    }
}
