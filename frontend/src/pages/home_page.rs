use common::render::dashboard::kpi_cards;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdDashboard, MdWork};
use dioxus_free_icons::icons::md_maps_icons::MdMap;
use dioxus_free_icons::icons::md_social_icons::{MdPublic, MdSchool};

use crate::api::job_market_api::fetch_kpi;
use crate::components::kpi_cards::KpiCardRow;
use crate::components::suspend_boundary::{EmptyState, LoadingIndicator};
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Job Market Dashboard" }
        div {
            id: "x-home-container",
            class: "x-page",

            MainTitle {}
            StatsPreview {}

            div {
                style: "
                    display:grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 16px;
                    margin-top: 28px;
                ",
                FeatureCard { to: Route::DashboardPage {}, icon: MdDashboard, title: "Dashboard", text: "Headline numbers, regional split and salary by role." }
                FeatureCard { to: Route::jobs(), icon: MdWork, title: "Browse jobs", text: "Filter postings by country, skill, salary and recency, then export them." }
                FeatureCard { to: Route::CountriesPage {}, icon: MdPublic, title: "Countries", text: "Compare markets and see who is hiring where." }
                FeatureCard { to: Route::SkillsPage {}, icon: MdSchool, title: "Skills", text: "The skills employers ask for and how they pair up." }
                FeatureCard { to: Route::MapPage {}, icon: MdMap, title: "World map", text: "Job volume by region at a glance." }
            }
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 12px; margin-bottom: 28px;",
            div {
                style: "font-size: 46px; font-weight: 700; letter-spacing: -0.02em;",
                span { "Explore the " }
                span { style: "color:#A78BFA;", "global job market" }
            }
            div {
                style: "color: #94A3B8; font-size: 20px; max-width: 720px; line-height: 1.6;",
                "Live statistics on postings, employers, salaries and in-demand skills across the countries we track."
            }
        }
    }
}

#[component]
fn StatsPreview() -> Element {
    let kpi = use_resource(move || fetch_kpi());
    match (*kpi.read()).clone() {
        None => rsx! { LoadingIndicator {} },
        Some(None) => rsx! { EmptyState { message: "Statistics are unavailable right now" } },
        Some(Some(kpi)) => rsx! { KpiCardRow { cards: kpi_cards(&kpi) } },
    }
}

#[component]
fn FeatureCard<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(to: Route, icon: I, title: String, text: String) -> Element {
    rsx! {
        Link {
            to: to,
            div {
                class: "x-section-card x-feature-card",
                Icon { icon: icon, style: "width: 30px; height: 30px; color: #A78BFA;" }
                h3 { style: "margin: 10px 0 6px 0;", "{title}" }
                p { style: "margin: 0; color: #94A3B8; line-height: 1.5;", "{text}" }
            }
        }
    }
}
