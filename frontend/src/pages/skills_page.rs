use common::{
    filter_criteria::FilterCriteria,
    format::format_count,
    render::{
        chart::count_chart,
        skills::{skill_cards, skill_pairs, skills_by_category},
    },
};
use dioxus::prelude::*;

use crate::api::job_market_api::{fetch_kpi, fetch_matching_jobs, fetch_top_skills};
use crate::components::bar_chart::BarChart;
use crate::components::section_card::{PageHeader, SectionCard};
use crate::components::suspend_boundary::{EmptyState, LoadingIndicator, SuspendWrapper};
use crate::routes::Route;

/// Skills page
#[component]
pub fn SkillsPage() -> Element {
    rsx! {
        Title { "Job Market Dashboard - Skills" }
        div {
            id: "x-skills-container",
            class: "x-page",
            PageHeader { title: "Skills", subtitle: "What employers ask for in their job descriptions." }

            SuspendWrapper { SkillCardsSection {} }

            div {
                class: "x-two-columns",
                SectionCard { title: "Skill demand",
                    SuspendWrapper { SkillChartSection {} }
                }
                SectionCard { title: "Skills by category",
                    SuspendWrapper { SkillsByCategorySection {} }
                }
            }

            SectionCard { title: "Common skill pairs", subtitle: "Click a pair to find jobs asking for both".to_string(),
                SuspendWrapper { SkillPairsSection {} }
            }
        }
    }
}

#[component]
fn SkillCardsSection() -> Element {
    let skills = use_resource(move || async move {
        let skills = fetch_top_skills().await?;
        // only needed when the backend leaves out percentages
        let total_jobs = match skills.iter().any(|s| s.percentage.is_none()) {
            true => fetch_kpi().await.map(|k| k.total_jobs).unwrap_or(0),
            false => 0,
        };
        Some(skill_cards(&skills, total_jobs))
    });
    let Some(cards) = (*skills.read()).clone() else {
        return rsx! { LoadingIndicator {} };
    };
    let Some(cards) = cards else {
        return rsx! { EmptyState { message: "Skill data is unavailable" } };
    };

    rsx! {
        div {
            id: "x-skills-grid",
            style: "display:grid; grid-template-columns: repeat(auto-fill, minmax(190px, 1fr)); gap: 16px; margin-bottom: 20px;",
            for card in cards {
                div {
                    key: "{card.skill}",
                    class: "x-section-card",
                    style: "display:flex; flex-direction: column; gap: 6px; border-top: 3px solid {card.color};",
                    span { style: "color: #94A3B8;", "#{card.rank}" }
                    span { style: "font-size: 34px;", "{card.icon}" }
                    strong { style: "font-size: 18px;", "{card.skill}" }
                    span { style: "font-size: 26px; font-weight: 700; color: {card.color};", "{card.percentage_label()}" }
                    span { style: "color: #94A3B8; font-size: 13px;", "of all jobs" }
                    div {
                        style: "height: 6px; background: rgba(255,255,255,0.06); border-radius: 3px; overflow: hidden;",
                        div { style: "height: 100%; width: {card.percentage.min(100.0)}%; background: {card.color};" }
                    }
                    Link {
                        to: Route::jobs_for_keyword(&card.jobs_keyword()),
                        class: "x-button x-button-secondary",
                        "View jobs"
                    }
                }
            }
        }
    }
}

#[component]
fn SkillChartSection() -> Element {
    let skills = use_resource(move || fetch_top_skills());
    match (*skills.read()).clone() {
        None => rsx! { LoadingIndicator {} },
        Some(None) => rsx! { EmptyState { message: "Skill data is unavailable" } },
        Some(Some(skills)) => rsx! {
            BarChart {
                dataset: count_chart("Skill demand", &skills, skills.len(), |s| s.to_string()),
                onselect: move |skill: String| {
                    navigator().push(Route::jobs_for_keyword(&skill.to_lowercase()));
                },
            }
        },
    }
}

#[component]
fn SkillsByCategorySection() -> Element {
    let jobs = use_resource(move || fetch_matching_jobs(FilterCriteria::default()));
    let Some(jobs) = (*jobs.read()).clone() else {
        return rsx! { LoadingIndicator {} };
    };
    let breakdown = jobs.map(|jobs| skills_by_category(&jobs)).unwrap_or_default();
    if breakdown.is_empty() {
        return rsx! { EmptyState { message: "No categorised jobs to analyse" } };
    }

    rsx! {
        div {
            id: "x-category-skills",
            style: "display:flex; flex-direction: column; gap: 18px;",
            for category in breakdown {
                div {
                    key: "{category.category}",
                    class: "x-inner-card",
                    div {
                        style: "display:flex; flex-direction: row; align-items: center; gap: 10px; margin-bottom: 10px;",
                        h4 { style: "margin: 0; flex-grow: 1;", "📂 {category.category} ({format_count(category.job_count)} jobs)" }
                        Link {
                            to: Route::jobs_for_category(&category.category),
                            class: "x-button x-button-secondary",
                            "View jobs"
                        }
                    }
                    for row in category.skills {
                        div {
                            key: "{row.skill}",
                            style: "display:grid; grid-template-columns: 24px 70px 1fr 56px; align-items: center; gap: 8px; padding: 3px 0;",
                            span { "{row.icon}" }
                            span { "{row.skill}" }
                            div {
                                style: "height: 6px; background: rgba(255,255,255,0.06); border-radius: 3px; overflow: hidden;",
                                div { style: "height: 100%; width: {row.percentage}%; background: {row.color};" }
                            }
                            span { style: "text-align: right; color: #CBD5E1;", "{row.percentage:.1}%" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillPairsSection() -> Element {
    let jobs = use_resource(move || fetch_matching_jobs(FilterCriteria::default()));
    let Some(jobs) = (*jobs.read()).clone() else {
        return rsx! { LoadingIndicator {} };
    };
    let pairs = jobs.map(|jobs| skill_pairs(&jobs)).unwrap_or_default();
    if pairs.is_empty() {
        return rsx! { EmptyState { message: "No job mentions two tracked skills yet" } };
    }

    rsx! {
        div {
            id: "x-skill-pairs",
            style: "display:grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 14px;",
            for pair in pairs {
                Link {
                    key: "{pair.label()}",
                    to: Route::jobs_for_keyword(&pair.jobs_keyword()),
                    div {
                        class: "x-inner-card x-feature-card",
                        span { style: "color: #A78BFA;", "#{pair.rank}" }
                        div { style: "font-size: 18px; font-weight: 600; margin: 6px 0;", "{pair.label()}" }
                        span { style: "color: #94A3B8;", "{pair.count} jobs" }
                    }
                }
            }
        }
    }
}
