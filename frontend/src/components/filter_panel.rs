//! Filter panel for the jobs listing.
//!
//! Widgets edit a local `FilterControls`; nothing reaches the listing until the
//! keyword settles or the user presses apply.

use common::{
    countries::{COUNTRIES, FILTER_CATEGORIES, FILTER_SKILLS},
    debounce::Debouncer,
    filter_criteria::{FilterControls, FilterCriteria, Recency},
    format::format_number,
    job_const::{KEYWORD_DEBOUNCE_MS, SALARY_RANGE_MAX, SALARY_RANGE_STEP},
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdExpandLess, MdExpandMore}};
use gloo_timers::future::TimeoutFuture;

use crate::data_definitions::{app_status::show_success, jobs_page_state::JobsPageState};

#[derive(Clone, Copy)]
struct FilterPanelContext {
    controls: Signal<FilterControls>,
}

#[component]
pub fn FilterPanel() -> Element {
    let state = use_context::<JobsPageState>();
    let view = state.view;
    let apply_criteria = state.apply_criteria;

    let mut controls = use_signal(|| FilterControls::from_criteria(&view.peek().criteria));
    let mut debouncer = use_signal(Debouncer::<FilterControls>::default);
    let mut expanded = use_signal(|| true);
    use_context_provider(|| FilterPanelContext { controls });

    // criteria applied from elsewhere (links, clear) are mirrored into the widgets
    let applied = use_memo(move || view.read().criteria.clone());
    use_effect(move || {
        let mirrored = controls.peek().reconcile(&applied.read());
        if let Some(mirrored) = mirrored {
            controls.set(mirrored);
        }
    });

    let active_count = use_memo(move || FilterCriteria::from_controls(&controls.read()).active_count());

    let on_keyword = move |e: FormEvent| {
        controls.write().keyword = e.value();
        let ticket = debouncer.write().push(controls.peek().clone());
        spawn(async move {
            TimeoutFuture::new(KEYWORD_DEBOUNCE_MS).await;
            let settled = debouncer.write().settle(ticket);
            if let Some(pending) = settled {
                apply_criteria(FilterCriteria::from_controls(&pending));
            }
        });
    };

    let apply = move |_| {
        debouncer.write().cancel();
        apply_criteria(FilterCriteria::from_controls(&controls.peek()));
        show_success("Filters applied");
    };

    let clear = move |_| {
        debouncer.write().cancel();
        controls.set(FilterControls::default());
        apply_criteria(FilterCriteria::cleared());
    };

    rsx! {
        aside {
            id: "x-filter-panel",
            class: "x-section-card",
            div {
                style: "display:flex; flex-direction: row; align-items: center; gap: 10px;",
                h2 { style: "margin: 0; font-size: 18px; flex-grow: 1;", "Filters" }
                span {
                    id: "x-filter-count",
                    class: "x-badge",
                    "{active_count()} active"
                }
                button {
                    style: "background: transparent; border: none; color: #CBD5E1; cursor: pointer;",
                    onclick: move |_| expanded.toggle(),
                    if expanded() {
                        Icon { icon: MdExpandLess, style: "width: 22px; height: 22px;" }
                    } else {
                        Icon { icon: MdExpandMore, style: "width: 22px; height: 22px;" }
                    }
                }
            }

            if expanded() {
                div {
                    style: "display:flex; flex-direction: column; gap: 18px; margin-top: 16px;",

                    FilterField { label: "Category",
                        select {
                            class: "x-input",
                            value: "{controls.read().category}",
                            onchange: move |e| controls.write().category = e.value(),
                            option { value: "", "All categories" }
                            for category in FILTER_CATEGORIES {
                                option { key: "{category}", value: "{category}", "{category}" }
                            }
                        }
                    }

                    FilterField { label: "Keyword",
                        input {
                            class: "x-input",
                            r#type: "search",
                            placeholder: "Title, company, skill...",
                            value: "{controls.read().keyword}",
                            oninput: on_keyword,
                        }
                    }

                    FilterField { label: "Countries",
                        div {
                            style: "display:grid; grid-template-columns: 1fr 1fr; gap: 6px;",
                            for country in COUNTRIES.iter() {
                                CheckboxOption {
                                    key: "{country.code}",
                                    label: format!("{} {}", country.flag, country.name),
                                    checked: controls.read().countries.contains(country.code),
                                    ontoggle: move |_| controls.write().toggle_country(country.code),
                                }
                            }
                        }
                    }

                    SalarySliders {}

                    FilterField { label: "Skills",
                        div {
                            style: "display:flex; flex-wrap: wrap; gap: 6px;",
                            for skill in FILTER_SKILLS {
                                CheckboxOption {
                                    key: "{skill}",
                                    label: skill.to_string(),
                                    checked: controls.read().skills.contains(&skill.to_lowercase()),
                                    ontoggle: move |_| controls.write().toggle_skill(skill),
                                }
                            }
                        }
                    }

                    FilterField { label: "Posted",
                        select {
                            class: "x-input",
                            value: "{controls.read().recency}",
                            onchange: move |e| controls.write().recency = e.value(),
                            for recency in Recency::BUCKETS {
                                option { key: "{recency}", value: "{recency}", "{recency.label()}" }
                            }
                        }
                    }

                    CheckboxOption {
                        label: "Only jobs with salary".to_string(),
                        checked: controls.read().has_salary,
                        ontoggle: move |_| {
                            let mut c = controls.write();
                            c.has_salary = !c.has_salary;
                        },
                    }

                    div {
                        style: "display:flex; flex-direction: row; gap: 10px;",
                        button { class: "x-button", onclick: apply, "Apply filters" }
                        button { class: "x-button x-button-secondary", onclick: clear, "Clear all" }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterField(label: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 8px;",
            span { style: "color: #94A3B8; font-size: 13px; text-transform: uppercase; letter-spacing: 0.04em;", "{label}" }
            {children}
        }
    }
}

#[component]
fn CheckboxOption(label: String, checked: bool, ontoggle: Callback<()>) -> Element {
    rsx! {
        label {
            style: "display:flex; align-items: center; gap: 6px; color: #E2E8F0; font-size: 14px; cursor: pointer;",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |_| ontoggle(()),
            }
            "{label}"
        }
    }
}

#[component]
fn SalarySliders() -> Element {
    let mut controls = use_context::<FilterPanelContext>().controls;
    let salary = controls.read().salary;
    let range_label = format!("${} - ${}", format_number(salary.min() as i64), format_number(salary.max() as i64));
    let parse = |e: &FormEvent| e.value().parse::<u32>().ok();

    rsx! {
        FilterField { label: "Salary range",
            div {
                style: "display:flex; flex-direction: column; gap: 6px;",
                input {
                    r#type: "range",
                    min: "0",
                    max: "{SALARY_RANGE_MAX}",
                    step: "{SALARY_RANGE_STEP}",
                    value: "{salary.min()}",
                    oninput: move |e| {
                        if let Some(value) = parse(&e) {
                            controls.write().set_salary_min(value);
                        }
                    },
                }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{SALARY_RANGE_MAX}",
                    step: "{SALARY_RANGE_STEP}",
                    value: "{salary.max()}",
                    oninput: move |e| {
                        if let Some(value) = parse(&e) {
                            controls.write().set_salary_max(value);
                        }
                    },
                }
                span {
                    style: "color: #CBD5E1; font-size: 14px;",
                    "{range_label}"
                }
            }
        }
    }
}
