//! Page buttons for the jobs listing.

use common::pagination::{PageButton, Pagination};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

/// Renders nothing when the result fits on a single page.
#[component]
pub fn PaginationControls(total: u64, page_size: u64, current_page: u64, goto_page: Callback<u64>) -> Element {
    let Some(pagination) = Pagination::compute(total, page_size, current_page) else {
        return rsx! {};
    };

    rsx! {
        nav {
            id: "x-pagination",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 8px;
                padding: 16px 0;
            ",
            for (i, button) in pagination.buttons().into_iter().enumerate() {
                {match button {
                    PageButton::Previous { target, enabled } => rsx! {
                        NavigationButton {
                            key: "{i}",
                            icon: MdArrowBack,
                            label: "Previous page",
                            disabled: !enabled,
                            onclick: move |_| goto_page(target),
                        }
                    },
                    PageButton::Next { target, enabled } => rsx! {
                        NavigationButton {
                            key: "{i}",
                            icon: MdArrowForward,
                            label: "Next page",
                            disabled: !enabled,
                            onclick: move |_| goto_page(target),
                        }
                    },
                    PageButton::Page { number, active } => rsx! {
                        button {
                            key: "{i}",
                            class: if active { "x-page-button x-page-button-active" } else { "x-page-button" },
                            onclick: move |_| {
                                if !active {
                                    goto_page(number);
                                }
                            },
                            "{number}"
                        }
                    },
                    PageButton::Gap => rsx! {
                        span { key: "{i}", style: "color: #64748B; padding: 0 4px;", "..." }
                    },
                }}
            }
            span {
                style: "color: #94A3B8; font-size: 14px; margin-left: 12px;",
                "Page {pagination.current_page} of {pagination.total_pages}"
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(255,255,255,0.25)" } else { "rgba(255,255,255,0.95)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            aria_label: "{label}",
            style: "
                width: 36px;
                height: 36px;
                background: #1E293B;
                border: 1px solid #334155;
                border-radius: 8px;
                padding: 4px;
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}
