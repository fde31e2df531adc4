use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    min_height: "80px",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "x-loading-indicator",
            div { class: "x-spinner" }
            "Loading..."
        }
    }
}

/// Shown in place of a section whose data could not be loaded or came back empty.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div {
            class: "x-empty-state",
            "{message}"
        }
    }
}
