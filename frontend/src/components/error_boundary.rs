//! Error boundaries for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render failure in {}: {err:?}", boundary_name.read());
                rsx! {
                    div {
                        style: "display:flex; flex-direction: column; gap: 16px; padding: 32px; color: #F1F5F9;",
                        h1 {
                            style: "color:#F43F5E; font-size: 40px; margin: 0;",
                            "Something went wrong",
                        }
                        p {
                            style: "color:#FDA4AF; font-size: 18px; margin: 0;",
                            "Section: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color:#A78BFA; font-size: 18px;",
                            "Back to the home page"
                        }
                        pre {
                            style: "color:#CBD5E1; border: 1px solid #F43F5E; padding: 10px; border-radius: 8px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "x-button",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            gap: "8px",

            h3 {
                style: "color:#F43F5E; font-size: 22px; margin: 5px;",
                "This section failed to render",
            }

            pre {
                style: "color:#FDA4AF; border: 1px solid #F43F5E; padding: 10px; border-radius: 8px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
