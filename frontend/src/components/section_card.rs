use dioxus::prelude::*;

/// Titled panel wrapping one page section.
#[component]
pub fn SectionCard(title: String, subtitle: Option<String>, children: Element) -> Element {
    rsx! {
        section {
            class: "x-section-card",
            div {
                style: "display:flex; flex-direction: column; gap: 2px; margin-bottom: 14px;",
                h2 { style: "margin: 0; font-size: 20px; font-weight: 600;", "{title}" }
                if let Some(subtitle) = subtitle {
                    span { style: "color: #94A3B8; font-size: 14px;", "{subtitle}" }
                }
            }
            {children}
        }
    }
}

#[component]
pub fn PageHeader(title: String, subtitle: String) -> Element {
    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 6px; margin-bottom: 24px;",
            h1 { style: "margin: 0; font-size: 34px; font-weight: 700; letter-spacing: -0.02em;", "{title}" }
            span { style: "color: #94A3B8; font-size: 16px;", "{subtitle}" }
        }
    }
}
