use common::render::dashboard::KpiCard;
use dioxus::prelude::*;

#[component]
pub fn KpiCardRow(cards: Vec<KpiCard>) -> Element {
    rsx! {
        div {
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                gap: 16px;
            ",
            for card in cards {
                div {
                    key: "{card.id}",
                    id: "{card.id}",
                    class: "x-kpi-card",
                    div { style: "font-size: 28px;", "{card.icon}" }
                    div { style: "font-size: 30px; font-weight: 700;", "{card.value}" }
                    div { style: "color: #94A3B8; font-size: 14px;", "{card.label}" }
                }
            }
        }
    }
}
