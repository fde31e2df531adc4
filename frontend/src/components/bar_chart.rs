//! Horizontal bar chart drawn from a `ChartDataset`.

use common::render::chart::ChartDataset;
use dioxus::prelude::*;

use crate::components::suspend_boundary::EmptyState;

#[component]
pub fn BarChart(dataset: ChartDataset, onselect: Option<Callback<String>>) -> Element {
    if dataset.is_empty() {
        return rsx! { EmptyState { message: "No data to chart" } };
    }
    let cursor = if onselect.is_some() { "pointer" } else { "default" };
    rsx! {
        div {
            class: "x-bar-chart",
            style: "display:flex; flex-direction: column; gap: 10px;",
            for bar in dataset.bars.iter() {
                div {
                    key: "{bar.label}",
                    style: "display:grid; grid-template-columns: 140px 1fr 70px; align-items: center; gap: 10px; cursor: {cursor};",
                    onclick: {
                        let target = bar.target.clone();
                        move |_| {
                            if let (Some(onselect), Some(target)) = (onselect, target.clone()) {
                                onselect(target);
                            }
                        }
                    },
                    span { style: "color: #CBD5E1; font-size: 14px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{bar.label}" }
                    div {
                        style: "height: 22px; background: rgba(255,255,255,0.05); border-radius: 6px; overflow: hidden;",
                        div {
                            style: "height: 100%; width: {dataset.width_percent(bar)}%; background: {bar.color}; border-radius: 6px;",
                        }
                    }
                    span { style: "color: #F1F5F9; font-size: 14px; text-align: right;", "{bar.value_label}" }
                }
            }
        }
    }
}
