//! CSV export of the filtered jobs, saved through a temporary object URL.

use anyhow::{Context, anyhow};
use common::{
    csv_export::{export_file_name, jobs_to_csv},
    filter_criteria::FilterCriteria,
};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFileDownload};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::{
    api::job_market_api::{fetch_matching_jobs, now},
    data_definitions::app_status::{show_error, show_success},
};

fn js_error(e: JsValue) -> anyhow::Error {
    anyhow!("{e:?}")
}

/// Hands `contents` to the browser as a file download named `file_name`.
fn save_text_file(file_name: &str, contents: &str, mime: &str) -> anyhow::Result<()> {
    let window = web_sys::window().context("no window")?;
    let document = window.document().context("no document")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(js_error)?;
    Ok(())
}

#[component]
pub fn ExportCsvButton(criteria: ReadSignal<FilterCriteria>) -> Element {
    let mut exporting = use_signal(|| false);

    let export = move |_| {
        if *exporting.peek() {
            return;
        }
        exporting.set(true);
        let criteria = criteria.peek().clone();
        spawn(async move {
            if let Some(jobs) = fetch_matching_jobs(criteria).await {
                let file_name = export_file_name(now().date());
                match save_text_file(&file_name, &jobs_to_csv(&jobs), "text/csv;charset=utf-8;") {
                    Ok(()) => {
                        info!("exported {} jobs to {file_name}", jobs.len());
                        show_success(format!("Exported {} jobs to CSV", jobs.len()));
                    }
                    Err(e) => {
                        warn!("csv download failed: {e:#}");
                        show_error("Could not export jobs");
                    }
                }
            }
            exporting.set(false);
        });
    };

    rsx! {
        button {
            id: "x-export-csv",
            class: "x-button",
            disabled: exporting(),
            onclick: export,
            Icon { icon: MdFileDownload, style: "width: 18px; height: 18px;" }
            if exporting() { "Exporting..." } else { "Export CSV" }
        }
    }
}
