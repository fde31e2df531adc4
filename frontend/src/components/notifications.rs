//! Toast stack and the global loading overlay.

use common::notifications::{Toast, ToastKind};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};
use gloo_timers::future::TimeoutFuture;

use crate::data_definitions::app_status::{IN_FLIGHT, TOASTS};

const TOAST_TICK_MS: u32 = 250;

#[component]
pub fn ToastHost() -> Element {
    // one clock for every toast; expiry is decided by the queue
    use_future(|| async move {
        loop {
            TimeoutFuture::new(TOAST_TICK_MS).await;
            if !TOASTS.peek().is_empty() {
                TOASTS.write().tick(TOAST_TICK_MS);
            }
        }
    });

    let toasts = TOASTS.read().toasts().to_vec();
    rsx! {
        div {
            id: "x-toast-host",
            style: "
                position: fixed;
                top: 20px;
                right: 20px;
                z-index: 2000;
                display: flex;
                flex-direction: column;
                gap: 10px;
            ",
            for toast in toasts {
                ToastCard { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let (accent, icon) = match toast.kind {
        ToastKind::Error => ("#F43F5E", "⚠️"),
        ToastKind::Success => ("#10B981", "✅"),
    };
    let id = toast.id;
    rsx! {
        div {
            role: "status",
            style: "
                display: flex;
                align-items: center;
                gap: 10px;
                min-width: 260px;
                max-width: 380px;
                padding: 12px 14px;
                border-radius: 10px;
                background: #1E293B;
                color: #F1F5F9;
                border-left: 4px solid {accent};
                box-shadow: 0 8px 24px rgba(0,0,0,0.35);
            ",
            span { "{icon}" }
            span { style: "flex-grow: 1;", "{toast.message}" }
            button {
                style: "background: transparent; border: none; color: #94A3B8; cursor: pointer;",
                onclick: move |_| TOASTS.write().dismiss(id),
                Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
            }
        }
    }
}

#[component]
pub fn LoadingOverlay() -> Element {
    if !IN_FLIGHT.read().is_loading() {
        return rsx! {};
    }
    rsx! {
        div {
            id: "x-loading-overlay",
            style: "
                position: fixed;
                bottom: 20px;
                left: 50%;
                transform: translateX(-50%);
                z-index: 1500;
                display: flex;
                align-items: center;
                gap: 10px;
                padding: 8px 16px;
                border-radius: 9999px;
                background: rgba(15, 23, 42, 0.92);
                color: #E2E8F0;
                font-size: 14px;
            ",
            div { class: "x-spinner" }
            "Loading data..."
        }
    }
}
