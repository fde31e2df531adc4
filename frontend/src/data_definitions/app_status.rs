//! Process-wide loading and notification state shared by every page.

use common::notifications::{LoadingCounter, ToastQueue};
use dioxus::prelude::*;

/// Requests awaiting a response; drives the loading overlay.
pub static IN_FLIGHT: GlobalSignal<LoadingCounter> = Signal::global(LoadingCounter::default);

pub static TOASTS: GlobalSignal<ToastQueue> = Signal::global(ToastQueue::default);

pub fn show_error(message: impl Into<String>) {
    TOASTS.write().error(message);
}

pub fn show_success(message: impl Into<String>) {
    TOASTS.write().success(message);
}
