//! In-flight request counter and transient toast queue behind the global loading overlay.

use crate::job_const::{ERROR_TOAST_TTL_MS, SUCCESS_TOAST_TTL_MS};

/// Number of requests currently awaiting a response; never goes below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingCounter {
    in_flight: usize,
}

impl LoadingCounter {
    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    pub fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

impl ToastKind {
    pub fn ttl_ms(&self) -> u32 {
        match self {
            ToastKind::Error => ERROR_TOAST_TTL_MS,
            ToastKind::Success => SUCCESS_TOAST_TTL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub remaining_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into(), remaining_ms: kind.ttl_ms() });
        id
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    /// Ages every toast by `elapsed_ms` and drops the expired ones.
    pub fn tick(&mut self, elapsed_ms: u32) {
        for toast in &mut self.toasts {
            toast.remaining_ms = toast.remaining_ms.saturating_sub(elapsed_ms);
        }
        self.toasts.retain(|t| t.remaining_ms > 0);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_never_goes_negative() {
        let mut counter = LoadingCounter::default();
        counter.finish();
        assert_eq!(counter, LoadingCounter::default());
        counter.begin();
        counter.begin();
        counter.finish();
        assert!(counter.is_loading());
        counter.finish();
        counter.finish();
        assert!(!counter.is_loading());

        // one request after an extra finish still shows the overlay
        counter.begin();
        assert!(counter.is_loading());
    }

    #[test]
    fn toasts_expire_by_kind() {
        let mut queue = ToastQueue::default();
        let error = queue.error("API request failed");
        let success = queue.success("Filters applied");
        assert_ne!(error, success);

        queue.tick(3_000);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].kind, ToastKind::Error);

        queue.tick(2_000);
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_removes_one() {
        let mut queue = ToastQueue::default();
        let first = queue.error("a");
        queue.error("b");
        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, "b");
    }
}
