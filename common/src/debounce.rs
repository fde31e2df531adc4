//! Trailing-edge debounce driven by tickets.
//!
//! Each input issues a ticket and arms a timer; when a timer fires it settles its
//! ticket, and only the newest ticket yields the pending value.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self { generation: 0, pending: None }
    }
}

impl<T> Debouncer<T> {
    /// Records `value` as the pending input, superseding any earlier one.
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// Called when a ticket's quiet period has elapsed.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.0 != self.generation {
            tracing::trace!(ticket = ticket.0, latest = self.generation, "debounce ticket superseded");
            return None;
        }
        self.pending.take()
    }

    /// Drops any pending value so outstanding tickets settle to nothing.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}
