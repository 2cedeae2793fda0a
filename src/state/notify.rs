//! Toast notification state.
//!
//! DESIGN
//! ======
//! One shared store instead of per-page info signals, so "notify once per
//! denial" guards can be enforced where the denial is decided rather than
//! through render timing.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

/// Severity of a toast notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A single toast entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Monotonic id, used as the dismiss key.
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Notice stack with monotonically increasing ids.
#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NotifyState {
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Append a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice { id, kind, message: message.into() });
        id
    }

    /// Remove a notice by id. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|notice| notice.id != id);
    }
}

/// Copyable context handle over the notice stack.
#[derive(Clone, Copy)]
pub struct Notifier {
    state: RwSignal<NotifyState>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self { state: RwSignal::new(NotifyState::default()) }
    }

    pub fn expect_from_context() -> Self {
        expect_context::<Notifier>()
    }

    /// Reactive read of the current notices.
    pub fn notices(&self) -> Vec<Notice> {
        self.state.with(|state| state.notices().to_vec())
    }

    pub fn info(&self, message: impl Into<String>) {
        self.state.update(|state| {
            state.push(NoticeKind::Info, message);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.state.update(|state| {
            state.push(NoticeKind::Success, message);
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.state.update(|state| {
            state.push(NoticeKind::Error, message);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|state| state.dismiss(id));
    }
}
