use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures_signals::signal_vec::{MutableVec, SignalVec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notifications, independent of any form's own status. The UI
/// removes each toast after a delay or on click.
pub struct Toaster {
    toasts: MutableVec<Toast>,
    next_id: AtomicU64,
}

impl Toaster {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            toasts: MutableVec::new(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    fn push(&self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        log::debug!("toast {} ({:?}): {}", id, kind, message);
        self.toasts.lock_mut().push_cloned(Toast { id, kind, message });
        id
    }

    /// No-op if the toast is already gone.
    pub fn dismiss(&self, id: u64) {
        self.toasts.lock_mut().retain(|toast| toast.id != id);
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts.lock_ref().to_vec()
    }

    pub fn signal_vec(&self) -> impl SignalVec<Item = Toast> {
        self.toasts.signal_vec_cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_that_toast() {
        let toaster = Toaster::new();
        let first = toaster.success("saved");
        let second = toaster.error("boom");

        toaster.dismiss(first);
        toaster.dismiss(first);

        let left = toaster.snapshot();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, second);
        assert_eq!(left[0].kind, ToastKind::Error);
    }
}
