//! Caller-observable "request in flight" flag
//!
//! A [`LoadingFlag`] is handed to an operation so UI code can show a spinner
//! while the call is running. The transport raises it right before the request
//! is dispatched and lowers it once the call resolves, fails, or is dropped.
//!
//! ```
//! use kb_dataset_client::LoadingFlag;
//!
//! let loading = LoadingFlag::new();
//! let mut rx = loading.subscribe();
//! assert!(!loading.is_loading());
//! assert!(!*rx.borrow_and_update());
//! ```

use std::sync::Arc;
use tokio::sync::watch;

/// Shared boolean cell toggled around a request
#[derive(Debug, Clone)]
pub struct LoadingFlag {
    tx: Arc<watch::Sender<bool>>,
}

impl LoadingFlag {
    /// Create a lowered flag
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Current value
    pub fn is_loading(&self) -> bool {
        *self.tx.borrow()
    }

    /// Receiver notified on every change
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    fn set(&self, value: bool) {
        self.tx.send_replace(value);
    }

    /// Raise the flag until the returned guard is dropped
    pub(crate) fn raise(&self) -> LoadingGuard<'_> {
        self.set(true);
        LoadingGuard { flag: self }
    }
}

impl Default for LoadingFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowers the flag on drop
pub(crate) struct LoadingGuard<'a> {
    flag: &'a LoadingFlag,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
