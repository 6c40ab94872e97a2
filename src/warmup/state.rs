//! Readiness signal published by the warm-up orchestrator.

use std::sync::Arc;

use tokio::sync::watch;

/// Shared view of the last discovered page count.
///
/// `None` until a warm-up has fetched its first page. Readers consult this
/// before trusting the page count, and may wait on it.
#[derive(Debug, Clone)]
pub struct WarmState {
    tx: Arc<watch::Sender<Option<u32>>>,
}

impl WarmState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Publishes the page count discovered by a warm-up cycle.
    pub(crate) fn publish(&self, total_pages: u32) {
        self.tx.send_replace(Some(total_pages));
    }

    /// Page count of the last warm-up, or `None` if not yet warm.
    pub fn total_pages(&self) -> Option<u32> {
        *self.tx.borrow()
    }

    pub fn is_ready(&self) -> bool {
        self.total_pages().is_some()
    }

    /// Waits until a page count has been published and returns it.
    pub async fn wait_ready(&self) -> Option<u32> {
        let mut rx = self.tx.subscribe();
        let ready = rx.wait_for(Option::is_some).await.ok().and_then(|v| *v);
        ready
    }
}

impl Default for WarmState {
    fn default() -> Self {
        Self::new()
    }
}
