use tokio::sync::watch;
use tracing::trace;

/// Cancellation owner tied to a component's lifetime.
///
/// `cancel()` or dropping the scope cancels every token it handed out. A
/// remount creates a new scope; cancelled scopes are never revived.
#[derive(Debug)]
pub struct MountScope {
    cancelled: watch::Sender<bool>,
}

impl Default for MountScope {
    fn default() -> Self {
        Self::new()
    }
}

impl MountScope {
    #[must_use]
    pub fn new() -> Self {
        let (cancelled, _) = watch::channel(false);
        Self { cancelled }
    }

    #[must_use]
    pub fn token(&self) -> ScopeToken {
        ScopeToken { cancelled: self.cancelled.subscribe() }
    }

    pub fn cancel(&self) {
        if !self.cancelled.send_replace(true) {
            trace!(tokens = self.cancelled.receiver_count(), "Mount scope cancelled");
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }
}

impl Drop for MountScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Observer half of a [`MountScope`].
#[derive(Debug, Clone)]
pub struct ScopeToken {
    cancelled: watch::Receiver<bool>,
}

impl ScopeToken {
    /// Whether the owning scope was cancelled or dropped.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow() || self.cancelled.has_changed().is_err()
    }

    /// Resolves once the owning scope is cancelled or dropped.
    pub async fn cancelled(&self) {
        let mut rx = self.cancelled.clone();
        // An error means the scope is gone, which counts as cancelled.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}
