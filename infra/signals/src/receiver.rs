use crate::hub::Signal;
use std::future::Future;
use tokio::sync::watch;

/// Ergonomic reads for signal receivers.
pub trait SignalReceiverExt<T> {
    /// Waits for the next change and returns the new value, or `None` once the
    /// publisher is gone.
    fn next_value(&mut self) -> impl Future<Output = Option<T>> + Send;
}

impl<T: Signal> SignalReceiverExt<T> for watch::Receiver<T> {
    async fn next_value(&mut self) -> Option<T> {
        match self.changed().await {
            Ok(()) => Some(self.borrow_and_update().clone()),
            Err(_) => None,
        }
    }
}
