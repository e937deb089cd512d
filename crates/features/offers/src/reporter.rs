use crate::error::OffersError;
use std::fmt::Debug;
use tracing::error;

/// Observability sink for fetch failures the user never sees.
pub trait FailureReporter: Debug {
    fn report(&self, error: &OffersError);
}

/// Reports through `tracing` as an `error` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, error: &OffersError) {
        error!(error = %error, "Error fetching offers");
    }
}
