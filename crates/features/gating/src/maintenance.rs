use crate::error::{GatingError, GatingErrorExt};
use crate::readiness::MaintenanceStatus;
use futures_util::future::LocalBoxFuture;
use pcx_signals::{Publisher, SignalHub};
use std::borrow::Cow;
use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

const OWNER: &str = "maintenance";

/// Maintenance flag lookup failures.
#[pcx_derive::pcx_error]
pub enum MaintenanceError {
    #[error("Maintenance source unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal maintenance error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Where the maintenance flag comes from.
pub trait MaintenanceSource: Debug {
    fn is_active(&self) -> LocalBoxFuture<'_, Result<bool, MaintenanceError>>;
}

/// A flag fixed at startup (`maintenance.enabled`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticMaintenance(pub bool);

impl MaintenanceSource for StaticMaintenance {
    fn is_active(&self) -> LocalBoxFuture<'_, Result<bool, MaintenanceError>> {
        let active = self.0;
        Box::pin(async move { Ok(active) })
    }
}

/// Sole writer of [`MaintenanceStatus`].
#[derive(Debug)]
pub struct MaintenanceSignal {
    publisher: Publisher<MaintenanceStatus>,
}

impl MaintenanceSignal {
    /// Claims the maintenance signal with a starting flag.
    ///
    /// # Errors
    /// Returns [`GatingError::Signal`] if the signal already has a live owner.
    pub fn register(hub: &SignalHub, active: bool) -> Result<Self, GatingError> {
        let publisher = hub
            .register(OWNER, MaintenanceStatus { active })
            .context("Registering maintenance status")?;
        Ok(Self { publisher })
    }

    #[must_use]
    pub fn status(&self) -> MaintenanceStatus {
        self.publisher.current()
    }

    /// Asks the source once and publishes the answer.
    ///
    /// When the source fails the previous flag stays in place.
    pub async fn sync(&self, source: &dyn MaintenanceSource) -> MaintenanceStatus {
        match source.is_active().await {
            Ok(active) => {
                if self.publisher.publish(MaintenanceStatus { active }) {
                    info!(active, "Maintenance flag changed");
                }
            },
            Err(e) => {
                warn!(error = %e, kept = self.status().active, "Maintenance check failed");
            },
        }
        self.status()
    }

    /// Keeps the flag in sync every `interval`, using `sleep` to wait.
    ///
    /// A zero interval syncs once and returns. Otherwise the loop runs until
    /// the returned future is dropped.
    pub async fn poll<S, F>(&self, source: &dyn MaintenanceSource, interval: Duration, mut sleep: S)
    where
        S: FnMut(Duration) -> F,
        F: Future<Output = ()>,
    {
        loop {
            self.sync(source).await;
            if interval.is_zero() {
                return;
            }
            debug!(interval_secs = interval.as_secs(), "Next maintenance check scheduled");
            sleep(interval).await;
        }
    }
}
