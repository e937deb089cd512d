use crate::error::{GatingError, GatingErrorExt};
use crate::readiness::IdentityStatus;
use futures_util::future::LocalBoxFuture;
use pcx_signals::{Publisher, SignalHub};
use std::borrow::Cow;
use std::fmt::Debug;
use tracing::{error, info};

const OWNER: &str = "identity";

/// Identity provider failures.
#[pcx_derive::pcx_error]
pub enum IdentityError {
    #[error("Identity provider unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Identity session rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal identity error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Session established by the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// `None` for an anonymous visitor.
    pub user_id: Option<String>,
}

impl Session {
    #[must_use]
    pub const fn guest() -> Self {
        Self { user_id: None }
    }

    #[must_use]
    pub const fn is_guest(&self) -> bool {
        self.user_id.is_none()
    }
}

/// The external identity integration, seen from the shell.
pub trait IdentityProvider: Debug {
    /// Restores or establishes the session.
    fn bootstrap(&self) -> LocalBoxFuture<'_, Result<Session, IdentityError>>;
}

/// Provider that settles immediately with an anonymous session.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuestIdentity;

impl IdentityProvider for GuestIdentity {
    fn bootstrap(&self) -> LocalBoxFuture<'_, Result<Session, IdentityError>> {
        Box::pin(async { Ok(Session::guest()) })
    }
}

/// Sole writer of [`IdentityStatus`].
#[derive(Debug)]
pub struct IdentitySignal {
    publisher: Publisher<IdentityStatus>,
}

impl IdentitySignal {
    /// Claims the identity signal, starting at [`IdentityStatus::Bootstrapping`].
    ///
    /// # Errors
    /// Returns [`GatingError::Signal`] if the signal already has a live owner.
    pub fn register(hub: &SignalHub) -> Result<Self, GatingError> {
        let publisher = hub
            .register(OWNER, IdentityStatus::Bootstrapping)
            .context("Registering identity status")?;
        Ok(Self { publisher })
    }

    #[must_use]
    pub fn status(&self) -> IdentityStatus {
        self.publisher.current()
    }

    /// Runs the provider bootstrap and publishes its outcome.
    ///
    /// A failure is logged and published as [`IdentityStatus::Failed`]; it is
    /// never propagated, so the gate simply stays suspended.
    pub async fn bootstrap(&self, provider: &dyn IdentityProvider) -> IdentityStatus {
        self.publisher.publish(IdentityStatus::Bootstrapping);

        let status = match provider.bootstrap().await {
            Ok(session) => {
                info!(guest = session.is_guest(), "Identity bootstrap finished");
                IdentityStatus::Ready
            },
            Err(e) => {
                error!(error = %e, "Identity bootstrap failed");
                IdentityStatus::Failed(e.to_string())
            },
        };

        self.publisher.publish(status.clone());
        status
    }
}
