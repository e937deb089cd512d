use futures_util::future::LocalBoxFuture;
use pcx::Shell;
use pcx::domain::config::WalletConfig;
use pcx::features::gating::{IdentityProvider, MaintenanceSource};
use pcx::features::offers::OfferStore;
use pcx::features::routing::scroll::Viewport;
use pcx::kernel::origin::OriginSource;
use std::rc::Rc;
use std::time::Duration;

use crate::history::HistoryBackend;

/// Timer used for maintenance polling where the platform has one.
pub type Sleeper = fn(Duration) -> LocalBoxFuture<'static, ()>;

/// Platform collaborators injected by the application crate.
#[derive(Debug, Clone)]
pub struct Environment {
    pub origin: Rc<dyn OriginSource>,
    pub history: Rc<dyn HistoryBackend>,
    pub viewport: Rc<dyn Viewport>,
    pub offers: Rc<dyn OfferStore>,
    pub identity: Rc<dyn IdentityProvider>,
    pub maintenance: Rc<dyn MaintenanceSource>,
    /// `None` syncs the maintenance flag once at startup.
    pub sleeper: Option<Sleeper>,
}

/// Root context read by [`crate::AppShell`].
#[derive(Debug, Clone)]
pub struct ShellContext {
    pub shell: Shell,
    pub env: Environment,
}

impl ShellContext {
    #[must_use]
    pub const fn new(shell: Shell, env: Environment) -> Self {
        Self { shell, env }
    }
}

/// Wallet adapter configuration, fixed for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletContext(pub WalletConfig);
