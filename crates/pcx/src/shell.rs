use crate::error::{ShellError, ShellErrorExt};
use pcx_domain::Tenant;
use pcx_domain::config::{ShellConfig, WalletConfig};
use pcx_gating::{IdentitySignal, MaintenanceSignal, ReadinessWatch, StaticMaintenance};
use pcx_kernel::origin::OriginSource;
use pcx_offers::RestOfferStore;
use pcx_signals::SignalHub;
use pcx_tenancy::TenantResolver;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Collaborators wired once at startup.
///
/// Cheap to clone; every clone shares the same signals, so the identity and
/// maintenance publishers stay unique for the process.
#[derive(Debug, Clone)]
pub struct Shell {
    pub config: ShellConfig,
    pub resolver: TenantResolver,
    pub hub: SignalHub,
    pub identity: Arc<IdentitySignal>,
    pub maintenance: Arc<MaintenanceSignal>,
}

/// Loads the shell configuration (see [`pcx_kernel::config::load_config`]).
///
/// # Errors
/// Returns [`ShellError::Config`] if any layer fails to parse.
pub fn load_config(embedded: &str, path: Option<&Path>) -> Result<ShellConfig, ShellError> {
    pcx_kernel::config::load_config::<ShellConfig>(embedded, path).context("Loading shell config")
}

/// Validates `config` and registers the gating publishers.
///
/// # Errors
/// * [`ShellError::Wallet`] if the default network is not among the enabled ones.
/// * [`ShellError::Gating`] if the gating signals cannot be registered.
pub fn init(config: &ShellConfig) -> Result<Shell, ShellError> {
    validate_wallet(&config.wallet)?;

    let hub = SignalHub::new();
    let identity = IdentitySignal::register(&hub).context("Identity collaborator")?;
    let maintenance = MaintenanceSignal::register(&hub, config.maintenance.enabled)
        .context("Maintenance collaborator")?;
    let resolver = TenantResolver::from_config(&config.tenancy);

    info!(
        admin_prefix = resolver.admin_prefix(),
        maintenance = config.maintenance.enabled,
        network = ?config.wallet.default_network,
        "Shell initialized"
    );

    Ok(Shell {
        config: config.clone(),
        resolver,
        hub,
        identity: Arc::new(identity),
        maintenance: Arc::new(maintenance),
    })
}

impl Shell {
    /// Read side of both gating signals.
    ///
    /// # Errors
    /// Returns [`ShellError::Gating`] if a publisher is gone.
    pub fn readiness(&self) -> Result<ReadinessWatch, ShellError> {
        ReadinessWatch::new(&self.hub).context("Watching readiness")
    }

    #[must_use]
    pub fn tenant(&self, origin: &dyn OriginSource) -> Tenant {
        self.resolver.resolve_current(origin)
    }

    /// Maintenance source backed by `maintenance.enabled`.
    #[must_use]
    pub fn maintenance_source(&self) -> StaticMaintenance {
        StaticMaintenance(self.config.maintenance.enabled)
    }

    /// REST store for the configured table.
    ///
    /// # Errors
    /// Returns [`ShellError::Offers`] if the store url is unusable.
    pub fn offer_store(&self) -> Result<RestOfferStore, ShellError> {
        RestOfferStore::new(&self.config.store, &self.config.offers).context("Offers store")
    }
}

fn validate_wallet(wallet: &WalletConfig) -> Result<(), ShellError> {
    if wallet.networks.is_empty() {
        return Err(ShellError::Wallet { message: "no networks enabled".into(), context: None });
    }
    if !wallet.networks.contains(&wallet.default_network) {
        return Err(ShellError::Wallet {
            message: format!("default network {:?} is not enabled", wallet.default_network).into(),
            context: None,
        });
    }
    Ok(())
}
