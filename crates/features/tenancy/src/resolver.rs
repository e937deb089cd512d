use pcx_domain::Tenant;
use pcx_domain::config::TenancyConfig;
use pcx_kernel::origin::OriginSource;
use tracing::debug;
use url::Url;

/// Maps an origin to a [`Tenant`] by its host prefix.
///
/// Resolution is pure and total: everything that does not carry the admin
/// prefix, including input with no recognizable host, is [`Tenant::Public`].
/// An empty prefix disables the admin surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantResolver {
    admin_prefix: String,
}

impl Default for TenantResolver {
    fn default() -> Self {
        Self::from_config(&TenancyConfig::default())
    }
}

impl TenantResolver {
    /// Creates a resolver for the given host prefix (e.g. `admin.`).
    pub fn new(admin_prefix: impl Into<String>) -> Self {
        Self { admin_prefix: admin_prefix.into().trim().to_ascii_lowercase() }
    }

    #[must_use]
    pub fn from_config(config: &TenancyConfig) -> Self {
        Self::new(config.admin_prefix.as_str())
    }

    #[must_use]
    pub fn admin_prefix(&self) -> &str {
        &self.admin_prefix
    }

    /// Resolves a bare host, `host:port`, or a full origin/URL.
    #[must_use]
    pub fn resolve(&self, origin: &str) -> Tenant {
        let is_admin = !self.admin_prefix.is_empty()
            && host_of(origin).is_some_and(|host| host.starts_with(&self.admin_prefix));

        if is_admin { Tenant::Admin } else { Tenant::Public }
    }

    /// Reads the injected origin once and resolves it.
    #[must_use]
    pub fn resolve_current(&self, source: &dyn OriginSource) -> Tenant {
        let origin = source.origin();
        let tenant = self.resolve(&origin);
        debug!(%origin, %tenant, "Tenant resolved");
        tenant
    }
}

/// Lower-cased host of `origin`, if it has one.
fn host_of(origin: &str) -> Option<String> {
    let origin = origin.trim();
    if origin.is_empty() {
        return None;
    }

    let url = if origin.contains("://") {
        Url::parse(origin).ok()?
    } else {
        Url::parse(&format!("http://{origin}")).ok()?
    };

    url.host_str().filter(|host| !host.is_empty()).map(str::to_ascii_lowercase)
}
