use bitflags::bitflags;
use serde::{Deserialize, Deserializer};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Everything the shell reads at startup.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfigInner {
    pub tenancy: TenancyConfig,
    pub wallet: WalletConfig,
    pub store: StoreConfig,
    pub offers: OffersConfig,
    pub maintenance: MaintenanceConfig,
    pub ui: UiConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
///
/// Built once at startup and handed to the composition root; nothing mutates
/// it afterwards.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct ShellConfig {
    #[serde(flatten, default)]
    inner: Arc<ShellConfigInner>,
}

impl Deref for ShellConfig {
    type Target = ShellConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ShellConfig {
    fn deref_mut(&mut self) -> &mut ShellConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Tenant resolution settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TenancyConfig {
    /// Host prefix reserved for the back-office, e.g. `admin.`.
    pub admin_prefix: String,
    /// Origin used where the runtime has no address bar (desktop).
    pub origin: Option<String>,
}

/// Wallet/chain adapter settings handed to the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    pub project_id: String,
    pub networks: Vec<Network>,
    pub default_network: Network,
    pub metadata: WalletMetadata,
    pub features: WalletFeatures,
    pub socials: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Base,
}

impl Network {
    #[must_use]
    pub const fn chain_id(self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Base => 8453,
        }
    }
}

/// Application metadata shown by wallet connection dialogs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WalletMetadata {
    pub name: String,
    pub description: String,
    pub url: String,
    pub icons: Vec<String>,
}

bitflags! {
    /// Optional wallet modal features.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WalletFeatures: u8 {
        const ANALYTICS = 1 << 0;
        const EMAIL = 1 << 1;
    }
}

impl From<&str> for WalletFeatures {
    fn from(s: &str) -> Self {
        match s {
            "analytics" => Self::ANALYTICS,
            "email" => Self::EMAIL,
            "all" | "*" => Self::all(),
            _ => Self::empty(),
        }
    }
}

/// Deserializes from a list of feature names: `features = ["email"]`.
impl<'de> Deserialize<'de> for WalletFeatures {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.iter().map(|name| Self::from(name.as_str())).collect())
    }
}

/// Remote data store (PostgREST-compatible) connection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OffersConfig {
    /// Table holding promotional listings.
    pub table: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MaintenanceConfig {
    /// Starts the shell in maintenance mode.
    pub enabled: bool,
    /// Re-check interval where the runtime supports polling; `0` disables it.
    pub poll_interval_secs: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemeMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

// --- Default ---

impl Default for TenancyConfig {
    fn default() -> Self {
        Self { admin_prefix: "admin.".to_owned(), origin: None }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            networks: vec![Network::Base, Network::Mainnet],
            default_network: Network::Base,
            metadata: WalletMetadata::default(),
            features: WalletFeatures::empty(),
            socials: Vec::new(),
        }
    }
}

impl Default for WalletMetadata {
    fn default() -> Self {
        Self {
            name: "PrivateCharterX".to_owned(),
            description: "Luxury Private Charter Platform".to_owned(),
            url: "https://privatecharterx.com".to_owned(),
            icons: vec!["https://privatecharterx.com/favicon.ico".to_owned()],
        }
    }
}

impl Default for WalletFeatures {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { url: "http://localhost:54321".to_owned(), anon_key: String::new() }
    }
}

impl Default for OffersConfig {
    fn default() -> Self {
        Self { table: "fixed_offers".to_owned() }
    }
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self { enabled: false, poll_interval_secs: 60 }
    }
}
