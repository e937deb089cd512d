use ::config::{Config, File, FileFormat};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Custom error type for config loading.
#[pcx_derive::pcx_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ::config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Environment prefix for overrides, e.g. `PCX__STORE__ANON_KEY`.
pub const ENV_PREFIX: &str = "PCX";

/// Layered configuration loader.
///
/// 1. **Embedded document**: TOML compiled into the binary (`include_str!`), so
///    the browser build has a complete configuration without file access.
/// 2. **Optional file** (native only): a local override file; missing files are skipped.
/// 3. **Environment** (native only): variables prefixed with `PCX__`, nested
///    keys separated by double underscores (`PCX__TENANCY__ORIGIN` maps to
///    `tenancy.origin`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if a layer cannot be parsed or the merged
/// result does not match `T`.
///
/// # Example
/// ```rust
/// use pcx_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Local {
///     port: u16,
/// }
///
/// let cfg: Local = load_config("port = 8080", None).unwrap_or_default();
/// assert_eq!(cfg.port, 8080);
/// ```
pub fn load_config<T>(embedded: &str, path: Option<&Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let builder = Config::builder().add_source(File::from_str(embedded, FileFormat::Toml));

    #[cfg(not(target_arch = "wasm32"))]
    let builder = {
        let builder = match path {
            Some(path) => {
                info!("Loading config overrides from {}", path.display());
                builder.add_source(File::from(path).required(false))
            },
            None => builder,
        };
        builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
    };

    #[cfg(target_arch = "wasm32")]
    let _ = path;

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
