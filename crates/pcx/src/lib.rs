//! Facade crate for the `PrivateCharterX` shell.
//! Re-exports domain/kernel primitives and the feature slices, and wires the
//! collaborators from configuration.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load a [`ShellConfig`] with [`load_config`].
//! - Call [`init`] once at startup and hand the [`Shell`] to the composition root.

mod error;
mod shell;

pub use error::{ShellError, ShellErrorExt};
pub use pcx_domain as domain;
pub use pcx_domain::config::ShellConfig;
pub use pcx_kernel as kernel;
pub use pcx_signals as signals;
pub use shell::{Shell, init, load_config};

/// Feature slices.
pub mod features {
    pub use pcx_gating as gating;
    pub use pcx_offers as offers;
    pub use pcx_routing as routing;
    pub use pcx_tenancy as tenancy;
}
