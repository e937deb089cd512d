//! # Shell UI
//!
//! Dioxus components composing the shell. The application crates provide a
//! [`ShellContext`] (the wired [`pcx::Shell`] plus the platform
//! [`Environment`]) and launch [`AppShell`] as the root component.
//!
//! Provider order, outermost first: wallet configuration, theme, identity
//! bootstrap, maintenance flag, location. The gate view below them renders the
//! placeholder, the maintenance surface, or the tenant's route tree with its
//! chrome.

// Futures here run on the single-threaded UI executor.
#![allow(clippy::future_not_send)]

mod app;
mod components;
mod context;
mod history;

pub use app::AppShell;
pub use components::chrome::{ChatWidget, CookieBanner, WalletButton};
pub use components::surfaces::{LoadingSpinner, MaintenanceMode, NotFound};
pub use context::{Environment, ShellContext, Sleeper, WalletContext};
pub use history::{HistoryBackend, MemoryHistory, Navigator, PopListener};
