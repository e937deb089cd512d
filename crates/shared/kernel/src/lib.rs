//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading and the seams through
//! which the shell reads its runtime environment.
//!
//! ## Config loading
//! ```rust
//! use pcx_kernel::config::load_config;
//! use pcx_kernel::domain::config::ShellConfig;
//!
//! let cfg: ShellConfig = load_config("[tenancy]\nadmin_prefix = \"ops.\"", None).unwrap();
//! assert_eq!(cfg.tenancy.admin_prefix, "ops.");
//! ```
//!
//! ## Origin accessor
//! ```rust
//! use pcx_kernel::origin::{OriginSource, StaticOrigin};
//!
//! let origin = StaticOrigin::new("admin.example.com");
//! assert_eq!(origin.origin(), "admin.example.com");
//! ```

pub mod config;
pub mod origin;

pub use pcx_domain as domain;
