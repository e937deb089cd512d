//! Tenant resolution for the application shell.
//!
//! The shell serves two disjoint surfaces from one bundle. Which one a session
//! gets is decided once, from the host the page was loaded from:
//!
//! ```rust
//! use pcx_tenancy::{Tenant, TenantResolver};
//!
//! let resolver = TenantResolver::default();
//! assert_eq!(resolver.resolve("admin.privatecharterx.com"), Tenant::Admin);
//! assert_eq!(resolver.resolve("https://privatecharterx.com/jet/42"), Tenant::Public);
//! ```

mod resolver;

pub use pcx_domain::Tenant;
pub use resolver::TenantResolver;
