//! # Routing
//!
//! Two disjoint route trees, one per [`Tenant`], built once and selected by
//! tenant. Each tree doubles as its own matcher: [`RouteTree::resolve`] turns a
//! location path into a page to render (with its layouts and parameters), a
//! redirect, or a miss.
//!
//! ```rust
//! use pcx_routing::{Page, Resolution, Tenant, select};
//!
//! assert_eq!(
//!     select(Tenant::Admin).resolve("/"),
//!     Resolution::Redirect { to: "/admin/analytics" },
//! );
//! assert!(matches!(
//!     select(Tenant::Public).resolve("/"),
//!     Resolution::Render { page: Page::Home, .. },
//! ));
//! ```
//!
//! The [`scroll`] module resets the viewport on navigation.

mod page;
pub mod scroll;
mod tables;
mod tree;

pub use page::Page;
pub use pcx_domain::Tenant;
pub use tables::{LANDING, select};
pub use tree::{Resolution, RouteNode, RouteParams, RouteTree, Settled, Target, pathname};
