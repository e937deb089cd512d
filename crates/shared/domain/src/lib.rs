//! # Domain Models
//!
//! Pure shell types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod chrome;
pub mod config;
pub mod tenant;

pub use chrome::ChromeSet;
pub use tenant::Tenant;
