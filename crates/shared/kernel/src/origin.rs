//! Access to the origin of the current request.
//!
//! Tenant resolution must stay pure, so the shell never reads the address bar
//! directly: the application injects an [`OriginSource`] at startup.

use std::fmt::Debug;

/// Exposes the current request's origin (host, host:port or full URL) synchronously.
pub trait OriginSource: Debug {
    fn origin(&self) -> String;
}

/// A fixed origin: desktop builds (taken from configuration) and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticOrigin(String);

impl StaticOrigin {
    pub fn new(origin: impl Into<String>) -> Self {
        Self(origin.into())
    }
}

impl OriginSource for StaticOrigin {
    fn origin(&self) -> String {
        self.0.clone()
    }
}
