use serde::{Deserialize, Serialize};
use std::fmt;

/// The surface a session is routed into.
///
/// Derived once per page load from the request origin and never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tenant {
    /// Marketing and booking site.
    #[default]
    Public,
    /// Administrative back-office.
    Admin,
}

impl Tenant {
    pub const ALL: [Self; 2] = [Self::Public, Self::Admin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
