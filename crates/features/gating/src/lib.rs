//! # Gating
//!
//! Nothing under the shell renders until two independent preconditions have
//! settled: the identity provider finished bootstrapping, and the maintenance
//! flag is known. Each precondition is owned by exactly one collaborator that
//! publishes it through the signal hub ([`IdentitySignal`],
//! [`MaintenanceSignal`]); the [`GatingController`] only reads them through a
//! [`ReadinessWatch`].
//!
//! The decision itself is a pure function of the pair:
//!
//! ```rust
//! use pcx_domain::Tenant;
//! use pcx_gating::{GateState, Readiness, RenderDecision};
//!
//! let ready = Readiness { identity_loading: false, maintenance_active: false };
//! assert_eq!(GateState::decide(ready), GateState::Active);
//! assert_eq!(
//!     RenderDecision::new(GateState::decide(ready), Tenant::Admin),
//!     RenderDecision::Tree(Tenant::Admin),
//! );
//! ```

// Futures here run on the single-threaded UI executor.
#![allow(clippy::future_not_send)]

mod error;
mod identity;
mod maintenance;
mod readiness;
mod state;

pub use error::{GatingError, GatingErrorExt};
pub use identity::{GuestIdentity, IdentityError, IdentityErrorExt, IdentityProvider, IdentitySignal, Session};
pub use maintenance::{
    MaintenanceError, MaintenanceErrorExt, MaintenanceSignal, MaintenanceSource, StaticMaintenance,
};
pub use readiness::{IdentityStatus, MaintenanceStatus, Readiness, ReadinessWatch};
pub use state::{GateState, GatingController, RenderDecision, Transition};
