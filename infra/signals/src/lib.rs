//! # Signals
//!
//! Latest-value state shared between the shell's collaborators.
//!
//! A [`SignalHub`] maps a value type to one `tokio::sync::watch` channel. The
//! collaborator that owns a piece of state registers itself once and receives
//! the only [`Publisher`]; readers subscribe and can never write. Values are
//! `PartialEq`, so publishing an unchanged value wakes nobody.
//!
//! # Example
//!
//! ```rust
//! use pcx_signals::{SignalHub, SignalReceiverExt, SignalError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Maintenance(bool);
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), SignalError> {
//! let hub = SignalHub::new();
//! let publisher = hub.register("maintenance", Maintenance(false))?;
//! let mut rx = hub.subscribe::<Maintenance>()?;
//!
//! publisher.publish(Maintenance(true));
//! assert_eq!(rx.next_value().await, Some(Maintenance(true)));
//! # Ok(())
//! # }
//! ```

mod error;
mod hub;
mod receiver;

pub use error::{SignalError, SignalErrorExt};
pub use hub::{Publisher, Signal, SignalHub};
pub use receiver::SignalReceiverExt;
pub use tokio::sync::watch::Receiver;
