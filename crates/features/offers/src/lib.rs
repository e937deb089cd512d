//! # Offers
//!
//! The shell fetches promotional listings once per mount of its content tree,
//! without holding back the first paint.
//!
//! * [`OffersFeedState`] starts `{ items: [], is_loading: true }` and settles
//!   exactly once per mount.
//! * [`OffersFeed::load`] runs the fetch against a [`ScopeToken`]; if the
//!   [`MountScope`] is cancelled or dropped first, the result is thrown away.
//! * Failures never reach the UI as errors: they are handed to a
//!   [`FailureReporter`] and the feed settles empty.
//!
//! ```rust
//! use pcx_offers::{FeedOutcome, MemoryOfferStore, MountScope, OffersFeed, OffersFeedState};
//! use std::rc::Rc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let feed = OffersFeed::new(Rc::new(MemoryOfferStore::default()));
//! let scope = MountScope::new();
//! let mut state = OffersFeedState::initial();
//!
//! let outcome = feed.load(&scope.token(), |next| state = next).await;
//! assert_eq!(outcome, FeedOutcome::Loaded(0));
//! assert!(!state.is_loading);
//! # }
//! ```

// Futures here run on the single-threaded UI executor.
#![allow(clippy::future_not_send)]

mod error;
mod feed;
mod record;
mod reporter;
mod scope;
mod store;

pub use error::{OffersError, OffersErrorExt};
pub use feed::{FeedOutcome, OffersFeed, OffersFeedState};
pub use record::{OfferId, OfferRecord};
pub use reporter::{FailureReporter, TracingReporter};
pub use scope::{MountScope, ScopeToken};
pub use store::{MemoryOfferStore, OfferStore, RestOfferStore};
