use crate::error::OffersError;
use crate::record::OfferRecord;
use crate::reporter::{FailureReporter, TracingReporter};
use crate::scope::ScopeToken;
use crate::store::OfferStore;
use std::rc::Rc;
use tracing::{debug, info};

/// What the content tree renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct OffersFeedState {
    pub items: Vec<OfferRecord>,
    pub is_loading: bool,
}

impl Default for OffersFeedState {
    fn default() -> Self {
        Self::initial()
    }
}

impl OffersFeedState {
    /// State on mount: nothing yet, still loading.
    #[must_use]
    pub const fn initial() -> Self {
        Self { items: Vec::new(), is_loading: true }
    }

    #[must_use]
    pub const fn settled(items: Vec<OfferRecord>) -> Self {
        Self { items, is_loading: false }
    }
}

/// How a [`OffersFeed::load`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// Committed this many records.
    Loaded(usize),
    /// The fetch failed; committed an empty list.
    Degraded,
    /// The scope was cancelled first; nothing was committed.
    Discarded,
}

/// Background retrieval of offer records for one mount.
#[derive(Debug, Clone)]
pub struct OffersFeed {
    store: Rc<dyn OfferStore>,
    reporter: Rc<dyn FailureReporter>,
}

impl OffersFeed {
    /// Feed reporting failures through [`TracingReporter`].
    #[must_use]
    pub fn new(store: Rc<dyn OfferStore>) -> Self {
        Self { store, reporter: Rc::new(TracingReporter) }
    }

    #[must_use]
    pub fn with_reporter(mut self, reporter: Rc<dyn FailureReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Fetches once and commits the settled state, unless `token` is cancelled.
    ///
    /// Cancellation is checked while waiting and once more right before
    /// `commit`; a cancelled load never calls it. Failures are reported even
    /// when the result is discarded.
    pub async fn load<C>(&self, token: &ScopeToken, commit: C) -> FeedOutcome
    where
        C: FnOnce(OffersFeedState),
    {
        if token.is_cancelled() {
            debug!("Offers fetch skipped: scope already cancelled");
            return FeedOutcome::Discarded;
        }

        let fetched = tokio::select! {
            biased;
            () = token.cancelled() => None,
            result = self.store.list_offers_newest_first() => Some(result),
        };

        let Some(result) = fetched else {
            debug!("Offers fetch abandoned: scope cancelled");
            return FeedOutcome::Discarded;
        };

        let (state, outcome) = self.settle(result);
        if token.is_cancelled() {
            debug!("Offers result discarded: scope cancelled");
            return FeedOutcome::Discarded;
        }

        commit(state);
        outcome
    }

    fn settle(&self, result: Result<Vec<OfferRecord>, OffersError>) -> (OffersFeedState, FeedOutcome) {
        match result {
            Ok(items) => {
                let count = items.len();
                info!(count, "Offers loaded");
                (OffersFeedState::settled(items), FeedOutcome::Loaded(count))
            },
            Err(e) => {
                self.reporter.report(&e);
                (OffersFeedState::settled(Vec::new()), FeedOutcome::Degraded)
            },
        }
    }
}
