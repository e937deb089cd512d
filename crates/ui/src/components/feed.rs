use crate::context::ShellContext;
use dioxus::prelude::*;
use pcx::features::offers::{MountScope, OffersFeed as Feed, OffersFeedState};
use std::rc::Rc;

/// Fetches offers for this mount and provides `Signal<OffersFeedState>` to
/// its children. Unmounting cancels the pending fetch.
#[component]
pub(crate) fn OffersFeed(children: Element) -> Element {
    let ctx = use_context::<ShellContext>();
    let state = use_signal(OffersFeedState::initial);
    use_context_provider(|| state);

    let scope = use_hook(|| Rc::new(MountScope::new()));
    use_drop({
        let scope = Rc::clone(&scope);
        move || scope.cancel()
    });

    use_future(move || {
        let feed = Feed::new(ctx.env.offers.clone());
        let token = scope.token();
        let mut state = state;
        async move {
            feed.load(&token, move |next| state.set(next)).await;
        }
    });

    rsx! { {children} }
}
