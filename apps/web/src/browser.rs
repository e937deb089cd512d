//! Browser implementations of the shell's platform seams.

use pcx::Shell;
use pcx::features::gating::GuestIdentity;
use pcx::features::offers::{MemoryOfferStore, OfferStore};
use pcx::features::routing::scroll::{ScrollBehavior, ScrollRequest, Viewport};
use pcx::kernel::origin::OriginSource;
use pcx_ui::{Environment, HistoryBackend, PopListener, ShellContext};
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

pub(crate) fn context(shell: Shell) -> ShellContext {
    let offers: Rc<dyn OfferStore> = match shell.offer_store() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            warn!(error = %e, "Offers store unavailable; serving no offers");
            Rc::new(MemoryOfferStore::default())
        },
    };

    let env = Environment {
        origin: Rc::new(BrowserOrigin),
        history: Rc::new(BrowserHistory),
        viewport: Rc::new(BrowserViewport),
        offers,
        identity: Rc::new(GuestIdentity),
        maintenance: Rc::new(shell.maintenance_source()),
        sleeper: None,
    };
    ShellContext::new(shell, env)
}

/// `window.location.hostname`.
#[derive(Debug, Clone, Copy)]
struct BrowserOrigin;

impl OriginSource for BrowserOrigin {
    fn origin(&self) -> String {
        web_sys::window().and_then(|w| w.location().hostname().ok()).unwrap_or_default()
    }
}

/// `window.history` with `popstate` for back/forward.
#[derive(Debug, Clone, Copy)]
struct BrowserHistory;

impl BrowserHistory {
    fn report(action: &str, result: Result<(), JsValue>) {
        if let Err(e) = result {
            warn!(action, error = ?e, "History update failed");
        }
    }
}

fn current_location() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return "/".to_owned();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_owned());
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    format!("{path}{search}{hash}")
}

impl HistoryBackend for BrowserHistory {
    fn current(&self) -> String {
        current_location()
    }

    fn push(&self, path: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            Self::report("push", history.push_state_with_url(&JsValue::NULL, "", Some(path)));
        }
    }

    fn replace(&self, path: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            Self::report("replace", history.replace_state_with_url(&JsValue::NULL, "", Some(path)));
        }
    }

    fn on_pop(&self, listener: PopListener) {
        let Some(window) = web_sys::window() else { return };
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            listener(current_location());
        });
        Self::report(
            "listen",
            window.add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref()),
        );
        // Lives as long as the page.
        callback.forget();
    }
}

/// `window.scrollTo` with a smooth or instant transition.
#[derive(Debug, Clone, Copy)]
struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_to(&self, request: ScrollRequest) {
        let Some(window) = web_sys::window() else { return };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(f64::from(request.top));
        options.set_behavior(match request.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        window.scroll_to_with_scroll_to_options(&options);
    }
}
