use dioxus::document;
use futures_util::future::LocalBoxFuture;
use pcx::Shell;
use pcx::features::gating::GuestIdentity;
use pcx::features::offers::{MemoryOfferStore, OfferStore};
use pcx::features::routing::scroll::{ScrollRequest, Viewport};
use pcx::kernel::origin::StaticOrigin;
use pcx_ui::{Environment, MemoryHistory, ShellContext};
use std::rc::Rc;
use std::time::Duration;
use tracing::{info, warn};

const FALLBACK_ORIGIN: &str = "localhost";

/// Desktop collaborators: configured origin, in-memory history, and either
/// the REST store (when a key is configured) or the bundled seed offers.
#[must_use]
pub fn context(shell: Shell, seed_offers: &str) -> ShellContext {
    let origin = shell.config.tenancy.origin.clone().unwrap_or_else(|| FALLBACK_ORIGIN.to_owned());
    info!(%origin, "Desktop origin");

    let env = Environment {
        origin: Rc::new(StaticOrigin::new(origin)),
        history: Rc::new(MemoryHistory::default()),
        viewport: Rc::new(DesktopViewport),
        offers: offer_store(&shell, seed_offers),
        identity: Rc::new(GuestIdentity),
        maintenance: Rc::new(shell.maintenance_source()),
        sleeper: Some(sleep),
    };
    ShellContext::new(shell, env)
}

fn offer_store(shell: &Shell, seed_offers: &str) -> Rc<dyn OfferStore> {
    if !shell.config.store.anon_key.is_empty() {
        match shell.offer_store() {
            Ok(store) => return Rc::new(store),
            Err(e) => warn!(error = %e, "Remote offers store unusable; using seed offers"),
        }
    }

    match MemoryOfferStore::from_json(seed_offers) {
        Ok(store) => Rc::new(store),
        Err(e) => {
            warn!(error = %e, "Seed offers are malformed; serving none");
            Rc::new(MemoryOfferStore::default())
        },
    }
}

fn sleep(duration: Duration) -> LocalBoxFuture<'static, ()> {
    Box::pin(tokio::time::sleep(duration))
}

/// Scrolls the webview through an evaluated script.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopViewport;

impl Viewport for DesktopViewport {
    fn scroll_to(&self, request: ScrollRequest) {
        let script = format!("window.scrollTo({{ top: {}, behavior: '{}' }});", request.top, request.behavior);
        let _ = document::eval(&script);
    }
}
