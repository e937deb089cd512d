use dioxus::prelude::*;
use futures_util::future::LocalBoxFuture;
use pcx::features::gating::{IdentityError, IdentityProvider, Session, StaticMaintenance};
use pcx::features::offers::{OfferRecord, OfferStore, OffersError};
use pcx::features::routing::scroll::{ScrollRequest, Viewport};
use pcx::kernel::origin::StaticOrigin;
use pcx::{Shell, ShellConfig};
use pcx_ui::{AppShell, Environment, HistoryBackend, MemoryHistory, ShellContext};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::oneshot;

const IDLE: Duration = Duration::from_millis(50);
const MAX_ROUNDS: usize = 64;

/// Bootstrap that settles only when the test releases it.
#[derive(Debug)]
struct DeferredIdentity(RefCell<Option<oneshot::Receiver<()>>>);

impl IdentityProvider for DeferredIdentity {
    fn bootstrap(&self) -> LocalBoxFuture<'_, Result<Session, IdentityError>> {
        let release = self.0.borrow_mut().take();
        Box::pin(async move {
            let Some(release) = release else {
                return Err(IdentityError::from("bootstrap ran twice"));
            };
            release.await.map_err(|_| IdentityError::from("release dropped"))?;
            Ok(Session::guest())
        })
    }
}

/// Marks the store's fetch as abandoned if it is dropped before finishing.
struct FetchGuard {
    abandoned: Rc<Cell<bool>>,
    finished: bool,
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        if !self.finished {
            self.abandoned.set(true);
        }
    }
}

#[derive(Debug, Default)]
struct CountingStore {
    records: Vec<OfferRecord>,
    hang: bool,
    calls: Cell<usize>,
    abandoned: Rc<Cell<bool>>,
}

impl CountingStore {
    fn with_offer(title: &str) -> Self {
        let row = format!(r#"[{{"id": 1, "created_at": "2025-05-02T09:30:00Z", "title": "{title}"}}]"#);
        let records = OfferRecord::decode_rows(&row).expect("valid offer row");
        Self { records, ..Self::default() }
    }

    fn hanging() -> Self {
        Self { hang: true, ..Self::default() }
    }
}

impl OfferStore for CountingStore {
    fn list_offers_newest_first(&self) -> LocalBoxFuture<'_, Result<Vec<OfferRecord>, OffersError>> {
        self.calls.set(self.calls.get() + 1);
        let mut guard = FetchGuard { abandoned: Rc::clone(&self.abandoned), finished: false };
        Box::pin(async move {
            if self.hang {
                std::future::pending::<()>().await;
            }
            guard.finished = true;
            Ok(self.records.clone())
        })
    }
}

#[derive(Debug, Default)]
struct RecordingViewport(RefCell<Vec<ScrollRequest>>);

impl Viewport for RecordingViewport {
    fn scroll_to(&self, request: ScrollRequest) {
        self.0.borrow_mut().push(request);
    }
}

struct Harness {
    dom: VirtualDom,
    shell: Shell,
    release: Option<oneshot::Sender<()>>,
    store: Rc<CountingStore>,
    history: Rc<MemoryHistory>,
    viewport: Rc<RecordingViewport>,
}

impl Harness {
    async fn mount(origin: &str, store: CountingStore) -> Self {
        let shell = pcx::init(&ShellConfig::default()).expect("default config initializes");
        let (release, pending) = oneshot::channel();
        let store = Rc::new(store);
        let history = Rc::new(MemoryHistory::default());
        let viewport = Rc::new(RecordingViewport::default());

        let env = Environment {
            origin: Rc::new(StaticOrigin::new(origin)),
            history: history.clone(),
            viewport: viewport.clone(),
            offers: store.clone(),
            identity: Rc::new(DeferredIdentity(RefCell::new(Some(pending)))),
            maintenance: Rc::new(StaticMaintenance(false)),
            sleeper: None,
        };

        let mut dom = VirtualDom::new(AppShell).with_root_context(ShellContext::new(shell.clone(), env));
        dom.rebuild_in_place();

        let mut harness = Self { dom, shell, release: Some(release), store, history, viewport };
        harness.settle().await;
        harness
    }

    /// Runs tasks and effects until the dom has been idle for a while.
    async fn settle(&mut self) {
        for _ in 0..MAX_ROUNDS {
            if tokio::time::timeout(IDLE, self.dom.wait_for_work()).await.is_err() {
                return;
            }
            let _ = self.dom.render_immediate_to_vec();
        }
    }

    async fn finish_bootstrap(&mut self) {
        if let Some(release) = self.release.take() {
            let _ = release.send(());
        }
        self.settle().await;
    }

    async fn set_maintenance(&mut self, active: bool) {
        self.shell.maintenance.sync(&StaticMaintenance(active)).await;
        self.settle().await;
    }

    fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn scrolls(&self) -> Vec<ScrollRequest> {
        self.viewport.0.borrow().clone()
    }
}

#[tokio::test]
async fn suspended_gate_renders_only_the_placeholder() {
    let mut shell = Harness::mount("example.com", CountingStore::with_offer("Geneva to Nice")).await;

    let html = shell.html();
    assert!(html.contains("pcx-loading"), "{html}");
    for absent in ["pcx-home", "pcx-cookie-banner", "pcx-chat-widget", "pcx-maintenance"] {
        assert!(!html.contains(absent), "{absent} rendered while suspended: {html}");
    }

    shell.set_maintenance(true).await;
    assert!(shell.html().contains("pcx-loading"), "identity wins over maintenance");

    assert_eq!(shell.store.calls.get(), 0, "no fetch while suspended");
    assert!(shell.scrolls().is_empty(), "no scroll while suspended");
}

#[tokio::test]
async fn ready_gate_mounts_the_tree_then_fetches_and_scrolls() {
    let mut shell = Harness::mount("example.com", CountingStore::with_offer("Geneva to Nice")).await;
    shell.finish_bootstrap().await;

    let html = shell.html();
    for present in ["pcx-home", "Geneva to Nice", "pcx-cookie-banner", "pcx-chat-widget", r#"data-chain-id="8453""#] {
        assert!(html.contains(present), "{present} missing: {html}");
    }
    assert!(!html.contains("pcx-loading"));

    assert_eq!(shell.store.calls.get(), 1);
    assert_eq!(shell.scrolls(), [ScrollRequest::TOP]);
    assert_eq!(shell.history.current(), "/", "home is rendered, not redirected");
}

#[tokio::test]
async fn maintenance_tears_down_the_tree_and_its_pending_fetch() {
    let mut shell = Harness::mount("example.com", CountingStore::hanging()).await;
    shell.finish_bootstrap().await;

    assert!(shell.html().contains("Loading offers"));
    assert_eq!(shell.store.calls.get(), 1);
    assert!(!shell.store.abandoned.get());

    shell.set_maintenance(true).await;
    let html = shell.html();
    assert!(html.contains("pcx-maintenance"), "{html}");
    for absent in ["pcx-home", "pcx-cookie-banner", "pcx-chat-widget"] {
        assert!(!html.contains(absent), "{absent} survived maintenance: {html}");
    }
    assert!(shell.store.abandoned.get(), "unmount abandons the pending fetch");

    shell.set_maintenance(false).await;
    assert!(shell.html().contains("pcx-home"));
    assert_eq!(shell.store.calls.get(), 2, "a remount fetches again");
}

#[tokio::test]
async fn admin_root_replaces_history_with_the_landing_page() {
    let mut shell = Harness::mount("admin.example.com", CountingStore::default()).await;
    shell.finish_bootstrap().await;

    assert_eq!(shell.history.current(), "/admin/analytics");
    assert_eq!(shell.history.len(), 1, "redirects replace instead of pushing");

    let html = shell.html();
    assert!(html.contains(r#"data-page="admin-analytics""#), "{html}");
    assert!(html.contains("pcx-admin"));
    assert!(!html.contains("pcx-cookie-banner"), "no chrome under admin");
    assert!(!html.contains("pcx-chat-widget"), "no chrome under admin");
}

#[tokio::test]
async fn maintenance_blocks_the_admin_tenant_too() {
    let mut shell = Harness::mount("admin.example.com", CountingStore::default()).await;
    shell.set_maintenance(true).await;
    shell.finish_bootstrap().await;

    let html = shell.html();
    assert!(html.contains("pcx-maintenance"), "{html}");
    assert!(!html.contains("pcx-admin"));
    assert_eq!(shell.store.calls.get(), 0);
    assert!(shell.scrolls().is_empty());
    assert_eq!(shell.history.current(), "/", "no route tree, no redirect");
}
