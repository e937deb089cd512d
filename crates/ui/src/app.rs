use crate::components::chrome::{ChatWidget, CookieBanner};
use crate::components::feed::OffersFeed;
use crate::components::outlet::RouteOutlet;
use crate::components::scroll::ScrollToTop;
use crate::components::surfaces::{LoadingSpinner, MaintenanceMode};
use crate::context::{ShellContext, WalletContext};
use crate::history::Navigator;
use dioxus::prelude::*;
use pcx::domain::config::ThemeMode;
use pcx::domain::{ChromeSet, Tenant};
use pcx::features::gating::{GateState, GatingController, RenderDecision};
use std::time::Duration;
use tracing::{error, info};

/// Root component. Expects a [`ShellContext`] from the launcher.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        WalletProvider {
            ThemeProvider {
                AuthProvider {
                    MaintenanceProvider {
                        LocationProvider {
                            AppContent {}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn WalletProvider(children: Element) -> Element {
    let ctx = use_context::<ShellContext>();
    use_context_provider(|| WalletContext(ctx.shell.config.wallet.clone()));
    rsx! { {children} }
}

#[component]
fn ThemeProvider(children: Element) -> Element {
    let ctx = use_context::<ShellContext>();
    let theme = use_signal(|| ctx.shell.config.ui.theme);
    use_context_provider(|| theme);

    let mode: ThemeMode = theme();
    rsx! {
        div { class: "pcx-shell", "data-theme": mode.as_str(), {children} }
    }
}

/// Starts the identity bootstrap. The outcome reaches the gate through its signal.
#[component]
fn AuthProvider(children: Element) -> Element {
    let ctx = use_context::<ShellContext>();
    use_future(move || {
        let identity = ctx.shell.identity.clone();
        let provider = ctx.env.identity.clone();
        async move {
            identity.bootstrap(provider.as_ref()).await;
        }
    });
    rsx! { {children} }
}

/// Syncs the maintenance flag, and keeps polling it where a timer exists.
#[component]
fn MaintenanceProvider(children: Element) -> Element {
    let ctx = use_context::<ShellContext>();
    use_future(move || {
        let signal = ctx.shell.maintenance.clone();
        let source = ctx.env.maintenance.clone();
        let interval = Duration::from_secs(ctx.shell.config.maintenance.poll_interval_secs);
        let sleeper = ctx.env.sleeper;
        async move {
            match sleeper {
                Some(sleep) => signal.poll(source.as_ref(), interval, sleep).await,
                None => {
                    signal.sync(source.as_ref()).await;
                },
            }
        }
    });
    rsx! { {children} }
}

/// Provides the [`Navigator`] and follows back/forward navigation.
#[component]
fn LocationProvider(children: Element) -> Element {
    let ctx = use_context::<ShellContext>();
    let history = ctx.env.history.clone();
    let path = use_signal(|| history.current());
    let navigator = use_context_provider(|| Navigator::new(path, history.clone()));

    use_future(move || {
        let history = history.clone();
        let navigator = navigator.clone();
        async move {
            let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
            history.on_pop(Box::new(move |path| {
                let _ = tx.send(path);
            }));
            while let Some(path) = rx.recv().await {
                navigator.sync(path);
            }
        }
    });
    rsx! { {children} }
}

/// The gate view: follows readiness and renders exactly one branch.
#[component]
fn AppContent() -> Element {
    let ctx = use_context::<ShellContext>();
    let tenant = use_hook(|| ctx.shell.tenant(ctx.env.origin.as_ref()));
    let mut gate = use_signal(GateState::default);

    use_future(move || {
        let shell = ctx.shell.clone();
        async move {
            let mut watch = match shell.readiness() {
                Ok(watch) => watch,
                Err(e) => {
                    error!(error = %e, "Gate cannot observe readiness; staying suspended");
                    return;
                },
            };

            let mut controller = GatingController::new();
            controller.observe(watch.snapshot());
            gate.set(controller.state());

            while let Some(readiness) = watch.changed().await {
                if controller.observe(readiness).is_some() {
                    gate.set(controller.state());
                }
            }
            info!("Readiness publishers gone; gate frozen");
        }
    });

    match RenderDecision::new(gate(), tenant) {
        RenderDecision::Placeholder => rsx! { LoadingSpinner {} },
        RenderDecision::Maintenance => rsx! { MaintenanceMode {} },
        RenderDecision::Tree(tenant) => rsx! { ActiveShell { tenant } },
    }
}

/// Everything mounted while the gate is active. Unmounting it (maintenance)
/// tears down the route tree, the offers fetch and the chrome together.
#[component]
fn ActiveShell(tenant: Tenant) -> Element {
    let chrome = ChromeSet::for_tenant(tenant);

    rsx! {
        OffersFeed {
            ErrorBoundary {
                handle_error: |_: ErrorContext| rsx! { LoadingSpinner {} },
                ScrollToTop {}
                RouteOutlet { tenant }
                if chrome.contains(ChromeSet::COOKIE_BANNER) {
                    div { class: "pcx-overlay pcx-overlay--cookies", CookieBanner {} }
                }
            }
            if chrome.contains(ChromeSet::CHAT_WIDGET) {
                ChatWidget {}
            }
        }
    }
}
