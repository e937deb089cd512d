use crate::components::surfaces::{AdminFrame, FeatureSurface, Home, LoadingSpinner, NotFound};
use crate::history::Navigator;
use dioxus::prelude::*;
use pcx::domain::Tenant;
use pcx::features::routing::{Page, Resolution, RouteParams, select};

/// Renders the current location against the tenant's route tree.
///
/// Redirects replace the current history entry, so back navigation skips them.
#[component]
pub(crate) fn RouteOutlet(tenant: Tenant) -> Element {
    let navigator = use_context::<Navigator>();
    let tree = select(tenant);

    let settled = use_memo({
        let navigator = navigator.clone();
        move || tree.settle(&navigator.current())
    });

    use_effect(move || {
        let target = settled.read().path.clone();
        if target != navigator.peek() {
            navigator.replace(&target);
        }
    });

    match settled().resolution {
        Resolution::Render { layouts, page, params } => rsx! { LayoutStack { layouts, page, params } },
        Resolution::Redirect { .. } => rsx! { LoadingSpinner {} },
        Resolution::NotFound => rsx! { NotFound {} },
    }
}

/// Wraps the page in its layouts, outermost first.
#[component]
fn LayoutStack(layouts: Vec<Page>, page: Page, params: RouteParams) -> Element {
    match layouts.split_first() {
        None => rsx! { PageSurface { page, params } },
        Some((Page::AdminLayout, rest)) => rsx! {
            AdminFrame {
                LayoutStack { layouts: rest.to_vec(), page, params }
            }
        },
        Some((_, rest)) => rsx! { LayoutStack { layouts: rest.to_vec(), page, params } },
    }
}

#[component]
fn PageSurface(page: Page, params: RouteParams) -> Element {
    match page {
        Page::Home => rsx! { Home {} },
        Page::NotFound => rsx! { NotFound {} },
        page => rsx! { FeatureSurface { page, params } },
    }
}

/// In-app link: pushes a history entry instead of reloading the page.
#[component]
pub(crate) fn Link(to: &'static str, children: Element) -> Element {
    let navigator = use_context::<Navigator>();

    rsx! {
        a {
            href: to,
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                navigator.push(to);
            },
            {children}
        }
    }
}
