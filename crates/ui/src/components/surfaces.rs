use crate::components::chrome::WalletButton;
use crate::components::outlet::Link;
use dioxus::prelude::*;
use pcx::features::offers::OffersFeedState;
use pcx::features::routing::{Page, RouteParams};

/// Neutral placeholder shown while the gate is suspended.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "pcx-loading", role: "status",
            div { class: "pcx-loading__spinner" }
        }
    }
}

#[component]
pub fn MaintenanceMode() -> Element {
    rsx! {
        main { class: "pcx-maintenance",
            h1 { "We'll be right back" }
            p { "PrivateCharterX is undergoing scheduled maintenance. Please check again shortly." }
        }
    }
}

#[component]
pub fn NotFound() -> Element {
    let title = Page::NotFound.title();

    rsx! {
        main { class: "pcx-not-found",
            h1 { "{title}" }
            p { "The page you are looking for does not exist." }
            Link { to: "/", "Back to home" }
        }
    }
}

/// Marketing home, listing the latest fixed offers.
#[component]
pub(crate) fn Home() -> Element {
    let offers = use_context::<Signal<OffersFeedState>>();
    let feed = offers.read();
    let title = Page::Home.title();

    rsx! {
        main { class: "pcx-home",
            h1 { "{title}" }
            nav { class: "pcx-home__links",
                Link { to: "/charter-a-jet", "Charter a jet" }
                Link { to: "/services", "Services" }
                Link { to: "/tokenized", "Tokenized assets" }
                WalletButton {}
            }
            section { class: "pcx-home__offers",
                h2 { "Fixed offers" }
                if feed.is_loading {
                    p { "Loading offers…" }
                } else if feed.items.is_empty() {
                    p { "No offers right now." }
                } else {
                    ul {
                        for offer in feed.items.iter() {
                            li { key: "{offer.id}", {offer.title().unwrap_or("Untitled offer")} }
                        }
                    }
                }
            }
        }
    }
}

/// Surface of a page owned by a feature team; identifies itself and its parameters.
#[component]
pub(crate) fn FeatureSurface(page: Page, params: RouteParams) -> Element {
    let slug: &'static str = page.into();
    let title = page.title();

    rsx! {
        main { class: "pcx-page", "data-page": slug,
            h1 { "{title}" }
            if !params.is_empty() {
                dl {
                    for (name, value) in params.iter() {
                        dt { key: "{name}", "{name}" }
                        dd { "{value}" }
                    }
                }
            }
        }
    }
}

/// Back-office frame around the admin pages.
#[component]
pub(crate) fn AdminFrame(children: Element) -> Element {
    rsx! {
        div { class: "pcx-admin",
            nav { class: "pcx-admin__nav",
                for (to, page) in ADMIN_NAV {
                    Link { key: "{to}", to: *to, {page.title()} }
                }
            }
            div { class: "pcx-admin__content", {children} }
        }
    }
}

const ADMIN_NAV: &[(&str, Page)] = &[
    ("/admin/analytics", Page::AdminAnalytics),
    ("/admin/booking-requests", Page::AdminBookingRequests),
    ("/admin/user-requests", Page::AdminUserRequests),
    ("/admin/kyc-verification", Page::AdminKycVerification),
    ("/admin/co2-certificates", Page::AdminCo2Certificates),
    ("/admin/management", Page::AdminManagement),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pcx::features::routing::{Resolution, Tenant, select};

    #[test]
    fn admin_navigation_points_at_admin_pages() {
        for (to, page) in ADMIN_NAV {
            for tenant in Tenant::ALL {
                let Resolution::Render { page: found, .. } = select(tenant).resolve(to) else {
                    panic!("{to} should render under {tenant}");
                };
                assert_eq!(found, *page);
            }
        }
    }
}
