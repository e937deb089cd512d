use crate::page::Page;
use crate::tree::{RouteNode, RouteTree, Target};
use pcx_domain::Tenant;
use std::sync::LazyLock;

/// Back-office landing page.
pub const LANDING: &str = "/admin/analytics";

static ADMIN: LazyLock<RouteTree> = LazyLock::new(admin_tree);
static PUBLIC: LazyLock<RouteTree> = LazyLock::new(public_tree);

/// The route tree mounted for `tenant`. Both trees are built once.
#[must_use]
pub fn select(tenant: Tenant) -> &'static RouteTree {
    match tenant {
        Tenant::Admin => &ADMIN,
        Tenant::Public => &PUBLIC,
    }
}

/// `/admin` group, mounted identically under both tenants.
fn admin_group() -> RouteNode {
    RouteNode::layout(
        "/admin",
        Page::AdminLayout,
        [
            RouteNode::page("analytics", Page::AdminAnalytics),
            RouteNode::page("booking-requests", Page::AdminBookingRequests),
            RouteNode::page("user-requests", Page::AdminUserRequests),
            RouteNode::page("kyc-verification", Page::AdminKycVerification),
            RouteNode::page("co2-certificates", Page::AdminCo2Certificates),
            RouteNode::page("management", Page::AdminManagement),
        ],
    )
    .with_index(Target::Redirect { to: LANDING })
}

// Sign-in is handled by the admin layout, so `/login` short-circuits too.
fn admin_tree() -> RouteTree {
    RouteTree::new(
        Tenant::Admin,
        vec![
            RouteNode::redirect("/", LANDING),
            RouteNode::redirect("/login", LANDING),
            admin_group(),
            RouteNode::page("/offers", Page::AdminOffers),
        ],
    )
}

fn public_tree() -> RouteTree {
    RouteTree::new(
        Tenant::Public,
        vec![
            RouteNode::page("/checkout", Page::Checkout),
            RouteNode::page("/auth/google/callback", Page::GoogleCalendarCallback),
            RouteNode::page("/services", Page::Services),
            RouteNode::page("/technology", Page::Technology),
            RouteNode::page("/aviation", Page::Aviation),
            RouteNode::page("/tokenized", Page::Tokenized),
            RouteNode::page("/tokenswap", Page::TokenSwap),
            RouteNode::page("/dashboard", Page::TokenizedAssetsGlass),
            RouteNode::page("/tokenized-assets", Page::TokenizedAssets),
            RouteNode::page("/glas", Page::TokenizedAssetsGlass),
            RouteNode::page("/chat", Page::AiChat),
            RouteNode::page("/project/:projectId", Page::Project),
            RouteNode::page("/empty-leg/:id", Page::EmptyLegDetail),
            RouteNode::page("/adventure/:id", Page::AdventureDetail),
            RouteNode::page("/luxury-car/:id", Page::LuxuryCarDetail),
            RouteNode::page("/jet/:id", Page::JetDetail),
            RouteNode::page("/helicopter/:id", Page::HelicopterDetail),
            RouteNode::page("/co2-certificate/:id", Page::Co2CertificateDetail),
            RouteNode::page("/tokenized-assets/dashboard", Page::TokenizedAssetsDashboard),
            RouteNode::page("/charter-a-jet", Page::CharterAJet),
            RouteNode::page("/login", Page::Login),
            RouteNode::page("/register", Page::Register),
            RouteNode::page("/verify-email", Page::VerifyEmail),
            RouteNode::page("/reset-password", Page::ResetPassword),
            admin_group(),
            RouteNode::page("/", Page::Home),
        ],
    )
}
