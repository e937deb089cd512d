/// Every surface a route can mount.
///
/// Most variants name page components owned by feature teams; `Home`,
/// `AdminLayout` and `NotFound` belong to the shell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::IntoStaticStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Page {
    Home,
    NotFound,

    // Back-office
    AdminLayout,
    AdminAnalytics,
    AdminBookingRequests,
    AdminUserRequests,
    AdminKycVerification,
    AdminCo2Certificates,
    AdminManagement,
    AdminOffers,

    // Booking and payments
    Checkout,
    GoogleCalendarCallback,
    CharterAJet,

    // Marketing
    Services,
    Technology,
    Aviation,
    Tokenized,
    TokenSwap,

    // Dashboards
    TokenizedAssetsGlass,
    TokenizedAssets,
    TokenizedAssetsDashboard,
    AiChat,

    // Details, keyed by an opaque identifier
    Project,
    EmptyLegDetail,
    AdventureDetail,
    LuxuryCarDetail,
    JetDetail,
    HelicopterDetail,
    Co2CertificateDetail,

    // Account
    Login,
    Register,
    VerifyEmail,
    ResetPassword,
}

impl Page {
    /// Human-readable title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "PrivateCharterX",
            Self::NotFound => "Page not found",
            Self::AdminLayout => "Administration",
            Self::AdminAnalytics => "Analytics",
            Self::AdminBookingRequests => "Booking requests",
            Self::AdminUserRequests => "User requests",
            Self::AdminKycVerification => "KYC verification",
            Self::AdminCo2Certificates => "CO2 certificates",
            Self::AdminManagement => "Management",
            Self::AdminOffers => "Offers",
            Self::Checkout => "Checkout",
            Self::GoogleCalendarCallback => "Connecting Google Calendar",
            Self::CharterAJet => "Charter a jet",
            Self::Services => "Services",
            Self::Technology => "Technology",
            Self::Aviation => "Aviation",
            Self::Tokenized => "Tokenized",
            Self::TokenSwap => "Token swap",
            Self::TokenizedAssetsGlass => "Dashboard",
            Self::TokenizedAssets => "Tokenized assets",
            Self::TokenizedAssetsDashboard => "Assets dashboard",
            Self::AiChat => "Chat",
            Self::Project => "Project",
            Self::EmptyLegDetail => "Empty leg",
            Self::AdventureDetail => "Adventure",
            Self::LuxuryCarDetail => "Luxury car",
            Self::JetDetail => "Jet",
            Self::HelicopterDetail => "Helicopter",
            Self::Co2CertificateDetail => "CO2 certificate",
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::VerifyEmail => "Verify email",
            Self::ResetPassword => "Reset password",
        }
    }

    /// Back-office surfaces, including the layout wrapping them.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(
            self,
            Self::AdminLayout
                | Self::AdminAnalytics
                | Self::AdminBookingRequests
                | Self::AdminUserRequests
                | Self::AdminKycVerification
                | Self::AdminCo2Certificates
                | Self::AdminManagement
                | Self::AdminOffers
        )
    }
}
