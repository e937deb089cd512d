use crate::tenant::Tenant;
use bitflags::bitflags;

bitflags! {
    /// Fixed overlays mounted next to the active route tree.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChromeSet: u8 {
        const COOKIE_BANNER = 1 << 0;
        const CHAT_WIDGET = 1 << 1;

        const ALL = Self::COOKIE_BANNER.bits() | Self::CHAT_WIDGET.bits();
    }
}

impl ChromeSet {
    /// The public site carries every overlay; the back-office carries none.
    #[must_use]
    pub const fn for_tenant(tenant: Tenant) -> Self {
        match tenant {
            Tenant::Public => Self::ALL,
            Tenant::Admin => Self::empty(),
        }
    }
}
