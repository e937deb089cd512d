//! Scroll restoration: every navigation to a new path starts at the top.

use crate::tree::pathname;
use std::fmt::Debug;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollRequest {
    pub top: i32,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    /// Smooth scroll to the top of the page.
    pub const TOP: Self = Self { top: 0, behavior: ScrollBehavior::Smooth };
}

/// The scrollable window.
pub trait Viewport: Debug {
    fn scroll_to(&self, request: ScrollRequest);
}

/// Issues one [`ScrollRequest::TOP`] per distinct path.
///
/// Only the pathname counts: query or fragment changes on the same page do not
/// scroll.
#[derive(Debug, Clone, Default)]
pub struct ScrollRestorer {
    last: Option<String>,
}

impl ScrollRestorer {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Call on every location change. Returns `true` if a scroll was requested.
    pub fn on_navigate(&mut self, location: &str, viewport: &dyn Viewport) -> bool {
        let path = pathname(location);
        if self.last.as_deref() == Some(path) {
            return false;
        }

        trace!(path, "Scrolling to top");
        viewport.scroll_to(ScrollRequest::TOP);
        self.last = Some(path.to_owned());
        true
    }

    #[must_use]
    pub fn last_path(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
