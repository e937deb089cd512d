mod platform;

use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use pcx::Shell;
use pcx_ui::AppShell;

pub use platform::{DesktopViewport, context};

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self { title: "PrivateCharterX".to_owned(), width: 1280.0, height: 840.0 }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and mounts the shell.
    ///
    /// `seed_offers` is a JSON array of offer rows served when no remote store
    /// key is configured.
    pub fn launch(self, shell: Shell, seed_offers: &'static str) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(context(shell.clone(), seed_offers)))
            .launch(AppShell);
    }
}
