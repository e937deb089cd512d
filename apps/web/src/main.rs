mod browser;

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use pcx_ui::AppShell;

const CONFIG: &str = include_str!("../../../config/shell.toml");

fn main() -> anyhow::Result<()> {
    dioxus::logger::init(Level::INFO)?;

    let config = pcx::load_config(CONFIG, None)?;
    let shell = pcx::init(&config)?;

    LaunchBuilder::web()
        .with_context_provider(move || Box::new(browser::context(shell.clone())))
        .launch(AppShell);

    Ok(())
}
