#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use pcx_desktop::DesktopApp;
use pcx_logger::Logger;
use std::path::Path;

const CONFIG: &str = include_str!("../../../config/shell.toml");
const SEED_OFFERS: &str = include_str!("../../../config/offers.json");

fn main() -> anyhow::Result<()> {
    let _logger = Logger::builder(env!("CARGO_PKG_NAME")).init()?;

    let config = pcx::load_config(CONFIG, Some(Path::new("shell.toml")))?;
    let shell = pcx::init(&config)?;

    DesktopApp::new().launch(shell, SEED_OFFERS);

    Ok(())
}
