use anyhow::Context;
use weekly_menu::config::{self, AppConfig};
use weekly_menu::menu::MenuBook;
use weekly_menu::preferences::PreferenceStore;
use weekly_menu::ui::{App, AppContext};
use weekly_menu::{logging, storage};

/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    config::apply_env_lines(BUNDLED_CONFIG);
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {
    config::apply_env_lines(BUNDLED_CONFIG);
}

fn build_context(config: &AppConfig) -> anyhow::Result<AppContext> {
    let menu = MenuBook::bundled().context("bundled menu data is invalid")?;
    let store = storage::default_store(config.storage_dir.clone());
    Ok(AppContext {
        rotation: config.rotation(),
        menu,
        preferences: PreferenceStore::new(store),
    })
}

fn main() -> anyhow::Result<()> {
    load_dotenv();
    let config = AppConfig::from_env().context("failed to read configuration")?;
    logging::init_logger(&config.log_filter);

    let context = build_context(&config)?;
    tracing::info!(anchor = %config.anchor, "starting weekly menu");

    dioxus::LaunchBuilder::new().with_context(context).launch(App);
    Ok(())
}
