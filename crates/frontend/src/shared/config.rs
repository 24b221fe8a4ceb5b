use contracts::shared::config::{load_config, DetailConfig};

/// localStorage key holding a TOML override of the detail view config.
pub const CONFIG_STORAGE_KEY: &str = "customer_product_detail.config";

fn read_override() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten())
}

/// Load the config, falling back to defaults when the override is invalid.
pub fn load_app_config() -> DetailConfig {
    let overrides = read_override();
    match load_config(overrides.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!(
                "Ignoring invalid config in localStorage '{}': {:#}",
                CONFIG_STORAGE_KEY,
                e
            );
            DetailConfig::default()
        }
    }
}
