use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Parse config text. Unparseable input falls back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Read `config.toml` and store it in the global `OnceLock`. Only the first
/// call has effect.
///
/// A missing file (always the case in the browser) yields the defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(features = ?config.features, "config loaded");
            config
        }
        Err(e) => {
            tracing::info!(path = CONFIG_PATH, error = %e, "no config file, using defaults");
            AppConfig::default()
        }
    })
}

/// The loaded config, or defaults if [`load_config`] hasn't run.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert_eq!(parse_config("[[[ nope"), AppConfig::default());
    }

    #[test]
    fn overrides_are_read() {
        let config = parse_config("[features]\nconfirm_all_deletes = true\n");
        assert!(config.features.confirm_all_deletes);
        assert_eq!(config.pagination.default_page_size, 10);
    }
}
