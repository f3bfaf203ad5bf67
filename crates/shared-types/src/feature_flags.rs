use serde::{Deserialize, Serialize};

/// Feature flags controlling optional behavior of the management screens.
///
/// Loaded from the `[features]` table of `config.toml`. Missing fields take
/// the defaults below, so an empty file keeps the stock behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Show the reset-password action on the user directory.
    #[serde(default = "enabled")]
    pub password_reset: bool,
    /// Offer administrator sign-up on the home screen.
    #[serde(default = "enabled")]
    pub sign_up: bool,
    /// Ask for confirmation before every delete, not only roles.
    #[serde(default)]
    pub confirm_all_deletes: bool,
}

fn enabled() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            password_reset: true,
            sign_up: true,
            confirm_all_deletes: false,
        }
    }
}
