use serde::{Deserialize, Serialize};

use crate::feature_flags::FeatureFlags;
use crate::models::UserRole;

/// Page-size settings for the list screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    #[serde(default = "default_role_page_size")]
    pub role_page_size: usize,
}

fn default_page_size() -> usize {
    10
}

fn default_page_size_options() -> Vec<usize> {
    vec![5, 10, 25]
}

fn default_role_page_size() -> usize {
    5
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            role_page_size: default_role_page_size(),
        }
    }
}

/// Settings for the simulated password-reset collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasswordResetConfig {
    #[serde(default = "default_reset_delay_ms")]
    pub simulated_delay_ms: u64,
}

fn default_reset_delay_ms() -> u64 {
    1500
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_reset_delay_ms(),
        }
    }
}

/// Settings for the placeholder login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthConfig {
    /// Role granted to the demo identity returned by login.
    #[serde(default = "default_login_role")]
    pub login_role: String,
}

fn default_login_role() -> String {
    UserRole::SchoolAdmin.as_str().to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_role: default_login_role(),
        }
    }
}

impl AuthConfig {
    pub fn role(&self) -> UserRole {
        UserRole::from_str_or_default(&self.login_role)
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub password_reset: PasswordResetConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.pagination.page_size_options, vec![5, 10, 25]);
        assert_eq!(config.pagination.role_page_size, 5);
        assert_eq!(config.password_reset.simulated_delay_ms, 1500);
        assert_eq!(config.auth.role(), UserRole::SchoolAdmin);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [pagination]
            default_page_size = 25

            [auth]
            login_role = "corporate_admin"
            "#,
        )
        .unwrap();
        assert_eq!(config.pagination.default_page_size, 25);
        assert_eq!(config.pagination.page_size_options, vec![5, 10, 25]);
        assert_eq!(config.auth.role(), UserRole::CorporateAdmin);
        assert!(config.features.password_reset);
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            password_reset = false
            sign_up = true
            confirm_all_deletes = true

            [pagination]
            default_page_size = 5
            page_size_options = [5, 20]
            role_page_size = 20

            [password_reset]
            simulated_delay_ms = 10

            [auth]
            login_role = "teacher"
            "#,
        )
        .unwrap();
        assert!(!config.features.password_reset);
        assert!(config.features.confirm_all_deletes);
        assert_eq!(config.pagination.page_size_options, vec![5, 20]);
        assert_eq!(config.pagination.role_page_size, 20);
        assert_eq!(config.password_reset.simulated_delay_ms, 10);
        assert_eq!(config.auth.role(), UserRole::Teacher);
    }
}
