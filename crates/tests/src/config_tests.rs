use pretty_assertions::assert_eq;
use registry::config::parse_config;
use shared_types::{normalize_page_size, AppConfig, UserRole};

const SAMPLE: &str = include_str!("../../../config.toml");

#[test]
fn shipped_config_parses() {
    let config = parse_config(SAMPLE);
    assert_eq!(config.pagination.default_page_size, 10);
    assert_eq!(config.pagination.role_page_size, 5);
    assert!(config.features.password_reset);
    assert_eq!(config.auth.role(), UserRole::SchoolAdmin);
}

#[test]
fn unknown_login_role_is_least_privileged() {
    let config = parse_config("[auth]\nlogin_role = \"superuser\"\n");
    assert_eq!(config.auth.role(), UserRole::Student);
}

#[test]
fn wrong_type_falls_back_to_defaults() {
    let config = parse_config("[pagination]\ndefault_page_size = \"ten\"\n");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn configured_page_size_must_be_an_option() {
    let config = parse_config("[pagination]\ndefault_page_size = 7\n");
    let size = normalize_page_size(
        config.pagination.default_page_size,
        &config.pagination.page_size_options,
        10,
    );
    assert_eq!(size, 10);
}
