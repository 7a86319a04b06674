//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = SupaConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_model() {
    let mut config = SupaConfig::default();
    config.endpoint.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.model"));
}

#[test]
fn catches_base_url_without_scheme() {
    let mut config = SupaConfig::default();
    config.endpoint.base_url = "api.supa.works/openai".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.base_url"));
    assert!(err.contains("http://"));
}

#[test]
fn catches_connect_timeout_out_of_range() {
    let mut config = SupaConfig::default();
    config.endpoint.connect_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.connect_timeout_secs"));
}

#[test]
fn idle_timeout_zero_is_allowed() {
    let mut config = SupaConfig::default();
    config.endpoint.idle_timeout_secs = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_idle_timeout_too_large() {
    let mut config = SupaConfig::default();
    config.endpoint.idle_timeout_secs = 7200;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.idle_timeout_secs"));
}

#[test]
fn catches_request_timeout_too_large() {
    let mut config = SupaConfig::default();
    config.endpoint.request_timeout_secs = 3601;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.request_timeout_secs"));
}

#[test]
fn catches_blank_system_prompt() {
    let mut config = SupaConfig::default();
    config.chat.system_prompt = Some(String::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.system_prompt"));
}

#[test]
fn catches_invalid_secret_name() {
    let mut config = SupaConfig::default();
    config.secrets.name = "SUPA API".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("secrets.name"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = SupaConfig::default();
    config.endpoint.model = String::new();
    config.endpoint.connect_timeout_secs = 1000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.model"));
    assert!(err.contains("endpoint.connect_timeout_secs"));
    assert!(err.contains("; "));
}
