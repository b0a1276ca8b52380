use super::*;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let map: HashMap<&str, &str> = pairs.iter().copied().collect();
    HostConfig::from_lookup(|key| map.get(key).map(|v| (*v).to_owned()))
}

#[test]
fn backend_url_is_required() {
    assert_eq!(config_from(&[]), Err(ConfigError::Missing("BACKEND_URL")));
    assert_eq!(config_from(&[("BACKEND_URL", "  ")]), Err(ConfigError::Missing("BACKEND_URL")));
}

#[test]
fn defaults_fill_optional_settings() {
    let cfg = config_from(&[("BACKEND_URL", "https://api.example.test/")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.app.backend_url, "https://api.example.test");
    assert_eq!(cfg.app.token_template, DEFAULT_TOKEN_TEMPLATE);
    assert_eq!(cfg.app.session_fetch_delay_ms, DEFAULT_SESSION_FETCH_DELAY_MS);
    assert_eq!(cfg.app.clerk_publishable_key, "");
}

#[test]
fn overrides_are_applied() {
    let cfg = config_from(&[
        ("BACKEND_URL", "http://localhost:8080"),
        ("PORT", "8000"),
        ("AUTH_TOKEN_TEMPLATE", "custom-template"),
        ("CLERK_PUBLISHABLE_KEY", "pk_test_123"),
        ("SESSION_FETCH_DELAY_MS", "0"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.app.token_template, "custom-template");
    assert_eq!(cfg.app.clerk_publishable_key, "pk_test_123");
    assert_eq!(cfg.app.session_fetch_delay_ms, 0);
}

#[test]
fn invalid_numbers_are_rejected() {
    let err = config_from(&[("BACKEND_URL", "http://x"), ("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert!(err.to_string().contains("PORT"));

    let err = config_from(&[("BACKEND_URL", "http://x"), ("SESSION_FETCH_DELAY_MS", "-5")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "SESSION_FETCH_DELAY_MS", .. }));
}
