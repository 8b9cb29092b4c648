use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("unknown"), Environment::Development);
}

#[test]
fn empty_environment_yields_full_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8000");
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.catalog_path.to_string_lossy(), "./config/catalog.yaml");
    assert_eq!(cfg.static_dir.to_string_lossy(), "./dist");
    assert!(cfg.scrape_enabled);
    assert_eq!(cfg.search_base_url, "https://html.duckduckgo.com/html");
    assert_eq!(cfg.search_timeout_secs, 8);
    assert!(cfg.search_user_agent.contains("Mozilla/5.0"));
}

#[test]
fn bind_addr_override() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("STEELSEEK_BIND_ADDR", "127.0.0.1:9100");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:9100");
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("STEELSEEK_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STEELSEEK_BIND_ADDR"),
        "expected InvalidEnvVar(STEELSEEK_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn scrape_enabled_accepts_common_spellings() {
    for (raw, expected) in [
        ("true", true),
        ("1", true),
        ("yes", true),
        ("FALSE", false),
        ("0", false),
        ("no", false),
    ] {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("STEELSEEK_SCRAPE_ENABLED", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.scrape_enabled, expected, "raw value {raw:?}");
    }
}

#[test]
fn scrape_enabled_rejects_garbage() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("STEELSEEK_SCRAPE_ENABLED", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STEELSEEK_SCRAPE_ENABLED"),
        "expected InvalidEnvVar(STEELSEEK_SCRAPE_ENABLED), got: {result:?}"
    );
}

#[test]
fn search_timeout_override_and_invalid() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("STEELSEEK_SEARCH_TIMEOUT_SECS", "15");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.search_timeout_secs, 15);

    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("STEELSEEK_SEARCH_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STEELSEEK_SEARCH_TIMEOUT_SECS"),
        "expected InvalidEnvVar(STEELSEEK_SEARCH_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn search_base_url_override() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("STEELSEEK_SEARCH_BASE_URL", "http://127.0.0.1:4545/html");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.search_base_url, "http://127.0.0.1:4545/html");
}
