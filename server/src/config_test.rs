use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(
        cfg,
        ServerConfig {
            port: DEFAULT_PORT,
            upstream_url: DEFAULT_UPSTREAM_URL.to_owned(),
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    );
}

#[test]
fn reads_every_variable() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("INVENTORY_API_URL", "https://stockroom.example.edu/"),
        ("INVENTORY_API_TIMEOUT_SECS", " 5 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_url, "https://stockroom.example.edu");
    assert_eq!(cfg.upstream_timeout_secs, 5);
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "PORT", value: "70000".to_owned() });
}

#[test]
fn invalid_timeout_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("INVENTORY_API_TIMEOUT_SECS", "soon")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { var: "INVENTORY_API_TIMEOUT_SECS", .. }));
}

#[test]
fn upstream_must_be_http() {
    let err = ServerConfig::from_lookup(lookup_from(&[("INVENTORY_API_URL", "localhost:8000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidUpstream("localhost:8000".to_owned()));
}
