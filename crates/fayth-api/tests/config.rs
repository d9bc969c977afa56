use std::collections::HashMap;

use fayth_api::config::{Config, DEFAULT_MAX_SESSIONS, DEFAULT_MAX_TRIALS, LogFormat};

fn from(vars: &[(&str, &str)]) -> eyre::Result<Config> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    let config = from(&[]).unwrap();
    assert!(config.bind_addr.is_none());
    assert_eq!(config.max_trials, DEFAULT_MAX_TRIALS);
    assert_eq!(config.max_sessions, DEFAULT_MAX_SESSIONS);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn reads_all_variables() {
    let config = from(&[
        ("FAYTH_BIND_ADDR", "127.0.0.1:8080"),
        ("FAYTH_MAX_TRIALS", "500"),
        ("FAYTH_MAX_SESSIONS", "64"),
        ("FAYTH_LOG_FORMAT", "pretty"),
    ])
    .unwrap();
    assert_eq!(config.bind_addr.map(|a| a.port()), Some(8080));
    assert_eq!(config.max_trials, 500);
    assert_eq!(config.max_sessions, 64);
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn rejects_malformed_values() {
    assert!(from(&[("FAYTH_BIND_ADDR", "localhost")]).is_err());
    assert!(from(&[("FAYTH_MAX_TRIALS", "many")]).is_err());
    assert!(from(&[("FAYTH_LOG_FORMAT", "xml")]).is_err());
    assert!(from(&[("FAYTH_MAX_SESSIONS", "0")]).is_err());
}
