use std::collections::HashMap;
use std::path::PathBuf;

use ectopica_api::config::{RateLimitConfig, ServiceConfig};

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<ServiceConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServiceConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(config.rate_limit, RateLimitConfig::default());
    assert_eq!(config.rate_limit.max_requests, 20);
    assert_eq!(config.rate_limit.window_millis, 60_000);
    assert!(config.data_dir.is_none());
    assert!(!config.lambda);
}

#[test]
fn values_are_read_from_the_environment() {
    let config = config_from(&[
        ("ECTOPICA_BIND_ADDR", "127.0.0.1:9000"),
        ("ECTOPICA_RATE_LIMIT_MAX", "5"),
        ("ECTOPICA_RATE_LIMIT_WINDOW_MS", "1000"),
        ("ECTOPICA_DATA_DIR", "/var/lib/ectopica"),
        ("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001"),
    ])
    .unwrap();

    assert_eq!(config.bind_addr.port(), 9000);
    assert_eq!(config.rate_limit.max_requests, 5);
    assert_eq!(config.rate_limit.window_millis, 1000);
    assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/ectopica")));
    assert!(config.lambda);
}

#[test]
fn blank_data_dir_means_in_memory() {
    let config = config_from(&[("ECTOPICA_DATA_DIR", "  ")]).unwrap();
    assert!(config.data_dir.is_none());
}

#[test]
fn invalid_values_fail() {
    assert!(config_from(&[("ECTOPICA_RATE_LIMIT_MAX", "0")]).is_err());
    assert!(config_from(&[("ECTOPICA_RATE_LIMIT_WINDOW_MS", "0")]).is_err());
    assert!(config_from(&[("ECTOPICA_RATE_LIMIT_MAX", "many")]).is_err());

    let err = config_from(&[("ECTOPICA_BIND_ADDR", "nowhere")]).unwrap_err();
    assert!(err.to_string().contains("ECTOPICA_BIND_ADDR"));
}
