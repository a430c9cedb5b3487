// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use darkroom::{Config, FilterKind};

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.filter_count, 0);
    assert_eq!(config.last_filter, None);
    assert!(
        !config.review_url.is_empty(),
        "Review URL should not be empty"
    );
}

#[test]
fn test_config_json_round_trip() {
    let config = Config {
        filter_count: 12,
        last_filter: Some(FilterKind::Vignette),
        ..Config::default()
    };

    let raw = serde_json::to_string(&config).unwrap();
    let restored: Config = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn test_config_missing_fields_use_defaults() {
    // Old config files without newer fields must still load
    let restored: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(restored, Config::default());

    let restored: Config = serde_json::from_str(r#"{"filter_count": 3}"#).unwrap();
    assert_eq!(restored.filter_count, 3);
    assert_eq!(restored.last_filter, None);
}
