//! End-to-end configuration tests

use sona_forecast::cli::client_from;
use sona_forecast::config::Config;
use sona_forecast::location::LocationRegistry;

const EXAMPLE_CONFIG: &str = include_str!("../../config.toml.example");

#[test]
fn test_example_config_builds_client() {
    let config: Config = toml::from_str(EXAMPLE_CONFIG).unwrap();
    let client = client_from(&config).unwrap();
    assert_eq!(client.base_url().as_str(), "http://localhost:8000/");
}

#[test]
fn test_example_defaults_are_consistent() {
    let config: Config = toml::from_str(EXAMPLE_CONFIG).unwrap();
    let selection = config.defaults.selection();
    assert!(selection.validate(&LocationRegistry::builtin()).is_ok());
}

#[test]
fn test_api_url_override_wins() {
    let mut config: Config = toml::from_str(
        r#"
        [api]
        base_url = "http://from-file:8000"
        "#,
    )
    .unwrap();
    config.override_base_url(Some("http://from-env:9000".to_string()));
    let client = client_from(&config).unwrap();
    assert_eq!(client.base_url().host_str(), Some("from-env"));
}
