//! Integration tests for loading configuration from files and overrides

use invoices::config::AppConfig;
use invoices::core::ConfigError;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
server:
  bind: 0.0.0.0:8080
database:
  url: postgres://localhost/invoices
  max_connections: 10
routes:
  listing_path: /billing/invoices
logging:
  filter: debug
"#,
    );

    let config = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.server.bind, "0.0.0.0:8080");
    assert_eq!(
        config.database.url.as_deref(),
        Some("postgres://localhost/invoices")
    );
    assert_eq!(config.database.max_connections, 10);
    assert_eq!(config.routes.listing_path, "/billing/invoices");
    assert_eq!(config.logging.filter, "debug");
}

#[test]
fn test_empty_file_is_default() {
    let file = write_config("{}\n");

    let config = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = AppConfig::from_yaml_file(path.to_str().unwrap()).unwrap_err();

    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_parse_error_names_the_file() {
    let file = write_config("server: [not, a, map\n");
    let path = file.path().to_str().unwrap().to_string();

    let err = AppConfig::from_yaml_file(&path).unwrap_err();

    match err {
        ConfigError::ParseError { file, .. } => assert_eq!(file, Some(path)),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_invalid_listing_path_in_file() {
    let file = write_config("routes:\n  listing_path: /dashboard/invoices/\n");

    let err = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_listing_path_on_health_route_in_file() {
    let file = write_config("routes:\n  listing_path: /health\n");

    let err = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert!(err.to_string().contains("/health"));
}

#[test]
fn test_overrides_apply_on_top_of_file() {
    let file = write_config("server:\n  bind: 0.0.0.0:8080\n");
    let config = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    let config = config
        .with_overrides(|key| match key {
            "DATABASE_URL" => Some("postgres://db/invoices".to_string()),
            "INVOICES_LISTING_PATH" => Some("/admin/invoices".to_string()),
            _ => None,
        })
        .unwrap();

    assert_eq!(config.server.bind, "0.0.0.0:8080");
    assert_eq!(config.database.url.as_deref(), Some("postgres://db/invoices"));
    assert_eq!(config.routes.listing_path, "/admin/invoices");
}
