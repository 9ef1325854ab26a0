//! Configuration loading and management
//!
//! Settings come from a YAML file (every section optional) and are then
//! overridden by environment variables:
//!
//! | Variable                | Field                   |
//! |-------------------------|-------------------------|
//! | `INVOICES_BIND`         | `server.bind`           |
//! | `DATABASE_URL`          | `database.url`          |
//! | `INVOICES_LISTING_PATH` | `routes.listing_path`   |
//! | `INVOICES_LOG`          | `logging.filter`        |

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Path of the invoice listing view, revalidated after every mutation
pub const DEFAULT_LISTING_PATH: &str = "/dashboard/invoices";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `127.0.0.1:3000`
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URL; `None` selects the in-memory store
    pub url: Option<String>,

    /// Maximum pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
        }
    }
}

/// Route settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub listing_path: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            listing_path: DEFAULT_LISTING_PATH.to_string(),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,tower_http=debug".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub routes: RoutesConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            ConfigError::ParseError { file: None, message } => ConfigError::ParseError {
                file: Some(path.to_string()),
                message,
            },
            other => other,
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("INVOICES_BIND") {
            self.server.bind = bind;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = Some(url);
        }
        if let Some(path) = lookup("INVOICES_LISTING_PATH") {
            self.routes.listing_path = path;
        }
        if let Some(filter) = lookup("INVOICES_LOG") {
            self.logging.filter = filter;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check values that would otherwise fail later, at route registration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_listing_path(&self.routes.listing_path)?;
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.max_connections".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Paths already owned by the health routes
const RESERVED_PATHS: [&str; 2] = ["/health", "/healthz"];

fn validate_listing_path(path: &str) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        field: "routes.listing_path".to_string(),
        value: path.to_string(),
        message: message.to_string(),
    };

    let Some(rest) = path.strip_prefix('/') else {
        return Err(invalid("must be an absolute path"));
    };
    if rest.is_empty() || rest.ends_with('/') {
        return Err(invalid("must name a path below '/' without a trailing '/'"));
    }
    if rest.split('/').any(|segment| segment.is_empty()) {
        return Err(invalid("must not contain empty segments"));
    }
    // Route syntax would turn these into captures or wildcards
    if path.contains(['{', '}', '*']) || rest.split('/').any(|s| s.starts_with(':')) {
        return Err(invalid("must not contain route parameters or wildcards"));
    }
    if RESERVED_PATHS.contains(&path) {
        return Err(invalid("is reserved for the health check"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.routes.listing_path, "/dashboard/invoices");
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert!(config.database.url.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml_str("server:\n  bind: 0.0.0.0:8080\n").unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.routes.listing_path, DEFAULT_LISTING_PATH);
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_yaml_serialization() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = AppConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_relative_listing_path() {
        let err = AppConfig::from_yaml_str("routes:\n  listing_path: dashboard\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_rejects_trailing_slash() {
        let err =
            AppConfig::from_yaml_str("routes:\n  listing_path: /dashboard/invoices/\n").unwrap_err();
        assert!(err.to_string().contains("routes.listing_path"));
    }

    #[test]
    fn test_rejects_reserved_health_paths() {
        for path in ["/health", "/healthz"] {
            let yaml = format!("routes:\n  listing_path: {}\n", path);
            let err = AppConfig::from_yaml_str(&yaml).unwrap_err();
            assert!(err.to_string().contains("reserved"), "path {:?}", path);
        }
    }

    #[test]
    fn test_rejects_route_syntax_in_listing_path() {
        let paths = ["/invoices/{id}", "/invoices/*rest", "/in{voices", "/invoices/:id"];
        for path in paths {
            let config = AppConfig {
                routes: RoutesConfig {
                    listing_path: path.to_string(),
                },
                ..AppConfig::default()
            };
            assert!(config.validate().is_err(), "path {:?}", path);
        }
    }

    #[test]
    fn test_rejects_empty_segments() {
        let config = AppConfig {
            routes: RoutesConfig {
                listing_path: "/dashboard//invoices".to_string(),
            },
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_accepts_nested_listing_path() {
        let config = AppConfig {
            routes: RoutesConfig {
                listing_path: "/billing/health".to_string(),
            },
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("INVOICES_BIND", "0.0.0.0:9000"),
            ("DATABASE_URL", "postgres://localhost/invoices"),
            ("INVOICES_LOG", "debug"),
        ]);
        let config = AppConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://localhost/invoices")
        );
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.routes.listing_path, DEFAULT_LISTING_PATH);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let result = AppConfig::default().with_overrides(|key| {
            (key == "INVOICES_LISTING_PATH").then(|| "invoices".to_string())
        });
        assert!(result.is_err());
    }
}
