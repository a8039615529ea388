//! Application configuration loaded from environment variables.

use std::env;

use inkpost_infra::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

const DEFAULT_CATEGORIES: &str = "General,Technology,Lifestyle";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server against the in-memory store.
    pub database: Option<DatabaseConfig>,
    /// Apply pending migrations before serving.
    pub auto_migrate: bool,
    /// Category names ensured to exist at startup.
    pub seed_categories: Vec<String>,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            auto_migrate: env::var("AUTO_MIGRATE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            seed_categories: parse_category_names(
                &env::var("SEED_CATEGORIES").unwrap_or_else(|_| DEFAULT_CATEGORIES.to_string()),
            ),
            telemetry: TelemetryConfig::from_env(),
        }
    }
}

/// Split a comma-separated list of names, dropping blanks and repeats.
fn parse_category_names(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_names() {
        assert_eq!(
            parse_category_names(" General, ,Travel,General "),
            vec!["General".to_string(), "Travel".to_string()]
        );
        assert!(parse_category_names("").is_empty());
    }
}
