use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub token: TokenConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Bearer token settings.
///
/// Without `expiration_hours` issued tokens stay valid until revoked.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TokenConfig {
    pub expiration_hours: Option<i64>,
}

impl TokenConfig {
    /// Token lifetime, if one is configured and positive.
    pub fn lifetime(&self) -> Option<chrono::Duration> {
        self.expiration_hours
            .filter(|hours| *hours > 0)
            .and_then(chrono::Duration::try_hours)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, TOKEN__EXPIRATION_HOURS, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("database.max_connections", 5)?
            .set_default("server.http_port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lifetime_unset_is_unbounded() {
        let config = TokenConfig::default();
        assert!(config.lifetime().is_none());
    }

    #[test]
    fn test_token_lifetime_from_hours() {
        let config = TokenConfig {
            expiration_hours: Some(24),
        };
        assert_eq!(config.lifetime(), Some(chrono::Duration::hours(24)));
    }

    #[test]
    fn test_token_lifetime_ignores_non_positive_hours() {
        let config = TokenConfig {
            expiration_hours: Some(0),
        };
        assert!(config.lifetime().is_none());
    }
}
