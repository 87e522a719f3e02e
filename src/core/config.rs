//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally via a `.env` file). Startup fails when
//! the WordPress site URL or credentials are missing; nothing else in the
//! process is allowed to terminate it.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::api::UpdateStyle;
use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// WordPress REST API configuration.
    pub api: ApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// WordPress REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the WordPress site (without `/wp-json`).
    pub site_url: String,

    /// Credentials attached to every request.
    pub credentials: WpCredentials,

    /// Routing convention for update operations (PUT vs POST-to-id).
    pub update_style: UpdateStyle,

    /// FluentCommunity table prefix. Only consulted by the legacy
    /// direct-table variant of the manager plugin; the REST proxy ignores it.
    pub table_prefix: String,
}

/// WordPress authentication credentials.
#[derive(Clone, Serialize, Deserialize)]
pub enum WpCredentials {
    /// HTTP Basic auth with a WordPress application password.
    ApplicationPassword { username: String, password: String },

    /// JWT bearer token.
    Bearer { token: String },
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for WpCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApplicationPassword { username, .. } => f
                .debug_struct("ApplicationPassword")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"[REDACTED]")
                .finish(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Returns a configuration error when `WP_SITE_URL` is missing, or when
    /// neither a username/application-password pair nor a JWT token is set.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let site_url = std::env::var("WP_SITE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::config("WP_SITE_URL is required"))?;

        let credentials = credentials_from_env()?;
        let update_style = update_style_from_env()?;

        let table_prefix =
            std::env::var("FC_TABLE_PREFIX").unwrap_or_else(|_| "fcom_".to_string());

        let server = ServerConfig {
            name: std::env::var("MCP_SERVER_NAME")
                .unwrap_or_else(|_| "fluent-community-manager".to_string()),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        let logging = LoggingConfig {
            level: std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        info!("Configured for site {}", site_url);

        Ok(Self {
            server,
            api: ApiConfig {
                site_url,
                credentials,
                update_style,
                table_prefix,
            },
            logging,
            transport: TransportConfig::from_env(),
        })
    }
}

fn credentials_from_env() -> Result<WpCredentials> {
    let username = std::env::var("WP_USERNAME").ok().filter(|s| !s.is_empty());
    let password = std::env::var("WP_APP_PASSWORD")
        .ok()
        .filter(|s| !s.is_empty());
    let token = std::env::var("WP_JWT_TOKEN").ok().filter(|s| !s.is_empty());

    match (username, password, token) {
        (Some(username), Some(password), _) => {
            Ok(WpCredentials::ApplicationPassword { username, password })
        }
        (_, _, Some(token)) => Ok(WpCredentials::Bearer { token }),
        _ => Err(Error::config(
            "Either WP_USERNAME/WP_APP_PASSWORD or WP_JWT_TOKEN is required",
        )),
    }
}

fn update_style_from_env() -> Result<UpdateStyle> {
    match std::env::var("WP_UPDATE_STYLE") {
        Ok(value) => match value.to_lowercase().as_str() {
            "put" => Ok(UpdateStyle::Put),
            "post" => Ok(UpdateStyle::PostToId),
            other => Err(Error::config(format!(
                "WP_UPDATE_STYLE must be 'put' or 'post', got '{}'",
                other
            ))),
        },
        Err(_) => Ok(UpdateStyle::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            for var in [
                "WP_SITE_URL",
                "WP_USERNAME",
                "WP_APP_PASSWORD",
                "WP_JWT_TOKEN",
                "WP_UPDATE_STYLE",
                "FC_TABLE_PREFIX",
            ] {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_missing_site_url_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        assert!(Config::from_env().is_err());
    }

    #[test]
    fn test_missing_credentials_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("WP_SITE_URL", "https://example.com");
        }
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    fn test_application_password_credentials() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("WP_SITE_URL", "https://example.com");
            std::env::set_var("WP_USERNAME", "admin");
            std::env::set_var("WP_APP_PASSWORD", "abcd efgh");
        }
        let config = Config::from_env().unwrap();
        match config.api.credentials {
            WpCredentials::ApplicationPassword { ref username, .. } => {
                assert_eq!(username, "admin");
            }
            _ => panic!("Expected application password credentials"),
        }
        assert_eq!(config.api.table_prefix, "fcom_");
        assert_eq!(config.api.update_style, UpdateStyle::Put);
        clear_env();
    }

    #[test]
    fn test_jwt_token_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("WP_SITE_URL", "https://example.com");
            std::env::set_var("WP_JWT_TOKEN", "jwt-token");
        }
        let config = Config::from_env().unwrap();
        assert!(matches!(
            config.api.credentials,
            WpCredentials::Bearer { .. }
        ));
        clear_env();
    }

    #[test]
    fn test_update_style_post() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("WP_SITE_URL", "https://example.com");
            std::env::set_var("WP_JWT_TOKEN", "jwt-token");
            std::env::set_var("WP_UPDATE_STYLE", "post");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.update_style, UpdateStyle::PostToId);
        clear_env();
    }

    #[test]
    fn test_update_style_invalid() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("WP_SITE_URL", "https://example.com");
            std::env::set_var("WP_JWT_TOKEN", "jwt-token");
            std::env::set_var("WP_UPDATE_STYLE", "patch");
        }
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = WpCredentials::ApplicationPassword {
            username: "admin".to_string(),
            password: "super_secret".to_string(),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret"));
    }
}
