//! Configuration management for the prompts API.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the prompts API.
///
/// This struct contains all configurable aspects of the server, organized
/// by concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub http: HttpConfig,

    /// Bearer token configuration.
    pub auth: AuthConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Load the logging section on its own.
    ///
    /// Logging has to be up before the rest of the configuration is read,
    /// otherwise the warnings raised while loading it are lost.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut logging = Self::default();
        if let Ok(level) = std::env::var("PROMPTS_LOG_LEVEL") {
            logging.level = level;
        }
        logging
    }
}

/// Bearer tokens accepted by the static token authenticator.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// `(token, user id)` pairs.
    pub tokens: Vec<(String, String)>,
}

/// Custom Debug implementation to redact tokens from logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "tokens",
                &self
                    .tokens
                    .iter()
                    .map(|(_, user)| ("[REDACTED]", user.as_str()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl AuthConfig {
    /// Parse a `token:user,token:user` list.
    ///
    /// Entries without a separator or with an empty side are skipped.
    pub fn parse_tokens(raw: &str) -> Self {
        let mut tokens = Vec::new();
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            match entry.split_once(':') {
                Some((token, user)) if !token.trim().is_empty() && !user.trim().is_empty() => {
                    tokens.push((token.trim().to_string(), user.trim().to_string()));
                }
                _ => warn!("Skipping malformed auth token entry"),
            }
        }
        Self { tokens }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "prompts-api".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            http: HttpConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `PROMPTS_`.
    /// For example: `PROMPTS_SERVER_NAME`, `PROMPTS_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("PROMPTS_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        config.http = HttpConfig::from_env();

        if let Ok(raw) = std::env::var("PROMPTS_AUTH_TOKENS") {
            config.auth = AuthConfig::parse_tokens(&raw);
            info!("Loaded {} bearer token(s) from environment", config.auth.tokens.len());
        } else {
            warn!(
                "PROMPTS_AUTH_TOKENS not set - no bearer tokens configured. \
                 Every authenticated route will answer 401."
            );
        }

        config
    }
}
