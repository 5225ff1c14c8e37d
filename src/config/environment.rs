// ABOUTME: Environment configuration for the planner server: bind address, logging, CORS, timeouts
// ABOUTME: Parses environment variables into a typed ServerConfig with lenient enum fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::info;

/// Default bind host
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Pre-production
    Staging,
    /// Production
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Staging => write!(f, "staging"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origins; `["*"]` allows any
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Whether every origin is allowed
    #[must_use]
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_owned()],
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub http_host: IpAddr,
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Server version (from Cargo.toml)
    pub server_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: IpAddr::from([127, 0, 0, 1]),
            http_port: DEFAULT_HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            cors: CorsConfig::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_HOST`, `HTTP_PORT`, or
    /// `REQUEST_TIMEOUT_SECS` is set to an unparseable value
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_host: env_var_or("HTTP_HOST", DEFAULT_HTTP_HOST)
                .parse()
                .context("Invalid HTTP_HOST value")?,
            http_port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or("CORS_ALLOWED_ORIGINS", "*")),
            },
            request_timeout_secs: env_var_or(
                "REQUEST_TIMEOUT_SECS",
                &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid REQUEST_TIMEOUT_SECS value")?,
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        };

        Ok(config)
    }

    /// Socket address to bind
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }

    /// Per-request timeout
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pickleball Planner Configuration:\n\
             - Version: {}\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s",
            self.server_version,
            self.bind_addr(),
            self.environment,
            self.log_level,
            self.cors.allowed_origins.join(", "),
            self.request_timeout_secs,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://localhost:3000, https://app.example.com,"),
            vec!["http://localhost:3000", "https://app.example.com"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
        assert_eq!(LogLevel::from_str_or_default("loud"), LogLevel::Info);
        assert_eq!(LogLevel::Warn.to_tracing_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Staging
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("moon"),
            Environment::Development
        );
    }

    #[test]
    fn test_default_config_summary() {
        let config = ServerConfig::default();
        assert!(config.cors.allows_any());
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8081");

        let summary = config.summary();
        assert!(summary.contains("Bind: 127.0.0.1:8081"));
        assert!(summary.contains("Request Timeout: 30s"));
    }
}
