//! Configuration module for the portfolio backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

use crate::errors::AppError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./data/portfolio.sqlite";
pub const MEMORY_DATABASE_URL: &str = "memory://";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";

/// Where documents are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// SQLite database addressed by a `sqlite://` connection string
    Sqlite(String),
    /// Process-local store, lost on exit
    Memory,
}

impl StoreLocation {
    fn parse(url: &str) -> Result<Self, AppError> {
        if url == MEMORY_DATABASE_URL {
            Ok(StoreLocation::Memory)
        } else if url.starts_with("sqlite:") {
            Ok(StoreLocation::Sqlite(url.to_string()))
        } else {
            Err(AppError::Config(format!(
                "Unsupported database URL '{}': expected sqlite:// or {}",
                url, MEMORY_DATABASE_URL
            )))
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store connection
    pub store: StoreLocation,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    /// Populate empty collections with the built-in content on startup
    pub seed: bool,
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("PORTFOLIO_DATABASE_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let store = StoreLocation::parse(&database_url)?;

        let bind_addr_raw =
            lookup("PORTFOLIO_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw.parse().map_err(|_| {
            AppError::Config(format!("Invalid PORTFOLIO_BIND_ADDR '{}'", bind_addr_raw))
        })?;

        let log_level = lookup("PORTFOLIO_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_format = match lookup("PORTFOLIO_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "Invalid PORTFOLIO_LOG_FORMAT '{}': expected text or json",
                    other
                )))
            }
        };

        let seed = match lookup("PORTFOLIO_SEED").as_deref() {
            None => true,
            Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off"),
        };

        Ok(Self {
            store,
            bind_addr,
            log_level,
            log_format,
            seed,
        })
    }
}
