//! Startup configuration for the relay.
//!
//! Everything the relay needs is read once into `RelayConfig` and passed
//! explicitly to `AppState::new`. Nothing reads the environment after startup.

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;
use url::Url;

/// Upstream base URL. Required.
pub const BASE_URL_VAR: &str = "TODO_SERVICE_BASE_URL";

/// Listen address. Optional, defaults to [`DEFAULT_LISTEN_ADDR`].
pub const LISTEN_ADDR_VAR: &str = "TODO_RELAY_ADDR";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{var} must be an http or https URL, got scheme {scheme:?}")]
    UnsupportedScheme { var: &'static str, scheme: String },

    #[error("{var} must not carry a query or fragment")]
    UnexpectedQuery { var: &'static str },

    #[error("{var} is not a valid socket address: {source}")]
    InvalidListenAddr {
        var: &'static str,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Base URL of the upstream todo service; `/api/TodoItems...` is appended.
    pub base_url: Url,
    pub listen_addr: SocketAddr,
}

impl RelayConfig {
    pub fn new(base_url: Url, listen_addr: SocketAddr) -> Self {
        Self {
            base_url,
            listen_addr,
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_url = get(BASE_URL_VAR).ok_or(ConfigError::Missing(BASE_URL_VAR))?;
        let base_url = parse_base_url(raw_url.trim())?;

        let raw_addr = get(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidListenAddr {
                var: LISTEN_ADDR_VAR,
                source,
            })?;

        Ok(Self::new(base_url, listen_addr))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        var: BASE_URL_VAR,
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            var: BASE_URL_VAR,
            scheme: url.scheme().to_string(),
        });
    }
    // Upstream paths are appended to the base URL as text.
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::UnexpectedQuery { var: BASE_URL_VAR });
    }
    Ok(url)
}
