//! Environment-driven configuration, read once at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use reqwest::Url;
use thiserror::Error;

pub const AI_SERVER_URL: &str = "AI_SERVER_URL";
pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is not a valid http(s) URL: {value:?}")]
    InvalidUrl { key: &'static str, value: String },

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Where the AI server lives. Immutable once built.
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    base_url: String,
}

impl UpstreamConfig {
    /// Validates `base_url` and strips any trailing `/` so that paths can be
    /// appended directly.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim();

        let parsed = Url::parse(trimmed).map_err(|_| ConfigError::InvalidUrl {
            key: AI_SERVER_URL,
            value: raw.clone(),
        })?;
        // Paths get appended to the base, so it cannot carry a query or fragment.
        if !matches!(parsed.scheme(), "http" | "https")
            || parsed.host_str().is_none()
            || parsed.query().is_some()
            || parsed.fragment().is_some()
        {
            return Err(ConfigError::InvalidUrl {
                key: AI_SERVER_URL,
                value: raw,
            });
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let upstream = get(AI_SERVER_URL)
            .ok_or(ConfigError::Missing(AI_SERVER_URL))
            .and_then(UpstreamConfig::new)?;

        let host = match get(HOST) {
            Some(value) => value.trim().parse::<IpAddr>().map_err(|_| ConfigError::Invalid {
                key: HOST,
                value,
            })?,
            None => DEFAULT_HOST,
        };

        let port = match get(PORT) {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: PORT,
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            upstream,
        })
    }
}
