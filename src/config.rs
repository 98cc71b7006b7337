//! Process configuration

use std::net::SocketAddr;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::upstream::DEFAULT_UPSTREAM_URL;

pub const ADDR_VAR: &str = "HOLIDAYS_ADDR";
pub const UPSTREAM_URL_VAR: &str = "HOLIDAYS_UPSTREAM_URL";

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Address the HTTP server listens on
    #[serde(default = "default_addr")]
    pub addr: SocketAddr,

    /// Base URL of the Nager.Date compatible API
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_upstream_url() -> String {
    DEFAULT_UPSTREAM_URL.to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let addr = match lookup(ADDR_VAR) {
            Some(value) => value
                .parse()
                .with_context(|| format!("Invalid {ADDR_VAR}: {value}"))?,
            None => default_addr(),
        };

        let upstream_url = lookup(UPSTREAM_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_upstream_url);

        Ok(Self { addr, upstream_url })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            upstream_url: default_upstream_url(),
        }
    }
}
