//! Configuration for dappnode
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

use crate::error::{DappError, Result};

/// Environment variable holding the rollup server base URL
pub const ROLLUP_SERVER_ENV: &str = "ROLLUP_HTTP_SERVER_URL";

/// Main configuration for a dappnode instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Rollup Server Configuration
    // -------------------------------------------------------------------------
    /// Base URL of the rollup server, without trailing slash.
    /// Endpoints are derived from it:
    ///   {rollup_server_url}/finish
    ///   {rollup_server_url}/notice
    ///   {rollup_server_url}/report
    pub rollup_server_url: String,

    /// Per-request timeout (milliseconds). 0 blocks indefinitely.
    pub request_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Loop Configuration
    // -------------------------------------------------------------------------
    /// Sleep after a "no pending request" answer (milliseconds). 0 busy-polls.
    pub idle_backoff_ms: u64,

    /// Stop after this many loop iterations. `None` runs forever.
    pub max_iterations: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rollup_server_url: "http://127.0.0.1:5004".to_string(),
            request_timeout_ms: 0,
            idle_backoff_ms: 0,
            max_iterations: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default config with the server URL taken from `ROLLUP_HTTP_SERVER_URL`
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(ROLLUP_SERVER_ENV)
            .map_err(|_| DappError::Config(format!("{} is not set", ROLLUP_SERVER_ENV)))?;
        let config = Self::builder().rollup_server_url(url).build();
        config.validate()?;
        Ok(config)
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        let url = self.rollup_server_url.trim();
        if url.is_empty() {
            return Err(DappError::Config("rollup server URL is empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DappError::Config(format!(
                "rollup server URL must be http(s): {}",
                url
            )));
        }
        Ok(())
    }

    /// Request timeout, if any
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }

    /// Idle backoff, if any
    pub fn idle_backoff(&self) -> Option<Duration> {
        (self.idle_backoff_ms > 0).then(|| Duration::from_millis(self.idle_backoff_ms))
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the rollup server base URL (a trailing slash is dropped)
    pub fn rollup_server_url(mut self, url: impl Into<String>) -> Self {
        self.config.rollup_server_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout (in milliseconds, 0 = none)
    pub fn request_timeout_ms(mut self, ms: u64) -> Self {
        self.config.request_timeout_ms = ms;
        self
    }

    /// Set the idle backoff (in milliseconds, 0 = busy poll)
    pub fn idle_backoff_ms(mut self, ms: u64) -> Self {
        self.config.idle_backoff_ms = ms;
        self
    }

    /// Stop the loop after `count` iterations
    pub fn max_iterations(mut self, count: u64) -> Self {
        self.config.max_iterations = Some(count);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
