// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Connection options for the PowerDNS API.
//!
//! Options can be built in code, read from the environment with
//! [`ClientOptions::from_env`], or filled from CLI flags (see `main.rs`).
//!
//! # Example
//!
//! ```rust
//! use pdns_simple::config::ClientOptions;
//! use std::time::Duration;
//!
//! let options = ClientOptions::new("127.0.0.1:8081", "secret")
//!     .with_server_id("localhost")
//!     .with_timeout(Duration::from_secs(5));
//!
//! assert!(options.validate().is_ok());
//! ```

use std::time::Duration;

use url::Url;

use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SERVER_ID, ENV_API_KEY, ENV_API_URL, ENV_SERVER_ID,
    ENV_TIMEOUT_SECS,
};
use crate::errors::{PdnsError, Result};

/// Options needed to talk to one PowerDNS API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Base URL of the API; `http://` is assumed when no scheme is given
    pub base_url: String,
    /// Static API key sent in the `X-API-Key` header
    pub api_key: String,
    /// Server id (almost always `localhost`)
    pub server_id: String,
    /// Timeout applied to every HTTP request
    pub timeout: Duration,
}

impl ClientOptions {
    /// Options with the default server id and timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            server_id: DEFAULT_SERVER_ID.to_string(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }

    /// Select another server id.
    #[must_use]
    pub fn with_server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = server_id.into();
        self
    }

    /// Set the HTTP request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read options from `PDNS_API_URL`, `PDNS_API_KEY`, `PDNS_SERVER_ID` and
    /// `PDNS_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the URL or key is missing, the timeout is not a
    /// number, or the resulting options fail [`ClientOptions::validate`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build options from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ClientOptions::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_API_URL)
            .ok_or_else(|| PdnsError::invalid_input(format!("{ENV_API_URL} is not set")))?;
        let api_key = lookup(ENV_API_KEY)
            .ok_or_else(|| PdnsError::invalid_input(format!("{ENV_API_KEY} is not set")))?;

        let mut options = Self::new(base_url, api_key);

        if let Some(server_id) = lookup(ENV_SERVER_ID).filter(|s| !s.trim().is_empty()) {
            options.server_id = server_id;
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            let secs = timeout.trim().parse::<u64>().map_err(|e| {
                PdnsError::invalid_input(format!("{ENV_TIMEOUT_SECS}='{timeout}' is invalid: {e}"))
            })?;
            options.timeout = Duration::from_secs(secs);
        }

        options.validate()?;
        Ok(options)
    }

    /// Check that the options can produce a working client.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unparsable base URL, an empty API key, an empty
    /// server id or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        self.parsed_base_url()?;

        if self.api_key.trim().is_empty() {
            return Err(PdnsError::invalid_input("API key must not be empty"));
        }
        if self.server_id.trim().is_empty() {
            return Err(PdnsError::invalid_input("server id must not be empty"));
        }
        if self.timeout.is_zero() {
            return Err(PdnsError::invalid_input("timeout must be greater than zero"));
        }
        Ok(())
    }

    /// The base URL normalized and parsed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the URL cannot be parsed or cannot carry a path.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let normalized = build_api_url(&self.base_url);
        let url = Url::parse(&normalized).map_err(|e| {
            PdnsError::invalid_input(format!("invalid API URL '{}': {e}", self.base_url))
        })?;

        if url.cannot_be_a_base() {
            return Err(PdnsError::invalid_input(format!(
                "invalid API URL '{}': cannot carry a path",
                self.base_url
            )));
        }
        Ok(url)
    }
}

/// Build the API base URL from a server address.
///
/// Converts "pdns.example.com:8081" to `<http://pdns.example.com:8081>` and strips
/// trailing slashes; URLs that already carry a scheme keep it.
#[must_use]
pub fn build_api_url(server: &str) -> String {
    let server = server.trim();
    if server.starts_with("http://") || server.starts_with("https://") {
        server.trim_end_matches('/').to_string()
    } else {
        format!("http://{}", server.trim_end_matches('/'))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
