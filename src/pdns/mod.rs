// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! PowerDNS management via the Authoritative HTTP API.
//!
//! This module provides the HTTP implementation of [`ZoneEndpoint`]. It handles:
//!
//! - Listing, reading, creating and deleting zones
//! - Patching RRSets with REPLACE/DELETE changes
//! - Listing and creating DNSSEC keys
//!
//! # Architecture
//!
//! The `PowerDnsClient` wraps one shared `reqwest` client and the coordinates of a
//! PowerDNS server (base URL, API key, server id). Every call is a single HTTP
//! request authenticated with the `X-API-Key` header; failures are classified into
//! [`crate::errors::PdnsError`] and returned as-is.
//!
//! # Example
//!
//! ```rust,no_run
//! use pdns_simple::config::ClientOptions;
//! use pdns_simple::endpoint::ZoneEndpoint;
//! use pdns_simple::pdns::PowerDnsClient;
//!
//! # async fn example() -> pdns_simple::errors::Result<()> {
//! let client = PowerDnsClient::new(&ClientOptions::new("127.0.0.1:8081", "secret"))?;
//!
//! for zone in client.list_zones(None).await? {
//!     println!("{}", zone.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod types;
pub(crate) mod zone_ops;

use std::sync::Arc;

use reqwest::Client as HttpClient;
use url::Url;

use crate::config::ClientOptions;
use crate::endpoint::ZoneEndpoint;
use crate::errors::{PdnsError, Result};
use types::{CryptoKey, CryptoKeyCreate, RRSetChange, ReadZoneOptions, Zone, ZoneCreate};
use zone_ops::ApiTarget;

/// HTTP client for one PowerDNS server.
///
/// Cloning is cheap: the connection pool and API key are shared.
#[derive(Debug, Clone)]
pub struct PowerDnsClient {
    /// HTTP client for API requests
    client: Arc<HttpClient>,
    /// API key for authentication
    api_key: Arc<String>,
    /// Normalized base URL
    base_url: Url,
    /// Selected server id
    server_id: String,
}

impl PowerDnsClient {
    /// Create a client from validated options.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the options are invalid or the HTTP client cannot be
    /// built.
    pub fn new(options: &ClientOptions) -> Result<Self> {
        options.validate()?;

        let client = HttpClient::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| PdnsError::invalid_input(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client: Arc::new(client),
            api_key: Arc::new(options.api_key.clone()),
            base_url: options.parsed_base_url()?,
            server_id: options.server_id.clone(),
        })
    }

    /// A client bound to another server id, sharing this client's connection pool.
    #[must_use]
    pub fn use_server(&self, server_id: &str) -> Self {
        if self.server_id == server_id {
            return self.clone();
        }
        Self {
            server_id: server_id.to_string(),
            ..self.clone()
        }
    }

    /// The selected server id.
    #[must_use]
    pub fn server_id(&self) -> &str {
        &self.server_id
    }

    /// The normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn target(&self) -> ApiTarget<'_> {
        ApiTarget {
            client: &self.client,
            api_key: &self.api_key,
            base_url: &self.base_url,
            server_id: &self.server_id,
        }
    }
}

#[async_trait::async_trait]
impl ZoneEndpoint for PowerDnsClient {
    async fn list_zones(&self, zone_filter: Option<&str>) -> Result<Vec<Zone>> {
        zone_ops::list_zones(&self.target(), zone_filter).await
    }

    async fn read_zone(&self, zone_name: &str, options: &ReadZoneOptions) -> Result<Zone> {
        zone_ops::get_zone(&self.target(), zone_name, options).await
    }

    async fn patch_zone(&self, zone_name: &str, changes: &[RRSetChange]) -> Result<()> {
        zone_ops::patch_zone(&self.target(), zone_name, changes).await
    }

    async fn create_zone(&self, zone: &ZoneCreate) -> Result<Zone> {
        zone_ops::create_zone(&self.target(), zone).await
    }

    async fn delete_zone(&self, zone_name: &str) -> Result<()> {
        zone_ops::delete_zone(&self.target(), zone_name).await
    }

    async fn list_crypto_keys(&self, zone_name: &str) -> Result<Vec<CryptoKey>> {
        zone_ops::list_crypto_keys(&self.target(), zone_name).await
    }

    async fn create_crypto_key(&self, zone_name: &str, key: &CryptoKeyCreate) -> Result<CryptoKey> {
        zone_ops::create_crypto_key(&self.target(), zone_name, key).await
    }
}
