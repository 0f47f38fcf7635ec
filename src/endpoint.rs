// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The zone endpoint seam.
//!
//! The reconciliation engine only needs a handful of zone operations. They are
//! expressed as a trait so the engine can be driven by the HTTP client in
//! [`crate::pdns`] or by any other implementation (an in-memory fake in tests).

use crate::errors::Result;
use crate::pdns::types::{CryptoKey, CryptoKeyCreate, RRSetChange, ReadZoneOptions, Zone, ZoneCreate};

/// Zone operations consumed by the simple-record engine.
///
/// Implementations take zone names in any form and are expected to canonicalize them.
/// Names inside [`RRSetChange`] and [`ZoneCreate`] are already absolute when the
/// engine calls in.
#[async_trait::async_trait]
pub trait ZoneEndpoint: Send + Sync {
    /// List zones, optionally restricted to one zone name.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint refuses the request or cannot be reached.
    async fn list_zones(&self, zone_filter: Option<&str>) -> Result<Vec<Zone>>;

    /// Read one zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the zone does not exist or the endpoint cannot be reached.
    async fn read_zone(&self, zone_name: &str, options: &ReadZoneOptions) -> Result<Zone>;

    /// Apply RRSet changes to a zone atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint refuses any change; nothing is applied then.
    async fn patch_zone(&self, zone_name: &str, changes: &[RRSetChange]) -> Result<()>;

    /// Create a zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the zone already exists or the data is invalid.
    async fn create_zone(&self, zone: &ZoneCreate) -> Result<Zone>;

    /// Delete a zone with all its RRSets and metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the zone does not exist or the endpoint cannot be reached.
    async fn delete_zone(&self, zone_name: &str) -> Result<()>;

    /// List the DNSSEC keys of a zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the zone does not exist or the endpoint cannot be reached.
    async fn list_crypto_keys(&self, zone_name: &str) -> Result<Vec<CryptoKey>>;

    /// Create a DNSSEC key for a zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint refuses the key or cannot be reached.
    async fn create_crypto_key(&self, zone_name: &str, key: &CryptoKeyCreate) -> Result<CryptoKey>;
}
