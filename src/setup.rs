// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone bootstrapping.
//!
//! [`SimpleClient::setup_domain`] brings a zone to a minimal serving state: the zone
//! exists, it has an SOA and NS set, optional custom records are in place and at least
//! one DNSSEC key exists. Every step is safe to repeat, so running the same setup
//! twice converges on the same zone.
//!
//! # Example
//!
//! ```yaml
//! domain: example.com
//! kind: Native
//! hostmaster: hostmaster@example.com
//! nameserver:
//!   - ns1.example.com
//!   - ns2.example.com
//! records:
//!   - name: www
//!     type: A
//!     content: 192.0.2.10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{
    RECORD_TYPE_NS, RECORD_TYPE_SOA, SETUP_RECORD_TTL_SECS, SETUP_SOA_EXPIRE_SECS,
    SETUP_SOA_MINIMUM_SECS, SETUP_SOA_REFRESH_SECS, SETUP_SOA_RETRY_SECS, SETUP_SOA_SERIAL,
};
use crate::endpoint::ZoneEndpoint;
use crate::errors::{PdnsError, Result};
use crate::names::{to_absolute, to_absolute_zone};
use crate::pdns::types::{CryptoKeyCreate, KeyType, ZoneKind};
use crate::records::SimpleRecord;
use crate::simple_client::SimpleClient;

/// Desired state of a freshly bootstrapped zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupOptions {
    /// Zone name
    pub domain: String,

    /// Zone kind used when the zone has to be created (defaults to `Native`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ZoneKind>,

    /// Authoritative nameservers; the first one becomes the SOA primary
    pub nameserver: Vec<String>,

    /// Contact mailbox, either `user@example.com` or `user.example.com`
    pub hostmaster: String,

    /// Additional records set after the SOA
    pub records: Vec<SimpleRecord>,
}

impl SetupOptions {
    pub fn new(
        domain: impl Into<String>,
        nameserver: Vec<String>,
        hostmaster: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            kind: None,
            nameserver,
            hostmaster: hostmaster.into(),
            records: Vec::new(),
        }
    }

    /// Load options from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the file cannot be read or parsed.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PdnsError::invalid_input(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&text)
    }

    /// Parse options from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the text is not a valid setup document.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text)
            .map_err(|e| PdnsError::invalid_input(format!("invalid setup options: {e}")))
    }

    /// Check required fields and return the canonical (zone, nameservers, hostmaster).
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the domain, nameserver list or hostmaster is missing.
    pub fn validate(&self) -> Result<(String, Vec<String>, String)> {
        if self.domain.trim().is_empty() {
            return Err(PdnsError::invalid_input("no domain specified"));
        }
        if self.nameserver.is_empty() {
            return Err(PdnsError::invalid_input(
                "the zone needs at least one nameserver",
            ));
        }
        if self.hostmaster.trim().is_empty() {
            return Err(PdnsError::invalid_input("no hostmaster provided"));
        }

        let domain = to_absolute_zone(&self.domain)?;
        let nameservers = self
            .nameserver
            .iter()
            .map(|ns| {
                let ns = ns.trim();
                if ns.is_empty() {
                    return Err(PdnsError::invalid_input("empty nameserver name"));
                }
                to_absolute(ns).ok_or_else(|| {
                    PdnsError::invalid_input(format!("'{ns}' is not a valid nameserver"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let hostmaster = to_absolute(&self.hostmaster.trim().replacen('@', ".", 1))
            .ok_or_else(|| PdnsError::invalid_input("invalid hostmaster"))?;

        Ok((domain, nameservers, hostmaster))
    }
}

impl<E: ZoneEndpoint> SimpleClient<E> {
    /// Bootstrap a zone.
    ///
    /// Steps, in order: create the zone if missing, set the apex SOA, set the custom
    /// records, set the apex NS set, create an active KSK if the zone has no keys.
    /// The first failure aborts the sequence; earlier steps are not rolled back.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` before any remote call when the options are incomplete,
    /// and propagates endpoint failures unmodified.
    pub async fn setup_domain(&self, options: &SetupOptions) -> Result<()> {
        let (domain, nameservers, hostmaster) = options.validate()?;

        if self.has_domain(&domain).await? {
            info!(zone = %domain, "Zone already exists");
        } else {
            self.create_domain(&domain, options.kind.unwrap_or_default())
                .await?;
        }

        let primary = nameservers.first().map(String::as_str).unwrap_or_default();
        let soa = format!(
            "{primary} {hostmaster} {SETUP_SOA_SERIAL} {SETUP_SOA_REFRESH_SECS} \
             {SETUP_SOA_RETRY_SECS} {SETUP_SOA_EXPIRE_SECS} {SETUP_SOA_MINIMUM_SECS}"
        );
        info!(zone = %domain, soa = %soa, "Setting SOA record");
        self.set_record(
            &domain,
            SimpleRecord::new(RECORD_TYPE_SOA, [soa]).with_ttl(SETUP_RECORD_TTL_SECS),
        )
        .await?;

        if !options.records.is_empty() {
            info!(zone = %domain, count = options.records.len(), "Setting custom records");
            self.set_records(&domain, options.records.clone()).await?;
        }

        info!(zone = %domain, nameservers = ?nameservers, "Setting NS records");
        self.set_record(
            &domain,
            SimpleRecord::new(RECORD_TYPE_NS, nameservers)
                .with_name(domain.clone())
                .with_ttl(SETUP_RECORD_TTL_SECS),
        )
        .await?;

        if self.endpoint().list_crypto_keys(&domain).await?.is_empty() {
            info!(zone = %domain, "Creating KSK");
            self.endpoint()
                .create_crypto_key(
                    &domain,
                    &CryptoKeyCreate {
                        keytype: KeyType::Ksk,
                        active: true,
                    },
                )
                .await?;
        }

        info!(zone = %domain, "Zone setup complete");
        Ok(())
    }
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod setup_tests;
