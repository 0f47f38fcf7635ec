// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Wire types of the PowerDNS Authoritative HTTP API.
//!
//! Responses are decoded into these structs at the HTTP boundary, so the
//! reconciliation engine never handles untyped JSON.

use serde::{Deserialize, Serialize};

/// Zone kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Replicated by the database backend
    #[default]
    Native,
    /// Primary zone, sends NOTIFY to secondaries
    Master,
    /// Secondary zone, retrieved from its masters
    Slave,
    /// Forwarded zone
    Forwarded,
    /// Any kind this client does not know about
    #[serde(other)]
    Unknown,
}

impl std::str::FromStr for ZoneKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "master" | "primary" => Ok(Self::Master),
            "slave" | "secondary" => Ok(Self::Slave),
            "forwarded" => Ok(Self::Forwarded),
            _ => Err(format!("unknown zone kind: {s}")),
        }
    }
}

/// A zone as returned by the zone and zone list endpoints.
///
/// The list endpoint omits `rrsets`; every field except `name` defaults when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    /// Opaque zone id assigned by the server
    pub id: String,
    /// Absolute zone name (e.g. "example.com.")
    pub name: String,
    /// Zone kind
    pub kind: ZoneKind,
    /// API endpoint of this zone
    pub url: String,
    /// SOA serial
    pub serial: u32,
    /// SOA serial notifications have been sent out for
    pub notified_serial: u32,
    /// SOA serial as seen in query responses
    pub edited_serial: u32,
    /// Masters of a secondary zone
    pub masters: Vec<String>,
    /// Whether the zone is DNSSEC signed
    pub dnssec: bool,
    /// NSEC3PARAM record, if any
    pub nsec3param: Option<String>,
    /// Whether NSEC3 narrow mode is used
    pub nsec3narrow: bool,
    /// Whether the zone is pre-signed
    pub presigned: bool,
    /// SOA-EDIT metadata item
    pub soa_edit: Option<String>,
    /// SOA-EDIT-API metadata item
    pub soa_edit_api: Option<String>,
    /// Whether the zone is rectified on data changes via the API
    pub api_rectify: bool,
    /// Account owning the zone, as defined by local policy
    pub account: Option<String>,
    /// Record sets (zone endpoint only)
    pub rrsets: Vec<RRSet>,
}

/// A resource-record set as stored by PowerDNS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RRSet {
    /// Absolute owner name
    pub name: String,
    /// Record type
    #[serde(rename = "type")]
    pub record_type: String,
    /// TTL in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Record values
    #[serde(default)]
    pub records: Vec<RecordEntry>,
    /// Comments attached to the record set
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// One value of an RRSet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    /// Record content in presentation format
    pub content: String,
    /// Whether the record is disabled
    #[serde(default)]
    pub disabled: bool,
}

impl RecordEntry {
    /// An enabled record with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            disabled: false,
        }
    }
}

/// A comment attached to an RRSet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment text
    pub content: String,
    /// Account that added the comment
    #[serde(default)]
    pub account: String,
    /// Last modification timestamp, set by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<u64>,
}

impl Comment {
    /// A comment with the given text and no account.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            account: String::new(),
            modified_at: None,
        }
    }
}

/// Tag of an [`RRSetChange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    /// Overwrite all values and comments of the key
    Replace,
    /// Remove the key with all values and comments
    Delete,
}

/// One entry of a zone PATCH.
///
/// A `Delete` carries only the key, so it can never send a TTL, records or comments.
/// A `Replace` with empty `records` deletes every value of the key; with empty
/// `comments` it deletes only the comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "changetype", rename_all = "UPPERCASE")]
pub enum RRSetChange {
    /// Replace the RRSet
    Replace {
        /// Absolute owner name
        name: String,
        /// Record type
        #[serde(rename = "type")]
        record_type: String,
        /// TTL in seconds
        ttl: u32,
        /// New values
        records: Vec<RecordEntry>,
        /// New comments
        comments: Vec<Comment>,
    },
    /// Delete the RRSet
    Delete {
        /// Absolute owner name
        name: String,
        /// Record type
        #[serde(rename = "type")]
        record_type: String,
    },
}

impl RRSetChange {
    /// Owner name of the change.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Replace { name, .. } | Self::Delete { name, .. } => name,
        }
    }

    /// Record type of the change.
    #[must_use]
    pub fn record_type(&self) -> &str {
        match self {
            Self::Replace { record_type, .. } | Self::Delete { record_type, .. } => record_type,
        }
    }

    /// Change tag.
    #[must_use]
    pub fn changetype(&self) -> ChangeType {
        match self {
            Self::Replace { .. } => ChangeType::Replace,
            Self::Delete { .. } => ChangeType::Delete,
        }
    }
}

/// Body of a zone PATCH request.
#[derive(Debug, Clone, Serialize)]
pub struct ZonePatch<'a> {
    /// Changes applied atomically
    pub rrsets: &'a [RRSetChange],
}

/// Body of a zone creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCreate {
    /// Zone name; sent in absolute form
    pub name: String,
    /// Zone kind
    pub kind: ZoneKind,
    /// Nameservers for the initial NS RRSet
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nameservers: Vec<String>,
    /// Masters of a secondary zone
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub masters: Vec<String>,
    /// Whether to sign the zone on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dnssec: Option<bool>,
}

impl ZoneCreate {
    /// A zone of the given kind with no initial data.
    pub fn new(name: impl Into<String>, kind: ZoneKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nameservers: Vec::new(),
            masters: Vec::new(),
            dnssec: None,
        }
    }
}

/// DNSSEC key role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    /// Key-signing key
    Ksk,
    /// Zone-signing key
    Zsk,
    /// Combined signing key
    Csk,
}

/// A DNSSEC key of a zone (private key omitted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoKey {
    /// Internal identifier
    pub id: u64,
    /// Key role
    pub keytype: KeyType,
    /// Whether the key is in active use
    #[serde(default)]
    pub active: bool,
    /// Whether the DNSKEY record is published
    #[serde(default)]
    pub published: bool,
    /// DNSKEY record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dnskey: Option<String>,
    /// DS records
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ds: Vec<String>,
    /// Algorithm mnemonic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Key size in bits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits: Option<u32>,
}

/// Body of a key creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoKeyCreate {
    /// Key role
    pub keytype: KeyType,
    /// Whether the key is active right away
    pub active: bool,
}

/// Error body returned by PowerDNS on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Human readable error message
    #[serde(default)]
    pub error: String,
    /// Individual errors encountered during processing
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Options for reading one zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadZoneOptions {
    /// Whether to include the RRSets
    pub include_rrsets: bool,
    /// Limit RRSets to this owner name
    pub owner_filter: Option<String>,
    /// Limit RRSets to this type; only honoured together with `owner_filter`
    pub type_filter: Option<String>,
}

impl ReadZoneOptions {
    /// Read the zone with every RRSet.
    #[must_use]
    pub fn full() -> Self {
        Self {
            include_rrsets: true,
            ..Self::default()
        }
    }

    /// Read zone metadata only.
    #[must_use]
    pub fn without_rrsets() -> Self {
        Self::default()
    }

    /// Read only the RRSets of one owner name and type.
    #[must_use]
    pub fn filtered(owner: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            include_rrsets: true,
            owner_filter: Some(owner.into()),
            type_filter: Some(record_type.into()),
        }
    }

    /// Query parameters for the zone endpoint.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("rrsets", self.include_rrsets.to_string())];
        if let Some(owner) = &self.owner_filter {
            pairs.push(("rrset_name", owner.clone()));
            if let Some(record_type) = &self.type_filter {
                pairs.push(("rrset_type", record_type.clone()));
            }
        }
        pairs
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
