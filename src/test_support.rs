// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! In-memory [`ZoneEndpoint`] used by unit tests.
//!
//! `MemoryEndpoint` keeps zones and keys behind a mutex, applies patches the way
//! PowerDNS does (REPLACE overwrites the RRSet, DELETE drops it), records every call
//! in order and can be told to fail a given operation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use crate::endpoint::ZoneEndpoint;
use crate::errors::{PdnsError, Result};
use crate::matching::is_equal;
use crate::pdns::types::{
    Comment, CryptoKey, CryptoKeyCreate, RRSet, RRSetChange, ReadZoneOptions, Zone, ZoneCreate,
};

/// One recorded endpoint call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListZones(Option<String>),
    ReadZone(String, ReadZoneOptions),
    PatchZone(String, Vec<RRSetChange>),
    CreateZone(ZoneCreate),
    DeleteZone(String),
    ListCryptoKeys(String),
    CreateCryptoKey(String, CryptoKeyCreate),
}

impl Call {
    /// Short operation name, as used by [`MemoryEndpoint::fail_on`].
    pub fn op(&self) -> &'static str {
        match self {
            Self::ListZones(_) => "list_zones",
            Self::ReadZone(..) => "read_zone",
            Self::PatchZone(..) => "patch_zone",
            Self::CreateZone(_) => "create_zone",
            Self::DeleteZone(_) => "delete_zone",
            Self::ListCryptoKeys(_) => "list_crypto_keys",
            Self::CreateCryptoKey(..) => "create_crypto_key",
        }
    }
}

#[derive(Default)]
struct State {
    zones: BTreeMap<String, Zone>,
    keys: BTreeMap<String, Vec<CryptoKey>>,
    calls: Vec<Call>,
    failures: HashMap<&'static str, PdnsError>,
}

#[derive(Default)]
pub struct MemoryEndpoint {
    state: Mutex<State>,
}

pub fn not_found(zone: &str) -> PdnsError {
    PdnsError::RemoteRejected {
        method: "GET".to_string(),
        url: format!("memory://zones/{zone}"),
        status: 404,
        message: "Not Found".to_string(),
        errors: Vec::new(),
    }
}

pub fn rrset(name: &str, record_type: &str, ttl: u32, contents: &[&str]) -> RRSet {
    RRSet {
        name: name.to_string(),
        record_type: record_type.to_string(),
        ttl: Some(ttl),
        records: contents
            .iter()
            .map(|c| crate::pdns::types::RecordEntry::new(*c))
            .collect(),
        comments: Vec::new(),
    }
}

pub fn with_comments(mut rrset: RRSet, comments: &[&str]) -> RRSet {
    rrset.comments = comments.iter().map(|c| Comment::new(*c)).collect();
    rrset
}

impl MemoryEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpoint holding one zone with the given RRSets.
    pub fn with_zone(zone: &str, rrsets: Vec<RRSet>) -> Self {
        let endpoint = Self::new();
        endpoint.insert_zone(zone, rrsets);
        endpoint
    }

    pub fn insert_zone(&self, zone: &str, rrsets: Vec<RRSet>) {
        let mut state = self.state.lock().unwrap();
        state.zones.insert(
            zone.to_string(),
            Zone {
                id: zone.to_string(),
                name: zone.to_string(),
                rrsets,
                ..Zone::default()
            },
        );
    }

    pub fn insert_key(&self, zone: &str, key: CryptoKey) {
        let mut state = self.state.lock().unwrap();
        state.keys.entry(zone.to_string()).or_default().push(key);
    }

    /// Make every later call of `op` fail with `error`.
    pub fn fail_on(&self, op: &'static str, error: PdnsError) {
        self.state.lock().unwrap().failures.insert(op, error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn ops(&self) -> Vec<&'static str> {
        self.calls().iter().map(Call::op).collect()
    }

    pub fn patches(&self) -> Vec<Vec<RRSetChange>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::PatchZone(_, changes) => Some(changes),
                _ => None,
            })
            .collect()
    }

    pub fn rrsets(&self, zone: &str) -> Vec<RRSet> {
        self.state
            .lock()
            .unwrap()
            .zones
            .get(zone)
            .map(|z| z.rrsets.clone())
            .unwrap_or_default()
    }

    pub fn keys(&self, zone: &str) -> Vec<CryptoKey> {
        self.state
            .lock()
            .unwrap()
            .keys
            .get(zone)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, call: Call) -> Result<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        let op = call.op();
        state.calls.push(call);
        if let Some(error) = state.failures.get(op) {
            return Err(error.clone());
        }
        Ok(state)
    }
}

#[async_trait::async_trait]
impl ZoneEndpoint for MemoryEndpoint {
    async fn list_zones(&self, zone_filter: Option<&str>) -> Result<Vec<Zone>> {
        let state = self.record(Call::ListZones(zone_filter.map(str::to_string)))?;
        Ok(state
            .zones
            .values()
            .filter(|z| zone_filter.is_none_or(|f| is_equal(Some(&z.name), Some(f))))
            .map(|z| Zone {
                rrsets: Vec::new(),
                ..z.clone()
            })
            .collect())
    }

    async fn read_zone(&self, zone_name: &str, options: &ReadZoneOptions) -> Result<Zone> {
        let state = self.record(Call::ReadZone(zone_name.to_string(), options.clone()))?;
        let zone = state.zones.get(zone_name).ok_or_else(|| not_found(zone_name))?;

        let rrsets = if options.include_rrsets {
            zone.rrsets
                .iter()
                .filter(|r| {
                    options
                        .owner_filter
                        .as_deref()
                        .is_none_or(|owner| is_equal(Some(&r.name), Some(owner)))
                })
                .filter(|r| {
                    options.owner_filter.is_none()
                        || options
                            .type_filter
                            .as_deref()
                            .is_none_or(|t| is_equal(Some(&r.record_type), Some(t)))
                })
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        Ok(Zone {
            rrsets,
            ..zone.clone()
        })
    }

    async fn patch_zone(&self, zone_name: &str, changes: &[RRSetChange]) -> Result<()> {
        let mut state = self.record(Call::PatchZone(zone_name.to_string(), changes.to_vec()))?;
        let zone = state
            .zones
            .get_mut(zone_name)
            .ok_or_else(|| not_found(zone_name))?;

        for change in changes {
            zone.rrsets.retain(|r| {
                !(is_equal(Some(&r.name), Some(change.name()))
                    && is_equal(Some(&r.record_type), Some(change.record_type())))
            });
            if let RRSetChange::Replace {
                name,
                record_type,
                ttl,
                records,
                comments,
            } = change
            {
                zone.rrsets.push(RRSet {
                    name: name.clone(),
                    record_type: record_type.clone(),
                    ttl: Some(*ttl),
                    records: records.clone(),
                    comments: comments.clone(),
                });
            }
        }
        Ok(())
    }

    async fn create_zone(&self, zone: &ZoneCreate) -> Result<Zone> {
        let mut state = self.record(Call::CreateZone(zone.clone()))?;
        if state.zones.contains_key(&zone.name) {
            return Err(PdnsError::RemoteRejected {
                method: "POST".to_string(),
                url: "memory://zones".to_string(),
                status: 409,
                message: "Conflict".to_string(),
                errors: Vec::new(),
            });
        }
        let created = Zone {
            id: zone.name.clone(),
            name: zone.name.clone(),
            kind: zone.kind,
            ..Zone::default()
        };
        state.zones.insert(zone.name.clone(), created.clone());
        Ok(created)
    }

    async fn delete_zone(&self, zone_name: &str) -> Result<()> {
        let mut state = self.record(Call::DeleteZone(zone_name.to_string()))?;
        state
            .zones
            .remove(zone_name)
            .map(|_| ())
            .ok_or_else(|| not_found(zone_name))
    }

    async fn list_crypto_keys(&self, zone_name: &str) -> Result<Vec<CryptoKey>> {
        let state = self.record(Call::ListCryptoKeys(zone_name.to_string()))?;
        Ok(state.keys.get(zone_name).cloned().unwrap_or_default())
    }

    async fn create_crypto_key(&self, zone_name: &str, key: &CryptoKeyCreate) -> Result<CryptoKey> {
        let mut state = self.record(Call::CreateCryptoKey(zone_name.to_string(), *key))?;
        let keys = state.keys.entry(zone_name.to_string()).or_default();
        let created = CryptoKey {
            id: keys.len() as u64 + 1,
            keytype: key.keytype,
            active: key.active,
            published: true,
            dnskey: None,
            ds: Vec::new(),
            algorithm: None,
            bits: None,
        };
        keys.push(created.clone());
        Ok(created)
    }
}
