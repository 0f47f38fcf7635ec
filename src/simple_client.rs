// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Simple-record reconciliation.
//!
//! PowerDNS only accepts whole-RRSet REPLACE and DELETE operations. [`SimpleClient`]
//! lets callers think in individual values instead ("add this A record", "remove that
//! MX value") and turns each request into a read-modify-write cycle:
//!
//! 1. read the RRSets the request touches
//! 2. fold the request into that snapshot
//! 3. send one patch carrying every resulting REPLACE/DELETE
//!
//! # Concurrency
//!
//! There is no locking or versioning. Two writers working on the same RRSet can both
//! read the same snapshot, and the second patch then overwrites the first one's
//! change. Serialize writers per zone if that matters.
//!
//! # Example
//!
//! ```rust,no_run
//! use pdns_simple::config::ClientOptions;
//! use pdns_simple::pdns::PowerDnsClient;
//! use pdns_simple::records::SimpleRecord;
//! use pdns_simple::simple_client::SimpleClient;
//!
//! # async fn example() -> pdns_simple::errors::Result<()> {
//! let endpoint = PowerDnsClient::new(&ClientOptions::new("127.0.0.1:8081", "secret"))?;
//! let client = SimpleClient::new(endpoint);
//!
//! client
//!     .add_record("example.com", SimpleRecord::new("A", ["192.0.2.10"]).with_name("www"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

use tracing::{debug, info};

use crate::constants::DEFAULT_RECORD_TTL_SECS;
use crate::endpoint::ZoneEndpoint;
use crate::errors::Result;
use crate::matching::{array_includes, is_equal, matches};
use crate::merge::{merge_simple_records, position_simple_record};
use crate::names::{append_to_zone, to_absolute_zone};
use crate::pdns::types::{
    ChangeType, Comment, RRSet, RRSetChange, ReadZoneOptions, RecordEntry, Zone, ZoneCreate,
    ZoneKind,
};
use crate::records::{RecordFilter, SimpleRecord};

/// Value-level record management on top of a [`ZoneEndpoint`].
#[derive(Debug, Clone)]
pub struct SimpleClient<E> {
    endpoint: E,
}

impl<E: ZoneEndpoint> SimpleClient<E> {
    pub fn new(endpoint: E) -> Self {
        Self { endpoint }
    }

    /// The underlying endpoint.
    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    // ------------------------------------------------------------------
    // Zones
    // ------------------------------------------------------------------

    /// List every zone on the server, without RRSets.
    ///
    /// # Errors
    ///
    /// Propagates endpoint failures.
    pub async fn get_domains(&self) -> Result<Vec<Zone>> {
        self.endpoint.list_zones(None).await
    }

    /// Whether the server hosts `zone`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unusable zone name and propagates endpoint failures.
    pub async fn has_domain(&self, zone: &str) -> Result<bool> {
        let zone_id = to_absolute_zone(zone)?;
        let zones = self.endpoint.list_zones(Some(&zone_id)).await?;
        Ok(zones.iter().any(|z| is_equal(Some(&z.name), Some(&zone_id))))
    }

    /// Read zone metadata without RRSets.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unusable zone name and propagates endpoint failures.
    pub async fn get_domain(&self, zone: &str) -> Result<Zone> {
        let zone_id = to_absolute_zone(zone)?;
        self.endpoint
            .read_zone(&zone_id, &ReadZoneOptions::without_rrsets())
            .await
    }

    /// Create a zone of the given kind.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unusable zone name and propagates endpoint failures.
    pub async fn create_domain(&self, zone: &str, kind: ZoneKind) -> Result<Zone> {
        let zone_id = to_absolute_zone(zone)?;
        info!(zone = %zone_id, kind = ?kind, "Creating zone");
        self.endpoint
            .create_zone(&ZoneCreate::new(zone_id, kind))
            .await
    }

    /// Delete a zone with all of its RRSets.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unusable zone name and propagates endpoint failures.
    pub async fn delete_domain(&self, zone: &str) -> Result<()> {
        let zone_id = to_absolute_zone(zone)?;
        info!(zone = %zone_id, "Deleting zone");
        self.endpoint.delete_zone(&zone_id).await
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Every RRSet of the zone as simple records.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unusable zone name and propagates endpoint failures.
    pub async fn get_records(&self, zone: &str) -> Result<Vec<SimpleRecord>> {
        let zone_id = to_absolute_zone(zone)?;
        let zone = self
            .endpoint
            .read_zone(&zone_id, &ReadZoneOptions::full())
            .await?;
        Ok(zone.rrsets.iter().map(SimpleRecord::from).collect())
    }

    /// Records of the given type, restricted to one owner when `name` is given.
    ///
    /// `name` is qualified against the zone first, so `"www"`, `"www.example.com"`
    /// and `"www.example.com."` all find the same RRSet.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unusable zone name and propagates endpoint failures.
    pub async fn find_records(
        &self,
        zone: &str,
        record_type: &str,
        name: Option<&str>,
    ) -> Result<Vec<SimpleRecord>> {
        let zone_id = to_absolute_zone(zone)?;
        let owner = name.map(|n| append_to_zone(&zone_id, Some(n))).transpose()?;

        let options = match &owner {
            Some(owner) => ReadZoneOptions::filtered(owner.clone(), record_type),
            None => ReadZoneOptions::full(),
        };
        let zone = self.endpoint.read_zone(&zone_id, &options).await?;

        Ok(zone
            .rrsets
            .iter()
            .map(SimpleRecord::from)
            .filter(|r| matches(r, record_type, owner.as_deref()))
            .collect())
    }

    /// Whether [`find_records`](Self::find_records) finds anything.
    ///
    /// # Errors
    ///
    /// Same as [`find_records`](Self::find_records).
    pub async fn has_record(&self, zone: &str, record_type: &str, name: Option<&str>) -> Result<bool> {
        Ok(!self.find_records(zone, record_type, name).await?.is_empty())
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Add values to one RRSet. See [`add_records`](Self::add_records).
    ///
    /// # Errors
    ///
    /// Same as [`add_records`](Self::add_records).
    pub async fn add_record(&self, zone: &str, record: SimpleRecord) -> Result<()> {
        self.add_records(zone, vec![record]).await
    }

    /// Add values to existing RRSets, creating RRSets that do not exist yet.
    ///
    /// Existing values and comments are kept. A fragment TTL replaces the current one;
    /// without it the current TTL is kept. Several fragments may target the same RRSet.
    /// Subject to lost updates under concurrent writers (see the module docs).
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unusable zone name and propagates endpoint failures.
    pub async fn add_records(&self, zone: &str, records: Vec<SimpleRecord>) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let zone_id = to_absolute_zone(zone)?;
        let fragments = qualify_records(&zone_id, records)?;
        let mut snapshot: Vec<SimpleRecord> = self
            .current_rrsets(&zone_id, fragment_keys(&fragments))
            .await?
            .iter()
            .map(SimpleRecord::from)
            .collect();

        let mut staged: Vec<SimpleRecord> = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            let name = fragment.name.as_deref();

            if let Some(i) = position_simple_record(&staged, &fragment.record_type, name) {
                staged[i].absorb(&fragment);
            } else if let Some(i) = position_simple_record(&snapshot, &fragment.record_type, name) {
                let mut existing = snapshot.remove(i);
                existing.absorb(&fragment);
                staged.push(existing);
            } else {
                staged.push(fragment);
            }
        }

        debug!(zone = %zone_id, rrsets = staged.len(), "Staged records to add");
        self.set_records(&zone_id, staged).await
    }

    /// Replace one RRSet. See [`set_records`](Self::set_records).
    ///
    /// # Errors
    ///
    /// Same as [`set_records`](Self::set_records).
    pub async fn set_record(&self, zone: &str, record: SimpleRecord) -> Result<()> {
        self.set_records(zone, vec![record]).await
    }

    /// Replace RRSets wholesale with the given records.
    ///
    /// Fragments sharing a (type, name) key are merged first, so the patch holds one
    /// REPLACE per RRSet. Records without a TTL get 3600 seconds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unusable zone name and propagates endpoint failures.
    pub async fn set_records(&self, zone: &str, records: Vec<SimpleRecord>) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let zone_id = to_absolute_zone(zone)?;
        let changes: Vec<RRSetChange> = merge_simple_records(qualify_records(&zone_id, records)?)
            .into_iter()
            .map(replace_change)
            .collect();

        info!(zone = %zone_id, rrsets = changes.len(), "Replacing RRSets");
        self.endpoint.patch_zone(&zone_id, &changes).await
    }

    /// Remove values from one RRSet. See [`remove_records`](Self::remove_records).
    ///
    /// # Errors
    ///
    /// Same as [`remove_records`](Self::remove_records).
    pub async fn remove_record(&self, zone: &str, filter: RecordFilter) -> Result<()> {
        self.remove_records(zone, vec![filter]).await
    }

    /// Remove values, or whole RRSets when a filter lists no values.
    ///
    /// An RRSet left without values is deleted; otherwise it is replaced with the
    /// remaining values, its current TTL and its comments cut to the remaining count.
    /// Filters naming an RRSet that does not exist are ignored, and nothing is sent
    /// when no filter applies. Subject to lost updates under concurrent writers.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unusable zone name and propagates endpoint failures.
    pub async fn remove_records(&self, zone: &str, filters: Vec<RecordFilter>) -> Result<()> {
        if filters.is_empty() {
            return Ok(());
        }

        let zone_id = to_absolute_zone(zone)?;
        let filters = filters
            .into_iter()
            .map(|mut filter| {
                filter.name = Some(append_to_zone(&zone_id, filter.name.as_deref())?);
                Ok(filter)
            })
            .collect::<Result<Vec<_>>>()?;

        let keys = filters
            .iter()
            .map(|f| (f.record_type.as_str(), f.name.as_deref().unwrap_or_default()))
            .collect();
        let snapshot = self.current_rrsets(&zone_id, keys).await?;

        // Work on the RRSets themselves so untouched values keep their disabled flag
        // and surviving comments keep their account.
        let mut touched: Vec<RRSet> = Vec::new();
        for filter in &filters {
            let name = filter.name.as_deref().unwrap_or_default();

            let target = match touched
                .iter()
                .position(|r| rrset_has_key(r, &filter.record_type, name))
            {
                Some(i) => &mut touched[i],
                None => match snapshot
                    .iter()
                    .find(|r| rrset_has_key(r, &filter.record_type, name))
                {
                    Some(existing) => {
                        touched.push(existing.clone());
                        let last = touched.len() - 1;
                        &mut touched[last]
                    }
                    None => {
                        debug!(
                            zone = %zone_id,
                            name = %name,
                            record_type = %filter.record_type,
                            "Skipping removal of missing RRSet"
                        );
                        continue;
                    }
                },
            };

            if filter.content.is_empty() {
                target.records.clear();
            } else {
                target
                    .records
                    .retain(|r| !array_includes(&filter.content, &r.content));
            }
            target.comments.truncate(target.records.len());
        }

        if touched.is_empty() {
            debug!(zone = %zone_id, "Nothing to remove");
            return Ok(());
        }

        let changes: Vec<RRSetChange> = touched
            .into_iter()
            .map(|rrset| {
                if rrset.records.is_empty() {
                    RRSetChange::Delete {
                        name: rrset.name,
                        record_type: rrset.record_type,
                    }
                } else {
                    RRSetChange::Replace {
                        name: rrset.name,
                        record_type: rrset.record_type,
                        ttl: rrset.ttl.unwrap_or(DEFAULT_RECORD_TTL_SECS),
                        records: rrset.records,
                        comments: rrset
                            .comments
                            .into_iter()
                            .map(|c| Comment {
                                modified_at: None,
                                ..c
                            })
                            .collect(),
                    }
                }
            })
            .collect();

        let deleted = changes
            .iter()
            .filter(|c| c.changetype() == ChangeType::Delete)
            .count();
        info!(
            zone = %zone_id,
            deleted = deleted,
            replaced = changes.len() - deleted,
            "Removing records"
        );
        self.endpoint.patch_zone(&zone_id, &changes).await
    }

    /// Read the RRSets a request touches.
    ///
    /// A single key is read with an owner/type filter; anything else reads the whole
    /// zone.
    async fn current_rrsets(&self, zone_id: &str, keys: Vec<(&str, &str)>) -> Result<Vec<RRSet>> {
        let options = match keys.as_slice() {
            [(record_type, name)] => ReadZoneOptions::filtered(*name, *record_type),
            _ => ReadZoneOptions::full(),
        };

        debug!(zone = %zone_id, keys = keys.len(), "Reading current RRSets");
        let mut rrsets = self.endpoint.read_zone(zone_id, &options).await?.rrsets;

        if let [(record_type, name)] = keys.as_slice() {
            rrsets.retain(|r| rrset_has_key(r, record_type, name));
        }
        Ok(rrsets)
    }
}

fn rrset_has_key(rrset: &RRSet, record_type: &str, name: &str) -> bool {
    is_equal(Some(&rrset.record_type), Some(record_type)) && is_equal(Some(&rrset.name), Some(name))
}

/// Qualify every record name against the zone; apex records get the zone name.
fn qualify_records(zone_id: &str, records: Vec<SimpleRecord>) -> Result<Vec<SimpleRecord>> {
    records
        .into_iter()
        .map(|mut record| {
            record.name = Some(append_to_zone(zone_id, record.owner())?);
            Ok(record)
        })
        .collect()
}

fn fragment_keys(records: &[SimpleRecord]) -> Vec<(&str, &str)> {
    records
        .iter()
        .map(|r| (r.record_type.as_str(), r.name.as_deref().unwrap_or_default()))
        .collect()
}

fn replace_change(record: SimpleRecord) -> RRSetChange {
    RRSetChange::Replace {
        name: record.name.unwrap_or_default(),
        record_type: record.record_type,
        ttl: record.ttl.unwrap_or(DEFAULT_RECORD_TTL_SECS),
        records: record.content.into_iter().map(RecordEntry::new).collect(),
        comments: record
            .comment
            .into_iter()
            .filter(|c| !c.trim().is_empty())
            .map(Comment::new)
            .collect(),
    }
}

#[cfg(test)]
#[path = "simple_client_tests.rs"]
mod simple_client_tests;
