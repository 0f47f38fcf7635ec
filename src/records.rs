// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Simple-record types.
//!
//! A [`SimpleRecord`] is the engine's native unit: one owner name and record type with
//! a list of values and a list of comments. It is ephemeral, built from caller input or
//! from a zone read, merged, and translated into RRSet operations straight away.
//!
//! # Example
//!
//! ```rust
//! use pdns_simple::records::SimpleRecord;
//!
//! let record = SimpleRecord::new("A", ["192.0.2.1", "192.0.2.2"])
//!     .with_name("www")
//!     .with_ttl(300)
//!     .with_comment(["web frontends"]);
//!
//! assert_eq!(record.owner(), Some("www"));
//! assert_eq!(record.content.len(), 2);
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::pdns::types::RRSet;

/// A DNS record set expressed as individual values.
///
/// `content` and `comment` accept either a single string or a list of strings when
/// deserialized, and are always held as lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleRecord {
    /// Owner name; absent or empty means the zone apex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Record type (e.g. "A", "MX")
    #[serde(rename = "type")]
    pub record_type: String,

    /// TTL in seconds; last writer wins when merging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    /// Record values, semantically a set in insertion order
    #[serde(default, deserialize_with = "one_or_many")]
    pub content: Vec<String>,

    /// Comments attached to the record set as a whole
    #[serde(default, deserialize_with = "one_or_many")]
    pub comment: Vec<String>,
}

impl SimpleRecord {
    /// Create an apex record of the given type with the given values.
    pub fn new<I, S>(record_type: impl Into<String>, content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            record_type: record_type.into(),
            ttl: None,
            content: content.into_iter().map(Into::into).collect(),
            comment: Vec::new(),
        }
    }

    /// Set the owner name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the TTL.
    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set the comments.
    #[must_use]
    pub fn with_comment<I, S>(mut self, comment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comment = comment.into_iter().map(Into::into).collect();
        self
    }

    /// Owner name with surrounding whitespace removed, or `None` for the apex.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    /// Fold another fragment of the same key into this record.
    ///
    /// Values and comments are appended as-is (deduplication happens when merging),
    /// and the fragment's TTL overwrites this one when present.
    pub fn absorb(&mut self, fragment: &SimpleRecord) {
        self.content.extend(fragment.content.iter().cloned());
        self.comment.extend(fragment.comment.iter().cloned());
        if fragment.ttl.is_some() {
            self.ttl = fragment.ttl;
        }
    }
}

/// Lossy view of an RRSet: per-value `disabled` flags and comment accounts and
/// timestamps are dropped. Writing the result back re-enables every value and
/// clears comment accounts.
impl From<&RRSet> for SimpleRecord {
    fn from(rrset: &RRSet) -> Self {
        Self {
            name: Some(rrset.name.clone()),
            record_type: rrset.record_type.clone(),
            ttl: rrset.ttl,
            content: rrset.records.iter().map(|r| r.content.clone()).collect(),
            comment: rrset.comments.iter().map(|c| c.content.clone()).collect(),
        }
    }
}

/// Selects values to remove from a record set.
///
/// An empty `content` list targets the whole record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Owner name; absent or empty means the zone apex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Record type (e.g. "A", "MX")
    #[serde(rename = "type")]
    pub record_type: String,

    /// Values to remove
    #[serde(default, deserialize_with = "one_or_many")]
    pub content: Vec<String>,
}

impl RecordFilter {
    /// Create a filter that removes the whole apex record set of the given type.
    pub fn new(record_type: impl Into<String>) -> Self {
        Self {
            name: None,
            record_type: record_type.into(),
            content: Vec::new(),
        }
    }

    /// Set the owner name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restrict removal to the given values.
    #[must_use]
    pub fn with_content<I, S>(mut self, content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = content.into_iter().map(Into::into).collect();
        self
    }
}

/// Accept `"value"`, `["a", "b"]` or `null` and normalize to a list.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
        None => Vec::new(),
    })
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod records_tests;
