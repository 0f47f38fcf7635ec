// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Coalescing of simple-record fragments.
//!
//! PowerDNS rejects (or silently overwrites) a patch that names the same RRSet twice,
//! so every fragment targeting one (type, name) key must be folded into a single
//! record before it is sent.

use crate::matching::{array_includes, matches, same_key};
use crate::records::SimpleRecord;

/// Merge fragments that share a (type, name) key.
///
/// Fragments are processed in input order. The first fragment of a key provides the
/// name and comments; later fragments contribute values not already present
/// (compared case-insensitively) and, when they carry one, a TTL that replaces the
/// current one. Each resulting record then has its values
/// deduplicated in insertion order and its comments truncated to the number of values.
///
/// Comments are not matched to individual values, so truncation may drop comments
/// that described surviving values.
#[must_use]
pub fn merge_simple_records(fragments: Vec<SimpleRecord>) -> Vec<SimpleRecord> {
    let mut merged: Vec<SimpleRecord> = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if let Some(existing) = merged.iter_mut().find(|r| same_key(r, &fragment)) {
            for value in fragment.content {
                if !array_includes(&existing.content, &value) {
                    existing.content.push(value);
                }
            }
            if fragment.ttl.is_some() {
                existing.ttl = fragment.ttl;
            }
            continue;
        }
        merged.push(fragment);
    }

    for record in &mut merged {
        let mut unique: Vec<String> = Vec::with_capacity(record.content.len());
        for value in record.content.drain(..) {
            if !array_includes(&unique, &value) {
                unique.push(value);
            }
        }
        record.content = unique;
        record.comment.truncate(record.content.len());
    }

    merged
}

/// Find the first record matching a (type, name) filter.
#[must_use]
pub fn find_simple_record<'a>(
    records: &'a [SimpleRecord],
    record_type: &str,
    name: Option<&str>,
) -> Option<&'a SimpleRecord> {
    records.iter().find(|r| matches(r, record_type, name))
}

/// Position of the first record matching a (type, name) filter.
#[must_use]
pub fn position_simple_record(
    records: &[SimpleRecord],
    record_type: &str,
    name: Option<&str>,
) -> Option<usize> {
    records.iter().position(|r| matches(r, record_type, name))
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod merge_tests;
