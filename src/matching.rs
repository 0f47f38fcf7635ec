// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Case- and whitespace-insensitive comparisons used to key records by (type, name).

use crate::records::SimpleRecord;

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Compare two optional strings after trimming and lowercasing.
///
/// `None` never equals a defined string; two `None`s are equal.
#[must_use]
pub fn is_equal(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => normalize(a) == normalize(b),
        (None, None) => true,
        _ => false,
    }
}

/// Whether `values` contains `search_for` under the same normalization as [`is_equal`].
#[must_use]
pub fn array_includes<S: AsRef<str>>(values: &[S], search_for: &str) -> bool {
    let needle = normalize(search_for);
    values.iter().any(|v| normalize(v.as_ref()) == needle)
}

/// Whether a record matches a (type, name) filter.
///
/// Without a name the filter matches every record of that type. With a name, the
/// record must carry a name and it must compare equal.
#[must_use]
pub fn matches(record: &SimpleRecord, record_type: &str, name: Option<&str>) -> bool {
    if let Some(name) = name {
        if !is_equal(record.name.as_deref(), Some(name)) {
            return false;
        }
    }
    is_equal(Some(&record.record_type), Some(record_type))
}

/// Exact key equality: same type and same owner, where a missing or blank owner
/// only equals another missing or blank owner.
#[must_use]
pub fn same_key(a: &SimpleRecord, b: &SimpleRecord) -> bool {
    is_equal(Some(&a.record_type), Some(&b.record_type)) && is_equal(a.owner(), b.owner())
}

#[cfg(test)]
#[path = "matching_tests.rs"]
mod matching_tests;
