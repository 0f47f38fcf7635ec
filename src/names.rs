// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Domain name canonicalization.
//!
//! PowerDNS only accepts absolute names (terminated by a trailing dot). Simple-record
//! input is more relaxed: owner names may be relative to the zone, absolute, or the
//! apex alias `"@"`. These helpers turn all of them into the wire form.
//!
//! # Example
//!
//! ```rust
//! use pdns_simple::names::{append_to_zone, to_absolute};
//!
//! assert_eq!(to_absolute("example.com").as_deref(), Some("example.com."));
//! assert_eq!(to_absolute("@"), None);
//!
//! let fqdn = append_to_zone("example.com", Some("www")).unwrap();
//! assert_eq!(fqdn, "www.example.com.");
//! ```

use crate::constants::APEX_ALIAS;
use crate::errors::{PdnsError, Result};

/// Converts a name to its absolute form (`example.com` becomes `example.com.`).
///
/// Returns `None` for the apex alias `"@"`, meaning no owner name is sent on the wire.
/// Names that already end with a dot are returned unchanged.
#[must_use]
pub fn to_absolute(name: &str) -> Option<String> {
    if name == APEX_ALIAS {
        return None;
    }

    if name.trim().ends_with('.') {
        Some(name.to_string())
    } else {
        Some(format!("{name}."))
    }
}

/// Canonicalizes a zone name.
///
/// # Errors
///
/// Returns `InvalidInput` if the zone name is empty or the apex alias, since neither
/// identifies a zone.
pub fn to_absolute_zone(zone_name: &str) -> Result<String> {
    if zone_name.trim().is_empty() {
        return Err(PdnsError::invalid_input("zone name must not be empty"));
    }

    to_absolute(zone_name.trim()).ok_or_else(|| {
        PdnsError::invalid_input(format!("'{APEX_ALIAS}' is not a valid zone name"))
    })
}

/// Qualifies a record name against its zone.
///
/// An absent, empty or `"@"` record name denotes the apex and yields the canonical
/// zone name. A record name that already ends with the zone is treated as fully
/// qualified and passes through after canonicalization. Anything else gets the zone
/// appended by plain concatenation, so callers supply the separating label themselves.
///
/// # Errors
///
/// Returns `InvalidInput` if the zone name is not usable (see [`to_absolute_zone`]).
pub fn append_to_zone(zone_name: &str, record_name: Option<&str>) -> Result<String> {
    let zone = to_absolute_zone(zone_name)?;

    let Some(record) = record_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .and_then(to_absolute)
    else {
        return Ok(zone);
    };

    if record.to_ascii_lowercase().ends_with(&zone.to_ascii_lowercase()) {
        Ok(record)
    } else {
        Ok(format!("{record}{zone}"))
    }
}

#[cfg(test)]
#[path = "names_tests.rs"]
mod names_tests;
