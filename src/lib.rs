// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # pdns-simple - Simple-record client for PowerDNS
//!
//! pdns-simple manages DNS records on a PowerDNS Authoritative server one value at a
//! time, on top of an API that only accepts whole-RRSet REPLACE and DELETE operations.
//!
//! ## Overview
//!
//! This library provides:
//!
//! - Name canonicalization and zone qualification of owner names
//! - Case-insensitive record keying and fragment merging
//! - Add/set/remove reconciliation producing minimal RRSet patches
//! - Idempotent zone bootstrapping (SOA, NS, custom records, DNSSEC key)
//! - An HTTP client for the PowerDNS zone API
//!
//! ## Modules
//!
//! - [`names`] - Absolute names and zone qualification
//! - [`matching`] - Record key comparisons
//! - [`merge`] - Coalescing of record fragments
//! - [`simple_client`] - Add/set/remove reconciliation
//! - [`setup`] - Zone bootstrapping
//! - [`endpoint`] - The zone operations the engine depends on
//! - [`pdns`] - HTTP implementation of [`endpoint::ZoneEndpoint`]
//! - [`config`] - Connection options
//!
//! ## Example
//!
//! ```rust,no_run
//! use pdns_simple::config::ClientOptions;
//! use pdns_simple::pdns::PowerDnsClient;
//! use pdns_simple::records::{RecordFilter, SimpleRecord};
//! use pdns_simple::simple_client::SimpleClient;
//!
//! # async fn example() -> pdns_simple::errors::Result<()> {
//! let client = SimpleClient::new(PowerDnsClient::new(&ClientOptions::from_env()?)?);
//!
//! client
//!     .add_record("example.com", SimpleRecord::new("A", ["192.0.2.1"]).with_name("www"))
//!     .await?;
//! client
//!     .remove_record(
//!         "example.com",
//!         RecordFilter::new("A").with_name("www").with_content(["192.0.2.1"]),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod endpoint;
pub mod errors;
pub mod http_errors;
pub mod matching;
pub mod merge;
pub mod names;
pub mod pdns;
pub mod records;
pub mod setup;
pub mod simple_client;

#[cfg(test)]
mod test_support;
