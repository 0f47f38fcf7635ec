// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the PowerDNS simple client.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Constants
// ============================================================================

/// Path segments prefixing every PowerDNS Authoritative HTTP API route
pub const API_PATH_SEGMENTS: [&str; 2] = ["api", "v1"];

/// Header carrying the static API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Server id used when none is selected
pub const DEFAULT_SERVER_ID: &str = "localhost";

/// Default HTTP request timeout
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Environment Variables
// ============================================================================

/// Base URL of the PowerDNS API (e.g. `http://127.0.0.1:8081`)
pub const ENV_API_URL: &str = "PDNS_API_URL";

/// Static API key
pub const ENV_API_KEY: &str = "PDNS_API_KEY";

/// Server id to operate on
pub const ENV_SERVER_ID: &str = "PDNS_SERVER_ID";

/// HTTP request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "PDNS_TIMEOUT_SECS";

// ============================================================================
// DNS Record Constants
// ============================================================================

/// Owner name alias for the zone apex in simple-record input
pub const APEX_ALIAS: &str = "@";

/// TTL applied to REPLACE operations that do not specify one (1 hour)
pub const DEFAULT_RECORD_TTL_SECS: u32 = 3600;

/// Record type of the start-of-authority record
pub const RECORD_TYPE_SOA: &str = "SOA";

/// Record type of the nameserver record
pub const RECORD_TYPE_NS: &str = "NS";

// ============================================================================
// Zone Bootstrap Constants
// ============================================================================

/// TTL of the SOA and NS records written during zone setup (1 hour)
pub const SETUP_RECORD_TTL_SECS: u32 = 3600;

/// Initial SOA serial written during zone setup
pub const SETUP_SOA_SERIAL: u32 = 2_020_111_501;

/// SOA refresh interval (3 hours)
pub const SETUP_SOA_REFRESH_SECS: u32 = 10800;

/// SOA retry interval (1 hour)
pub const SETUP_SOA_RETRY_SECS: u32 = 3600;

/// SOA expire time (7 days)
pub const SETUP_SOA_EXPIRE_SECS: u32 = 604_800;

/// SOA negative caching TTL (1 hour)
pub const SETUP_SOA_MINIMUM_SECS: u32 = 3600;

// ============================================================================
// Runtime Constants
// ============================================================================

/// Number of worker threads for Tokio runtime
pub const TOKIO_WORKER_THREADS: usize = 2;
