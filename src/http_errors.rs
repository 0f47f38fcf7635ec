// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! HTTP status code mapping to error kinds and reason codes.
//!
//! This module classifies HTTP status codes returned by the PowerDNS API into the
//! library's error taxonomy, so every caller sees the same split between rejected
//! requests and unavailable servers.
//!
//! # Usage
//!
//! ```rust
//! use pdns_simple::errors::ErrorKind;
//! use pdns_simple::http_errors::map_http_status;
//!
//! let (kind, reason) = map_http_status(404);
//! assert_eq!(kind, ErrorKind::RemoteRejected);
//! assert_eq!(reason, "NotFound");
//!
//! let (kind, reason) = map_http_status(500);
//! assert_eq!(kind, ErrorKind::RemoteUnavailable);
//! assert_eq!(reason, "InternalServerError");
//! ```

use crate::errors::ErrorKind;

/// Map an HTTP status code to an error kind and reason code.
///
/// # HTTP Code Mapping
///
/// | HTTP Code | Kind | Reason |
/// |-----------|------|--------|
/// | 400 | `RemoteRejected` | `BadRequest` |
/// | 401 | `RemoteRejected` | `Unauthorized` |
/// | 403 | `RemoteRejected` | `Unauthorized` |
/// | 404 | `RemoteRejected` | `NotFound` |
/// | 408 | `RemoteUnavailable` | `RequestTimeout` |
/// | 409 | `RemoteRejected` | `Conflict` |
/// | 422 | `RemoteRejected` | `UnprocessableEntity` |
/// | 429 | `RemoteRejected` | `TooManyRequests` |
/// | other 4xx | `RemoteRejected` | `ClientError` |
/// | 500 | `RemoteUnavailable` | `InternalServerError` |
/// | 502, 503, 504 | `RemoteUnavailable` | `GatewayError` |
/// | other | `RemoteUnavailable` | `UnknownError` |
#[must_use]
pub fn map_http_status(status_code: u16) -> (ErrorKind, &'static str) {
    match status_code {
        400 => (ErrorKind::RemoteRejected, "BadRequest"),
        401 | 403 => (ErrorKind::RemoteRejected, "Unauthorized"),
        404 => (ErrorKind::RemoteRejected, "NotFound"),
        408 => (ErrorKind::RemoteUnavailable, "RequestTimeout"),
        409 => (ErrorKind::RemoteRejected, "Conflict"),
        422 => (ErrorKind::RemoteRejected, "UnprocessableEntity"),
        429 => (ErrorKind::RemoteRejected, "TooManyRequests"),
        400..=499 => (ErrorKind::RemoteRejected, "ClientError"),
        500 => (ErrorKind::RemoteUnavailable, "InternalServerError"),
        502..=504 => (ErrorKind::RemoteUnavailable, "GatewayError"),
        _ => (ErrorKind::RemoteUnavailable, "UnknownError"),
    }
}
