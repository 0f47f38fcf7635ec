// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for the PowerDNS simple client.
//!
//! Every fallible operation in the library returns [`PdnsError`], which falls into
//! one of three kinds:
//! - local validation failures that never reach the network
//! - requests the PowerDNS API refused (4xx)
//! - transport failures, timeouts and server-side errors
//!
//! The reconciliation engine never retries or swallows these errors; they are
//! propagated unmodified to the caller.

use thiserror::Error;

/// Result type used throughout the library.
pub type Result<T, E = PdnsError> = std::result::Result<T, E>;

/// Coarse classification of a [`PdnsError`].
///
/// Lets callers branch on the failure class without matching on variant fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Synchronous validation failure (bad or missing input)
    InvalidInput,
    /// The zone endpoint refused the request
    RemoteRejected,
    /// Timeout, connection failure, server error or unknown response
    RemoteUnavailable,
}

/// Errors returned by the simple-record engine and the HTTP zone endpoint.
#[derive(Error, Debug, Clone)]
pub enum PdnsError {
    /// Local validation failed before any remote call was made.
    ///
    /// Returned for missing bootstrap fields, empty zone names and malformed
    /// client options.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The PowerDNS API rejected the request (HTTP 4xx)
    ///
    /// Carries the upstream error message and, when present, the list of
    /// individual errors from the response body.
    #[error("PowerDNS rejected {method} {url} (HTTP {status}): {message}")]
    RemoteRejected {
        /// HTTP method of the rejected request
        method: String,
        /// Full URL of the rejected request
        url: String,
        /// HTTP status code returned by PowerDNS
        status: u16,
        /// Human readable error message from the response body
        message: String,
        /// Optional list of individual errors from the response body
        errors: Vec<String>,
    },

    /// The PowerDNS API could not be reached or failed server-side
    ///
    /// Covers connection failures, timeouts, HTTP 5xx, unexpected status codes
    /// and response bodies that could not be decoded.
    #[error("PowerDNS unavailable for {method} {url}: {reason}")]
    RemoteUnavailable {
        /// HTTP method of the failed request
        method: String,
        /// Full URL of the failed request
        url: String,
        /// HTTP status code, if a response was received
        status: Option<u16>,
        /// Explanation of the failure
        reason: String,
    },
}

impl PdnsError {
    /// Shorthand for an [`PdnsError::InvalidInput`] error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns the coarse kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::RemoteRejected { .. } => ErrorKind::RemoteRejected,
            Self::RemoteUnavailable { .. } => ErrorKind::RemoteUnavailable,
        }
    }

    /// Returns the HTTP status code attached to this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidInput(_) => None,
            Self::RemoteRejected { status, .. } => Some(*status),
            Self::RemoteUnavailable { status, .. } => *status,
        }
    }

    /// Returns true if this error is transient and a caller may retry the operation.
    ///
    /// The library itself never retries.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RemoteUnavailable { .. } => true,
            Self::RemoteRejected { status, .. } => *status == 429,
            Self::InvalidInput(_) => false,
        }
    }

    /// Returns a stable reason code for this error, suitable for logs and metrics labels.
    #[must_use]
    pub fn status_reason(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "InvalidInput",
            Self::RemoteRejected { status, .. } | Self::RemoteUnavailable { status: Some(status), .. } => {
                crate::http_errors::map_http_status(*status).1
            }
            Self::RemoteUnavailable { status: None, .. } => "Unreachable",
        }
    }
}
