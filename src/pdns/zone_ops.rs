// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone HTTP API operations for PowerDNS.
//!
//! This module contains the request plumbing and every zone function that talks to
//! the PowerDNS Authoritative HTTP API. Each function is one typed call in, one
//! typed result out; there is no retry.

use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};
use url::Url;

use super::types::{
    ApiErrorBody, CryptoKey, CryptoKeyCreate, RRSetChange, ReadZoneOptions, Zone, ZoneCreate,
    ZonePatch,
};
use crate::constants::{API_KEY_HEADER, API_PATH_SEGMENTS};
use crate::errors::{ErrorKind, PdnsError, Result};
use crate::http_errors::map_http_status;
use crate::names::to_absolute_zone;

/// Everything needed to address one PowerDNS server.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ApiTarget<'a> {
    pub client: &'a HttpClient,
    pub api_key: &'a str,
    pub base_url: &'a Url,
    pub server_id: &'a str,
}

impl ApiTarget<'_> {
    /// URL of `/api/v1/servers/{server_id}/{segments...}` below the base URL.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                PdnsError::invalid_input(format!("invalid API URL '{}'", self.base_url))
            })?
            .pop_if_empty()
            .extend(API_PATH_SEGMENTS)
            .extend(["servers", self.server_id])
            .extend(segments);
        Ok(url)
    }
}

/// Execute a request against the PowerDNS API and return the response body.
///
/// Non-2xx responses are classified with [`map_http_status`]; the PowerDNS error body
/// (`{"error": ..., "errors": [...]}`) is decoded when present.
///
/// # Errors
///
/// Returns `RemoteRejected` for 4xx responses and `RemoteUnavailable` for transport
/// failures, timeouts, 5xx and unknown statuses.
pub(crate) async fn pdns_request<T: Serialize + std::fmt::Debug>(
    target: &ApiTarget<'_>,
    method: Method,
    url: Url,
    body: Option<&T>,
) -> Result<String> {
    debug!(
        method = %method,
        url = %url,
        body = ?body,
        "HTTP API request to PowerDNS"
    );

    let mut request = target
        .client
        .request(method.clone(), url.clone())
        .header(API_KEY_HEADER, target.api_key);

    if let Some(body_data) = body {
        request = request.json(body_data);
    }

    let response = request.send().await.map_err(|e| {
        let reason = if e.is_timeout() {
            format!("request timed out: {e}")
        } else {
            format!("failed to send HTTP request: {e}")
        };
        error!(method = %method, url = %url, error = %reason, "HTTP API request failed");
        PdnsError::RemoteUnavailable {
            method: method.to_string(),
            url: url.to_string(),
            status: None,
            reason,
        }
    })?;

    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        error!(
            method = %method,
            url = %url,
            status = %status,
            error = %error_text,
            "HTTP API request failed"
        );
        return Err(error_from_response(
            &method,
            &url,
            status.as_u16(),
            &error_text,
        ));
    }

    let text = response
        .text()
        .await
        .map_err(|e| PdnsError::RemoteUnavailable {
            method: method.to_string(),
            url: url.to_string(),
            status: Some(status.as_u16()),
            reason: format!("failed to read response body: {e}"),
        })?;

    debug!(
        method = %method,
        url = %url,
        status = %status,
        response_len = text.len(),
        "HTTP API request successful"
    );

    Ok(text)
}

/// Build the error for a non-2xx response.
pub(crate) fn error_from_response(method: &Method, url: &Url, status: u16, body: &str) -> PdnsError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    let (kind, reason) = map_http_status(status);

    let message = if parsed.error.is_empty() {
        if body.trim().is_empty() {
            reason.to_string()
        } else {
            body.trim().to_string()
        }
    } else {
        parsed.error
    };

    match kind {
        ErrorKind::RemoteRejected => PdnsError::RemoteRejected {
            method: method.to_string(),
            url: url.to_string(),
            status,
            message,
            errors: parsed.errors,
        },
        _ => PdnsError::RemoteUnavailable {
            method: method.to_string(),
            url: url.to_string(),
            status: Some(status),
            reason: message,
        },
    }
}

/// Decode a JSON response body into a typed value.
fn decode<T: DeserializeOwned>(method: &Method, url: &Url, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| PdnsError::RemoteUnavailable {
        method: method.to_string(),
        url: url.to_string(),
        status: None,
        reason: format!("malformed response body: {e}"),
    })
}

/// List zones, optionally restricted to one zone name.
///
/// # Errors
///
/// Returns an error if the HTTP request fails or the response cannot be decoded.
pub(crate) async fn list_zones(target: &ApiTarget<'_>, zone_filter: Option<&str>) -> Result<Vec<Zone>> {
    let zone_filter = zone_filter.map(to_absolute_zone).transpose()?;
    let mut url = target.url(&["zones"])?;
    url.query_pairs_mut().append_pair("dnssec", "false");
    if let Some(zone) = &zone_filter {
        url.query_pairs_mut().append_pair("zone", zone);
    }

    let text = pdns_request(target, Method::GET, url.clone(), None::<&()>).await?;
    decode(&Method::GET, &url, &text)
}

/// Read one zone.
///
/// # Errors
///
/// Returns an error if the zone does not exist or the HTTP request fails.
pub(crate) async fn get_zone(
    target: &ApiTarget<'_>,
    zone_name: &str,
    options: &ReadZoneOptions,
) -> Result<Zone> {
    let zone_id = to_absolute_zone(zone_name)?;
    let mut url = target.url(&["zones", &zone_id])?;
    {
        let mut query = url.query_pairs_mut();
        for (key, value) in options.query_pairs() {
            query.append_pair(key, &value);
        }
    }

    let text = pdns_request(target, Method::GET, url.clone(), None::<&()>).await?;
    decode(&Method::GET, &url, &text)
}

/// Apply RRSet changes to a zone.
///
/// # Errors
///
/// Returns an error if PowerDNS rejects the patch or the HTTP request fails.
pub(crate) async fn patch_zone(
    target: &ApiTarget<'_>,
    zone_name: &str,
    changes: &[RRSetChange],
) -> Result<()> {
    let zone_id = to_absolute_zone(zone_name)?;
    let url = target.url(&["zones", &zone_id])?;

    pdns_request(target, Method::PATCH, url, Some(&ZonePatch { rrsets: changes })).await?;
    Ok(())
}

/// Create a zone.
///
/// # Errors
///
/// Returns an error if the zone already exists or the HTTP request fails.
pub(crate) async fn create_zone(target: &ApiTarget<'_>, zone: &ZoneCreate) -> Result<Zone> {
    let body = ZoneCreate {
        name: to_absolute_zone(&zone.name)?,
        ..zone.clone()
    };
    let mut url = target.url(&["zones"])?;
    url.query_pairs_mut().append_pair("rrsets", "false");

    let text = pdns_request(target, Method::POST, url.clone(), Some(&body)).await?;
    decode(&Method::POST, &url, &text)
}

/// Delete a zone.
///
/// # Errors
///
/// Returns an error if the zone does not exist or the HTTP request fails.
pub(crate) async fn delete_zone(target: &ApiTarget<'_>, zone_name: &str) -> Result<()> {
    let zone_id = to_absolute_zone(zone_name)?;
    let url = target.url(&["zones", &zone_id])?;

    pdns_request(target, Method::DELETE, url, None::<&()>).await?;
    Ok(())
}

/// List the DNSSEC keys of a zone.
///
/// # Errors
///
/// Returns an error if the zone does not exist or the HTTP request fails.
pub(crate) async fn list_crypto_keys(target: &ApiTarget<'_>, zone_name: &str) -> Result<Vec<CryptoKey>> {
    let zone_id = to_absolute_zone(zone_name)?;
    let url = target.url(&["zones", &zone_id, "cryptokeys"])?;

    let text = pdns_request(target, Method::GET, url.clone(), None::<&()>).await?;
    decode(&Method::GET, &url, &text)
}

/// Create a DNSSEC key.
///
/// # Errors
///
/// Returns an error if PowerDNS rejects the key or the HTTP request fails.
pub(crate) async fn create_crypto_key(
    target: &ApiTarget<'_>,
    zone_name: &str,
    key: &CryptoKeyCreate,
) -> Result<CryptoKey> {
    let zone_id = to_absolute_zone(zone_name)?;
    let url = target.url(&["zones", &zone_id, "cryptokeys"])?;

    let text = pdns_request(target, Method::POST, url.clone(), Some(key)).await?;
    decode(&Method::POST, &url, &text)
}

#[cfg(test)]
#[path = "zone_ops_tests.rs"]
mod zone_ops_tests;
