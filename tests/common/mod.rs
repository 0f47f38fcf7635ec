// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

#![allow(dead_code)]

use pdns_simple::config::ClientOptions;
use pdns_simple::pdns::PowerDnsClient;
use pdns_simple::simple_client::SimpleClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_KEY: &str = "integration-secret";

pub const ZONE_PATH: &str = "/api/v1/servers/localhost/zones/example.com.";

/// Start a mock PowerDNS server and a client pointed at it
pub async fn start() -> (MockServer, SimpleClient<PowerDnsClient>) {
    let server = MockServer::start().await;
    let options = ClientOptions::new(server.uri(), API_KEY);
    let client = SimpleClient::new(PowerDnsClient::new(&options).unwrap());
    (server, client)
}

/// Zone document as returned by `GET /zones/{zone}`
pub fn zone_json(name: &str, rrsets: Value) -> Value {
    json!({
        "id": name,
        "name": name,
        "kind": "Native",
        "url": format!("/api/v1/servers/localhost/zones/{name}"),
        "serial": 2024010101,
        "dnssec": false,
        "rrsets": rrsets,
    })
}

/// RRSet document with enabled records and no comments
pub fn rrset_json(name: &str, record_type: &str, ttl: u32, contents: &[&str]) -> Value {
    let records: Vec<Value> = contents
        .iter()
        .map(|c| json!({ "content": c, "disabled": false }))
        .collect();
    json!({
        "name": name,
        "type": record_type,
        "ttl": ttl,
        "records": records,
        "comments": [],
    })
}
