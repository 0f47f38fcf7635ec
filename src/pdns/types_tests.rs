// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tests for PowerDNS wire types (`RRSetChange`, `Zone`, `ReadZoneOptions`).

#[cfg(test)]
mod tests {
    use crate::pdns::types::*;
    use serde_json::json;

    #[test]
    fn test_replace_serializes_full_payload() {
        let change = RRSetChange::Replace {
            name: "www.example.com.".to_string(),
            record_type: "A".to_string(),
            ttl: 3600,
            records: vec![RecordEntry::new("127.0.0.1")],
            comments: vec![Comment::new("Entry point")],
        };

        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            json!({
                "changetype": "REPLACE",
                "name": "www.example.com.",
                "type": "A",
                "ttl": 3600,
                "records": [{"content": "127.0.0.1", "disabled": false}],
                "comments": [{"content": "Entry point", "account": ""}],
            })
        );
    }

    #[test]
    fn test_delete_serializes_key_only() {
        let change = RRSetChange::Delete {
            name: "www.example.com.".to_string(),
            record_type: "A".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            json!({"changetype": "DELETE", "name": "www.example.com.", "type": "A"})
        );
        assert_eq!(change.changetype(), ChangeType::Delete);
        assert_eq!(change.name(), "www.example.com.");
        assert_eq!(change.record_type(), "A");
    }

    #[test]
    fn test_patch_body_wraps_rrsets() {
        let changes = vec![RRSetChange::Delete {
            name: "example.com.".to_string(),
            record_type: "TXT".to_string(),
        }];

        let body = serde_json::to_value(ZonePatch { rrsets: &changes }).unwrap();
        assert_eq!(body["rrsets"][0]["changetype"], "DELETE");
    }

    #[test]
    fn test_zone_decodes_with_missing_fields() {
        let zone: Zone = serde_json::from_value(json!({
            "id": "example.com.",
            "name": "example.com.",
            "kind": "Native",
            "serial": 2020111501,
            "dnssec": false,
            "nsec3param": null,
            "rrsets": [{
                "name": "example.com.",
                "type": "NS",
                "ttl": 3600,
                "records": [{"content": "ns1.example.com.", "disabled": false}],
                "comments": []
            }]
        }))
        .unwrap();

        assert_eq!(zone.kind, ZoneKind::Native);
        assert_eq!(zone.serial, 2_020_111_501);
        assert_eq!(zone.nsec3param, None);
        assert_eq!(zone.rrsets.len(), 1);
        assert_eq!(zone.rrsets[0].records[0].content, "ns1.example.com.");
    }

    #[test]
    fn test_zone_list_item_without_rrsets() {
        let zones: Vec<Zone> = serde_json::from_value(json!([
            {"id": "a.com.", "name": "a.com.", "kind": "Master"},
            {"id": "b.com.", "name": "b.com.", "kind": "Producer"}
        ]))
        .unwrap();

        assert_eq!(zones[0].kind, ZoneKind::Master);
        assert_eq!(zones[1].kind, ZoneKind::Unknown);
        assert!(zones[0].rrsets.is_empty());
    }

    #[test]
    fn test_zone_kind_from_str() {
        assert_eq!("native".parse::<ZoneKind>().unwrap(), ZoneKind::Native);
        assert_eq!("Primary".parse::<ZoneKind>().unwrap(), ZoneKind::Master);
        assert_eq!("secondary".parse::<ZoneKind>().unwrap(), ZoneKind::Slave);
        assert!("bogus".parse::<ZoneKind>().is_err());
    }

    #[test]
    fn test_zone_create_omits_empty_lists() {
        let body = serde_json::to_value(ZoneCreate::new("example.com.", ZoneKind::Native)).unwrap();
        assert_eq!(body, json!({"name": "example.com.", "kind": "Native"}));
    }

    #[test]
    fn test_crypto_key_roundtrip_fields() {
        let key: CryptoKey = serde_json::from_value(json!({
            "type": "Cryptokey",
            "id": 1,
            "keytype": "ksk",
            "active": true,
            "published": true,
            "algorithm": "ECDSAP256SHA256",
            "bits": 256
        }))
        .unwrap();

        assert_eq!(key.keytype, KeyType::Ksk);
        assert!(key.active);
        assert_eq!(key.bits, Some(256));

        let create = serde_json::to_value(CryptoKeyCreate {
            keytype: KeyType::Ksk,
            active: true,
        })
        .unwrap();
        assert_eq!(create, json!({"keytype": "ksk", "active": true}));
    }

    #[test]
    fn test_api_error_body_defaults() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Not Found"}"#).unwrap();
        assert_eq!(body.error, "Not Found");
        assert!(body.errors.is_empty());
    }

    #[test]
    fn test_read_zone_options_query_pairs() {
        assert_eq!(
            ReadZoneOptions::full().query_pairs(),
            vec![("rrsets", "true".to_string())]
        );
        assert_eq!(
            ReadZoneOptions::without_rrsets().query_pairs(),
            vec![("rrsets", "false".to_string())]
        );
        assert_eq!(
            ReadZoneOptions::filtered("www.example.com.", "A").query_pairs(),
            vec![
                ("rrsets", "true".to_string()),
                ("rrset_name", "www.example.com.".to_string()),
                ("rrset_type", "A".to_string()),
            ]
        );
    }

    #[test]
    fn test_type_filter_requires_owner_filter() {
        let options = ReadZoneOptions {
            include_rrsets: true,
            owner_filter: None,
            type_filter: Some("A".to_string()),
        };
        assert_eq!(options.query_pairs(), vec![("rrsets", "true".to_string())]);
    }
}
