// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tests for simple-record types.

#[cfg(test)]
mod tests {
    use crate::pdns::types::{Comment, RRSet, RecordEntry};
    use crate::records::{RecordFilter, SimpleRecord};

    #[test]
    fn test_builder_sets_all_fields() {
        let record = SimpleRecord::new("MX", ["10 mail.example.com."])
            .with_name("example.com.")
            .with_ttl(600)
            .with_comment(["primary mail"]);

        assert_eq!(record.record_type, "MX");
        assert_eq!(record.name.as_deref(), Some("example.com."));
        assert_eq!(record.ttl, Some(600));
        assert_eq!(record.content, vec!["10 mail.example.com."]);
        assert_eq!(record.comment, vec!["primary mail"]);
    }

    #[test]
    fn test_owner_treats_blank_as_apex() {
        assert_eq!(SimpleRecord::new("A", ["192.0.2.1"]).owner(), None);
        assert_eq!(
            SimpleRecord::new("A", ["192.0.2.1"]).with_name("  ").owner(),
            None
        );
        assert_eq!(
            SimpleRecord::new("A", ["192.0.2.1"]).with_name(" www ").owner(),
            Some("www")
        );
    }

    #[test]
    fn test_absorb_appends_and_overrides_ttl() {
        let mut existing = SimpleRecord::new("A", ["192.0.2.1"]).with_ttl(300);
        existing.absorb(&SimpleRecord::new("A", ["192.0.2.2"]).with_comment(["second"]));
        assert_eq!(existing.content, vec!["192.0.2.1", "192.0.2.2"]);
        assert_eq!(existing.comment, vec!["second"]);
        assert_eq!(existing.ttl, Some(300));

        existing.absorb(&SimpleRecord::new("A", Vec::<String>::new()).with_ttl(60));
        assert_eq!(existing.ttl, Some(60));
    }

    #[test]
    fn test_content_accepts_single_string() {
        let record: SimpleRecord = serde_json::from_str(
            r#"{"type":"A","name":"www","content":"127.0.0.1","comment":"Entry point"}"#,
        )
        .unwrap();

        assert_eq!(record.content, vec!["127.0.0.1"]);
        assert_eq!(record.comment, vec!["Entry point"]);
    }

    #[test]
    fn test_content_accepts_list_and_missing_comment() {
        let record: SimpleRecord = serde_yaml::from_str(
            "type: NS\nttl: 3600\ncontent:\n  - ns1.example.com.\n  - ns2.example.com.\n",
        )
        .unwrap();

        assert_eq!(record.name, None);
        assert_eq!(record.ttl, Some(3600));
        assert_eq!(record.content.len(), 2);
        assert!(record.comment.is_empty());
    }

    #[test]
    fn test_null_content_is_empty() {
        let record: SimpleRecord =
            serde_json::from_str(r#"{"type":"TXT","content":null}"#).unwrap();
        assert!(record.content.is_empty());
    }

    #[test]
    fn test_from_rrset() {
        let rrset = RRSet {
            name: "www.example.com.".to_string(),
            record_type: "A".to_string(),
            ttl: Some(3600),
            records: vec![
                RecordEntry::new("192.0.2.1"),
                RecordEntry::new("192.0.2.2"),
            ],
            comments: vec![Comment::new("frontends")],
        };

        let record = SimpleRecord::from(&rrset);
        assert_eq!(record.name.as_deref(), Some("www.example.com."));
        assert_eq!(record.record_type, "A");
        assert_eq!(record.ttl, Some(3600));
        assert_eq!(record.content, vec!["192.0.2.1", "192.0.2.2"]);
        assert_eq!(record.comment, vec!["frontends"]);
    }

    #[test]
    fn test_filter_builder_and_deserialize() {
        let filter = RecordFilter::new("A")
            .with_name("www")
            .with_content(["192.0.2.1"]);
        assert_eq!(filter.name.as_deref(), Some("www"));
        assert_eq!(filter.content, vec!["192.0.2.1"]);

        let parsed: RecordFilter = serde_json::from_str(r#"{"type":"TXT"}"#).unwrap();
        assert_eq!(parsed.record_type, "TXT");
        assert!(parsed.content.is_empty());
    }
}
