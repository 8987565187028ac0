//! Wire-shape tests for the tagged entry list and its temporal fields.

use canvas_assign::models::{parse_entries_json_str, CanvasDuration, CanvasTime, Entry};

#[test]
fn test_entry_list_roundtrip_preserves_display_shapes() {
    let source = serde_json::json!([
        {"assignment_group": {"id": 3, "name": "HW", "group_weight": 40.0}},
        {"assignment": {
            "name": "HW1",
            "course_id": 101,
            "due_at": "2024-01-10 23:59:00",
            "unlock_at": "2024-01-03",
            "peer_reviews_assign_at": "08:00:00",
            "lock_after": "48h0m0s",
            "submission_types": ["online_upload"]
        }}
    ]);

    let entries = parse_entries_json_str(&source.to_string()).unwrap();
    let reencoded = serde_json::to_value(&entries).unwrap();
    assert_eq!(reencoded, source, "decode/encode must preserve every shape");
}

#[test]
fn test_mixed_instant_formats_decode() {
    let entries = parse_entries_json_str(
        r#"[{"assignment": {
            "due_at": "2024-01-10 08:30:00",
            "lock_at": "2024-01-12",
            "unlock_at": "06:00:00",
            "peer_reviews_assign_at": "2024-01-10T16:30:00Z"
        }}]"#,
    )
    .unwrap();

    let asst = match &entries[0] {
        Entry::Assignment(asst) => asst,
        other => panic!("expected an assignment, got {:?}", other),
    };
    assert_eq!(asst.due_at.unwrap().to_string(), "2024-01-10 08:30:00");
    assert_eq!(asst.lock_at.unwrap().to_string(), "2024-01-12");
    assert_eq!(asst.unlock_at.unwrap().to_string(), "06:00:00");
    // The RFC 3339 form converts into the local calendar; converting back
    // out in wire form must name the same instant.
    let peer = asst.peer_reviews_assign_at.unwrap();
    assert_eq!(
        CanvasTime::parse(&peer.to_wire()).unwrap(),
        peer,
        "wire round-trip must be lossless"
    );
}

#[test]
fn test_duration_fields_accept_go_style_spans() {
    let entries = parse_entries_json_str(
        r#"[{"assignment": {
            "lock_after": "48h",
            "unlock_before": "168h0m0s",
            "peer_reviews_assign_after": "1h30m"
        }}]"#,
    )
    .unwrap();

    let asst = match &entries[0] {
        Entry::Assignment(asst) => asst,
        other => panic!("expected an assignment, got {:?}", other),
    };
    assert_eq!(asst.lock_after, Some(CanvasDuration::from_secs(48 * 3600)));
    assert_eq!(
        asst.unlock_before,
        Some(CanvasDuration::from_secs(168 * 3600))
    );
    assert_eq!(
        asst.peer_reviews_assign_after,
        Some(CanvasDuration::from_secs(5400))
    );
}

#[test]
fn test_unknown_entry_tags_are_rejected() {
    for bad in [
        r#"[{}]"#,
        r#"[{"quiz": {}}]"#,
        r#"[{"assignment": {}, "assignment_group": {}}]"#,
    ] {
        assert!(
            parse_entries_json_str(bad).is_err(),
            "expected rejection of {}",
            bad
        );
    }
}

#[test]
fn test_nested_group_rules_roundtrip() {
    let source = serde_json::json!([
        {"assignment_group": {
            "name": "Quizzes",
            "rules": {"drop_lowest": 2, "never_drop": [55, 56]}
        }}
    ]);
    let entries = parse_entries_json_str(&source.to_string()).unwrap();
    assert_eq!(serde_json::to_value(&entries).unwrap(), source);
}
