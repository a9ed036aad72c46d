use checklist_core::codec::document_from_value;
use checklist_core::{
    parse_document, parse_document_slice, serialize_document, serialize_document_pretty,
    ChecklistDocument, ChecklistItem, MalformedSchemaError,
};
use serde_json::json;

const WIRE_FIELDS: [&str; 5] = ["id", "label", "required", "alreadychecked", "currentstatus"];

fn item_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "label": format!("label {id}"),
        "required": true,
        "alreadychecked": false,
        "currentstatus": true
    })
}

fn sample_document() -> ChecklistDocument {
    let mut seeded = ChecklistItem::new("b2", "Seeded row", false);
    seeded.already_checked = true;
    let mut live = ChecklistItem::new("c3", "Live row \"quoted\" ✓", true);
    live.current_status = true;

    ChecklistDocument::new(vec![
        ChecklistItem::new("a1", "Check power", true),
        seeded,
        live,
    ])
}

#[test]
fn parses_single_item_document() {
    let raw = r#"{"checklist":[{"id":"a1","label":"Check power","required":true,"alreadychecked":false,"currentstatus":false}]}"#;

    let doc = parse_document(raw).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.items[0].id, "a1");
    assert_eq!(doc.items[0].label, "Check power");
    assert!(doc.items[0].required);
    assert!(!doc.items[0].already_checked);
    assert!(!doc.items[0].current_status);
}

#[test]
fn empty_checklist_is_valid() {
    let doc = parse_document(r#"{"checklist":[]}"#).unwrap();
    assert!(doc.is_empty());
}

#[test]
fn missing_required_flag_fails() {
    let raw = r#"{"checklist":[{"id":"a1","label":"Check power","alreadychecked":false,"currentstatus":false}]}"#;

    let err = parse_document(raw).unwrap_err();
    assert_eq!(
        err,
        MalformedSchemaError::MissingField {
            index: 0,
            field: "required",
        }
    );
    assert!(err.to_string().contains("item 0 is missing field `required`"));
}

#[test]
fn duplicate_ids_are_accepted() {
    let value = json!({ "checklist": [item_json("dup"), item_json("dup")] });

    let doc = document_from_value(value).unwrap();
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.items[0].id, doc.items[1].id);
}

#[test]
fn every_missing_field_is_reported_for_any_item() {
    for field in WIRE_FIELDS {
        let mut broken = item_json("x");
        broken.as_object_mut().unwrap().remove(field);
        let value = json!({ "checklist": [item_json("ok"), broken] });

        let err = document_from_value(value).unwrap_err();
        assert_eq!(err, MalformedSchemaError::MissingField { index: 1, field });
    }
}

#[test]
fn mistyped_and_null_fields_are_rejected() {
    let cases = [
        ("id", json!(42), "a number"),
        ("label", json!(null), "null"),
        ("required", json!("true"), "a string"),
        ("alreadychecked", json!(0), "a number"),
        ("currentstatus", json!([]), "an array"),
    ];

    for (field, bad, found) in cases {
        let mut item = item_json("x");
        item[field] = bad;

        let err = document_from_value(json!({ "checklist": [item] })).unwrap_err();
        match err {
            MalformedSchemaError::InvalidFieldType {
                index,
                field: reported,
                found: reported_found,
                ..
            } => {
                assert_eq!(index, 0);
                assert_eq!(reported, field);
                assert_eq!(reported_found, found);
            }
            other => panic!("unexpected error for `{field}`: {other}"),
        }
    }
}

#[test]
fn top_level_shape_errors() {
    assert_eq!(
        parse_document("[]").unwrap_err(),
        MalformedSchemaError::RootNotObject { found: "an array" }
    );
    assert_eq!(
        parse_document(r#"{"items":[]}"#).unwrap_err(),
        MalformedSchemaError::MissingChecklist
    );
    assert_eq!(
        parse_document(r#"{"checklist":{}}"#).unwrap_err(),
        MalformedSchemaError::ChecklistNotArray {
            found: "an object"
        }
    );
    assert_eq!(
        parse_document(r#"{"checklist":[true]}"#).unwrap_err(),
        MalformedSchemaError::ItemNotObject {
            index: 0,
            found: "a boolean"
        }
    );
}

#[test]
fn syntax_errors_carry_position() {
    let err = parse_document("{\n  \"checklist\": [\n").unwrap_err();
    match err {
        MalformedSchemaError::Syntax { line, .. } => assert!(line >= 2),
        other => panic!("expected syntax error, got {other:?}"),
    }
    assert!(matches!(
        parse_document_slice(&[0xff, 0xfe]).unwrap_err(),
        MalformedSchemaError::Syntax { .. }
    ));
}

#[test]
fn unknown_keys_are_ignored() {
    let mut item = item_json("a1");
    item["icon"] = json!("bolt");
    let value = json!({ "version": 2, "checklist": [item] });

    let doc = document_from_value(value).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.items[0].id, "a1");
}

#[test]
fn serialize_then_parse_roundtrips_fields_and_order() {
    let doc = sample_document();

    let compact = parse_document(&serialize_document(&doc).unwrap()).unwrap();
    let pretty = parse_document(&serialize_document_pretty(&doc).unwrap()).unwrap();

    assert_eq!(compact, doc);
    assert_eq!(pretty, doc);
}

#[test]
fn parse_preserves_source_order() {
    let ids = ["z", "a", "m", "b"];
    let value = json!({ "checklist": ids.iter().map(|id| item_json(id)).collect::<Vec<_>>() });

    let doc = document_from_value(value).unwrap();
    let parsed: Vec<&str> = doc.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(parsed, ids);
}
