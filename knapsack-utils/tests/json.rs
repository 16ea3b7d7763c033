use serde_json::json;
use knapsack_utils::*;

#[test]
fn test_jsonify_sorts_keys() {
    let value = json!({"time": 1.5, "solution": 220});
    assert_eq!(jsonify(&value), r#"{"solution":220,"time":1.5}"#);
}

#[test]
fn test_jsonify_sorts_nested_keys() {
    let value = json!({"b": [{"z": 1, "a": 2}], "a": {"y": true, "x": null}});
    assert_eq!(
        jsonify(&value),
        r#"{"a":{"x":null,"y":true},"b":[{"a":2,"z":1}]}"#
    );
}

#[test]
fn test_dejsonify() {
    let values: Vec<u32> = dejsonify("[10, 20, 30]").unwrap();
    assert_eq!(values, vec![10, 20, 30]);
    assert!(dejsonify::<Vec<u32>>("[10, -1]").is_err());
}

#[test]
fn test_read_documents() {
    let input = r#"{"version": "top_down"}
        {"item_count": 0, "capacity": 10, "item_weights": [], "item_values": []}
        []"#;
    let docs = read_documents(input.as_bytes()).unwrap();
    assert_eq!(docs.len(), 3);
    assert_eq!(docs[0]["version"], "top_down");
    assert_eq!(docs[1]["capacity"], 10);
    assert_eq!(docs[2], json!([]));
}

#[test]
fn test_read_documents_empty_input() {
    assert!(read_documents("   \n".as_bytes()).unwrap().is_empty());
}

#[test]
fn test_read_documents_reports_bad_document() {
    let err = read_documents(r#"{"version": "top_down"} {"capacity": "#.as_bytes())
        .unwrap_err()
        .to_string();
    assert!(err.contains("document 1"), "{}", err);
}
