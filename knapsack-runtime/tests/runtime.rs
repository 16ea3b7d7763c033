use knapsack_algorithms::Version;
use knapsack_runtime::*;
use knapsack_structs::core::Solution;
use knapsack_utils::read_documents;
use serde_json::{json, Value};

fn documents(input: &str) -> Vec<Value> {
    read_documents(input.as_bytes()).unwrap()
}

const INSTANCE: &str =
    r#"{"item_count": 3, "capacity": 50, "item_weights": [10, 20, 30], "item_values": [60, 100, 120]}"#;

#[test]
fn test_load_job_uses_experiment_version() {
    let job = load_job(
        documents(&format!(r#"{{"version": "top_down"}} {} []"#, INSTANCE)),
        None,
    )
    .unwrap();
    assert_eq!(job.version, Version::TopDown);
    assert_eq!(job.instance.item_count, 3);
    assert_eq!(job.instance.weights, vec![10, 20, 30]);
    assert!(job.known_solutions.is_empty());
}

#[test]
fn test_strategy_overrides_experiment_version() {
    let job = load_job(
        documents(&format!(r#"{{"version": "top_down"}} {}"#, INSTANCE)),
        Some("backtracking"),
    )
    .unwrap();
    assert_eq!(job.version, Version::Backtracking);
}

#[test]
fn test_unknown_version_is_rejected() {
    let err = load_job(
        documents(&format!(r#"{{"version": "greedy"}} {}"#, INSTANCE)),
        None,
    )
    .unwrap_err()
    .to_string();
    assert!(err.contains("Unknown version 'greedy'"), "{}", err);
}

#[test]
fn test_missing_version_is_rejected() {
    let err = load_job(documents(&format!("{{}} {}", INSTANCE)), None)
        .unwrap_err()
        .to_string();
    assert!(err.contains("No version selected"), "{}", err);
}

#[test]
fn test_missing_instance_is_rejected() {
    let err = load_job(documents(r#"{"version": "bottom_up"}"#), None)
        .unwrap_err()
        .to_string();
    assert!(err.contains("Missing instance"), "{}", err);
    assert!(load_job(Vec::new(), None).is_err());
}

#[test]
fn test_malformed_instance_is_rejected() {
    for (instance, expected) in [
        (
            r#"{"item_count": 2, "capacity": 5, "item_weights": [1], "item_values": [1, 2]}"#,
            "'item_weights' has 1 entries but item_count is 2",
        ),
        (
            r#"{"item_count": 0, "capacity": -5, "item_weights": [], "item_values": []}"#,
            "capacity (-5) must be non-negative",
        ),
        (
            r#"{"item_count": -1, "capacity": 5, "item_weights": [], "item_values": []}"#,
            "item_count (-1) must be non-negative",
        ),
    ] {
        let err = load_job(
            documents(&format!(r#"{{"version": "bottom_up"}} {}"#, instance)),
            None,
        )
        .unwrap_err()
        .to_string();
        assert!(err.contains(expected), "{}", err);
    }
}

#[test]
fn test_known_solutions_are_collected() {
    let job = load_job(
        documents(&format!(
            r#"{{"version": "bottom_up"}} {} [{{"solution": 220, "time": 3.5}}]"#,
            INSTANCE
        )),
        None,
    )
    .unwrap();
    assert_eq!(job.known_solutions, vec![Solution::new(220)]);
}

#[test]
fn test_unrecognised_solutions_document_is_ignored() {
    let job = load_job(
        documents(&format!(r#"{{"version": "bottom_up"}} {} {{"best": 1}}"#, INSTANCE)),
        None,
    )
    .unwrap();
    assert!(job.known_solutions.is_empty());
}

#[test]
fn test_run_job() {
    for version in Version::ALL {
        let job = load_job(
            documents(&format!(r#"{{"version": "{}"}} {}"#, version, INSTANCE)),
            None,
        )
        .unwrap();
        let output_data = run_job(&job);
        assert_eq!(output_data.solution, Solution::new(220));
        assert!(output_data.time >= 0.0);
    }
}

#[test]
fn test_load_solution_shapes() {
    assert_eq!(load_solution("220").unwrap(), Solution::new(220));
    assert_eq!(
        load_solution(r#"{"solution": 9, "time": 0.5}"#).unwrap(),
        Solution::new(9)
    );
    assert!(load_solution(r#"{"value": 9}"#).is_err());
}

#[test]
fn test_load_instance_from_file() {
    let path = std::env::temp_dir().join("knapsack_runtime_test_instance.json");
    std::fs::write(&path, json!({"item_count": 0, "capacity": 10, "item_weights": [], "item_values": []}).to_string()).unwrap();
    let instance = load_instance(path.to_str().unwrap()).unwrap();
    assert_eq!(instance.item_count, 0);
    assert_eq!(instance.capacity, 10);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_select_version() {
    assert_eq!(select_version(None, Some("bottom_up")).unwrap(), Version::BottomUp);
    assert_eq!(
        select_version(Some("top_down"), Some("bottom_up")).unwrap(),
        Version::TopDown
    );
    assert!(select_version(None, None).is_err());
}
