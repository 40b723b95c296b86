//! Integration tests for `assetmap financial` and `assetmap physical`.

mod common;

use common::*;

#[test]
fn add_writes_pretty_json_collection() {
    let env = TestEnv::new();
    env.add_financial("F1", "1200.50");

    let raw = env.read_data_file("financial_assets.json");
    assert!(raw.ends_with("\n"), "collection file should end with a newline");
    assert!(raw.contains("\n  {"), "collection file should be pretty-printed:\n{}", raw);

    let records = env.read_json_file("financial_assets.json");
    assert_eq!(ids(&records), vec!["F1"]);
    assert_eq!(records[0]["value"], 1200.5);
    assert_eq!(records[0]["acquired_on"], "2024-01-15");
}

#[test]
fn add_reports_created_record_as_json() {
    let env = TestEnv::new();
    let (result, value) = env.run_json(&[
        "financial",
        "add",
        "--id",
        "F1",
        "--name",
        "Lathe",
        "--category",
        "machinery",
        "--value",
        "1,000",
        "--acquired-on",
        "2023-06-01",
        "--notes",
        "second hand",
    ]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(value["type"], "created");
    assert_eq!(value["side"], "financial");
    assert_eq!(value["record"]["id"], "F1");
    assert_eq!(value["record"]["value"], 1000.0);
    assert_eq!(value["record"]["notes"], "second hand");
}

#[test]
fn duplicate_id_is_rejected_and_store_unchanged() {
    let env = TestEnv::new();
    env.add_financial("F1", "10");
    let before = env.read_data_file("financial_assets.json");

    let result = env.run(&[
        "financial",
        "add",
        "--id",
        "F1",
        "--name",
        "Other",
        "--category",
        "x",
        "--value",
        "5",
        "--acquired-on",
        "2024-01-01",
    ]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("financial asset 'F1' already exists"),
        "stderr:\n{}",
        result.stderr
    );
    assert_eq!(env.read_data_file("financial_assets.json"), before);
}

#[test]
fn malformed_value_is_a_validation_error() {
    let env = TestEnv::new();
    let (result, value) = env.run_json(&[
        "financial",
        "add",
        "--id",
        "F1",
        "--name",
        "Lathe",
        "--category",
        "machinery",
        "--value",
        "abc",
        "--acquired-on",
        "2023-06-01",
    ]);

    assert!(!result.success);
    assert_eq!(value["type"], "error");
    assert_eq!(value["kind"], "validation");
    assert!(result.stderr.contains("invalid value"), "{}", result.stderr);
    assert!(!env.data_path("financial_assets.json").exists());
}

#[test]
fn negative_value_is_rejected() {
    let env = TestEnv::new();
    let result = env.run(&[
        "financial",
        "add",
        "--id",
        "F1",
        "--name",
        "Lathe",
        "--category",
        "machinery",
        "--value",
        "-5",
        "--acquired-on",
        "2023-06-01",
    ]);

    assert!(!result.success);
    assert!(result.stderr.contains("must not be negative"), "{}", result.stderr);
}

#[test]
fn update_changes_only_given_fields() {
    let env = TestEnv::new();
    env.add_financial("F1", "10");

    let (result, value) = env.run_json(&["financial", "update", "F1", "--name", "Renamed"]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(value["type"], "updated");

    let records = env.read_json_file("financial_assets.json");
    assert_eq!(records[0]["name"], "Renamed");
    assert_eq!(records[0]["category"], "equipment");
    assert_eq!(records[0]["value"], 10.0);
}

#[test]
fn update_unknown_id_is_not_found() {
    let env = TestEnv::new();
    env.add_financial("F1", "10");

    let (result, value) = env.run_json(&["financial", "update", "F9", "--name", "X"]);
    assert!(!result.success);
    assert_eq!(value["kind"], "not_found");
}

#[test]
fn list_on_empty_store_says_so() {
    let env = TestEnv::new();
    let result = env.run_ok(&["financial", "list"]);
    assert_eq!(result.stdout, "No financial assets.\n");
}

#[test]
fn list_is_ordered_by_identifier() {
    let env = TestEnv::new();
    env.add_financial("F2", "1");
    env.add_financial("F1", "2");

    let (_, value) = env.run_json(&["financial", "list"]);
    assert_eq!(value["type"], "financial_assets");
    assert_eq!(ids(&value["records"]), vec!["F1", "F2"]);
    assert_eq!(ids(&env.read_json_file("financial_assets.json")), vec!["F1", "F2"]);

    let text = env.run_ok(&["financial", "list"]).stdout;
    let f1 = text.find("F1").expect("F1 listed");
    let f2 = text.find("F2").expect("F2 listed");
    assert!(f1 < f2, "table should be sorted by id:\n{}", text);
}

#[test]
fn show_lists_physical_counterparts() {
    let env = TestEnv::new();
    env.add_financial("F1", "100");
    env.add_physical("P2", "idle");
    env.add_physical("P1", "in-use");
    env.map("F1", "P2");
    env.map("F1", "P1");

    let (_, value) = env.run_json(&["financial", "show", "F1"]);
    assert_eq!(value["type"], "financial_asset");
    assert_eq!(value["record"]["id"], "F1");
    assert_eq!(value["physical_ids"], serde_json::json!(["P1", "P2"]));
}

#[test]
fn physical_status_must_be_known() {
    let env = TestEnv::new();
    let result = env.run(&[
        "physical",
        "add",
        "--id",
        "P1",
        "--name",
        "Drill",
        "--location",
        "Bay 4",
        "--status",
        "lost",
    ]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("'lost' is not one of in-use, idle, disposed"),
        "{}",
        result.stderr
    );
}

#[test]
fn physical_update_status() {
    let env = TestEnv::new();
    env.add_physical("P1", "in-use");

    env.run_ok(&["physical", "update", "P1", "--status", "disposed"]);

    let records = env.read_json_file("physical_assets.json");
    assert_eq!(records[0]["status"], "disposed");
    assert_eq!(records[0]["location"], "Warehouse A");
}

#[test]
fn corrupted_collection_is_reported_and_left_alone() {
    let env = TestEnv::new();
    env.write_data_file("financial_assets.json", "[{\"id\": \"F1\"");

    let result = env.run(&["financial", "list"]);
    assert!(!result.success);
    assert!(result.stderr.contains("corrupted"), "{}", result.stderr);
    assert_eq!(env.read_data_file("financial_assets.json"), "[{\"id\": \"F1\"");
}

#[test]
fn empty_collection_file_loads_as_empty() {
    let env = TestEnv::new();
    env.write_data_file("financial_assets.json", "");

    let (result, value) = env.run_json(&["financial", "list"]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(value["records"], serde_json::json!([]));
}
