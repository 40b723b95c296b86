//! Integration tests for config discovery and overrides.

mod common;

use common::*;

#[test]
fn custom_file_names_from_config() {
    let env = TestEnv::new();
    env.write_data_file(
        "assetmap.toml",
        "[storage]\nfinancial_file = \"ledger.json\"\n",
    );

    env.add_financial("F1", "10");
    assert_eq!(ids(&env.read_json_file("ledger.json")), vec!["F1"]);
    assert!(!env.data_path("financial_assets.json").exists());
}

#[test]
fn unknown_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write_data_file("assetmap.toml", "[mapping]\ndelete_polcy = \"strict\"\n");

    let result = env.run_ok(&["financial", "list"]);
    assert!(
        result.stderr.contains("unknown config key 'delete_polcy'"),
        "{}",
        result.stderr
    );
    assert!(result.stderr.contains("did you mean 'delete_policy'"), "{}", result.stderr);
}

#[test]
fn malformed_config_is_a_config_error() {
    let env = TestEnv::new();
    env.write_data_file("assetmap.toml", "[mapping\n");

    let (result, value) = env.run_json(&["financial", "list"]);
    assert!(!result.success);
    assert_eq!(value["kind"], "config");
}

#[test]
fn explicit_config_must_exist() {
    let env = TestEnv::new();
    let missing = env.root.path().join("missing.toml").display().to_string();

    let result = env.run(&["--config", &missing, "financial", "list"]);
    assert!(!result.success);
    assert!(result.stderr.contains("invalid config"), "{}", result.stderr);
}

#[test]
fn explicit_config_is_used() {
    let env = TestEnv::new();
    let config = env.write_file("custom.toml", "[mapping]\ndelete_policy = \"strict\"\n");
    let config_arg = config.display().to_string();
    env.add_financial("F1", "10");
    env.add_physical("P1", "idle");
    env.map("F1", "P1");

    let result = env.run(&["--config", &config_arg, "financial", "delete", "F1"]);
    assert!(!result.success);
    assert!(result.stderr.contains("referenced by 1 mapping(s)"), "{}", result.stderr);
}

#[test]
fn help_lists_commands() {
    let env = TestEnv::new();
    let result = env.run_ok(&["--help"]);
    for command in ["financial", "physical", "map", "export", "clean"] {
        assert!(result.stdout.contains(command), "missing {}:\n{}", command, result.stdout);
    }
}
