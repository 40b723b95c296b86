//! Test environment for assetmap CLI tests.
//!
//! `TestEnv` owns a temporary data directory and runs the built binary
//! against it with a scrubbed environment, so a developer's own config or
//! `ASSETMAP_*` variables never leak into a test.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

const SCRUBBED_VARS: [&str; 5] = [
    "ASSETMAP_LOG",
    "ASSETMAP_DATA_DIR",
    "ASSETMAP_DELETE_POLICY",
    "ASSETMAP_EXPORT_PATH",
    "CLICOLOR_FORCE",
];

/// Result of running the assetmap binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as the single JSON object a `--json` run prints
    pub fn json(&self) -> Value {
        let line = self.stdout.trim();
        assert_eq!(
            line.lines().count(),
            1,
            "expected exactly one JSON line on stdout:\n{}",
            self.combined_output()
        );
        serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_assetmap")),
        }
    }

    /// The data directory passed as `--data-dir`
    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub fn data_path(&self, relative: &str) -> PathBuf {
        self.data_dir().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with `--json` and parse the object on stdout
    pub fn run_json(&self, args: &[&str]) -> (TestResult, Value) {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let result = self.run(&full);
        let value = result.json();
        (result, value)
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        std::fs::create_dir_all(self.data_dir()).expect("Failed to create data dir");

        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .arg("--data-dir")
            .arg(self.data_dir())
            .args(args)
            .stdin(Stdio::null())
            .env("HOME", self.root.path())
            .env("XDG_CONFIG_HOME", self.root.path().join("xdg"))
            .env("NO_COLOR", "1");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute assetmap");
        output_to_result(output)
    }

    /// Run and fail the test if the command did not succeed
    pub fn run_ok(&self, args: &[&str]) -> TestResult {
        let result = self.run(args);
        assert!(
            result.success,
            "assetmap {:?} failed:\n{}",
            args,
            result.combined_output()
        );
        result
    }

    pub fn add_financial(&self, id: &str, value: &str) {
        self.run_ok(&[
            "financial",
            "add",
            "--id",
            id,
            "--name",
            &format!("Asset {}", id),
            "--category",
            "equipment",
            "--value",
            value,
            "--acquired-on",
            "2024-01-15",
        ]);
    }

    pub fn add_physical(&self, id: &str, status: &str) {
        self.run_ok(&[
            "physical",
            "add",
            "--id",
            id,
            "--name",
            &format!("Item {}", id),
            "--location",
            "Warehouse A",
            "--status",
            status,
        ]);
    }

    pub fn map(&self, financial_id: &str, physical_id: &str) {
        self.run_ok(&["map", "add", financial_id, physical_id]);
    }

    pub fn read_data_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.data_path(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    pub fn read_json_file(&self, name: &str) -> Value {
        serde_json::from_str(&self.read_data_file(name))
            .unwrap_or_else(|e| panic!("{} is not valid JSON: {}", name, e))
    }

    pub fn write_data_file(&self, name: &str, content: &str) {
        write_file(&self.data_path(name), content);
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        write_file(&path, content);
        path
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Ids of the records in a JSON collection file or `records` array
pub fn ids(records: &Value) -> Vec<String> {
    records
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|r| r["id"].as_str().expect("record without id").to_string())
        .collect()
}
