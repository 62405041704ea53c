//! Common utilities for CLI E2E tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub const CATALOG: &str = r#"[
  {"category": "TAR-BASE", "insurer_name": "Helvia", "plan_id": "S200", "plan_label": "Helvia Basic Plus",
   "monthly_premium": "200", "age_bracket": "AKL-ERW", "deductible": 300, "accident_coverage": "MIT-UNF"},
  {"category": "TAR-BASE", "insurer_name": "Helvia", "plan_id": "S180", "plan_label": "Helvia Basic",
   "monthly_premium": 180, "age_bracket": "AKL-ERW", "deductible": 300, "accident_coverage": "MIT-UNF"},
  {"category": "TAR-HAM", "insurer_name": "Helvia", "plan_id": "F150", "plan_label": "Helvia Family Doctor",
   "monthly_premium": "150", "age_bracket": "AKL-ERW", "deductible": 300, "accident_coverage": "MIT-UNF"},
  {"category": "TAR-HMO", "insurer_name": "Alpina", "plan_id": "H170", "plan_label": "Alpina HMO",
   "monthly_premium": "170", "age_bracket": "AKL-ERW", "deductible": 300, "accident_coverage": "MIT-UNF"},
  {"category": "TAR-DIV", "insurer_name": "Rhein", "plan_id": "O190", "plan_label": "Rhein Telmed",
   "monthly_premium": "190", "age_bracket": "AKL-ERW", "deductible": 300, "accident_coverage": "MIT-UNF"},
  {"category": "TAR-HMO", "insurer_name": "Alpina", "plan_id": "H-2500", "plan_label": "Alpina HMO 2500",
   "monthly_premium": "90", "age_bracket": "AKL-ERW", "deductible": 2500, "accident_coverage": "MIT-UNF"}
]"#;

pub const PROFILE: &str = r#"
age_bracket = "AKL-ERW"
canton = "ZH"
region = "1"
deductible = 300
accident_coverage = "MIT-UNF"
current_insurer = "Helvia"
current_plan_id = "S180"
"#;

/// Isolated config directory plus input files.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with(PROFILE, CATALOG)
    }

    pub fn with(profile: &str, catalog: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("profile.toml"), profile).unwrap();
        std::fs::write(dir.path().join("offers.json"), catalog).unwrap();
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Invoke the CLI and return (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        run_cli_in(&self.config_dir(), args)
    }

    /// Invoke an evaluation subcommand with the fixture inputs.
    pub fn run_with_inputs(&self, args: &[&str]) -> (String, String, i32) {
        let profile = self.path("profile.toml");
        let catalog = self.path("offers.json");
        let mut full: Vec<&str> = args.to_vec();
        full.extend([
            "--profile",
            profile.to_str().unwrap(),
            "--catalog",
            catalog.to_str().unwrap(),
        ]);
        self.run(&full)
    }
}

pub fn run_cli_in(config_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_switchwise"))
        .args(args)
        .env("SWITCHWISE_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Parse JSON output from CLI.
pub fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

/// Check if string contains substring
pub fn assert_contains(haystack: &str, needle: &str) {
    assert!(
        haystack.contains(needle),
        "Expected '{}' to contain '{}'",
        haystack,
        needle
    );
}
