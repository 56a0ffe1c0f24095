//! Shared testing utilities for copydeck CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SERUM_JSON: &str = r#"{
  "name": "GlowBoost Vitamin C Serum",
  "concentration": "10% Vitamin C",
  "skin_type": ["Oily", "Combination"],
  "ingredients": ["Vitamin C", "Hyaluronic Acid"],
  "benefits": ["Brightening", "Fades dark spots"],
  "usage_instructions": "Apply 2-3 drops in the morning before sunscreen",
  "side_effects": "Mild tingling for sensitive skin",
  "price": "₹699"
}"#;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `copydeck` binary in the work directory.
    ///
    /// The API key is cleared so runs use the mock LLM client unless a test sets it.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("copydeck").expect("Failed to locate copydeck binary");
        cmd.current_dir(&self.work_dir).env_remove("OPENAI_API_KEY").env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the sample serum record as `product.json`.
    pub fn write_product(&self) -> PathBuf {
        self.write("product.json", SERUM_JSON)
    }

    /// Parse a JSON file relative to the work directory.
    pub fn read_json(&self, relative: &str) -> serde_json::Value {
        let content = fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e));
        serde_json::from_str(&content).expect("Output should be valid JSON")
    }
}
