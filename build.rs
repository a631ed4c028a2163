//! Build script: validates subjects.json at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let config_path: PathBuf = [&manifest_dir, "config", "subjects.json"].iter().collect();
    println!("cargo:rerun-if-changed={}", config_path.display());

    let json = std::fs::read_to_string(&config_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. subjects.json must exist and be valid.",
            config_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct SubjectEntry {
        name: String,
        notation_heavy: bool,
        topics: Vec<String>,
    }
    let entries: Vec<SubjectEntry> = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "subjects.json is invalid JSON: {}. Fix the file and rebuild.",
            e
        )
    });
    for entry in &entries {
        if entry.name.trim().is_empty() {
            panic!("subjects.json: subject name cannot be empty");
        }
    }
}
