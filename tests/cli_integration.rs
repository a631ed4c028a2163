//! Integration tests that run the CLI binary.

use std::io::Write;

fn bin(config_home: &std::path::Path) -> std::process::Command {
    let bin = env!("CARGO_BIN_EXE_quizgen");
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("OPENROUTER_API_KEY")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .current_dir(config_home);
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("battle"));
    assert!(stdout.contains("practice"));
}

#[test]
fn cli_version_succeeds() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("quizgen"));
}

#[test]
fn cli_battle_without_api_key_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .args(["battle", "-n", "3"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        !output.status.success(),
        "expected failure when OPENROUTER_API_KEY is not set"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("OPENROUTER_API_KEY"),
        "expected API key error message, got: {}",
        stderr
    );
}

#[test]
fn cli_normalize_fenced_reply_to_json() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let reply_path = tmp.path().join("reply.txt");
    let mut file = std::fs::File::create(&reply_path).unwrap();
    write!(
        file,
        "Here you go:\n```json\n[{{\"question\":\"Q1\",\"options\":[\"A\",\"B\"],\"correctIndex\":5}}]\n```"
    )
    .unwrap();

    let output = bin(tmp.path())
        .args(["normalize", "--format", "json"])
        .arg(&reply_path)
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let questions: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(questions.as_array().unwrap().len(), 1);
    assert_eq!(questions[0]["correctIndex"], 1);
    assert_eq!(questions[0]["explanation"], "No explanation provided.");
    assert!(questions[0]["id"].as_str().unwrap().starts_with("import-"));
}

#[test]
fn cli_normalize_reads_stdin_as_text() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let mut child = bin(tmp.path())
        .arg("normalize")
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .expect("binary not found - run cargo build first");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"[{"Question": "Force unit?", "Answers": ["Newton", "Joule"], "correctIndex": "0"}]"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("1. Force unit?"));
    assert!(stdout.contains("A) Newton"));
    assert!(stdout.contains("Answer: A."));
}

#[test]
fn cli_normalize_without_json_fails_cleanly() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let reply_path = tmp.path().join("reply.txt");
    std::fs::write(&reply_path, "I cannot help with that.").unwrap();

    let output = bin(tmp.path())
        .arg("normalize")
        .arg(&reply_path)
        .output()
        .expect("binary not found - run cargo build first");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("try again"));
}

#[test]
fn cli_subjects_lists_catalog() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("subjects")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Physics (math notation)"));
    assert!(stdout.contains("  - Optics"));
}

#[test]
fn cli_config_reports_missing_key() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("config")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("API key:  not set"));
}

#[test]
fn cli_completions_bash() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .args(["completions", "bash"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("quizgen"));
}
