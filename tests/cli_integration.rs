//! Integration tests for the sei-mate CLI
//!
//! These tests drive the built binary:
//! - Chatting (single message and stdin)
//! - Listing actions and showing the character
//! - Provider selection from environment and config
//! - The provider verification report

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use lazy_regex::regex_is_match;
use tempfile::TempDir;

/// Helper to get the sei-mate binary path
fn sei_mate_binary() -> PathBuf {
    // When running tests, the binary is in target/debug/sei-mate
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("sei-mate");
    path
}

const PROVIDER_VARS: &[&str] = &[
    "OPENAI_API_KEY",
    "ANTHROPIC_API_KEY",
    "OPENROUTER_API_KEY",
    "OLLAMA_API_ENDPOINT",
];

/// Command isolated from the user's config, logs and provider keys
fn command(home: &Path, env: &[(&str, &str)], args: &[&str]) -> Command {
    let mut cmd = Command::new(sei_mate_binary());
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_DATA_HOME", home.join("data"))
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("SEI_MATE_DIR", home.join("sei-mate"))
        .env("NO_COLOR", "1")
        .env_remove("SEI_MATE_CONFIG")
        .env_remove("RUST_LOG");
    for var in PROVIDER_VARS {
        cmd.env_remove(var);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.args(args);
    cmd
}

fn run(home: &Path, env: &[(&str, &str)], args: &[&str]) -> Output {
    command(home, env, args).output().expect("Failed to execute sei-mate")
}

fn run_stdout(home: &Path, env: &[(&str, &str)], args: &[&str]) -> String {
    let output = run(home, env, args);
    assert!(output.status.success(), "sei-mate {:?} failed: {:?}", args, output);
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn run_json(home: &Path, env: &[(&str, &str)], args: &[&str]) -> serde_json::Value {
    let stdout = run_stdout(home, env, args);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("Invalid JSON ({}): {}", e, stdout))
}

const ALL_KEYS: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "sk-real-openai-0000"),
    ("ANTHROPIC_API_KEY", "sk-ant-real-0000"),
    ("OPENROUTER_API_KEY", "sk-or-real-0000"),
];

// ============================================================================
// Chat
// ============================================================================

#[test]
fn test_chat_transfer_json() {
    let temp = TempDir::new().unwrap();
    let reply = run_json(
        temp.path(),
        &[],
        &["chat", "-o", "json", "transfer", "25", "SEI", "to", "sei1dest"],
    );

    assert_eq!(reply["action"], "SEI_TRANSFER");
    assert_eq!(reply["content"]["type"], "transfer_pending");
    assert_eq!(reply["content"]["amount"], "25");
    assert_eq!(reply["content"]["recipient"], "sei1dest");
    assert_eq!(reply["content"]["estimated_usd"], 10.5);
    assert_eq!(reply["content"]["status"], "pending_confirmation");
}

#[test]
fn test_chat_transfer_without_address_text() {
    let temp = TempDir::new().unwrap();
    let stdout = run_stdout(temp.path(), &[], &["chat", "-o", "text", "send 10 SEI"]);

    assert!(stdout.contains("Please use the format: transfer <amount> SEI to <address>"));
    assert!(!stdout.contains("Transfer Request"));
}

#[test]
fn test_chat_balance_text() {
    let temp = TempDir::new().unwrap();
    let stdout = run_stdout(temp.path(), &[], &["chat", "-o", "text", "what's in my WALLET?"]);

    assert!(stdout.contains("SEI: 1,250.50 ($525.21)"));
    assert!(stdout.contains("USDC: 500.00 ($500.00)"));
    assert!(stdout.contains("ATOM: 25.75 ($257.50)"));
    assert!(stdout.contains("Total Value: $1,282.71"));
}

#[test]
fn test_chat_confirm_without_transfer() {
    let temp = TempDir::new().unwrap();
    let reply = run_json(temp.path(), &[], &["chat", "-o", "json", "CONFIRM"]);

    assert_eq!(reply["action"], "SEI_CONFIRM");
    assert_eq!(reply["content"]["success"], true);
    let hash = reply["content"]["tx_hash"].as_str().unwrap();
    assert!(regex_is_match!(r"^0x[0-9a-f]{40}$", hash), "bad hash: {}", hash);
}

#[test]
fn test_chat_unmatched_uses_model_stub() {
    let temp = TempDir::new().unwrap();
    let reply = run_json(temp.path(), &[], &["chat", "-o", "json", "--model", "large", "good morning"]);

    assert!(reply["action"].is_null());
    assert!(reply["reply"].as_str().unwrap().contains("SEI Mate"));
}

#[test]
fn test_chat_reads_stdin_until_exit() {
    let temp = TempDir::new().unwrap();
    let mut child = command(temp.path(), &[], &["chat", "-o", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn sei-mate");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"transfer 1.5 SEI to sei1abc\n\nyes\nexit\nbalance\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "chat failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let replies: Vec<serde_json::Value> = stdout.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

    assert_eq!(replies.len(), 2, "stdout: {}", stdout);
    assert_eq!(replies[0]["action"], "SEI_TRANSFER");
    assert_eq!(replies[0]["content"]["estimated_usd"], 0.63);
    assert_eq!(replies[1]["action"], "SEI_CONFIRM");
}

// ============================================================================
// Actions and character
// ============================================================================

#[test]
fn test_actions_listed_in_dispatch_order() {
    let temp = TempDir::new().unwrap();
    let summary = run_json(temp.path(), &[], &["actions", "-o", "json"]);

    let names: Vec<&str> = summary["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["SEI_TRANSFER", "SEI_BALANCE", "SEI_CONFIRM"]);
    assert_eq!(summary["models"], serde_json::json!(["TEXT_SMALL", "TEXT_LARGE"]));
}

fn plugin_list(character: &serde_json::Value) -> Vec<String> {
    character["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_character_without_provider_keys() {
    let temp = TempDir::new().unwrap();
    let character = run_json(temp.path(), &[], &["character", "-o", "json"]);

    assert_eq!(character["name"], "SEI Mate");
    assert_eq!(
        plugin_list(&character),
        vec!["@elizaos/plugin-sql", "@elizaos/plugin-bootstrap"]
    );
}

#[test]
fn test_character_plugins_follow_environment() {
    let temp = TempDir::new().unwrap();
    let character = run_json(
        temp.path(),
        &[
            ("OPENAI_API_KEY", "sk-test"),
            ("OLLAMA_API_ENDPOINT", "http://localhost:11434"),
        ],
        &["character", "-o", "json"],
    );

    assert_eq!(
        plugin_list(&character),
        vec![
            "@elizaos/plugin-sql",
            "@elizaos/plugin-openai",
            "@elizaos/plugin-ollama",
            "@elizaos/plugin-bootstrap"
        ]
    );
}

#[test]
fn test_config_overrides_provider_detection() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("sei-mate");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("sei-mate.yaml"),
        "providers:\n  openai: false\n  openrouter: true\n",
    )
    .unwrap();

    let character = run_json(
        temp.path(),
        &[("OPENAI_API_KEY", "sk-test")],
        &["character", "-o", "json"],
    );

    let plugins = plugin_list(&character);
    assert!(!plugins.contains(&"@elizaos/plugin-openai".to_string()));
    assert!(plugins.contains(&"@elizaos/plugin-openrouter".to_string()));
}

#[test]
fn test_character_from_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("custom.yaml");
    fs::write(&file, "name: Custom Mate\nbio:\n  - Custom bio\n").unwrap();

    let character = run_json(
        temp.path(),
        &[],
        &["character", "-o", "json", "--file", file.to_str().unwrap()],
    );

    assert_eq!(character["name"], "Custom Mate");
    assert_eq!(character["bio"][0], "Custom bio");
}

#[test]
fn test_character_from_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), &[], &["character", "--file", "missing.yaml"]);
    assert!(!output.status.success());
}

// ============================================================================
// Verification report
// ============================================================================

#[test]
fn test_verify_without_keys_reports_mock_mode() {
    let temp = TempDir::new().unwrap();
    let stdout = run_stdout(temp.path(), &[], &["verify", "-o", "text"]);

    assert!(stdout.contains("Available: 0"), "stdout: {}", stdout);
    assert!(stdout.contains("Primary: none"));
    assert!(stdout.contains("Mock mode"));
    assert!(stdout.contains("export OPENAI_API_KEY"));
    assert!(stdout.contains("https://api.anthropic.com/v1/messages"));
    assert!(stdout.contains("Rate limit exceeded (429)"));
}

#[test]
fn test_verify_with_all_keys() {
    let temp = TempDir::new().unwrap();
    let report = run_json(temp.path(), ALL_KEYS, &["verify", "-o", "json"]);

    assert_eq!(
        report["available"],
        serde_json::json!(["openai", "anthropic", "openrouter"])
    );
    assert_eq!(report["primary"], "openai");

    let stdout = run_stdout(temp.path(), ALL_KEYS, &["verify", "-o", "text"]);
    assert!(stdout.contains("Available: 3"));
    assert!(stdout.contains("Primary: openai"));
    assert!(!stdout.contains("Mock mode"));
    assert!(!stdout.contains("sk-real-openai-0000"), "keys must be masked");
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_get_log_level() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("sei-mate");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("sei-mate.yaml"), "log_level: debug\n").unwrap();

    let stdout = run_stdout(temp.path(), &[], &["config", "get", "log_level"]);
    assert_eq!(stdout.trim(), "debug");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), &[], &["config", "get", "nope"]);
    assert!(!output.status.success());
}
