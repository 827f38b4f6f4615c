//! Error handling and exit-code tests.

use predicates::prelude::*;
use std::fs;

mod common;
use common::{SAMPLE_SETTINGS, TestHome, backups_for};

/// An unrecognized target name exits 1 with an unknown-target report and
/// performs no file writes.
#[test]
fn test_unknown_target_exits_nonzero_without_writes() {
    let home = TestHome::new();
    home.write_settings(SAMPLE_SETTINGS);

    home.vibe(&["foo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown target: foo"))
        .stderr(predicate::str::contains("claude, codex, gemini, all"));

    assert!(!home.claude_config_path().exists());
    assert!(!home.codex_config_path().exists());
    assert!(!home.gemini_config_path().exists());
    assert!(backups_for(&home.codex_config_path()).is_empty());
}

/// Target names are matched case-insensitively, like the menu labels
/// suggest.
#[test]
fn test_target_name_is_case_insensitive() {
    let home = TestHome::new();
    home.write_settings(SAMPLE_SETTINGS);

    home.vibe(&["CODEX"]).assert().success();
    assert!(home.codex_config_path().exists());
}

#[test]
fn test_missing_settings_file_reports_configuration_not_found() {
    let home = TestHome::new();
    // dotfiles directory exists but holds no settings file

    home.vibe(&["claude"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"))
        .stderr(predicate::str::contains("mcp-settings.json"));
}

#[test]
fn test_missing_dotfiles_directory_reports_searched_locations() {
    let home = TestHome::new();
    fs::remove_dir_all(home.dotfiles_path()).unwrap();

    home.vibe(&["claude"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"))
        .stderr(predicate::str::contains("DOTFILES_DIR"));
}

#[test]
fn test_malformed_json_reports_invalid_configuration() {
    let home = TestHome::new();
    home.write_settings("{ this is not json");

    home.vibe(&["gemini"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));

    assert!(!home.gemini_config_path().exists());
}

/// An empty (or absent) server mapping must not deploy an empty Codex
/// config.
#[test]
fn test_codex_rejects_empty_server_mapping() {
    let home = TestHome::new();
    home.write_settings(r#"{"mcpServers":{}}"#);

    home.vibe(&["codex"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No MCP servers"));

    assert!(!home.codex_config_path().exists());
}

#[test]
fn test_codex_rejects_absent_server_mapping() {
    let home = TestHome::new();
    home.write_settings("{}");

    home.vibe(&["codex"]).assert().code(1);

    assert!(!home.codex_config_path().exists());
}

/// The verbatim targets accept an empty mapping: the document is deployed
/// as-is.
#[test]
fn test_claude_accepts_empty_server_mapping() {
    let home = TestHome::new();
    home.write_settings(r#"{"mcpServers":{}}"#);

    home.vibe(&["claude"]).assert().success();
    assert!(home.claude_config_path().exists());
}

/// Without a terminal, interactive mode fails cleanly instead of hanging.
#[test]
fn test_interactive_mode_without_terminal_fails_cleanly() {
    let home = TestHome::new();
    home.write_settings(SAMPLE_SETTINGS);

    home.vibe(&[]).write_stdin("").assert().code(1);
}

/// A failed Codex deployment must leave a previously deployed config
/// untouched.
#[test]
fn test_failed_deploy_preserves_existing_destination() {
    let home = TestHome::new();
    home.write_settings(SAMPLE_SETTINGS);
    home.vibe(&["codex"]).assert().success();
    let deployed = fs::read_to_string(home.codex_config_path()).unwrap();

    home.write_settings("{ broken");
    home.vibe(&["codex"]).assert().code(1);

    assert_eq!(
        fs::read_to_string(home.codex_config_path()).unwrap(),
        deployed
    );
}
