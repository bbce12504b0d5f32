//! Integration tests for the gitline CLI.
//!
//! These tests run the binary against real temporary repositories.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;
use tempfile::TempDir;

/// Run a git command in `dir`, panicking on failure.
fn git(dir: &Path, args: &[&str]) {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Helper to create a git repository with one commit on `main`.
fn setup_git_repo() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let dir = temp.path();

    git(dir, &["init"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    git(dir, &["config", "tag.gpgsign", "false"]);

    // Create initial commit so we have a valid HEAD
    fs::write(dir.join("README.md"), "# Test Repo\n").expect("Failed to write README");
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", "Initial commit"]);

    // Rename branch to main (in case default is master)
    git(dir, &["branch", "-M", "main"]);

    temp
}

/// Helper to get the gitline command, isolated from any user config.
fn gitline(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gitline"));
    cmd.arg("--config")
        .arg(dir.join("gitline-test-missing-config.toml"))
        .env_remove("NO_COLOR")
        .env_remove("GITLINE_LOG")
        .current_dir(dir);
    cmd
}

/// Run `gitline --no-color prompt` in `dir` and return stdout.
fn plain_prompt(dir: &Path) -> String {
    let output = gitline(dir)
        .args(["--no-color", "prompt"])
        .output()
        .expect("Failed to run gitline");
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

// ============================================================================
// Basic CLI tests
// ============================================================================

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    gitline(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitline"));
}

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    gitline(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prompt"))
        .stdout(predicate::str::contains("filter"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_no_subcommand_shows_help() {
    let temp = TempDir::new().unwrap();
    gitline(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_completions() {
    let temp = TempDir::new().unwrap();
    gitline(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitline"));
}

// ============================================================================
// Prompt command tests
// ============================================================================

#[test]
fn test_prompt_outside_repo_is_empty() {
    let temp = TempDir::new().unwrap();
    gitline(temp.path())
        .arg("prompt")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_prompt_clean_repo() {
    let temp = setup_git_repo();
    assert_eq!(plain_prompt(temp.path()), "(main) ");
}

#[test]
fn test_prompt_from_subdirectory() {
    let temp = setup_git_repo();
    let nested = temp.path().join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    gitline(temp.path())
        .args(["--no-color", "prompt", "--path"])
        .arg(&nested)
        .assert()
        .success()
        .stdout("(main) ");
}

#[test]
fn test_prompt_relative_path() {
    let temp = setup_git_repo();
    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();

    gitline(temp.path())
        .args(["--no-color", "prompt", "--path", "src"])
        .assert()
        .success()
        .stdout("(main) ");

    gitline(&src)
        .args(["--no-color", "prompt", "--path", "."])
        .assert()
        .success()
        .stdout("(main) ");
}

#[test]
fn test_prompt_is_colored_by_default() {
    let temp = setup_git_repo();
    gitline(temp.path())
        .arg("prompt")
        .assert()
        .success()
        .stdout("(\u{1b}[32mmain\u{1b}[0m) ");
}

#[test]
fn test_prompt_untracked_file() {
    let temp = setup_git_repo();
    fs::write(temp.path().join("new.txt"), "new").unwrap();

    assert_eq!(plain_prompt(temp.path()), "(main) […1] ");
}

#[test]
fn test_prompt_staged_and_changed() {
    let temp = setup_git_repo();
    fs::write(temp.path().join("added.txt"), "added").unwrap();
    git(temp.path(), &["add", "added.txt"]);
    fs::write(temp.path().join("README.md"), "# Changed\n").unwrap();

    assert_eq!(plain_prompt(temp.path()), "(main) [●1 ✚1] ");
}

#[test]
fn test_prompt_stash_only() {
    let temp = setup_git_repo();
    fs::write(temp.path().join("README.md"), "# Stashed\n").unwrap();
    git(temp.path(), &["stash"]);

    assert_eq!(plain_prompt(temp.path()), "(main) [⌂1] ");
}

#[test]
fn test_prompt_detached_at_tag() {
    let temp = setup_git_repo();
    git(temp.path(), &["tag", "v1.2.0"]);
    git(temp.path(), &["checkout", "--detach", "HEAD"]);

    assert_eq!(plain_prompt(temp.path()), "(v1.2.0) ");
}

#[test]
fn test_prompt_detached_without_tag_shows_hash() {
    let temp = setup_git_repo();
    git(temp.path(), &["checkout", "--detach", "HEAD"]);

    let out = plain_prompt(temp.path());
    assert!(out.starts_with("(:"), "{out}");
    assert!(out.ends_with(") "), "{out}");
}

#[test]
fn test_prompt_ahead_of_upstream() {
    let upstream = setup_git_repo();
    let clone = TempDir::new().unwrap();
    git(
        clone.path(),
        &["clone", upstream.path().to_str().unwrap(), "."],
    );
    git(clone.path(), &["config", "user.email", "test@example.com"]);
    git(clone.path(), &["config", "user.name", "Test User"]);
    git(clone.path(), &["config", "commit.gpgsign", "false"]);
    fs::write(clone.path().join("more.txt"), "more").unwrap();
    git(clone.path(), &["add", "."]);
    git(clone.path(), &["commit", "-m", "More"]);

    assert_eq!(plain_prompt(clone.path()), "(main ↑1) ");
}

#[test]
fn test_prompt_survives_invalid_palette() {
    let temp = setup_git_repo();
    let config_dir = TempDir::new().unwrap();
    let config = config_dir.path().join("config.toml");
    fs::write(&config, "[palette]\nclean = \"plaid\"\n").unwrap();

    Command::new(env!("CARGO_BIN_EXE_gitline"))
        .arg("--config")
        .arg(&config)
        .args(["--no-color", "prompt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("(main) ")
        .stderr(predicate::str::contains("using default colors"));
}

#[test]
fn test_prompt_custom_glyphs() {
    let temp = setup_git_repo();
    let config_dir = TempDir::new().unwrap();
    let config = config_dir.path().join("config.toml");
    fs::write(&config, "[glyphs]\nuntracked = \"?\"\n").unwrap();
    fs::write(temp.path().join("new.txt"), "new").unwrap();

    Command::new(env!("CARGO_BIN_EXE_gitline"))
        .arg("--config")
        .arg(&config)
        .args(["--no-color", "prompt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("(main) [?1] ");
}

// ============================================================================
// Filter command tests
// ============================================================================

#[test]
fn test_filter_template_argument() {
    let temp = setup_git_repo();
    gitline(temp.path())
        .args(["--no-color", "filter", "--template", "$ {git_enhanced}> "])
        .assert()
        .success()
        .stdout("$ (main) > ");
}

#[test]
fn test_filter_from_stdin_outside_repo() {
    let temp = TempDir::new().unwrap();
    gitline(temp.path())
        .args(["filter"])
        .write_stdin("{cwd} {git_enhanced}$ ")
        .assert()
        .success()
        .stdout("{cwd} $ ");
}

// ============================================================================
// Status command tests
// ============================================================================

#[test]
fn test_status_json() {
    let temp = setup_git_repo();
    fs::write(temp.path().join("new.txt"), "new").unwrap();

    let output = gitline(temp.path())
        .args(["status", "--json"])
        .output()
        .expect("Failed to run gitline");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["branch"], "main");
    assert_eq!(json["untracked"], 1);
    assert_eq!(json["clean"], false);
}

#[test]
fn test_status_json_outside_repo_is_null() {
    let temp = TempDir::new().unwrap();
    gitline(temp.path())
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("null"));
}

#[test]
fn test_status_human_output() {
    let temp = setup_git_repo();
    gitline(temp.path())
        .args(["--no-color", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main"))
        .stdout(predicate::str::contains("Working tree clean"));
}

#[test]
fn test_status_outside_repo_warns() {
    let temp = TempDir::new().unwrap();
    gitline(temp.path())
        .arg("status")
        .assert()
        .success()
        .stderr(predicate::str::contains("Not inside a git repository"));
}
