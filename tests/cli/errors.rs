//! Error reporting and hints.

use crate::support::*;
use std::fs;

#[test]
fn test_not_initialized_hint() {
    let t = Test::new();

    let output = t.list("dev");
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
    assert_stderr_contains(&output, "run: vaultsync init");
}

#[test]
fn test_unknown_environment_hint() {
    let t = Test::init();

    let output = t.list("qa");
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown environment: qa");
    assert_stderr_contains(&output, "run: vaultsync envs");

    let output = t.compare("prod", "qa", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown environment: qa");
}

#[test]
fn test_invalid_selection_hint() {
    let t = Test::with_secrets("staging", &[("only-here", "x")]);

    let output = t.copy("prod", "staging", &["only-here"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "only secrets present in the source can be copied");
}

#[test]
fn test_malformed_config() {
    let t = Test::new();
    fs::write(t.path(".vaultsync.toml"), "[vaultsync\nversion = ").unwrap();

    let output = t.cmd().arg("envs").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_unsupported_store_locator() {
    let t = Test::new();
    fs::write(
        t.path(".vaultsync.toml"),
        r#"
[vaultsync]
version = "0.1.0"

[[environments]]
id = "prod"
name = "Production"
store = "https://vault.example.net"
"#,
    )
    .unwrap();

    let output = t.cmd().arg("envs").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "unsupported store locator");
}

#[test]
fn test_duplicate_environment_ids() {
    let t = Test::new();
    fs::write(
        t.path(".vaultsync.toml"),
        r#"
[vaultsync]
version = "0.1.0"

[[environments]]
id = "dev"
name = "Dev"
store = "memory:"

[[environments]]
id = "dev"
name = "Dev again"
store = "memory:"
"#,
    )
    .unwrap();

    let output = t.cmd().arg("envs").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "duplicate environment id: dev");
}

#[test]
fn test_corrupt_store_file() {
    let t = Test::init();
    fs::create_dir_all(t.path(".vaultsync/stores")).unwrap();
    fs::write(t.path(".vaultsync/stores/dev.json"), "{ not json").unwrap();

    let output = t.list("dev");
    assert_failure(&output);
    assert_stderr_contains(&output, "corrupt");
}

#[test]
fn test_compare_fails_whole_when_store_is_corrupt() {
    let t = Test::with_secrets("prod", PROD_SECRETS);
    fs::create_dir_all(t.path(".vaultsync/stores")).unwrap();
    fs::write(t.path(".vaultsync/stores/staging.json"), "{ not json").unwrap();

    let output = t.compare("prod", "staging", &["--json"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "store unavailable: staging:");
    assert!(stdout(&output).trim().is_empty());
}
