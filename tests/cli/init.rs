//! Tests for `vaultsync init`.

use crate::support::*;
use std::fs;

#[test]
fn test_init_writes_default_environments() {
    let t = Test::new();

    let output = t.init_cmd();
    assert_success(&output);
    assert_stdout_contains(&output, "initialized .vaultsync.toml");

    let config = fs::read_to_string(t.path(".vaultsync.toml")).unwrap();
    assert!(config.contains("[vaultsync]"));
    for id in ["prod", "staging", "dev"] {
        assert!(config.contains(&format!("id = \"{}\"", id)), "missing {}", id);
    }
    assert!(config.contains("file:.vaultsync/stores/prod.json"));
}

#[test]
fn test_init_twice_fails_without_force() {
    let t = Test::init();

    let output = t.init_cmd();
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
    assert_stderr_contains(&output, "--force");

    let output = t.cmd().args(["init", "--force"]).output().unwrap();
    assert_success(&output);
}

#[test]
fn test_init_with_config_flag() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--config", "nested/sync.toml", "init"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.path("nested/sync.toml").exists());
    assert!(!t.path(".vaultsync.toml").exists());

    let output = t
        .cmd()
        .args(["--config", "nested/sync.toml", "set", "--env", "dev", "token", "abc"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.path("nested/.vaultsync/stores/dev.json").exists());
}

#[test]
fn test_config_env_var() {
    let t = Test::new();
    let path = t.path("elsewhere.toml");

    let output = t
        .cmd()
        .env("VAULTSYNC_CONFIG", &path)
        .arg("init")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(path.exists());

    let output = t.cmd().env("VAULTSYNC_CONFIG", &path).arg("envs").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Production");
}
