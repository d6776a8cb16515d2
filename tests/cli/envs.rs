//! Tests for `vaultsync envs`.

use crate::support::*;
use std::fs;

#[test]
fn test_envs_lists_registry() {
    let t = Test::init();

    let output = t.cmd().arg("envs").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "prod");
    assert_stdout_contains(&output, "Staging");
    assert_stdout_contains(&output, "file:.vaultsync/stores/dev.json");
}

#[test]
fn test_envs_json() {
    let t = Test::init();

    let output = t.cmd().args(["envs", "--json"]).output().unwrap();
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["count"], 3);
    assert_eq!(json["environments"][0]["id"], "prod");
    assert_eq!(json["environments"][0]["color"], "red");
}

#[test]
fn test_envs_shows_description() {
    let t = Test::new();
    fs::write(
        t.path(".vaultsync.toml"),
        r#"
[vaultsync]
version = "0.1.0"

[[environments]]
id = "qa"
name = "QA"
store = "memory:"
description = "Shared test cluster"
"#,
    )
    .unwrap();

    let output = t.cmd().arg("envs").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Shared test cluster");
}
