//! Tests for `vaultsync history`.

use crate::support::*;

fn with_three_versions() -> Test {
    let t = Test::init();
    for value in ["first", "second", "third"] {
        assert_success(&t.set("dev", "api-key", value));
    }
    t
}

fn version_ids(t: &Test) -> Vec<String> {
    let json = stdout_json(&t.history("list", "dev", "api-key", &["--json"]));
    json["versions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["version"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_history_list() {
    let t = with_three_versions();

    let output = t.history("list", "dev", "api-key", &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "3 versions of api-key");
    assert_stdout_contains(&output, "(current)");
    assert_stdout_contains(&output, "VERSION");
}

#[test]
fn test_history_show_full_and_short_id() {
    let t = with_three_versions();
    let ids = version_ids(&t);

    let output = t.history("show", "dev", "api-key", &[&ids[2]]);
    assert_success(&output);
    assert_stdout_contains(&output, "first");
    assert_stdout_contains(&output, "enabled");

    let output = t.history("show", "dev", "api-key", &[&ids[1][..8]]);
    assert_success(&output);
    assert_stdout_contains(&output, "second");
}

#[test]
fn test_history_restore_appends_version() {
    let t = with_three_versions();
    let ids = version_ids(&t);

    let output = t.history("restore", "dev", "api-key", &[&ids[2], "--yes"]);
    assert_success(&output);
    assert_stdout_contains(&output, "restored api-key");

    assert_eq!(t.value("dev", "api-key"), "first");

    let after = version_ids(&t);
    assert_eq!(after.len(), 4);
    assert_eq!(&after[1..], &ids[..]);
}

#[test]
fn test_history_restore_current_still_appends() {
    let t = with_three_versions();
    let ids = version_ids(&t);

    assert_success(&t.history("restore", "dev", "api-key", &[&ids[0], "--yes"]));
    assert_eq!(version_ids(&t).len(), 4);
    assert_eq!(t.value("dev", "api-key"), "third");
}

#[test]
fn test_history_restore_unknown_version() {
    let t = with_three_versions();

    let output = t.history("restore", "dev", "api-key", &["nope", "--yes"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "version nope of secret api-key not found");
    assert_eq!(version_ids(&t).len(), 3);
}

#[test]
fn test_history_restore_needs_confirmation() {
    let t = with_three_versions();
    let ids = version_ids(&t);

    let output = t.history("restore", "dev", "api-key", &[&ids[2]]);
    assert_failure(&output);
    assert_stderr_contains(&output, "pass --yes");
    assert_eq!(t.value("dev", "api-key"), "third");
}

#[test]
fn test_history_missing_secret() {
    let t = Test::init();

    let output = t.history("list", "dev", "ghost", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "secret not found: ghost");
}
