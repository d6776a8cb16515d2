//! Tests for `vaultsync copy`.

use crate::support::*;

fn seeded() -> Test {
    let t = Test::with_secrets("prod", PROD_SECRETS);
    t.seed("staging", STAGING_SECRETS);
    t
}

#[test]
fn test_copy_named_secret() {
    let t = seeded();

    let output = t.copy("prod", "staging", &["db-pass"]);
    assert_success(&output);
    assert_stdout_contains(&output, "copied 1 secret(s)");

    assert_eq!(t.value("staging", "db-pass"), "prod-db-pass");
}

#[test]
fn test_copy_overwrites_existing_target() {
    let t = seeded();

    assert_success(&t.copy("prod", "staging", &["db-user"]));
    assert_eq!(t.value("staging", "db-user"), "prod-db-user");

    let json = stdout_json(&t.history("list", "staging", "db-user", &["--json"]));
    assert_eq!(json["count"], 2);
}

#[test]
fn test_copy_all_then_compare_is_aligned_on_source_side() {
    let t = seeded();

    let output = t.copy("prod", "staging", &["--all"]);
    assert_success(&output);
    assert_stdout_contains(&output, "copied 3 secret(s)");

    let json = stdout_json(&t.compare("prod", "staging", &["--json"]));
    assert_eq!(json["summary"]["onlyInSourceCount"], 0);
    assert_eq!(json["summary"]["inBothCount"], 3);
    assert_eq!(json["onlyInTarget"], serde_json::json!(["legacy-token"]));
}

#[test]
fn test_copy_filter_selects_matching() {
    let t = seeded();

    let json = stdout_json(&t.copy("prod", "staging", &["--filter", "db", "--json"]));
    assert_eq!(json["status"], "success");
    assert_eq!(json["successCount"], 2);
    let names: Vec<_> = json["outcomes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["secretName"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["db-pass", "db-user"]);

    assert_failure(&t.get("staging", "api-key"));
}

#[test]
fn test_copy_twice_succeeds_both_times() {
    let t = seeded();

    assert_success(&t.copy("prod", "staging", &["db-pass", "api-key"]));
    assert_success(&t.copy("prod", "staging", &["db-pass", "api-key"]));
}

#[test]
fn test_copy_rejects_target_only_name() {
    let t = seeded();

    let output = t.copy("prod", "staging", &["db-pass", "legacy-token"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot copy legacy-token: not present in source");

    assert_failure(&t.get("staging", "db-pass"));
}

#[test]
fn test_copy_rejects_unknown_name() {
    let t = seeded();

    let output = t.copy("prod", "staging", &["ghost"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot copy ghost");
}

#[test]
fn test_copy_with_set_override() {
    let t = seeded();

    let json = stdout_json(&t.copy(
        "prod",
        "staging",
        &["db-pass", "api-key", "--set", "db-pass=staging-db-pass", "--json"],
    ));
    assert_eq!(json["editedCount"], 1);
    assert_eq!(json["outcomes"][0]["secretName"], "api-key");
    assert_eq!(json["outcomes"][0]["wasEdited"], false);
    assert_eq!(json["outcomes"][1]["wasEdited"], true);

    assert_eq!(t.value("staging", "db-pass"), "staging-db-pass");
    assert_eq!(t.value("staging", "api-key"), "prod-api-key");
}

#[test]
fn test_copy_set_to_original_value_is_not_an_edit() {
    let t = seeded();

    let json = stdout_json(&t.copy(
        "prod",
        "staging",
        &["db-pass", "--set", "db-pass=prod-db-pass", "--json"],
    ));
    assert_eq!(json["editedCount"], 0);
    assert_eq!(json["outcomes"][0]["wasEdited"], false);
}

#[test]
fn test_copy_empty_override_fails_that_item() {
    let t = seeded();

    let output = t.copy("prod", "staging", &["db-pass", "api-key", "--set", "db-pass="]);
    assert_failure(&output);
    assert_stdout_contains(&output, "✓ api-key");
    assert_stdout_contains(&output, "✗ db-pass");
    assert_stderr_contains(&output, "1 of 2 secret(s) failed to copy");

    assert_eq!(t.value("staging", "api-key"), "prod-api-key");
    assert_failure(&t.get("staging", "db-pass"));
}

#[test]
fn test_copy_malformed_set_fails_before_writing() {
    let t = seeded();

    let output = t.copy("prod", "staging", &["db-pass", "--set", "db-pass"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid edit");
    assert_failure(&t.get("staging", "db-pass"));
}

#[test]
fn test_copy_all_with_nothing_to_copy() {
    let t = Test::with_secrets("staging", STAGING_SECRETS);

    let output = t.copy("prod", "staging", &["--all"]);
    assert_success(&output);
    assert_stdout_contains(&output, "nothing to copy");
}

#[test]
fn test_copy_requires_names_or_all() {
    let t = seeded();

    let output = t.copy("prod", "staging", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "--all");
}

#[test]
fn test_copy_without_yes_needs_terminal() {
    let t = seeded();

    let output = t
        .cmd()
        .args(["copy", "prod", "staging", "db-pass"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "pass --yes");
    assert_failure(&t.get("staging", "db-pass"));
}

#[test]
fn test_copy_target_only_name_rejected_before_confirmation() {
    let t = seeded();

    let output = t
        .cmd()
        .args(["copy", "prod", "staging", "db-pass", "legacy-token"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot copy legacy-token: not present in source");
    assert_stderr_excludes(&output, "pass --yes");
    assert_stdout_excludes(&output, "not in source");
    assert_failure(&t.get("staging", "db-pass"));
}

#[test]
fn test_copy_edit_needs_terminal() {
    let t = seeded();

    let output = t.copy("prod", "staging", &["db-pass", "--edit"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "interactive terminal");
}

#[test]
fn test_copy_same_environment_fails() {
    let t = seeded();

    let output = t.copy("prod", "prod", &["db-pass"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "must differ");
}
