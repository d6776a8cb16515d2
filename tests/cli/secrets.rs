//! Tests for `vaultsync set/get/rm/list`.

use crate::support::*;

#[test]
fn test_set_and_get_roundtrip() {
    let t = Test::init();

    let output = t.set("dev", "database-url", "postgres://localhost/db");
    assert_success(&output);
    assert_stdout_contains(&output, "database-url");

    assert_eq!(t.value("dev", "database-url"), "postgres://localhost/db");
}

#[test]
fn test_environments_are_isolated() {
    let t = Test::with_secrets("dev", &[("token", "dev-token")]);

    let output = t.get("prod", "token");
    assert_failure(&output);
    assert_stderr_contains(&output, "secret not found");
}

#[test]
fn test_set_overwrites() {
    let t = Test::with_secrets("dev", &[("token", "one")]);

    assert_success(&t.set("dev", "token", "two"));
    assert_eq!(t.value("dev", "token"), "two");
}

#[test]
fn test_set_reports_sanitized_name() {
    let t = Test::init();

    let output = t.set("dev", "db_pass", "secret");
    assert_success(&output);
    assert_stderr_contains(&output, "stored as db-pass");

    assert_eq!(t.value("dev", "db-pass"), "secret");
}

#[test]
fn test_set_empty_value_fails() {
    let t = Test::init();

    let output = t.set("dev", "token", "");
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot be empty");
}

#[test]
fn test_list() {
    let t = Test::with_secrets("prod", PROD_SECRETS);

    let output = t.list("prod");
    assert_success(&output);
    assert_stdout_contains(&output, "3 secrets in prod");
    assert_stdout_contains(&output, "api-key");

    let output = t.list("dev");
    assert_success(&output);
    assert_stdout_contains(&output, "no secrets stored");
}

#[test]
fn test_list_json() {
    let t = Test::with_secrets("prod", PROD_SECRETS);

    let json = stdout_json(&t.list_json("prod"));
    assert_eq!(json["count"], 3);
    assert_eq!(json["names"][0], "api-key");
}

#[test]
fn test_rm_hides_secret() {
    let t = Test::with_secrets("dev", &[("token", "x")]);

    let output = t.rm("dev", "token");
    assert_success(&output);
    assert_stdout_contains(&output, "removed token");

    assert_failure(&t.get("dev", "token"));
    assert_stdout_excludes(&t.list("dev"), "token");

    let output = t.rm("dev", "token");
    assert_failure(&output);
}
