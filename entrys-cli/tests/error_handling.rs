//! Integration tests for error handling and exit codes.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Semantic failure (missing key, unset variable, failed check)
//! - 4: Invalid arguments
//! - 5: I/O error
//! - 7: Configuration error (blank profile, malformed document)

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_missing_key_exit_code() {
    let env = TestEnv::with_profile();

    env.command()
        .args(["get", "server.missing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: attribute for key 'server.missing' is null",
        ));
}

#[test]
fn test_profile_has_no_fallback_to_base() {
    let env = TestEnv::with_profile();

    // Only declared in the base document
    env.command()
        .args(["get", "server.host"])
        .assert()
        .code(1);
}

#[test]
fn test_unset_required_variable_shows_cause() {
    let env = TestEnv::with_profile();

    env.command()
        .args(["get", "server.secret"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("caused by:"))
        .stderr(predicate::str::contains("ENTRYS_TEST_SECRET"));
}

#[test]
fn test_invalid_key_exit_code() {
    let env = TestEnv::with_profile();

    env.command()
        .args(["get", "server..port"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("empty segment"));
}

#[test]
fn test_missing_file_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["get", "server.port"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("application.yaml"));
}

#[test]
fn test_blank_profile_exit_code() {
    let env = TestEnv::new();
    env.write("application.yaml", "entrys:\n  profile: ''\nport: 8080\n");

    env.command()
        .args(["get", "port"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("entrys.profile"));
}

#[test]
fn test_malformed_document_exit_code() {
    let env = TestEnv::new();
    env.write("application.yaml", "port: [8080\n");

    env.command()
        .args(["--no-profile", "get", "port"])
        .assert()
        .code(7);
}

#[test]
fn test_invalid_disable_profiles_env() {
    let env = TestEnv::with_profile();

    env.command()
        .env("ENTRYS_DISABLE_PROFILES", "maybe")
        .args(["get", "server.port"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_check_reports_failing_keys() {
    let env = TestEnv::with_profile();

    env.command()
        .args(["check", "server.port", "server.missing", "server.secret"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("server.port: ok"))
        .stderr(predicate::str::contains("server.missing:"))
        .stderr(predicate::str::contains("2 of 3 keys failed to resolve"));
}

#[test]
fn test_show_missing_key() {
    let env = TestEnv::with_profile();

    env.command()
        .args(["show", "server.missing"])
        .assert()
        .code(1);
}
