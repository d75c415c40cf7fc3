//! Integration tests for resolving keys from documents on disk.
//!
//! Tests that read or modify the process environment are marked with
//! `#[serial]`; everything else runs in parallel.

mod common;

use common::{DocumentFixture, EnvGuard};
use entrys::convert::int;
use entrys::document::JsonLoader;
use entrys::{Entry, EntryError, FileContent, Val};
use serial_test::serial;
use std::collections::HashMap;

const APPLICATION: &str = "\
server:
  host: ${ENTRYS_IT_HOST:0.0.0.0}
  port: 8080
database:
  url: ${ENTRYS_IT_DB_URL:postgres://localhost:5432/app}
  replicas:
    - db-1
    - db-2
  empty: []
  password: ${ENTRYS_IT_DB_PASSWORD}
  timeout: null
description: |
  First line.
  Second line.
";

#[test]
fn test_resolves_values_from_file() {
    let fixture = DocumentFixture::new();
    let path = fixture.write("application.yaml", APPLICATION);
    let env = HashMap::<String, String>::new();

    let port = Val::from_path("server.port", &path).with_environment(env.clone());
    assert_eq!(port.value().unwrap(), "8080");

    let replicas = Val::from_path("database.replicas", &path).with_environment(env.clone());
    assert_eq!(replicas.value().unwrap(), "db-1;db-2");

    let empty = Val::from_path("database.empty", &path).with_environment(env.clone());
    assert_eq!(empty.value().unwrap(), "");

    let description = Val::from_path("description", &path).with_environment(env);
    assert_eq!(description.value().unwrap(), "First line.\nSecond line.\n");
}

#[test]
fn test_defaults_keep_separators() {
    let fixture = DocumentFixture::new();
    let path = fixture.write("application.yaml", APPLICATION);

    let url = Val::from_path("database.url", &path).with_environment(HashMap::new());
    assert_eq!(url.value().unwrap(), "postgres://localhost:5432/app");
}

#[test]
fn test_missing_values_fail() {
    let fixture = DocumentFixture::new();
    let path = fixture.write("application.yaml", APPLICATION);
    let env = HashMap::<String, String>::new();

    for key in ["database.timeout", "database.user", "cache.host"] {
        let err = Val::from_path(key, &path)
            .with_environment(env.clone())
            .value()
            .unwrap_err();
        assert!(err.is_missing(), "{key}: {err}");
        assert_eq!(err.to_string(), format!("attribute for key '{key}' is null"));
    }
}

#[test]
fn test_required_placeholder_without_variable_fails() {
    let fixture = DocumentFixture::new();
    let path = fixture.write("application.yaml", APPLICATION);

    let err = Val::from_path("database.password", &path)
        .with_environment(HashMap::new())
        .value()
        .unwrap_err();
    assert!(err.is_missing());
}

#[test]
fn test_mapping_terminal_fails_with_type_mismatch() {
    let fixture = DocumentFixture::new();
    let path = fixture.write("application.yaml", APPLICATION);

    let err = Val::from_path("database", &path)
        .with_environment(HashMap::new())
        .value()
        .unwrap_err();
    assert!(matches!(err.root(), EntryError::TypeMismatch { .. }));
}

#[test]
fn test_missing_file_fails_with_path() {
    let fixture = DocumentFixture::new();
    let path = fixture.path("application.yaml");

    let err = Val::from_path("server.port", &path).value().unwrap_err();
    assert!(matches!(err.root(), EntryError::Io { .. }));
    assert!(err.root().to_string().contains("application.yaml"));
}

#[test]
fn test_json_document_by_extension() {
    let fixture = DocumentFixture::new();
    let path = fixture.write(
        "application.json",
        r#"{"server": {"port": 8080, "tls": false, "hosts": ["a", "b"]}}"#,
    );
    let env = HashMap::<String, String>::new();

    let port = Val::from_path("server.port", &path).with_environment(env.clone());
    assert_eq!(port.value().unwrap(), "8080");
    let tls = Val::from_path("server.tls", &path).with_environment(env.clone());
    assert_eq!(tls.value().unwrap(), "false");
    let hosts = Val::from_path("server.hosts", &path).with_environment(env);
    assert_eq!(hosts.value().unwrap(), "a;b");
}

#[test]
fn test_explicit_loader_overrides_extension() {
    let fixture = DocumentFixture::new();
    let path = fixture.write("settings.conf", r#"{"port": 8080}"#);

    let entry = Val::new("port", FileContent::new(&path))
        .with_loader(JsonLoader)
        .with_environment(HashMap::new());
    assert_eq!(entry.value().unwrap(), "8080");
}

#[test]
fn test_file_changes_are_seen() {
    let fixture = DocumentFixture::new();
    let path = fixture.write("application.yaml", "port: 8080\n");
    let entry = int(Val::from_path("port", &path));
    assert_eq!(entry.value().unwrap(), 8080);

    fixture.write("application.yaml", "port: 9090\n");
    assert_eq!(entry.value().unwrap(), 9090);
}

#[test]
#[serial]
fn test_process_environment_overrides_default() {
    let fixture = DocumentFixture::new();
    let path = fixture.write("application.yaml", APPLICATION);

    let _guard = EnvGuard::new("ENTRYS_IT_HOST", "10.0.0.1");
    assert_eq!(
        Val::from_path("server.host", &path).value().unwrap(),
        "10.0.0.1"
    );
}

#[test]
#[serial]
fn test_process_environment_unset_uses_default() {
    let fixture = DocumentFixture::new();
    let path = fixture.write("application.yaml", APPLICATION);

    let _guard = EnvGuard::remove("ENTRYS_IT_HOST");
    assert_eq!(Val::from_path("server.host", &path).value().unwrap(), "0.0.0.0");
}

#[test]
#[serial]
fn test_process_environment_required_variable() {
    let fixture = DocumentFixture::new();
    let path = fixture.write("application.yaml", APPLICATION);

    let _guard = EnvGuard::new("ENTRYS_IT_DB_PASSWORD", "  s3cret  ");
    assert_eq!(
        Val::from_path("database.password", &path).value().unwrap(),
        "  s3cret  "
    );
}
