//! End-to-end tests: collection JSON in, `OpenAPI` YAML out.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::{Path, PathBuf};
use std::process::Command;

use clap::Parser;
use oapub::{AppConfig, Cli};
use oapub_application::PublishOutcome;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("oapub").chain(args.iter().copied())).unwrap()
}

const USERS_YAML: &str = "\
openapi: 3.0.3
info:
  title: Users API
  description: null
  termsOfService: null
  contact:
    name: null
    url: null
    email: team@example.com
  version: v1.2.0
servers:
- url: http://api.test
  description: Default
- url: https://api.example.com
  description: Production
tags:
- name: Users
paths:
  /users/{id}:
    get:
      tags:
      - Users
      summary: Get User
      parameters:
      - name: id
        in: path
        schema:
          type: string
        required: true
      - name: limit
        in: query
        schema:
          type: string
        required: false
";

#[test]
fn test_publish_writes_yaml_file() {
    let out = tempdir().expect("Failed to create temp directory");
    let collection = fixture("users.json");
    let cli = cli(&[collection.to_str().unwrap(), "-o", out.path().to_str().unwrap()]);

    let outcome = oapub::run(&cli, &AppConfig::default()).unwrap();

    let PublishOutcome::Published(report) = outcome else {
        panic!("expected the collection to be published");
    };
    assert_eq!(report.receipt.file_name, "Users API.yml");
    assert_eq!(report.receipt.mime_type, "text/x-yaml");
    assert_eq!((report.paths, report.operations, report.tags, report.servers), (1, 1, 1, 2));

    let yaml = std::fs::read_to_string(out.path().join("Users API.yml")).unwrap();
    assert_eq!(yaml, USERS_YAML);
}

#[test]
fn test_configured_output_dir_is_used() {
    let out = tempdir().expect("Failed to create temp directory");
    let config = AppConfig {
        output_dir: out.path().join("specs"),
        log_filter: None,
    };
    let collection = fixture("users.json");

    oapub::run(&cli(&[collection.to_str().unwrap()]), &config).unwrap();

    assert!(out.path().join("specs").join("Users API.yml").is_file());
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let first = tempdir().expect("Failed to create temp directory");
    let second = tempdir().expect("Failed to create temp directory");
    let collection = fixture("users.json");

    for dir in [first.path(), second.path()] {
        let cli = cli(&[collection.to_str().unwrap(), "-o", dir.to_str().unwrap()]);
        oapub::run(&cli, &AppConfig::default()).unwrap();
    }

    let a = std::fs::read(first.path().join("Users API.yml")).unwrap();
    let b = std::fs::read(second.path().join("Users API.yml")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_collection_without_metadata_exports_nothing() {
    let dir = tempdir().expect("Failed to create temp directory");
    let collection = dir.path().join("plain.json");
    std::fs::write(
        &collection,
        r#"{"name":"Plain","collectionVariables":{"base_url":"http://api.test"}}"#,
    )
    .unwrap();
    let out = dir.path().join("out");

    let cli = cli(&[collection.to_str().unwrap(), "-o", out.to_str().unwrap()]);
    let outcome = oapub::run(&cli, &AppConfig::default()).unwrap();

    assert_eq!(outcome, PublishOutcome::NoMetadata);
    assert!(!out.exists());
}

#[test]
fn test_invalid_metadata_fails_without_output() {
    let dir = tempdir().expect("Failed to create temp directory");
    let collection = dir.path().join("bad.json");
    std::fs::write(
        &collection,
        r#"{"name":"Bad","collectionVariables":{"oa__title":"Bad","oa__license__url":"http://l.test"}}"#,
    )
    .unwrap();

    let cli = cli(&[collection.to_str().unwrap(), "-o", dir.path().to_str().unwrap()]);
    let err = oapub::run(&cli, &AppConfig::default()).unwrap_err();

    assert!(format!("{err:#}").contains("license.name is a required field"));
    assert!(!dir.path().join("Bad.yml").exists());
}

#[test]
fn test_binary_prints_yaml_to_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_oapub"))
        .arg(fixture("users.json"))
        .arg("--stdout")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run oapub");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), USERS_YAML);
}

#[test]
fn test_binary_fails_on_missing_collection() {
    let dir = tempdir().expect("Failed to create temp directory");

    let output = Command::new(env!("CARGO_BIN_EXE_oapub"))
        .arg(dir.path().join("missing.json"))
        .current_dir(dir.path())
        .output()
        .expect("Failed to run oapub");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing.json"));
}
