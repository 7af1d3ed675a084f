//! End-to-end tests for the apigatewayv2 binary
//! These tests run the built executable against a mock service
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a file inside the temp dir
fn create_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn config_for(dir: &TempDir, endpoint: &str) -> PathBuf {
    create_file(
        dir,
        "client.xml",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<client>
    <region>us-east-1</region>
    <endpoint>{}</endpoint>
    <timeout_secs>5</timeout_secs>
</client>"#,
            endpoint
        ),
    )
}

#[test]
fn test_binary_exists() {
    let _cmd = Command::cargo_bin("apigatewayv2").unwrap();
}

#[test]
fn test_missing_arguments_print_usage() {
    Command::cargo_bin("apigatewayv2")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: apigatewayv2"));
}

#[test]
fn test_list_operations() {
    Command::cargo_bin("apigatewayv2")
        .unwrap()
        .arg("--list-operations")
        .assert()
        .success()
        .stdout(predicate::str::contains("CreateModel"))
        .stdout(predicate::str::contains("UpdateVpcLink"));
}

#[test]
fn test_missing_config_file_fails() {
    Command::cargo_bin("apigatewayv2")
        .unwrap()
        .args(["/nonexistent/client.xml", "GetApis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn test_get_apis_prints_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v2/apis")
        .with_status(200)
        .with_body(r#"{"items": [{"apiId": "a1", "name": "pets", "protocolType": "HTTP"}]}"#)
        .create();

    let temp_dir = TempDir::new().unwrap();
    let config_path = config_for(&temp_dir, &server.url());

    Command::cargo_bin("apigatewayv2")
        .unwrap()
        .env_remove("APIGATEWAYV2_ENDPOINT")
        .arg(&config_path)
        .arg("GetApis")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""apiId": "a1""#))
        .stdout(predicate::str::contains(r#""protocolType": "HTTP""#));

    mock.assert();
}

#[test]
fn test_input_file_and_service_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/v2/apis/gone")
        .with_status(404)
        .with_header("x-amzn-ErrorType", "NotFoundException")
        .with_body(r#"{"message": "Invalid API identifier specified"}"#)
        .create();

    let temp_dir = TempDir::new().unwrap();
    let config_path = config_for(&temp_dir, &server.url());
    let input_path = create_file(&temp_dir, "input.json", r#"{"apiId": "gone"}"#);

    Command::cargo_bin("apigatewayv2")
        .unwrap()
        .env_remove("APIGATEWAYV2_ENDPOINT")
        .arg(&config_path)
        .arg("DeleteApi")
        .arg(&input_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("NotFoundException: Invalid API identifier specified"));

    mock.assert();
}

#[test]
fn test_export_api_writes_document_raw() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v2/apis/a1/exports/OAS30")
        .match_query(mockito::Matcher::UrlEncoded("outputType".into(), "YAML".into()))
        .with_status(200)
        .with_body("openapi: 3.0.1\ninfo:\n  title: pets\n")
        .create();

    let temp_dir = TempDir::new().unwrap();
    let config_path = config_for(&temp_dir, &server.url());
    let input_path = create_file(
        &temp_dir,
        "input.json",
        r#"{"apiId": "a1", "specification": "OAS30", "outputType": "YAML"}"#,
    );

    Command::cargo_bin("apigatewayv2")
        .unwrap()
        .env_remove("APIGATEWAYV2_ENDPOINT")
        .arg(&config_path)
        .arg("ExportApi")
        .arg(&input_path)
        .assert()
        .success()
        .stdout("openapi: 3.0.1\ninfo:\n  title: pets\n");

    mock.assert();
}

#[test]
fn test_unknown_operation_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = config_for(&temp_dir, "http://127.0.0.1:9");

    Command::cargo_bin("apigatewayv2")
        .unwrap()
        .arg(&config_path)
        .arg("FlyToTheMoon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operation: FlyToTheMoon"));
}
