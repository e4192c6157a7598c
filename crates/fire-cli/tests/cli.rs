//! CLI tests against a mock Fire Business API.
//!
//! Each test starts a wiremock server and runs the `fire` binary with its
//! credentials and base URL supplied through the environment.

use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary against `base_url` with test credentials.
fn run_cli(args: &[&str], base_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fire"));
    cmd.args(args);
    cmd.env("FIRE_CLIENT_ID", "client-123");
    cmd.env("FIRE_REFRESH_TOKEN", "refresh-abc");
    cmd.env("FIRE_CLIENT_KEY", "key-xyz");
    cmd.env("FIRE_API_BASE_URL", base_url);
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI off the async runtime so the mock server keeps serving.
async fn run_cli_async(args: &[&str], base_url: &str) -> Output {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let base_url = base_url.to_string();
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli(&args, &base_url)
    })
    .await
    .unwrap()
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/apps/accesstokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expiry": "2099-01-01T00:00:00.000000Z",
            "businessId": 1234,
            "permissions": ["PERM_BUSINESS_GET_ACCOUNTS"],
            "accessToken": "access-1"
        })))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_auth_prints_session() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    let output = run_cli_async(&["auth"], &server.uri()).await;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1234"));
    assert!(stdout.contains("PERM_BUSINESS_GET_ACCOUNTS"));
    assert!(stdout.contains("2099-01-01T00:00:00+00:00"));
    assert!(!stdout.contains("access-1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_accounts_prints_json() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "accounts": [{"ican": 42, "name": "Main"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_async(&["accounts"], &server.uri()).await;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["accounts"][0]["ican"], 42);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_transactions_explicit_range() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/accounts/42/transactions/filter"))
        .and(query_param("dateRangeFrom", "1704067200000"))
        .and(query_param("dateRangeTo", "1704070800000"))
        .and(query_param("searchKeyword", "INV-1001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_async(
        &[
            "transactions",
            "--ican",
            "42",
            "--reference",
            "INV-1001",
            "--from",
            "2024-01-01T00:00:00Z",
            "--to",
            "2024-01-01T01:00:00Z",
        ],
        &server.uri(),
    )
    .await;
    assert!(output.status.success());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_batch_create_and_submit() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path("/batches"))
        .and(body_json(json!({
            "type": "BANK_TRANSFER",
            "currency": "EUR",
            "batchName": "Payroll"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"batchUuid": "f171b143"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/batches/f171b143"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_async(&["batch", "create", "--name", "Payroll"], &server.uri()).await;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("f171b143"));

    let output = run_cli_async(&["batch", "submit", "--batch", "f171b143"], &server.uri()).await;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Batch submitted"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_http_error_fails_command() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path("/paymentrequests"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid icanTo"))
        .mount(&server)
        .await;

    let output = run_cli_async(
        &[
            "payment-request",
            "--ican",
            "42",
            "--reference",
            "INV-1",
            "--description",
            "Invoice",
        ],
        &server.uri(),
    )
    .await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to create payment request"));
    assert!(stderr.contains("400"));
}

#[test]
fn test_missing_credentials() {
    let output = Command::new(env!("CARGO_BIN_EXE_fire"))
        .arg("accounts")
        .env_remove("FIRE_CLIENT_ID")
        .env_remove("FIRE_REFRESH_TOKEN")
        .env_remove("FIRE_CLIENT_KEY")
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FIRE_CLIENT_ID"));
}

#[test]
fn test_rejects_plain_http_base_url() {
    let output = run_cli(&["accounts"], "http://api.fire.com/business/v1");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid API base URL"));
}

#[test]
fn test_version_reports_crate_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_fire"))
        .arg("--version")
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
