use httpmock::prelude::*;
use partner_scout::core::ExtractParams;
use partner_scout::domain::ports::Extractor;
use partner_scout::{BusinessRecord, FirecrawlClient, FirecrawlConfig, ScoutError};
use serde_json::json;

fn config(server: &MockServer) -> FirecrawlConfig {
    let mut config = FirecrawlConfig::new(server.base_url(), "fc-test");
    config.poll_interval_ms = 0;
    config.max_polls = 3;
    config.timeout_secs = 5;
    config
}

fn params() -> ExtractParams {
    ExtractParams {
        prompt: "Extract information about the business from the website".to_string(),
        schema: BusinessRecord::json_schema(),
    }
}

fn urls() -> Vec<String> {
    vec!["https://firecrawl.dev".to_string()]
}

#[tokio::test]
async fn test_extract_returns_inline_data() {
    let server = MockServer::start();
    let payload = json!({
        "success": true,
        "data": {"name": "Firecrawl", "email": "help@firecrawl.com"}
    });

    let extract_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/extract")
            .header("Authorization", "Bearer fc-test")
            .body_contains("https://firecrawl.dev")
            .body_contains("Extract information about the business");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(payload.clone());
    });

    let client = FirecrawlClient::new(config(&server)).unwrap();
    let result = client.extract(&urls(), &params()).await.unwrap();

    extract_mock.assert();
    assert_eq!(result, payload);
}

#[tokio::test]
async fn test_extract_waits_for_job_completion() {
    let server = MockServer::start();

    let start_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/extract");
        then.status(200)
            .json_body(json!({"success": true, "id": "job-42"}));
    });

    let status_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/extract/job-42")
            .header("Authorization", "Bearer fc-test");
        then.status(200).json_body(json!({
            "success": true,
            "status": "completed",
            "data": {"name": "Firecrawl", "wifi": "Available"}
        }));
    });

    let client = FirecrawlClient::new(config(&server)).unwrap();
    let result = client.extract(&urls(), &params()).await.unwrap();

    start_mock.assert();
    status_mock.assert();
    assert_eq!(result["data"]["name"], "Firecrawl");
    assert_eq!(result["status"], "completed");
}

#[tokio::test]
async fn test_extract_times_out_on_stuck_job() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/v1/extract");
        then.status(200)
            .json_body(json!({"success": true, "id": "job-slow"}));
    });

    let status_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/extract/job-slow");
        then.status(200)
            .json_body(json!({"success": true, "status": "processing"}));
    });

    let client = FirecrawlClient::new(config(&server)).unwrap();
    let err = client.extract(&urls(), &params()).await.unwrap_err();

    status_mock.assert_hits(3);
    assert!(matches!(
        err,
        ScoutError::ExtractionTimeout { ref job_id, attempts: 3 } if job_id == "job-slow"
    ));
}

#[tokio::test]
async fn test_processing_job_is_followed_with_debug_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let server = MockServer::start();

    let start_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/extract");
        then.status(200).json_body(json!({
            "success": true,
            "status": "processing",
            "id": "job-7"
        }));
    });

    let status_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/extract/job-7");
        then.status(200).json_body(json!({
            "success": true,
            "status": "processing",
            "data": null
        }));
    });

    let client = FirecrawlClient::new(config(&server)).unwrap();
    let err = client.extract(&urls(), &params()).await.unwrap_err();

    start_mock.assert();
    status_mock.assert_hits(3);
    assert!(matches!(err, ScoutError::ExtractionTimeout { attempts: 3, .. }));
}

#[tokio::test]
async fn test_extract_reports_failed_job() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/v1/extract");
        then.status(200)
            .json_body(json!({"success": true, "id": "job-bad"}));
    });

    server.mock(|when, then| {
        when.method(GET).path("/v1/extract/job-bad");
        then.status(200).json_body(json!({
            "success": true,
            "status": "failed",
            "error": "Website blocked the crawler"
        }));
    });

    let client = FirecrawlClient::new(config(&server)).unwrap();
    let err = client.extract(&urls(), &params()).await.unwrap_err();

    assert_eq!(err.to_string(), "Extraction failed: Website blocked the crawler");
}

#[tokio::test]
async fn test_extract_surfaces_http_errors() {
    let server = MockServer::start();

    let extract_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/extract");
        then.status(401).body("Unauthorized: Invalid token");
    });

    let client = FirecrawlClient::new(config(&server)).unwrap();
    let err = client.extract(&urls(), &params()).await.unwrap_err();

    extract_mock.assert();
    match err {
        ScoutError::ApiStatusError { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Unauthorized: Invalid token");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
