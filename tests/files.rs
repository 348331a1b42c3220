//! Integration tests for file upload, retrieval, listing, and polling.

use std::time::Duration;

use cloudglue::{Client, ClientBuilder, CloudGlueError, WaitOptions};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client {
    ClientBuilder::new()
        .api_key("test-key")
        .base_url(server.uri())
        .max_retries(0)
        .build()
        .unwrap()
}

fn file_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "status": status,
        "filename": "clip.mp4",
        "uri": format!("cloudglue://files/{id}"),
    })
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[tokio::test]
async fn upload_sends_multipart_form_with_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_json("f-1", "processing")))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let video_path = dir.path().join("clip.mp4");
    std::fs::write(&video_path, b"fake mp4 bytes").unwrap();

    let client = test_client(&server);
    let file = client
        .files
        .upload(&video_path, Some(&json!({"category": "demo"})))
        .await
        .unwrap();
    assert_eq!(file.id, "f-1");
    assert_eq!(file.status, "processing");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = &requests[0].body;
    assert!(contains(body, b"clip.mp4"));
    assert!(contains(body, b"fake mp4 bytes"));
    assert!(contains(body, b"metadata"));
    assert!(contains(body, b"category"));
}

#[tokio::test]
async fn upload_missing_file_is_an_io_error_without_a_request() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let err = client
        .files
        .upload("/definitely/not/here.mp4", None)
        .await
        .unwrap_err();
    assert!(matches!(err, CloudGlueError::Io(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_is_idempotent_across_repeated_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/f-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_json("f-7", "ready")))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let first = client.files.get("f-7").await.unwrap();
    let second = client.files.get("f-7").await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.status, second.status);
    assert_eq!(first.uri, second.uri);
}

#[tokio::test]
async fn missing_file_maps_to_unified_not_found_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "file not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.files.get("gone").await.unwrap_err();

    match err {
        CloudGlueError::Api(api) => {
            assert_eq!(api.status_code, Some(404));
            assert_eq!(api.message, "file not found");
            assert_eq!(api.response_body.unwrap()["error"], "file not found");
            assert_eq!(api.reason.as_deref(), Some("Not Found"));
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn list_forwards_filter_and_pagination_as_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files"))
        .and(query_param("status", "ready"))
        .and(query_param("order", "desc"))
        .and(query_param("cursor", "abc"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [file_json("f-1", "ready"), file_json("f-2", "ready")],
            "total": 12,
            "next_cursor": "def",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client
        .files
        .list(
            Some(&json!({"status": "ready", "order": "desc"})),
            Some("abc"),
            Some(10),
        )
        .await
        .unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.total, Some(12));
    assert!(page.has_more());
    assert_eq!(page.next_cursor.as_deref(), Some("def"));
}

#[tokio::test]
async fn list_rejects_unknown_filter_key_without_a_request() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let err = client
        .files
        .list(Some(&json!({"staturs": "ready"})), None, None)
        .await
        .unwrap_err();

    match err {
        CloudGlueError::Configuration { message } => {
            assert!(message.contains("staturs"));
            assert!(message.contains("status"));
        }
        other => panic!("expected configuration error, got {other:?}"),
    }

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_returns_confirmation() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/files/f-9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "f-9", "deleted": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client.files.delete("f-9").await.unwrap();
    assert!(response.deleted);
    assert_eq!(response.id.as_deref(), Some("f-9"));
}

#[tokio::test]
async fn wait_until_ready_polls_through_processing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/f-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_json("f-3", "processing")))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/f-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_json("f-3", "ready")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let options = WaitOptions {
        poll_interval: Duration::from_millis(10),
        timeout: Duration::from_secs(5),
    };
    let file = client
        .files
        .wait_until_ready("f-3", Some(options))
        .await
        .unwrap();
    assert!(file.is_ready());
}

#[tokio::test]
async fn wait_until_ready_times_out_on_stuck_processing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/f-4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_json("f-4", "processing")))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let options = WaitOptions {
        poll_interval: Duration::from_millis(10),
        timeout: Duration::from_millis(50),
    };
    let err = client
        .files
        .wait_until_ready("f-4", Some(options))
        .await
        .unwrap_err();

    assert!(matches!(err, CloudGlueError::Timeout(_)));
}
