//! Integration tests for collections and their video subresources.

use std::time::Duration;

use cloudglue::{Client, ClientBuilder, CloudGlueError, WaitOptions};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client {
    ClientBuilder::new()
        .api_key("test-key")
        .base_url(server.uri())
        .max_retries(0)
        .build()
        .unwrap()
}

fn video_json(file_id: &str, status: &str) -> serde_json::Value {
    json!({
        "file_id": file_id,
        "collection_id": "c-1",
        "status": status,
    })
}

#[tokio::test]
async fn create_sends_empty_description_when_absent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collections"))
        .and(body_partial_json(json!({
            "name": "meetings",
            "description": "",
            "describe_config": {"enable_speech": true, "enable_scene_text": false},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c-1",
            "name": "meetings",
            "description": "",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let collection = client
        .collections
        .create(
            "meetings",
            None,
            Some(&json!({"enable_scene_text": false})),
            None,
        )
        .await
        .unwrap();

    assert_eq!(collection.id, "c-1");
    assert_eq!(collection.name, "meetings");
}

#[tokio::test]
async fn create_rejects_bad_config_before_any_request() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let err = client
        .collections
        .create("demos", None, Some(&json!({"enable_audio": true})), None)
        .await
        .unwrap_err();

    match err {
        CloudGlueError::Configuration { message } => assert!(message.contains("enable_audio")),
        other => panic!("expected configuration error, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_passes_cursor_through_exactly_once_per_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections"))
        .and(query_param("name", "demo"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "c-1", "name": "demo reel"},
                {"id": "c-2", "name": "demo day"},
            ],
            "total": 3,
            "next_cursor": "cursor-2",
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/collections"))
        .and(query_param("name", "demo"))
        .and(query_param("cursor", "cursor-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "c-3", "name": "demo night"}],
            "total": 3,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let filter = json!({"name": "demo"});

    let first = client
        .collections
        .list(Some(&filter), None, Some(2))
        .await
        .unwrap();
    assert_eq!(first.data.len(), 2);
    assert!(first.has_more());

    let second = client
        .collections
        .list(Some(&filter), first.next_cursor.as_deref(), Some(2))
        .await
        .unwrap();
    assert_eq!(second.data.len(), 1);
    assert!(!second.has_more());
    assert_eq!(second.data[0].id, "c-3");
}

#[tokio::test]
async fn add_video_then_wait_until_it_is_ready() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collections/c-1/videos"))
        .and(body_partial_json(json!({"file_id": "f-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(video_json("f-1", "pending")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/collections/c-1/videos/f-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(video_json("f-1", "processing")))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/collections/c-1/videos/f-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(video_json("f-1", "ready")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let added = client.collections.add_video("c-1", "f-1").await.unwrap();
    assert_eq!(added.status, "pending");

    let options = WaitOptions {
        poll_interval: Duration::from_millis(10),
        timeout: Duration::from_secs(5),
    };
    let done = client
        .collections
        .wait_for_video("c-1", "f-1", Some(options))
        .await
        .unwrap();
    assert!(done.is_ready());
    assert_eq!(done.collection_id.as_deref(), Some("c-1"));
}

#[tokio::test]
async fn add_youtube_video_posts_url_and_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collections/c-1/videos/youtube"))
        .and(body_partial_json(json!({
            "url": "https://www.youtube.com/watch?v=abc123",
            "metadata": {"source": "channel"},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(video_json("f-yt", "pending")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let video = client
        .collections
        .add_youtube_video(
            "c-1",
            "https://www.youtube.com/watch?v=abc123",
            Some(&json!({"source": "channel"})),
        )
        .await
        .unwrap();
    assert_eq!(video.file_id, "f-yt");
}

#[tokio::test]
async fn remove_video_issues_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/collections/c-1/videos/f-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "f-1", "deleted": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client.collections.remove_video("c-1", "f-1").await.unwrap();
    assert!(response.deleted);
}

#[tokio::test]
async fn description_request_windows_segments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections/c-1/videos/f-1/description"))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Town hall",
            "summary": "Quarterly update.",
            "segment_docs": [
                {"start_time": 120.0, "end_time": 150.0, "speech": "next up, revenue"},
                {"start_time": 150.0, "end_time": 180.0, "scene_text": "Q3 numbers"},
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let description = client
        .collections
        .get_video_description("c-1", "f-1", Some(2), Some(4))
        .await
        .unwrap();

    assert_eq!(description.title.as_deref(), Some("Town hall"));
    assert_eq!(description.segment_docs.len(), 2);
    assert_eq!(
        description.segment_docs[1].scene_text.as_deref(),
        Some("Q3 numbers")
    );
}

#[tokio::test]
async fn entities_come_back_with_loose_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections/c-1/videos/f-1/entities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "file_id": "f-1",
            "entities": {"speakers": ["amy", "bo"]},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let entities = client
        .collections
        .get_video_entities("c-1", "f-1")
        .await
        .unwrap();

    assert_eq!(entities.file_id.as_deref(), Some("f-1"));
    assert_eq!(entities.entities["speakers"][0], "amy");
}
