//! Integration tests for the responses and share areas.

use cloudglue::{ChatMessage, Client, ClientBuilder, NewResponse};
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

#[tokio::test]
async fn background_response_is_created_then_polled() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .and(body_partial_json(json!({
            "model": "nimbus-001",
            "input": [{"role": "user", "content": "summarize every video"}],
            "background": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "r-1",
            "status": "in_progress",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/responses/r-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "r-1",
            "status": "completed",
            "output": [{"type": "message", "content": "done"}],
            "usage": {"total_tokens": 17},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = NewResponse::new(vec![ChatMessage::user("summarize every video")])
        .with_background(true);

    let created = client.responses.create(request).await.unwrap();
    assert_eq!(created.id, "r-1");
    assert!(!created.is_terminal());

    let finished = client.responses.get("r-1").await.unwrap();
    assert!(finished.is_completed());
    assert_eq!(finished.output.unwrap()[0]["content"], "done");
}

#[tokio::test]
async fn list_responses_forwards_status_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/responses"))
        .and(query_param("status", "completed"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "r-1", "status": "completed"}],
            "total": 1,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client
        .responses
        .list(Some(&json!({"status": "completed"})), None, Some(10))
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert!(!page.has_more());
}

#[tokio::test]
async fn cancel_posts_to_the_action_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses/r-1/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "r-1",
            "status": "cancelled",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let cancelled = client.responses.cancel("r-1").await.unwrap();
    assert_eq!(cancelled.status, "cancelled");
    assert!(cancelled.is_terminal());
}

#[tokio::test]
async fn delete_response_returns_confirmation() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/responses/r-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "r-1", "deleted": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let deleted = client.responses.delete("r-1").await.unwrap();
    assert!(deleted.deleted);
}

#[tokio::test]
async fn share_link_lifecycle_create_update_delete() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/share"))
        .and(body_partial_json(json!({
            "asset_type": "collection",
            "asset_id": "c-1",
            "name": "launch highlights",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "s-1",
            "asset_type": "collection",
            "asset_id": "c-1",
            "name": "launch highlights",
            "url": "https://share.cloudglue.dev/s-1",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/share/s-1"))
        .and(body_partial_json(json!({"name": "renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "s-1",
            "asset_type": "collection",
            "asset_id": "c-1",
            "name": "renamed",
            "url": "https://share.cloudglue.dev/s-1",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/share/s-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "s-1", "deleted": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);

    let link = client
        .share
        .create("collection", "c-1", Some("launch highlights"), None)
        .await
        .unwrap();
    assert_eq!(link.id, "s-1");
    assert_eq!(link.url.as_deref(), Some("https://share.cloudglue.dev/s-1"));

    let renamed = client
        .share
        .update("s-1", Some("renamed"), None)
        .await
        .unwrap();
    assert_eq!(renamed.name.as_deref(), Some("renamed"));

    let deleted = client.share.delete("s-1").await.unwrap();
    assert!(deleted.deleted);
}

#[tokio::test]
async fn list_share_links_filters_by_asset_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/share"))
        .and(query_param("asset_type", "file"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "s-1", "asset_type": "file", "asset_id": "f-1"},
                {"id": "s-2", "asset_type": "file", "asset_id": "f-2"},
            ],
            "total": 2,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client
        .share
        .list(Some(&json!({"asset_type": "file"})), None, None)
        .await
        .unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[1].asset_id, "f-2");
}
