//! Integration tests for message HTTP endpoints.
//!
//! Drives the real router over the in-memory store and checks the full
//! outcome-to-status mapping:
//! Created -> 201, Updated/Deleted -> 204, NotFound -> 404,
//! Conflict -> 409, ValidationError -> 400.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use message_desk::adapters::http::{message_routes, MessageHandlers};
use message_desk::adapters::InMemoryMessageStore;
use message_desk::application::handlers::message::{
    CreateMessageHandler, DeleteMessageHandler, GetMessageHandler, ListMessagesHandler,
    UpdateMessageHandler,
};
use message_desk::domain::foundation::OrganizationId;
use message_desk::ports::MessageStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_app() -> Router {
    let store: Arc<dyn MessageStore> = Arc::new(InMemoryMessageStore::new());
    let handlers = MessageHandlers::new(
        Arc::new(CreateMessageHandler::new(store.clone())),
        Arc::new(UpdateMessageHandler::new(store.clone())),
        Arc::new(DeleteMessageHandler::new(store.clone())),
        Arc::new(GetMessageHandler::new(store.clone())),
        Arc::new(ListMessagesHandler::new(store)),
    );
    message_routes(handlers)
}

fn messages_path(organization_id: &OrganizationId) -> String {
    format!("/api/v1/organizations/{}/messages", organization_id)
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn create_message(
    app: &Router,
    organization_id: &OrganizationId,
    title: &str,
) -> (StatusCode, Value) {
    let body = json!({ "title": title, "content": "a".repeat(20) });
    send(
        app,
        request(Method::POST, &messages_path(organization_id), Some(body)),
    )
    .await
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn create_returns_201_with_location_and_body() {
    let app = test_app();
    let organization_id = OrganizationId::new();

    let body = json!({ "title": "  Hello World  ", "content": "a".repeat(20) });
    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            &messages_path(&organization_id),
            Some(body),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.starts_with(&messages_path(&organization_id)));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["title"], "Hello World");
    assert_eq!(body["is_active"], true);
    assert_eq!(body["organization_id"], organization_id.to_string());
    assert!(location.ends_with(body["id"].as_str().unwrap()));
}

#[tokio::test]
async fn create_duplicate_title_returns_409() {
    let app = test_app();
    let organization_id = OrganizationId::new();

    let (status, _) = create_message(&app, &organization_id, "Duplicate").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = create_message(&app, &organization_id, "Duplicate").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Title must be unique per organization.");
}

#[tokio::test]
async fn same_title_in_another_organization_is_allowed() {
    let app = test_app();

    let (status, _) = create_message(&app, &OrganizationId::new(), "Shared").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = create_message(&app, &OrganizationId::new(), "Shared").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn create_with_invalid_fields_returns_400_with_field_errors() {
    let app = test_app();
    let organization_id = OrganizationId::new();

    let body = json!({ "title": "", "content": "short" });
    let (status, body) = send(
        &app,
        request(Method::POST, &messages_path(&organization_id), Some(body)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["Title"][0], "Title is required.");
    assert_eq!(
        body["errors"]["Content"][0],
        "Content must be between 10 and 1000 characters."
    );
}

#[tokio::test]
async fn create_with_malformed_organization_id_returns_400() {
    let app = test_app();

    let body = json!({ "title": "Hello World", "content": "a".repeat(20) });
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/organizations/not-a-uuid/messages",
            Some(body),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Read
// =============================================================================

#[tokio::test]
async fn get_returns_stored_message() {
    let app = test_app();
    let organization_id = OrganizationId::new();
    let (_, created) = create_message(&app, &organization_id, "Readable").await;
    let id = created["id"].as_str().unwrap();

    let uri = format!("{}/{}", messages_path(&organization_id), id);
    let (status, body) = send(&app, request(Method::GET, &uri, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Readable");
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let app = test_app();
    let organization_id = OrganizationId::new();

    let uri = format!(
        "{}/{}",
        messages_path(&organization_id),
        uuid::Uuid::new_v4()
    );
    let (status, body) = send(&app, request(Method::GET, &uri, None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Message not found.");
}

#[tokio::test]
async fn get_is_scoped_to_the_owning_organization() {
    let app = test_app();
    let organization_id = OrganizationId::new();
    let (_, created) = create_message(&app, &organization_id, "Scoped").await;
    let id = created["id"].as_str().unwrap();

    let uri = format!("{}/{}", messages_path(&OrganizationId::new()), id);
    let (status, _) = send(&app, request(Method::GET, &uri, None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_organization_messages() {
    let app = test_app();
    let organization_id = OrganizationId::new();
    create_message(&app, &organization_id, "First").await;
    create_message(&app, &organization_id, "Second").await;
    create_message(&app, &OrganizationId::new(), "Elsewhere").await;

    let (status, body) = send(
        &app,
        request(Method::GET, &messages_path(&organization_id), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn update_returns_204_and_persists_changes() {
    let app = test_app();
    let organization_id = OrganizationId::new();
    let (_, created) = create_message(&app, &organization_id, "Before").await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("{}/{}", messages_path(&organization_id), id);

    let body = json!({ "title": "After", "content": "b".repeat(20), "is_active": true });
    let (status, _) = send(&app, request(Method::PUT, &uri, Some(body))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, fetched) = send(&app, request(Method::GET, &uri, None)).await;
    assert_eq!(fetched["title"], "After");
}

#[tokio::test]
async fn update_unknown_id_returns_404() {
    let app = test_app();
    let organization_id = OrganizationId::new();

    let uri = format!(
        "{}/{}",
        messages_path(&organization_id),
        uuid::Uuid::new_v4()
    );
    let body = json!({ "title": "After", "content": "b".repeat(20), "is_active": true });
    let (status, _) = send(&app, request(Method::PUT, &uri, Some(body))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_inactive_message_returns_400_with_is_active_key() {
    let app = test_app();
    let organization_id = OrganizationId::new();
    let (_, created) = create_message(&app, &organization_id, "Freezable").await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("{}/{}", messages_path(&organization_id), id);

    // Deactivate, then try to update again
    let body = json!({ "title": "Freezable", "content": "a".repeat(20), "is_active": false });
    let (status, _) = send(&app, request(Method::PUT, &uri, Some(body))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let body = json!({ "title": "Thawed", "content": "a".repeat(20), "is_active": true });
    let (status, body) = send(&app, request(Method::PUT, &uri, Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["IsActive"][0],
        "Only active messages can be updated."
    );
}

#[tokio::test]
async fn update_to_taken_title_returns_409_but_own_title_is_kept() {
    let app = test_app();
    let organization_id = OrganizationId::new();
    create_message(&app, &organization_id, "Taken").await;
    let (_, created) = create_message(&app, &organization_id, "Mine").await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("{}/{}", messages_path(&organization_id), id);

    let body = json!({ "title": "Taken", "content": "a".repeat(20), "is_active": true });
    let (status, _) = send(&app, request(Method::PUT, &uri, Some(body))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let body = json!({ "title": "Mine", "content": "a".repeat(20), "is_active": true });
    let (status, _) = send(&app, request(Method::PUT, &uri, Some(body))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn delete_returns_204_then_404() {
    let app = test_app();
    let organization_id = OrganizationId::new();
    let (_, created) = create_message(&app, &organization_id, "Removable").await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("{}/{}", messages_path(&organization_id), id);

    let (status, _) = send(&app, request(Method::DELETE, &uri, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, request(Method::GET, &uri, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_returns_404() {
    let app = test_app();
    let organization_id = OrganizationId::new();

    let uri = format!(
        "{}/{}",
        messages_path(&organization_id),
        uuid::Uuid::new_v4()
    );
    let (status, body) = send(&app, request(Method::DELETE, &uri, None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Message not found.");
}

#[tokio::test]
async fn delete_inactive_message_returns_400_with_is_active_key() {
    let app = test_app();
    let organization_id = OrganizationId::new();
    let (_, created) = create_message(&app, &organization_id, "Frozen").await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("{}/{}", messages_path(&organization_id), id);

    let body = json!({ "title": "Frozen", "content": "a".repeat(20), "is_active": false });
    let (status, _) = send(&app, request(Method::PUT, &uri, Some(body))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, request(Method::DELETE, &uri, None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["IsActive"][0],
        "Only active messages can be deleted."
    );
}
