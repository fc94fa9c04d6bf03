//! HTTP behavior tests for `ApiClient` against a mock backend.

use hosteldesk_client::{ApiClient, ClientConfig, Session};
use hosteldesk_core::{DeskError, RecordId};
use hosteldesk_model::{Bed, BedStatus, Hostel, User};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig {
        base_url: format!("{}/api", server.uri()),
        timeout_secs: 5,
    };
    ApiClient::new(&config)
}

fn session() -> Session {
    Session {
        token: "tok-abc".to_string(),
        user: User {
            id: RecordId::new("u-1"),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            role: "ADMIN".to_string(),
        },
    }
}

#[tokio::test]
async fn login_returns_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(body_partial_json(json!({ "email": "admin@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "fresh-token",
            "user": { "id": "u-9", "name": "Admin", "email": "admin@example.com", "role": "ADMIN" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client_for(&server)
        .login("admin@example.com", "hunter2")
        .await
        .unwrap();
    assert_eq!(session.token, "fresh-token");
    assert_eq!(session.bearer(), "Bearer fresh-token");
    assert_eq!(session.user.id, RecordId::new("u-9"));
}

#[tokio::test]
async fn login_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login("admin@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(err.is_auth());
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[tokio::test]
async fn list_attaches_bearer_token_and_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/beds"))
        .and(header("authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "b-1",
                "bedNo": "B-101",
                "status": "AVAILABLE",
                "hostelId": "h-1",
                "roomId": "r-1",
                "room": { "id": "r-1", "roomNo": "101" },
                "hostel": { "id": "h-1", "name": "Sunrise" }
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let beds: Vec<Bed> = client_for(&server).list(&session()).await.unwrap();
    assert_eq!(beds.len(), 1);
    assert_eq!(beds[0].status, BedStatus::Available);
    assert_eq!(beds[0].room.as_ref().unwrap().room_no, "101");
}

#[tokio::test]
async fn list_treats_non_array_body_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hostels"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "nothing here" })),
        )
        .mount(&server)
        .await;

    let hostels: Vec<Hostel> = client_for(&server).list(&session()).await.unwrap();
    assert!(hostels.is_empty());
}

#[tokio::test]
async fn create_posts_draft_to_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/beds"))
        .and(header("authorization", "Bearer tok-abc"))
        .and(body_partial_json(json!({ "bedNo": "B-7", "hostelId": "h-1" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "b-7", "bedNo": "B-7", "status": "AVAILABLE",
            "hostelId": "h-1", "roomId": "r-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = json!({ "bedNo": "B-7", "status": "AVAILABLE", "hostelId": "h-1", "roomId": "r-2" });
    let created = client_for(&server)
        .create_raw(&session(), "beds", &draft)
        .await
        .unwrap();
    assert_eq!(created["id"], "b-7");
}

#[tokio::test]
async fn update_puts_to_record_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/beds/b-7"))
        .and(body_partial_json(json!({ "bedNo": "B-7A" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b-7", "bedNo": "B-7A", "hostelId": "h-1", "roomId": "r-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = json!({ "bedNo": "B-7A", "hostelId": "h-1", "roomId": "r-2" });
    client_for(&server)
        .update_raw(&session(), "beds", &RecordId::new("b-7"), &draft)
        .await
        .unwrap();
}

#[tokio::test]
async fn rejected_mutation_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/fees"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({ "message": "Record exists for this period." })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_raw(&session(), "fees", &json!({ "residentId": "r-1" }))
        .await
        .unwrap_err();
    assert!(err.is_api());
    assert_eq!(err.user_message(), "Record exists for this period.");
}

#[tokio::test]
async fn rejection_without_message_gets_generic_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/beds/b-1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .delete(&session(), "beds", &RecordId::new("b-1"))
        .await
        .unwrap_err();
    match err {
        DeskError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Request failed");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_hits_record_path_once() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/visitors/v-3"))
        .and(header("authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .delete(&session(), "visitors", &RecordId::new("v-3"))
        .await
        .unwrap();
}
