//! End-to-end controller tests: page load, submit, and delete against a
//! mock backend.

use hosteldesk_client::{ApiClient, ClientConfig, Session};
use hosteldesk_core::RecordId;
use hosteldesk_desk::{Draft, ListView, PageKind, descriptor, dispatch, loader};
use serde_json::json;
use wiremock::matchers::{method, path};
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
        token: "tok".to_string(),
        user: serde_json::from_value(json!({
            "id": "u-1", "name": "Admin", "email": "admin@example.com", "role": "ADMIN"
        }))
        .unwrap(),
    }
}

async fn mount_beds_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/beds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "b-1", "bedNo": "B-101", "status": "AVAILABLE",
              "hostelId": "h-1", "roomId": "r-1",
              "room": { "id": "r-1", "roomNo": "101" },
              "hostel": { "id": "h-1", "name": "Sunrise" } },
            { "id": "b-2", "bedNo": "B-102", "status": "OCCUPIED",
              "hostelId": "h-2", "roomId": "r-2" }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/hostels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "h-1", "name": "Sunrise", "address": "12 Lake Rd" },
            { "id": "h-2", "name": "Lakeside", "address": "9 Hill St" }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "r-1", "roomNo": "101", "hostelId": "h-1", "floorId": "f-1" },
            { "id": "r-2", "roomNo": "201", "hostelId": "h-2", "floorId": "f-2" }
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn page_load_joins_primary_and_reference_lists() {
    let server = MockServer::start().await;
    mount_beds_page(&server).await;

    let desc = descriptor(PageKind::Beds);
    let data = loader::load_page(&client_for(&server), &session(), &desc)
        .await
        .unwrap();

    assert_eq!(data.rows.len(), 2);
    assert_eq!(data.refs.get("hostels").len(), 2);
    assert_eq!(data.refs.get("rooms").len(), 2);
    // ref options carry the narrowing group
    assert_eq!(
        data.refs.get("rooms")[0].group,
        Some(RecordId::new("h-1"))
    );
}

#[tokio::test]
async fn page_load_fails_whole_when_any_collection_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/beds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/hostels"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let desc = descriptor(PageKind::Beds);
    let result = loader::load_page(&client_for(&server), &session(), &desc).await;
    assert!(result.is_err(), "partial results must never be applied");
}

#[tokio::test]
async fn loaded_rows_drive_the_filtered_view() {
    let server = MockServer::start().await;
    mount_beds_page(&server).await;

    let desc = descriptor(PageKind::Beds);
    let data = loader::load_page(&client_for(&server), &session(), &desc)
        .await
        .unwrap();

    let mut view = ListView::new(desc.search_key);
    view.set_rows(data.rows);
    assert_eq!(view.visible_len(), 2);

    // deep-link filter: ?hostelId=h-2
    view.add_fk_filter("hostelId", "h-2");
    assert_eq!(view.visible_len(), 1);

    view.clear_filters();
    view.set_search("b-101");
    assert_eq!(view.visible_len(), 1);
}

#[tokio::test]
async fn create_submit_posts_once_and_reload_sees_new_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/hostels"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "h-9", "name": "Hilltop", "address": "1 Peak Way"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut draft = Draft::create(hosteldesk_desk::catalog::hostel_schema());
    draft.set_text("name", "Hilltop");
    draft.set_text("address", "1 Peak Way");

    let created = dispatch::submit(&client_for(&server), &session(), &draft, "hostels")
        .await
        .unwrap();
    assert_eq!(created["id"], "h-9");
}

#[tokio::test]
async fn invalid_draft_issues_no_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/hostels"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let draft = Draft::create(hosteldesk_desk::catalog::hostel_schema());
    let err = dispatch::submit(&client_for(&server), &session(), &draft, "hostels")
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn edit_submit_puts_to_the_captured_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/hostels/h-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "h-1", "name": "Sunrise", "address": "12 Lake Rd"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = json!({ "id": "h-1", "name": "Sunrise", "address": "12 Lake Rd" });
    let draft = Draft::edit(
        hosteldesk_desk::catalog::hostel_schema(),
        RecordId::new("h-1"),
        &record,
    );
    dispatch::submit(&client_for(&server), &session(), &draft, "hostels")
        .await
        .unwrap();
}

#[tokio::test]
async fn declined_delete_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/hostels/h-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let deleted = dispatch::delete_confirmed(
        &client_for(&server),
        &session(),
        "hostels",
        &RecordId::new("h-1"),
        false,
    )
    .await
    .unwrap();
    assert!(!deleted);
}

#[tokio::test]
async fn confirmed_delete_dispatches() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/hostels/h-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let deleted = dispatch::delete_confirmed(
        &client_for(&server),
        &session(),
        "hostels",
        &RecordId::new("h-1"),
        true,
    )
    .await
    .unwrap();
    assert!(deleted);
}

#[tokio::test]
async fn fee_toggle_round_trips_the_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/fees/f-1"))
        .and(wiremock::matchers::body_partial_json(json!({ "status": "PAID" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "f-1", "residentId": "r-1", "month": 3, "year": 2024,
            "amount": 1000.0, "status": "PAID"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let row = json!({
        "id": "f-1", "residentId": "r-1", "month": 3, "year": 2024,
        "amount": 1000.0, "status": "UNPAID"
    });
    dispatch::toggle_fee_status(&client_for(&server), &session(), &row)
        .await
        .unwrap();
}
