//! Demand and schedule-generation API integration tests

#[path = "common/mod.rs"]
mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{auth_headers, create_test_app_state};
use data_service::api::create_router;
use serde_json::json;
use uuid::Uuid;

async fn setup_test_server() -> TestServer {
    let (state, _repos) = create_test_app_state().await;
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_save_day_demand_then_read_it_back() {
    let server = setup_test_server().await;
    let tenant_id = Uuid::new_v4();
    let headers = auth_headers(tenant_id, "manager-1", "MANAGER");

    let save_body = json!({
        "date": "2026-08-03",
        "location": "downtown",
        "items": [{"start": "09:00", "end": "17:00", "demand": 3, "needs_experienced": false}]
    });
    let mut request = server.post("/api/v1/demand/day").json(&save_body);
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let save_response = request.await;
    save_response.assert_status_ok();
    let save_body: serde_json::Value = save_response.json();
    assert_eq!(save_body["data"]["created"], true);

    let mut request = server.get("/api/v1/demand/day?date=2026-08-03&location=downtown");
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let get_response = request.await;
    get_response.assert_status_ok();
    let body: serde_json::Value = get_response.json();
    assert_eq!(body["data"]["inherited"], false);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["items"][0]["demand"], 3);
}

#[tokio::test]
async fn test_save_day_is_idempotent_on_identical_content() {
    let server = setup_test_server().await;
    let tenant_id = Uuid::new_v4();
    let headers = auth_headers(tenant_id, "manager-1", "MANAGER");

    let save_body = json!({
        "date": "2026-08-05",
        "location": "downtown",
        "items": [{"start": "09:00", "end": "17:00", "demand": 2, "needs_experienced": false}]
    });

    let mut request = server.post("/api/v1/demand/day").json(&save_body);
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let first = request.await;
    first.assert_status_ok();
    let first_body: serde_json::Value = first.json();
    assert_eq!(first_body["data"]["created"], true);
    let first_id = first_body["data"]["demand_id"].clone();

    let mut request = server.post("/api/v1/demand/day").json(&save_body);
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let second = request.await;
    second.assert_status_ok();
    let second_body: serde_json::Value = second.json();
    assert_eq!(second_body["data"]["created"], false);
    assert_eq!(second_body["data"]["demand_id"], first_id);
}

#[tokio::test]
async fn test_get_day_demand_falls_back_to_default_template() {
    let server = setup_test_server().await;
    let tenant_id = Uuid::new_v4();
    let headers = auth_headers(tenant_id, "manager-1", "MANAGER");

    let template_body = json!({
        "location": "downtown",
        "weekday": 0,
        "items": [{"start": "08:00", "end": "16:00", "demand": 4, "needs_experienced": true}]
    });
    let mut request = server.post("/api/v1/demand/default").json(&template_body);
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    request.await.assert_status_ok();

    // 2026-08-03 is a Monday (weekday = 0).
    let mut request = server.get("/api/v1/demand/day?date=2026-08-03&location=downtown");
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let response = request.await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["inherited"], true);
    assert_eq!(body["data"]["items"][0]["demand"], 4);
}

#[tokio::test]
async fn test_generate_day_schedule_persists_and_is_retrievable() {
    let server = setup_test_server().await;
    let tenant_id = Uuid::new_v4();
    let headers = auth_headers(tenant_id, "manager-1", "MANAGER");

    let avail_body = json!({
        "employee_id": "emp-1",
        "experienced": true,
        "hours_min": 0,
        "hours_max": 40,
        "availabilities": [{"date": "2026-08-03", "available_slots": {"start": "09:00", "end": "17:00"}}]
    });
    let mut request = server.post("/api/v1/availability").json(&avail_body);
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    request.await.assert_status_ok();

    let generate_body = json!({
        "date": "2026-08-03",
        "location": "downtown",
        "persist": true,
        "force": false,
        "items": [{"start": "09:00", "end": "17:00", "demand": 1, "needs_experienced": false}]
    });
    let mut request = server.post("/api/v1/generate-day").json(&generate_body);
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let response = request.await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let assignments = body["data"]["assignments"].as_array().unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0]["assigned_employees"][0], "emp-1");
    let demand_id = body["data"]["demand_id"].as_str().unwrap().to_string();

    let mut request = server.get(&format!("/api/v1/schedule/{demand_id}"));
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let fetched = request.await;
    fetched.assert_status_ok();
    let fetched_body: serde_json::Value = fetched.json();
    assert_eq!(fetched_body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_generate_day_preview_does_not_persist() {
    let server = setup_test_server().await;
    let tenant_id = Uuid::new_v4();
    let headers = auth_headers(tenant_id, "manager-1", "MANAGER");

    let generate_body = json!({
        "date": "2026-08-06",
        "location": "downtown",
        "persist": false,
        "items": [{"start": "09:00", "end": "17:00", "demand": 1, "needs_experienced": false}]
    });
    let mut request = server.post("/api/v1/generate-day").json(&generate_body);
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let response = request.await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let demand_id = body["data"]["demand_id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["assignments"][0]["id"], Uuid::nil().to_string());

    let mut request = server.get(&format!("/api/v1/schedule/{demand_id}"));
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let fetched = request.await;
    fetched.assert_status(StatusCode::OK);
    let fetched_body: serde_json::Value = fetched.json();
    assert!(fetched_body["data"].as_array().unwrap().is_empty());
}
