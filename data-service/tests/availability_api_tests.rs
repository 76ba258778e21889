//! Availability API integration tests

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
async fn test_health_check() {
    let server = setup_test_server().await;

    let response = server.get("/api/v1/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_upsert_availability_missing_auth_is_unauthorized() {
    let server = setup_test_server().await;

    let request_body = json!({
        "employee_id": "emp-1",
        "availabilities": [],
    });

    let response = server.post("/api/v1/availability").json(&request_body).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upsert_availability_bulk_success() {
    let server = setup_test_server().await;
    let tenant_id = Uuid::new_v4();

    let request_body = json!({
        "employee_id": "emp-1",
        "employee_name": "Alex Doe",
        "experienced": true,
        "hours_min": 10,
        "hours_max": 30,
        "availabilities": [
            {
                "date": "2026-08-03",
                "available_slots": {"start": "09:00", "end": "17:00"}
            },
            {
                "date": "2026-08-04",
                "available_slots": [{"start": "09:00", "end": "12:00"}, {"start": "13:00", "end": "17:00"}]
            }
        ]
    });

    let mut request = server.post("/api/v1/availability").json(&request_body);
    for (name, value) in auth_headers(tenant_id, "manager-1", "MANAGER") {
        request = request.add_header(name, value);
    }
    let response = request.await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "availability upserted");
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["employee_id"], "emp-1");
    assert_eq!(rows[1]["available_slots"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_upsert_availability_tightens_hour_bounds_on_repeat_save() {
    let server = setup_test_server().await;
    let tenant_id = Uuid::new_v4();

    let first = json!({
        "employee_id": "emp-2",
        "hours_min": 5,
        "hours_max": 40,
        "availabilities": [{"date": "2026-08-03"}]
    });
    let mut request = server.post("/api/v1/availability").json(&first);
    for (name, value) in auth_headers(tenant_id, "manager-1", "MANAGER") {
        request = request.add_header(name, value);
    }
    request.await.assert_status_ok();

    let second = json!({
        "employee_id": "emp-2",
        "hours_min": 12,
        "hours_max": 20,
        "availabilities": [{"date": "2026-08-03"}]
    });
    let mut request = server.post("/api/v1/availability").json(&second);
    for (name, value) in auth_headers(tenant_id, "manager-1", "MANAGER") {
        request = request.add_header(name, value);
    }
    let response = request.await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"][0]["hours_min"], 12);
    assert_eq!(body["data"][0]["hours_max"], 20);
}
