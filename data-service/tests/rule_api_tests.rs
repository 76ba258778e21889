//! Event rule and special-day API integration tests

#[path = "common/mod.rs"]
mod common;

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
async fn test_create_and_get_rule() {
    let server = setup_test_server().await;
    let tenant_id = Uuid::new_v4();
    let headers = auth_headers(tenant_id, "manager-1", "MANAGER");

    let create_body = json!({
        "name": "New Year surge",
        "mode": "MULTIPLIER",
        "value": 1.5,
        "needs_experienced_default": true,
    });
    let mut request = server.post("/api/v1/rules").json(&create_body);
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let create_response = request.await;
    create_response.assert_status_ok();
    let body: serde_json::Value = create_response.json();
    assert_eq!(body["data"]["name"], "New Year surge");
    assert_eq!(body["data"]["mode"], "MULTIPLIER");
    let rule_id = body["data"]["id"].as_str().unwrap().to_string();

    let mut request = server.get(&format!("/api/v1/rules/{rule_id}"));
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let get_response = request.await;
    get_response.assert_status_ok();
    let get_body: serde_json::Value = get_response.json();
    assert_eq!(get_body["data"]["id"], rule_id);
}

#[tokio::test]
async fn test_list_rules_is_tenant_scoped() {
    let server = setup_test_server().await;
    let tenant_a = Uuid::new_v4();
    let tenant_b = Uuid::new_v4();

    let create_body = json!({"name": "Holiday override", "mode": "OVERRIDE", "value": 0.0});
    let mut request = server.post("/api/v1/rules").json(&create_body);
    for (name, value) in auth_headers(tenant_a, "manager-1", "MANAGER") {
        request = request.add_header(name, value);
    }
    request.await.assert_status_ok();

    let mut request = server.get("/api/v1/rules");
    for (name, value) in auth_headers(tenant_b, "manager-1", "MANAGER") {
        request = request.add_header(name, value);
    }
    let response = request.await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_special_day_binds_rule_to_date() {
    let server = setup_test_server().await;
    let tenant_id = Uuid::new_v4();
    let headers = auth_headers(tenant_id, "manager-1", "MANAGER");

    let create_rule = json!({"name": "Festival", "mode": "MULTIPLIER", "value": 2.0});
    let mut request = server.post("/api/v1/rules").json(&create_rule);
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let rule_response = request.await;
    rule_response.assert_status_ok();
    let rule_body: serde_json::Value = rule_response.json();
    let rule_id = rule_body["data"]["id"].as_str().unwrap().to_string();

    let special_day_body = json!({
        "date": "2026-12-25",
        "location": "downtown",
        "rule_id": rule_id,
        "note": "Christmas surge",
    });
    let mut request = server.post("/api/v1/special-days").json(&special_day_body);
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let response = request.await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["location"], "downtown");
    assert_eq!(body["data"]["note"], "Christmas surge");
    assert_eq!(body["data"]["active"], true);

    let mut request = server.get("/api/v1/special-days?date_from=2026-12-01&date_to=2026-12-31");
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let list_response = request.await;
    list_response.assert_status_ok();
    let list_body: serde_json::Value = list_response.json();
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_rule_engine_applies_multiplier_to_generated_schedule() {
    let server = setup_test_server().await;
    let tenant_id = Uuid::new_v4();
    let headers = auth_headers(tenant_id, "manager-1", "MANAGER");

    let create_rule = json!({"name": "Double demand", "mode": "MULTIPLIER", "value": 2.0});
    let mut request = server.post("/api/v1/rules").json(&create_rule);
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let rule_body: serde_json::Value = request.await.json();
    let rule_id = rule_body["data"]["id"].as_str().unwrap().to_string();

    let special_day_body = json!({
        "date": "2026-08-03",
        "rule_id": rule_id,
    });
    let mut request = server.post("/api/v1/special-days").json(&special_day_body);
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    request.await.assert_status_ok();

    let generate_body = json!({
        "date": "2026-08-03",
        "persist": false,
        "items": [{"start": "09:00", "end": "17:00", "demand": 3, "needs_experienced": false}]
    });
    let mut request = server.post("/api/v1/generate-day").json(&generate_body);
    for (name, value) in &headers {
        request = request.add_header(*name, value.clone());
    }
    let response = request.await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["assignments"][0]["demand_count"], 6);
}
