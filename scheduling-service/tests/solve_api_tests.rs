mod common;

use serde_json::json;
use shared::solver::SolveResponse;

#[tokio::test]
async fn health_check_reports_healthy() {
    let server = common::test_server(4);
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn solve_covers_a_perfectly_matched_shift() {
    let server = common::test_server(4);

    let body = json!({
        "availability": [{
            "employee_id": "e1",
            "employee_name": "Ana",
            "date": "2026-03-02",
            "experienced": false,
            "hours_min": 0,
            "hours_max": null,
            "available_slots": [{"start": "09:00", "end": "13:00"}],
            "assigned_shift": null
        }],
        "demand": [{
            "date": "2026-03-02",
            "location": "main",
            "start": "09:00",
            "end": "13:00",
            "demand": 1,
            "needs_experienced": false
        }]
    });

    let response = server.post("/api/v1/solve").json(&body).await;
    response.assert_status_ok();

    let parsed: SolveResponse = response.json();
    assert_eq!(parsed.assignments.len(), 1);
    assert_eq!(parsed.assignments[0].assigned_employees, vec!["e1".to_string()]);
    assert_eq!(parsed.assignments[0].missing_minutes, 0);
    assert!(parsed.uncovered.is_empty());
}

#[tokio::test]
async fn solve_reports_partial_coverage_when_demand_exceeds_supply() {
    let server = common::test_server(4);

    let body = json!({
        "availability": [
            {
                "employee_id": "e1",
                "date": "2026-03-02",
                "experienced": false,
                "hours_min": 0,
                "hours_max": null,
                "available_slots": [{"start": "08:00", "end": "16:00"}],
                "assigned_shift": null
            }
        ],
        "demand": [{
            "date": "2026-03-02",
            "location": "main",
            "start": "08:00",
            "end": "12:00",
            "demand": 3,
            "needs_experienced": false
        }]
    });

    let response = server.post("/api/v1/solve").json(&body).await;
    response.assert_status_ok();

    let parsed: SolveResponse = response.json();
    assert_eq!(parsed.assignments[0].assigned_employees.len(), 1);
    assert_eq!(parsed.assignments[0].missing_minutes, 2 * 240);
    assert_eq!(parsed.uncovered.len(), 1);
}

#[tokio::test]
async fn solve_rejects_malformed_request_body() {
    let server = common::test_server(4);
    let response = server.post("/api/v1/solve").json(&json!({"nonsense": true})).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn solve_returns_service_unavailable_when_admission_control_is_saturated() {
    let state = common::test_app_state(1);
    let _held_permit = state.solve_permits.clone().try_acquire_owned().unwrap();
    let router = scheduling_service::api::create_router(state);
    let server = axum_test::TestServer::new(router).unwrap();

    let body = json!({
        "availability": [],
        "demand": []
    });

    let response = server.post("/api/v1/solve").json(&body).await;
    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
}
