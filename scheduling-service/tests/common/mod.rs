use scheduling_service::api::state::AppState;
use scheduling_service::infrastructure::config::{Settings, SolverSettings};

/// Test settings: small solve concurrency cap so the backpressure test can exhaust it
/// deterministically.
pub fn test_settings(max_concurrent_solves: usize) -> Settings {
    Settings {
        server: scheduling_service::infrastructure::config::ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        solver: SolverSettings {
            default_time_limit_sec: 5.0,
            default_workers: 1,
            max_concurrent_solves,
        },
    }
}

pub fn test_app_state(max_concurrent_solves: usize) -> AppState {
    AppState::new(test_settings(max_concurrent_solves))
}

pub fn test_server(max_concurrent_solves: usize) -> axum_test::TestServer {
    let state = test_app_state(max_concurrent_solves);
    let router = scheduling_service::api::create_router(state);
    axum_test::TestServer::new(router).unwrap()
}
