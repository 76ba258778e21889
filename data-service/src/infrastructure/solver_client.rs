//! HTTP client for calling `scheduling-service`'s `/solve` endpoint: a trait for
//! mocking in tests, and a `reqwest`-backed implementation for production wiring.

use async_trait::async_trait;
use shared::{DomainError, DomainResult, SolveRequest, SolveResponse};

/// Trait for invoking the solver microservice — allows mocking in tests.
#[async_trait]
pub trait SolverClient: Send + Sync {
    async fn solve(&self, request: SolveRequest) -> DomainResult<SolveResponse>;
}

pub struct ReqwestSolverClient {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestSolverClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url, client: reqwest::Client::new() }
    }
}

#[async_trait]
impl SolverClient for ReqwestSolverClient {
    async fn solve(&self, request: SolveRequest) -> DomainResult<SolveResponse> {
        let url = format!("{}/api/v1/solve", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalServiceError(format!(
                "scheduling-service returned {status}: {body}"
            )));
        }

        response
            .json::<SolveResponse>()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))
    }
}
