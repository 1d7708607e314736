//! API handlers

use axum::Json;
use serde::Serialize;

use crate::api::{StubEndpoint, SERVICE_NAME};

/// Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        service: SERVICE_NAME,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Body returned by every placeholder route
#[derive(Debug, Serialize)]
pub struct StubResponse {
    pub message: &'static str,
}

fn stub(endpoint: StubEndpoint) -> Json<StubResponse> {
    tracing::debug!(
        method = %endpoint.method(),
        path = endpoint.path(),
        "Serving placeholder response"
    );
    Json(StubResponse {
        message: endpoint.message(),
    })
}

/// `GET /api/test`
pub async fn test_connectivity() -> Json<StubResponse> {
    stub(StubEndpoint::TestConnectivity)
}

/// `POST /api/test`
///
/// The request body is never read, so any payload (or none) gets the same
/// answer.
pub async fn test_send_data() -> Json<StubResponse> {
    stub(StubEndpoint::TestSendData)
}

/// `GET /api/health`
pub async fn api_health() -> Json<StubResponse> {
    stub(StubEndpoint::Health)
}

/// `GET /api/version`
pub async fn api_version() -> Json<StubResponse> {
    stub(StubEndpoint::Version)
}

/// `GET /api/endpoints`
pub async fn list_endpoints() -> Json<StubResponse> {
    stub(StubEndpoint::Endpoints)
}
