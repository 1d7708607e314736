//! Catalog of the generated placeholder endpoints mounted under `/api`

use axum::http::Method;

/// One of the scaffold's placeholder routes.
///
/// Each stub answers with a fixed message describing what the route is
/// meant to do once implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubEndpoint {
    TestConnectivity,
    TestSendData,
    Health,
    Version,
    Endpoints,
}

impl StubEndpoint {
    pub const ALL: [StubEndpoint; 5] = [
        StubEndpoint::TestConnectivity,
        StubEndpoint::TestSendData,
        StubEndpoint::Health,
        StubEndpoint::Version,
        StubEndpoint::Endpoints,
    ];

    pub fn method(self) -> Method {
        match self {
            StubEndpoint::TestSendData => Method::POST,
            _ => Method::GET,
        }
    }

    /// Path relative to the `/api` prefix.
    pub fn path(self) -> &'static str {
        match self {
            StubEndpoint::TestConnectivity | StubEndpoint::TestSendData => "/test",
            StubEndpoint::Health => "/health",
            StubEndpoint::Version => "/version",
            StubEndpoint::Endpoints => "/endpoints",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            StubEndpoint::TestConnectivity => "Test the API connectivity",
            StubEndpoint::TestSendData => "Test sending data to the API",
            StubEndpoint::Health => "Check the health status of the API",
            StubEndpoint::Version => "Get the current version of the API",
            StubEndpoint::Endpoints => "List all available API endpoints",
        }
    }
}
