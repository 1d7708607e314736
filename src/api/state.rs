//! API server state

use crate::config::AppConfig;

/// Name reported by `GET /health`
pub const SERVICE_NAME: &str = "pinterest";

/// Shared, read-only state handed to every route.
///
/// The scaffold's routes are all stateless, so this carries nothing yet;
/// it exists so the route table is built from an explicit value rather than
/// a process-wide singleton.
#[derive(Clone, Debug, Default)]
pub struct AppState {}

impl AppState {
    pub fn new() -> Self {
        Self {}
    }

    /// Build state from loaded configuration
    pub fn from_config(_config: &AppConfig) -> Self {
        Self::new()
    }
}
