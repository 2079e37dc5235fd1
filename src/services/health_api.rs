use crate::models::{
    error::AppError,
    health::{DetailedHealth, HealthStatus},
};
use crate::services::client::ApiClient;

/// Basic liveness of the remote API.
pub async fn health(client: &ApiClient) -> Result<HealthStatus, AppError> {
    client.get_json("/api/health").await
}

/// Per-subsystem health report.
pub async fn detailed_health(client: &ApiClient) -> Result<DetailedHealth, AppError> {
    client.get_json("/api/health/detailed").await
}

/// Readiness probe.
pub async fn readiness(client: &ApiClient) -> Result<serde_json::Value, AppError> {
    client.get_json("/api/health/ready").await
}

/// Liveness probe.
pub async fn liveness(client: &ApiClient) -> Result<serde_json::Value, AppError> {
    client.get_json("/api/health/live").await
}

// CONVENIENCE FUNCTIONS

pub async fn fetch_health() -> Result<HealthStatus, AppError> {
    health(&ApiClient::new()?).await
}

/// True when the health endpoint answers at all.
pub async fn is_api_accessible() -> bool {
    fetch_health().await.is_ok()
}
