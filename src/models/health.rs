use serde::Deserialize;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Healthy,
    Degraded,
    Unhealthy,
    Initializing,
}

impl ServiceState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Unhealthy => "unhealthy",
            Self::Initializing => "initializing",
        }
    }
}

/// Response body for `/api/health`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: ServiceState,
    pub service: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// One subsystem entry in the detailed health response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ServiceHealth {
    pub status: ServiceState,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub last_price: Option<f64>,
}

/// Response body for `/api/health/detailed`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DetailedHealth {
    pub status: ServiceState,
    #[serde(default)]
    pub overall_health: bool,
    #[serde(default)]
    pub services: HashMap<String, ServiceHealth>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detailed_health_parses_service_map() {
        let detailed: DetailedHealth = serde_json::from_str(
            r#"{
                "status": "degraded",
                "overall_health": false,
                "services": {
                    "price_service": {
                        "status": "healthy",
                        "type": "external",
                        "message": "ok",
                        "last_price": 43250.5
                    },
                    "rag_service": {"status": "initializing"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(detailed.status, ServiceState::Degraded);
        assert_eq!(detailed.services.len(), 2);
        assert_eq!(
            detailed.services["price_service"].last_price,
            Some(43250.5)
        );
        assert_eq!(
            detailed.services["rag_service"].status,
            ServiceState::Initializing
        );
    }
}
