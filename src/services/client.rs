use crate::config::Config;
use crate::models::error::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Configuration for the dashboard API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Joins the base URL with an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::api_base_url().to_string()),
        }
    }
}

/// HTTP client for the dashboard API. Requests are logged on the way out;
/// failures are logged with the response body and propagated unchanged.
/// No retry, no backoff.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let builder = reqwest::Client::builder();
        // The browser fetch backend exposes no timeout knob
        #[cfg(not(target_arch = "wasm32"))]
        let builder =
            builder.timeout(std::time::Duration::from_millis(Config::REQUEST_TIMEOUT_MS));

        let http = builder
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issues a GET and decodes the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request::<T, ()>(reqwest::Method::GET, path, None).await
    }

    /// Issues a POST with a JSON body and decodes the JSON response.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(reqwest::Method::POST, path, Some(body)).await
    }

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        gloo::console::log!(format!("API Request: {method} {path}"));

        let mut request = self
            .http
            .request(method, self.config.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            let error = Self::classify_error(e);
            gloo::console::error!(format!("API Error: {error}"));
            error
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            gloo::console::error!(format!("API Error: {status} {body}"));
            return Err(Self::error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            404 => AppError::NotFound(body.to_string()),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_local_base_url() {
        let config = ApiConfig::default();
        assert_eq!(
            config.url("/api/prices/current"),
            "http://localhost:8000/api/prices/current"
        );
    }

    #[test]
    fn builder_overrides_base_url() {
        let config = ApiConfig::builder()
            .base_url("https://api.example.com")
            .build();
        assert_eq!(config.url("/api/health"), "https://api.example.com/api/health");
    }

    #[test]
    fn status_mapping() {
        assert!(matches!(
            ApiClient::error_for_status(reqwest::StatusCode::TOO_MANY_REQUESTS, ""),
            AppError::RateLimited
        ));
        assert!(matches!(
            ApiClient::error_for_status(reqwest::StatusCode::NOT_FOUND, "missing"),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            ApiClient::error_for_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            AppError::ApiError(_)
        ));
    }
}
