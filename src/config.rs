/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Price/summary refresh interval in milliseconds (1 minute)
    pub const PRICE_REFRESH_INTERVAL_MS: u32 = 60_000;

    /// News refresh interval in milliseconds (5 minutes)
    pub const NEWS_REFRESH_INTERVAL_MS: u32 = 300_000;

    /// API status badge refresh interval in milliseconds (1 minute)
    pub const STATUS_REFRESH_INTERVAL_MS: u32 = 60_000;

    /// Request timeout in milliseconds. Applied on native targets only;
    /// the browser fetch backend exposes no timeout knob.
    pub const REQUEST_TIMEOUT_MS: u64 = 30_000;

    /// Default number of articles requested from the news feed
    pub const DEFAULT_NEWS_LIMIT: u32 = 10;

    /// How many extra articles each "load more" requests
    pub const NEWS_PAGE_STEP: u32 = 10;

    /// Default chart timeframe and sampling interval
    pub const DEFAULT_CHART_TIMEFRAME: &'static str = "7d";
    pub const DEFAULT_CHART_INTERVAL: &'static str = "daily";

    /// Session id used when the caller does not supply one
    pub const DEFAULT_SESSION_ID: &'static str = "default";

    /// Page size for chat history requests
    pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

    /// Base URL of the remote API. Resolved at compile time from
    /// `API_BASE_URL`, falling back to the local development address.
    pub fn api_base_url() -> &'static str {
        option_env!("API_BASE_URL").unwrap_or("http://localhost:8000")
    }
}
