use crate::config::Config;
use crate::models::{
    error::AppError,
    prices::{ChartData, PriceData, PriceHistory, PriceSummary},
};
use crate::services::client::ApiClient;

pub fn history_path(days: u32) -> String {
    format!("/api/prices/history?days={days}")
}

pub fn chart_path(timeframe: &str, interval: &str) -> String {
    format!("/api/prices/chart?timeframe={timeframe}&interval={interval}")
}

/// Fetches the current price snapshot.
pub async fn current_price(client: &ApiClient) -> Result<PriceData, AppError> {
    client.get_json("/api/prices/current").await
}

/// Fetches the historical series for the given day count.
pub async fn price_history(client: &ApiClient, days: u32) -> Result<PriceHistory, AppError> {
    client.get_json(&history_path(days)).await
}

/// Fetches the derived textual summary.
pub async fn price_summary(client: &ApiClient) -> Result<PriceSummary, AppError> {
    client.get_json("/api/prices/summary").await
}

/// Fetches the chart series for a timeframe and sampling interval.
pub async fn chart_data(
    client: &ApiClient,
    timeframe: &str,
    interval: &str,
) -> Result<ChartData, AppError> {
    client.get_json(&chart_path(timeframe, interval)).await
}

// CONVENIENCE FUNCTIONS

pub async fn fetch_current_price() -> Result<PriceData, AppError> {
    current_price(&ApiClient::new()?).await
}

pub async fn fetch_price_summary() -> Result<PriceSummary, AppError> {
    price_summary(&ApiClient::new()?).await
}

/// Fetches chart data at the default sampling interval.
pub async fn fetch_chart_data(timeframe: &str) -> Result<ChartData, AppError> {
    chart_data(&ApiClient::new()?, timeframe, Config::DEFAULT_CHART_INTERVAL).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_construction() {
        assert_eq!(history_path(30), "/api/prices/history?days=30");
        assert_eq!(
            chart_path("7d", "daily"),
            "/api/prices/chart?timeframe=7d&interval=daily"
        );
    }
}
