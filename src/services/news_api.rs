use crate::models::{
    error::AppError,
    news::{NewsResponse, NewsSentiment, NewsSources, NewsSummary},
};
use crate::services::client::ApiClient;

pub fn latest_path(limit: u32) -> String {
    format!("/api/news/latest?limit={limit}")
}

pub fn sentiment_path(period: &str) -> String {
    format!("/api/news/sentiment?period={period}")
}

/// Fetches the latest N articles.
pub async fn latest_news(client: &ApiClient, limit: u32) -> Result<NewsResponse, AppError> {
    client.get_json(&latest_path(limit)).await
}

/// Fetches the aggregate sentiment summary.
pub async fn news_summary(client: &ApiClient) -> Result<NewsSummary, AppError> {
    client.get_json("/api/news/summary").await
}

/// Fetches the sentiment breakdown for a period such as `24h`.
pub async fn news_sentiment(client: &ApiClient, period: &str) -> Result<NewsSentiment, AppError> {
    client.get_json(&sentiment_path(period)).await
}

/// Fetches the source directory with reliability metrics.
pub async fn news_sources(client: &ApiClient) -> Result<NewsSources, AppError> {
    client.get_json("/api/news/sources").await
}

// CONVENIENCE FUNCTIONS

pub async fn fetch_latest_news(limit: u32) -> Result<NewsResponse, AppError> {
    latest_news(&ApiClient::new()?, limit).await
}

pub async fn fetch_news_summary() -> Result<NewsSummary, AppError> {
    news_summary(&ApiClient::new()?).await
}

pub async fn fetch_news_sources() -> Result<NewsSources, AppError> {
    news_sources(&ApiClient::new()?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_construction() {
        assert_eq!(latest_path(10), "/api/news/latest?limit=10");
        assert_eq!(sentiment_path("24h"), "/api/news/sentiment?period=24h");
    }
}
