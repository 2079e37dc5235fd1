#[cfg(test)]
mod tests {
    use bitcoin_dashboard::models::{
        chat::{CHAT_ERROR_REPLY, ChatResponse, ChatRole, Conversation},
        error::AppError,
        news::{
            NewsResponse, NewsSummary, Sentiment, SentimentFilter, filter_articles,
            has_more_articles,
        },
        prices::{ChartData, PriceData, PriceSummary},
    };
    use bitcoin_dashboard::services::{chat_api, client::ApiConfig, fallback, news_api, price_api};
    use bitcoin_dashboard::utils::format::{
        format_large_number, format_percentage, format_price, price_change_class,
    };
    use chrono::{TimeZone, Utc};

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_rate_limited_display() {
        assert_eq!(AppError::RateLimited.to_string(), "Rate limited");
    }

    // ===== Chat Model Tests =====

    #[test]
    fn test_send_message_transcript_scenario() {
        // API answers the question with one citation
        let response: ChatResponse = serde_json::from_str(
            r#"{
                "message": "Bitcoin is...",
                "citations": ["whitepaper.pdf"],
                "session_id": "default",
                "timestamp": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 3).unwrap();
        let log = Conversation::default()
            .with_user_message("What is Bitcoin?", now)
            .with_assistant_reply(&response, now);

        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].role, ChatRole::User);
        assert_eq!(log.messages()[0].content, "What is Bitcoin?");
        assert_eq!(log.messages()[1].role, ChatRole::Assistant);
        assert_eq!(log.messages()[1].content, "Bitcoin is...");
        assert_eq!(log.messages()[1].citations, vec!["whitepaper.pdf"]);
    }

    #[test]
    fn test_failed_send_appends_apology_and_keeps_history() {
        let now = Utc::now();
        let log = Conversation::default()
            .with_user_message("first", now)
            .with_error_reply(now)
            .with_user_message("second", now)
            .with_error_reply(now);

        // Append-only: every turn is still there, user/assistant alternating
        assert_eq!(log.len(), 4);
        assert_eq!(log.messages()[0].content, "first");
        assert_eq!(log.messages()[1].content, CHAT_ERROR_REPLY);
        assert_eq!(log.messages()[2].content, "second");
        assert_eq!(log.messages()[3].role, ChatRole::Assistant);
    }

    // ===== Fallback Tests =====

    #[test]
    fn test_demo_price_matches_documented_snapshot() {
        let price = fallback::demo_price(Utc::now());

        assert_eq!(price.symbol, "BTC");
        assert_eq!(price.current_price, 43250.50);
        assert_eq!(price.market_cap, Some(847_000_000_000.0));
        assert_eq!(price.total_volume, Some(28_000_000_000.0));
        assert_eq!(price.price_change_percentage_24h, Some(2.5));
        assert_eq!(price.note.as_deref(), Some("Demo data - API unavailable"));
        assert!(price.last_updated.is_some());
    }

    #[test]
    fn test_demo_summary_mirrors_demo_price() {
        let summary = fallback::demo_price_summary(Utc::now());
        assert_eq!(summary.current_price, fallback::DEMO_PRICE);
        assert_eq!(summary.trend, "bullish");
        assert!(summary.summary.contains("$43,250.50"));
    }

    #[test]
    fn test_demo_chart_never_leaves_chart_empty() {
        let chart = fallback::demo_chart("30d", 1_700_000_000_000);

        assert_eq!(chart.timeframe, "30d");
        assert_eq!(chart.interval, "daily");
        assert_eq!(chart.data.len() as u32, chart.total_points);
        assert!(chart.data.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn test_demo_articles_are_all_positive() {
        let articles = fallback::demo_articles(Utc::now());
        assert_eq!(articles.len(), 3);
        assert!(articles.iter().all(|a| a.sentiment == Sentiment::Positive));
        assert!(articles.iter().all(|a| a.currencies == vec!["BTC"]));

        let summary = fallback::demo_news_summary(Utc::now());
        assert_eq!(summary.sentiment_breakdown.total(), summary.total_articles);
        assert_eq!(summary.total_articles, articles.len() as u32);
    }

    // ===== Pagination Tests =====

    #[test]
    fn test_short_page_ends_pagination() {
        // Scenario: 3 articles returned for limit=10
        assert!(!has_more_articles(3, 10));
    }

    #[test]
    fn test_full_page_keeps_pagination_open() {
        assert!(has_more_articles(10, 10));
        assert!(has_more_articles(20, 20));
        assert!(!has_more_articles(19, 20));
    }

    // ===== Filtering Tests =====

    #[test]
    fn test_news_page_filter_scenario() {
        let response: NewsResponse = serde_json::from_str(
            r#"{
                "articles": [
                    {
                        "title": "Bitcoin Mining Difficulty Hits Record",
                        "url": "https://example.com/1",
                        "source": "CoinDesk",
                        "summary": "Difficulty adjustment reflects growing hash rate.",
                        "sentiment": "positive",
                        "currencies": ["BTC"]
                    },
                    {
                        "title": "Energy Debate Continues",
                        "url": "https://example.com/2",
                        "source": "CoinTelegraph",
                        "summary": "Critics question mining energy consumption.",
                        "sentiment": "negative",
                        "currencies": ["BTC"]
                    },
                    {
                        "title": "ETF Inflows Accelerate",
                        "url": "https://example.com/3",
                        "source": "Bitcoin Magazine",
                        "summary": "Institutional demand keeps climbing.",
                        "sentiment": "positive",
                        "currencies": ["BTC"]
                    }
                ],
                "total_count": 3,
                "last_updated": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        let shown = filter_articles(
            &response.articles,
            "mining",
            SentimentFilter::Only(Sentiment::Positive),
        );

        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Bitcoin Mining Difficulty Hits Record");
    }

    // ===== Endpoint Payload Tests =====

    #[test]
    fn test_price_data_deserialization() {
        let price: PriceData = serde_json::from_str(
            r#"{
                "symbol": "BTC",
                "current_price": 43250.5,
                "market_cap": 847000000000.0,
                "total_volume": 28000000000.0,
                "price_change_percentage_24h": 2.5,
                "last_updated": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(price.current_price, 43250.5);
        assert!(price.note.is_none());
    }

    #[test]
    fn test_price_summary_deserialization() {
        let summary: PriceSummary = serde_json::from_str(
            r#"{
                "current_price": 43250.5,
                "price_change_24h": 2.5,
                "market_cap": 847000000000.0,
                "volume": 28000000000.0,
                "trend": "bullish",
                "summary": "Bitcoin is trading at $43,250.50, bullish with a 2.5% change in the last 24 hours.",
                "last_updated": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(summary.trend, "bullish");
        assert_eq!(summary.price_change_24h, 2.5);
    }

    #[test]
    fn test_chart_data_deserialization_ignores_extra_fields() {
        let chart: ChartData = serde_json::from_str(
            r#"{
                "timeframe": "7d",
                "interval": "daily",
                "symbol": "BTC",
                "data": [
                    {"timestamp": 1700000000000, "price": 43000.0, "date": 1700000000000},
                    {"timestamp": 1700086400000, "price": 43500.0, "date": 1700086400000}
                ],
                "total_points": 2
            }"#,
        )
        .unwrap();

        assert_eq!(chart.data.len(), 2);
        let (x_data, y_data) = chart.series_data();
        assert_eq!(x_data.len(), 2);
        assert_eq!(y_data, vec![43000.0, 43500.0]);
    }

    #[test]
    fn test_news_summary_deserialization() {
        let summary: NewsSummary = serde_json::from_str(
            r#"{
                "total_articles": 6,
                "overall_sentiment": "positive",
                "sentiment_breakdown": {"positive": 3, "negative": 1, "neutral": 2},
                "top_sources": ["CoinDesk"],
                "latest_headline": "Bitcoin Maintains Strong Position",
                "summary": "Positive coverage dominates.",
                "last_updated": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(summary.overall_sentiment, Sentiment::Positive);
        assert_eq!(summary.sentiment_breakdown.total(), summary.total_articles);
    }

    // ===== URL Construction Tests =====

    #[test]
    fn test_default_base_url() {
        let config = ApiConfig::default();
        assert_eq!(config.url("/api/health"), "http://localhost:8000/api/health");
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(
            chat_api::history_path("abc", 50),
            "/api/chat/sessions/abc/history?limit=50"
        );
        assert_eq!(
            price_api::chart_path("30d", "hourly"),
            "/api/prices/chart?timeframe=30d&interval=hourly"
        );
        assert_eq!(news_api::latest_path(20), "/api/news/latest?limit=20");
        assert_eq!(news_api::sentiment_path("7d"), "/api/news/sentiment?period=7d");
    }

    // ===== Formatting Tests =====

    #[test]
    fn test_display_formatting() {
        assert_eq!(format_price(43250.50), "$43,250.50");
        assert_eq!(format_large_number(847_000_000_000.0), "$847.0B");
        assert_eq!(format_percentage(2.5), "+2.50%");
        assert_eq!(price_change_class(-3.1), "price-down");
    }
}
