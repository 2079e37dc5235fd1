//! Named demo datasets substituted by the hooks when a fetch fails, so the
//! page always has something to render. Kept out of the hooks themselves so
//! tests can assert against them directly.

use crate::models::{
    news::{NewsArticle, NewsSource, NewsSummary, Sentiment, SentimentBreakdown},
    prices::{ChartData, ChartDataPoint, PriceData, PriceSummary},
};
use crate::utils::format::format_price;
use chrono::{DateTime, Duration, Utc};

/// Note attached to every substituted price snapshot.
pub const DEMO_NOTE: &str = "Demo data - API unavailable";

pub const DEMO_PRICE: f64 = 43_250.50;
pub const DEMO_MARKET_CAP: f64 = 847_000_000_000.0;
pub const DEMO_VOLUME: f64 = 28_000_000_000.0;
pub const DEMO_CHANGE_24H: f64 = 2.5;

/// Daily offsets for the synthetic chart series. Deterministic on purpose:
/// the walk always ends at `DEMO_PRICE`.
const DEMO_CHART_OFFSETS: [f64; 7] = [350.0, 980.0, 120.0, 760.0, 1430.0, 900.0, 1250.5];
const DEMO_CHART_BASE: f64 = 42_000.0;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Fully-populated snapshot used when the current-price fetch fails.
pub fn demo_price(now: DateTime<Utc>) -> PriceData {
    PriceData {
        symbol: "BTC".to_string(),
        current_price: DEMO_PRICE,
        market_cap: Some(DEMO_MARKET_CAP),
        total_volume: Some(DEMO_VOLUME),
        price_change_percentage_24h: Some(DEMO_CHANGE_24H),
        last_updated: Some(now.to_rfc3339()),
        note: Some(DEMO_NOTE.to_string()),
    }
}

/// Summary used when the summary fetch fails; mirrors `demo_price`.
pub fn demo_price_summary(now: DateTime<Utc>) -> PriceSummary {
    PriceSummary {
        current_price: DEMO_PRICE,
        price_change_24h: DEMO_CHANGE_24H,
        market_cap: Some(DEMO_MARKET_CAP),
        volume: Some(DEMO_VOLUME),
        trend: "bullish".to_string(),
        summary: format!(
            "Bitcoin is trading at {}, bullish with a {DEMO_CHANGE_24H}% change in the last 24 hours.",
            format_price(DEMO_PRICE),
        ),
        last_updated: Some(now.to_rfc3339()),
    }
}

/// Seven-point synthetic daily series ending at `now_ms`, substituted when
/// a chart fetch fails so the chart is never left empty.
pub fn demo_chart(timeframe: &str, now_ms: i64) -> ChartData {
    let data: Vec<ChartDataPoint> = DEMO_CHART_OFFSETS
        .iter()
        .enumerate()
        .map(|(i, offset)| ChartDataPoint {
            timestamp: now_ms - (DEMO_CHART_OFFSETS.len() as i64 - 1 - i as i64) * MS_PER_DAY,
            price: DEMO_CHART_BASE + offset,
        })
        .collect();

    ChartData {
        timeframe: timeframe.to_string(),
        interval: "daily".to_string(),
        symbol: "BTC".to_string(),
        total_points: data.len() as u32,
        data,
    }
}

/// Fixed three-article set used when the article fetch fails.
pub fn demo_articles(now: DateTime<Utc>) -> Vec<NewsArticle> {
    let article = |title: &str, url: &str, source: &str, hours_ago: i64, summary: &str| NewsArticle {
        title: title.to_string(),
        url: url.to_string(),
        source: source.to_string(),
        published_at: Some(now - Duration::hours(hours_ago)),
        summary: Some(summary.to_string()),
        sentiment: Sentiment::Positive,
        currencies: vec!["BTC".to_string()],
        image_url: None,
        keywords: None,
    };

    vec![
        article(
            "Bitcoin Maintains Strong Position Above $43,000",
            "https://example.com/bitcoin-strong",
            "CoinDesk",
            2,
            "Bitcoin continues to show resilience with institutional adoption driving confidence.",
        ),
        article(
            "Regulatory Clarity Brings Optimism to Bitcoin Market",
            "https://example.com/regulatory-clarity",
            "Bitcoin Magazine",
            4,
            "Recent regulatory developments provide clearer framework for Bitcoin adoption.",
        ),
        article(
            "Bitcoin Network Hash Rate Reaches New All-Time High",
            "https://example.com/hashrate-ath",
            "CoinTelegraph",
            6,
            "The Bitcoin network's security continues to strengthen with increased mining.",
        ),
    ]
}

/// Aggregate summary matching `demo_articles`.
pub fn demo_news_summary(now: DateTime<Utc>) -> NewsSummary {
    NewsSummary {
        total_articles: 3,
        overall_sentiment: Sentiment::Positive,
        sentiment_breakdown: SentimentBreakdown {
            positive: 3,
            negative: 0,
            neutral: 0,
        },
        top_sources: vec![
            "CoinDesk".to_string(),
            "Bitcoin Magazine".to_string(),
            "CoinTelegraph".to_string(),
        ],
        latest_headline: "Bitcoin Maintains Strong Position Above $43,000".to_string(),
        summary: "Latest Bitcoin news shows positive sentiment with institutional adoption themes."
            .to_string(),
        last_updated: now.to_rfc3339(),
    }
}

/// Source directory used when the sources fetch fails.
pub fn demo_sources() -> Vec<NewsSource> {
    vec![
        NewsSource {
            name: "CoinDesk".to_string(),
            article_count: 5,
            reliability_score: 9.5,
            update_frequency: Some("Multiple daily".to_string()),
            sentiment_distribution: SentimentBreakdown {
                positive: 3,
                negative: 1,
                neutral: 1,
            },
        },
        NewsSource {
            name: "Bitcoin Magazine".to_string(),
            article_count: 3,
            reliability_score: 9.0,
            update_frequency: Some("Daily".to_string()),
            sentiment_distribution: SentimentBreakdown {
                positive: 2,
                negative: 0,
                neutral: 1,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_price_is_fully_populated() {
        let price = demo_price(Utc::now());
        assert_eq!(price.symbol, "BTC");
        assert_eq!(price.current_price, 43250.50);
        assert!(price.market_cap.is_some());
        assert!(price.total_volume.is_some());
        assert!(price.price_change_percentage_24h.is_some());
        assert!(price.last_updated.is_some());
        assert_eq!(price.note.as_deref(), Some(DEMO_NOTE));
    }

    #[test]
    fn demo_chart_is_chronological() {
        let chart = demo_chart("7d", 1_700_000_000_000);
        assert_eq!(chart.data.len(), 7);
        assert_eq!(chart.total_points, 7);
        assert!(chart.data.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert_eq!(chart.data.last().unwrap().timestamp, 1_700_000_000_000);
        assert_eq!(chart.data.last().unwrap().price, DEMO_PRICE);
        assert_eq!(chart.timeframe, "7d");
    }

    #[test]
    fn demo_summary_text_tracks_the_constants() {
        let summary = demo_price_summary(Utc::now());
        assert!(summary.summary.contains(&format_price(DEMO_PRICE)));
        assert!(summary.summary.contains(&format!("{DEMO_CHANGE_24H}%")));
    }

    #[test]
    fn demo_news_breakdown_sums_to_total() {
        let summary = demo_news_summary(Utc::now());
        assert_eq!(summary.sentiment_breakdown.total(), summary.total_articles);
        assert_eq!(demo_articles(Utc::now()).len(), 3);
    }
}
