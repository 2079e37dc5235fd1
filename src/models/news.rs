use crate::models::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categorical sentiment label attached to articles and aggregates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Positive, Self::Neutral, Self::Negative]
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            _ => Err(AppError::DataError(format!("Invalid sentiment: {s}"))),
        }
    }
}

/// Sentiment selection for the news page filter controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SentimentFilter {
    #[default]
    All,
    Only(Sentiment),
}

impl std::str::FromStr for SentimentFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// A news article as returned by the remote API (or the fallback set).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    pub source: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub currencies: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

impl NewsArticle {
    /// Case-insensitive substring match against title and summary, combined
    /// with an exact sentiment match. Both must pass for display.
    pub fn matches(&self, search: &str, filter: SentimentFilter) -> bool {
        let matches_search = search.is_empty() || {
            let needle = search.to_lowercase();
            self.title.to_lowercase().contains(&needle)
                || self
                    .summary
                    .as_ref()
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
        };

        let matches_sentiment = match filter {
            SentimentFilter::All => true,
            SentimentFilter::Only(sentiment) => self.sentiment == sentiment,
        };

        matches_search && matches_sentiment
    }
}

/// Applies the news page filters to an already-fetched article list.
pub fn filter_articles<'a>(
    articles: &'a [NewsArticle],
    search: &str,
    filter: SentimentFilter,
) -> Vec<&'a NewsArticle> {
    articles
        .iter()
        .filter(|a| a.matches(search.trim(), filter))
        .collect()
}

/// Heuristic pagination signal: the latest-articles call carries no
/// authoritative total, so assume more exist whenever the server filled
/// the requested page.
pub fn has_more_articles(returned: usize, limit: u32) -> bool {
    returned >= limit as usize
}

/// Response body for `/api/news/latest`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewsResponse {
    pub articles: Vec<NewsArticle>,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl SentimentBreakdown {
    pub fn total(self) -> u32 {
        self.positive + self.negative + self.neutral
    }
}

/// Aggregate summary from `/api/news/summary`. The server contract says the
/// breakdown sums to `total_articles`; the client does not enforce it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewsSummary {
    pub total_articles: u32,
    pub overall_sentiment: Sentiment,
    pub sentiment_breakdown: SentimentBreakdown,
    #[serde(default)]
    pub top_sources: Vec<String>,
    pub latest_headline: String,
    pub summary: String,
    pub last_updated: String,
}

/// Percentage distribution in the `/api/news/sentiment` response.
#[derive(Clone, Copy, Debug, PartialEq, Default, Deserialize)]
pub struct SentimentPercentages {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Period sentiment analysis from `/api/news/sentiment`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewsSentiment {
    pub period: String,
    pub total_articles: u32,
    pub overall_sentiment: Sentiment,
    pub sentiment_distribution: SentimentPercentages,
    pub sentiment_counts: SentimentBreakdown,
    #[serde(default)]
    pub top_sources: Vec<String>,
    #[serde(default)]
    pub analysis_summary: Option<String>,
}

/// One entry in the `/api/news/sources` directory.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewsSource {
    pub name: String,
    pub article_count: u32,
    pub reliability_score: f64,
    #[serde(default)]
    pub update_frequency: Option<String>,
    #[serde(default)]
    pub sentiment_distribution: SentimentBreakdown,
}

/// Response body for `/api/news/sources`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewsSources {
    #[serde(default)]
    pub total_sources: u32,
    #[serde(default)]
    pub sources: Vec<NewsSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, summary: &str, sentiment: Sentiment) -> NewsArticle {
        NewsArticle {
            title: title.to_string(),
            url: "https://example.com".to_string(),
            source: "CoinDesk".to_string(),
            published_at: None,
            summary: Some(summary.to_string()),
            sentiment,
            currencies: vec!["BTC".to_string()],
            image_url: None,
            keywords: None,
        }
    }

    #[test]
    fn filter_requires_both_search_and_sentiment() {
        let articles = vec![
            article("Mining difficulty climbs", "Hash rate up", Sentiment::Positive),
            article("Exchange outage", "Mining unaffected", Sentiment::Negative),
            article("Miners expand", "New MINING farms online", Sentiment::Positive),
            article("Price steady", "Quiet weekend", Sentiment::Positive),
        ];

        let shown = filter_articles(&articles, "mining", SentimentFilter::Only(Sentiment::Positive));

        assert_eq!(shown.len(), 2);
        assert!(shown.iter().all(|a| a.sentiment == Sentiment::Positive));
        // Case-insensitive match against the summary also counts
        assert!(shown.iter().any(|a| a.title == "Miners expand"));
    }

    #[test]
    fn empty_search_passes_everything() {
        let articles = vec![article("A", "b", Sentiment::Neutral)];
        assert_eq!(filter_articles(&articles, "", SentimentFilter::All).len(), 1);
        assert_eq!(filter_articles(&articles, "   ", SentimentFilter::All).len(), 1);
    }

    #[test]
    fn has_more_is_false_for_short_pages() {
        assert!(!has_more_articles(3, 10));
        assert!(has_more_articles(10, 10));
        assert!(has_more_articles(12, 10));
    }

    #[test]
    fn sentiment_parsing() {
        assert_eq!("Positive".parse::<Sentiment>().unwrap(), Sentiment::Positive);
        assert!("bullish".parse::<Sentiment>().is_err());
        assert_eq!("all".parse::<SentimentFilter>().unwrap(), SentimentFilter::All);
        assert_eq!(
            "negative".parse::<SentimentFilter>().unwrap(),
            SentimentFilter::Only(Sentiment::Negative)
        );
    }

    #[test]
    fn article_sentiment_defaults_to_neutral() {
        let parsed: NewsArticle = serde_json::from_str(
            r#"{"title": "T", "url": "https://example.com", "source": "CoinDesk"}"#,
        )
        .unwrap();
        assert_eq!(parsed.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn breakdown_total() {
        let breakdown = SentimentBreakdown {
            positive: 3,
            negative: 1,
            neutral: 2,
        };
        assert_eq!(breakdown.total(), 6);
    }
}
