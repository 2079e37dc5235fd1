use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Current price snapshot from `/api/prices/current`. `note` is set when
/// the demo fallback is in use.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PriceData {
    pub symbol: String,
    pub current_price: f64,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Textual/numeric summary from `/api/prices/summary`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PriceSummary {
    pub current_price: f64,
    pub price_change_24h: f64,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    pub trend: String,
    pub summary: String,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Historical series from `/api/prices/history`, each entry a
/// `[timestamp_ms, value]` pair.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PriceHistory {
    pub symbol: String,
    pub prices: Vec<(f64, f64)>,
    #[serde(default)]
    pub market_caps: Option<Vec<(f64, f64)>>,
    #[serde(default)]
    pub total_volumes: Option<Vec<(f64, f64)>>,
}

/// One chart sample: millisecond timestamp plus price.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChartDataPoint {
    pub timestamp: i64,
    pub price: f64,
}

/// Chart series from `/api/prices/chart`. Consumers rely on chronological
/// ordering of `data`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChartData {
    pub timeframe: String,
    pub interval: String,
    pub symbol: String,
    pub data: Vec<ChartDataPoint>,
    pub total_points: u32,
}

impl ChartData {
    /// Axis labels and values for plotting, sorted chronologically.
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>) {
        let mut points = self.data.clone();
        points.sort_by_key(|p| p.timestamp);

        let x_data = points
            .iter()
            .map(|p| {
                DateTime::<Utc>::from_timestamp_millis(p.timestamp)
                    .map_or_else(|| p.timestamp.to_string(), |t| t.format("%b %d").to_string())
            })
            .collect();
        let y_data = points.iter().map(|p| p.price).collect();

        (x_data, y_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_data_parses_without_optionals() {
        let price: PriceData = serde_json::from_str(
            r#"{"symbol": "BTC", "current_price": 43250.5}"#,
        )
        .unwrap();

        assert_eq!(price.symbol, "BTC");
        assert_eq!(price.current_price, 43250.5);
        assert!(price.market_cap.is_none());
        assert!(price.note.is_none());
    }

    #[test]
    fn chart_series_is_sorted_chronologically() {
        let chart = ChartData {
            timeframe: "7d".to_string(),
            interval: "daily".to_string(),
            symbol: "BTC".to_string(),
            data: vec![
                ChartDataPoint {
                    timestamp: 1_700_086_400_000,
                    price: 43_500.0,
                },
                ChartDataPoint {
                    timestamp: 1_700_000_000_000,
                    price: 43_000.0,
                },
            ],
            total_points: 2,
        };

        let (x_data, y_data) = chart.series_data();
        assert_eq!(x_data.len(), 2);
        assert_eq!(y_data, vec![43_000.0, 43_500.0]);
    }

    #[test]
    fn price_history_parses_pairs() {
        let history: PriceHistory = serde_json::from_str(
            r#"{"symbol": "BTC", "prices": [[1700000000000, 43000.0], [1700086400000, 43500.0]]}"#,
        )
        .unwrap();

        assert_eq!(history.prices.len(), 2);
        assert_eq!(history.prices[1].1, 43500.0);
    }
}
