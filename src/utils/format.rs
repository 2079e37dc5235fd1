//! Pure display formatting helpers shared by the view layer.

use crate::models::news::Sentiment;
use chrono::{DateTime, Utc};

/// Formats a USD price with thousands separators, e.g. `$43,250.50`.
pub fn format_price(value: f64) -> String {
    format!("${}", group_thousands(value, 2))
}

/// Compact notation for large dollar amounts, e.g. `$847.0B`.
pub fn format_large_number(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e12 {
        format!("${:.1}T", value / 1e12)
    } else if abs >= 1e9 {
        format!("${:.1}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("${:.1}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("${:.1}K", value / 1e3)
    } else {
        format!("${value:.2}")
    }
}

/// Signed percentage with two decimals, e.g. `+2.50%`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:+.2}%")
}

/// CSS class for a 24h change value.
pub fn price_change_class(value: f64) -> &'static str {
    if value >= 0.0 { "price-up" } else { "price-down" }
}

/// CSS class for a sentiment badge.
pub fn sentiment_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "sentiment-positive",
        Sentiment::Negative => "sentiment-negative",
        Sentiment::Neutral => "sentiment-neutral",
    }
}

/// Coarse "time ago" rendering for article timestamps.
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed.num_seconds() < 60 {
        "just now".to_string()
    } else if elapsed.num_minutes() < 60 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.prec$}", prec = decimals);
    let negative = formatted.starts_with('-');
    let digits = formatted.trim_start_matches('-');
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    if negative {
        grouped.push('-');
    }
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
