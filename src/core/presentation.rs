// src/core/presentation.rs

//! Display-only derivations over single records: relative times, compact
//! counts, date labels and the "related articles" panel.

use crate::core::filter::parse_timestamp;
use crate::core::models::{Article, Severity};
use chrono::{DateTime, Utc};

/// Relative label for a publication timestamp.
///
/// Whole hours elapsed, rounded down: under 1 is "Just now", under 24 is
/// "{h}h ago", under 48 is "Yesterday", anything older is "{d}d ago".
pub fn time_ago(published: &str, now: DateTime<Utc>) -> String {
    let Some(published) = parse_timestamp(published) else {
        return "Unknown".to_string();
    };
    let hours = (now - published).num_seconds().div_euclid(3600);
    match hours {
        h if h < 1 => "Just now".to_string(),
        h if h < 24 => format!("{}h ago", h),
        h if h < 48 => "Yesterday".to_string(),
        h => format!("{}d ago", h / 24),
    }
}

/// Up to three other articles sharing the category or severity of `current`,
/// in catalog order.
pub fn related_articles<'a>(articles: &'a [Article], current: &Article) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|a| a.id != current.id)
        .filter(|a| a.category == current.category || a.severity == current.severity)
        .take(3)
        .collect()
}

/// The home screen's breaking-news strip: the first three critical or high articles.
pub fn breaking_news(articles: &[Article]) -> Vec<&Article> {
    articles
        .iter()
        .filter(|a| matches!(a.severity, Severity::Critical | Severity::High))
        .take(3)
        .collect()
}

/// Compact record counts: `2.3M`, `850K`, `999`. Halves round up.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", (n as f64 / 100_000.0).round() / 10.0)
    } else if n >= 1_000 {
        format!("{:.0}K", (n as f64 / 1_000.0).round())
    } else {
        n.to_string()
    }
}

/// Thousands separators for view counts: `15420` becomes `15,420`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `"2024-01-15"` becomes `"Jan 15, 2024"`. Unparseable input is echoed back.
pub fn format_date(value: &str) -> String {
    match parse_timestamp(value) {
        Some(ts) => ts.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock_data::MockDataStore;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        parse_timestamp("2024-01-20T12:00:00Z").unwrap()
    }

    fn ago(d: Duration) -> String {
        (now() - d).to_rfc3339()
    }

    #[test]
    fn time_ago_buckets() {
        assert_eq!(time_ago(&ago(Duration::minutes(30)), now()), "Just now");
        assert_eq!(time_ago(&ago(Duration::minutes(59)), now()), "Just now");
        assert_eq!(time_ago(&ago(Duration::hours(1)), now()), "1h ago");
        assert_eq!(time_ago(&ago(Duration::hours(23)), now()), "23h ago");
        assert_eq!(time_ago(&ago(Duration::hours(24)), now()), "Yesterday");
        assert_eq!(time_ago(&ago(Duration::hours(25)), now()), "Yesterday");
        assert_eq!(time_ago(&ago(Duration::hours(48)), now()), "2d ago");
        assert_eq!(time_ago(&ago(Duration::days(5)), now()), "5d ago");
    }

    #[test]
    fn time_ago_future_and_garbage() {
        assert_eq!(time_ago(&ago(Duration::hours(-3)), now()), "Just now");
        assert_eq!(time_ago("yesterday-ish", now()), "Unknown");
    }

    #[test]
    fn related_articles_share_category_or_severity() {
        let store = MockDataStore::load();
        let current = store.article("1").unwrap();
        let related: Vec<u32> = related_articles(store.articles, current).iter().map(|a| a.id).collect();
        // only #6 shares category or severity with #1
        assert_eq!(related, vec![6]);

        let current = store.article("2").unwrap();
        let related: Vec<u32> = related_articles(store.articles, current).iter().map(|a| a.id).collect();
        assert_eq!(related, vec![3, 5, 7]);
    }

    #[test]
    fn breaking_news_takes_first_three_high_or_critical() {
        let store = MockDataStore::load();
        let ids: Vec<u32> = breaking_news(store.articles).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn counts_and_dates() {
        assert_eq!(format_count(2_300_000), "2.3M");
        assert_eq!(format_count(850_000), "850K");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(2_500), "3K");
        assert_eq!(format_count(12_500), "13K");
        assert_eq!(format_count(2_250_000), "2.3M");
        assert_eq!(format_thousands(15420), "15,420");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("soon"), "soon");
    }
}
