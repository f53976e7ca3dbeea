use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::fmt;

use crate::core::Symbol;

/// A single decoded news article, filed under the decoder's target symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsRecord {
    /// The provider's identifier for the article.
    pub article_id: String,
    /// When the provider crawled the article, in UTC.
    pub crawl_date: DateTime<Utc>,
    /// When the article was originally published, in UTC.
    pub published_date: DateTime<Utc>,
    /// The headline of the article.
    pub title: String,
    /// The publishing outlet's domain (e.g. `bloomberg.com`).
    pub source: String,
    /// A direct link to the article.
    pub url: String,
    /// The provider's summary of the article.
    pub description: String,
    /// Provider topic tags (e.g. `Earnings`), in input order.
    pub tags: Vec<String>,
    /// Securities the article mentions, resolved as of `crawl_date`.
    pub symbols: Vec<Symbol>,
    /// The security this record was filed under.
    pub symbol: Symbol,
    /// `crawl_date` expressed in the exchange time zone of `symbol`.
    pub time: DateTime<Tz>,
}

impl NewsRecord {
    /// News items are point-in-time events, so they end when they start.
    #[must_use]
    pub fn end_time(&self) -> DateTime<Tz> {
        self.time
    }
}

impl fmt::Display for NewsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.time.naive_local(),
            self.symbol,
            self.title
        )
    }
}
