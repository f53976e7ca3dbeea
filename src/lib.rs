//! tiingo-news-rs: typed decoding of Tiingo news-feed payloads.
//!
//! A [`NewsDecoder`] turns the provider's JSON array of articles into
//! [`NewsRecord`]s. Each record is filed under the decoder's target
//! [`Symbol`], carries the article's tickers resolved through a
//! [`TickerResolver`], and exposes the crawl date both in UTC and in the
//! target exchange's time zone.
//!
//! ```
//! use tiingo_news_rs::{NewsDecoder, Symbol, TickerMap};
//!
//! let resolver = TickerMap::new().with("aapl", Symbol::equity("AAPL"));
//! let decoder = NewsDecoder::builder(resolver)
//!     .symbol(Symbol::equity("AAPL"))
//!     .time_zone_name("America/New_York")
//!     .build()?;
//!
//! let records = decoder.decode_str(
//!     r#"[{"id": 1, "crawlDate": "2019-01-29T22:20:01.696871Z",
//!          "publishedDate": "2019-01-29T22:17:00Z", "tickers": ["aapl"]}]"#,
//! )?;
//! assert_eq!(records[0].symbols, vec![Symbol::equity("AAPL")]);
//! # Ok::<(), tiingo_news_rs::NewsError>(())
//! ```

pub mod core;
pub mod news;
pub mod resolver;

pub use crate::core::{NewsError, SecurityType, Symbol};
pub use news::{DecoderConfig, NewsDecoder, NewsDecoderBuilder, NewsRecord, decode_batch};
pub use resolver::{ResolveError, TickerMap, TickerResolver};
