mod api;
mod model;
mod wire;

pub use model::NewsRecord;

use chrono_tz::Tz;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;

use crate::{
    core::{NewsError, Symbol},
    resolver::TickerResolver,
};

/// Decoder settings that can be loaded from a config file.
///
/// ```
/// let cfg: tiingo_news_rs::DecoderConfig = serde_json::from_str(
///     r#"{"symbol": {"value": "AAPL"}, "time_zone": "America/New_York"}"#,
/// ).unwrap();
/// assert_eq!(cfg.time_zone, chrono_tz::America::New_York);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DecoderConfig {
    /// The symbol every decoded record is filed under.
    pub symbol: Symbol,
    /// The exchange time zone used for `NewsRecord::time`.
    #[serde(default = "default_time_zone")]
    pub time_zone: Tz,
}

const fn default_time_zone() -> Tz {
    Tz::UTC
}

/// Decodes provider news batches into [`NewsRecord`]s.
///
/// A decoder holds only immutable configuration, so a single instance can be
/// reused for many batches and shared across threads when its resolver is.
#[derive(Debug, Clone)]
pub struct NewsDecoder<R> {
    symbol: Symbol,
    time_zone: Tz,
    resolver: R,
}

impl<R: TickerResolver> NewsDecoder<R> {
    /// Creates a decoder that files every record under `symbol` and expresses
    /// crawl dates in `time_zone`.
    pub const fn new(symbol: Symbol, time_zone: Tz, resolver: R) -> Self {
        Self {
            symbol,
            time_zone,
            resolver,
        }
    }

    /// Creates a new `NewsDecoderBuilder` around `resolver`.
    pub fn builder(resolver: R) -> NewsDecoderBuilder<R> {
        NewsDecoderBuilder::new(resolver)
    }

    /// The symbol stamped on every record.
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The exchange time zone records are localised into.
    pub const fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// The resolver used for article tickers.
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Decodes a parsed provider payload.
    ///
    /// The result holds one record per array element, in input order.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` if the root is not an array, an element is not an
    /// object, a required field is missing, a timestamp does not parse, or a
    /// ticker cannot be resolved. No partial results are returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, root), err, fields(symbol = %self.symbol)))]
    pub fn decode(&self, root: &Value) -> Result<Vec<NewsRecord>, NewsError> {
        api::decode_articles(root, &self.symbol, self.time_zone, &self.resolver)
    }

    /// Parses `body` as JSON and decodes it.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Json` for invalid JSON, otherwise as [`Self::decode`].
    pub fn decode_str(&self, body: &str) -> Result<Vec<NewsRecord>, NewsError> {
        let root: Value = serde_json::from_str(body)?;
        self.decode(&root)
    }

    /// Parses `body` as JSON and decodes it.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Json` for invalid JSON, otherwise as [`Self::decode`].
    pub fn decode_slice(&self, body: &[u8]) -> Result<Vec<NewsRecord>, NewsError> {
        let root: Value = serde_json::from_slice(body)?;
        self.decode(&root)
    }

    /// Reads a JSON payload from `reader` and decodes it.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Json` for I/O failures or invalid JSON, otherwise as
    /// [`Self::decode`].
    pub fn decode_reader<Rd: Read>(&self, reader: Rd) -> Result<Vec<NewsRecord>, NewsError> {
        let root: Value = serde_json::from_reader(reader)?;
        self.decode(&root)
    }

    /// Encoding records back into the provider's format is not supported.
    ///
    /// # Errors
    ///
    /// Always returns `NewsError::UnsupportedOperation`, whatever the input.
    pub fn encode(&self, _records: &[NewsRecord]) -> Result<Value, NewsError> {
        Err(NewsError::UnsupportedOperation(
            "encoding news records into the provider format",
        ))
    }
}

/// Decodes `root` without building a [`NewsDecoder`].
///
/// # Errors
///
/// As [`NewsDecoder::decode`].
pub fn decode_batch<R>(
    root: &Value,
    symbol: &Symbol,
    time_zone: Tz,
    resolver: &R,
) -> Result<Vec<NewsRecord>, NewsError>
where
    R: TickerResolver + ?Sized,
{
    api::decode_articles(root, symbol, time_zone, resolver)
}

/* ----------------------- Builder ----------------------- */

/// A builder for configuring a [`NewsDecoder`].
#[derive(Debug)]
pub struct NewsDecoderBuilder<R> {
    resolver: R,
    symbol: Option<Symbol>,
    time_zone: Tz,
    bad_time_zone: Option<String>,
}

impl<R: TickerResolver> NewsDecoderBuilder<R> {
    /// Creates a builder with no symbol and the UTC time zone.
    pub const fn new(resolver: R) -> Self {
        Self {
            resolver,
            symbol: None,
            time_zone: Tz::UTC,
            bad_time_zone: None,
        }
    }

    /// Sets the symbol every record is filed under. Required.
    #[must_use]
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = Some(symbol);
        self
    }

    /// Sets the exchange time zone. Defaults to UTC.
    #[must_use]
    pub fn time_zone(mut self, tz: Tz) -> Self {
        self.time_zone = tz;
        self.bad_time_zone = None;
        self
    }

    /// Sets the exchange time zone from an IANA name such as `America/New_York`.
    ///
    /// An unknown name is reported by [`Self::build`].
    #[must_use]
    pub fn time_zone_name(mut self, name: &str) -> Self {
        match name.parse::<Tz>() {
            Ok(tz) => {
                self.time_zone = tz;
                self.bad_time_zone = None;
            }
            Err(_) => self.bad_time_zone = Some(name.to_string()),
        }
        self
    }

    /// Applies a loaded [`DecoderConfig`].
    #[must_use]
    pub fn config(self, cfg: DecoderConfig) -> Self {
        self.symbol(cfg.symbol).time_zone(cfg.time_zone)
    }

    /// Builds the decoder.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::InvalidTimeZone` if an unknown time zone name was
    /// given, or `NewsError::InvalidConfig` if no symbol was set.
    pub fn build(self) -> Result<NewsDecoder<R>, NewsError> {
        if let Some(name) = self.bad_time_zone {
            return Err(NewsError::InvalidTimeZone(name));
        }
        let symbol = self
            .symbol
            .ok_or_else(|| NewsError::InvalidConfig("a target symbol is required".into()))?;
        Ok(NewsDecoder::new(symbol, self.time_zone, self.resolver))
    }
}
