//! Ticker resolution: mapping raw provider tickers to domain [`Symbol`]s.
//!
//! The decoder does not know how securities are identified; it asks a
//! [`TickerResolver`] for every raw ticker it finds in an article, passing the
//! article's crawl date as the as-of date. Callers plug in their own symbol
//! database, a closure (via [`from_fn`]), or the in-memory [`TickerMap`].

mod map;

pub use map::{MapEntry, TickerMap, normalize_ticker};

use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

use crate::core::Symbol;

/// Why a raw ticker could not be mapped to a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The ticker is unknown to the resolver.
    #[error("ticker {0:?} not found")]
    NotFound(String),

    /// The ticker is known, but did not map to any security on the as-of date.
    #[error("ticker {ticker:?} not mapped on {as_of}")]
    NotMapped {
        /// The raw ticker.
        ticker: String,
        /// The date resolution was attempted for.
        as_of: DateTime<Utc>,
    },
}

/// A service that resolves raw tickers into domain symbols.
///
/// Implementations must be stable for a given `(ticker, as_of)` pair. The
/// decoder calls `resolve` synchronously, once per ticker, in input order.
pub trait TickerResolver: Send + Sync {
    /// Resolves `ticker` to the symbol it identified at `as_of`.
    ///
    /// # Errors
    ///
    /// Returns a `ResolveError` if the ticker is unknown or not mappable on
    /// that date.
    fn resolve(&self, ticker: &str, as_of: DateTime<Utc>) -> Result<Symbol, ResolveError>;
}

/// A resolver backed by a closure. Built with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnResolver<F>(F);

/// Wraps a closure as a [`TickerResolver`].
///
/// ```
/// use tiingo_news_rs::{Symbol, resolver::{self, ResolveError}};
///
/// let upper = resolver::from_fn(|ticker: &str, _as_of| {
///     if ticker.is_empty() {
///         Err(ResolveError::NotFound(ticker.to_string()))
///     } else {
///         Ok(Symbol::equity(ticker))
///     }
/// });
/// # let _ = upper;
/// ```
pub const fn from_fn<F>(f: F) -> FnResolver<F>
where
    F: Fn(&str, DateTime<Utc>) -> Result<Symbol, ResolveError> + Send + Sync,
{
    FnResolver(f)
}

impl<F> TickerResolver for FnResolver<F>
where
    F: Fn(&str, DateTime<Utc>) -> Result<Symbol, ResolveError> + Send + Sync,
{
    fn resolve(&self, ticker: &str, as_of: DateTime<Utc>) -> Result<Symbol, ResolveError> {
        (self.0)(ticker, as_of)
    }
}

impl<F> std::fmt::Debug for FnResolver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnResolver")
    }
}

impl<R: TickerResolver + ?Sized> TickerResolver for &R {
    fn resolve(&self, ticker: &str, as_of: DateTime<Utc>) -> Result<Symbol, ResolveError> {
        (**self).resolve(ticker, as_of)
    }
}

impl<R: TickerResolver + ?Sized> TickerResolver for Box<R> {
    fn resolve(&self, ticker: &str, as_of: DateTime<Utc>) -> Result<Symbol, ResolveError> {
        (**self).resolve(ticker, as_of)
    }
}

impl<R: TickerResolver + ?Sized> TickerResolver for Arc<R> {
    fn resolve(&self, ticker: &str, as_of: DateTime<Utc>) -> Result<Symbol, ResolveError> {
        (**self).resolve(ticker, as_of)
    }
}
