use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, hash_map::Entry};

use super::{ResolveError, TickerResolver};
use crate::core::{NewsError, Symbol};

/// Normalises a raw provider ticker into the key used for lookups.
///
/// Trims whitespace, upper-cases, and rewrites the provider's share-class
/// separator (`brk-a`) into the dotted form (`BRK.A`).
#[must_use]
pub fn normalize_ticker(raw: &str) -> String {
    raw.trim().to_ascii_uppercase().replace('-', ".")
}

/// One dated mapping of a ticker to a symbol, valid over `[from, until)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    /// The symbol the ticker resolves to while the entry applies.
    pub symbol: Symbol,
    /// First date the mapping applies to; `None` means since forever.
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// First date the mapping no longer applies to; `None` means still valid.
    #[serde(default)]
    pub until: Option<NaiveDate>,
}

impl MapEntry {
    fn covers(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.until.is_none_or(|until| date < until)
    }
}

/// An in-memory, date-aware ticker table.
///
/// Tickers get reassigned over time, so each ticker may carry several entries;
/// resolution picks the one covering the as-of date. Entries are checked in
/// insertion order and the first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerMap {
    entries: HashMap<String, Vec<MapEntry>>,
}

impl TickerMap {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a table from JSON of the form
    /// `{"BRK.A": [{"symbol": {...}, "from": "2000-01-01", "until": null}]}`.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Json` if the text is not a valid table, or
    /// `NewsError::InvalidConfig` if two keys normalise to the same ticker
    /// (e.g. `"fb"` and `"FB"`).
    pub fn from_json(s: &str) -> Result<Self, NewsError> {
        let raw: BTreeMap<String, Vec<MapEntry>> = serde_json::from_str(s)?;
        let mut map = Self::new();
        for (ticker, entries) in raw {
            match map.entries.entry(normalize_ticker(&ticker)) {
                Entry::Occupied(slot) => {
                    return Err(NewsError::InvalidConfig(format!(
                        "ticker key {ticker:?} collides with another key normalised to {:?}",
                        slot.key()
                    )));
                }
                Entry::Vacant(slot) => {
                    slot.insert(entries);
                }
            }
        }
        Ok(map)
    }

    /// Maps `ticker` to `symbol` for all dates.
    #[must_use]
    pub fn with(mut self, ticker: &str, symbol: Symbol) -> Self {
        self.insert(ticker, symbol);
        self
    }

    /// Maps `ticker` to `symbol` for all dates.
    pub fn insert(&mut self, ticker: &str, symbol: Symbol) {
        self.insert_range(ticker, symbol, None, None);
    }

    /// Maps `ticker` to `symbol` for dates in `[from, until)`.
    pub fn insert_range(
        &mut self,
        ticker: &str,
        symbol: Symbol,
        from: Option<NaiveDate>,
        until: Option<NaiveDate>,
    ) {
        self.entries
            .entry(normalize_ticker(ticker))
            .or_default()
            .push(MapEntry {
                symbol,
                from,
                until,
            });
    }

    /// Number of distinct normalised tickers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no tickers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TickerResolver for TickerMap {
    fn resolve(&self, ticker: &str, as_of: DateTime<Utc>) -> Result<Symbol, ResolveError> {
        let entries = self
            .entries
            .get(&normalize_ticker(ticker))
            .ok_or_else(|| ResolveError::NotFound(ticker.to_string()))?;

        let date = as_of.date_naive();
        entries
            .iter()
            .find(|e| e.covers(date))
            .map(|e| e.symbol.clone())
            .ok_or_else(|| ResolveError::NotMapped {
                ticker: ticker.to_string(),
                as_of,
            })
    }
}
