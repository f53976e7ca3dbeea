use serde::{Deserialize, Serialize};
use std::fmt;

/// Market identifier used when none is given.
pub const DEFAULT_MARKET: &str = "usa";

/* ----- SECURITY TYPES ----- */

/// The kind of security a [`Symbol`] identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityType {
    /// Custom or provider-specific data not tied to a tradable security.
    Base,
    /// Listed shares.
    #[default]
    Equity,
    /// A market index (e.g. `SPX`).
    Index,
    /// A cryptocurrency pair.
    Crypto,
    /// A currency pair.
    Forex,
}

impl SecurityType {
    /// Lower-case name, as used in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Equity => "equity",
            Self::Index => "index",
            Self::Crypto => "crypto",
            Self::Forex => "forex",
        }
    }
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ----- SYMBOL ----- */

/// A resolved, domain-level security identifier.
///
/// Unlike a raw provider ticker (`"aapl"`, `"brk-a"`), a `Symbol` names one
/// security unambiguously: its canonical ticker value, the kind of security and
/// the market it trades on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Canonical upper-case ticker, e.g. `AAPL` or `BRK.A`.
    pub value: String,
    /// Kind of security; defaults to equity.
    #[serde(default)]
    pub security_type: SecurityType,
    /// Lower-case market identifier, e.g. `usa`.
    #[serde(default = "default_market")]
    pub market: String,
}

impl Symbol {
    /// Creates a symbol, upper-casing the ticker and lower-casing the market.
    pub fn new(value: impl AsRef<str>, security_type: SecurityType, market: impl AsRef<str>) -> Self {
        Self {
            value: value.as_ref().trim().to_ascii_uppercase(),
            security_type,
            market: market.as_ref().trim().to_ascii_lowercase(),
        }
    }

    /// Shorthand for a US equity.
    pub fn equity(value: impl AsRef<str>) -> Self {
        Self::new(value, SecurityType::Equity, DEFAULT_MARKET)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

fn default_market() -> String {
    DEFAULT_MARKET.to_string()
}
