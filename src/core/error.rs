use thiserror::Error;

use crate::resolver::ResolveError;

/// The primary error type for all fallible operations in this crate.
///
/// Every decode failure aborts the whole batch. Variants raised while
/// processing an element carry its position in the input array and, where
/// applicable, the name of the offending field.
#[derive(Debug, Error)]
pub enum NewsError {
    /// The payload text could not be parsed as JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The root value is not an array, an element is not an object, or a field
    /// has a JSON type that cannot be interpreted.
    #[error("malformed input{}: {reason}", fmt_index(.index))]
    MalformedInput {
        /// Index of the offending element, `None` when the root value is at fault.
        index: Option<usize>,
        /// What was wrong with the input.
        reason: String,
    },

    /// A required field was absent (or `null`) on an element.
    #[error("missing required field `{field}` at index {index}")]
    MissingField {
        /// Index of the offending element.
        index: usize,
        /// Wire name of the missing field.
        field: &'static str,
    },

    /// A date field did not hold an ISO-8601 timestamp.
    #[error("unparsable timestamp in `{field}` at index {index}: {value:?}")]
    InvalidTimestamp {
        /// Index of the offending element.
        index: usize,
        /// Wire name of the date field.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
    },

    /// The ticker resolver could not map a raw ticker to a symbol.
    #[error("unresolvable ticker {ticker:?} at index {index}: {source}")]
    UnresolvableTicker {
        /// Index of the offending element.
        index: usize,
        /// The raw ticker as sent by the provider.
        ticker: String,
        /// The resolver's own failure.
        #[source]
        source: ResolveError,
    },

    /// The requested operation is not supported by this crate.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// The decoder was configured inconsistently (e.g. no target symbol).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A time zone name is not a known IANA identifier.
    #[error("unknown time zone: {0}")]
    InvalidTimeZone(String),
}

impl NewsError {
    /// Index of the array element that failed, if the error is tied to one.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::MalformedInput { index, .. } => *index,
            Self::MissingField { index, .. }
            | Self::InvalidTimestamp { index, .. }
            | Self::UnresolvableTicker { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Wire name of the field that failed, if the error is tied to one.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } | Self::InvalidTimestamp { field, .. } => Some(*field),
            Self::UnresolvableTicker { .. } => Some("tickers"),
            _ => None,
        }
    }

    pub(crate) fn malformed(index: Option<usize>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            index,
            reason: reason.into(),
        }
    }
}

fn fmt_index(index: &Option<usize>) -> String {
    index.map(|i| format!(" at index {i}")).unwrap_or_default()
}
