use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::core::{NewsError, conversions::parse_utc_timestamp};

pub(crate) const ID: &str = "id";
pub(crate) const TITLE: &str = "title";
pub(crate) const SOURCE: &str = "source";
pub(crate) const URL: &str = "url";
pub(crate) const DESCRIPTION: &str = "description";
pub(crate) const TAGS: &str = "tags";
pub(crate) const TICKERS: &str = "tickers";
pub(crate) const CRAWL_DATE: &str = "crawlDate";
pub(crate) const PUBLISHED_DATE: &str = "publishedDate";

/// The fields of one provider article, before ticker resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WireArticle {
    pub(crate) id: String,
    pub(crate) crawl_date: DateTime<Utc>,
    pub(crate) published_date: DateTime<Utc>,
    pub(crate) title: String,
    pub(crate) source: String,
    pub(crate) url: String,
    pub(crate) description: String,
    pub(crate) tags: Vec<String>,
    pub(crate) tickers: Vec<String>,
}

impl WireArticle {
    /// Extracts the article at position `index` of the batch.
    pub(crate) fn extract(index: usize, obj: &Map<String, Value>) -> Result<Self, NewsError> {
        let id = present(obj, ID).ok_or(NewsError::MissingField { index, field: ID })?;

        Ok(Self {
            id: stringify(id),
            crawl_date: timestamp(index, obj, CRAWL_DATE)?,
            published_date: timestamp(index, obj, PUBLISHED_DATE)?,
            title: string_or_default(obj, TITLE),
            source: string_or_default(obj, SOURCE),
            url: string_or_default(obj, URL),
            description: string_or_default(obj, DESCRIPTION),
            tags: string_list(index, obj, TAGS)?.unwrap_or_default(),
            tickers: string_list(index, obj, TICKERS)?.ok_or(NewsError::MissingField {
                index,
                field: TICKERS,
            })?,
        })
    }
}

/// The value under `key`, treating `null` as absent.
fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

/// Strings pass through; any other value becomes its JSON text (`2` -> `"2"`).
fn stringify(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn string_or_default(obj: &Map<String, Value>, key: &str) -> String {
    present(obj, key).map(stringify).unwrap_or_default()
}

/// `Ok(None)` when absent; an array is stringified element-wise.
fn string_list(
    index: usize,
    obj: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<Vec<String>>, NewsError> {
    match present(obj, key) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items.iter().map(stringify).collect())),
        Some(other) => Err(NewsError::malformed(
            Some(index),
            format!("field `{key}` must be an array, got {}", kind(other)),
        )),
    }
}

fn timestamp(
    index: usize,
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<DateTime<Utc>, NewsError> {
    let raw = present(obj, field).ok_or(NewsError::MissingField { index, field })?;
    let text = stringify(raw);
    parse_utc_timestamp(&text).ok_or(NewsError::InvalidTimestamp {
        index,
        field,
        value: text,
    })
}

pub(crate) const fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
