use chrono_tz::Tz;
use serde_json::Value;

use crate::{
    core::{NewsError, Symbol, conversions::utc_to_exchange},
    news::{model::NewsRecord, wire},
    resolver::TickerResolver,
};

/// Decodes a whole provider batch, aborting on the first bad element.
pub(crate) fn decode_articles<R>(
    root: &Value,
    symbol: &Symbol,
    time_zone: Tz,
    resolver: &R,
) -> Result<Vec<NewsRecord>, NewsError>
where
    R: TickerResolver + ?Sized,
{
    let Value::Array(items) = root else {
        return Err(NewsError::malformed(
            None,
            format!("expected a JSON array of articles, got {}", wire::kind(root)),
        ));
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(count = items.len(), "decoding news batch");

    items
        .iter()
        .enumerate()
        .map(|(index, item)| decode_article(index, item, symbol, time_zone, resolver))
        .collect()
}

fn decode_article<R>(
    index: usize,
    item: &Value,
    symbol: &Symbol,
    time_zone: Tz,
    resolver: &R,
) -> Result<NewsRecord, NewsError>
where
    R: TickerResolver + ?Sized,
{
    let obj = item.as_object().ok_or_else(|| {
        NewsError::malformed(
            Some(index),
            format!("expected an article object, got {}", wire::kind(item)),
        )
    })?;
    let article = wire::WireArticle::extract(index, obj)?;

    let symbols = article
        .tickers
        .into_iter()
        .map(|ticker| match resolver.resolve(&ticker, article.crawl_date) {
            Ok(resolved) => Ok(resolved),
            Err(source) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(index, ticker = %ticker, error = %source, "ticker did not resolve");
                Err(NewsError::UnresolvableTicker {
                    index,
                    ticker,
                    source,
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(feature = "tracing")]
    tracing::trace!(index, id = %article.id, symbols = symbols.len(), "decoded article");

    Ok(NewsRecord {
        article_id: article.id,
        crawl_date: article.crawl_date,
        published_date: article.published_date,
        title: article.title,
        source: article.source,
        url: article.url,
        description: article.description,
        tags: article.tags,
        symbols,
        symbol: symbol.clone(),
        time: utc_to_exchange(article.crawl_date, time_zone),
    })
}
