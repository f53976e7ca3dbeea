use serde_json::json;

use crate::common::{aapl_map, ny_decoder, utc};

#[test]
fn omitted_optional_fields_default_to_empty() {
    let body = json!([{
        "id": "abc",
        "crawlDate": "2019-01-29T22:20:01Z",
        "publishedDate": "2019-01-29T22:17:00Z",
        "tickers": []
    }]);

    let rec = &ny_decoder(aapl_map()).decode(&body).unwrap()[0];

    assert_eq!(rec.title, "");
    assert_eq!(rec.source, "");
    assert_eq!(rec.url, "");
    assert_eq!(rec.description, "");
    assert!(rec.tags.is_empty());
    assert!(rec.symbols.is_empty());
}

#[test]
fn null_optional_fields_default_to_empty() {
    let body = json!([{
        "id": "abc",
        "crawlDate": "2019-01-29T22:20:01Z",
        "publishedDate": "2019-01-29T22:17:00Z",
        "tickers": [],
        "title": null,
        "source": null,
        "url": null,
        "description": null,
        "tags": null
    }]);

    let rec = &ny_decoder(aapl_map()).decode(&body).unwrap()[0];

    assert_eq!(rec.title, "");
    assert_eq!(rec.description, "");
    assert!(rec.tags.is_empty());
}

#[test]
fn numeric_id_becomes_decimal_string() {
    let body = json!([{
        "id": 2,
        "crawlDate": "2019-01-29T22:20:01Z",
        "publishedDate": "2019-01-29T22:17:00Z",
        "tickers": []
    }]);

    let rec = &ny_decoder(aapl_map()).decode(&body).unwrap()[0];

    assert_eq!(rec.article_id, "2");
}

#[test]
fn non_string_scalars_are_stringified() {
    let body = json!([{
        "id": 7,
        "crawlDate": "2019-01-29T22:20:01Z",
        "publishedDate": "2019-01-29T22:17:00Z",
        "tickers": [],
        "title": 42,
        "source": true,
        "tags": ["earnings", 2019]
    }]);

    let rec = &ny_decoder(aapl_map()).decode(&body).unwrap()[0];

    assert_eq!(rec.title, "42");
    assert_eq!(rec.source, "true");
    assert_eq!(rec.tags, vec!["earnings", "2019"]);
}

#[test]
fn timestamps_are_read_as_utc_wall_clock() {
    let body = json!([{
        "id": 1,
        "crawlDate": "2019-01-29T22:20:01",
        "publishedDate": "2019-01-29T22:17:00.5+01:00",
        "tickers": []
    }]);

    let rec = &ny_decoder(aapl_map()).decode(&body).unwrap()[0];

    assert_eq!(rec.crawl_date.to_rfc3339(), "2019-01-29T22:20:01+00:00");
    assert_eq!(
        rec.published_date.to_rfc3339(),
        "2019-01-29T22:17:00.500+00:00"
    );
}

#[test]
fn explicit_offset_keeps_wall_clock_as_utc() {
    let body = json!([{
        "id": 1,
        "crawlDate": "2019-01-29T22:20:01.696871+01:00",
        "publishedDate": "2019-01-29T22:17:00-05:00",
        "tickers": []
    }]);

    let rec = &ny_decoder(aapl_map()).decode(&body).unwrap()[0];

    assert_eq!(rec.crawl_date, utc(2019, 1, 29, 22, 20, 1, 696_871));
    assert_eq!(rec.published_date, utc(2019, 1, 29, 22, 17, 0, 0));
    // Local time still derives from the UTC wall clock (EST, UTC-5).
    assert_eq!(rec.time.naive_local().to_string(), "2019-01-29 17:20:01.696871");
}

#[test]
fn unknown_keys_are_ignored() {
    let body = json!([{
        "id": 1,
        "crawlDate": "2019-01-29T22:20:01Z",
        "publishedDate": "2019-01-29T22:17:00Z",
        "tickers": [],
        "sentiment": {"score": 0.4},
        "extra": [1, 2, 3]
    }]);

    let records = ny_decoder(aapl_map()).decode(&body).unwrap();

    assert_eq!(records.len(), 1);
}
