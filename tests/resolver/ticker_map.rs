use tiingo_news_rs::{
    NewsError, ResolveError, Symbol, TickerMap, TickerResolver,
    resolver::normalize_ticker,
};

use crate::common::{fixture, ny_decoder, utc};

fn us_map() -> TickerMap {
    TickerMap::from_json(&fixture("ticker_map", "US", "json")).unwrap()
}

#[test]
fn normalize_handles_case_whitespace_and_share_classes() {
    assert_eq!(normalize_ticker(" aapl "), "AAPL");
    assert_eq!(normalize_ticker("brk-a"), "BRK.A");
    assert_eq!(normalize_ticker("BRK.B"), "BRK.B");
}

#[test]
fn fixture_table_resolves_share_classes() {
    let map = us_map();
    let as_of = utc(2019, 1, 29, 22, 20, 1, 0);

    assert_eq!(map.len(), 3);
    assert_eq!(map.resolve("aapl", as_of).unwrap(), Symbol::equity("AAPL"));
    assert_eq!(map.resolve("BRK-A", as_of).unwrap(), Symbol::equity("BRK.A"));
}

#[test]
fn dated_entries_follow_ticker_reassignment() {
    let map = us_map();

    let before = map.resolve("fb", utc(2022, 6, 8, 23, 59, 59, 0)).unwrap();
    let after = map.resolve("fb", utc(2022, 6, 9, 0, 0, 0, 0)).unwrap();

    assert_eq!(before.value, "FB");
    assert_eq!(after.value, "META");
}

#[test]
fn unknown_and_unmapped_tickers_fail() {
    let as_of = utc(2010, 1, 1, 0, 0, 0, 0);
    let mut map = TickerMap::new();
    map.insert_range(
        "twtr",
        Symbol::equity("TWTR"),
        chrono::NaiveDate::from_ymd_opt(2013, 11, 7),
        chrono::NaiveDate::from_ymd_opt(2022, 11, 8),
    );

    assert_eq!(
        map.resolve("goog", as_of),
        Err(ResolveError::NotFound("goog".into()))
    );
    assert_eq!(
        map.resolve("twtr", as_of),
        Err(ResolveError::NotMapped {
            ticker: "twtr".into(),
            as_of
        })
    );
}

#[test]
fn decoder_resolves_with_crawl_date_as_of() {
    let body = serde_json::json!([
        {"id": 1, "crawlDate": "2022-06-08T12:00:00Z",
         "publishedDate": "2022-06-08T11:00:00Z", "tickers": ["fb", "brk-a"]},
        {"id": 2, "crawlDate": "2022-06-10T12:00:00Z",
         "publishedDate": "2022-06-08T11:00:00Z", "tickers": ["fb"]}
    ]);

    let records = ny_decoder(us_map()).decode(&body).unwrap();

    assert_eq!(
        records[0].symbols,
        vec![Symbol::equity("FB"), Symbol::equity("BRK.A")]
    );
    assert_eq!(records[1].symbols, vec![Symbol::equity("META")]);
}

#[test]
fn colliding_table_keys_are_rejected() {
    let body = r#"{
        "fb": [{ "symbol": { "value": "FB" } }],
        "FB": [{ "symbol": { "value": "META" } }]
    }"#;

    for _ in 0..20 {
        let err = TickerMap::from_json(body).unwrap_err();
        assert!(matches!(err, NewsError::InvalidConfig(_)), "{err}");
    }
}

#[test]
fn share_class_spellings_collide_too() {
    let err = TickerMap::from_json(
        r#"{"brk-a": [{"symbol": {"value": "BRK.A"}}], "BRK.A": [{"symbol": {"value": "BRK.A"}}]}"#,
    )
    .unwrap_err();

    assert!(matches!(err, NewsError::InvalidConfig(_)));
}

#[test]
fn malformed_table_is_rejected() {
    assert!(TickerMap::from_json(r#"{"aapl": "AAPL"}"#).is_err());
}
