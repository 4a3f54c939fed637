// tests/api.rs
//! End-to-end route tests over the full filter (routes + CORS + rejection
//! recovery), using warp's test request harness.

use demo_metrics::api;
use serde_json::Value;

async fn get(path: &str) -> (warp::http::StatusCode, Value) {
    let res = warp::test::request()
        .method("GET")
        .path(path)
        .reply(&api::server())
        .await;
    let body: Value = serde_json::from_slice(res.body()).expect("body should be JSON");
    (res.status(), body)
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "demo-metrics-api");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn unknown_path_returns_not_found_body() {
    let (status, body) = get("/unknownpath").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let res = warp::test::request()
        .method("POST")
        .path("/health")
        .reply(&api::server())
        .await;
    assert_eq!(res.status(), 405);
}

#[tokio::test]
async fn stocks_returns_the_full_board() {
    let (status, body) = get("/stocks").await;
    assert_eq!(status, 200);
    assert_eq!(body["total_monitored"], 8);
    let stocks = body["stocks"].as_array().unwrap();
    assert_eq!(stocks.len(), 8);
    assert_eq!(stocks[0]["symbol"], "AAPL");
    for quote in stocks {
        assert!(quote["price"].as_f64().unwrap() > 0.0);
        let trend = quote["trend"].as_str().unwrap();
        assert!(matches!(trend, "up" | "down" | "flat"));
    }
}

#[tokio::test]
async fn history_honors_requested_hours() {
    let (status, body) = get("/AAPL/history?hours=3").await;
    assert_eq!(status, 200);
    assert_eq!(body["symbol"], "AAPL");
    assert_eq!(body["timeframe_hours"], 3);
    assert_eq!(body["data_points"], 3);
    assert_eq!(body["price_history"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn history_defaults_to_twenty_four_hours() {
    let (status, body) = get("/MSFT/history").await;
    assert_eq!(status, 200);
    assert_eq!(body["data_points"], 24);
}

#[tokio::test]
async fn history_for_unknown_symbol_still_succeeds() {
    let (status, body) = get("/NOSUCH/history?hours=2").await;
    assert_eq!(status, 200);
    assert_eq!(body["symbol"], "NOSUCH");
    assert_eq!(body["data_points"], 2);
}

#[tokio::test]
async fn history_rejects_zero_hours() {
    let (status, body) = get("/AAPL/history?hours=0").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "hours must be greater than zero");
}

#[tokio::test]
async fn history_rejects_unparsable_hours() {
    let (status, body) = get("/AAPL/history?hours=tomorrow").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "invalid query string");
}

#[tokio::test]
async fn history_rejects_absurd_hours() {
    let (status, _body) = get("/AAPL/history?hours=1000000").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn portfolio_document_carries_baseline_constants() {
    let (status, body) = get("/api/v1/metrics/portfolio").await;
    assert_eq!(status, 200);
    assert_eq!(body["total_capital"].as_f64().unwrap(), 102_500.0);
    assert_eq!(body["win_rate"].as_f64().unwrap(), 60.0);
    assert_eq!(body["max_drawdown"].as_f64().unwrap(), 5.0);
    assert_eq!(body["positions_count"], 5);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn signals_document_jitters_around_baseline() {
    let (status, body) = get("/api/v1/metrics/signals").await;
    assert_eq!(status, 200);
    assert_eq!(body["signal_distribution"]["Buy"], 45);
    assert_eq!(body["signal_distribution"]["Close"], 15);
    assert_eq!(body["market_regimes"]["consolidation"], 40);
    let confidence = body["avg_confidence"].as_f64().unwrap();
    assert!((62.0..=82.0).contains(&confidence));
    let processed = body["signals_processed"].as_u64().unwrap();
    assert!((127..=137).contains(&processed));
}

#[tokio::test]
async fn combined_document_has_every_section() {
    let (status, body) = get("/api/v1/metrics/all").await;
    assert_eq!(status, 200);
    assert_eq!(body["portfolio"]["total_capital"].as_f64().unwrap(), 102_500.0);
    assert_eq!(body["signals"]["signals_processed"], 127);
    assert_eq!(body["risk"]["sharpe_ratio"].as_f64().unwrap(), 1.2);
    assert_eq!(body["positions"].as_array().unwrap().len(), 0);
    assert_eq!(body["market_data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn metrics_exposition_has_prometheus_shape() {
    let res = warp::test::request()
        .method("GET")
        .path("/metrics")
        .reply(&api::server())
        .await;
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()["content-type"],
        "text/plain; version=0.0.4"
    );
    let text = String::from_utf8(res.body().to_vec()).unwrap();
    assert!(text.starts_with("# HELP demo_portfolio_capital_total "));
    assert!(text.contains("# TYPE demo_signals_processed_total counter\n"));
    assert!(text.contains("demo_signal_distribution{type=\"hold\"} 35\n"));
    assert!(text.contains("demo_market_regime{regime=\"risk_off\"} 8\n"));
}

#[tokio::test]
async fn responses_carry_cors_headers() {
    let res = warp::test::request()
        .method("GET")
        .path("/stocks")
        .header("origin", "http://localhost:3000")
        .reply(&api::server())
        .await;
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn preflight_requests_are_answered() {
    let res = warp::test::request()
        .method("OPTIONS")
        .path("/stocks")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "GET")
        .reply(&api::server())
        .await;
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("access-control-allow-methods"));
}
