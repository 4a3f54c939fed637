// src/main.rs
use env_logger::Builder;
use log::{info, LevelFilter};

use demo_metrics::api;

#[tokio::main]
async fn main() {
    Builder::new()
        .filter_level(LevelFilter::Debug)
        .format_timestamp_secs()
        .init();

    info!("Starting the demo metrics server...");

    let routes = api::server();

    info!("Server running on http://127.0.0.1:3001");
    info!("Available endpoints:");
    info!("   GET /stocks");
    info!("   GET /{{symbol}}/history?hours=24");
    info!("   GET /health");
    info!("   GET /api/v1/metrics/portfolio");
    info!("   GET /api/v1/metrics/signals");
    info!("   GET /api/v1/metrics/all");
    info!("   GET /metrics");

    warp::serve(routes).run(([127, 0, 0, 1], 3001)).await;
}
