// src/api.rs
use chrono::Utc;
use log::info;
use serde::Deserialize;
use std::convert::Infallible;
use warp::{Filter, Rejection, Reply};

use crate::error::{self, ApiError};
use crate::exposition;
use crate::generator::{self, Jitter};
use crate::models::Health;

pub const SERVICE: &str = "demo-metrics-api";

pub const DEFAULT_HISTORY_HOURS: u32 = 24;
// One year of hourly points; anything larger is a caller mistake.
pub const MAX_HISTORY_HOURS: u32 = 8760;

#[derive(Deserialize)]
struct HistoryQuery {
    hours: Option<u32>,
}

pub fn routes() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let stocks = warp::path!("stocks")
        .and(warp::get())
        .and_then(stocks_handler);

    let history = warp::path!(String / "history")
        .and(warp::get())
        .and(warp::query::<HistoryQuery>())
        .and_then(history_handler);

    let health = warp::path!("health")
        .and(warp::get())
        .and_then(health_handler);

    let portfolio = warp::path!("api" / "v1" / "metrics" / "portfolio")
        .and(warp::get())
        .and_then(portfolio_handler);

    let signals = warp::path!("api" / "v1" / "metrics" / "signals")
        .and(warp::get())
        .and_then(signals_handler);

    let all = warp::path!("api" / "v1" / "metrics" / "all")
        .and(warp::get())
        .and_then(combined_handler);

    let metrics = warp::path!("metrics")
        .and(warp::get())
        .and_then(metrics_handler);

    stocks
        .or(history)
        .or(health)
        .or(portfolio)
        .or(signals)
        .or(all)
        .or(metrics)
}

/// The full filter served by `main` and driven by the integration tests:
/// routes plus CORS plus rejection recovery.
pub fn server() -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    routes().with(cors()).recover(error::handle_rejection)
}

fn cors() -> warp::filters::cors::Builder {
    warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"])
}

async fn stocks_handler() -> Result<impl Reply, Rejection> {
    let board = generator::quote_board(&mut rand::thread_rng(), Utc::now());
    info!("Generated quotes for {} instruments.", board.total_monitored);
    Ok(warp::reply::json(&board))
}

async fn history_handler(symbol: String, query: HistoryQuery) -> Result<impl Reply, Rejection> {
    let hours = query.hours.unwrap_or(DEFAULT_HISTORY_HOURS);
    if hours == 0 {
        return Err(warp::reject::custom(ApiError::BadRequest(
            "hours must be greater than zero".to_string(),
        )));
    }
    if hours > MAX_HISTORY_HOURS {
        return Err(warp::reject::custom(ApiError::BadRequest(format!(
            "hours must be at most {}",
            MAX_HISTORY_HOURS
        ))));
    }

    let history = generator::price_history(&mut rand::thread_rng(), Utc::now(), &symbol, hours);
    info!("Generated {}h price history for {}.", hours, symbol);
    Ok(warp::reply::json(&history))
}

async fn health_handler() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&Health {
        status: "ok",
        service: SERVICE,
        timestamp: Utc::now(),
    }))
}

async fn portfolio_handler() -> Result<impl Reply, Rejection> {
    let snapshot =
        generator::portfolio_snapshot(&mut rand::thread_rng(), Utc::now(), Jitter::Constant);
    info!("Generated portfolio snapshot.");
    Ok(warp::reply::json(&snapshot))
}

async fn signals_handler() -> Result<impl Reply, Rejection> {
    let snapshot =
        generator::signal_snapshot(&mut rand::thread_rng(), Utc::now(), Jitter::PerField);
    info!("Generated signal snapshot.");
    Ok(warp::reply::json(&snapshot))
}

async fn combined_handler() -> Result<impl Reply, Rejection> {
    let snapshot = generator::combined_snapshot(Utc::now());
    info!("Generated combined snapshot.");
    Ok(warp::reply::json(&snapshot))
}

async fn metrics_handler() -> Result<impl Reply, Rejection> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    // One variance draw shared by both snapshots, so every exposed field
    // moves in the same direction within a scrape.
    let jitter = Jitter::correlated(&mut rng);
    let portfolio = generator::portfolio_snapshot(&mut rng, now, jitter);
    let signals = generator::signal_snapshot(&mut rng, now, jitter);
    let body = exposition::render(&portfolio, &signals);
    info!("Rendered metrics exposition ({} bytes).", body.len());
    Ok(warp::reply::with_header(
        body,
        "content-type",
        exposition::CONTENT_TYPE,
    ))
}
