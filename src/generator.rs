// src/generator.rs
//! Snapshot generation: fixed baselines plus bounded random jitter.
//!
//! Every function takes the random source and "now" as parameters, so a
//! request handler passes `thread_rng()` and `Utc::now()` while tests pass
//! a seeded RNG and a pinned instant. Nothing here performs I/O or touches
//! shared mutable state.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::baseline;
use crate::models::{
    CombinedSnapshot, HistoryPoint, PortfolioSnapshot, PortfolioSummary, PriceHistory, Quote,
    QuoteBoard, RiskSummary, SignalSnapshot, SignalSummary, Trend,
};

/// How baseline constants are perturbed for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Jitter {
    /// Emit the baseline constants untouched.
    Constant,
    /// Every field gets its own independent draw.
    PerField,
    /// One shared variance term; all fields move together.
    Correlated { variance: f64 },
}

impl Jitter {
    /// Draw the shared variance term once per request.
    pub fn correlated<R: Rng>(rng: &mut R) -> Self {
        Jitter::Correlated { variance: rng.gen_range(-0.1..=0.1) }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn quote_board<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> QuoteBoard {
    let stocks: Vec<Quote> = baseline::INSTRUMENTS
        .iter()
        .map(|inst| {
            let delta = rng.gen_range(-0.05..=0.05);
            let change_pct = round2(delta * 100.0);
            Quote {
                symbol: inst.symbol.to_string(),
                price: round2(inst.base_price * (1.0 + delta)),
                change_pct,
                volume: rng.gen_range(5_000_000..=25_000_000),
                volatility_pct: round2(inst.volatility * 100.0),
                timestamp: now,
                trend: Trend::from_change(change_pct),
            }
        })
        .collect();

    QuoteBoard { total_monitored: stocks.len(), stocks, last_updated: now }
}

/// One point per hour, oldest first, last point exactly at `now`.
///
/// A deterministic sawtooth rides on top of the noise so charts do not
/// look like flat bands. `hours` must be positive; callers validate.
pub fn price_history<R: Rng>(
    rng: &mut R,
    now: DateTime<Utc>,
    symbol: &str,
    hours: u32,
) -> PriceHistory {
    let base_price = baseline::base_price(symbol);
    let price_history: Vec<HistoryPoint> = (0..hours)
        .map(|i| {
            let timestamp = now - Duration::hours(i64::from(hours - 1 - i));
            let sawtooth = (f64::from(i % 7) - 3.0) * 0.005;
            let variation = rng.gen_range(-0.02..=0.02) + sawtooth;
            HistoryPoint {
                timestamp_ms: timestamp.timestamp_millis(),
                price: round2(base_price * (1.0 + variation)),
                volume: rng.gen_range(1_000_000..=5_000_000),
            }
        })
        .collect();

    PriceHistory {
        symbol: symbol.to_string(),
        timeframe_hours: hours,
        data_points: price_history.len(),
        price_history,
    }
}

pub fn portfolio_snapshot<R: Rng>(
    rng: &mut R,
    now: DateTime<Utc>,
    jitter: Jitter,
) -> PortfolioSnapshot {
    let b = &baseline::PORTFOLIO;

    // Offset scales: capital 1000, pnl 500, return 0.5, win rate 5,
    // sharpe 0.2 per unit of variance.
    let (total_capital, total_pnl, total_return_pct, win_rate, sharpe_ratio) = match jitter {
        Jitter::Constant => (
            b.total_capital,
            b.total_pnl,
            b.total_return_pct,
            b.win_rate,
            b.sharpe_ratio,
        ),
        Jitter::Correlated { variance } => (
            b.total_capital + variance * 1000.0,
            b.total_pnl + variance * 500.0,
            b.total_return_pct + variance * 0.5,
            b.win_rate + variance * 5.0,
            b.sharpe_ratio + variance * 0.2,
        ),
        Jitter::PerField => (
            b.total_capital + rng.gen_range(-0.1..=0.1) * 1000.0,
            b.total_pnl + rng.gen_range(-0.1..=0.1) * 500.0,
            b.total_return_pct + rng.gen_range(-0.1..=0.1) * 0.5,
            b.win_rate + rng.gen_range(-0.1..=0.1) * 5.0,
            b.sharpe_ratio + rng.gen_range(-0.1..=0.1) * 0.2,
        ),
    };

    PortfolioSnapshot {
        timestamp: now,
        total_capital,
        available_capital: b.available_capital,
        total_pnl,
        unrealized_pnl: b.unrealized_pnl,
        realized_pnl: b.realized_pnl,
        total_return_pct,
        positions_count: b.positions_count,
        active_positions_count: b.active_positions_count,
        total_trades: b.total_trades,
        winning_trades: b.winning_trades,
        losing_trades: b.losing_trades,
        win_rate,
        avg_win: b.avg_win,
        avg_loss: b.avg_loss,
        max_drawdown: b.max_drawdown,
        sharpe_ratio,
    }
}

pub fn signal_snapshot<R: Rng>(rng: &mut R, now: DateTime<Utc>, jitter: Jitter) -> SignalSnapshot {
    let b = &baseline::SIGNALS;

    let (
        signals_processed,
        signals_per_minute,
        avg_confidence,
        avg_urgency,
        pattern_strength_avg,
        spike_count_avg,
        volatility_avg,
    ) = match jitter {
        Jitter::Constant => (
            b.signals_processed,
            b.signals_per_minute,
            b.avg_confidence,
            b.avg_urgency,
            b.pattern_strength_avg,
            b.spike_count_avg,
            b.volatility_avg,
        ),
        Jitter::PerField => (
            b.signals_processed + rng.gen_range(0..=10),
            b.signals_per_minute + rng.gen_range(-0.5..=0.5),
            b.avg_confidence + rng.gen_range(-10.0..=10.0),
            b.avg_urgency + rng.gen_range(-10.0..=10.0),
            b.pattern_strength_avg + rng.gen_range(-5.0..=5.0),
            b.spike_count_avg + rng.gen_range(-20.0..=20.0),
            b.volatility_avg + rng.gen_range(-0.5..=0.5),
        ),
        // The processed counter creeps with wall-clock seconds instead of
        // the RNG so consecutive scrapes trend upward.
        Jitter::Correlated { variance } => (
            b.signals_processed + now.timestamp().rem_euclid(10) as u64,
            b.signals_per_minute + variance * 0.3,
            b.avg_confidence + variance * 5.0,
            b.avg_urgency + variance * 8.0,
            b.pattern_strength_avg + variance * 6.0,
            b.spike_count_avg + variance * 20.0,
            b.volatility_avg + variance * 0.5,
        ),
    };

    SignalSnapshot {
        timestamp: now,
        signals_processed,
        signals_per_minute,
        avg_confidence,
        avg_urgency,
        signal_distribution: baseline::SIGNAL_DISTRIBUTION,
        pattern_strength_avg,
        spike_count_avg,
        volatility_avg,
        market_regimes: baseline::MARKET_REGIMES,
    }
}

/// Combined document for `/api/v1/metrics/all`: summaries over the
/// baseline constants, no jitter.
pub fn combined_snapshot(now: DateTime<Utc>) -> CombinedSnapshot {
    let p = &baseline::PORTFOLIO;
    let s = &baseline::SIGNALS;

    CombinedSnapshot {
        portfolio: PortfolioSummary {
            timestamp: now,
            total_capital: p.total_capital,
            total_pnl: p.total_pnl,
            total_return_pct: p.total_return_pct,
            win_rate: p.win_rate,
            positions_count: p.positions_count,
            active_positions_count: p.active_positions_count,
        },
        signals: SignalSummary {
            timestamp: now,
            signals_processed: s.signals_processed,
            avg_confidence: s.avg_confidence,
            avg_urgency: s.avg_urgency,
            pattern_strength_avg: s.pattern_strength_avg,
        },
        positions: Vec::new(),
        market_data: Vec::new(),
        risk: RiskSummary {
            timestamp: now,
            sharpe_ratio: p.sharpe_ratio,
            max_drawdown: p.max_drawdown,
        },
    }
}
