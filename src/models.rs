// src/models.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Direction of a quote's move, derived from the sign of the rounded
/// change percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_change(change_pct: f64) -> Self {
        if change_pct > 0.0 {
            Trend::Up
        } else if change_pct < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change_pct: f64,
    pub volume: u64,
    pub volatility_pct: f64,
    pub timestamp: DateTime<Utc>,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteBoard {
    pub stocks: Vec<Quote>,
    pub total_monitored: usize,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryPoint {
    pub timestamp_ms: i64,
    pub price: f64,
    pub volume: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceHistory {
    pub symbol: String,
    pub timeframe_hours: u32,
    pub data_points: usize,
    pub price_history: Vec<HistoryPoint>,
}

/// All percentage-like fields use the [0, 100] scale; `avg_loss` is a
/// positive magnitude.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSnapshot {
    pub timestamp: DateTime<Utc>,
    pub total_capital: f64,
    pub available_capital: f64,
    pub total_pnl: f64,
    pub unrealized_pnl: f64,
    pub realized_pnl: f64,
    pub total_return_pct: f64,
    pub positions_count: u32,
    pub active_positions_count: u32,
    pub total_trades: u32,
    pub winning_trades: u32,
    pub losing_trades: u32,
    pub win_rate: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignalDistribution {
    #[serde(rename = "Buy")]
    pub buy: u64,
    #[serde(rename = "Sell")]
    pub sell: u64,
    #[serde(rename = "Hold")]
    pub hold: u64,
    #[serde(rename = "Close")]
    pub close: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketRegimes {
    pub strong_uptrend: u64,
    pub mild_uptrend: u64,
    pub consolidation: u64,
    pub weak_downtrend: u64,
    pub risk_off: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignalSnapshot {
    pub timestamp: DateTime<Utc>,
    pub signals_processed: u64,
    pub signals_per_minute: f64,
    pub avg_confidence: f64,
    pub avg_urgency: f64,
    pub signal_distribution: SignalDistribution,
    pub pattern_strength_avg: f64,
    pub spike_count_avg: f64,
    pub volatility_avg: f64,
    pub market_regimes: MarketRegimes,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub timestamp: DateTime<Utc>,
    pub total_capital: f64,
    pub total_pnl: f64,
    pub total_return_pct: f64,
    pub win_rate: f64,
    pub positions_count: u32,
    pub active_positions_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignalSummary {
    pub timestamp: DateTime<Utc>,
    pub signals_processed: u64,
    pub avg_confidence: f64,
    pub avg_urgency: f64,
    pub pattern_strength_avg: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskSummary {
    pub timestamp: DateTime<Utc>,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
}

/// Combined document served at `/api/v1/metrics/all`. The `positions` and
/// `market_data` arrays are placeholders the dashboards expect to exist.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedSnapshot {
    pub portfolio: PortfolioSummary,
    pub signals: SignalSummary,
    pub positions: Vec<serde_json::Value>,
    pub market_data: Vec<serde_json::Value>,
    pub risk: RiskSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: DateTime<Utc>,
}
