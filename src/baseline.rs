// src/baseline.rs
//! Fixed baseline tables every snapshot is derived from. Immutable after
//! process start, so concurrent requests read them without locking.

use crate::models::{MarketRegimes, SignalDistribution};

#[derive(Debug, Clone, Copy)]
pub struct Instrument {
    pub symbol: &'static str,
    pub base_price: f64,
    pub volatility: f64,
}

pub const INSTRUMENTS: [Instrument; 8] = [
    Instrument { symbol: "AAPL", base_price: 175.50, volatility: 0.02 },
    Instrument { symbol: "MSFT", base_price: 342.80, volatility: 0.015 },
    Instrument { symbol: "GOOGL", base_price: 138.45, volatility: 0.025 },
    Instrument { symbol: "TSLA", base_price: 242.80, volatility: 0.04 },
    Instrument { symbol: "NVDA", base_price: 465.20, volatility: 0.03 },
    Instrument { symbol: "META", base_price: 298.75, volatility: 0.025 },
    Instrument { symbol: "AMZN", base_price: 127.35, volatility: 0.02 },
    Instrument { symbol: "NFLX", base_price: 445.60, volatility: 0.035 },
];

/// Base price used for symbols not in the table. Unknown symbols are not
/// an error anywhere in the service.
pub const FALLBACK_BASE_PRICE: f64 = 100.0;

pub fn base_price(symbol: &str) -> f64 {
    INSTRUMENTS
        .iter()
        .find(|i| i.symbol == symbol)
        .map(|i| i.base_price)
        .unwrap_or(FALLBACK_BASE_PRICE)
}

pub struct PortfolioBaseline {
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

pub const PORTFOLIO: PortfolioBaseline = PortfolioBaseline {
    total_capital: 102_500.0,
    available_capital: 95_000.0,
    total_pnl: 2_500.0,
    unrealized_pnl: 1_200.0,
    realized_pnl: 1_300.0,
    total_return_pct: 2.5,
    positions_count: 5,
    active_positions_count: 3,
    total_trades: 15,
    winning_trades: 9,
    losing_trades: 6,
    win_rate: 60.0,
    avg_win: 400.0,
    avg_loss: 200.0,
    max_drawdown: 5.0,
    sharpe_ratio: 1.2,
};

pub struct SignalBaseline {
    pub signals_processed: u64,
    pub signals_per_minute: f64,
    pub avg_confidence: f64,
    pub avg_urgency: f64,
    pub pattern_strength_avg: f64,
    pub spike_count_avg: f64,
    pub volatility_avg: f64,
}

pub const SIGNALS: SignalBaseline = SignalBaseline {
    signals_processed: 127,
    signals_per_minute: 2.1,
    avg_confidence: 72.0,
    avg_urgency: 58.0,
    pattern_strength_avg: 78.0,
    spike_count_avg: 145.0,
    volatility_avg: 3.2,
};

// The categorical breakdowns are never randomized.
pub const SIGNAL_DISTRIBUTION: SignalDistribution = SignalDistribution {
    buy: 45,
    sell: 32,
    hold: 35,
    close: 15,
};

pub const MARKET_REGIMES: MarketRegimes = MarketRegimes {
    strong_uptrend: 25,
    mild_uptrend: 18,
    consolidation: 40,
    weak_downtrend: 12,
    risk_off: 8,
};
