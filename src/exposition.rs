// src/exposition.rs
//! Prometheus text exposition for the portfolio and signal snapshots.
//!
//! Each metric is one `# HELP` / `# TYPE` / sample block; the two
//! categorical metrics emit one labeled sample per category. Block order
//! is fixed so consecutive scrapes diff cleanly.

use std::fmt::Write;

use crate::models::{PortfolioSnapshot, SignalSnapshot};

/// Content type Prometheus scrapers expect.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4";

fn metric(out: &mut String, name: &str, help: &str, kind: &str, value: f64) {
    let _ = writeln!(out, "# HELP {} {}", name, help);
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
    let _ = writeln!(out, "{} {}", name, value);
    out.push('\n');
}

fn labeled_gauge(out: &mut String, name: &str, help: &str, label: &str, samples: &[(&str, u64)]) {
    let _ = writeln!(out, "# HELP {} {}", name, help);
    let _ = writeln!(out, "# TYPE {} gauge", name);
    for (value, count) in samples {
        let _ = writeln!(out, "{}{{{}=\"{}\"}} {}", name, label, value, count);
    }
    out.push('\n');
}

pub fn render(portfolio: &PortfolioSnapshot, signals: &SignalSnapshot) -> String {
    let mut out = String::new();

    metric(
        &mut out,
        "demo_portfolio_capital_total",
        "Total portfolio capital in USD",
        "gauge",
        portfolio.total_capital,
    );
    metric(
        &mut out,
        "demo_portfolio_pnl_total",
        "Total profit and loss in USD",
        "gauge",
        portfolio.total_pnl,
    );
    metric(
        &mut out,
        "demo_portfolio_return_pct",
        "Portfolio return percentage",
        "gauge",
        portfolio.total_return_pct,
    );
    metric(
        &mut out,
        "demo_portfolio_win_rate",
        "Win rate as percentage",
        "gauge",
        portfolio.win_rate,
    );
    metric(
        &mut out,
        "demo_portfolio_positions_total",
        "Number of total positions",
        "gauge",
        f64::from(portfolio.positions_count),
    );
    metric(
        &mut out,
        "demo_portfolio_positions_active",
        "Number of active positions",
        "gauge",
        f64::from(portfolio.active_positions_count),
    );
    metric(
        &mut out,
        "demo_portfolio_sharpe_ratio",
        "Sharpe ratio of the portfolio",
        "gauge",
        portfolio.sharpe_ratio,
    );
    metric(
        &mut out,
        "demo_signals_processed_total",
        "Total number of signals processed",
        "counter",
        signals.signals_processed as f64,
    );
    metric(
        &mut out,
        "demo_signals_confidence_avg",
        "Average confidence of signals (0-100)",
        "gauge",
        signals.avg_confidence,
    );
    metric(
        &mut out,
        "demo_signals_urgency_avg",
        "Average urgency of signals (0-100)",
        "gauge",
        signals.avg_urgency,
    );
    metric(
        &mut out,
        "demo_signals_pattern_strength_avg",
        "Average pattern strength (0-100)",
        "gauge",
        signals.pattern_strength_avg,
    );
    metric(
        &mut out,
        "demo_signals_spike_count_avg",
        "Average spike count in signals",
        "gauge",
        signals.spike_count_avg,
    );
    metric(
        &mut out,
        "demo_signals_volatility_avg",
        "Average volatility percentage",
        "gauge",
        signals.volatility_avg,
    );
    metric(
        &mut out,
        "demo_signals_per_minute",
        "Rate of signal processing per minute",
        "gauge",
        signals.signals_per_minute,
    );

    let d = &signals.signal_distribution;
    labeled_gauge(
        &mut out,
        "demo_signal_distribution",
        "Signal distribution by type",
        "type",
        &[
            ("buy", d.buy),
            ("sell", d.sell),
            ("hold", d.hold),
            ("close", d.close),
        ],
    );

    let r = &signals.market_regimes;
    labeled_gauge(
        &mut out,
        "demo_market_regime",
        "Market regime detection",
        "regime",
        &[
            ("strong_uptrend", r.strong_uptrend),
            ("mild_uptrend", r.mild_uptrend),
            ("consolidation", r.consolidation),
            ("weak_downtrend", r.weak_downtrend),
            ("risk_off", r.risk_off),
        ],
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{portfolio_snapshot, signal_snapshot, Jitter};
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fixed_snapshots() -> (PortfolioSnapshot, SignalSnapshot) {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        (
            portfolio_snapshot(&mut rng, now, Jitter::Constant),
            signal_snapshot(&mut rng, now, Jitter::Constant),
        )
    }

    #[test]
    fn output_is_byte_stable_for_fixed_input() {
        let (p, s) = fixed_snapshots();
        assert_eq!(render(&p, &s), render(&p, &s));
    }

    #[test]
    fn blocks_appear_in_documented_order() {
        let (p, s) = fixed_snapshots();
        let text = render(&p, &s);
        let names = [
            "demo_portfolio_capital_total",
            "demo_portfolio_pnl_total",
            "demo_portfolio_return_pct",
            "demo_portfolio_win_rate",
            "demo_portfolio_positions_total",
            "demo_portfolio_positions_active",
            "demo_portfolio_sharpe_ratio",
            "demo_signals_processed_total",
            "demo_signals_confidence_avg",
            "demo_signals_urgency_avg",
            "demo_signals_pattern_strength_avg",
            "demo_signals_spike_count_avg",
            "demo_signals_volatility_avg",
            "demo_signals_per_minute",
            "demo_signal_distribution",
            "demo_market_regime",
        ];
        let mut last = 0;
        for name in names {
            let pos = text
                .find(&format!("# HELP {} ", name))
                .unwrap_or_else(|| panic!("missing HELP for {}", name));
            assert!(pos >= last, "{} out of order", name);
            last = pos;
            assert!(text.contains(&format!("# TYPE {} ", name)));
        }
    }

    #[test]
    fn gauge_blocks_carry_help_type_and_sample_lines() {
        let (p, s) = fixed_snapshots();
        let text = render(&p, &s);
        assert!(text.contains("# HELP demo_portfolio_capital_total Total portfolio capital in USD\n"));
        assert!(text.contains("# TYPE demo_portfolio_capital_total gauge\n"));
        assert!(text.contains("\ndemo_portfolio_capital_total 102500\n"));
        assert!(text.contains("# TYPE demo_signals_processed_total counter\n"));
        assert!(text.contains("\ndemo_signals_processed_total 127\n"));
        assert!(text.contains("\ndemo_portfolio_positions_total 5\n"));
    }

    #[test]
    fn labeled_metrics_emit_every_category() {
        let (p, s) = fixed_snapshots();
        let text = render(&p, &s);
        assert!(text.contains("demo_signal_distribution{type=\"buy\"} 45\n"));
        assert!(text.contains("demo_signal_distribution{type=\"sell\"} 32\n"));
        assert!(text.contains("demo_signal_distribution{type=\"hold\"} 35\n"));
        assert!(text.contains("demo_signal_distribution{type=\"close\"} 15\n"));
        assert!(text.contains("demo_market_regime{regime=\"strong_uptrend\"} 25\n"));
        assert!(text.contains("demo_market_regime{regime=\"mild_uptrend\"} 18\n"));
        assert!(text.contains("demo_market_regime{regime=\"consolidation\"} 40\n"));
        assert!(text.contains("demo_market_regime{regime=\"weak_downtrend\"} 12\n"));
        assert!(text.contains("demo_market_regime{regime=\"risk_off\"} 8\n"));
    }
}
