//! Built-in dashboard content
//!
//! The explanations, the five-strategy alpha library, and the canned
//! replication report that the in-memory provider serves.

use quantdeck_core::{
    AlphaResult, AlphaResults, PortfolioPnl, ReplicationResult, Section, Strategy, Verdict,
};

const OBJECTIVE: &str = "The primary objective is not to build a profitable portfolio, but to engineer a scientifically rigorous, event-driven trading system. The system must be capable of managing a diverse portfolio of alphas across multiple assets (Crypto, Equities, FX) and timeframes. The absolute core challenge is **replication**: ensuring that the portfolio-level results from a backtest can be perfectly reproduced in a live-trading simulation using logged market data. This validates the entire system, from data handling to execution logic, removing any chance of look-ahead bias or simulation artifacts.";

const SYSTEM_ARCHITECTURE: &str = "The system must be designed for robustness and scalability. Key components include:
<br/><br/>
1.  **Broker Connectivity Layer:** Abstracted modules for connecting to Binance, Interactive Brokers, and Zerodha. Each module handles authentication, data subscription, and order execution specific to its API.
2.  **Event-Driven Core:** A central event queue that processes market data, signals, order fills, and risk updates sequentially. This ensures chronological integrity.
3.  **Data Handler:** Requests, stores, and synchronizes data across multiple assets and timeframes (1-minute bars, 1-hour bars, tick data) behind a unified interface for the strategies.
4.  **Portfolio Manager:** Tracks positions, calculates P&L, and manages overall portfolio risk. It aggregates positions from all individual alphas.
5.  **Execution Handler:** Translates signals from alphas into actual orders, accounting for slippage and transaction costs.
6.  **Logging & Monitoring:** Comprehensive logging of all events is critical for the replication test.";

const RIGOROUS_TESTING: &str = "Rigorous testing is performed at both the individual alpha and portfolio levels to ensure robustness and prevent overfitting.
<br/><br/>
-   **Backtesting:** Historical data is used to simulate strategy performance. A full tear-sheet report provides metrics like Sharpe Ratio, Sortino Ratio and Max Drawdown. An alpha correlation matrix is generated to ensure diversification.
-   **Hyper-Parameter Tuning (HPT):** Key parameters of each alpha (lookback periods, z-score thresholds) are systematically optimized to find the best performing configurations.
-   **Walk-Forward Optimization (WFO):** The system is optimized on an in-sample segment and tested on the following unseen out-of-sample segment, rolling forward through time. Comparing in-sample and out-of-sample equity curves shows whether a strategy adapts to new market conditions.";

const FINAL_REPORT: &str = "The final report consolidates the evidence gathered across every stage.
<br/><br/>
1.  **Architecture Summary:** How the event-driven core, broker connectivity layer and portfolio manager fit together, and which design decisions keep the system deterministic.
2.  **Alpha Library:** The rationale, parameters and standalone backtest metrics for each of the 5 alphas.
3.  **Robustness Evidence:** Hyper-parameter tuning results, walk-forward equity curves and the alpha correlation matrix.
4.  **Replication Verdict:** The sandbox-vs-replay comparison at portfolio and alpha level. Every **FAIL** is accompanied by a root-cause analysis and the fix applied.
<br/><br/>
A system is only considered production-ready once the replication test passes at the portfolio level and every remaining mismatch is explained.";

/// Explanation text for a text-shaped section.
///
/// The alpha library and the replication test are served as structured
/// content and have none.
pub fn explanation(section: Section) -> Option<&'static str> {
    match section {
        Section::Objective => Some(OBJECTIVE),
        Section::SystemArchitecture => Some(SYSTEM_ARCHITECTURE),
        Section::RigorousTesting => Some(RIGOROUS_TESTING),
        Section::FinalReport => Some(FINAL_REPORT),
        Section::AlphaLibrary | Section::ReplicationTest => None,
    }
}

/// The reference alpha library, in display order
pub fn strategy_library() -> Vec<Strategy> {
    vec![
        Strategy::new(
            "Alpha 1: Pairs Trading Mean-Reversion",
            "Identifies two highly correlated assets (e.g. BTC and ETH) and tracks a rolling z-score of the spread between their prices. When the z-score crosses a threshold (+2 or -2) it assumes the spread will revert to the mean and enters a market-neutral position: short the outperformer, long the underperformer.",
        ),
        Strategy::new(
            "Alpha 2: Breakout Momentum",
            "Operates on intraday bars (e.g. 15-minute). It tracks a Donchian Channel, the highest high and lowest low over a lookback period. A break above the upper channel opens a long, a break below the lower channel opens a short, and a trailing stop-loss manages risk.",
        ),
        Strategy::new(
            "Alpha 3: Multi-Timeframe (MTF) Trend",
            "Confirms trend direction on a higher timeframe (e.g. 4-hour) with a moving average crossover, then looks for entries on a lower timeframe (e.g. 5-minute) in the direction of that trend. If the 4H trend is bullish it only takes long entries on 5-minute dips.",
        ),
        Strategy::new(
            "Alpha 4: Cross-Asset Correlation",
            "Exploits short-term lead-lag effects between asset classes. It monitors a risk-on/risk-off indicator such as the VIX or DXY; a sharp move in the indicator can predict a subsequent move in a correlated asset like the S&P 500 or a specific FX pair.",
        ),
        Strategy::new(
            "Alpha 5: Order Book Imbalance",
            "A high-frequency alpha on Level 2 order book data. It computes the Volume Order Book Imbalance (VOBI) by comparing weighted bid and ask volume at the top levels of the book. A significant imbalance signals buying or selling pressure, and the strategy places a short-term limit order anticipating a micro-price move.",
        ),
    ]
}

/// Canned replication report served when no artifact is configured
pub fn mock_replication_result() -> ReplicationResult {
    let alpha = |trades, pnl, verdict, analysis: &str| AlphaResult {
        trades,
        pnl,
        verdict,
        analysis: analysis.to_string(),
    };

    let alphas: AlphaResults = vec![
        (
            "alpha_1_pairs",
            alpha(
                15,
                102.50,
                Verdict::Pass,
                "Perfect match. Event timing and fill prices were identical.",
            ),
        ),
        ("alpha_2_breakout", alpha(8, -30.10, Verdict::Pass, "Perfect match.")),
        ("alpha_3_mtf", alpha(12, 210.40, Verdict::Pass, "Perfect match.")),
        ("alpha_4_multi_asset", alpha(3, 301.00, Verdict::Pass, "Perfect match.")),
        (
            "alpha_5_orderbook",
            alpha(
                55,
                -11.50,
                Verdict::Fail,
                "Mismatch in 2 trades due to L2 book update latency difference between sandbox and backtest simulation. The replay log had a 5ms delayed tick, causing a signal to fire one event later.",
            ),
        ),
    ]
    .into_iter()
    .collect();

    ReplicationResult {
        portfolio_pnl: PortfolioPnl {
            sandbox_pnl: 572.30,
            backtest_pnl: 572.30,
            pnl_match: Verdict::Pass,
        },
        alphas,
    }
}
