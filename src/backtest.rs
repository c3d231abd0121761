//! Naive single-position backtest over a signal column.

use crate::error::AppError;
use crate::indicator::EnrichedCandle;
use crate::model::signal::Signal;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PositionState {
    Flat,
    Invested,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BacktestReport {
    pub initial_balance: f64,
    pub final_balance: f64,
    /// Fractional return, e.g. 0.25 for +25%.
    pub return_pct: f64,
}

/// Walk the rows once, going all-in on the first applicable buy signal and
/// all-out on the next applicable sell.
///
/// Signals that do not apply to the current state are dropped, not queued:
/// a buy while invested and a sell while flat are both no-ops. Any position
/// still open after the walk is marked to market at the last close. No fees,
/// slippage or partial sizing.
pub fn run(
    rows: &[EnrichedCandle],
    signals: &[Signal],
    initial_balance: f64,
) -> Result<BacktestReport, AppError> {
    if rows.is_empty() {
        return Err(AppError::EmptyInput);
    }
    assert_eq!(
        rows.len(),
        signals.len(),
        "rows and signals must be the same length"
    );
    assert!(initial_balance > 0.0, "initial balance must be > 0");

    let mut state = PositionState::Flat;
    let mut balance = initial_balance;
    let mut position = 0.0;

    for signal in signals.iter().copied() {
        match (state, signal) {
            (PositionState::Flat, Signal::Buy { price }) if price > f64::EPSILON => {
                position = balance / price;
                balance = 0.0;
                state = PositionState::Invested;
            }
            (PositionState::Invested, Signal::Sell { price }) => {
                balance = position * price;
                position = 0.0;
                state = PositionState::Flat;
            }
            _ => {}
        }
    }

    let last_close = rows[rows.len() - 1].candle.close;
    let final_balance = balance + position * last_close;

    Ok(BacktestReport {
        initial_balance,
        final_balance,
        return_pct: (final_balance - initial_balance) / initial_balance,
    })
}
