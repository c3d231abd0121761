pub mod ma_trend;
pub mod rsi_reversion;

use crate::indicator::EnrichedCandle;
use crate::model::signal::Signal;

/// A signal policy: a pure per-row mapping from enriched candles to signals.
pub trait Strategy {
    fn name(&self) -> &'static str;

    fn evaluate(&self, row: &EnrichedCandle) -> Signal;
}

/// Produce one signal per row.
///
/// Strategies never mutate the table, so several strategies can be evaluated
/// over the same rows independently.
pub fn signals(strategy: &dyn Strategy, rows: &[EnrichedCandle]) -> Vec<Signal> {
    rows.iter().map(|row| strategy.evaluate(row)).collect()
}
