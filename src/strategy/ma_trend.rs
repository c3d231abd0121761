use super::Strategy;
use crate::indicator::EnrichedCandle;
use crate::model::signal::Signal;

/// Long-term trend following on the EMA-50 / SMA-200 relationship: long
/// while the fast average is above the slow one, out while it is below.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaTrend;

impl Strategy for MaTrend {
    fn name(&self) -> &'static str {
        "Long-term"
    }

    fn evaluate(&self, row: &EnrichedCandle) -> Signal {
        match (row.ema_50, row.sma_200) {
            (Some(ema), Some(sma)) if ema > sma => Signal::Buy {
                price: row.candle.close,
            },
            (Some(ema), Some(sma)) if ema < sma => Signal::Sell {
                price: row.candle.close,
            },
            // Equal averages or a warm-up row: no signal.
            _ => Signal::Hold,
        }
    }
}
