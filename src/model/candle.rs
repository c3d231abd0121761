use chrono::{DateTime, Utc};

/// One kline/candlestick row from the market-data API.
///
/// Rows are chronological; indicator warm-ups and the backtest walk both
/// rely on that order.
#[derive(Debug, Clone)]
pub struct Candle {
    pub open_time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub close_time: DateTime<Utc>,
    pub quote_asset_volume: f64,
    pub trade_count: u64,
    pub taker_buy_base_volume: f64,
    pub taker_buy_quote_volume: f64,
}

/// Render the first `rows` candles as a small table for stdout.
pub fn preview(candles: &[Candle], rows: usize) -> String {
    let mut out = format!(
        "{:<18}{:<14}{:<14}{:<14}{:<14}{}\n",
        "open_time", "open", "high", "low", "close", "volume"
    );
    for candle in candles.iter().take(rows) {
        out.push_str(&format!(
            "{:<18}{:<14.2}{:<14.2}{:<14.2}{:<14.2}{:<14.4}\n",
            candle.open_time.format("%Y-%m-%d %H:%M").to_string(),
            candle.open,
            candle.high,
            candle.low,
            candle.close,
            candle.volume,
        ));
    }
    out
}
