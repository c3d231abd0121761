use serde::{Deserialize, Deserializer};

use crate::error::AppError;
use crate::model::candle::Candle;

/// Deserialize Binance numbers that arrive either string-encoded or plain.
pub fn string_or_number_to_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    match v {
        serde_json::Value::String(s) => s.parse::<f64>().map_err(serde::de::Error::custom),
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("invalid number")),
        _ => Err(serde::de::Error::custom("invalid numeric value")),
    }
}

/// One kline row as returned by GET /api/v3/klines: a fixed 12-element array
/// of open time, OHLCV, close time, quote volume, trade count, taker buy
/// base/quote volumes, and an ignored trailing field.
#[derive(Debug, Deserialize)]
pub struct RawKline(
    pub i64,
    #[serde(deserialize_with = "string_or_number_to_f64")] pub f64,
    #[serde(deserialize_with = "string_or_number_to_f64")] pub f64,
    #[serde(deserialize_with = "string_or_number_to_f64")] pub f64,
    #[serde(deserialize_with = "string_or_number_to_f64")] pub f64,
    #[serde(deserialize_with = "string_or_number_to_f64")] pub f64,
    pub i64,
    #[serde(deserialize_with = "string_or_number_to_f64")] pub f64,
    pub u64,
    #[serde(deserialize_with = "string_or_number_to_f64")] pub f64,
    #[serde(deserialize_with = "string_or_number_to_f64")] pub f64,
    pub serde_json::Value,
);

fn millis_to_datetime(ms: i64) -> Result<chrono::DateTime<chrono::Utc>, AppError> {
    chrono::DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| AppError::Parse(format!("timestamp {} ms is out of range", ms)))
}

impl RawKline {
    pub fn into_candle(self) -> Result<Candle, AppError> {
        let RawKline(
            open_ms,
            open,
            high,
            low,
            close,
            volume,
            close_ms,
            quote_asset_volume,
            trade_count,
            taker_buy_base_volume,
            taker_buy_quote_volume,
            _ignore,
        ) = self;
        Ok(Candle {
            open_time: millis_to_datetime(open_ms)?,
            open,
            high,
            low,
            close,
            volume,
            close_time: millis_to_datetime(close_ms)?,
            quote_asset_volume,
            trade_count,
            taker_buy_base_volume,
            taker_buy_quote_volume,
        })
    }
}
