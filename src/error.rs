use thiserror::Error;

use crate::binance::interval::VALID_INTERVALS;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid interval '{value}': valid intervals are {}", VALID_INTERVALS.join(", "))]
    InvalidInterval { value: String },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("kline parse error: {0}")]
    Parse(String),

    #[error("backtest requires at least one candle")]
    EmptyInput,
}
