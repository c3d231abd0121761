use std::time::Duration;

use crate::binance::interval::KlineInterval;
use crate::binance::types::RawKline;
use crate::error::AppError;
use crate::model::candle::Candle;

pub const DEFAULT_KLINE_LIMIT: usize = 500;

pub struct BinanceRestClient {
    http: reqwest::Client,
    base_url: String,
}

impl BinanceRestClient {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch historical klines for `symbol`, oldest first.
    ///
    /// `start_time`/`end_time` are epoch milliseconds and bound the range on
    /// the server side; `limit` caps the row count (the API default is 500).
    pub async fn get_klines(
        &self,
        symbol: &str,
        interval: KlineInterval,
        start_time: Option<i64>,
        end_time: Option<i64>,
        limit: usize,
    ) -> Result<Vec<Candle>, AppError> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let symbol = symbol.trim().to_ascii_uppercase();

        let mut params: Vec<(&str, String)> = vec![
            ("symbol", symbol.clone()),
            ("interval", interval.as_str().to_string()),
            ("limit", limit.to_string()),
        ];
        if let Some(start) = start_time {
            params.push(("startTime", start.to_string()));
        }
        if let Some(end) = end_time {
            params.push(("endTime", end.to_string()));
        }

        tracing::debug!(%symbol, interval = %interval, limit, "Requesting klines");

        let body = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let rows: Vec<RawKline> = serde_json::from_str(&body)?;
        let mut candles = Vec::with_capacity(rows.len());
        for row in rows {
            candles.push(row.into_candle()?);
        }

        tracing::info!(count = candles.len(), %symbol, "Fetched klines");
        Ok(candles)
    }
}
