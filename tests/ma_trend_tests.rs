use chrono::{TimeZone, Utc};

use quant_backtest::indicator::EnrichedCandle;
use quant_backtest::model::candle::Candle;
use quant_backtest::model::signal::Signal;
use quant_backtest::strategy::ma_trend::MaTrend;
use quant_backtest::strategy::Strategy;

fn row(close: f64, ema_50: Option<f64>, sma_200: Option<f64>) -> EnrichedCandle {
    let open_time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    EnrichedCandle {
        candle: Candle {
            open_time,
            open: close,
            high: close,
            low: close,
            close,
            volume: 1.0,
            close_time: open_time + chrono::Duration::minutes(1),
            quote_asset_volume: close,
            trade_count: 1,
            taker_buy_base_volume: 0.5,
            taker_buy_quote_volume: close / 2.0,
        },
        rsi: None,
        ema_50,
        sma_200,
        macd: None,
        macd_signal: None,
        macd_hist: None,
        bb_upper: None,
        bb_middle: None,
        bb_lower: None,
    }
}

#[test]
fn fast_above_slow_buys_at_close() {
    let signal = MaTrend.evaluate(&row(50.0, Some(101.0), Some(100.0)));
    assert_eq!(signal, Signal::Buy { price: 50.0 });
}

#[test]
fn fast_below_slow_sells_at_close() {
    let signal = MaTrend.evaluate(&row(50.0, Some(99.0), Some(100.0)));
    assert_eq!(signal, Signal::Sell { price: 50.0 });
}

#[test]
fn equal_averages_hold() {
    let signal = MaTrend.evaluate(&row(50.0, Some(100.0), Some(100.0)));
    assert_eq!(signal, Signal::Hold);
}

#[test]
fn warm_up_rows_hold() {
    assert_eq!(MaTrend.evaluate(&row(50.0, None, None)), Signal::Hold);
    assert_eq!(
        MaTrend.evaluate(&row(50.0, Some(101.0), None)),
        Signal::Hold
    );
    assert_eq!(
        MaTrend.evaluate(&row(50.0, None, Some(100.0))),
        Signal::Hold
    );
}
