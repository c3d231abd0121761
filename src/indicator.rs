//! Close-price indicator enrichment on top of the `ta` crate.

use ta::indicators::{
    BollingerBands, ExponentialMovingAverage, MovingAverageConvergenceDivergence,
    RelativeStrengthIndex, SimpleMovingAverage,
};
use ta::Next;

use crate::model::candle::Candle;

pub const RSI_PERIOD: usize = 14;
pub const EMA_PERIOD: usize = 50;
pub const SMA_PERIOD: usize = 200;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
pub const BB_PERIOD: usize = 20;
pub const BB_STD_DEV: f64 = 2.0;

/// A candle plus its indicator values. `None` while the indicator is still
/// inside its warm-up window.
#[derive(Debug, Clone)]
pub struct EnrichedCandle {
    pub candle: Candle,
    pub rsi: Option<f64>,
    pub ema_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_hist: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
}

/// Attach RSI-14, EMA-50, SMA-200, MACD(12,26,9) and Bollinger(20, 2.0)
/// columns computed from the close price.
///
/// The `ta` indicators emit values from the first input, so each column is
/// masked until its conventional warm-up has passed (RSI needs period + 1
/// inputs; the MACD signal line needs the slow period plus the signal
/// period).
pub fn enrich(candles: Vec<Candle>) -> Vec<EnrichedCandle> {
    let mut rsi = RelativeStrengthIndex::new(RSI_PERIOD).expect("RSI period");
    let mut ema = ExponentialMovingAverage::new(EMA_PERIOD).expect("EMA period");
    let mut sma = SimpleMovingAverage::new(SMA_PERIOD).expect("SMA period");
    let mut macd = MovingAverageConvergenceDivergence::new(MACD_FAST, MACD_SLOW, MACD_SIGNAL)
        .expect("MACD periods");
    let mut bb = BollingerBands::new(BB_PERIOD, BB_STD_DEV).expect("Bollinger period");

    candles
        .into_iter()
        .enumerate()
        .map(|(i, candle)| {
            let count = i + 1;
            let rsi_value = rsi.next(candle.close);
            let ema_value = ema.next(candle.close);
            let sma_value = sma.next(candle.close);
            let macd_out = macd.next(candle.close);
            let bb_out = bb.next(candle.close);
            EnrichedCandle {
                rsi: (count > RSI_PERIOD).then_some(rsi_value),
                ema_50: (count >= EMA_PERIOD).then_some(ema_value),
                sma_200: (count >= SMA_PERIOD).then_some(sma_value),
                macd: (count >= MACD_SLOW).then_some(macd_out.macd),
                macd_signal: (count >= MACD_SLOW + MACD_SIGNAL - 1).then_some(macd_out.signal),
                macd_hist: (count >= MACD_SLOW + MACD_SIGNAL - 1).then_some(macd_out.histogram),
                bb_upper: (count >= BB_PERIOD).then_some(bb_out.upper),
                bb_middle: (count >= BB_PERIOD).then_some(bb_out.average),
                bb_lower: (count >= BB_PERIOD).then_some(bb_out.lower),
                candle,
            }
        })
        .collect()
}
