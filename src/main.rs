use std::time::Duration;

use anyhow::{ensure, Context, Result};
use chrono::DateTime;
use clap::{Parser, ValueEnum};

use quant_backtest::backtest;
use quant_backtest::binance::interval::KlineInterval;
use quant_backtest::binance::rest::{BinanceRestClient, DEFAULT_KLINE_LIMIT};
use quant_backtest::config::Config;
use quant_backtest::indicator;
use quant_backtest::model::candle;
use quant_backtest::model::signal::Signal;
use quant_backtest::strategy::ma_trend::MaTrend;
use quant_backtest::strategy::rsi_reversion::RsiReversion;
use quant_backtest::strategy::{self, Strategy};

const PREVIEW_ROWS: usize = 5;

#[derive(Parser)]
#[command(name = "quant-backtest", version)]
#[command(about = "Fetch Binance klines, enrich them with indicators, and backtest two simple signal strategies")]
struct Cli {
    /// Trading pair, e.g. BTCUSDT.
    #[arg(long, default_value = "BTCUSDT")]
    symbol: String,

    /// Kline interval (1m, 3m, 5m, 15m, 30m, 1h, 2h, 4h, 6h, 8h, 12h, 1d, 3d, 1w, 1M).
    #[arg(long, default_value = "1h")]
    interval: String,

    /// Maximum number of klines to fetch.
    #[arg(long, default_value_t = DEFAULT_KLINE_LIMIT)]
    limit: usize,

    /// Range start as an RFC 3339 timestamp, e.g. 2024-01-01T00:00:00Z.
    #[arg(long, value_parser = parse_utc_millis)]
    start: Option<i64>,

    /// Range end as an RFC 3339 timestamp.
    #[arg(long, value_parser = parse_utc_millis)]
    end: Option<i64>,

    /// Strategy to evaluate.
    #[arg(long, value_enum, default_value_t = StrategyChoice::Both)]
    strategy: StrategyChoice,

    /// Starting balance; overrides [backtest].initial_balance from the config.
    #[arg(long)]
    initial_balance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum StrategyChoice {
    Short,
    Long,
    Both,
}

fn parse_utc_millis(s: &str) -> Result<i64, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.timestamp_millis())
        .map_err(|e| format!("'{}' is not an RFC 3339 timestamp: {}", s, e))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let interval = KlineInterval::parse(&cli.interval)?;
    let initial_balance = cli
        .initial_balance
        .unwrap_or(config.backtest.initial_balance);
    ensure!(
        initial_balance > 0.0,
        "initial balance must be positive (got {})",
        initial_balance
    );

    let client = BinanceRestClient::new(
        &config.binance.rest_base_url,
        Duration::from_secs(config.binance.request_timeout_secs),
    )?;
    let candles = client
        .get_klines(&cli.symbol, interval, cli.start, cli.end, cli.limit)
        .await?;

    println!(
        "Fetched {} klines for {} @ {}:",
        candles.len(),
        cli.symbol.trim().to_ascii_uppercase(),
        interval
    );
    print!("{}", candle::preview(&candles, PREVIEW_ROWS));
    println!();

    let rows = indicator::enrich(candles);

    let strategies: Vec<Box<dyn Strategy>> = match cli.strategy {
        StrategyChoice::Short => vec![Box::new(RsiReversion::default())],
        StrategyChoice::Long => vec![Box::new(MaTrend)],
        StrategyChoice::Both => vec![Box::new(RsiReversion::default()), Box::new(MaTrend)],
    };

    for strat in &strategies {
        let signals = strategy::signals(strat.as_ref(), &rows);
        let active = signals
            .iter()
            .filter(|signal| !matches!(signal, Signal::Hold))
            .count();
        tracing::debug!(strategy = strat.name(), active_signals = active, "Running backtest");

        let report = backtest::run(&rows, &signals, initial_balance)?;
        println!(
            "{} strategy final balance: ${:.2}, return: {:.2}%",
            strat.name(),
            report.final_balance,
            report.return_pct * 100.0
        );
    }

    Ok(())
}
