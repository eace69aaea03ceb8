use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use market_data::providers::yahoo::YahooProvider;
use screener::{
    config::{ScreenerConfig, load_config_path},
    screen::run_screening,
    sink::{LogSink, NotificationSink},
    slots, state,
    universe::{Universe, load_ticker_file, load_watchlist_store},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "IDX volume screener")]
struct Cli {
    /// Path to the config file (screener.toml); defaults apply when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Run immediately, bypassing the trading-slot gate
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => load_config_path(path)?,
        None => ScreenerConfig::default(),
    };
    cfg.apply_env_overrides()?;

    let mut run_state = state::RunState::load(&cfg.state_file)?;
    let slot_id = if cli.force {
        let id = format!("force_{}", chrono::Utc::now().timestamp());
        info!(slot = %id, "forced run");
        id
    } else {
        let Some((slot_id, slot_name)) = slots::current_slot(slots::wib_now()) else {
            info!("outside trading slots, exiting");
            return Ok(());
        };
        if run_state.already_ran(&slot_id) {
            info!(slot = %slot_name, "already ran for this slot, exiting");
            return Ok(());
        }
        info!(slot = %slot_name, id = %slot_id, "running for slot");
        slot_id
    };

    let watchlist = load_watchlist_store(&cfg.watchlist_file)?;
    let index = load_ticker_file(&cfg.index_file)?;
    let manual = load_ticker_file(&cfg.screener_file)?;
    info!(
        watchlist = watchlist.len(),
        index = index.len(),
        manual = manual.len(),
        "universe sources loaded"
    );
    let universe = Universe::build(watchlist, index, manual);

    let provider = YahooProvider::new(Duration::from_secs(cfg.provider_timeout_secs))?;
    let outcome = run_screening(&cfg.limits(), universe, &provider).await;

    LogSink.deliver(&outcome).await?;

    run_state.mark_ran(slot_id);
    run_state.save(&cfg.state_file)?;

    Ok(())
}
