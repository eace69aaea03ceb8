//! Screener configuration: parsing, defaults, and validation.
//!
//! Configuration is a TOML-backed value loaded once at startup and passed
//! explicitly into the orchestrator and provider; nothing here is ambient
//! process state.
//!
//! Entrypoints:
//! - Parse + validate from a TOML string: [`load_config_str`]
//! - Parse + validate from a file path: [`load_config_path`]
//! - Environment overrides (e.g. `MAX_TICKERS_PER_RUN`):
//!   [`ScreenerConfig::apply_env_overrides`]

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, bail};
use serde::Deserialize;
use shared_utils::env::get_parsed_env_var;
use toml::from_str;
use tracing::info;

use crate::screen::ScreenLimits;

/// Environment variable overriding [`ScreenerConfig::max_tickers_per_run`].
pub const MAX_TICKERS_ENV: &str = "MAX_TICKERS_PER_RUN";

/// Process-wide read-only screener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ScreenerConfig {
    /// Hard cap on tickers screened per run.
    pub max_tickers_per_run: usize,
    /// Calendar days of daily history requested per ticker. Needs to cover
    /// at least the detector's 21 trailing sessions.
    pub lookback_days: u32,
    /// Bound on each provider call, in seconds.
    pub provider_timeout_secs: u64,
    /// JSON watchlist store (chat id -> ticker list).
    pub watchlist_file: PathBuf,
    /// Index-constituent ticker file.
    pub index_file: PathBuf,
    /// Manual screener ticker file.
    pub screener_file: PathBuf,
    /// Run-state file for trading-slot deduplication.
    pub state_file: PathBuf,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            max_tickers_per_run: 120,
            lookback_days: 31,
            provider_timeout_secs: 8,
            watchlist_file: PathBuf::from("/opt/idx_screener/watchlist.json"),
            index_file: PathBuf::from("/opt/idx_screener/ihsg_tickers.txt"),
            screener_file: PathBuf::from("/opt/idx_screener/screener_tickers.txt"),
            state_file: PathBuf::from("/opt/idx_screener/state.json"),
        }
    }
}

impl ScreenerConfig {
    /// The per-run bounds handed to the orchestrator.
    pub fn limits(&self) -> ScreenLimits {
        ScreenLimits {
            max_tickers: self.max_tickers_per_run,
            lookback_days: self.lookback_days,
            provider_timeout: Duration::from_secs(self.provider_timeout_secs),
        }
    }

    /// Applies environment overrides on top of the loaded file.
    ///
    /// A set-but-unparseable value is an error; an unset variable leaves
    /// the configured value untouched.
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if let Some(max) = get_parsed_env_var::<usize>(MAX_TICKERS_ENV)
            .context("invalid environment override")?
        {
            info!(max, "max tickers per run overridden from environment");
            self.max_tickers_per_run = max;
        }
        Ok(())
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.max_tickers_per_run == 0 {
            bail!("max_tickers_per_run must be at least 1");
        }
        if self.provider_timeout_secs == 0 {
            bail!("provider_timeout_secs must be at least 1");
        }
        // 21 trading sessions span roughly 30 calendar days.
        if self.lookback_days < 30 {
            bail!(
                "lookback_days = {} cannot cover the detector's 21-session window",
                self.lookback_days
            );
        }
        Ok(())
    }
}

/// Parse and validate a config from a TOML string.
pub fn load_config_str(toml_str: &str) -> anyhow::Result<ScreenerConfig> {
    let cfg: ScreenerConfig = from_str(toml_str).context("failed to parse screener TOML")?;
    cfg.validate()?;
    Ok(cfg)
}

/// Read a config TOML file from disk, parse, and validate it.
pub fn load_config_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<ScreenerConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read config file {}", path.as_ref().display()))?;
    load_config_str(&text)
}
