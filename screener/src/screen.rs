//! One screening run: fetch, detect, partition.
//!
//! [`run_screening`] is stateless across calls and holds no interior
//! mutability, so the caller may invoke it repeatedly (e.g., once per
//! trading slot) without any reset step. Per-ticker failures are
//! contained: a provider error, timeout, or corrupt series skips that
//! ticker and the run continues.

use std::time::Duration;

use market_data::providers::SeriesProvider;
use tracing::{debug, info, warn};

use crate::{
    detect::{pattern::detect_patterns, spike::detect_spike},
    signals::{SpikeClass, VolumeSpikeSignal, WatchlistPattern},
    universe::Universe,
};

/// Per-run bounds for a screening pass.
#[derive(Debug, Clone)]
pub struct ScreenLimits {
    /// Hard cap on tickers screened per run.
    pub max_tickers: usize,
    /// Calendar days of history requested from the provider.
    pub lookback_days: u32,
    /// Bound on each provider call; a timeout skips the ticker.
    pub provider_timeout: Duration,
}

/// Counters describing what one run actually did.
///
/// All counters are additive for the processed universe; zero signals with
/// zero skips is a perfectly normal quiet run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// Universe size before the capacity cap.
    pub universe_size: usize,
    /// Tickers whose series was fetched and inspected.
    pub screened: usize,
    /// Tickers skipped on provider failure, timeout, or empty series.
    pub skipped: usize,
    /// Tickers dropped by the capacity cap.
    pub truncated: usize,
    /// Watched tickers whose pattern scan hit corrupt bar data.
    pub malformed: usize,
}

/// The partitioned result of one screening run.
#[derive(Debug, Default)]
pub struct ScreenOutcome {
    /// Qualifying spikes classified SETUP.
    pub setups: Vec<VolumeSpikeSignal>,
    /// Qualifying spikes classified WAIT.
    pub waits: Vec<VolumeSpikeSignal>,
    /// Divergence patterns on watched tickers.
    pub patterns: Vec<WatchlistPattern>,
    pub stats: RunStats,
}

impl ScreenOutcome {
    /// True when the run produced no signals at all.
    pub fn is_quiet(&self) -> bool {
        self.setups.is_empty() && self.waits.is_empty() && self.patterns.is_empty()
    }
}

/// Screens every ticker in `universe` (capped to `limits.max_tickers`)
/// against `provider`, partitioning results into SETUP spikes, WAIT
/// spikes, and watchlist patterns.
///
/// The orchestrator performs no formatting; delivery belongs to a
/// [`crate::sink::NotificationSink`].
pub async fn run_screening(
    limits: &ScreenLimits,
    mut universe: Universe,
    provider: &dyn SeriesProvider,
) -> ScreenOutcome {
    let mut outcome = ScreenOutcome::default();
    outcome.stats.universe_size = universe.len();
    outcome.stats.truncated = universe.cap(limits.max_tickers);

    info!(
        tickers = universe.len(),
        truncated = outcome.stats.truncated,
        "screening run started"
    );

    for ticker in &universe.tickers {
        let fetch = tokio::time::timeout(
            limits.provider_timeout,
            provider.daily_series(ticker, limits.lookback_days),
        )
        .await;

        let series = match fetch {
            Ok(Ok(series)) if !series.is_empty() => series,
            Ok(Ok(_)) => {
                warn!(%ticker, "provider returned empty series, skipping");
                outcome.stats.skipped += 1;
                continue;
            }
            Ok(Err(err)) => {
                warn!(%ticker, error = %err, "series fetch failed, skipping");
                outcome.stats.skipped += 1;
                continue;
            }
            Err(_) => {
                warn!(%ticker, "series fetch timed out, skipping");
                outcome.stats.skipped += 1;
                continue;
            }
        };
        outcome.stats.screened += 1;

        if let Some(signal) = detect_spike(&series) {
            debug!(%ticker, class = %signal.classification, date = %signal.date, "volume spike");
            match signal.classification {
                SpikeClass::Setup => outcome.setups.push(signal),
                SpikeClass::Wait => outcome.waits.push(signal),
            }
        }

        if universe.is_watched(ticker) {
            match detect_patterns(&series) {
                Ok(patterns) => outcome.patterns.extend(patterns),
                Err(err) => {
                    warn!(%ticker, error = %err, "corrupt bar data in pattern scan");
                    outcome.stats.malformed += 1;
                }
            }
        }
    }

    info!(
        setups = outcome.setups.len(),
        waits = outcome.waits.len(),
        patterns = outcome.patterns.len(),
        skipped = outcome.stats.skipped,
        "screening run complete"
    );

    outcome
}
