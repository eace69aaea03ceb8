//! Delivery seam for screening results.
//!
//! The screener core never formats report text; it hands the typed
//! [`ScreenOutcome`] to a [`NotificationSink`] and the sink decides how to
//! render, batch, and deliver it. [`LogSink`] is the bundled
//! implementation: structured tracing events, one per actionable signal.

use async_trait::async_trait;
use tracing::info;

use crate::screen::ScreenOutcome;

/// Receives the partitioned results of one screening run.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver the outcome. Implementations own formatting and batching.
    async fn deliver(&self, outcome: &ScreenOutcome) -> anyhow::Result<()>;
}

/// Sink that reports through the process log.
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn deliver(&self, outcome: &ScreenOutcome) -> anyhow::Result<()> {
        if outcome.is_quiet() {
            info!("no signals this run");
            return Ok(());
        }

        for signal in &outcome.setups {
            info!(
                ticker = %signal.ticker,
                date = %signal.date,
                close = signal.close,
                volume_ratio = %format!("{:.1}", signal.volume_ratio()),
                price_change_pct = %format!("{:+.1}", signal.price_change_pct()),
                "volume spike SETUP"
            );
        }

        for pattern in &outcome.patterns {
            info!(
                ticker = %pattern.ticker,
                date = %pattern.date,
                kind = %pattern.kind,
                price_change_pct = %format!("{:+.1}", pattern.price_change_pct),
                volume_change_pct = %format!("{:+.1}", pattern.volume_change_pct),
                "watchlist pattern"
            );
        }

        info!(
            setups = outcome.setups.len(),
            waits = outcome.waits.len(),
            patterns = outcome.patterns.len(),
            "report delivered"
        );
        Ok(())
    }
}
