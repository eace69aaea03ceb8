//! Provider abstraction for daily OHLCV sources.
//!
//! This module defines the [`SeriesProvider`] trait, a unified interface for
//! fetching daily bar history from any market data vendor. The screener
//! consumes the trait only, so a vendor can be swapped (or mocked in tests)
//! without touching detection code.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn SeriesProvider`) for runtime selection of providers.

pub mod errors;
pub mod yahoo;

use async_trait::async_trait;

use crate::{models::series::BarSeries, providers::errors::ProviderError};

/// A source of daily bar history for a single ticker.
///
/// Implementations must return bars ordered chronologically ascending.
/// Errors are per-ticker: callers are expected to skip the ticker and
/// continue, never to abort a whole screening run.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Fetch daily bars for `ticker` covering roughly the trailing
    /// `lookback_days` calendar days.
    async fn daily_series(
        &self,
        ticker: &str,
        lookback_days: u32,
    ) -> Result<BarSeries, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyProvider;
    struct CannedProvider;

    #[async_trait]
    impl SeriesProvider for EmptyProvider {
        async fn daily_series(
            &self,
            ticker: &str,
            _lookback_days: u32,
        ) -> Result<BarSeries, ProviderError> {
            Err(ProviderError::NoData(ticker.to_string()))
        }
    }

    #[async_trait]
    impl SeriesProvider for CannedProvider {
        async fn daily_series(
            &self,
            ticker: &str,
            _lookback_days: u32,
        ) -> Result<BarSeries, ProviderError> {
            Ok(BarSeries {
                ticker: ticker.to_string(),
                bars: vec![],
            })
        }
    }

    fn get_provider(name: &str) -> Box<dyn SeriesProvider> {
        if name == "canned" {
            Box::new(CannedProvider)
        } else {
            Box::new(EmptyProvider)
        }
    }

    #[tokio::test]
    async fn dynamic_provider_dispatch() {
        let provider = get_provider("canned");
        let series = provider.daily_series("BBRI.JK", 30).await.unwrap();
        assert_eq!(series.ticker, "BBRI.JK");

        let provider = get_provider("empty");
        let err = provider.daily_series("BBRI.JK", 30).await.unwrap_err();
        assert!(matches!(err, ProviderError::NoData(_)));
    }
}
