#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;
use market_data::{
    models::{bar::Bar, series::BarSeries},
    providers::{SeriesProvider, errors::ProviderError},
};

/// A bar `day` sessions after 2025-07-01 with equal OHLC at `close`.
pub fn bar(day: u32, close: f64, volume: u64) -> Bar {
    Bar {
        date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap() + chrono::Days::new(day as u64),
        open: close,
        high: close,
        low: close,
        close,
        volume,
    }
}

pub fn series(ticker: &str, bars: Vec<Bar>) -> BarSeries {
    BarSeries {
        ticker: ticker.to_string(),
        bars,
    }
}

/// `n` quiet sessions: flat close 100.0, volume 1_000.
pub fn flat_series(ticker: &str, n: usize) -> BarSeries {
    series(ticker, (0..n as u32).map(|d| bar(d, 100.0, 1_000)).collect())
}

/// In-memory provider for orchestrator tests.
///
/// Per-ticker canned series, a set of tickers that always fail, and an
/// optional fallback series for every other ticker.
#[derive(Default)]
pub struct MockProvider {
    canned: HashMap<String, BarSeries>,
    failing: HashSet<String>,
    fallback: Option<BarSeries>,
}

impl MockProvider {
    pub fn with_series(mut self, ticker: &str, s: BarSeries) -> Self {
        self.canned.insert(ticker.to_string(), s);
        self
    }

    pub fn with_failure(mut self, ticker: &str) -> Self {
        self.failing.insert(ticker.to_string());
        self
    }

    pub fn with_fallback(mut self, s: BarSeries) -> Self {
        self.fallback = Some(s);
        self
    }
}

#[async_trait]
impl SeriesProvider for MockProvider {
    async fn daily_series(
        &self,
        ticker: &str,
        _lookback_days: u32,
    ) -> Result<BarSeries, ProviderError> {
        if self.failing.contains(ticker) {
            return Err(ProviderError::Api(format!("canned failure for {ticker}")));
        }
        let template = self
            .canned
            .get(ticker)
            .or(self.fallback.as_ref())
            .ok_or_else(|| ProviderError::NoData(ticker.to_string()))?;
        Ok(BarSeries {
            ticker: ticker.to_string(),
            bars: template.bars.clone(),
        })
    }
}
