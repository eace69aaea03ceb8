use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;

use crate::{
    models::series::BarSeries,
    providers::{SeriesProvider, errors::ProviderError, yahoo::response::ChartResponse},
};

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

// Yahoo rejects requests without a browser-ish user agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) idx-screener/0.1";

/// Daily-bar provider backed by the public Yahoo Finance chart endpoint.
///
/// The endpoint is unauthenticated; IDX tickers use the `.JK` suffix
/// (e.g., "BBRI.JK").
pub struct YahooProvider {
    client: Client,
}

impl YahooProvider {
    /// Creates a new Yahoo provider with a client-level request timeout.
    ///
    /// Callers typically also bound each fetch externally (the screening
    /// orchestrator wraps calls in its own timeout), so `timeout` here is a
    /// backstop against a stalled connection.
    pub fn new(timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SeriesProvider for YahooProvider {
    async fn daily_series(
        &self,
        ticker: &str,
        lookback_days: u32,
    ) -> Result<BarSeries, ProviderError> {
        let period2 = Utc::now().timestamp();
        let period1 = period2 - i64::from(lookback_days) * 86_400;

        let url = format!("{BASE_URL}/{ticker}");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", "1d".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(error_msg));
        }

        let chart = response.json::<ChartResponse>().await?;
        let bars = chart.into_daily_bars()?;

        if bars.is_empty() {
            return Err(ProviderError::NoData(ticker.to_string()));
        }

        Ok(BarSeries {
            ticker: ticker.to_string(),
            bars,
        })
    }
}
