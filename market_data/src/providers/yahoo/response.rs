//! Serde mapping for the Yahoo `v8/finance/chart` response.
//!
//! The chart payload is column-oriented: one array of unix timestamps plus
//! parallel arrays of open/high/low/close/volume, any entry of which may be
//! `null` (halted or zero-print sessions). Rows with any `null` column are
//! dropped during conversion rather than invented.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Asia::Jakarta;
use serde::Deserialize;

use crate::{models::bar::Bar, providers::errors::ProviderError};

#[derive(Deserialize, Debug)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Deserialize, Debug)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Deserialize, Debug)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    pub quote: Vec<Quote>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

/// Session date for a bar-open timestamp, in exchange-local (WIB) terms.
fn session_date(unix_secs: i64) -> Option<NaiveDate> {
    let utc = DateTime::from_timestamp(unix_secs, 0)?;
    Some(utc.with_timezone(&Jakarta).date_naive())
}

impl ChartResponse {
    /// Flatten the column-oriented chart payload into chronological bars.
    ///
    /// Errors when the vendor reports an error object or the payload has no
    /// result/quote block at all; an empty-but-well-formed payload yields an
    /// empty vector, which the provider maps to `NoData`.
    pub fn into_daily_bars(self) -> Result<Vec<Bar>, ProviderError> {
        if let Some(err) = self.chart.error {
            return Err(ProviderError::Api(format!("{}: {}", err.code, err.description)));
        }

        let result = self
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| ProviderError::Malformed("chart payload has no result".into()))?;

        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Malformed("chart payload has no quote block".into()))?;

        let mut bars = Vec::with_capacity(result.timestamp.len());
        for (i, ts) in result.timestamp.iter().enumerate() {
            let row = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
                quote.volume.get(i).copied().flatten(),
            );
            let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = row else {
                continue;
            };
            let Some(date) = session_date(*ts) else {
                continue;
            };
            bars.push(Bar {
                date,
                open,
                high,
                low,
                close,
                volume,
            });
        }

        Ok(bars)
    }
}
