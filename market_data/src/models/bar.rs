//! Canonical in-memory representation of one daily trading session (OHLCV).
//!
//! This struct is the standard output of all
//! [`SeriesProvider`](crate::providers::SeriesProvider) implementations,
//! regardless of vendor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily OHLCV bar for one trading session.
///
/// Dates are calendar dates of the exchange session; consumers operate on
/// relative bar indices, so calendar gaps (weekends, holidays, halts) are
/// tolerated and carry no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Session date (exchange-local calendar date).
    pub date: NaiveDate,

    /// Opening price.
    pub open: f64,

    /// Highest price during the session.
    pub high: f64,

    /// Lowest price during the session.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Shares traded during the session.
    pub volume: u64,
}
