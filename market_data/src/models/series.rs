//! A collection of daily bars for a specific ticker.

use serde::{Deserialize, Serialize};

use crate::models::bar::Bar;

/// Complete daily history for a single ticker, ordered chronologically
/// ascending.
///
/// Grouping the bars with their ticker keeps the data set self-describing
/// as it moves between the provider, the detectors, and the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    /// The ticker this data represents (e.g., "BBRI.JK").
    pub ticker: String,
    /// The collection of daily bars, oldest first.
    pub bars: Vec<Bar>,
}

impl BarSeries {
    /// Number of sessions in the series.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True when the series holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The trailing `n` bars (the whole series when shorter than `n`).
    pub fn trailing(&self, n: usize) -> &[Bar] {
        let start = self.bars.len().saturating_sub(n);
        &self.bars[start..]
    }
}
