//! Price/volume divergence detection for watched tickers.

use market_data::models::series::BarSeries;

use crate::{
    detect::DataError,
    signals::{PatternKind, WatchlistPattern},
};

/// Trailing window the detector operates on.
const WINDOW: usize = 10;

/// Only the most recent emitted patterns are reported.
const MAX_PATTERNS: usize = 3;

/// Minimum day-over-day price move, in percent.
const PRICE_PCT: f64 = 1.0;

/// Minimum day-over-day volume move, in percent.
const VOLUME_PCT: f64 = 30.0;

/// Scans the trailing 10 sessions for price/volume divergences.
///
/// Walks consecutive bar pairs forward in time and emits
/// [`PatternKind::PriceUpVolumeDown`] for a pair moving at least +1% on
/// price with at least −30% on volume, and
/// [`PatternKind::PriceDownVolumeUp`] for the mirror case. The two
/// conditions are mutually exclusive, so a pair emits at most once.
///
/// Only the last three emitted patterns are returned, oldest of the three
/// first; earlier matches inside the window are dropped. Series shorter
/// than 2 bars yield an empty result.
///
/// A zero previous volume or a non-positive previous close is corrupt
/// upstream data and surfaces as [`DataError`] rather than an infinite
/// percentage.
pub fn detect_patterns(series: &BarSeries) -> Result<Vec<WatchlistPattern>, DataError> {
    if series.len() < 2 {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for pair in series.trailing(WINDOW).windows(2) {
        let (prev, current) = (&pair[0], &pair[1]);

        if prev.close <= 0.0 {
            return Err(DataError::NonPositiveClose {
                ticker: series.ticker.clone(),
                date: prev.date,
                close: prev.close,
            });
        }
        if prev.volume == 0 {
            return Err(DataError::ZeroVolume {
                ticker: series.ticker.clone(),
                date: prev.date,
            });
        }

        let price_change_pct = (current.close - prev.close) / prev.close * 100.0;
        let volume_change_pct =
            (current.volume as f64 - prev.volume as f64) / prev.volume as f64 * 100.0;

        let kind = if price_change_pct >= PRICE_PCT && volume_change_pct <= -VOLUME_PCT {
            Some(PatternKind::PriceUpVolumeDown)
        } else if price_change_pct <= -PRICE_PCT && volume_change_pct >= VOLUME_PCT {
            Some(PatternKind::PriceDownVolumeUp)
        } else {
            None
        };

        if let Some(kind) = kind {
            found.push(WatchlistPattern {
                ticker: series.ticker.clone(),
                date: current.date,
                kind,
                price_change_pct,
                volume_change_pct,
                close: current.close,
            });
        }
    }

    let keep_from = found.len().saturating_sub(MAX_PATTERNS);
    Ok(found.split_off(keep_from))
}
