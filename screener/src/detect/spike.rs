//! 3x-volume spike detection with SETUP/WAIT classification.

use market_data::models::{bar::Bar, series::BarSeries};

use crate::signals::{SpikeClass, VolumeSpikeSignal};

/// Trailing window the detector operates on.
const WINDOW: usize = 21;

/// Maximum number of preceding sessions averaged into the baseline.
const BASELINE: usize = 20;

/// Minimum preceding sessions required for a usable baseline.
const MIN_BASELINE: usize = 5;

/// Volume must reach this multiple of the baseline to qualify.
const VOLUME_MULTIPLE: f64 = 3.0;

/// Close must reach this multiple of the prior close to qualify.
const PRICE_MULTIPLE: f64 = 1.02;

/// Follow-on sessions inspected for classification.
const FOLLOW_ON: usize = 5;

/// Minimum follow-on sessions needed to judge a spike at all.
const MIN_FOLLOW_ON: usize = 3;

/// Follow-on volume above this fraction of the spike volume keeps it WAIT.
const FOLLOW_ON_FRACTION: f64 = 0.6;

/// Finds the most recent qualifying volume spike in the trailing 21
/// sessions.
///
/// Scans backward from the newest bar and stops at the first candidate
/// whose volume is at least 3x its trailing baseline (mean of up to 20
/// preceding sessions, at least 5 required) and whose close is at least 2%
/// above the prior close. Returns `None` for series shorter than 21 bars
/// or when no candidate qualifies.
///
/// Classification looks at sessions *after* the candidate, so it is
/// provisional on a live series: a spike near the series end starves for
/// forward evidence and classifies WAIT, then may re-evaluate to SETUP on
/// a later run once more bars exist. That drift is intentional published
/// behavior.
pub fn detect_spike(series: &BarSeries) -> Option<VolumeSpikeSignal> {
    if series.len() < WINDOW {
        return None;
    }
    let recent = series.trailing(WINDOW);

    for i in (1..recent.len()).rev() {
        let current = &recent[i];
        let prev = &recent[i - 1];

        let baseline = &recent[i.saturating_sub(BASELINE)..i];
        if baseline.len() < MIN_BASELINE {
            continue;
        }
        let avg_volume =
            baseline.iter().map(|b| b.volume as f64).sum::<f64>() / baseline.len() as f64;

        if current.volume as f64 >= VOLUME_MULTIPLE * avg_volume
            && current.close >= prev.close * PRICE_MULTIPLE
        {
            return Some(VolumeSpikeSignal {
                ticker: series.ticker.clone(),
                date: current.date,
                spike_volume: current.volume,
                avg_volume,
                close: current.close,
                prev_close: prev.close,
                classification: classify(current.volume, &recent[i + 1..]),
            });
        }
    }

    None
}

/// SETUP when the spike is isolated, WAIT otherwise.
///
/// `follow_on` is every session after the candidate within the trailing
/// window; only the first five are considered. Fewer than three means not
/// enough forward evidence.
fn classify(spike_volume: u64, follow_on: &[Bar]) -> SpikeClass {
    let next = &follow_on[..follow_on.len().min(FOLLOW_ON)];
    if next.len() < MIN_FOLLOW_ON {
        return SpikeClass::Wait;
    }

    let threshold = spike_volume as f64 * FOLLOW_ON_FRACTION;
    if next.iter().any(|b| b.volume as f64 > threshold) {
        SpikeClass::Wait
    } else {
        SpikeClass::Setup
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn bar(day: u32, close: f64, volume: u64) -> Bar {
        Bar {
            date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap() + chrono::Days::new(day as u64),
            open: close,
            high: close * 1.01,
            low: close * 0.99,
            close,
            volume,
        }
    }

    fn series(bars: Vec<Bar>) -> BarSeries {
        BarSeries {
            ticker: "TEST.JK".into(),
            bars,
        }
    }

    #[test]
    fn short_series_declines() {
        let bars = (0..20).map(|d| bar(d, 100.0, 1_000)).collect();
        assert!(detect_spike(&series(bars)).is_none());
    }

    #[test]
    fn flat_series_has_no_spike() {
        let bars = (0..21).map(|d| bar(d, 100.0, 1_000)).collect();
        assert!(detect_spike(&series(bars)).is_none());
    }

    #[test]
    fn volume_alone_does_not_qualify() {
        let mut bars: Vec<Bar> = (0..21).map(|d| bar(d, 100.0, 1_000)).collect();
        bars[15].volume = 10_000; // 10x baseline, but price flat
        assert!(detect_spike(&series(bars)).is_none());
    }

    #[test]
    fn price_alone_does_not_qualify() {
        let mut bars: Vec<Bar> = (0..21).map(|d| bar(d, 100.0, 1_000)).collect();
        bars[15].close = 105.0; // +5%, but volume flat
        assert!(detect_spike(&series(bars)).is_none());
    }

    #[test]
    fn most_recent_spike_wins() {
        let mut bars: Vec<Bar> = (0..21).map(|d| bar(d, 100.0, 1_000)).collect();
        bars[10].volume = 5_000;
        bars[10].close = 103.0;
        bars[11].close = 103.0;
        bars[16].volume = 5_000;
        bars[16].close = 106.1; // +6.1% over the 100.0 prior close
        for b in &mut bars[17..] {
            b.close = 106.1;
        }
        let s = series(bars);
        let signal = detect_spike(&s).unwrap();
        assert_eq!(signal.date, s.bars[16].date);
    }

    #[test]
    fn insufficient_baseline_is_skipped() {
        // Qualifying bar sits at index 3 of the window, with only 3
        // preceding sessions available for the baseline.
        let mut bars: Vec<Bar> = (0..21).map(|d| bar(d, 100.0, 1_000)).collect();
        bars[3].volume = 50_000;
        bars[3].close = 110.0;
        bars[4].close = 110.0; // keep later pairs from qualifying on price
        for b in &mut bars[5..] {
            b.close = 110.0;
        }
        assert!(detect_spike(&series(bars)).is_none());
    }
}
