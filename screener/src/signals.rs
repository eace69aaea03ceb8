//! Typed signal records emitted by the detectors.
//!
//! All signals are created fresh each screening run and discarded after
//! delivery; nothing here is persisted across runs. In particular a
//! [`SpikeClass`] is provisional: the same spike can re-evaluate from
//! `Wait` to `Setup` on a later run once enough follow-on sessions exist.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Classification of a qualifying volume spike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpikeClass {
    /// The spike was isolated: no comparable follow-on volume appeared.
    Setup,
    /// Follow-on volume is still developing, or too few forward sessions
    /// exist yet to judge.
    Wait,
}

impl fmt::Display for SpikeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpikeClass::Setup => write!(f, "SETUP"),
            SpikeClass::Wait => write!(f, "WAIT"),
        }
    }
}

/// The most recent qualifying 3x-volume spike for one ticker.
///
/// At most one of these exists per ticker per screening run.
#[derive(Debug, Clone, Serialize)]
pub struct VolumeSpikeSignal {
    pub ticker: String,
    /// Session on which the spike printed.
    pub date: NaiveDate,
    pub spike_volume: u64,
    /// Mean volume of the trailing baseline sessions.
    pub avg_volume: f64,
    pub close: f64,
    pub prev_close: f64,
    pub classification: SpikeClass,
}

impl VolumeSpikeSignal {
    /// Spike volume as a multiple of the trailing baseline.
    pub fn volume_ratio(&self) -> f64 {
        self.spike_volume as f64 / self.avg_volume
    }

    /// Day-over-day close change in percent.
    pub fn price_change_pct(&self) -> f64 {
        (self.close - self.prev_close) / self.prev_close * 100.0
    }
}

/// Direction of a price/volume divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PatternKind {
    /// Price up at least 1% with volume down at least 30%.
    PriceUpVolumeDown,
    /// Price down at least 1% with volume up at least 30%.
    PriceDownVolumeUp,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::PriceUpVolumeDown => write!(f, "price-up/volume-down"),
            PatternKind::PriceDownVolumeUp => write!(f, "price-down/volume-up"),
        }
    }
}

/// One short-term price/volume divergence on a watched ticker.
#[derive(Debug, Clone, Serialize)]
pub struct WatchlistPattern {
    pub ticker: String,
    /// Session of the later bar of the diverging pair.
    pub date: NaiveDate,
    pub kind: PatternKind,
    pub price_change_pct: f64,
    pub volume_change_pct: f64,
    pub close: f64,
}
