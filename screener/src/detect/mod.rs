//! Signal detectors over daily bar series.
//!
//! Two detector families:
//! - [`spike::detect_spike`] — the most recent qualifying 3x-volume spike
//!   in the trailing 21 sessions, classified SETUP or WAIT.
//! - [`pattern::detect_patterns`] — up to three recent price/volume
//!   divergences in the trailing 10 sessions.
//!
//! Insufficient history is never an error: detectors decline (return
//! `None` / empty) and the caller moves on. A zero divisor in upstream
//! data is a [`DataError`], distinct from "no signal".

pub mod pattern;
pub mod spike;

use chrono::NaiveDate;
use thiserror::Error;

/// Data-integrity errors found while computing percentage changes.
///
/// These indicate corrupt upstream bars, not absent signals; callers must
/// surface them (log + skip) instead of emitting a signal with an infinite
/// or undefined change.
#[derive(Debug, Error)]
pub enum DataError {
    /// The previous session's close was zero or negative.
    #[error("{ticker}: non-positive close {close} on {date} used as divisor")]
    NonPositiveClose {
        ticker: String,
        date: NaiveDate,
        close: f64,
    },

    /// The previous session's volume was zero.
    #[error("{ticker}: zero volume on {date} used as divisor")]
    ZeroVolume { ticker: String, date: NaiveDate },
}
