//! Trading-slot windows in WIB (Asia/Jakarta) wall-clock time.
//!
//! A slot names a window of the trading day during which a scheduled scan
//! is permitted to run. The slot id doubles as an idempotency key: it is
//! stable for the whole window on a given date, so the caller can persist
//! it and refuse a second run inside the same window (see
//! [`crate::state`]).

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::{Asia::Jakarta, Tz};

/// A named wall-clock window, inclusive on both ends.
#[derive(Debug, Clone, Copy)]
pub struct TradingSlot {
    pub name: &'static str,
    /// Window start as (hour, minute) in WIB.
    pub start: (u32, u32),
    /// Window end as (hour, minute) in WIB.
    pub end: (u32, u32),
}

/// The screening schedule: one post-close window, after the IDX closing
/// auction has printed and daily bars are final.
pub const TRADING_SLOTS: &[TradingSlot] = &[TradingSlot {
    name: "Post-Close",
    start: (16, 15),
    end: (17, 0),
}];

/// Current time in WIB.
pub fn wib_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&Jakarta)
}

/// Returns the slot id and name when `now` falls inside a slot.
///
/// The id has the form `YYYY-MM-DD_slot_N`, unique per window per date.
pub fn current_slot(now: DateTime<Tz>) -> Option<(String, &'static str)> {
    let t = (now.hour(), now.minute());

    for (idx, slot) in TRADING_SLOTS.iter().enumerate() {
        if slot.start <= t && t <= slot.end {
            let id = format!(
                "{:04}-{:02}-{:02}_slot_{idx}",
                now.year(),
                now.month(),
                now.day()
            );
            return Some((id, slot.name));
        }
    }
    None
}
