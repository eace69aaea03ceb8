//! Ticker-universe construction.
//!
//! The universe for one screening run is the deduplicated union of three
//! sources: the watchlist store (a JSON map of chat id -> ticker list),
//! an index-constituent file, and a manual screener file. Tickers are
//! normalized to the canonical `.JK` suffix form before merging.
//!
//! Union order is deliberate and deterministic: watchlist first, then
//! index constituents, then the manual file, first occurrence wins. The
//! per-run capacity cap truncates from the tail, so watchlist tickers are
//! never starved by the cap.

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use anyhow::Context;
use indexmap::IndexSet;
use tracing::info;

/// Normalizes a raw ticker to its canonical IDX form.
///
/// Trims, uppercases, and appends the `.JK` suffix when missing. The
/// function is idempotent.
pub fn normalize_ticker(raw: &str) -> String {
    let ticker = raw.trim().to_uppercase();
    if ticker.ends_with(".JK") {
        ticker
    } else {
        format!("{ticker}.JK")
    }
}

/// Loads the watchlist store: every ticker from every chat, unioned.
///
/// A missing file is an empty watchlist, not an error.
pub fn load_watchlist_store(path: impl AsRef<Path>) -> anyhow::Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read watchlist store {}", path.display()))?;
    let by_chat: HashMap<String, Vec<String>> = serde_json::from_str(&text)
        .with_context(|| format!("parse watchlist store {}", path.display()))?;

    let mut tickers: Vec<String> = by_chat.into_values().flatten().collect();
    tickers.sort();
    tickers.dedup();
    Ok(tickers)
}

/// Loads a plain-text ticker file: one ticker per line, blank lines and
/// `#` comments ignored. A missing file is an empty list.
pub fn load_ticker_file(path: impl AsRef<Path>) -> anyhow::Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read ticker file {}", path.display()))?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect())
}

/// The deduplicated ticker set for one screening run, plus the watchlist
/// membership set that gates pattern detection.
#[derive(Debug, Clone)]
pub struct Universe {
    /// Insertion-ordered union: watchlist, then index, then manual.
    pub tickers: IndexSet<String>,
    /// Normalized watchlist members, for pattern-eligibility checks.
    pub watchlist: HashSet<String>,
}

impl Universe {
    /// Builds the universe from the three raw sources, normalizing every
    /// ticker and collapsing duplicates first-wins.
    pub fn build<I, J, K>(watchlist: I, index: J, manual: K) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
        K: IntoIterator<Item = String>,
    {
        let watchlist: IndexSet<String> =
            watchlist.into_iter().map(|t| normalize_ticker(&t)).collect();

        let mut tickers = watchlist.clone();
        tickers.extend(index.into_iter().map(|t| normalize_ticker(&t)));
        tickers.extend(manual.into_iter().map(|t| normalize_ticker(&t)));

        Self {
            tickers,
            watchlist: watchlist.into_iter().collect(),
        }
    }

    /// Whether `ticker` (already normalized) is a watchlist member.
    pub fn is_watched(&self, ticker: &str) -> bool {
        self.watchlist.contains(ticker)
    }

    /// Truncates the universe to at most `max` tickers, returning the
    /// number dropped.
    ///
    /// This is a capacity guard against per-run provider cost, not a
    /// correctness feature; drops are logged so operators can tune the cap.
    pub fn cap(&mut self, max: usize) -> usize {
        let before = self.tickers.len();
        if before <= max {
            return 0;
        }
        self.tickers.truncate(max);
        let dropped = before - max;
        info!(total = before, max, dropped, "ticker universe capped");
        dropped
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}
