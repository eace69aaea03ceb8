//! IDX volume screener: detectors, universe construction, and the
//! screening orchestrator.
//!
//! The algorithmic core lives in [`detect`]; everything else is plumbing
//! around it: [`universe`] builds the deduplicated ticker set from three
//! sources, [`screen`] drives one stateless screening run against a
//! [`market_data::providers::SeriesProvider`], and [`sink`] is the seam a
//! delivery channel plugs into. [`slots`] and [`state`] implement the
//! at-most-once-per-trading-slot gate used by the binary.

pub mod config;
pub mod detect;
pub mod screen;
pub mod signals;
pub mod sink;
pub mod slots;
pub mod state;
pub mod universe;
