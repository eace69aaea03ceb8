//! Yahoo Finance chart-API provider for daily IDX bars.

mod provider;
mod response;

pub use provider::YahooProvider;
