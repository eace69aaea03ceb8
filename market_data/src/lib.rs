//! Daily OHLCV data model and series providers for the IDX screener.
//!
//! The crate defines the vendor-agnostic [`models::bar::Bar`] /
//! [`models::series::BarSeries`] types, the [`providers::SeriesProvider`]
//! trait that screening code consumes, and a Yahoo Finance chart-API
//! implementation of that trait.

pub mod models;
pub mod providers;
