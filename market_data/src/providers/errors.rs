use thiserror::Error;

/// Errors that can occur within a `SeriesProvider` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The vendor's API returned a specific error message.
    #[error("API error: {0}")]
    Api(String),

    /// The response was received but could not be mapped into bars.
    #[error("Malformed vendor response: {0}")]
    Malformed(String),

    /// The vendor returned no usable sessions for the ticker.
    #[error("No data for ticker {0}")]
    NoData(String),
}
