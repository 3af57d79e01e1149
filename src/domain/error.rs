//! Error types for the Zentiment plugin.
//!
//! This module defines the centralized error type [`ZentimentError`] and a type alias
//! [`Result`] used throughout the plugin. All errors are implemented with the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! The UI surfaces every request failure as a single human-readable message
//! (status-level and decode-level failures are not rendered differently), but the
//! variants stay typed so callers and logs can tell them apart.

use thiserror::Error;

/// The main error type for Zentiment plugin operations.
///
/// Consolidates all error conditions that can occur during plugin execution, from
/// request construction to response decoding and theme loading. Variants that wrap
/// underlying errors from external crates use `#[from]` for automatic conversion.
#[derive(Debug, Error)]
pub enum ZentimentError {
    /// The analysis endpoint URL could not be constructed.
    ///
    /// Occurs when the configured endpoint base is not a valid absolute URL or
    /// cannot be joined with the scrape path. The string contains the parse
    /// failure description.
    #[error("Endpoint error: {0}")]
    Endpoint(String),

    /// The analysis service answered with a non-success status.
    ///
    /// Any status outside 2xx lands here, including the zero status the host
    /// reports for transport-level failures. The status is kept for logging only;
    /// the UI does not differentiate.
    #[error("Analysis request failed with status {status}")]
    Http {
        /// HTTP status code as reported by the host runtime.
        status: u16,
    },

    /// The response body could not be decoded into an analysis result.
    ///
    /// Wraps `serde_json` errors raised while parsing the service payload.
    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML cannot be parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl ZentimentError {
    /// Renders the error as the single message shown to the user.
    ///
    /// All request failures collapse into one uniform phrasing; everything else
    /// uses the `Display` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use zentiment::domain::ZentimentError;
    ///
    /// let err = ZentimentError::Http { status: 502 };
    /// assert_eq!(err.user_message(), "The analysis service could not be reached");
    /// ```
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { .. } => "The analysis service could not be reached".to_string(),
            Self::Decode(_) => "The analysis service returned an unreadable response".to_string(),
            other => other.to_string(),
        }
    }
}

/// A specialized `Result` type for Zentiment operations.
///
/// Type alias for `std::result::Result<T, ZentimentError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZentimentError>;
