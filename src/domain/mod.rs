//! Domain layer for the Zentiment plugin.
//!
//! This module contains the core domain types for the plugin, independent of
//! Zellij-specific APIs or infrastructure concerns: the analysis payload decoded
//! from the remote service and the crate-wide error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`analysis`]: Analysis result model (articles, sentiment-bucketed mentions)

pub mod analysis;
pub mod error;

pub use analysis::{AnalysisResult, Article, Mentions, Sentiment};
pub use error::{Result, ZentimentError};
