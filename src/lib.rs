//! Zentiment: a Zellij plugin for topic sentiment analysis.
//!
//! Zentiment is a terminal pane that answers "what is being said about X":
//! - Free-text topic search against a remote analysis service
//! - One HTTP request per search; the service scrapes, summarizes, and
//!   classifies coverage
//! - A sentiment bar chart of positive/neutral/negative mention counts
//! - Browsable article and quote lists with a client-side fuzzy filter
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Request lifecycle
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Request Layer │   │ Domain Layer  │
//! │ (ui/)         │   │ (request/)    │   │ (domain/)     │
//! │ - Rendering   │   │ - Scrape URL  │   │ - Payload     │
//! │ - Theming     │   │ - Context tags│   │ - Errors      │
//! │ - Components  │   │ - Trace ids   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/) + paths             │  ← Optional
//! │  (infrastructure/)                                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Request lifecycle
//!
//! A submitted topic moves the state machine from `Idle` (or a terminal state)
//! into `Loading` under a fresh sequence tag, issues exactly one
//! `GET /api/scrape?topic=...` through the host, and advances a purely cosmetic
//! three-phase loading label on host timers. The completion event is matched
//! against the in-flight tag: a stale completion from a superseded search is
//! discarded, so only the most recent search ever updates the screen. Success
//! decodes the JSON payload; any non-2xx status or undecodable body becomes one
//! uniform error message. Nothing is retried and nothing is persisted.
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zentiment.wasm" {
//!         endpoint "http://127.0.0.1:8000"
//!         phase_interval_ms "650"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod request;

pub mod ui;

pub mod observability;

pub use app::{
    handle_event, Action, AppState, Event, FilterFocus, InputMode, LoadingPhase, RequestState,
    ViewMode,
};
pub use domain::{AnalysisResult, Article, Mentions, Result, Sentiment, ZentimentError};
pub use request::RequestContext;
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default analysis service base URL.
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Default pause between cosmetic loading phases, in milliseconds.
const DEFAULT_PHASE_INTERVAL_MS: u64 = 650;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration and
/// passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zentiment.wasm" {
///     endpoint "https://analysis.example.com"
///     phase_interval_ms "400"
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the analysis service.
    ///
    /// The scrape path and the escaped topic parameter are appended per
    /// request. Default: `http://127.0.0.1:8000`
    pub endpoint: String,

    /// Pause between cosmetic loading phases, in milliseconds.
    ///
    /// Advisory display pacing only; the request is issued immediately on
    /// submit. Default: 650
    pub phase_interval_ms: u64,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            phase_interval_ms: DEFAULT_PHASE_INTERVAL_MS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts typed values with
    /// per-key fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `endpoint`: String → trimmed; empty values fall back to the default
    /// - `phase_interval_ms`: String → `u64` (falls back to 650 on parse error)
    /// - `theme`, `theme_file`, `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zentiment::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("endpoint".to_string(), "https://analysis.example.com".to_string());
    /// map.insert("phase_interval_ms".to_string(), "400".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint, "https://analysis.example.com");
    /// assert_eq!(config.phase_interval_ms, 400);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let endpoint = config
            .get("endpoint")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let phase_interval_ms = config
            .get("phase_interval_ms")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_PHASE_INTERVAL_MS);

        Self {
            endpoint,
            phase_interval_ms,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with the resolved theme (file takes precedence
/// over name, falling back to the default on any load failure) and the
/// configured endpoint. The state starts in the idle lifecycle with an empty
/// topic.
///
/// # Example
///
/// ```rust
/// use zentiment::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.query.is_empty());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zentiment plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.endpoint.clone(), config.phase_interval_ms, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.phase_interval_ms, DEFAULT_PHASE_INTERVAL_MS);
        assert!(config.theme_name.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn unparseable_values_fall_back_per_key() {
        let mut map = BTreeMap::new();
        map.insert("endpoint".to_string(), "   ".to_string());
        map.insert("phase_interval_ms".to_string(), "soon".to_string());
        map.insert("theme".to_string(), "catppuccin-latte".to_string());

        let config = Config::from_zellij(&map);

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.phase_interval_ms, DEFAULT_PHASE_INTERVAL_MS);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    }

    #[test]
    fn initialize_resolves_the_named_theme() {
        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Default::default()
        };

        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-frappe");

        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }
}
