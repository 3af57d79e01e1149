//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or host events.
//! Actions bridge pure state transformations and effectful operations like
//! issuing the web request, scheduling phase-advance timers, or hiding the pane.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin runtime executes them in sequence against the Zellij host API.

use crate::request::RequestContext;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the plugin shim.
/// They are the boundary between the pure state machine and the host's
/// effectful APIs.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing 'q').
    CloseFocus,

    /// Issues the analysis web request via the host runtime.
    ///
    /// The URL already carries the URL-escaped topic parameter. The context is
    /// serialized into the host's request context map and echoed back with the
    /// response, which is how stale completions are recognized.
    FetchAnalysis {
        /// Fully built scrape endpoint URL.
        url: String,
        /// Sequence tag and trace identifiers travelling with the request.
        context: RequestContext,
    },

    /// Schedules a host timer for the next cosmetic phase advance.
    ///
    /// Timers only move the loading label forward; they never gate the request.
    ScheduleTick {
        /// Delay in seconds, as the host timer API expects.
        delay: f64,
    },
}
