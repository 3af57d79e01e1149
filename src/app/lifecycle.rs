//! Request lifecycle state machine.
//!
//! This module defines [`RequestState`], the tagged union tracking the single
//! outstanding analysis request, and [`LoadingPhase`], the cosmetic progress label
//! shown while a request is in flight.
//!
//! Exactly one variant holds at a time, so the analysis result and the error
//! message are mutually exclusive by construction rather than by convention.
//! Each in-flight request is tagged with a monotonic sequence number; a completion
//! carrying any other sequence number is stale and must not touch visible state.

use crate::domain::AnalysisResult;

/// Cosmetic progress label advanced on fixed timer ticks while loading.
///
/// The sequence is fixed: Searching → Scraping → Analyzing. The label is advisory
/// text only: it is driven by timers rather than actual request milestones, and it
/// never gates or delays the request itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// First phase, entered immediately on submit.
    Searching,
    /// Second phase.
    Scraping,
    /// Final phase, held until the response arrives.
    Analyzing,
}

impl LoadingPhase {
    /// Label rendered in the loading status line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Searching => "Searching for coverage...",
            Self::Scraping => "Scraping articles...",
            Self::Analyzing => "Analyzing sentiment...",
        }
    }

    /// The phase following this one, or `None` at the end of the sequence.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Searching => Some(Self::Scraping),
            Self::Scraping => Some(Self::Analyzing),
            Self::Analyzing => None,
        }
    }
}

/// State of the one outstanding analysis request.
///
/// The union replaces the independent loading/result/error flags a naive
/// implementation would keep: transitions swap the whole value, so clearing the
/// previous result at the start of a new search and dropping the loading label on
/// completion are structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    /// No search has been submitted yet (or the pane was just opened).
    Idle,

    /// A request is in flight.
    Loading {
        /// Monotonic tag of the request this state belongs to. Completions with
        /// any other tag are discarded as stale.
        seq: u64,
        /// Current cosmetic progress label.
        phase: LoadingPhase,
    },

    /// The last request succeeded and its payload is on screen.
    Success {
        /// Decoded analysis payload.
        analysis: AnalysisResult,
    },

    /// The last request failed.
    Error {
        /// Human-readable message shown to the user.
        message: String,
    },
}

impl RequestState {
    /// Returns the decoded analysis if the last request succeeded.
    #[must_use]
    pub const fn analysis(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Success { analysis } => Some(analysis),
            _ => None,
        }
    }

    /// Whether a request is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Sequence number of the in-flight request, if any.
    #[must_use]
    pub const fn in_flight_seq(&self) -> Option<u64> {
        match self {
            Self::Loading { seq, .. } => Some(*seq),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_in_fixed_order_and_stop() {
        let mut phase = LoadingPhase::Searching;
        assert_eq!(phase.label(), "Searching for coverage...");

        phase = phase.next().unwrap();
        assert_eq!(phase, LoadingPhase::Scraping);

        phase = phase.next().unwrap();
        assert_eq!(phase, LoadingPhase::Analyzing);
        assert_eq!(phase.next(), None);
    }

    #[test]
    fn loading_state_exposes_its_sequence_tag() {
        let state = RequestState::Loading { seq: 7, phase: LoadingPhase::Searching };
        assert!(state.is_loading());
        assert_eq!(state.in_flight_seq(), Some(7));
        assert!(state.analysis().is_none());

        assert_eq!(RequestState::Idle.in_flight_seq(), None);
    }
}
