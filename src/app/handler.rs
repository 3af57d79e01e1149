//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! host timer ticks, and web request completions, translating them into state
//! changes and action sequences. It is the single place where the search
//! request lifecycle is driven.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Request lifecycle
//!
//! `Submit` trims the topic; a blank topic is a complete no-op. A valid topic
//! moves the lifecycle into `Loading` under a fresh sequence tag and emits the
//! fetch plus the first cosmetic phase timer. `PhaseTick` advances the loading
//! label and reschedules itself until the label sequence is exhausted; the
//! ticks never gate the request. `Response` is matched against the in-flight
//! sequence tag first: stale completions (from a superseded search) are
//! discarded without touching state, so only the most recent search can update
//! what the user sees.

use super::lifecycle::RequestState;
use super::modes::{FilterFocus, InputMode, ViewMode};
use super::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{AnalysisResult, ZentimentError};
use crate::request::{scrape_url, RequestContext};

/// Events triggered by user input or host callbacks.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection down by one row in the active list (wraps to top).
    KeyDown,
    /// Moves selection up by one row in the active list (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Appends a character to the query or filter, depending on input mode.
    Char(char),
    /// Removes the last character from the query or filter.
    Backspace,
    /// Submits the current topic for analysis.
    Submit,
    /// Leaves the current mode (query ↔ browse, or exits the filter).
    Escape,

    /// Returns focus to the query bar to edit the topic.
    EditQuery,
    /// Enters filter mode with typing focus (list views only).
    FilterMode,
    /// Refocuses the filter input field (from navigating focus).
    FocusFilterBar,
    /// Moves focus from the filter input to the narrowed rows.
    FocusResults,
    /// Exits filter mode and clears the filter.
    ExitFilter,

    /// Switches to the Overview view.
    ShowOverview,
    /// Switches to the Articles view.
    ShowArticles,
    /// Switches to the Mentions view.
    ShowMentions,
    /// Cycles to the next view in Tab order.
    NextView,

    /// A cosmetic phase timer fired.
    ///
    /// Advances the loading label if a request is still in flight; ignored in
    /// every other lifecycle state.
    PhaseTick,

    /// The host delivered the result of a web request.
    Response {
        /// HTTP status as reported by the host (0 on transport failure).
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
        /// Context tags the request was issued with.
        context: RequestContext,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the plugin runtime.
///
/// # Returns
///
/// A tuple of (`should_render`, actions): whether the UI needs a repaint, and
/// the side effects to execute in sequence. Both are empty/false for ignored
/// events (e.g., a blank submit or a stale response).
///
/// # Errors
///
/// Returns errors from state mutation methods; request failures themselves are
/// absorbed into the `Error` lifecycle state rather than propagated.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::Char(c) => match state.input_mode {
            InputMode::Query => {
                state.query.push(*c);
                tracing::trace!(query = %state.query, "topic updated");
                Ok((true, vec![]))
            }
            InputMode::Filter(FilterFocus::Typing) => {
                state.filter_query.push(*c);
                state.apply_filter();
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Query => {
                state.query.pop();
                Ok((true, vec![]))
            }
            InputMode::Filter(FilterFocus::Typing) => {
                state.filter_query.pop();
                state.apply_filter();
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },

        Event::Submit => {
            let topic = state.query.trim().to_string();
            if topic.is_empty() {
                tracing::debug!("ignoring submit of blank topic");
                return Ok((false, vec![]));
            }

            if let Some(superseded) = state.request.in_flight_seq() {
                tracing::debug!(superseded_seq = superseded, "in-flight request superseded");
            }
            let seq = state.begin_search();

            match scrape_url(&state.endpoint, &topic) {
                Ok(url) => {
                    tracing::debug!(seq, url = %url, "issuing analysis request");
                    let delay = state.phase_delay();
                    Ok((
                        true,
                        vec![
                            Action::FetchAnalysis {
                                url,
                                context: RequestContext::new(seq, topic),
                            },
                            Action::ScheduleTick { delay },
                        ],
                    ))
                }
                Err(e) => {
                    tracing::debug!(seq, error = %e, "failed to build scrape url");
                    state.fail_search(e.user_message());
                    Ok((true, vec![]))
                }
            }
        }

        Event::Escape => match state.input_mode {
            InputMode::Query => {
                if state.request.analysis().is_some() {
                    state.input_mode = InputMode::Browse;
                    Ok((true, vec![]))
                } else {
                    Ok((false, vec![]))
                }
            }
            InputMode::Browse => {
                state.input_mode = InputMode::Query;
                Ok((true, vec![]))
            }
            InputMode::Filter(_) => {
                state.input_mode = InputMode::Browse;
                state.filter_query.clear();
                state.apply_filter();
                Ok((true, vec![]))
            }
        },

        Event::EditQuery => {
            state.input_mode = InputMode::Query;
            Ok((true, vec![]))
        }
        Event::FilterMode => {
            if state.view_mode == ViewMode::Overview || state.request.analysis().is_none() {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering filter mode");
            state.input_mode = InputMode::Filter(FilterFocus::Typing);
            state.filter_query.clear();
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::FocusFilterBar => {
            state.input_mode = InputMode::Filter(FilterFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.filter_query.is_empty() {
                state.input_mode = InputMode::Browse;
                state.apply_filter();
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Filter(FilterFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitFilter => {
            tracing::debug!(filter = %state.filter_query, "exiting filter mode");
            state.input_mode = InputMode::Browse;
            state.filter_query.clear();
            state.apply_filter();
            Ok((true, vec![]))
        }

        Event::ShowOverview => switch_view(state, ViewMode::Overview),
        Event::ShowArticles => switch_view(state, ViewMode::Articles),
        Event::ShowMentions => switch_view(state, ViewMode::Mentions),
        Event::NextView => switch_view(state, state.view_mode.next()),

        Event::PhaseTick => {
            let delay = state.phase_delay();
            if let RequestState::Loading { phase, .. } = &mut state.request {
                if let Some(next) = phase.next() {
                    tracing::trace!(phase = next.label(), "advancing loading phase");
                    *phase = next;
                    return Ok((true, vec![Action::ScheduleTick { delay }]));
                }
            }
            Ok((false, vec![]))
        }

        Event::Response {
            status,
            body,
            context,
        } => {
            let current = state.request.in_flight_seq();
            if current != Some(context.seq) {
                tracing::debug!(
                    seq = context.seq,
                    current = ?current,
                    topic = %context.topic,
                    "discarding stale response"
                );
                return Ok((false, vec![]));
            }

            if (200..300).contains(status) {
                match serde_json::from_slice::<AnalysisResult>(body) {
                    Ok(analysis) => {
                        tracing::debug!(
                            seq = context.seq,
                            articles = analysis.articles.len(),
                            mentions = analysis.mentions.total(),
                            "analysis loaded"
                        );
                        state.complete_search(analysis);
                    }
                    Err(e) => {
                        let err = ZentimentError::Decode(e);
                        tracing::debug!(seq = context.seq, error = %err, "undecodable analysis payload");
                        state.fail_search(err.user_message());
                    }
                }
            } else {
                let err = ZentimentError::Http { status: *status };
                tracing::debug!(seq = context.seq, status, "analysis request failed");
                state.fail_search(err.user_message());
            }

            Ok((true, vec![]))
        }
    }
}

/// Switches the result view, resetting the selection.
///
/// Repaints only when an analysis is on screen; with nothing loaded the view
/// change is invisible.
fn switch_view(state: &mut AppState, view: ViewMode) -> Result<(bool, Vec<Action>)> {
    state.view_mode = view;
    state.selected_index = 0;
    Ok((state.request.analysis().is_some(), vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::lifecycle::LoadingPhase;
    use crate::ui::theme::Theme;

    fn new_state() -> AppState {
        AppState::new("http://localhost:8000".to_string(), 650, Theme::default())
    }

    fn success_body() -> Vec<u8> {
        br#"{
            "name": "rust",
            "articles": [],
            "mentions": {"positive": [], "neutral": [], "negative": []}
        }"#
        .to_vec()
    }

    fn response_for(state: &AppState, status: u16, body: Vec<u8>) -> Event {
        let seq = state.request.in_flight_seq().expect("a request in flight");
        Event::Response {
            status,
            body,
            context: RequestContext {
                seq,
                topic: state.query.clone(),
                trace: None,
            },
        }
    }

    #[test]
    fn blank_submit_changes_nothing() {
        let mut state = new_state();
        state.query = "   \t ".to_string();

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.request, RequestState::Idle);
        assert_eq!(state.query, "   \t ");
    }

    #[test]
    fn submit_issues_one_fetch_and_the_first_phase_tick() {
        let mut state = new_state();
        state.query = "  rust language ".to_string();

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(render);
        assert_eq!(actions.len(), 2);
        match &actions[0] {
            Action::FetchAnalysis { url, context } => {
                assert_eq!(url, "http://localhost:8000/api/scrape?topic=rust+language");
                assert_eq!(context.seq, 1);
                assert_eq!(context.topic, "rust language");
            }
            other => panic!("expected a fetch action, got {other:?}"),
        }
        assert!(matches!(actions[1], Action::ScheduleTick { .. }));
        assert_eq!(
            state.request,
            RequestState::Loading { seq: 1, phase: LoadingPhase::Searching }
        );
    }

    #[test]
    fn phase_ticks_advance_the_label_then_stop() {
        let mut state = new_state();
        state.query = "rust".to_string();
        handle_event(&mut state, &Event::Submit).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::PhaseTick).unwrap();
        assert!(render);
        assert_eq!(actions.len(), 1);
        assert_eq!(
            state.request,
            RequestState::Loading { seq: 1, phase: LoadingPhase::Scraping }
        );

        handle_event(&mut state, &Event::PhaseTick).unwrap();
        assert_eq!(
            state.request,
            RequestState::Loading { seq: 1, phase: LoadingPhase::Analyzing }
        );

        // The label sequence is exhausted; further ticks are inert.
        let (render, actions) = handle_event(&mut state, &Event::PhaseTick).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn successful_empty_payload_reaches_success_with_zero_counts() {
        let mut state = new_state();
        state.query = "rust".to_string();
        handle_event(&mut state, &Event::Submit).unwrap();

        let response = response_for(&state, 200, success_body());
        let (render, _) = handle_event(&mut state, &response).unwrap();

        assert!(render);
        let analysis = state.request.analysis().expect("success state");
        assert!(analysis.articles.is_empty());
        assert_eq!(analysis.mentions.total(), 0);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.view_mode, ViewMode::Overview);
    }

    #[test]
    fn transport_and_status_failures_surface_one_uniform_error() {
        for status in [0u16, 404, 500] {
            let mut state = new_state();
            state.query = "rust".to_string();
            handle_event(&mut state, &Event::Submit).unwrap();

            let response = response_for(&state, status, vec![]);
            handle_event(&mut state, &response).unwrap();

            match &state.request {
                RequestState::Error { message } => {
                    assert!(!message.is_empty());
                    assert_eq!(message, "The analysis service could not be reached");
                }
                other => panic!("expected error state for status {status}, got {other:?}"),
            }
            assert!(state.request.analysis().is_none());
            assert_eq!(state.input_mode, InputMode::Query);
        }
    }

    #[test]
    fn undecodable_body_is_an_error_not_a_panic() {
        let mut state = new_state();
        state.query = "rust".to_string();
        handle_event(&mut state, &Event::Submit).unwrap();

        let response = response_for(&state, 200, b"<html>not json</html>".to_vec());
        handle_event(&mut state, &response).unwrap();

        assert!(matches!(state.request, RequestState::Error { .. }));
    }

    #[test]
    fn stale_response_from_a_superseded_search_is_discarded() {
        let mut state = new_state();
        state.query = "first".to_string();
        handle_event(&mut state, &Event::Submit).unwrap();
        let stale = response_for(&state, 200, success_body());

        // A second submission supersedes the first request.
        state.query = "second".to_string();
        handle_event(&mut state, &Event::Submit).unwrap();

        let (render, actions) = handle_event(&mut state, &stale).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(
            state.request,
            RequestState::Loading { seq: 2, phase: LoadingPhase::Searching }
        );

        // The latest request's completion still lands.
        let fresh = response_for(&state, 200, success_body());
        handle_event(&mut state, &fresh).unwrap();
        assert!(state.request.analysis().is_some());
    }

    #[test]
    fn characters_route_to_query_or_filter_by_mode() {
        let mut state = new_state();

        handle_event(&mut state, &Event::Char('r')).unwrap();
        handle_event(&mut state, &Event::Char('s')).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.query, "r");

        // Filter mode is unreachable without a loaded analysis.
        let (render, _) = handle_event(&mut state, &Event::FilterMode).unwrap();
        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Query);
    }

    #[test]
    fn filter_mode_narrows_lists_and_exits_clean() {
        let mut state = new_state();
        state.query = "rust".to_string();
        handle_event(&mut state, &Event::Submit).unwrap();
        let body = br#"{
            "name": "rust",
            "articles": [],
            "mentions": {"positive": ["great"], "neutral": [], "negative": ["bad docs"]}
        }"#
        .to_vec();
        let response = response_for(&state, 200, body);
        handle_event(&mut state, &response).unwrap();

        handle_event(&mut state, &Event::ShowMentions).unwrap();
        handle_event(&mut state, &Event::FilterMode).unwrap();
        assert_eq!(state.input_mode, InputMode::Filter(FilterFocus::Typing));

        for c in "bad".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.filtered_mentions.len(), 1);

        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Filter(FilterFocus::Navigating));

        handle_event(&mut state, &Event::ExitFilter).unwrap();
        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(state.filter_query.is_empty());
        assert_eq!(state.filtered_mentions.len(), 2);
    }
}
