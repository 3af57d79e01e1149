//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information (chart bar widths, filter highlight ranges, selection flags)
//! so the component renderers stay free of logic.
//!
//! A view model is created per frame by `AppState::compute_viewmodel()` and
//! consumed once by the renderer. The optional fields mirror the request
//! lifecycle: at most one of `status`, `chart`/`list_items`, or `empty_state`
//! is populated, because they derive from a single tagged state value.

use crate::domain::Sentiment;

/// Complete UI view model for one rendered frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title line).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Topic input box, present while the user is editing or submitting.
    pub query_bar: Option<QueryBarInfo>,

    /// Filter input box, present while filter mode is active.
    pub filter_bar: Option<FilterBarInfo>,

    /// Loading or error status line, present in those lifecycle states.
    pub status: Option<StatusLine>,

    /// Sentiment bar chart, present in the Overview view of a loaded analysis.
    pub chart: Option<ChartInfo>,

    /// Which list view the rows belong to, present alongside `list_items`.
    pub list_kind: Option<ListKind>,

    /// Windowed rows for the Articles/Mentions list views.
    pub list_items: Vec<ListItem>,

    /// Index of the selected row within `list_items` (window-relative).
    pub selected_index: usize,

    /// Source URL of the selected article, shown under the Articles list.
    pub source_line: Option<String>,

    /// Idle or no-results message, present when there is nothing else to show.
    pub empty_state: Option<EmptyState>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "/: topic  Tab: view  q: quit").
    pub keybindings: String,
}

/// Topic input box display information.
#[derive(Debug, Clone)]
pub struct QueryBarInfo {
    /// Current topic text.
    pub query: String,

    /// True while a request is in flight; the submit hint renders disabled.
    /// Resubmitting is still possible and supersedes the in-flight request.
    pub submitting: bool,
}

/// Filter input box display information.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    /// Current filter text.
    pub filter: String,
}

/// Which kind of status line is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// A request is in flight; the message is the current loading phase.
    Loading,
    /// The last request failed; the message is the user-facing error.
    Error,
}

/// Centered status line for the loading and error lifecycle states.
#[derive(Debug, Clone)]
pub struct StatusLine {
    /// Loading or error styling.
    pub kind: StatusKind,

    /// Primary message (phase label or error message).
    pub message: String,

    /// Secondary hint line (topic being fetched, retry hint).
    pub hint: String,
}

/// Sentiment bar chart for the Overview view.
#[derive(Debug, Clone)]
pub struct ChartInfo {
    /// One row per sentiment category, in display order.
    pub rows: Vec<ChartRow>,

    /// Total mention count across categories.
    pub total: usize,
}

/// A single chart row with its pre-computed bar width.
#[derive(Debug, Clone)]
pub struct ChartRow {
    /// Sentiment category (selects the bar color).
    pub sentiment: Sentiment,

    /// Category label ("Positive", "Neutral", "Negative").
    pub label: &'static str,

    /// Mention count for the category.
    pub count: usize,

    /// Bar width in terminal cells, proportional to `count`.
    pub bar_cells: usize,
}

/// Which list view the windowed rows belong to.
///
/// Selects the column headers the list renderer prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Scraped articles (title + summary columns).
    Articles,
    /// Sentiment-tagged quotes (tag + quote columns).
    Mentions,
}

/// Display information for one row of the Articles or Mentions list.
#[derive(Debug, Clone)]
pub struct ListItem {
    /// Main row text (article title or mention quote).
    pub text: String,

    /// Secondary column text (article summary; empty for mentions).
    pub detail: String,

    /// Sentiment tag, set for mention rows only.
    pub sentiment: Option<Sentiment>,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges of `text` to highlight (filter matches).
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Centered message shown when there is no body content to render.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "Search a topic to analyze").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
