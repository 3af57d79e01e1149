//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with the request lifecycle transitions, filter management, and UI view
//! model generation. It is the single source of truth for all transient view
//! state; nothing here is persisted.
//!
//! # Architecture
//!
//! `AppState` separates the request lifecycle (the [`RequestState`] tagged union)
//! from interaction state (modes, filter, selection). The loaded analysis lives
//! inside the lifecycle value, so starting a new search structurally destroys the
//! previous result or error. View models are computed on demand from state
//! snapshots and terminal dimensions.
//!
//! # State Components
//!
//! - **Query**: The topic string being edited, mutated on every keystroke
//! - **Request**: Idle / Loading / Success / Error, with the sequence counter
//!   that tags each outbound request
//! - **Input Mode**: Routes keystrokes (topic entry, browsing, filtering)
//! - **View Mode**: Which slice of a loaded analysis is displayed
//! - **Filter caches**: Article/mention rows narrowed by the fuzzy filter

use super::lifecycle::{LoadingPhase, RequestState};
use super::modes::{FilterFocus, InputMode, ViewMode};
use crate::domain::{AnalysisResult, Article, Sentiment};
use crate::ui::helpers::truncate_chars;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ChartInfo, ChartRow, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, ListItem, ListKind,
    QueryBarInfo, StatusKind, StatusLine, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Character width of the main text column in list views.
const TEXT_COLUMN_WIDTH: usize = 45;

/// Safety margin kept free at the right edge of list rows.
const SAFETY_MARGIN: usize = 2;

/// Width reserved for the chart label column.
const CHART_LABEL_WIDTH: usize = 10;

/// Width reserved for the chart count column.
const CHART_COUNT_WIDTH: usize = 6;

/// Central application state container.
///
/// Holds all transient view state: the topic being edited, the request
/// lifecycle, interaction modes, and the filtered row caches. Mutated by the
/// event handler in response to user input and host events. View models are
/// computed on demand via [`AppState::compute_viewmodel`].
#[derive(Debug, Clone)]
pub struct AppState {
    /// Topic text being edited in the query bar.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace`. Never cleared
    /// automatically; submitting or erroring leaves it editable in place.
    pub query: String,

    /// Request lifecycle state.
    ///
    /// Holds the loaded analysis or the error message; transitions replace the
    /// whole value, so at most one of them exists at any time.
    pub request: RequestState,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Which slice of a loaded analysis is displayed.
    pub view_mode: ViewMode,

    /// Current filter text applied to the article/mention lists.
    pub filter_query: String,

    /// Articles passing the current filter, in response order.
    ///
    /// Recomputed by `apply_filter()` after filter or lifecycle changes.
    pub filtered_articles: Vec<Article>,

    /// Sentiment-tagged mentions passing the current filter, positive first.
    pub filtered_mentions: Vec<(Sentiment, String)>,

    /// Zero-based selection index into the active list view's filtered rows.
    pub selected_index: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Base URL of the analysis service, from plugin configuration.
    pub endpoint: String,

    /// Pause between cosmetic loading phases, in milliseconds.
    pub phase_interval_ms: u64,

    /// Sequence counter; the tag of the most recently issued request.
    seq: u64,
}

impl AppState {
    /// Creates a new application state in the idle lifecycle.
    ///
    /// # Parameters
    ///
    /// * `endpoint` - Analysis service base URL
    /// * `phase_interval_ms` - Cosmetic phase pause duration
    /// * `theme` - Color scheme for UI rendering
    #[must_use]
    pub fn new(endpoint: String, phase_interval_ms: u64, theme: Theme) -> Self {
        Self {
            query: String::new(),
            request: RequestState::Idle,
            input_mode: InputMode::Query,
            view_mode: ViewMode::Overview,
            filter_query: String::new(),
            filtered_articles: vec![],
            filtered_mentions: vec![],
            selected_index: 0,
            theme,
            endpoint,
            phase_interval_ms,
            seq: 0,
        }
    }

    /// Transitions into `Loading` for a freshly tagged request.
    ///
    /// Destroys the previous result or error, resets the filter and selection,
    /// and returns the new sequence tag the request must carry. Submitting while
    /// a request is in flight advances the tag, which is what supersedes the
    /// older request: its completion will no longer match.
    pub fn begin_search(&mut self) -> u64 {
        self.seq += 1;
        self.request = RequestState::Loading {
            seq: self.seq,
            phase: LoadingPhase::Searching,
        };
        self.filter_query.clear();
        self.filtered_articles.clear();
        self.filtered_mentions.clear();
        self.selected_index = 0;
        self.seq
    }

    /// Transitions into `Success` with a decoded analysis.
    ///
    /// Switches to browsing the Overview and rebuilds the filter caches.
    pub fn complete_search(&mut self, analysis: AnalysisResult) {
        self.request = RequestState::Success { analysis };
        self.input_mode = InputMode::Browse;
        self.view_mode = ViewMode::Overview;
        self.selected_index = 0;
        self.apply_filter();
    }

    /// Transitions into `Error` with a user-facing message.
    ///
    /// Returns focus to the query bar so the topic can be edited and resubmitted
    /// immediately.
    pub fn fail_search(&mut self, message: String) {
        self.request = RequestState::Error { message };
        self.input_mode = InputMode::Query;
        self.filtered_articles.clear();
        self.filtered_mentions.clear();
        self.selected_index = 0;
    }

    /// Timer delay between cosmetic phase advances, in seconds.
    #[must_use]
    pub fn phase_delay(&self) -> f64 {
        self.phase_interval_ms as f64 / 1000.0
    }

    /// Number of rows in the currently active list view.
    #[must_use]
    pub fn active_row_count(&self) -> usize {
        match self.view_mode {
            ViewMode::Overview => 0,
            ViewMode::Articles => self.filtered_articles.len(),
            ViewMode::Mentions => self.filtered_mentions.len(),
        }
    }

    /// Moves selection down by one row, wrapping to the top at the end.
    ///
    /// No-op when the active view has no rows (including the Overview).
    pub fn move_selection_down(&mut self) {
        let count = self.active_row_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves selection up by one row, wrapping to the bottom at the start.
    pub fn move_selection_up(&mut self) {
        let count = self.active_row_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Rebuilds the filtered article and mention caches from the loaded analysis.
    ///
    /// Tokenizes the filter query by whitespace; every token must fuzzy-match
    /// (articles match on their title, mentions on the quote text). With no
    /// analysis loaded or an empty filter the caches mirror the payload
    /// unchanged. Clamps the selection to the new bounds.
    pub fn apply_filter(&mut self) {
        use fuzzy_matcher::FuzzyMatcher;

        let _span = tracing::debug_span!(
            "apply_filter",
            filter_len = self.filter_query.len(),
            view_mode = ?self.view_mode
        )
        .entered();

        let Some(analysis) = self.request.analysis() else {
            self.filtered_articles = vec![];
            self.filtered_mentions = vec![];
            self.selected_index = 0;
            return;
        };

        let tokens: Vec<String> = self
            .filter_query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        let matcher = if tokens.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let passes = |text: &str| {
            matcher.as_ref().map_or(true, |m| {
                let lower = text.to_lowercase();
                tokens.iter().all(|token| m.fuzzy_match(&lower, token).is_some())
            })
        };

        let filtered_articles: Vec<Article> = analysis
            .articles
            .iter()
            .filter(|article| passes(&article.title))
            .cloned()
            .collect();

        let filtered_mentions: Vec<(Sentiment, String)> = analysis
            .mentions
            .tagged()
            .filter(|(_, quote)| passes(quote))
            .map(|(sentiment, quote)| (sentiment, quote.to_string()))
            .collect();

        self.filtered_articles = filtered_articles;
        self.filtered_mentions = filtered_mentions;

        let count = self.active_row_count();
        if count == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(count - 1);
        }

        tracing::debug!(
            articles = self.filtered_articles.len(),
            mentions = self.filtered_mentions.len(),
            "filter applied"
        );
    }

    /// Computes a renderable UI view model from current state and terminal size.
    ///
    /// The body content derives from the lifecycle value: idle and empty states
    /// produce a centered message, loading and error produce a status line, and
    /// a loaded analysis produces the chart (Overview) or a windowed list
    /// (Articles/Mentions) with filter highlight ranges.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let mut vm = UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            query_bar: self.compute_query_bar(),
            filter_bar: self.compute_filter_bar(),
            status: None,
            chart: None,
            list_kind: None,
            list_items: vec![],
            selected_index: 0,
            source_line: None,
            empty_state: None,
        };

        match &self.request {
            RequestState::Idle => {
                vm.empty_state = Some(EmptyState {
                    message: "Search a topic to analyze".to_string(),
                    subtitle: "Type a topic and press Enter".to_string(),
                });
            }
            RequestState::Loading { phase, .. } => {
                vm.status = Some(StatusLine {
                    kind: StatusKind::Loading,
                    message: phase.label().to_string(),
                    hint: format!("Fetching coverage for \"{}\"", self.query.trim()),
                });
            }
            RequestState::Error { message } => {
                vm.status = Some(StatusLine {
                    kind: StatusKind::Error,
                    message: message.clone(),
                    hint: "Edit the topic and press Enter to retry".to_string(),
                });
            }
            RequestState::Success { analysis } => match self.view_mode {
                ViewMode::Overview => {
                    vm.chart = Some(Self::compute_chart(analysis, cols));
                }
                ViewMode::Articles | ViewMode::Mentions => {
                    self.fill_list_view(&mut vm, rows, cols);
                }
            },
        }

        vm
    }

    /// Builds the sentiment chart with bar widths proportional to counts.
    ///
    /// The widest bar fills the width budget; every other bar scales linearly
    /// against the largest count. Zero counts produce zero-width bars, so an
    /// all-empty payload still renders three labeled zero rows.
    fn compute_chart(analysis: &AnalysisResult, cols: usize) -> ChartInfo {
        let budget = cols
            .saturating_sub(CHART_LABEL_WIDTH + CHART_COUNT_WIDTH + 2 * SAFETY_MARGIN)
            .max(10);

        let max_count = Sentiment::ALL
            .iter()
            .map(|&sentiment| analysis.mentions.count(sentiment))
            .max()
            .unwrap_or(0);

        let rows = Sentiment::ALL
            .iter()
            .map(|&sentiment| {
                let count = analysis.mentions.count(sentiment);
                let bar_cells = if max_count == 0 {
                    0
                } else {
                    count * budget / max_count
                };
                ChartRow {
                    sentiment,
                    label: sentiment.label(),
                    count,
                    bar_cells,
                }
            })
            .collect();

        ChartInfo {
            rows,
            total: analysis.mentions.total(),
        }
    }

    /// Populates the view model with the windowed rows of the active list view.
    fn fill_list_view(&self, vm: &mut UIViewModel, rows: usize, cols: usize) {
        let total = self.active_row_count();
        if total == 0 {
            vm.empty_state = Some(self.compute_list_empty_state());
            return;
        }

        vm.list_kind = Some(match self.view_mode {
            ViewMode::Mentions => ListKind::Mentions,
            _ => ListKind::Articles,
        });

        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(total);

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && total >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let matcher = if self.filter_query.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        vm.list_items = (visible_start..visible_end)
            .map(|absolute_idx| self.compute_list_item(absolute_idx, cols, matcher.as_ref()))
            .collect();

        vm.selected_index = self.selected_index.saturating_sub(visible_start);

        if self.view_mode == ViewMode::Articles {
            vm.source_line = self
                .filtered_articles
                .get(self.selected_index)
                .map(|article| article.url.clone());
        }
    }

    /// Message shown when the active list view has no rows.
    fn compute_list_empty_state(&self) -> EmptyState {
        if self.filter_query.is_empty() {
            match self.view_mode {
                ViewMode::Articles => EmptyState {
                    message: "No articles were scraped".to_string(),
                    subtitle: "The analysis returned no source documents".to_string(),
                },
                _ => EmptyState {
                    message: "No mentions were found".to_string(),
                    subtitle: "The analysis returned no quotes".to_string(),
                },
            }
        } else {
            EmptyState {
                message: "No rows match the filter".to_string(),
                subtitle: "Press Esc to clear the filter".to_string(),
            }
        }
    }

    /// Builds one display row of the active list view.
    fn compute_list_item(
        &self,
        absolute_idx: usize,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> ListItem {
        let is_selected = absolute_idx == self.selected_index;
        let detail_width = cols.saturating_sub(TEXT_COLUMN_WIDTH + SAFETY_MARGIN);

        let (raw_text, detail, sentiment) = match self.view_mode {
            ViewMode::Mentions => {
                let (sentiment, quote) = &self.filtered_mentions[absolute_idx];
                (quote.clone(), String::new(), Some(*sentiment))
            }
            _ => {
                let article = &self.filtered_articles[absolute_idx];
                (
                    article.title.clone(),
                    truncate_chars(&article.summary, detail_width),
                    None,
                )
            }
        };

        let highlight_ranges =
            matcher.map_or_else(Vec::new, |m| self.compute_highlight_ranges(&raw_text, m));

        ListItem {
            text: truncate_chars(&raw_text, TEXT_COLUMN_WIDTH.saturating_sub(SAFETY_MARGIN)),
            detail,
            sentiment,
            is_selected,
            highlight_ranges,
        }
    }

    /// Computes character index ranges to highlight for filter matches.
    ///
    /// Uses the Skim fuzzy matcher to find matching character positions, then
    /// coalesces consecutive indices into `(start, end)` ranges (exclusive end)
    /// for efficient highlighting.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        if let Some((_score, indices)) = matcher.fuzzy_indices(text, &self.filter_query) {
            let mut ranges = Vec::new();
            let mut start = None;
            let mut prev = None;

            for &idx in &indices {
                match (start, prev) {
                    (None, _) => {
                        start = Some(idx);
                        prev = Some(idx);
                    }
                    (Some(_), Some(p)) if idx == p + 1 => {
                        prev = Some(idx);
                    }
                    (Some(s), Some(p)) => {
                        ranges.push((s, p + 1));
                        start = Some(idx);
                        prev = Some(idx);
                    }
                    _ => {}
                }
            }

            if let (Some(s), Some(p)) = (start, prev) {
                ranges.push((s, p + 1));
            }

            ranges
        } else {
            vec![]
        }
    }

    /// Computes header text from the lifecycle state and active view.
    fn compute_header(&self) -> HeaderInfo {
        let title = match &self.request {
            RequestState::Success { analysis } => {
                let count = match self.view_mode {
                    ViewMode::Overview => analysis.mentions.total(),
                    ViewMode::Articles => self.filtered_articles.len(),
                    ViewMode::Mentions => self.filtered_mentions.len(),
                };
                format!(" {} - {} ({}) ", analysis.name, self.view_mode.title(), count)
            }
            RequestState::Loading { .. } => format!(" Zentiment - {} ", self.query.trim()),
            _ => " Zentiment ".to_string(),
        };
        HeaderInfo { title }
    }

    /// Computes footer keybinding hints for the current mode combination.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.view_mode) {
            (InputMode::Query, _) => {
                if self.request.is_loading() {
                    "Analyzing...  Enter: restart with current topic".to_string()
                } else {
                    "Type a topic  Enter: analyze  Esc: browse results".to_string()
                }
            }
            (InputMode::Filter(FilterFocus::Typing), _) => {
                "ESC: clear filter  Enter: navigate rows  Type to filter".to_string()
            }
            (InputMode::Filter(FilterFocus::Navigating), _) => {
                "ESC: clear filter  f: edit filter  j/k: navigate".to_string()
            }
            (InputMode::Browse, ViewMode::Overview) => {
                "a: articles  m: mentions  Tab: next view  /: topic  q: quit".to_string()
            }
            (InputMode::Browse, ViewMode::Articles) => {
                "j/k: scroll  f: filter  o: overview  m: mentions  /: topic  q: quit".to_string()
            }
            (InputMode::Browse, ViewMode::Mentions) => {
                "j/k: scroll  f: filter  o: overview  a: articles  /: topic  q: quit".to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Query bar state, present while editing or submitting a topic.
    fn compute_query_bar(&self) -> Option<QueryBarInfo> {
        if self.input_mode == InputMode::Query {
            Some(QueryBarInfo {
                query: self.query.clone(),
                submitting: self.request.is_loading(),
            })
        } else {
            None
        }
    }

    /// Filter bar state, present while filter mode is active.
    fn compute_filter_bar(&self) -> Option<FilterBarInfo> {
        if matches!(self.input_mode, InputMode::Filter(_)) {
            Some(FilterBarInfo {
                filter: self.filter_query.clone(),
            })
        } else {
            None
        }
    }

    /// Rows available for list content after subtracting UI chrome.
    ///
    /// Accounts for the blank top line, header, borders, column header row, and
    /// footer. The query or filter box costs three further rows when visible;
    /// the Articles source line costs two.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let chrome = match self.input_mode {
            InputMode::Browse => 6,
            InputMode::Query | InputMode::Filter(_) => 9,
        };
        let source_line = match self.view_mode {
            ViewMode::Articles => 2,
            _ => 0,
        };
        total_rows.saturating_sub(chrome + source_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mentions;

    fn loaded_state(positive: usize, neutral: usize, negative: usize) -> AppState {
        let mut state = AppState::new("http://localhost:8000".to_string(), 650, Theme::default());
        state.query = "rust".to_string();
        state.begin_search();
        state.complete_search(AnalysisResult {
            name: "rust".to_string(),
            articles: vec![Article {
                title: "Rust keeps climbing".to_string(),
                url: "https://example.com/rust".to_string(),
                text: "Long form text".to_string(),
                summary: "A short summary".to_string(),
            }],
            mentions: Mentions {
                positive: (0..positive).map(|i| format!("good {i}")).collect(),
                neutral: (0..neutral).map(|i| format!("meh {i}")).collect(),
                negative: (0..negative).map(|i| format!("bad {i}")).collect(),
            },
        });
        state
    }

    #[test]
    fn chart_bars_scale_proportionally_to_counts() {
        let state = loaded_state(5, 1, 0);
        let vm = state.compute_viewmodel(24, 80);

        let chart = vm.chart.unwrap();
        assert_eq!(chart.total, 6);

        // Width budget at 80 cols is 60 cells: 5 mentions fill it, 1 mention
        // gets exactly a fifth, 0 mentions get nothing.
        assert_eq!(chart.rows[0].count, 5);
        assert_eq!(chart.rows[0].bar_cells, 60);
        assert_eq!(chart.rows[1].bar_cells, 12);
        assert_eq!(chart.rows[2].bar_cells, 0);
        assert_eq!(chart.rows[0].bar_cells / chart.rows[1].bar_cells, 5);
    }

    #[test]
    fn empty_payload_renders_zero_counts_without_error() {
        let state = loaded_state(0, 0, 0);
        let vm = state.compute_viewmodel(24, 80);

        let chart = vm.chart.unwrap();
        assert_eq!(chart.total, 0);
        for row in &chart.rows {
            assert_eq!(row.count, 0);
            assert_eq!(row.bar_cells, 0);
        }
        assert!(vm.status.is_none());
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn rendered_counts_equal_input_sequence_lengths() {
        let state = loaded_state(3, 2, 4);
        let analysis = state.request.analysis().unwrap().clone();
        let vm = state.compute_viewmodel(24, 80);

        let chart = vm.chart.unwrap();
        assert_eq!(chart.rows[0].count, analysis.mentions.positive.len());
        assert_eq!(chart.rows[1].count, analysis.mentions.neutral.len());
        assert_eq!(chart.rows[2].count, analysis.mentions.negative.len());
    }

    #[test]
    fn filter_narrows_mentions_and_marks_highlights() {
        let mut state = loaded_state(2, 1, 1);
        state.view_mode = ViewMode::Mentions;
        state.input_mode = InputMode::Filter(FilterFocus::Typing);
        state.filter_query = "bad".to_string();
        state.apply_filter();

        assert_eq!(state.filtered_mentions.len(), 1);
        assert_eq!(state.filtered_mentions[0].0, Sentiment::Negative);

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.list_items.len(), 1);
        assert!(!vm.list_items[0].highlight_ranges.is_empty());
        assert_eq!(vm.list_items[0].sentiment, Some(Sentiment::Negative));
    }

    #[test]
    fn filter_with_no_matches_shows_empty_state_and_resets_selection() {
        let mut state = loaded_state(2, 0, 0);
        state.view_mode = ViewMode::Mentions;
        state.selected_index = 1;
        state.filter_query = "zzzz".to_string();
        state.apply_filter();

        assert_eq!(state.selected_index, 0);
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.list_items.is_empty());
        assert_eq!(vm.empty_state.unwrap().message, "No rows match the filter");
    }

    #[test]
    fn articles_view_carries_the_selected_source_url() {
        let mut state = loaded_state(1, 0, 0);
        state.view_mode = ViewMode::Articles;
        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.list_kind, Some(ListKind::Articles));
        assert_eq!(vm.list_items.len(), 1);
        assert_eq!(vm.list_items[0].text, "Rust keeps climbing");
        assert_eq!(vm.source_line.as_deref(), Some("https://example.com/rust"));
    }

    #[test]
    fn empty_article_list_renders_the_empty_state() {
        let mut state = loaded_state(0, 0, 0);
        if let RequestState::Success { analysis } = &mut state.request {
            analysis.articles.clear();
        }
        state.apply_filter();
        state.view_mode = ViewMode::Articles;

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.list_items.is_empty());
        assert!(vm.source_line.is_none());
        assert_eq!(vm.empty_state.unwrap().message, "No articles were scraped");
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = loaded_state(3, 0, 0);
        state.view_mode = ViewMode::Mentions;

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn begin_search_destroys_previous_result_and_advances_seq() {
        let mut state = loaded_state(1, 1, 1);
        assert!(state.request.analysis().is_some());

        let first = state.request.in_flight_seq();
        let seq = state.begin_search();

        assert!(first.is_none());
        assert_eq!(state.request.in_flight_seq(), Some(seq));
        assert!(state.request.analysis().is_none());
        assert!(state.filtered_mentions.is_empty());
    }
}
