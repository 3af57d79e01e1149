//! Input and view mode state types for the application.
//!
//! This module defines the state machine enums that control user interaction
//! modes and result views. These types determine which keybindings are active,
//! how typed characters are routed, and which slice of the analysis is displayed.
//!
//! # State Machine
//!
//! The application operates in one of three input modes:
//! - **Query**: Editing the topic in the query bar (the entry point)
//! - **Browse**: Navigating the rendered analysis
//! - **Filter**: Narrowing the article/mention lists, with typing or navigating focus
//!
//! View modes select what part of a successful analysis is shown:
//! - **Overview**: Mention counts with the sentiment bar chart
//! - **Articles**: Scraped articles with summaries
//! - **Mentions**: Sentiment-tagged quotes

/// Focus state within filter mode.
///
/// Determines whether filter input is being typed or the narrowed results are
/// being navigated. Controls which keybindings are active while filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFocus {
    /// User is typing in the filter input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating the filtered rows with the filter retained.
    ///
    /// Accepts j/k for movement and f to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and where typed characters land.
/// Determines the displayed footer text and whether the query or filter bar
/// is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Topic entry mode; characters edit the search query.
    ///
    /// Enter submits the query, Esc returns to browsing when an analysis is
    /// already on screen.
    Query,

    /// Result navigation mode.
    ///
    /// Available keybindings: j/k (scroll), Tab/o/a/m (switch views),
    /// / (edit topic), f (filter), q (quit).
    Browse,

    /// Active filter mode with focus state.
    ///
    /// Contains a [`FilterFocus`] variant indicating whether the user is typing
    /// or navigating the narrowed rows. Only reachable from the Articles and
    /// Mentions views.
    Filter(FilterFocus),
}

/// View selecting which slice of a successful analysis is displayed.
///
/// Changes the header title, the rendered body, and the available actions.
/// Has no effect while no analysis is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Mention counts per sentiment category with the bar chart.
    Overview,

    /// Scraped articles with title, summary, and source URL.
    Articles,

    /// Individual quotes tagged with their sentiment category.
    Mentions,
}

impl ViewMode {
    /// Cycles to the next view in Tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Overview => Self::Articles,
            Self::Articles => Self::Mentions,
            Self::Mentions => Self::Overview,
        }
    }

    /// Header label for the view.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Articles => "Articles",
            Self::Mentions => "Mentions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_cycle_covers_all_views_and_wraps() {
        let mut view = ViewMode::Overview;
        let mut seen = vec![];
        for _ in 0..3 {
            seen.push(view);
            view = view.next();
        }
        assert_eq!(view, ViewMode::Overview);
        assert_eq!(seen, vec![ViewMode::Overview, ViewMode::Articles, ViewMode::Mentions]);
    }
}
