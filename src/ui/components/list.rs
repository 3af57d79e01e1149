//! List component renderer for the Articles and Mentions views.
//!
//! Renders the windowed result rows as a two-column table. Articles show
//! TITLE and SUMMARY columns; mentions show a colored sentiment tag followed by
//! the quote. Supports selection highlighting and filter match highlighting.

use crate::domain::Sentiment;
use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ListItem, ListKind};

/// Character width of the main text column, matching the view model's layout.
const TEXT_COLUMN_WIDTH: usize = 45;

/// Renders the list column headers at the specified row.
///
/// Headers depend on the list kind: `TITLE`/`SUMMARY` for articles, a blank
/// tag column and `QUOTE` for mentions. Bold with theme header color.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_list_headers(row: usize, kind: ListKind, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    match kind {
        ListKind::Articles => {
            print!("{:<width$} {}", "TITLE", "SUMMARY", width = TEXT_COLUMN_WIDTH);
        }
        ListKind::Mentions => print!("{:<4}{}", "", "QUOTE"),
    }
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all list rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items).
pub fn render_list_rows(row: usize, items: &[ListItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single list row.
///
/// Layout for articles:
///
/// ```text
/// TITLE (45 cols, left-aligned)  SUMMARY (remaining width)
/// ```
///
/// Layout for mentions:
///
/// ```text
/// [+] quote text (sentiment-colored tag)
/// ```
///
/// Styling precedence: selection background, then filter match highlights,
/// then normal text. The row is padded to the full terminal width so the
/// selection background covers the whole line.
fn render_list_row(row: usize, item: &ListItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let mut visual_len = 0;

    if let Some(sentiment) = item.sentiment {
        if !item.is_selected {
            print!("{}", Theme::fg(theme.colors.sentiment(sentiment)));
        }
        print!("{} ", sentiment_tag(sentiment));
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        visual_len += 4;
    }

    if item.highlight_ranges.is_empty() {
        print!("{}", item.text);
    } else {
        helpers::render_highlighted_text(&item.text, &item.highlight_ranges, theme, item.is_selected);
    }
    visual_len += item.text.chars().count();

    if !item.detail.is_empty() {
        let padding = TEXT_COLUMN_WIDTH.saturating_sub(visual_len) + 1;
        print!("{}", " ".repeat(padding));
        if !item.is_selected {
            print!("{}", Theme::dim());
        }
        print!("{}", item.detail);
        if !item.is_selected {
            print!("{}", Theme::reset());
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        visual_len = TEXT_COLUMN_WIDTH + 1 + item.detail.chars().count();
    }

    let padding = cols.saturating_sub(visual_len);
    print!("{}", " ".repeat(padding));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the selected article's source URL below the list.
///
/// Long URLs are truncated from the start so the identifying tail stays
/// visible.
///
/// # Returns
///
/// The next available row position.
pub fn render_source_line(row: usize, url: &str, theme: &Theme, cols: usize) -> usize {
    let max_width = cols.saturating_sub(SOURCE_PREFIX.len() + SAFETY_MARGIN);
    let chars: Vec<char> = url.chars().collect();
    let display_url = if chars.len() > max_width {
        let keep = max_width.saturating_sub(3);
        let tail: String = chars[chars.len().saturating_sub(keep)..].iter().collect();
        format!("...{tail}")
    } else {
        url.to_string()
    };

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{SOURCE_PREFIX}{display_url}");
    print!("{}", Theme::reset());
    row + 2
}

/// Prefix printed before the selected article's URL.
const SOURCE_PREFIX: &str = "  Source: ";

/// Safety margin kept free at the right edge.
const SAFETY_MARGIN: usize = 2;

/// Three-character tag marking a mention's sentiment category.
const fn sentiment_tag(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "[+]",
        Sentiment::Neutral => "[~]",
        Sentiment::Negative => "[-]",
    }
}
