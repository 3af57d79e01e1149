//! Status and empty state renderers.
//!
//! Renders the centered two-line messages used for every non-list body: the
//! loading phase label while a request is in flight, the error message after a
//! failure, and the idle / no-results prompts.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, StatusKind, StatusLine};

/// Renders the loading or error status line starting at the specified row.
///
/// The primary message is centered and colored by kind (loading or error); the
/// hint below it is dimmed. A blank line separates the two.
///
/// # Returns
///
/// The next available row position.
pub fn render_status(row: usize, status: &StatusLine, theme: &Theme, cols: usize) -> usize {
    let color = match status.kind {
        StatusKind::Loading => &theme.colors.loading_fg,
        StatusKind::Error => &theme.colors.error_fg,
    };

    render_centered_line(row + 1, &status.message, color, false, cols);
    render_centered_line(row + 3, &status.hint, &theme.colors.text_dim, true, cols);

    row + 4
}

/// Renders the idle or no-results message starting at the specified row.
///
/// # Returns
///
/// The next available row position.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    render_centered_line(row + 1, &empty.message, &theme.colors.empty_state_fg, false, cols);
    render_centered_line(row + 2, &empty.subtitle, &theme.colors.text_dim, true, cols);

    row + 3
}

/// Prints one horizontally centered line, padded to the terminal width.
fn render_centered_line(row: usize, text: &str, color: &str, dimmed: bool, cols: usize) {
    let text_len = text.chars().count().min(cols);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    if dimmed {
        print!("{}", Theme::dim());
    }
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}
