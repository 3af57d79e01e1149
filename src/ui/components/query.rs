//! Query and filter input box renderers.
//!
//! Renders the bordered three-line input boxes: the topic box shown while the
//! user edits or submits a search, and the filter box shown while narrowing the
//! article/mention lists. Both share the same frame layout.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FilterBarInfo, QueryBarInfo};

/// Horizontal margin for the input boxes (spaces on left and right).
const INPUT_BOX_MARGIN: usize = 5;

/// Renders the topic input box at the specified row.
///
/// Displays a 3-line bordered box containing the topic text. While a request is
/// in flight the label dims to show the submit control as disabled; the
/// disabling is visual only, and pressing Enter still supersedes the request.
///
/// # Returns
///
/// The next available row position (row + 3).
pub fn render_query_bar(row: usize, query: &QueryBarInfo, theme: &Theme, cols: usize) -> usize {
    let label = if query.submitting {
        " Topic (analyzing...): "
    } else {
        " Topic: "
    };
    render_input_box(row, label, &query.query, query.submitting, theme, cols)
}

/// Renders the filter input box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3).
pub fn render_filter_bar(row: usize, filter: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    render_input_box(row, " Filter: ", &filter.filter, false, theme, cols)
}

/// Shared bordered input box frame.
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Label: content  │ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
fn render_input_box(
    row: usize,
    label: &str,
    content: &str,
    dimmed: bool,
    theme: &Theme,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let text = format!("{label}{content}");
    let padding = inner_width.saturating_sub(text.len());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    if dimmed {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
