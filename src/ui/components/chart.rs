//! Sentiment bar chart renderer.
//!
//! Renders the Overview body: one horizontal bar per sentiment category, bar
//! length proportional to the category's mention count, followed by a dimmed
//! total line. Bar widths arrive pre-computed in the view model; this module
//! only paints cells.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ChartInfo;

/// Width of the label column, matching the view model's chart budget.
const LABEL_WIDTH: usize = 10;

/// Renders the sentiment chart starting at the specified row.
///
/// Layout per category row:
///
/// ```text
/// Positive  ██████████████████████ 5
/// Neutral   ████ 1
/// Negative   0
/// ```
///
/// Zero-count categories render their label and count with no bar, so an
/// all-empty analysis still shows three zero rows rather than a blank body.
///
/// # Returns
///
/// The next available row position.
pub fn render_chart(row: usize, chart: &ChartInfo, theme: &Theme) -> usize {
    let mut current_row = row + 1;

    for chart_row in &chart.rows {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(2));
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{:<width$}", chart_row.label, width = LABEL_WIDTH);

        let color = theme.colors.sentiment(chart_row.sentiment);
        print!("{}", Theme::fg(color));
        print!("{}", "█".repeat(chart_row.bar_cells));

        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!(" {}", chart_row.count);
        print!("{}", Theme::reset());

        current_row += 2;
    }

    position_cursor(current_row, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  {} mentions total", chart.total);
    print!("{}", Theme::reset());

    current_row + 1
}
