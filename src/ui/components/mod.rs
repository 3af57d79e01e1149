//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the different UI
//! elements and the frame layout function that sequences them. Each component
//! renders a specific part of the interface and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar (plugin name or analyzed subject + view)
//! - [`footer`]: Mode-dependent keybinding hints
//! - [`query`]: Bordered topic and filter input boxes
//! - [`chart`]: Sentiment bar chart for the Overview
//! - [`list`]: Article/mention rows with selection and match highlighting
//! - [`status`]: Centered loading/error/idle messages
//!
//! # Frame Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Topic or filter box - 3 lines, when active]
//! [Body: chart | column headers + rows | centered status]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod chart;
mod footer;
mod header;
mod list;
mod query;
mod status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use chart::render_chart;
use footer::render_footer;
use header::render_header;
use list::{render_list_headers, render_list_rows, render_source_line};
use query::{render_filter_bar, render_query_bar};
use status::{render_empty_state, render_status};

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/body, body/footer).
///
/// # Returns
///
/// The next available row position (row + 1).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one complete frame from a view model.
///
/// Sections are chained through a running row counter; the bottom border and
/// footer are pinned to the last two rows regardless of how much body content
/// was painted above them.
pub fn render_frame(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(query) = &vm.query_bar {
        current_row = render_query_bar(current_row, query, theme, cols);
    }
    if let Some(filter) = &vm.filter_bar {
        current_row = render_filter_bar(current_row, filter, theme, cols);
    }

    if let Some(status) = &vm.status {
        let _current_row = render_status(current_row, status, theme, cols);
    } else if let Some(empty) = &vm.empty_state {
        let _current_row = render_empty_state(current_row, empty, theme, cols);
    } else if let Some(chart) = &vm.chart {
        let _current_row = render_chart(current_row, chart, theme);
    } else if let Some(kind) = vm.list_kind {
        current_row = render_list_headers(current_row, kind, theme);
        current_row = render_list_rows(current_row, &vm.list_items, theme, cols);
        if let Some(url) = &vm.source_line {
            let _current_row = render_source_line(current_row, url, theme, cols);
        }
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
