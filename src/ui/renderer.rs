//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point: it computes the view
//! model from application state and hands it to the frame layout in
//! [`crate::ui::components`]. All rendering is ANSI output to stdout, as the
//! Zellij plugin contract expects.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Computes the view model for the current terminal dimensions and delegates to
/// the frame renderer. Does not clear the screen or manage cursor visibility;
/// the host handles both.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_frame(&viewmodel, &state.theme, cols, rows);
}
