//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render the list of validation messages, one per line
pub fn render_error_dialog(frame: &mut Frame, messages: &[String]) {
    let message = messages
        .iter()
        .map(|m| format!("• {m}"))
        .collect::<Vec<_>>()
        .join("\n");

    render_dialog(
        frame,
        DialogConfig {
            title: "Revise el formulario",
            title_color: Color::Red,
            border_color: Color::Red,
            message: &message,
            max_width: 72,
            ..Default::default()
        },
    );
}
