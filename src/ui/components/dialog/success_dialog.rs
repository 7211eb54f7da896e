//! Confirmation shown after a valid submit

use super::base::{render_dialog, DialogConfig};
use crate::state::forms::SummaryRow;
use ratatui::{style::Color, Frame};

pub fn render_success_dialog(frame: &mut Frame, rows: &[SummaryRow]) {
    let mut message = String::from("Hemos recibido su solicitud de cita:\n");
    for row in rows {
        message.push('\n');
        // Multi-line comments stay on one line in the summary
        let value = row.value.replace('\n', " ");
        message.push_str(&format!("{}: {}", row.label, value));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Cita solicitada",
            title_color: Color::Green,
            border_color: Color::Green,
            message: &message,
            max_width: 72,
            ..Default::default()
        },
    );
}
