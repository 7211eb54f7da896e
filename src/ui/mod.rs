//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::Dialog;
use components::{render_error_dialog, render_success_dialog, render_terms_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    forms::draw_appointment_form(frame, main_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Dialogs render on top of everything
    match &app.state.dialog {
        Some(Dialog::Errors(messages)) => render_error_dialog(frame, messages),
        Some(Dialog::Success(rows)) => render_success_dialog(frame, rows),
        Some(Dialog::Terms) => render_terms_dialog(frame),
        None => {}
    }
}
