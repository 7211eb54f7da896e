//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT, TERMS_SHORTCUT};
use crate::state::forms::{FieldKey, Phase};
use crate::state::{Dialog, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submit cycle indicator
    let (marker, color) = match app.controller.phase() {
        Phase::Idle => (" ○ ", Color::Gray),
        Phase::Editing => (" ● ", Color::Yellow),
        Phase::SubmittedInvalid => (" ✗ ", Color::Red),
        Phase::SubmittedValid => (" ✓ ", Color::Green),
    };
    spans.push(Span::styled(marker, Style::default().fg(color)));

    let hints = get_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " Esc:salir ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever has focus
fn get_hints(app: &App) -> String {
    if let Some(dialog) = &app.state.dialog {
        return match dialog {
            Dialog::Success(_) => "Enter:nueva cita".to_string(),
            Dialog::Errors(_) | Dialog::Terms => "Enter/Esc:cerrar".to_string(),
        };
    }

    let shortcuts = format!(
        "{SUBMIT_SHORTCUT}:enviar  {RESET_SHORTCUT}:limpiar  {TERMS_SHORTCUT}:condiciones"
    );

    let local = match app.state.focus() {
        Focus::Actions => "j/k:botón  Enter:pulsar",
        Focus::Field(FieldKey::ProductType) => "←/→:cambiar",
        Focus::Field(FieldKey::Conditions) => "←/→:mover  Space:marcar",
        Focus::Field(FieldKey::AcceptTerms) => "Space:marcar",
        Focus::Field(FieldKey::Comments) => "Enter:nueva línea",
        Focus::Field(_) => "Escriba el valor",
    };

    format!("Tab:siguiente  {local}  {shortcuts}")
}
