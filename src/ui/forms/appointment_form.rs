//! Appointment request form rendering

use super::field_renderer::{
    checkbox, draw_field_spans, draw_field_with_value, draw_read_only_field, radio,
};
use crate::app::App;
use crate::state::forms::{message_for, FieldKey, ProductType, DATE_FORMAT};
use crate::state::FormButton;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

/// Draw the form with its action panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(22), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Message to show under a field, once it should be visible
fn error_for(app: &App, key: FieldKey) -> Option<String> {
    let form = app.controller.form();
    form.is_field_invalid(key)
        .then(|| message_for(&form.field(key).errors))
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.state.is_action_panel_focused() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Solicitud de cita ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    // Contact details on the left
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Phone
            Constraint::Length(3), // Postal code
            Constraint::Length(3), // Province
            Constraint::Min(0),
        ])
        .split(columns[0]);

    // Appointment details on the right
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Product type
            Constraint::Length(4), // Conditions
            Constraint::Length(3), // Desired date
            Constraint::Min(4),    // Comments
            Constraint::Length(3), // Accept terms
        ])
        .split(columns[1]);

    for (key, area) in [
        (FieldKey::Name, left[0]),
        (FieldKey::Email, left[1]),
        (FieldKey::Phone, left[2]),
        (FieldKey::PostalCode, left[3]),
    ] {
        draw_text_field(frame, area, app, key, false);
    }

    draw_read_only_field(
        frame,
        left[4],
        FieldKey::Province.label(),
        app.controller.form().value(FieldKey::Province).as_text(),
        "Se rellena con el código postal",
    );

    draw_product_type(frame, right[0], app);
    draw_conditions(frame, right[1], app);
    draw_desired_date(frame, right[2], app);
    draw_text_field(frame, right[3], app, FieldKey::Comments, true);
    draw_accept_terms(frame, right[4], app);
}

fn draw_text_field(frame: &mut Frame, area: Rect, app: &App, key: FieldKey, multiline: bool) {
    let error = error_for(app, key);
    draw_field_with_value(
        frame,
        area,
        key.label(),
        app.controller.form().value(key).as_text(),
        app.state.is_focused(key),
        multiline,
        error.as_deref(),
    );
}

fn draw_desired_date(frame: &mut Frame, area: Rect, app: &App) {
    let key = FieldKey::DesiredDate;
    let is_active = app.state.is_focused(key);
    let value = app.controller.form().value(key).as_text();
    let error = error_for(app, key);

    if value.is_empty() && !is_active {
        let hint = match app.controller.min_date() {
            Some(date) => format!("AAAA-MM-DD, desde {}", date.format(DATE_FORMAT)),
            None => "AAAA-MM-DD".to_string(),
        };
        let spans = vec![Span::styled(hint, Style::default().fg(Color::DarkGray))];
        draw_field_spans(frame, area, key.label(), spans, false, error.as_deref());
    } else {
        draw_field_with_value(
            frame,
            area,
            key.label(),
            value,
            is_active,
            false,
            error.as_deref(),
        );
    }
}

fn draw_product_type(frame: &mut Frame, area: Rect, app: &App) {
    let key = FieldKey::ProductType;
    let is_active = app.state.is_focused(key);
    let current = app.controller.form().value(key).as_choice();

    let mut spans = Vec::new();
    for product in [ProductType::Glasses, ProductType::ContactLenses] {
        spans.extend(radio(
            product.display_name(),
            current == Some(product),
            is_active,
        ));
        spans.push(Span::raw("  "));
    }

    let error = error_for(app, key);
    draw_field_spans(frame, area, key.label(), spans, is_active, error.as_deref());
}

fn draw_conditions(frame: &mut Frame, area: Rect, app: &App) {
    let key = FieldKey::Conditions;
    let is_active = app.state.is_focused(key);
    let selected = app.controller.form().value(key).as_selection();

    let mut spans = Vec::new();
    for (idx, label) in app.controller.reference().conditions().iter().enumerate() {
        let checked = selected.iter().any(|s| s == label);
        let highlighted = is_active && idx == app.state.condition_cursor;
        spans.extend(checkbox(label, checked, highlighted));
        spans.push(Span::raw("  "));
    }

    let error = error_for(app, key);
    draw_field_spans(frame, area, key.label(), spans, is_active, error.as_deref());
}

fn draw_accept_terms(frame: &mut Frame, area: Rect, app: &App) {
    let key = FieldKey::AcceptTerms;
    let is_active = app.state.is_focused(key);
    let accepted = app.controller.form().value(key).as_bool();

    let spans = checkbox("Acepto las condiciones del servicio", accepted, is_active);
    let error = error_for(app, key);
    draw_field_spans(frame, area, key.label(), spans, is_active, error.as_deref());
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.is_action_panel_focused();
    let selected = app.state.selected_button();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Acciones ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Length(BUTTON_HEIGHT), // Terms
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    for (idx, button) in FormButton::ALL.into_iter().enumerate() {
        let accent = match button {
            FormButton::Submit => Color::Green,
            FormButton::Reset => Color::Yellow,
            FormButton::Terms => Color::Blue,
        };
        render_action_button(
            frame,
            button_chunks[idx],
            button.label(),
            is_focused && selected == button,
            Some(accent),
        );
    }
}
