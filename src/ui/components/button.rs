//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    accent: Option<Color>,
) {
    let selected_color = accent.unwrap_or(Color::Cyan);

    let border_style = if is_selected {
        Style::default().fg(selected_color)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(selected_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render an action panel button, marking the selected one
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    accent: Option<Color>,
) {
    let marker = if is_selected { "▸" } else { " " };
    let content = format!("{marker} {label}");
    render_button(frame, area, &content, is_selected, accent);
}
