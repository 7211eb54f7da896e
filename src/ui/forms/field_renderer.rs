//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Border and title for a field; invalid fields turn red and carry their message
fn field_block<'a>(label: &'a str, is_active: bool, error: Option<&'a str>) -> Block<'a> {
    let border_style = match (error, is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    block
}

/// Draw a text field with its current value
pub fn draw_field_with_value(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
        // `lines()` drops a trailing newline; keep the cursor on the new line
        if value.ends_with('\n') {
            lines.push(Line::from(""));
        }
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    frame.render_widget(
        content
            .wrap(Wrap { trim: false })
            .block(field_block(label, is_active, error)),
        area,
    );
}

/// Draw a field whose content is already styled (choices, checkboxes)
pub fn draw_field_spans(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    spans: Vec<Span>,
    is_active: bool,
    error: Option<&str>,
) {
    let content = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false });
    frame.render_widget(content.block(field_block(label, is_active, error)), area);
}

/// Draw a field the user cannot edit
pub fn draw_read_only_field(frame: &mut Frame, area: Rect, label: &str, value: &str, hint: &str) {
    let content = if value.is_empty() {
        Span::styled(
            hint,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(value, Style::default().fg(Color::Gray))
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}

/// Checkbox marker followed by its label
pub fn checkbox<'a>(label: &'a str, checked: bool, highlighted: bool) -> Vec<Span<'a>> {
    let marker = if checked { "[x] " } else { "[ ] " };
    let style = if highlighted {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::REVERSED)
    } else if checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    vec![Span::styled(marker, style), Span::styled(label, style)]
}

/// Radio marker followed by its label
pub fn radio<'a>(label: &'a str, selected: bool, is_active: bool) -> Vec<Span<'a>> {
    let marker = if selected { "(•) " } else { "( ) " };
    let style = match (selected, is_active) {
        (true, true) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        (true, false) => Style::default().add_modifier(Modifier::BOLD),
        (false, _) => Style::default().fg(Color::DarkGray),
    };
    vec![Span::styled(marker, style), Span::styled(label, style)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_checkbox_markers() {
        assert_eq!(text(&checkbox("Miopía", true, false)), "[x] Miopía");
        assert_eq!(text(&checkbox("Miopía", false, true)), "[ ] Miopía");
    }

    #[test]
    fn test_highlighted_checkbox_is_reversed() {
        let spans = checkbox("Miopía", false, true);
        assert!(spans[0].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_radio_markers() {
        assert_eq!(text(&radio("Gafas", true, false)), "(•) Gafas");
        assert_eq!(text(&radio("Lentillas", false, false)), "( ) Lentillas");
    }
}
