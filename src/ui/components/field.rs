//! Field rendering for the contact form

use crate::state::Field;
use crate::validate::{CounterSeverity, MESSAGE_LIMIT};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field box
///
/// The border turns red while the field carries an error, cyan while it has
/// focus.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &Field, is_active: bool) {
    let border_style = if field.has_error() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = if field.value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        field.value.clone()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
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
            Span::styled(display_value, value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the error line under a field (blank when the field is clean)
pub fn draw_field_error(frame: &mut Frame, area: Rect, field: &Field) {
    if let Some(error) = field.error {
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, area);
    }
}

/// Draw the live character counter for the message field
pub fn draw_char_counter(frame: &mut Frame, area: Rect, count: usize) {
    let color = match CounterSeverity::for_count(count) {
        CounterSeverity::Normal => Color::DarkGray,
        CounterSeverity::Warning => Color::Yellow,
        CounterSeverity::OverLimit => Color::Red,
    };

    let counter = Paragraph::new(Line::from(Span::styled(
        format!("{count}/{MESSAGE_LIMIT} characters "),
        Style::default().fg(color),
    )))
    .right_aligned();
    frame.render_widget(counter, area);
}
