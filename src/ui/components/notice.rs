//! Transient success notice overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the success notice as a centered overlay
///
/// The notice is scheduled away by the app; there is nothing to press.
pub fn draw_notice(frame: &mut Frame, message: &str) {
    let area = frame.area();

    let notice_width = 46u16.min(area.width);
    let notice_height = 7u16.min(area.height);

    let notice_x = area.x + (area.width.saturating_sub(notice_width)) / 2;
    let notice_y = area.y + (area.height.saturating_sub(notice_height)) / 2;

    let notice_area = Rect {
        x: notice_x,
        y: notice_y,
        width: notice_width,
        height: notice_height,
    };

    // Clear the area behind the notice
    frame.render_widget(Clear, notice_area);

    let content = vec![
        Line::from(Span::styled(
            "Message Sent",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
    ];

    let notice = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::new().bg(Color::Black).fg(Color::White));

    frame.render_widget(notice, notice_area);
}
