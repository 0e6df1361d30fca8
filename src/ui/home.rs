//! Home section

use crate::app::App;
use crate::content;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Welcome ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Headline
            Constraint::Min(0),    // Copy
        ])
        .margin(1)
        .split(inner);

    let headline = Paragraph::new(Line::from(Span::styled(
        content::HOME_HEADLINE,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(headline, chunks[0]);

    let lines: Vec<Line> = content::HOME_LINES
        .iter()
        .map(|l| Line::from(*l))
        .collect();
    let copy = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll.offset(), 0));
    frame.render_widget(copy, chunks[1]);
}
