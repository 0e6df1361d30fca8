//! Testimonials section: one slide at a time with dot indicators

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
        .title(" What Our Members Say ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(testimonial) = content::TESTIMONIALS.get(app.state.carousel.active()) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Top padding (flex)
            Constraint::Length(4), // Quote
            Constraint::Length(2), // Author
            Constraint::Length(1), // Dots
            Constraint::Min(0),    // Bottom padding (flex)
        ])
        .margin(1)
        .split(inner);

    let quote = Paragraph::new(Line::from(Span::styled(
        format!("\u{201c}{}\u{201d}", testimonial.quote),
        Style::default().add_modifier(Modifier::ITALIC),
    )))
    .wrap(Wrap { trim: true })
    .centered();
    frame.render_widget(quote, chunks[1]);

    let author = Paragraph::new(Line::from(vec![
        Span::styled(
            testimonial.author,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", testimonial.detail),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .centered();
    frame.render_widget(author, chunks[2]);

    // Dot per slide, filled for the active one
    let dots: Vec<Span> = (0..app.state.carousel.len())
        .map(|i| {
            if i == app.state.carousel.active() {
                Span::styled("● ", Style::default().fg(Color::Green))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(dots)).centered(), chunks[3]);
}
