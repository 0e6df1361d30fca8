//! Services section: one tab per program area

use crate::app::App;
use crate::content;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab strip
            Constraint::Min(0),    // Active panel
        ])
        .split(area);

    let titles: Vec<&str> = content::SERVICES.iter().map(|s| s.title).collect();
    let tabs = Tabs::new(titles)
        .select(app.state.tabs.active())
        .block(
            Block::default()
                .title(" Services ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    draw_panel(frame, chunks[1], app);
}

/// Draw the panel for the active tab
fn draw_panel(frame: &mut Frame, area: Rect, app: &App) {
    let Some(service) = content::SERVICES.get(app.state.tabs.active()) else {
        return;
    };

    let mut lines = vec![Line::from(service.blurb), Line::from("")];
    for highlight in service.highlights {
        lines.push(Line::from(format!("  • {highlight}")));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll.offset(), 0))
        .block(
            Block::default()
                .title(format!(" {} ", service.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(panel, area);
}
