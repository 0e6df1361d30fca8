//! Layout components (header, navigation menu, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Split the screen into header, content, and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header line with brand and section title
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " FITLIFE ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.state.current_view.label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Esc: menu", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, area);
}

/// Draw the status bar: transient announcement, or key help for the view
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(announcement) = &app.state.announcement {
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {announcement}"),
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(line, area);
        return;
    }

    let help = match app.state.current_view {
        View::Home => " PgUp/PgDn: scroll  q: quit",
        View::Services => " ←/→: switch tab  q: quit",
        View::Testimonials => " ←/→: slide  1-3: jump  q: quit",
        View::Faq => " ↑/↓: select  Enter: expand  q: quit",
        View::Contact => " Tab: next field  Enter: send (on button)  Ctrl+C: quit",
    };
    let line = Paragraph::new(Line::from(Span::styled(
        help,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(line, area);
}

/// Draw the navigation menu overlay
pub fn draw_nav_menu(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let menu_width = 28u16;
    let menu_height = View::ALL.len() as u16 + 4;

    let menu_x = area.x + (area.width.saturating_sub(menu_width)) / 2;
    let menu_y = area.y + (area.height.saturating_sub(menu_height)) / 2;

    let menu_area = Rect {
        x: menu_x,
        y: menu_y,
        width: menu_width.min(area.width),
        height: menu_height.min(area.height),
    };

    // Clear the area behind the menu
    frame.render_widget(Clear, menu_area);

    let mut content = Vec::new();
    for (i, view) in View::ALL.iter().enumerate() {
        let is_selected = i == app.state.nav_index;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        content.push(Line::from(Span::styled(
            format!("{prefix}{} {}", i + 1, view.label()),
            style,
        )));
    }
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" move  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" go  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" close", Style::default().fg(Color::DarkGray)),
    ]));

    let menu = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::new().bg(Color::Black).fg(Color::White));

    frame.render_widget(menu, menu_area);
}
