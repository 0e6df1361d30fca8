//! FAQ section: independently expandable questions

use crate::app::App;
use crate::content;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    for (i, item) in content::FAQ.iter().enumerate() {
        let expanded = app.state.faq.is_expanded(i);
        let selected = app.state.faq.selected() == i;

        let marker = if expanded { "▾" } else { "▸" };
        let question_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(Span::styled(
            format!("{marker} {}", item.question),
            question_style,
        )));

        if expanded {
            lines.push(Line::from(Span::styled(
                format!("    {}", item.answer),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
    }

    let list = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll.offset(), 0))
        .block(
            Block::default()
                .title(" Frequently Asked Questions ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(list, area);
}
