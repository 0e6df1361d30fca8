//! Contact form: validated fields, live counter, submit control

use crate::app::App;
use crate::platform;
use crate::ui::components::{
    draw_char_counter, draw_field, draw_field_error, render_button, BUTTON_HEIGHT,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(1), // Name error
            Constraint::Length(3), // Email
            Constraint::Length(1), // Email error
            Constraint::Length(3), // Phone
            Constraint::Length(1), // Phone error
            Constraint::Length(3), // Interest
            Constraint::Length(1), // Interest error
            Constraint::Length(6), // Message
            Constraint::Length(1), // Message error + counter
            Constraint::Length(BUTTON_HEIGHT), // Send button
            Constraint::Length(1), // Help text
            Constraint::Min(0),    // Remaining space
        ])
        .split(inner);

    // Each field box with its error line underneath
    for (i, field) in form.fields.iter().enumerate() {
        let box_area = chunks[i * 2];
        let error_area = chunks[i * 2 + 1];
        let is_active = form.active_field_index == i;

        draw_field(frame, box_area, field, is_active);

        if field.id == "message" {
            // Error on the left, live counter on the right
            let line = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(22)])
                .split(error_area);
            draw_field_error(frame, line[0], field);
            draw_char_counter(frame, line[1], field.char_count());
        } else {
            draw_field_error(frame, error_area, field);
        }
    }

    render_button(
        frame,
        chunks[10],
        form.submit_label(),
        form.is_submit_active(),
        form.submit_enabled(),
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled(platform::SEND_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": send  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": menu"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[11]);
}
