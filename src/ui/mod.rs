//! UI module for rendering the TUI

mod components;
mod contact;
mod faq;
mod home;
mod layout;
mod services;
mod testimonials;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area, status_area) = layout::create_layout(area);

    // Header with section title
    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Services => services::draw(frame, main_area, app),
        View::Testimonials => testimonials::draw(frame, main_area, app),
        View::Faq => faq::draw(frame, main_area, app),
        View::Contact => contact::draw(frame, main_area, app),
    }

    // Status bar: announcements and key help
    layout::draw_status_bar(frame, status_area, app);

    // Overlays
    if app.state.nav.is_open() {
        layout::draw_nav_menu(frame, app);
    }
    if let Some(notice) = &app.state.success_notice {
        components::draw_notice(frame, notice);
    }
}
