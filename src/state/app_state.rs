//! Application state definitions

use crate::content;
use crate::sched::TaskHandle;
use crate::state::{Accordion, Carousel, ContactForm, Enquiry, NavMenu, ScrollState, TabStrip};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Services,
    Testimonials,
    Faq,
    Contact,
}

impl View {
    /// Navigation order, as shown in the menu
    pub const ALL: [View; 5] = [
        View::Home,
        View::Services,
        View::Testimonials,
        View::Faq,
        View::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Services => "Services",
            View::Testimonials => "Testimonials",
            View::Faq => "FAQ",
            View::Contact => "Contact",
        }
    }
}

/// A submission waiting out its simulated delay
#[derive(Debug)]
pub struct PendingSubmission {
    pub enquiry: Enquiry,
    pub resolve: TaskHandle,
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub nav: NavMenu,
    pub nav_index: usize,

    // Sections
    pub tabs: TabStrip,
    pub carousel: Carousel,
    pub faq: Accordion,
    pub scroll: ScrollState,

    // Contact form
    pub form: ContactForm,
    pub pending: Option<PendingSubmission>,

    // Transient UI
    pub success_notice: Option<String>,
    pub notice_dismiss: Option<TaskHandle>,
    pub announcement: Option<String>,
    pub announcement_expire: Option<TaskHandle>,
    pub carousel_timer: Option<TaskHandle>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_view: View::default(),
            nav: NavMenu::default(),
            nav_index: 0,
            tabs: TabStrip::new(content::SERVICES.len()),
            carousel: Carousel::new(content::TESTIMONIALS.len()),
            faq: Accordion::new(content::FAQ.len()),
            scroll: ScrollState::new(),
            form: ContactForm::new(),
            pending: None,
            success_notice: None,
            notice_dismiss: None,
            announcement: None,
            announcement_expire: None,
            carousel_timer: None,
        }
    }

    /// Whether the success notice is currently visible
    #[allow(dead_code)]
    pub fn notice_visible(&self) -> bool {
        self.success_notice.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_home() {
        let state = AppState::new();
        assert_eq!(state.current_view, View::Home);
        assert!(!state.nav.is_open());
    }

    #[test]
    fn test_nav_order_ends_with_contact() {
        assert_eq!(View::ALL.first(), Some(&View::Home));
        assert_eq!(View::ALL.last(), Some(&View::Contact));
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: Vec<&str> = View::ALL.iter().map(View::label).collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }

    #[test]
    fn test_new_state_has_no_transient_ui() {
        let state = AppState::new();
        assert!(!state.notice_visible());
        assert!(state.announcement.is_none());
        assert!(state.pending.is_none());
    }

    #[test]
    fn test_section_state_sized_from_content() {
        let state = AppState::new();
        assert_eq!(state.carousel.len(), crate::content::TESTIMONIALS.len());
        assert_eq!(state.faq.len(), crate::content::FAQ.len());
    }
}
