//! Application state and core logic

use crate::config::KioskConfig;
use crate::sched::{Clock, Scheduler, SystemClock, TaskKind};
use crate::sink::{EnquirySink, SimulatedSink};
use crate::state::{AppState, PendingSubmission, SubmissionStatus, View};
use crate::validate::{FormValidator, SubmitAttempt};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Success notice shown after a submission resolves
const SUCCESS_NOTICE: &str = "Thank you for your message! We'll be in touch within one business day.";

/// Live-region style announcement for a resolved submission
const SUCCESS_ANNOUNCEMENT: &str = "Form submitted successfully. Thank you for your message.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Timing configuration
    pub config: KioskConfig,
    /// Contact form validator
    validator: FormValidator,
    /// Pending timed transitions
    scheduler: Scheduler,
    /// Injected time source
    clock: Box<dyn Clock>,
    /// Destination for resolved enquiries
    pub sink: SimulatedSink,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance on the system clock
    pub fn new(config: KioskConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Create an App on an injected clock
    pub fn with_clock(config: KioskConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            state: AppState::new(),
            config,
            validator: FormValidator::new(),
            scheduler: Scheduler::new(),
            clock,
            sink: SimulatedSink::new(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a glide animation is running (drives the faster poll rate)
    pub fn is_animating(&self) -> bool {
        self.state.scroll.is_animating()
    }

    /// Per-iteration update: advance animations and fire due tasks
    pub async fn tick(&mut self) -> Result<()> {
        let now = self.clock.now();
        self.state.scroll.update(now);

        for task in self.scheduler.poll_due(now) {
            tracing::debug!(?task, "scheduled task fired");
            match task {
                TaskKind::ResolveSubmission => self.resolve_submission().await?,
                TaskKind::DismissNotice => self.dismiss_notice(),
                TaskKind::ExpireAnnouncement => {
                    self.state.announcement = None;
                    self.state.announcement_expire = None;
                }
                TaskKind::AdvanceCarousel => {
                    self.state.carousel.next();
                    self.arm_carousel_timer();
                }
            }
        }

        Ok(())
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Navigation menu is modal while open
        if self.state.nav.is_open() {
            self.handle_nav_key(key);
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            self.state.nav.toggle();
            return Ok(());
        }

        match self.state.current_view {
            View::Contact => self.handle_contact_key(key),
            View::Services => self.handle_services_key(key),
            View::Testimonials => self.handle_testimonials_key(key),
            View::Faq => self.handle_faq_key(key),
            View::Home => self.handle_home_key(key),
        }

        Ok(())
    }

    /// Keys while the navigation menu is open
    fn handle_nav_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.nav.close(),
            KeyCode::Up => self.state.nav_index = self.state.nav_index.saturating_sub(1),
            KeyCode::Down => {
                self.state.nav_index = (self.state.nav_index + 1).min(View::ALL.len() - 1);
            }
            KeyCode::Enter => self.set_view(View::ALL[self.state.nav_index]),
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    let index = digit as usize;
                    if (1..=View::ALL.len()).contains(&index) {
                        self.set_view(View::ALL[index - 1]);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            _ => self.handle_scroll_key(key),
        }
    }

    fn handle_services_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Left => self.state.tabs.prev(),
            KeyCode::Right => self.state.tabs.next(),
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    if digit >= 1 {
                        self.state.tabs.select(digit as usize - 1);
                    }
                }
            }
            _ => self.handle_scroll_key(key),
        }
    }

    fn handle_testimonials_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Left => {
                self.state.carousel.prev();
                self.arm_carousel_timer();
            }
            KeyCode::Right => {
                self.state.carousel.next();
                self.arm_carousel_timer();
            }
            KeyCode::Char(c) => {
                // Dots: jump straight to a slide
                if let Some(digit) = c.to_digit(10) {
                    if digit >= 1 && (digit as usize) <= self.state.carousel.len() {
                        self.state.carousel.show(digit as isize - 1);
                        self.arm_carousel_timer();
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_faq_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up => self.state.faq.select_prev(),
            KeyCode::Down => self.state.faq.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.state.faq.toggle_selected(),
            _ => self.handle_scroll_key(key),
        }
    }

    /// Keys while on the contact form
    fn handle_contact_key(&mut self, key: KeyEvent) {
        // Send shortcut works from any focus position
        if key.code == KeyCode::Char('s') && key.modifiers.contains(crate::platform::SEND_MODIFIER)
        {
            self.attempt_submit();
            return;
        }

        match key.code {
            KeyCode::Tab => self.focus_next_field(),
            KeyCode::BackTab => self.focus_prev_field(),
            KeyCode::Enter => {
                if self.state.form.is_submit_active() {
                    self.attempt_submit();
                } else if self
                    .state
                    .form
                    .active_field_mut()
                    .is_some_and(|f| f.is_multiline)
                {
                    self.edit_active_field('\n');
                } else {
                    self.focus_next_field();
                }
            }
            KeyCode::Backspace => self.backspace_active_field(),
            KeyCode::Char(c) => self.edit_active_field(c),
            _ => {}
        }
    }

    /// Type a character into the focused field
    fn edit_active_field(&mut self, c: char) {
        let index = self.state.form.active_field_index;
        let Some(field) = self.state.form.active_field_mut() else {
            return;
        };
        field.push_char(c);
        self.validator.on_field_changed(&mut self.state.form, index);
    }

    /// Delete the last character of the focused field
    fn backspace_active_field(&mut self) {
        let index = self.state.form.active_field_index;
        let Some(field) = self.state.form.active_field_mut() else {
            return;
        };
        field.pop_char();
        self.validator.on_field_changed(&mut self.state.form, index);
    }

    /// Move focus forward, validating the field being left
    fn focus_next_field(&mut self) {
        self.validate_on_blur();
        self.state.form.next_field();
    }

    /// Move focus backward, validating the field being left
    fn focus_prev_field(&mut self) {
        self.validate_on_blur();
        self.state.form.prev_field();
    }

    /// Blur validation: surface errors as soon as the user leaves a field
    fn validate_on_blur(&mut self) {
        let index = self.state.form.active_field_index;
        let Some(field) = self.state.form.fields.get_mut(index) else {
            return;
        };
        // Skip untouched optional fields so tabbing past them stays quiet
        if field.value.is_empty() && !field.required {
            return;
        }
        let error = if self.validator.validate_field(field) {
            None
        } else {
            field.error
        };
        if let Some(error) = error {
            self.announce(error.to_string());
        }
    }

    /// Run a submit attempt through the validator
    fn attempt_submit(&mut self) {
        let now = self.clock.now();
        let attempt = self.validator.on_submit_attempted(
            &mut self.state.form,
            &mut self.scheduler,
            now,
            self.config.submit_delay(),
        );

        match attempt {
            SubmitAttempt::Accepted { enquiry, resolve } => {
                tracing::info!(reference = %enquiry.reference, "enquiry accepted, simulating delivery");
                self.state.pending = Some(PendingSubmission { enquiry, resolve });
            }
            SubmitAttempt::Rejected { first_invalid } => {
                let message = self
                    .state
                    .form
                    .fields
                    .get(first_invalid)
                    .and_then(|f| f.error)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "Please fix the highlighted fields".to_string());
                self.announce(message);
            }
            SubmitAttempt::InFlight => {}
        }
    }

    /// Finish the simulated submission: deliver, reset, show the notice
    async fn resolve_submission(&mut self) -> Result<()> {
        let Some(pending) = self.state.pending.take() else {
            return Ok(());
        };

        self.sink.deliver(pending.enquiry).await?;

        self.state.form.status = SubmissionStatus::Succeeded;
        self.state.form.reset();
        self.state.success_notice = Some(SUCCESS_NOTICE.to_string());

        let now = self.clock.now();
        if let Some(handle) = self.state.notice_dismiss.take() {
            self.scheduler.cancel(handle);
        }
        self.state.notice_dismiss = Some(self.scheduler.schedule(
            now,
            self.config.notice_timeout(),
            TaskKind::DismissNotice,
        ));

        self.announce(SUCCESS_ANNOUNCEMENT.to_string());
        Ok(())
    }

    /// Hide the success notice and return the form to idle
    fn dismiss_notice(&mut self) {
        self.state.success_notice = None;
        self.state.notice_dismiss = None;
        if self.state.form.status == SubmissionStatus::Succeeded {
            self.state.form.status = SubmissionStatus::Idle;
        }
    }

    /// Show a transient status-line announcement
    fn announce(&mut self, message: String) {
        if let Some(handle) = self.state.announcement_expire.take() {
            self.scheduler.cancel(handle);
        }
        let now = self.clock.now();
        self.state.announcement = Some(message);
        self.state.announcement_expire = Some(self.scheduler.schedule(
            now,
            self.config.announcement_timeout(),
            TaskKind::ExpireAnnouncement,
        ));
    }

    /// Switch sections, closing the menu and gliding back to the top
    fn set_view(&mut self, view: View) {
        self.state.current_view = view;
        self.state.nav.close();
        self.state.scroll.scroll_to(0, self.clock.now());

        if view == View::Testimonials {
            self.arm_carousel_timer();
        } else if let Some(handle) = self.state.carousel_timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// (Re)start the testimonial auto-advance timer
    fn arm_carousel_timer(&mut self) {
        if let Some(handle) = self.state.carousel_timer.take() {
            self.scheduler.cancel(handle);
        }
        self.state.carousel_timer = Some(self.scheduler.schedule(
            self.clock.now(),
            self.config.carousel_interval(),
            TaskKind::AdvanceCarousel,
        ));
    }

    /// Page-style scrolling shared by the reading views
    fn handle_scroll_key(&mut self, key: KeyEvent) {
        const PAGE: i32 = 8;
        const MAX_SCROLL: u16 = 200;
        let now = self.clock.now();
        match key.code {
            KeyCode::PageDown => self.state.scroll.scroll_by(PAGE, MAX_SCROLL, now),
            KeyCode::PageUp => self.state.scroll.scroll_by(-PAGE, MAX_SCROLL, now),
            KeyCode::Home => self.state.scroll.scroll_to(0, now),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::ManualClock;
    use crate::state::ContactForm;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn test_app() -> (App, ManualClock) {
        let clock = ManualClock::new();
        let app = App::with_clock(KioskConfig::default(), Box::new(clock.clone()));
        (app, clock)
    }

    /// App already sitting on the contact form
    fn contact_app() -> (App, ManualClock) {
        let (mut app, clock) = test_app();
        app.state.current_view = View::Contact;
        (app, clock)
    }

    fn fill_form_validly(form: &mut ContactForm) {
        form.fields[0].set_value("Jane Doe".to_string());
        form.fields[1].set_value("jane@example.com".to_string());
        form.fields[2].set_value("(555) 123-4567".to_string());
        form.fields[4].set_value("I'd like to book a free trial week.".to_string());
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    mod submission_lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_accepted_submit_goes_busy_then_succeeds_and_resets() {
            let (mut app, clock) = contact_app();
            fill_form_validly(&mut app.state.form);
            app.state.form.focus(app.state.form.fields.len());

            app.handle_key(key(KeyCode::Enter)).unwrap();

            // In flight: busy label, disabled control, values still present
            assert_eq!(app.state.form.status, SubmissionStatus::Submitting);
            assert_eq!(app.state.form.submit_label(), "Sending...");
            assert!(!app.state.form.submit_enabled());
            assert!(app.state.pending.is_some());
            assert!(!app.state.notice_visible());

            // Not resolved before the delay elapses
            clock.advance(Duration::from_millis(1499));
            app.tick().await.unwrap();
            assert_eq!(app.state.form.status, SubmissionStatus::Submitting);

            clock.advance(Duration::from_millis(1));
            app.tick().await.unwrap();

            // Resolved: notice up, fields reset, control restored
            assert_eq!(app.state.form.status, SubmissionStatus::Succeeded);
            assert!(app.state.notice_visible());
            assert!(app.state.form.fields.iter().all(|f| f.value.is_empty()));
            assert_eq!(app.state.form.submit_label(), "Send Message");
            assert!(app.state.form.submit_enabled());
        }

        #[tokio::test]
        async fn test_sink_receives_payload_captured_before_reset() {
            let (mut app, clock) = contact_app();
            fill_form_validly(&mut app.state.form);
            app.state.form.focus(app.state.form.fields.len());

            app.handle_key(key(KeyCode::Enter)).unwrap();
            clock.advance(Duration::from_millis(1500));
            app.tick().await.unwrap();

            assert_eq!(app.sink.delivered(), 1);
            let enquiry = app.sink.last().unwrap();
            assert_eq!(enquiry.values.get("name").unwrap(), "Jane Doe");
            assert_eq!(enquiry.values.get("email").unwrap(), "jane@example.com");
            assert_eq!(enquiry.values.get("phone").unwrap(), "(555) 123-4567");
        }

        #[tokio::test]
        async fn test_notice_auto_dismisses_back_to_idle() {
            let (mut app, clock) = contact_app();
            fill_form_validly(&mut app.state.form);
            app.state.form.focus(app.state.form.fields.len());

            app.handle_key(key(KeyCode::Enter)).unwrap();
            clock.advance(Duration::from_millis(1500));
            app.tick().await.unwrap();
            assert!(app.state.notice_visible());

            clock.advance(Duration::from_millis(5000));
            app.tick().await.unwrap();

            assert!(!app.state.notice_visible());
            assert_eq!(app.state.form.status, SubmissionStatus::Idle);
        }

        #[tokio::test]
        async fn test_rejected_submit_announces_and_focuses_first_invalid() {
            let (mut app, _clock) = contact_app();
            app.state.form.focus(app.state.form.fields.len());

            app.handle_key(key(KeyCode::Enter)).unwrap();

            assert_eq!(app.state.form.status, SubmissionStatus::Idle);
            assert_eq!(app.state.form.active_field_index, 0);
            assert_eq!(
                app.state.announcement.as_deref(),
                Some("This field is required")
            );
            assert!(app.state.pending.is_none());
        }

        #[tokio::test]
        async fn test_enter_mid_flight_does_not_double_submit() {
            let (mut app, clock) = contact_app();
            fill_form_validly(&mut app.state.form);
            app.state.form.focus(app.state.form.fields.len());

            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();

            clock.advance(Duration::from_millis(1500));
            app.tick().await.unwrap();
            clock.advance(Duration::from_millis(1500));
            app.tick().await.unwrap();

            assert_eq!(app.sink.delivered(), 1);
        }
    }

    mod form_editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_reaches_the_focused_field() {
            let (mut app, _clock) = test_app();
            app.handle_key(key(KeyCode::Char('J'))).unwrap();
            app.handle_key(key(KeyCode::Char('o'))).unwrap();
            // Home view ignores typing; move to Contact first
            assert_eq!(app.state.form.fields[0].value, "");

            app.state.current_view = View::Contact;
            app.handle_key(key(KeyCode::Char('J'))).unwrap();
            app.handle_key(key(KeyCode::Char('o'))).unwrap();
            assert_eq!(app.state.form.fields[0].value, "Jo");

            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.state.form.fields[0].value, "J");
        }

        #[tokio::test]
        async fn test_phone_input_is_live_formatted() {
            let (mut app, _clock) = contact_app();
            app.state.form.focus(2);

            for c in "5551234567".chars() {
                app.handle_key(key(KeyCode::Char(c))).unwrap();
            }

            assert_eq!(app.state.form.fields[2].value, "(555) 123-4567");
        }

        #[tokio::test]
        async fn test_blur_validation_flags_bad_email_on_tab() {
            let (mut app, _clock) = contact_app();
            app.state.form.focus(1);

            for c in "not-an-email".chars() {
                app.handle_key(key(KeyCode::Char(c))).unwrap();
            }
            app.handle_key(key(KeyCode::Tab)).unwrap();

            assert!(app.state.form.fields[1].has_error());
            assert_eq!(
                app.state.announcement.as_deref(),
                Some("Please enter a valid email address")
            );
        }

        #[tokio::test]
        async fn test_tabbing_past_empty_optional_field_stays_quiet() {
            let (mut app, _clock) = contact_app();
            app.state.form.focus(2); // optional phone, untouched

            app.handle_key(key(KeyCode::Tab)).unwrap();

            assert!(!app.state.form.fields[2].has_error());
            assert!(app.state.announcement.is_none());
        }

        #[tokio::test]
        async fn test_enter_in_message_field_inserts_newline() {
            let (mut app, _clock) = contact_app();
            app.state.form.focus(4);

            app.handle_key(key(KeyCode::Char('h'))).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.handle_key(key(KeyCode::Char('i'))).unwrap();

            assert_eq!(app.state.form.fields[4].value, "h\ni");
        }
    }

    mod transient_ui {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_announcement_expires_after_timeout() {
            let (mut app, clock) = contact_app();
            app.state.form.focus(app.state.form.fields.len());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.announcement.is_some());

            clock.advance(Duration::from_millis(1000));
            app.tick().await.unwrap();
            assert!(app.state.announcement.is_none());
        }

        #[tokio::test]
        async fn test_carousel_auto_advances_on_testimonials() {
            let (mut app, clock) = test_app();
            app.state.nav.toggle();
            app.state.nav_index = 2; // Testimonials
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.current_view, View::Testimonials);
            assert_eq!(app.state.carousel.active(), 0);

            clock.advance(Duration::from_millis(5000));
            app.tick().await.unwrap();
            assert_eq!(app.state.carousel.active(), 1);

            // Timer re-arms after each advance
            clock.advance(Duration::from_millis(5000));
            app.tick().await.unwrap();
            assert_eq!(app.state.carousel.active(), 2);
        }

        #[tokio::test]
        async fn test_manual_navigation_resets_the_advance_timer() {
            let (mut app, clock) = test_app();
            app.state.nav.toggle();
            app.state.nav_index = 2;
            app.handle_key(key(KeyCode::Enter)).unwrap();

            clock.advance(Duration::from_millis(4000));
            app.tick().await.unwrap();
            app.handle_key(key(KeyCode::Right)).unwrap();
            assert_eq!(app.state.carousel.active(), 1);

            // The old timer would have fired here; the reset one has not
            clock.advance(Duration::from_millis(1000));
            app.tick().await.unwrap();
            assert_eq!(app.state.carousel.active(), 1);

            clock.advance(Duration::from_millis(4000));
            app.tick().await.unwrap();
            assert_eq!(app.state.carousel.active(), 2);
        }

        #[tokio::test]
        async fn test_leaving_testimonials_stops_the_timer() {
            let (mut app, clock) = test_app();
            app.state.nav.toggle();
            app.state.nav_index = 2;
            app.handle_key(key(KeyCode::Enter)).unwrap();

            app.handle_key(key(KeyCode::Esc)).unwrap();
            app.handle_key(key(KeyCode::Char('1'))).unwrap(); // jump Home
            assert_eq!(app.state.current_view, View::Home);

            clock.advance(Duration::from_millis(10_000));
            app.tick().await.unwrap();
            assert_eq!(app.state.carousel.active(), 0);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_esc_opens_menu_and_enter_selects() {
            let (mut app, _clock) = test_app();
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.state.nav.is_open());

            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();

            assert_eq!(app.state.current_view, View::Services);
            assert!(!app.state.nav.is_open());
        }

        #[tokio::test]
        async fn test_ctrl_c_quits_from_anywhere() {
            let (mut app, _clock) = contact_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_q_types_into_form_instead_of_quitting() {
            let (mut app, _clock) = contact_app();
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(!app.should_quit());
            assert_eq!(app.state.form.fields[0].value, "q");
        }
    }
}
