//! Form validator: field rules, submit gating, and edit hooks
//!
//! The validator is handed the form state explicitly rather than looking
//! anything up itself, and the UI layer drives it through the
//! `on_field_changed` / `on_submit_attempted` hooks, so the whole submission
//! flow runs headless in tests.

use std::time::{Duration, Instant};

use regex::Regex;

use super::error::ValidationError;
use super::rules;
use crate::sched::{Scheduler, TaskHandle, TaskKind};
use crate::state::{ContactForm, Enquiry, Field, FieldKind, SubmissionStatus};

/// Outcome of a submit attempt
#[derive(Debug)]
pub enum SubmitAttempt {
    /// A submission is already in flight; the control is disabled
    InFlight,
    /// Validation failed; focus has moved to the first invalid field
    Rejected { first_invalid: usize },
    /// Validation passed; the payload is captured and resolution scheduled
    Accepted {
        enquiry: Enquiry,
        resolve: TaskHandle,
    },
}

/// Validates contact form fields and gates submission
pub struct FormValidator {
    email_re: Regex,
}

impl FormValidator {
    pub fn new() -> Self {
        Self {
            email_re: Regex::new(rules::EMAIL_PATTERN).expect("Invalid email pattern"),
        }
    }

    /// Validate one field against its required flag and kind rule
    ///
    /// Sets or clears the field error as a side effect.
    pub fn validate_field(&self, field: &mut Field) -> bool {
        let value = field.value.trim();

        let error = if field.required && value.is_empty() {
            Some(ValidationError::RequiredMissing)
        } else {
            match field.kind {
                FieldKind::Email if !value.is_empty() && !self.email_re.is_match(value) => {
                    Some(ValidationError::MalformedEmail)
                }
                FieldKind::Phone
                    if !value.is_empty()
                        && rules::digit_count(value) < rules::PHONE_MIN_DIGITS =>
                {
                    Some(ValidationError::MalformedPhone)
                }
                FieldKind::Message if value.chars().count() < rules::MESSAGE_MIN_CHARS => {
                    Some(ValidationError::MessageTooShort)
                }
                _ => None,
            }
        };

        match error {
            Some(error) => {
                field.set_error(error);
                false
            }
            None => {
                field.clear_error();
                true
            }
        }
    }

    /// Validate every field in document order
    ///
    /// Kind rules apply regardless of the required flag. Returns true iff
    /// all fields pass; on failure, focus moves to the first invalid field
    /// only after the whole pass completes.
    pub fn validate_form(&self, form: &mut ContactForm) -> bool {
        let mut all_valid = true;
        for field in &mut form.fields {
            if !self.validate_field(field) {
                all_valid = false;
            }
        }

        if !all_valid {
            if let Some(first) = form.first_invalid() {
                form.focus(first);
            }
        }

        all_valid
    }

    /// Hook invoked after any edit to a field
    ///
    /// Clears the stale error and live-reformats phone input.
    pub fn on_field_changed(&self, form: &mut ContactForm, index: usize) {
        if let Some(field) = form.fields.get_mut(index) {
            field.clear_error();
            if field.kind == FieldKind::Phone {
                field.value = rules::format_phone(&field.value);
            }
        }
    }

    /// Hook invoked on a submit gesture
    ///
    /// On acceptance the payload is captured before anything mutates, the
    /// form moves to Submitting, and resolution is scheduled after `delay`.
    pub fn on_submit_attempted(
        &self,
        form: &mut ContactForm,
        scheduler: &mut Scheduler,
        now: Instant,
        delay: Duration,
    ) -> SubmitAttempt {
        if !form.submit_enabled() {
            return SubmitAttempt::InFlight;
        }

        if !self.validate_form(form) {
            return SubmitAttempt::Rejected {
                first_invalid: form.active_field_index,
            };
        }

        let enquiry = form.to_enquiry();
        form.status = SubmissionStatus::Submitting;
        let resolve = scheduler.schedule(now, delay, TaskKind::ResolveSubmission);
        SubmitAttempt::Accepted { enquiry, resolve }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}
