//! Contact form state and submission lifecycle

use super::field::{Field, FieldKind};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// Submission lifecycle of the contact form
///
/// Idle -> Submitting on an accepted submit attempt, Submitting ->
/// Succeeded when the simulated delay elapses, Succeeded -> Idle when the
/// success notice is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Contact enquiry payload handed to the sink
///
/// In a real deployment this is what would be posted to a backend; here it
/// only ever reaches the simulated sink.
#[derive(Debug, Clone, Serialize)]
pub struct Enquiry {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub values: HashMap<String, String>,
}

/// The contact form: ordered fields plus submission status
///
/// The submit control occupies the index one past the last field, so
/// Tab cycling reaches it the same way it reaches fields.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: Vec<Field>,
    pub active_field_index: usize,
    pub status: SubmissionStatus,
}

impl ContactForm {
    /// Idle submit control label
    pub const SUBMIT_LABEL: &'static str = "Send Message";
    /// Submit control label while the submission is in flight
    pub const SUBMIT_BUSY_LABEL: &'static str = "Sending...";

    /// Build the enquiry form with its fixed field set
    pub fn new() -> Self {
        Self {
            fields: vec![
                Field::text("name", "Name", true),
                Field::email("email", "Email Address", true),
                Field::phone("phone", "Phone (optional)", false),
                Field::new("interest", "Interested In (optional)", FieldKind::Other, false),
                Field::message("message", "Message", true),
            ],
            active_field_index: 0,
            status: SubmissionStatus::Idle,
        }
    }

    /// Number of focus stops: every field plus the submit control
    pub fn field_count(&self) -> usize {
        self.fields.len() + 1
    }

    /// Whether focus is on the submit control
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Move focus to the next stop (wraps)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    /// Move focus to the previous stop (wraps)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Move focus to a specific field
    pub fn focus(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }

    /// The focused field, if focus is not on the submit control
    pub fn active_field_mut(&mut self) -> Option<&mut Field> {
        self.fields.get_mut(self.active_field_index)
    }

    /// Look up a field by its stable id
    #[allow(dead_code)]
    pub fn field_by_id(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Index of the first field carrying an error, in document order
    pub fn first_invalid(&self) -> Option<usize> {
        self.fields.iter().position(Field::has_error)
    }

    /// Snapshot of field id -> entered value
    pub fn values(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.id.clone(), f.value.clone()))
            .collect()
    }

    /// Capture the current values as an enquiry payload
    pub fn to_enquiry(&self) -> Enquiry {
        Enquiry {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
            values: self.values(),
        }
    }

    /// Clear every field value and error, returning focus to the top
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear_value();
        }
        self.active_field_index = 0;
    }

    /// Submit control label for the current status
    pub fn submit_label(&self) -> &'static str {
        match self.status {
            SubmissionStatus::Submitting => Self::SUBMIT_BUSY_LABEL,
            _ => Self::SUBMIT_LABEL,
        }
    }

    /// The submit control is disabled while a submission is in flight
    pub fn submit_enabled(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldKind;
    use crate::validate::ValidationError;

    mod submission_status {
        use super::*;

        #[test]
        fn test_default_is_idle() {
            assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
        }
    }

    mod contact_form {
        use super::*;

        #[test]
        fn test_new_has_expected_fields_in_order() {
            let form = ContactForm::new();
            let ids: Vec<&str> = form.fields.iter().map(|f| f.id.as_str()).collect();
            assert_eq!(ids, vec!["name", "email", "phone", "interest", "message"]);
        }

        #[test]
        fn test_required_flags() {
            let form = ContactForm::new();
            assert!(form.field_by_id("name").unwrap().required);
            assert!(form.field_by_id("email").unwrap().required);
            assert!(!form.field_by_id("phone").unwrap().required);
            assert!(!form.field_by_id("interest").unwrap().required);
            assert!(form.field_by_id("message").unwrap().required);
        }

        #[test]
        fn test_field_kinds() {
            let form = ContactForm::new();
            assert_eq!(form.field_by_id("email").unwrap().kind, FieldKind::Email);
            assert_eq!(form.field_by_id("phone").unwrap().kind, FieldKind::Phone);
            assert_eq!(form.field_by_id("message").unwrap().kind, FieldKind::Message);
            assert_eq!(form.field_by_id("interest").unwrap().kind, FieldKind::Other);
        }

        #[test]
        fn test_next_field_cycles_through_submit_control() {
            let mut form = ContactForm::new();
            let stops = form.field_count();
            for _ in 0..stops - 1 {
                form.next_field();
            }
            assert!(form.is_submit_active());
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_control() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert!(form.is_submit_active());
        }

        #[test]
        fn test_active_field_mut_is_none_on_submit_control() {
            let mut form = ContactForm::new();
            form.focus(form.fields.len());
            assert!(form.active_field_mut().is_none());
        }

        #[test]
        fn test_focus_clamps_to_submit_control() {
            let mut form = ContactForm::new();
            form.focus(100);
            assert!(form.is_submit_active());
        }

        #[test]
        fn test_values_maps_id_to_entered_value() {
            let mut form = ContactForm::new();
            form.fields[0].set_value("Jane".to_string());
            form.fields[1].set_value("jane@example.com".to_string());

            let values = form.values();
            assert_eq!(values.get("name").unwrap(), "Jane");
            assert_eq!(values.get("email").unwrap(), "jane@example.com");
            assert_eq!(values.get("phone").unwrap(), "");
            assert_eq!(values.len(), 5);
        }

        #[test]
        fn test_to_enquiry_captures_values() {
            let mut form = ContactForm::new();
            form.fields[0].set_value("Jane".to_string());

            let enquiry = form.to_enquiry();
            assert_eq!(enquiry.values.get("name").unwrap(), "Jane");
            assert_eq!(enquiry.values.len(), 5);
        }

        #[test]
        fn test_enquiry_serializes_to_json() {
            let form = ContactForm::new();
            let enquiry = form.to_enquiry();
            let json = serde_json::to_string(&enquiry).unwrap();
            assert!(json.contains("reference"));
            assert!(json.contains("submitted_at"));
        }

        #[test]
        fn test_reset_clears_values_errors_and_focus() {
            let mut form = ContactForm::new();
            form.fields[0].set_value("Jane".to_string());
            form.fields[1].set_error(ValidationError::MalformedEmail);
            form.focus(3);

            form.reset();

            assert!(form.fields.iter().all(|f| f.value.is_empty()));
            assert!(form.fields.iter().all(|f| !f.has_error()));
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_first_invalid_in_document_order() {
            let mut form = ContactForm::new();
            assert!(form.first_invalid().is_none());

            form.fields[4].set_error(ValidationError::MessageTooShort);
            form.fields[1].set_error(ValidationError::MalformedEmail);
            assert_eq!(form.first_invalid(), Some(1));
        }

        #[test]
        fn test_submit_label_follows_status() {
            let mut form = ContactForm::new();
            assert_eq!(form.submit_label(), "Send Message");
            assert!(form.submit_enabled());

            form.status = SubmissionStatus::Submitting;
            assert_eq!(form.submit_label(), "Sending...");
            assert!(!form.submit_enabled());

            form.status = SubmissionStatus::Succeeded;
            assert_eq!(form.submit_label(), "Send Message");
            assert!(form.submit_enabled());
        }
    }
}
