//! Contact form field value objects

use crate::validate::ValidationError;

/// Semantic kind of a field, selecting its validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Phone,
    Message,
    Other,
}

/// One user-editable input tracked by the validator
///
/// The error slot is cleared on every value mutation, so a field is only
/// ever marked invalid against its current value.
#[derive(Debug, Clone)]
pub struct Field {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
    pub error: Option<ValidationError>,
    pub is_multiline: bool,
}

impl Field {
    /// Create a new field of the given kind
    pub fn new(id: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            value: String::new(),
            required,
            error: None,
            is_multiline: matches!(kind, FieldKind::Message),
        }
    }

    /// Create a plain text field
    pub fn text(id: &str, label: &str, required: bool) -> Self {
        Self::new(id, label, FieldKind::Text, required)
    }

    /// Create an email field
    pub fn email(id: &str, label: &str, required: bool) -> Self {
        Self::new(id, label, FieldKind::Email, required)
    }

    /// Create a phone field
    pub fn phone(id: &str, label: &str, required: bool) -> Self {
        Self::new(id, label, FieldKind::Phone, required)
    }

    /// Create a multiline message field
    pub fn message(id: &str, label: &str, required: bool) -> Self {
        Self::new(id, label, FieldKind::Message, required)
    }

    /// Append a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.error = None;
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
        self.error = None;
    }

    /// Replace the whole value
    #[allow(dead_code)]
    pub fn set_value(&mut self, value: String) {
        self.value = value;
        self.error = None;
    }

    /// Clear the field value
    pub fn clear_value(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Mark the field invalid
    pub fn set_error(&mut self, error: ValidationError) {
        self.error = Some(error);
    }

    /// Clear the error state; clearing twice is the same as clearing once
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Whether the field currently carries an error
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Number of characters entered (untrimmed, as typed)
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }
}
