//! Validation error taxonomy

use thiserror::Error;

/// The four validation failures a field can carry
///
/// The `Display` output is the user-facing message attached to the field.
/// None of these propagate beyond the form; a failed validation preserves
/// everything the user entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    RequiredMissing,
    #[error("Please enter a valid email address")]
    MalformedEmail,
    #[error("Please enter a valid phone number (10 digits minimum)")]
    MalformedPhone,
    #[error("Please enter a message of at least 10 characters")]
    MessageTooShort,
}
