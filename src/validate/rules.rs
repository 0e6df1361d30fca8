//! Field rule constants and helpers

/// Email shape: no whitespace, exactly one `@`, at least one `.` after it
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Minimum digits for a phone number to be accepted
pub const PHONE_MIN_DIGITS: usize = 10;

/// Formatted phone length cap: `(XXX) XXX-XXXX`
pub const PHONE_MAX_LEN: usize = 14;

/// Minimum trimmed length for the message field
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Message length at which the counter turns to a warning
pub const MESSAGE_WARN_AT: usize = 400;

/// Message length limit shown by the counter
pub const MESSAGE_LIMIT: usize = 500;

/// Count the digits in a value, ignoring punctuation and spacing
pub fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// Live-format a phone value as `(XXX) XXX-XXXX`
///
/// Non-digits are stripped, digits past the tenth are dropped, and the
/// result is capped at [`PHONE_MAX_LEN`] characters. An empty input stays
/// empty.
pub fn format_phone(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }

    let area = &digits[..digits.len().min(3)];
    let prefix = &digits[digits.len().min(3)..digits.len().min(6)];
    let line = &digits[digits.len().min(6)..digits.len().min(10)];

    let formatted = format!("({area}) {prefix}-{line}");
    formatted.chars().take(PHONE_MAX_LEN).collect()
}

/// Visual severity of the message character counter
///
/// Informational only; the counter never blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterSeverity {
    Normal,
    Warning,
    OverLimit,
}

impl CounterSeverity {
    /// Severity for a character count
    pub fn for_count(count: usize) -> Self {
        if count > MESSAGE_LIMIT {
            Self::OverLimit
        } else if count > MESSAGE_WARN_AT {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}
