use validator::{Validate, ValidationError};

use crate::constants::MAX_LABEL_CHARS;

pub fn validate_option_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::new("empty_label"));
    }
    Ok(())
}

/// Keeps at most `max_chars` characters, never splitting one.
pub fn cut_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Trimmed and length-capped label, or `None` when nothing is left.
pub fn clean_label(raw: &str) -> Option<String> {
    let label = cut_chars(raw.trim(), MAX_LABEL_CHARS);
    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

#[derive(Debug, Validate)]
pub struct NewOptionInput {
    #[validate(custom = "validate_option_label")]
    pub label: String,
}
