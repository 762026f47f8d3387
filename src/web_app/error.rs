// web_app/error.rs - Form error types
//
// Field errors render inline next to their input; submission errors switch
// the form into its error state. Neither is ever propagated further.

use thiserror::Error;

/// Validation failure for a single form field
///
/// The `Display` text is exactly what the form shows under the field.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{label} is required")]
    Required { label: &'static str },

    #[error("{label} must be at least {min} characters")]
    TooShort { label: &'static str, min: usize },

    #[error("Please enter a valid {expected}")]
    InvalidFormat { expected: &'static str },

    #[error("Please select a {expected}")]
    SelectionRequired { expected: &'static str },

    #[error("Please enter a valid quantity (minimum 1)")]
    InvalidQuantity,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form has validation errors")]
    Invalid,

    #[error("could not open the mail client: {0}")]
    Launch(String),

    #[error("submission handler failed: {0}")]
    Handler(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::Required { label: "Name" }.to_string(), "Name is required");
        assert_eq!(
            FieldError::TooShort { label: "Message", min: 10 }.to_string(),
            "Message must be at least 10 characters"
        );
        assert_eq!(
            FieldError::InvalidFormat { expected: "email address" }.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::SelectionRequired { expected: "product category" }.to_string(),
            "Please select a product category"
        );
    }
}
