// web_app/forms/contact.rs - Contact form

use serde::{Deserialize, Serialize};

use super::submit::{MailDraft, MailForm};
use super::validation::{validate_email, validate_message, validate_name};
use crate::web_app::error::FieldError;

pub const DEFAULT_CONTACT_SUBJECT: &str = "Contact Form Submission";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    /// Optional; the draft falls back to a generic subject when empty
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl ContactFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<&FieldError> {
        match field {
            ContactField::Name => self.name.as_ref(),
            ContactField::Email => self.email.as_ref(),
            ContactField::Message => self.message.as_ref(),
            ContactField::Subject => None,
        }
    }

    /// Editing a field clears its error
    pub fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Email => self.email = None,
            ContactField::Message => self.message = None,
            ContactField::Subject => {}
        }
    }
}

impl ContactFormData {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactFormErrors> {
        let errors = ContactFormErrors {
            name: validate_name(&self.name).err(),
            email: validate_email(&self.email).err(),
            message: validate_message(&self.message).err(),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl MailForm for ContactFormData {
    fn mail_draft(&self, recipient: &str) -> MailDraft {
        let subject = if self.subject.is_empty() {
            DEFAULT_CONTACT_SUBJECT.to_string()
        } else {
            self.subject.clone()
        };
        MailDraft {
            recipient: recipient.to_string(),
            subject,
            body: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}",
                self.name, self.email, self.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactFormData {
        ContactFormData {
            name: "Jordan".to_string(),
            email: "jordan@example.com".to_string(),
            subject: String::new(),
            message: "Looking for team kits.".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_every_error_reported() {
        let errors = ContactFormData::default().validate().unwrap_err();
        assert_eq!(errors.name.unwrap().to_string(), "Name is required");
        assert_eq!(errors.email.unwrap().to_string(), "Email is required");
        assert_eq!(errors.message.unwrap().to_string(), "Message is required");
    }

    #[test]
    fn test_short_message() {
        let form = ContactFormData {
            message: "  Hi there  ".to_string(),
            ..valid()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.message.map(|e| e.to_string()).as_deref(),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_clear_single_field() {
        let mut errors = ContactFormData::default().validate().unwrap_err();
        errors.clear(ContactField::Email);
        assert!(errors.email.is_none());
        assert!(errors.name.is_some());
    }

    #[test]
    fn test_mail_draft_default_subject() {
        let draft = valid().mail_draft("contact@aclonsports.com");
        assert_eq!(draft.subject, "Contact Form Submission");
        assert_eq!(
            draft.body,
            "Name: Jordan\nEmail: jordan@example.com\n\nMessage:\nLooking for team kits."
        );
    }
}
