// web_app/forms/mod.rs - Contact and quote forms
//
// Form data and validation are plain Rust so they can be tested without a
// renderer; the Leptos components in `components::forms` hold the signals.

pub mod contact;
pub mod quote;
pub mod submit;
pub mod validation;

pub use contact::{ContactField, ContactFormData, ContactFormErrors};
pub use quote::{QuoteField, QuoteFormData, QuoteFormErrors};
pub use submit::{
    encode_uri_component, submit_form, CallbackSubmitter, FormSubmitter, MailDraft, MailForm, MailLauncher,
    MailtoSubmitter, SubmissionTicket, SubmissionTracker, SubmitStatus, STATUS_RESET_MS,
    SUBMIT_DELAY_MS,
};
