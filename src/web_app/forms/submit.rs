// web_app/forms/submit.rs - Form submission
//
// A form is submitted through a `FormSubmitter`. The default one turns the
// form into a mail draft and opens it as a `mailto:` link; pages that want
// something else inject a `CallbackSubmitter`.

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::web_app::error::SubmitError;

/// Simulated latency between pressing submit and the submission itself
pub const SUBMIT_DELAY_MS: u64 = 1000;
/// How long the success or error banner stays before the form returns to idle
pub const STATUS_RESET_MS: u64 = 5000;

/// Characters `encodeURIComponent` leaves alone besides ASCII alphanumerics
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    /// `mailto:<recipient>?subject=<encoded>&body=<encoded>`
    pub fn to_mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_uri_component(&self.subject),
            encode_uri_component(&self.body)
        )
    }
}

/// A form that can be written out as an email
pub trait MailForm {
    fn mail_draft(&self, recipient: &str) -> MailDraft;
}

/// Opens a `mailto:` URI
pub trait MailLauncher: Send + Sync {
    fn launch(&self, uri: &str) -> Result<(), SubmitError>;
}

impl<F> MailLauncher for F
where
    F: Fn(&str) -> Result<(), SubmitError> + Send + Sync,
{
    fn launch(&self, uri: &str) -> Result<(), SubmitError> {
        self(uri)
    }
}

/// Navigates the current window to the URI (hydrate only)
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLauncher;

#[cfg(feature = "hydrate")]
impl MailLauncher for BrowserLauncher {
    fn launch(&self, uri: &str) -> Result<(), SubmitError> {
        let window =
            web_sys::window().ok_or_else(|| SubmitError::Launch("no window".to_string()))?;
        window
            .location()
            .set_href(uri)
            .map_err(|e| SubmitError::Launch(format!("{e:?}")))
    }
}

/// Records the URI in the log; used where there is no browser
#[derive(Clone, Copy, Debug, Default)]
pub struct LogLauncher;

impl MailLauncher for LogLauncher {
    fn launch(&self, uri: &str) -> Result<(), SubmitError> {
        tracing::info!(uri, "mailto draft prepared");
        Ok(())
    }
}

/// Launcher for the current build target
pub fn default_launcher() -> Arc<dyn MailLauncher> {
    cfg_if::cfg_if! {
        if #[cfg(feature = "hydrate")] {
            Arc::new(BrowserLauncher)
        } else {
            Arc::new(LogLauncher)
        }
    }
}

/// Submission capability for form data `F`
pub trait FormSubmitter<F>: Send + Sync {
    fn submit(&self, form: &F) -> Result<(), SubmitError>;
}

/// Builds a mail draft for a fixed recipient and hands it to a launcher
#[derive(Clone)]
pub struct MailtoSubmitter {
    recipient: String,
    launcher: Arc<dyn MailLauncher>,
}

impl MailtoSubmitter {
    pub fn new(recipient: impl Into<String>, launcher: Arc<dyn MailLauncher>) -> Self {
        Self {
            recipient: recipient.into(),
            launcher,
        }
    }

    /// Submitter using the launcher of the current build target
    pub fn to(recipient: impl Into<String>) -> Self {
        Self::new(recipient, default_launcher())
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl<F: MailForm> FormSubmitter<F> for MailtoSubmitter {
    fn submit(&self, form: &F) -> Result<(), SubmitError> {
        let draft = form.mail_draft(&self.recipient);
        tracing::info!(recipient = %draft.recipient, subject = %draft.subject, "Submitting form by mail");
        self.launcher.launch(&draft.to_mailto_uri())
    }
}

/// Delegates to an injected closure
pub struct CallbackSubmitter<F> {
    callback: Arc<dyn Fn(&F) -> Result<(), SubmitError> + Send + Sync>,
}

impl<F> CallbackSubmitter<F> {
    pub fn new(callback: impl Fn(&F) -> Result<(), SubmitError> + Send + Sync + 'static) -> Self {
        Self {
            callback: Arc::new(callback),
        }
    }
}

impl<F> Clone for CallbackSubmitter<F> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<F> FormSubmitter<F> for CallbackSubmitter<F> {
    fn submit(&self, form: &F) -> Result<(), SubmitError> {
        (self.callback)(form)
    }
}

/// Lifecycle of a form submission
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn is_submitting(self) -> bool {
        self == SubmitStatus::Submitting
    }

    /// Status after the submitter returned
    pub fn from_result(result: &Result<(), SubmitError>) -> SubmitStatus {
        match result {
            Ok(()) => SubmitStatus::Success,
            Err(_) => SubmitStatus::Error,
        }
    }
}

/// Runs the submitter; a successful submit resets the form to its defaults
pub fn submit_form<F: Default>(submitter: &dyn FormSubmitter<F>, form: &mut F) -> Result<(), SubmitError> {
    let result = submitter.submit(form);
    match &result {
        Ok(()) => *form = F::default(),
        Err(e) => tracing::warn!(error = %e, "Form submission failed"),
    }
    result
}

/// Identifies one submission from `begin` to its status reset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Status of a form across overlapping submissions
///
/// Every `begin` starts a new generation. Completion and reset only apply
/// while the ticket belongs to the latest generation, so an old reset
/// timer never clears the banner of a newer submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionTracker {
    status: SubmitStatus,
    generation: u64,
}

impl SubmissionTracker {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Starts a submission; `None` while another one is in flight
    pub fn begin(&mut self) -> Option<SubmissionTicket> {
        if self.status.is_submitting() {
            return None;
        }
        self.generation += 1;
        self.status = SubmitStatus::Submitting;
        Some(SubmissionTicket(self.generation))
    }

    /// Records the submitter's result for the ticket's submission
    pub fn complete(&mut self, ticket: SubmissionTicket, result: &Result<(), SubmitError>) -> bool {
        if ticket.0 != self.generation || !self.status.is_submitting() {
            return false;
        }
        self.status = SubmitStatus::from_result(result);
        true
    }

    /// Returns to idle unless a newer submission has started since
    pub fn reset(&mut self, ticket: SubmissionTicket) -> bool {
        if ticket.0 != self.generation || self.status.is_submitting() {
            return false;
        }
        self.status = SubmitStatus::Idle;
        true
    }
}
