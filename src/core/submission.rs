//! Form submission state machine
//!
//! Every wired form owns one [`SubmissionState`]. The submit control's label and
//! disabled flag are derived from it, which is what keeps a form from having two
//! attempts in flight from the user's point of view.

/// Label shown on the submit control while a request is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// Label shown on the submit control after a failed attempt
pub const RETRY_LABEL: &str = "Something went wrong. Try again?";

/// Why a submission attempt did not succeed.
///
/// The UI treats both variants the same; the distinction only reaches the logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("endpoint rejected submission with status {status}")]
    Rejected { status: u16 },
}

/// Which form a binding drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Signup,
    Feedback,
}

impl FormKind {
    /// CSS class identifying the form element
    pub fn form_class(&self) -> &'static str {
        match self {
            FormKind::Signup => "signup-form",
            FormKind::Feedback => "feedback-form",
        }
    }

    /// CSS class identifying the confirmation panel
    pub fn confirmation_class(&self) -> &'static str {
        match self {
            FormKind::Signup => "signup-confirmation",
            FormKind::Feedback => "feedback-confirmation",
        }
    }

    /// Default label of the submit control
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormKind::Signup => "Join the waitlist",
            FormKind::Feedback => "Send feedback",
        }
    }
}

/// Lifecycle of one form binding
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Start an attempt.
    ///
    /// Returns the `Sending` state from `Idle` or `Failed`, `None` when an attempt
    /// is already in flight or the form has already succeeded.
    pub fn begin(&self) -> Option<SubmissionState> {
        match self {
            SubmissionState::Idle | SubmissionState::Failed => Some(SubmissionState::Sending),
            SubmissionState::Sending | SubmissionState::Succeeded => None,
        }
    }

    /// Settle an in-flight attempt with its outcome
    pub fn finish(&self, outcome: &Result<(), SubmitError>) -> SubmissionState {
        match (self, outcome) {
            (SubmissionState::Sending, Ok(())) => SubmissionState::Succeeded,
            (SubmissionState::Sending, Err(_)) => SubmissionState::Failed,
            // Late outcome for a binding that is no longer sending
            (other, _) => other.clone(),
        }
    }

    /// Whether the submit control must be disabled
    pub fn is_disabled(&self) -> bool {
        matches!(self, SubmissionState::Sending | SubmissionState::Succeeded)
    }

    /// Whether the form is hidden and its confirmation panel shown
    pub fn shows_confirmation(&self) -> bool {
        matches!(self, SubmissionState::Succeeded)
    }

    /// Label of the submit control, given the binding's original label
    pub fn label<'a>(&self, original: &'a str) -> &'a str {
        match self {
            SubmissionState::Idle | SubmissionState::Succeeded => original,
            SubmissionState::Sending => SENDING_LABEL,
            SubmissionState::Failed => RETRY_LABEL,
        }
    }
}

/// Static description of a form binding: where it posts and what it shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBinding {
    pub kind: FormKind,
    pub endpoint: String,
    pub submit_label: String,
}

impl FormBinding {
    /// Bind a form to its endpoint.
    ///
    /// Without an endpoint there is nothing to post to, and no binding is made.
    pub fn wire(kind: FormKind, endpoint: Option<&str>) -> Option<Self> {
        endpoint.map(|endpoint| Self {
            kind,
            endpoint: endpoint.to_string(),
            submit_label: kind.submit_label().to_string(),
        })
    }
}
