//! Interest tracker state
//!
//! The interest button gives its feedback on click, before the request is even
//! sent, and never looks at the outcome.

use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};

use super::submission::SubmitError;
use super::transport::{FormPayload, FormTransport, SubmitRequest};

/// Name of the hidden field stamped on every click
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Delay between the click and the scroll to the signup section
pub const SCROLL_DELAY_MS: u32 = 400;

/// Anchor the viewport is scrolled to after a click
pub const SIGNUP_ANCHOR: &str = "signup";

/// CSS class added to the button once activated
pub const ACTIVATED_CLASS: &str = "interest-activated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterestState {
    #[default]
    Ready,
    Activated,
}

impl InterestState {
    /// Register a click. Returns true only for the first one.
    pub fn activate(&mut self) -> bool {
        match self {
            InterestState::Ready => {
                *self = InterestState::Activated;
                true
            }
            InterestState::Activated => false,
        }
    }

    pub fn is_activated(&self) -> bool {
        matches!(self, InterestState::Activated)
    }

    pub fn label(&self) -> &'static str {
        match self {
            InterestState::Ready => "I'm interested",
            InterestState::Activated => "✓ Interest noted",
        }
    }
}

/// Timestamp in the format written to the hidden field
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Write the click time into the payload's timestamp field
pub fn stamp(payload: &mut FormPayload, at: DateTime<Utc>) {
    payload.set(TIMESTAMP_FIELD, format_timestamp(at));
}

/// Register a click and prepare the interest request.
///
/// The state is activated right away, before the returned future is polled, and
/// the request's outcome never touches it. Returns `None` once already activated.
pub fn record<T>(
    transport: T,
    state: &mut InterestState,
    request: SubmitRequest,
) -> Option<impl Future<Output = Result<(), SubmitError>> + 'static>
where
    T: FormTransport + 'static,
{
    if !state.activate() {
        return None;
    }

    Some(async move { transport.send(&request).await })
}
