//! Form delivery
//!
//! Captured field values travel as a [`FormPayload`] inside a [`SubmitRequest`].
//! The [`FormTransport`] trait is the seam between the submission flow and the
//! network: the browser build posts through `fetch`, tests script the outcome.

use std::future::Future;

use super::submission::{SubmissionState, SubmitError};

/// Media type the form backend is asked to answer with
pub const ACCEPT_JSON: &str = "application/json";

/// Ordered name/value pairs captured from a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; repeated names are kept, as in browser form data
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Replace every value of `name` with a single one, appending it if absent
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter().position(|(n, _)| n == name) {
            Some(first) => {
                self.fields[first].1 = value;
                let mut index = 0;
                self.fields.retain(|(n, _)| {
                    let keep = n != name || index == first;
                    index += 1;
                    keep
                });
            }
            None => self.fields.push((name.to_string(), value)),
        }
    }

    /// First value recorded for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

/// One POST of a form payload to its endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub endpoint: String,
    pub payload: FormPayload,
}

impl SubmitRequest {
    pub fn new(endpoint: impl Into<String>, payload: FormPayload) -> Self {
        Self {
            endpoint: endpoint.into(),
            payload,
        }
    }
}

/// Something that can deliver a form to its backend.
///
/// Implementations resolve `Ok(())` only for an accepted (2xx) response.
pub trait FormTransport {
    fn send(&self, request: &SubmitRequest) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Where a binding keeps its submission state
pub trait SubmissionCell {
    fn state(&self) -> SubmissionState;
    fn set_state(&self, state: SubmissionState);
}

/// Enter `Sending` if the binding allows a new attempt.
///
/// Called synchronously from the submit handler, so the control is disabled and
/// relabelled before any request leaves.
pub fn begin_attempt(cell: &impl SubmissionCell) -> bool {
    match cell.state().begin() {
        Some(sending) => {
            cell.set_state(sending);
            true
        }
        None => false,
    }
}

/// Deliver an attempt started with [`begin_attempt`] and settle the state.
///
/// `on_success` runs once, after the state has moved to `Succeeded`.
pub async fn deliver<T, C, F>(
    transport: &T,
    cell: &C,
    request: &SubmitRequest,
    on_success: F,
) -> Result<(), SubmitError>
where
    T: FormTransport,
    C: SubmissionCell,
    F: FnOnce(),
{
    let outcome = transport.send(request).await;

    let next = cell.state().finish(&outcome);
    let succeeded = next == SubmissionState::Succeeded;
    cell.set_state(next);

    if succeeded {
        on_success();
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::submission::RETRY_LABEL;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Transport answering from a script, recording what it was sent
    struct ScriptedTransport {
        outcomes: RefCell<Vec<Result<(), SubmitError>>>,
        sent: RefCell<Vec<SubmitRequest>>,
    }

    impl ScriptedTransport {
        fn new(outcomes: Vec<Result<(), SubmitError>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into_iter().rev().collect()),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormTransport for ScriptedTransport {
        async fn send(&self, request: &SubmitRequest) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(request.clone());
            self.outcomes
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| Err(SubmitError::Transport("script exhausted".to_string())))
        }
    }

    #[derive(Default)]
    struct TestCell(RefCell<SubmissionState>);

    impl SubmissionCell for TestCell {
        fn state(&self) -> SubmissionState {
            self.0.borrow().clone()
        }

        fn set_state(&self, state: SubmissionState) {
            *self.0.borrow_mut() = state;
        }
    }

    fn signup_request() -> SubmitRequest {
        let payload: FormPayload = [("email", "ada@example.com")].into_iter().collect();
        SubmitRequest::new("https://forms.example.com/signup", payload)
    }

    #[test]
    fn test_accepted_response_succeeds_and_runs_hook_once() {
        let transport = ScriptedTransport::new(vec![Ok(())]);
        let cell = TestCell::default();
        let hook_calls = Cell::new(0);

        assert!(begin_attempt(&cell));
        assert_eq!(cell.state(), SubmissionState::Sending);

        let result = block_on(deliver(&transport, &cell, &signup_request(), || {
            hook_calls.set(hook_calls.get() + 1)
        }));

        assert!(result.is_ok());
        assert_eq!(cell.state(), SubmissionState::Succeeded);
        assert!(cell.state().shows_confirmation());
        assert_eq!(hook_calls.get(), 1);
        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(
            transport.sent.borrow()[0].endpoint,
            "https://forms.example.com/signup"
        );
        assert_eq!(
            transport.sent.borrow()[0].payload.get("email"),
            Some("ada@example.com")
        );
    }

    #[test]
    fn test_failures_reenable_with_retry_label_and_skip_hook() {
        for failure in [
            SubmitError::Rejected { status: 500 },
            SubmitError::Transport("NetworkError".to_string()),
        ] {
            let transport = ScriptedTransport::new(vec![Err(failure.clone())]);
            let cell = TestCell::default();
            let hook_calls = Cell::new(0);

            begin_attempt(&cell);
            let result = block_on(deliver(&transport, &cell, &signup_request(), || {
                hook_calls.set(hook_calls.get() + 1)
            }));

            assert_eq!(result, Err(failure));
            assert_eq!(cell.state(), SubmissionState::Failed);
            assert!(!cell.state().is_disabled());
            assert_eq!(cell.state().label("Join the waitlist"), RETRY_LABEL);
            assert_eq!(hook_calls.get(), 0);
        }
    }

    #[test]
    fn test_resubmit_after_failure_branches_independently() {
        let transport = ScriptedTransport::new(vec![
            Err(SubmitError::Rejected { status: 429 }),
            Ok(()),
        ]);
        let cell = TestCell::default();
        let hook_calls = Cell::new(0);

        assert!(begin_attempt(&cell));
        let _ = block_on(deliver(&transport, &cell, &signup_request(), || {
            hook_calls.set(hook_calls.get() + 1)
        }));
        assert_eq!(cell.state(), SubmissionState::Failed);

        assert!(begin_attempt(&cell));
        assert_eq!(cell.state(), SubmissionState::Sending);
        let _ = block_on(deliver(&transport, &cell, &signup_request(), || {
            hook_calls.set(hook_calls.get() + 1)
        }));

        assert_eq!(cell.state(), SubmissionState::Succeeded);
        assert_eq!(hook_calls.get(), 1);
        assert_eq!(transport.sent.borrow().len(), 2);
    }

    #[test]
    fn test_begin_refused_while_sending_or_after_success() {
        let cell = TestCell::default();

        assert!(begin_attempt(&cell));
        assert!(!begin_attempt(&cell));

        cell.set_state(SubmissionState::Succeeded);
        assert!(!begin_attempt(&cell));
        assert_eq!(cell.state(), SubmissionState::Succeeded);
    }

    #[test]
    fn test_payload_keeps_order_and_duplicates() {
        let mut payload = FormPayload::new();
        payload.push("topic", "pricing");
        payload.push("topic", "docs");
        payload.push("message", "More examples please");

        let fields: Vec<_> = payload.iter().collect();
        assert_eq!(
            fields,
            vec![
                ("topic", "pricing"),
                ("topic", "docs"),
                ("message", "More examples please"),
            ]
        );
        assert_eq!(payload.get("topic"), Some("pricing"));
        assert_eq!(payload.len(), 3);
    }

    #[test]
    fn test_payload_set_replaces_all_values() {
        let mut payload: FormPayload = [
            ("timestamp", ""),
            ("source", "hero"),
            ("timestamp", "stale"),
        ]
        .into_iter()
        .collect();

        payload.set("timestamp", "2026-10-17T09:30:00.000Z");

        let fields: Vec<_> = payload.iter().collect();
        assert_eq!(
            fields,
            vec![("timestamp", "2026-10-17T09:30:00.000Z"), ("source", "hero")]
        );
    }

    #[test]
    fn test_payload_set_appends_missing_field() {
        let mut payload = FormPayload::new();
        assert!(payload.is_empty());

        payload.set("timestamp", "2026-10-17T09:30:00.000Z");
        assert_eq!(payload.get("timestamp"), Some("2026-10-17T09:30:00.000Z"));
        assert_eq!(payload.len(), 1);
    }
}
