//! Browser side of form delivery
//!
//! Reads field values out of a `<form>` and posts them with `fetch` through gloo-net.
//! No timeout is set: an attempt lasts as long as the browser's fetch does.

use crate::core::{FormTransport, SubmissionCell, SubmissionState, SubmitError, SubmitRequest};
use leptos::prelude::*;

impl SubmissionCell for RwSignal<SubmissionState> {
    fn state(&self) -> SubmissionState {
        self.get_untracked()
    }

    fn set_state(&self, state: SubmissionState) {
        self.set(state);
    }
}

/// Posts forms with `fetch`, multipart body, asking for a JSON answer
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[cfg(not(feature = "ssr"))]
impl FormTransport for BrowserTransport {
    async fn send(&self, request: &SubmitRequest) -> Result<(), SubmitError> {
        use crate::core::transport::ACCEPT_JSON;
        use gloo_net::http::Request;

        let body = to_form_data(&request.payload).map_err(SubmitError::Transport)?;

        let response = Request::post(&request.endpoint)
            .header("Accept", ACCEPT_JSON)
            .body(body)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SubmitError::Rejected {
                status: response.status(),
            })
        }
    }
}

/// SSR stub - forms are only ever submitted from the browser
#[cfg(feature = "ssr")]
impl FormTransport for BrowserTransport {
    async fn send(&self, _request: &SubmitRequest) -> Result<(), SubmitError> {
        Err(SubmitError::Transport(
            "Form submission not available on server".to_string(),
        ))
    }
}

/// Snapshot the current string fields of a form element
#[cfg(not(feature = "ssr"))]
pub fn capture_payload(
    form: &web_sys::HtmlFormElement,
) -> Result<crate::core::FormPayload, String> {
    use wasm_bindgen::JsCast;

    let data = web_sys::FormData::new_with_form(form).map_err(|e| format!("{:?}", e))?;
    let entries = js_sys::try_iter(&data)
        .map_err(|e| format!("{:?}", e))?
        .ok_or("FormData is not iterable")?;

    let mut payload = crate::core::FormPayload::new();
    for entry in entries {
        let entry: js_sys::Array = entry
            .map_err(|e| format!("{:?}", e))?
            .dyn_into()
            .map_err(|e| format!("{:?}", e))?;
        // File inputs have no string value and are not sent
        if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
            payload.push(name, value);
        }
    }
    Ok(payload)
}

#[cfg(not(feature = "ssr"))]
fn to_form_data(payload: &crate::core::FormPayload) -> Result<web_sys::FormData, String> {
    let data = web_sys::FormData::new().map_err(|e| format!("{:?}", e))?;
    for (name, value) in payload.iter() {
        data.append_with_str(name, value)
            .map_err(|e| format!("{:?}", e))?;
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::begin_attempt;

    #[test]
    fn test_signal_backed_cell() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(SubmissionState::Idle);

            assert!(begin_attempt(&state));
            assert_eq!(state.get_untracked(), SubmissionState::Sending);
            assert!(!begin_attempt(&state));
        });
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_transport_fails_as_transport_error() {
        use crate::core::FormPayload;
        use crate::core::transport::deliver;
        use futures::executor::block_on;

        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(SubmissionState::Idle);
            let request = SubmitRequest::new("https://forms.example.com/f", FormPayload::new());

            begin_attempt(&state);
            let result = block_on(deliver(&BrowserTransport, &state, &request, || {}));

            assert!(matches!(result, Err(SubmitError::Transport(_))));
            assert_eq!(state.get_untracked(), SubmissionState::Failed);
        });
    }
}
