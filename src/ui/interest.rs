//! Interest button
//!
//! A single click records interest with the form backend and moves the visitor on
//! to the signup section. The button flips to its activated look right away; the
//! request runs in the background and its outcome only reaches the console.

use leptos::html;
use leptos::prelude::*;

use crate::core::interest::{ACTIVATED_CLASS, InterestState, TIMESTAMP_FIELD};

/// Button recording a click with the interest endpoint
#[component]
pub fn InterestButton(
    /// Interest form backend URL
    endpoint: String,
    /// Where the click came from, sent along with the timestamp
    #[prop(default = "landing")]
    source: &'static str,
) -> impl IntoView {
    let state = RwSignal::new(InterestState::default());
    let form_ref = NodeRef::<html::Form>::new();
    let timestamp_ref = NodeRef::<html::Input>::new();

    let on_click = move |_| {
        let mut current = state.get_untracked();
        if current.is_activated() {
            return;
        }

        #[cfg(not(feature = "ssr"))]
        let activated = match interest_request(form_ref, timestamp_ref) {
            Some(request) => send_interest(&mut current, request),
            // Nothing to send, but the click still counts
            None => current.activate(),
        };

        #[cfg(feature = "ssr")]
        let activated = {
            let _ = (form_ref, timestamp_ref);
            current.activate()
        };

        if !activated {
            return;
        }
        state.set(current);

        #[cfg(not(feature = "ssr"))]
        scroll_to_signup_later();
    };

    view! {
        <form class="interest-form" action=endpoint method="POST" node_ref=form_ref hidden=true>
            <input type="hidden" name="source" value=source />
            <input type="hidden" name=TIMESTAMP_FIELD value="" node_ref=timestamp_ref />
        </form>

        <button
            type="button"
            class=move || {
                if state.get().is_activated() {
                    format!("interest-button landing-btn-primary {}", ACTIVATED_CLASS)
                } else {
                    "interest-button landing-btn-primary".to_string()
                }
            }
            disabled=move || state.get().is_activated()
            aria-pressed=move || state.get().is_activated().to_string()
            on:click=on_click
        >
            {move || state.get().label()}
        </button>
    }
}

/// Stamp the hidden timestamp and build the request from the interest form
#[cfg(not(feature = "ssr"))]
fn interest_request(
    form_ref: NodeRef<html::Form>,
    timestamp_ref: NodeRef<html::Input>,
) -> Option<crate::core::SubmitRequest> {
    use chrono::Utc;
    use leptos::logging::warn;

    use crate::core::SubmitRequest;
    use crate::core::interest::{format_timestamp, stamp};
    use crate::ui::http::capture_payload;

    let form = form_ref.get_untracked()?;

    let now = Utc::now();
    if let Some(input) = timestamp_ref.get_untracked() {
        input.set_value(&format_timestamp(now));
    }

    let mut payload = match capture_payload(&form) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Failed to read interest form: {}", e);
            return None;
        }
    };
    stamp(&mut payload, now);

    Some(SubmitRequest::new(form.action(), payload))
}

/// Activate and send the interest form without waiting on it
#[cfg(not(feature = "ssr"))]
fn send_interest(state: &mut InterestState, request: crate::core::SubmitRequest) -> bool {
    use leptos::logging::{log, warn};
    use leptos::task::spawn_local;

    use crate::core::interest::record;
    use crate::ui::http::BrowserTransport;

    let Some(send) = record(BrowserTransport, state, request) else {
        return false;
    };

    spawn_local(async move {
        match send.await {
            Ok(()) => log!("Interest recorded"),
            Err(e) => warn!("Interest not recorded: {}", e),
        }
    });
    true
}

/// Smoothly bring the signup section into view once the click feedback has painted
#[cfg(not(feature = "ssr"))]
fn scroll_to_signup_later() {
    use gloo_timers::future::TimeoutFuture;
    use leptos::task::spawn_local;
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    use crate::core::interest::{SCROLL_DELAY_MS, SIGNUP_ANCHOR};

    spawn_local(async move {
        TimeoutFuture::new(SCROLL_DELAY_MS).await;

        let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(SIGNUP_ANCHOR))
        else {
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    });
}
