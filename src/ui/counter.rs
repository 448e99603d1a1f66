//! Signup counter
//!
//! The number of signups is whatever the page shows. [`SignupCounter`] owns the
//! element that shows it and is the only thing allowed to change it.

use leptos::html;
use leptos::prelude::*;

/// Handle to the displayed signup count
#[derive(Clone, Copy)]
pub struct SignupCounter {
    node: NodeRef<html::Span>,
}

impl SignupCounter {
    /// Handle for a counter display that has not been rendered yet
    pub fn new() -> Self {
        Self {
            node: NodeRef::new(),
        }
    }

    /// Add one signup to the displayed count.
    ///
    /// Reads the current text back from the page; unparsable text counts as zero.
    pub fn increment(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::counter::next_display;

            if let Some(span) = self.node.get_untracked() {
                let current = span.text_content().unwrap_or_default();
                span.set_text_content(Some(&next_display(&current)));
            }
        }
    }
}

/// Counter badge shown above the signup form
#[component]
pub fn SignupCounterDisplay(
    /// Count rendered by the server
    seed: u64,
    counter: SignupCounter,
) -> impl IntoView {
    view! {
        <p class="signup-counter">
            <span class="counter-number" node_ref=counter.node>
                {seed.to_string()}
            </span>
            <span class="counter-label">"people on the waitlist. Be among the first to know."</span>
        </p>
    }
}
