//! Submission form component
//!
//! One component drives both the signup and the feedback form. It intercepts the
//! native submit, posts the fields to the form's `action`, and swaps the form for its
//! confirmation panel once the backend accepts. A failed attempt leaves the form in
//! place with a retry prompt on the button.

use leptos::html;
use leptos::prelude::*;

use crate::core::{FormBinding, SubmissionState};
use crate::ui::counter::SignupCounter;
use crate::ui::icon::{Icon, icons};

/// Form bound to an external form backend
#[component]
pub fn SubmissionForm(
    /// Endpoint, kind and labels of this form
    binding: FormBinding,
    /// Counter bumped after an accepted submission
    #[prop(optional)]
    counter: Option<SignupCounter>,
    /// Title of the confirmation panel
    confirmation_title: &'static str,
    /// Body of the confirmation panel
    confirmation_message: &'static str,
    /// Input fields of the form
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(SubmissionState::Idle);
    let form_ref = NodeRef::<html::Form>::new();

    let kind = binding.kind;
    let submit_label = binding.submit_label.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(not(feature = "ssr"))]
        {
            use leptos::logging::{log, warn};
            use leptos::task::spawn_local;

            use crate::core::SubmitRequest;
            use crate::core::transport::{begin_attempt, deliver};
            use crate::ui::http::{BrowserTransport, capture_payload};

            let Some(form) = form_ref.get_untracked() else {
                return;
            };

            let payload = match capture_payload(&form) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!("Failed to read {} fields: {}", kind.form_class(), e);
                    return;
                }
            };

            if !begin_attempt(&state) {
                return;
            }

            let request = SubmitRequest::new(form.action(), payload);
            spawn_local(async move {
                let on_success = move || {
                    if let Some(counter) = counter {
                        counter.increment();
                    }
                };

                match deliver(&BrowserTransport, &state, &request, on_success).await {
                    Ok(()) => log!("{} submitted", kind.form_class()),
                    Err(e) => warn!("{} submission failed: {}", kind.form_class(), e),
                }
            });
        }

        #[cfg(feature = "ssr")]
        {
            let _ = (form_ref, counter);
        }
    };

    view! {
        <form
            class=format!("{} landing-form", kind.form_class())
            action=binding.endpoint
            method="POST"
            node_ref=form_ref
            on:submit=on_submit
            hidden=move || state.get().shows_confirmation()
        >
            {children()}

            <button
                type="submit"
                class="landing-btn-primary landing-btn-block"
                disabled=move || state.get().is_disabled()
            >
                {move || {
                    let current = state.get();
                    let label = current.label(&submit_label).to_string();
                    if current == SubmissionState::Sending {
                        view! {
                            <span>
                                <Icon name=icons::LOADER class="landing-spinner" />
                                {label}
                            </span>
                        }.into_any()
                    } else {
                        view! { <span>{label}</span> }.into_any()
                    }
                }}
            </button>
        </form>

        <div
            class=format!("{} landing-confirmation", kind.confirmation_class())
            role="status"
            hidden=move || !state.get().shows_confirmation()
        >
            <Icon name=icons::CHECK class="landing-confirmation-icon" />
            <h3>{confirmation_title}</h3>
            <p>{confirmation_message}</p>
        </div>
    }
}

/// Labelled input used inside landing page forms
#[component]
pub fn LandingField(
    /// Element id, unique on the page
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Name submitted to the form backend
    name: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="landing-field">
            <label for=id class="landing-label">
                {label}
                {required.then(|| view! { <span class="landing-required">"*"</span> })}
            </label>
            <input
                type=input_type
                id=id
                name=name
                placeholder=placeholder
                required=required
                class="landing-input"
            />
        </div>
    }
}

/// Multi-line variant of [`LandingField`]
#[component]
pub fn LandingTextArea(
    id: &'static str,
    label: &'static str,
    name: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = 4)]
    rows: u32,
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="landing-field">
            <label for=id class="landing-label">
                {label}
                {required.then(|| view! { <span class="landing-required">"*"</span> })}
            </label>
            <textarea
                id=id
                name=name
                placeholder=placeholder
                rows=rows
                required=required
                class="landing-input"
            />
        </div>
    }
}
