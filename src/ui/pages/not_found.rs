//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::landing::LandingStyles;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found - Lumen" />

        <div class="landing-page landing-hero">
            <div class="landing-center">
                // Error code
                <h1 class="landing-title">"404"</h1>

                // Title
                <h2 class="landing-heading">"Page Not Found"</h2>

                // Description
                <p class="landing-subheading">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="landing-btn-primary">
                    <Icon name=icons::HOME class="landing-icon-inline" />
                    "Go Home"
                </A>
            </div>
        </div>

        <LandingStyles />
    }
}
