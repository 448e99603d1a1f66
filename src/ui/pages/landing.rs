//! Landing page component
//!
//! A single scrolling page for Lumen featuring:
//! - SEO meta tags for search engine optimization
//! - Hero section with an animated scroll chevron
//! - Problem and solution sections that fade in on scroll
//! - Interest button, signup form with a live counter, feedback form
//! - Footer
//!
//! Forms and the interest button post to external form backends configured on the
//! server; a section whose endpoint is missing renders its copy without the form.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::{FormBinding, FormKind, LandingConfig, load_landing_config};
use crate::ui::counter::{SignupCounter, SignupCounterDisplay};
use crate::ui::fade_in::FadeInObserver;
use crate::ui::forms::{LandingField, LandingTextArea, SubmissionForm};
use crate::ui::interest::InterestButton;

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let config = Resource::new(|| (), |_| load_landing_config());
    let counter = SignupCounter::new();

    view! {
        <SeoMeta />

        <div class="landing-page">
            <Header />

            <section id="hero" class="landing-hero">
                <div class="landing-container landing-center">
                    <h1 class="landing-title landing-fade-in-up">"Lumen"</h1>
                    <p class="landing-lead landing-fade-in-up landing-delay-200">
                        "Notes that find you when you need them. Write it down once, and Lumen brings it back at the right moment."
                    </p>
                    <a href="#signup" class="landing-btn-primary landing-fade-in-up landing-delay-400">
                        "Get early access"
                    </a>
                </div>

                <a href="#problem" class="scroll-chevron-link" aria-label="Scroll to content">
                    <span class="scroll-chevron"></span>
                </a>
            </section>

            <section id="problem" class="landing-section">
                <div class="landing-container">
                    <div class="landing-center fade-in">
                        <h2 class="landing-heading">"Notes go in. Nothing comes out."</h2>
                        <p class="landing-subheading">
                            "Every app makes capturing easy. None of them help you remember what you captured."
                        </p>
                    </div>

                    <div class="landing-grid">
                        <FeatureCard
                            title="Buried"
                            description="Ideas sink under hundreds of newer notes within a week."
                        />
                        <FeatureCard
                            title="Disconnected"
                            description="Related thoughts live in different notebooks and never meet."
                        />
                        <FeatureCard
                            title="Forgotten"
                            description="Search only helps when you already remember what to look for."
                        />
                    </div>
                </div>
            </section>

            <section id="solution" class="landing-section landing-section-alt">
                <div class="landing-container">
                    <div class="landing-center fade-in">
                        <h2 class="landing-heading">"Lumen resurfaces what matters"</h2>
                        <p class="landing-subheading">
                            "It links notes as you write and brings the right one back when your context changes."
                        </p>
                    </div>

                    <div class="landing-grid">
                        <FeatureCard
                            title="Automatic links"
                            description="Each new note is connected to the ones it relates to. No tagging."
                        />
                        <FeatureCard
                            title="Timely reminders"
                            description="Notes come back when the meeting, place or project they belong to does."
                        />
                        <FeatureCard
                            title="Private by default"
                            description="Your notes are encrypted on your device before they sync."
                        />
                    </div>
                </div>
            </section>

            <Suspense fallback=|| ()>
                {move || Suspend::new(async move {
                    let config = config.await.unwrap_or_default();
                    // Observe fade-in targets once every section is in the page
                    view! {
                        <EngagementSections config=config counter=counter />
                        <FadeInObserver />
                    }
                })}
            </Suspense>

            <Footer />

            <LandingStyles />
        </div>
    }
}

/// Interest, signup and feedback sections, wired to their form backends
#[component]
fn EngagementSections(config: LandingConfig, counter: SignupCounter) -> impl IntoView {
    let signup = FormBinding::wire(FormKind::Signup, config.signup_endpoint.as_deref());
    let feedback = FormBinding::wire(FormKind::Feedback, config.feedback_endpoint.as_deref());
    let seed = config.signup_seed;

    view! {
        <section id="interest" class="landing-section">
            <div class="landing-container landing-center fade-in">
                <h2 class="landing-heading">"Sound useful?"</h2>
                <p class="landing-subheading">
                    "One click tells us you want this. No email needed."
                </p>
                {config.interest_endpoint.map(|endpoint| view! {
                    <InterestButton endpoint=endpoint source="interest-section" />
                })}
            </div>
        </section>

        <section id="signup" class="landing-section landing-section-alt">
            <div class="landing-container landing-narrow fade-in">
                <div class="landing-center">
                    <h2 class="landing-heading">"Join the waitlist"</h2>
                    <p class="landing-subheading">"We'll email you once, when your invite is ready."</p>
                </div>

                <SignupCounterDisplay seed=seed counter=counter />

                {signup.map(|binding| view! {
                    <SubmissionForm
                        binding=binding
                        counter=counter
                        confirmation_title="You're on the list!"
                        confirmation_message="Thanks for signing up. Watch your inbox for your invite."
                    >
                        <LandingField id="signup-name" label="Name" name="name" placeholder="Ada Lovelace" />
                        <LandingField
                            id="signup-email"
                            label="Email"
                            name="email"
                            input_type="email"
                            placeholder="you@example.com"
                            required=true
                        />
                    </SubmissionForm>
                })}
            </div>
        </section>

        <section id="feedback" class="landing-section">
            <div class="landing-container landing-narrow fade-in">
                <div class="landing-center">
                    <h2 class="landing-heading">"Tell us what you think"</h2>
                    <p class="landing-subheading">"What would make Lumen a must-have for you?"</p>
                </div>

                {feedback.map(|binding| view! {
                    <SubmissionForm
                        binding=binding
                        confirmation_title="Thank you!"
                        confirmation_message="Your feedback goes straight to the people building Lumen."
                    >
                        <LandingField
                            id="feedback-email"
                            label="Email (optional)"
                            name="email"
                            input_type="email"
                            placeholder="you@example.com"
                        />
                        <LandingTextArea
                            id="feedback-message"
                            label="Feedback"
                            name="message"
                            placeholder="I'd use this if..."
                            required=true
                        />
                    </SubmissionForm>
                })}
            </div>
        </section>
    }
}

/// Fixed header with in-page navigation
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="landing-header">
            <div class="landing-container landing-header-inner">
                <a href="#hero" class="landing-logo">"Lumen"</a>
                <nav class="landing-nav">
                    <a href="#solution">"How it works"</a>
                    <a href="#signup">"Waitlist"</a>
                    <a href="#feedback">"Feedback"</a>
                </nav>
            </div>
        </header>
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="landing-card fade-in">
            <h3 class="landing-card-title">{title}</h3>
            <p class="landing-card-text">{description}</p>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text="Lumen - Notes that find you" />

        // Basic meta tags
        <Meta name="description" content="Lumen links your notes as you write and brings the right one back at the right moment. Join the waitlist." />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Lumen - Notes that find you" />
        <Meta property="og:description" content="Write it down once, and Lumen brings it back when you need it." />

        // Canonical URL
        <Link rel="canonical" href="/" />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="landing-footer">
            <div class="landing-container landing-center">
                <span>"© 2026 Lumen. Built with Rust & Leptos."</span>
            </div>
        </footer>
    }
}

/// CSS styles for landing page layout and animations
#[component]
pub(super) fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .landing-page {
                min-height: 100vh;
                overflow-x: hidden;
                font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
                color: #111827;
                background-color: #ffffff;
            }

            .landing-container { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
            .landing-narrow { max-width: 32rem; }
            .landing-center { text-align: center; }

            .landing-header {
                position: fixed; top: 0; left: 0; right: 0; z-index: 50;
                background-color: rgba(255, 255, 255, 0.8);
                backdrop-filter: blur(12px);
                border-bottom: 1px solid #e5e7eb;
            }
            .landing-header-inner { display: flex; align-items: center; justify-content: space-between; height: 4rem; }
            .landing-logo { font-size: 1.25rem; font-weight: 700; color: inherit; text-decoration: none; }
            .landing-nav { display: flex; gap: 1.5rem; }
            .landing-nav a { font-size: 0.875rem; color: #4b5563; text-decoration: none; }
            .landing-nav a:hover { color: #111827; }

            .landing-hero {
                position: relative;
                min-height: 100vh;
                display: flex; align-items: center; justify-content: center;
                padding-top: 4rem;
            }
            .landing-title { font-size: clamp(3rem, 8vw, 4.5rem); font-weight: 700; letter-spacing: -0.025em; margin-bottom: 1.5rem; }
            .landing-lead { font-size: 1.25rem; color: #4b5563; max-width: 42rem; margin: 0 auto 2.5rem; line-height: 1.6; }

            .landing-section { padding: 5rem 0; }
            .landing-section-alt { background-color: #f9fafb; }
            .landing-heading { font-size: 2.25rem; font-weight: 700; margin-bottom: 1rem; }
            .landing-subheading { font-size: 1.125rem; color: #4b5563; max-width: 42rem; margin: 0 auto 2rem; }

            .landing-grid { display: grid; gap: 2rem; margin-top: 3rem; }
            @media (min-width: 768px) {
                .landing-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
            }

            .landing-card {
                padding: 1.5rem;
                border: 1px solid #e5e7eb;
                border-radius: 0.75rem;
                background-color: #ffffff;
                transition: box-shadow 0.3s, border-color 0.3s;
            }
            .landing-card:hover { border-color: rgba(37, 99, 235, 0.5); box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); }
            .landing-card-title { font-size: 1.125rem; font-weight: 600; margin-bottom: 0.5rem; }
            .landing-card-text { font-size: 0.875rem; color: #4b5563; line-height: 1.6; }

            /* Button styles */
            .landing-btn-primary {
                display: inline-block;
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                color: white;
                background-color: #2563eb;
                border: none;
                border-radius: 0.75rem;
                text-decoration: none;
                transition: all 0.3s;
                transform: scale(1);
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                cursor: pointer;
            }
            .landing-btn-primary:hover:not(:disabled) {
                transform: scale(1.05);
                background-color: #1d4ed8;
            }
            .landing-btn-primary:disabled { opacity: 0.6; cursor: not-allowed; }
            .landing-btn-block { width: 100%; }

            .interest-button.interest-activated {
                background-color: #16a34a;
                opacity: 1;
                cursor: default;
            }

            /* Forms */
            .landing-form { display: flex; flex-direction: column; gap: 1rem; }
            .landing-field { display: flex; flex-direction: column; gap: 0.375rem; text-align: left; }
            .landing-label { font-size: 0.875rem; font-weight: 500; }
            .landing-required { color: #ef4444; margin-left: 0.125rem; }
            .landing-input {
                width: 100%;
                padding: 0.5rem 0.75rem;
                border: 1px solid #d1d5db;
                border-radius: 0.5rem;
                font: inherit;
                resize: none;
            }
            .landing-input:focus { outline: 2px solid #2563eb; border-color: transparent; }
            .landing-spinner { display: inline-block; width: 1rem; height: 1rem; margin-right: 0.5rem; vertical-align: middle; animation: landing-spin 1s linear infinite; }
            @keyframes landing-spin { to { transform: rotate(360deg); } }
            .landing-icon-inline { display: inline-block; width: 1.25rem; height: 1.25rem; margin-right: 0.5rem; vertical-align: middle; }

            .landing-confirmation {
                text-align: center;
                padding: 1.5rem;
                border: 1px solid #bbf7d0;
                border-radius: 0.75rem;
                background-color: #f0fdf4;
            }
            .landing-confirmation-icon { width: 2rem; height: 2rem; color: #16a34a; margin: 0 auto 0.75rem; }
            .landing-confirmation h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }

            .signup-counter { text-align: center; color: #4b5563; margin-bottom: 1.5rem; }
            .counter-number { font-size: 1.875rem; font-weight: 700; color: #111827; margin-right: 0.5rem; }

            .landing-footer { padding: 3rem 0; border-top: 1px solid #e5e7eb; font-size: 0.875rem; color: #6b7280; }

            /* Fade in up animation */
            @keyframes landing-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }

            .landing-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }

            .landing-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }

            /* Scroll animations */
            .fade-in {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .fade-in.visible {
                opacity: 1;
                transform: translateY(0);
            }

            /* Scroll chevron */
            .scroll-chevron-link {
                position: absolute;
                bottom: 2.5rem;
                left: 50%;
                margin-left: -0.75rem;
            }

            .scroll-chevron {
                display: block;
                width: 1.5rem;
                height: 1.5rem;
                border-right: 3px solid #2563eb;
                border-bottom: 3px solid #2563eb;
                transform: rotate(45deg);
                animation: scrollBounce 2s ease-in-out infinite;
            }

            @keyframes scrollBounce {
                0%, 100% {
                    transform: translateY(0) rotate(45deg);
                    filter: none;
                }
                50% {
                    transform: translateY(10px) rotate(45deg);
                    filter: drop-shadow(0 0 6px rgba(37, 99, 235, 0.8));
                }
            }

            @media (prefers-reduced-motion: reduce) {
                *, *::before, *::after {
                    animation-duration: 0.01ms !important;
                    animation-iteration-count: 1 !important;
                    transition-duration: 0.01ms !important;
                }
                .fade-in { opacity: 1; transform: none; }
            }
            "#
        </style>
    }
}
