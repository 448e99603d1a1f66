//! Landing page configuration from environment variables.
//!
//! Load configuration using `LandingConfig::from_env()` after calling `dotenvy::dotenv()`.
//! The server hands the result to the component tree as a context; the page reads it
//! through [`load_landing_config`] so the value rendered on the server is the one the
//! browser hydrates with.

use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};

/// Environment variable holding the signup form endpoint
pub const SIGNUP_ENDPOINT_VAR: &str = "SIGNUP_FORM_ENDPOINT";
/// Environment variable holding the feedback form endpoint
pub const FEEDBACK_ENDPOINT_VAR: &str = "FEEDBACK_FORM_ENDPOINT";
/// Environment variable holding the interest tracker endpoint
pub const INTEREST_ENDPOINT_VAR: &str = "INTEREST_FORM_ENDPOINT";
/// Environment variable holding the initial signup counter text
pub const SIGNUP_SEED_VAR: &str = "SIGNUP_COUNT_SEED";

/// Landing page configuration.
///
/// A `None` endpoint disables the feature bound to it: the matching component
/// is not rendered at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingConfig {
    /// Form backend URL for the signup form
    /// Example: https://formspree.io/f/abcdwxyz
    pub signup_endpoint: Option<String>,

    /// Form backend URL for the feedback form
    pub feedback_endpoint: Option<String>,

    /// Form backend URL receiving interest clicks
    pub interest_endpoint: Option<String>,

    /// Number rendered in the signup counter before any signup
    pub signup_seed: u64,
}

impl LandingConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset; an unparsable seed falls back to 0.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            signup_endpoint: endpoint(SIGNUP_ENDPOINT_VAR),
            feedback_endpoint: endpoint(FEEDBACK_ENDPOINT_VAR),
            interest_endpoint: endpoint(INTEREST_ENDPOINT_VAR),
            signup_seed: lookup(SIGNUP_SEED_VAR)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0),
        }
    }

    /// Check if the signup form is wired
    pub fn has_signup(&self) -> bool {
        self.signup_endpoint.is_some()
    }

    /// Check if the feedback form is wired
    pub fn has_feedback(&self) -> bool {
        self.feedback_endpoint.is_some()
    }

    /// Check if the interest tracker is wired
    pub fn has_interest(&self) -> bool {
        self.interest_endpoint.is_some()
    }
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            signup_endpoint: None,
            feedback_endpoint: None,
            interest_endpoint: None,
            signup_seed: 0,
        }
    }
}

/// Landing configuration as seen by the server.
///
/// Uses the context provided at router setup, or the environment when called
/// outside of it.
#[server]
pub async fn load_landing_config() -> Result<LandingConfig, ServerFnError> {
    Ok(use_context::<LandingConfig>().unwrap_or_else(LandingConfig::from_env))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = LandingConfig::from_lookup(lookup_from(&[
            (SIGNUP_ENDPOINT_VAR, "https://forms.example.com/signup"),
            (FEEDBACK_ENDPOINT_VAR, "https://forms.example.com/feedback"),
            (INTEREST_ENDPOINT_VAR, "https://forms.example.com/interest"),
            (SIGNUP_SEED_VAR, "42"),
        ]));

        assert_eq!(
            config.signup_endpoint.as_deref(),
            Some("https://forms.example.com/signup")
        );
        assert_eq!(
            config.feedback_endpoint.as_deref(),
            Some("https://forms.example.com/feedback")
        );
        assert_eq!(
            config.interest_endpoint.as_deref(),
            Some("https://forms.example.com/interest")
        );
        assert_eq!(config.signup_seed, 42);
        assert!(config.has_signup());
        assert!(config.has_feedback());
        assert!(config.has_interest());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = LandingConfig::from_lookup(|_| None);

        assert_eq!(config, LandingConfig::default());
        assert!(!config.has_signup());
        assert!(!config.has_feedback());
        assert!(!config.has_interest());
        assert_eq!(config.signup_seed, 0);
    }

    #[test]
    fn test_blank_endpoint_counts_as_unset() {
        let config = LandingConfig::from_lookup(lookup_from(&[
            (SIGNUP_ENDPOINT_VAR, "   "),
            (FEEDBACK_ENDPOINT_VAR, ""),
        ]));

        assert!(!config.has_signup());
        assert!(!config.has_feedback());
    }

    #[test]
    fn test_endpoint_is_trimmed() {
        let config = LandingConfig::from_lookup(lookup_from(&[(
            SIGNUP_ENDPOINT_VAR,
            "  https://forms.example.com/signup\n",
        )]));

        assert_eq!(
            config.signup_endpoint.as_deref(),
            Some("https://forms.example.com/signup")
        );
    }

    #[test]
    fn test_unparsable_seed_defaults_to_zero() {
        let config = LandingConfig::from_lookup(lookup_from(&[(SIGNUP_SEED_VAR, "lots")]));
        assert_eq!(config.signup_seed, 0);

        let config = LandingConfig::from_lookup(lookup_from(&[(SIGNUP_SEED_VAR, "-3")]));
        assert_eq!(config.signup_seed, 0);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on the environment, only check it loads
        let config = LandingConfig::from_env();
        let _ = config.has_signup();
        let _ = config.has_feedback();
        let _ = config.has_interest();
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_load_landing_config_prefers_context() {
        let owner = Owner::new();
        owner.with(|| {
            let config = LandingConfig {
                signup_endpoint: Some("https://forms.example.com/signup".to_string()),
                ..LandingConfig::default()
            };
            provide_context(config.clone());

            let loaded = futures::executor::block_on(load_landing_config()).unwrap();
            assert_eq!(loaded, config);
        });
    }
}
