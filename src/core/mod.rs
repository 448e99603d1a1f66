//! Core landing page logic, independent of the browser

pub mod config;
pub mod counter;
pub mod interest;
pub mod submission;
pub mod transport;
pub mod visibility;

pub use config::{LandingConfig, load_landing_config};
pub use submission::{FormBinding, FormKind, SubmissionState, SubmitError};
pub use transport::{FormPayload, FormTransport, SubmissionCell, SubmitRequest};
