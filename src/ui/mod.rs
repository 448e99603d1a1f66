pub mod counter;
pub mod fade_in;
pub mod forms;
pub mod http;
pub mod icon;
pub mod interest;
pub mod pages;

pub use counter::{SignupCounter, SignupCounterDisplay};
pub use fade_in::FadeInObserver;
pub use forms::{LandingField, LandingTextArea, SubmissionForm};
pub use icon::{Icon, icons};
pub use interest::InterestButton;
pub use pages::{LandingPage, NotFoundPage};
