//! # survey-form
//!
//! A survey form with topic-dependent fields, backend-agnostic.
//!
//! The form has four fields that are always present (full name, email,
//! survey topic, feedback) and three mutually exclusive groups that the
//! topic switches on:
//!
//! - Technology: favorite programming language, years of experience
//! - Health: exercise frequency, diet preference
//! - Education: highest qualification, field of study
//!
//! ## Usage
//!
//! ```rust
//! use survey_form::{Field, FormSession, SubmitOutcome};
//!
//! let mut session = FormSession::new();
//! session.set_field("fullName", "Ana Li").unwrap();
//! session.set_field("topic", "Health").unwrap();
//!
//! match session.submit() {
//!     SubmitOutcome::Accepted(response) => println!("{response}"),
//!     SubmitOutcome::Rejected(errors) => {
//!         assert!(errors.contains(Field::Email));
//!         assert!(errors.contains(Field::ExerciseFrequency));
//!     }
//! }
//! ```
//!
//! Validation is a pure function over a snapshot ([`validate`]), so it can
//! be used without a session at all.
//!
//! ## Frontends
//!
//! Frontends implement [`FormFrontend`] and are driven by [`run_form`]:
//! - `survey-form-dialoguer` - interactive terminal prompts via dialoguer
//! - [`ScriptedFrontend`] - replays recorded edits, for tests

// Re-export all types from survey-form-types
pub use survey_form_types::*;

mod validator;
pub use validator::{MIN_FEEDBACK_CHARS, is_valid_email, parse_years, validate};

mod response;
pub use response::{SUMMARY_HEADER, SurveyResponse, TopicAnswers};

mod question_source;
pub use question_source::StaticQuestionSource;

mod session;
pub use session::{FormSession, SubmitOutcome, submit};

mod frontend;
pub use frontend::{FormFrontend, run_form};

// Scripted frontend for driving the form without user interaction
mod scripted_frontend;
pub use scripted_frontend::{ScriptedFrontend, ScriptedFrontendError};
