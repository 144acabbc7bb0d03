//! # survey-form-dialoguer
//!
//! Dialoguer frontend for survey-form.
//!
//! This crate provides a command-line interface for filling in the survey
//! form using the `dialoguer` library. Fields are prompted one after
//! another; the topic-specific prompts follow the topic selection.
//!
//! ## Example
//!
//! ```rust,ignore
//! use survey_form::{FormSession, run_form};
//! use survey_form_dialoguer::DialoguerFrontend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut frontend = DialoguerFrontend::new();
//!     let mut session = FormSession::new();
//!     let response = run_form(&mut frontend, &mut session)?;
//!     println!("Thanks, {}!", response.full_name);
//!     Ok(())
//! }
//! ```

mod frontend;
pub mod logging;

pub use frontend::{DialoguerError, DialoguerFrontend};
