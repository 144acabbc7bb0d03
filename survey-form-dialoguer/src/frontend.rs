//! Dialoguer frontend implementation for the FormFrontend trait.

use dialoguer::{
    Confirm, Editor, Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use survey_form::{
    DietPreference, ErrorMap, ExerciseFrequency, Field, FieldValueError, FormFrontend, FormSession,
    IntoEnumIterator, LANGUAGE_SUGGESTIONS, Qualification, SubmitOutcome, SurveyTopic,
};
use thiserror::Error;
use tracing::debug;

/// Select entry that switches the language picker to free text.
const OTHER_LANGUAGE: &str = "Other...";

/// Error type for the Dialoguer frontend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The form rejected a value produced by a prompt.
    #[error(transparent)]
    InvalidValue(#[from] FieldValueError),
}

impl DialoguerError {
    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// The report printed after a rejected submit: every error in form order,
/// then the field the next round should be fixed from first.
fn rejection_report(errors: &ErrorMap) -> String {
    let mut report = String::from("Please correct the following and submit again:\n");
    for (_, error) in errors.iter() {
        report.push_str(&format!("  - {error}\n"));
    }
    if let Some(field) = errors.first() {
        report.push_str(&format!("Start with: {field}\n"));
    }
    report
}

fn option_labels<T: IntoEnumIterator + ToString>() -> Vec<String> {
    T::iter().map(|option| option.to_string()).collect()
}

/// Dialoguer frontend for interactive terminal prompts.
///
/// Every visible field is prompted in form order, pre-filled with its
/// current value. Topic-specific prompts appear right after the topic is
/// chosen. A rejected submit starts the next round from the first field.
#[derive(Debug, Clone)]
pub struct DialoguerFrontend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl Default for DialoguerFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerFrontend {
    /// Create a new Dialoguer frontend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a frontend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme<'a>(&self, colorful: &'a ColorfulTheme) -> &'a dyn Theme {
        if self.colorful { colorful } else { &SimpleTheme }
    }

    /// Prompt a single field and store the answer.
    fn ask_field(&self, field: Field, session: &mut FormSession) -> Result<(), DialoguerError> {
        if let Some(error) = session.error_for(field) {
            println!("Error: {error}");
        }

        let current = session.state().value(field);
        let prompt = field.label();

        let value = match field {
            Field::FullName | Field::Email | Field::YearsOfExperience | Field::FieldOfStudy => {
                self.ask_text(prompt, &current)?
            }
            Field::FavoriteLanguage => self.ask_language(prompt, &current)?,
            Field::Topic => self.ask_select(prompt, &option_labels::<SurveyTopic>(), &current)?,
            Field::ExerciseFrequency => {
                self.ask_select(prompt, &option_labels::<ExerciseFrequency>(), &current)?
            }
            Field::DietPreference => {
                self.ask_select(prompt, &option_labels::<DietPreference>(), &current)?
            }
            Field::HighestQualification => {
                self.ask_select(prompt, &option_labels::<Qualification>(), &current)?
            }
            Field::Feedback => self.ask_multiline(prompt, &current)?,
        };

        session.set(field, &value)?;
        Ok(())
    }

    fn ask_text(&self, prompt: &str, current: &str) -> Result<String, DialoguerError> {
        let colorful = ColorfulTheme::default();
        let mut builder: Input<String> = Input::with_theme(self.theme(&colorful))
            .with_prompt(prompt)
            .allow_empty(true);

        if !current.is_empty() {
            builder = builder.default(current.to_string());
        }

        builder.interact_text().map_err(prompt_error)
    }

    fn ask_select(
        &self,
        prompt: &str,
        items: &[String],
        current: &str,
    ) -> Result<String, DialoguerError> {
        let colorful = ColorfulTheme::default();
        let mut builder = Select::with_theme(self.theme(&colorful))
            .with_prompt(prompt)
            .items(items);

        if let Some(idx) = items.iter().position(|item| item == current) {
            builder = builder.default(idx);
        }

        match builder.interact_opt().map_err(prompt_error)? {
            Some(idx) => Ok(items[idx].clone()),
            None => Err(DialoguerError::Cancelled),
        }
    }

    fn ask_language(&self, prompt: &str, current: &str) -> Result<String, DialoguerError> {
        let mut items: Vec<String> = LANGUAGE_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
        items.push(OTHER_LANGUAGE.to_string());

        let is_suggestion = LANGUAGE_SUGGESTIONS.contains(&current);
        let preselect = if current.is_empty() || is_suggestion {
            current
        } else {
            OTHER_LANGUAGE
        };

        let choice = self.ask_select(prompt, &items, preselect)?;
        if choice == OTHER_LANGUAGE {
            let custom = if is_suggestion { "" } else { current };
            self.ask_text("Language name", custom)
        } else {
            Ok(choice)
        }
    }

    fn ask_multiline(&self, prompt: &str, current: &str) -> Result<String, DialoguerError> {
        println!("{prompt} (opens your editor)");

        match Editor::new().edit(current) {
            Ok(Some(value)) => Ok(value.trim_end_matches(['\r', '\n']).to_string()),
            // Editor was closed without saving; keep what we had
            Ok(None) => Ok(current.to_string()),
            Err(e) => Err(prompt_error(e)),
        }
    }

    fn show_additional_questions(session: &FormSession) {
        let questions = session.additional_questions();
        if questions.is_empty() {
            return;
        }
        println!("Additional questions for this topic:");
        for question in questions {
            println!("  {}. {}", question.id, question.text);
        }
    }

    fn confirm_submit(&self) -> Result<bool, DialoguerError> {
        let colorful = ColorfulTheme::default();
        Confirm::with_theme(self.theme(&colorful))
            .with_prompt("Submit the survey?")
            .default(true)
            .interact()
            .map_err(prompt_error)
    }
}

impl FormFrontend for DialoguerFrontend {
    type Error = DialoguerError;

    fn edit(&mut self, session: &mut FormSession) -> Result<(), Self::Error> {
        loop {
            // The visible set is recomputed each step: picking a topic
            // inserts its group right after the topic prompt.
            let mut index = 0;
            while let Some(&field) = session.state().visible_fields().get(index) {
                self.ask_field(field, session)?;
                if field == Field::Topic {
                    Self::show_additional_questions(session);
                }
                index += 1;
            }

            if self.confirm_submit()? {
                return Ok(());
            }
            debug!("Submit declined, editing again");
        }
    }

    fn show_outcome(
        &mut self,
        _session: &FormSession,
        outcome: &SubmitOutcome,
    ) -> Result<(), Self::Error> {
        println!();
        match outcome {
            SubmitOutcome::Accepted(response) => {
                println!("{response}");
            }
            SubmitOutcome::Rejected(errors) => {
                println!("{}", rejection_report(errors));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_form::FieldError;

    #[test]
    fn frontend_creation() {
        let _frontend = DialoguerFrontend::new();
        let _plain = DialoguerFrontend::plain();
    }

    #[test]
    fn error_types() {
        let err = DialoguerError::Cancelled;
        assert_eq!(err.to_string(), "Survey cancelled by user");
        assert!(err.is_cancelled());

        let interrupted = dialoguer::Error::IO(std::io::Error::from(
            std::io::ErrorKind::Interrupted,
        ));
        assert!(prompt_error(interrupted).is_cancelled());
    }

    #[test]
    fn rejection_report_points_at_topmost_field() {
        let errors: ErrorMap = [
            FieldError::invalid(Field::Feedback, "must be at least 50 characters"),
            FieldError::Required(Field::Email),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            rejection_report(&errors),
            "Please correct the following and submit again:\n\
             \x20 - Email is required\n\
             \x20 - Feedback must be at least 50 characters\n\
             Start with: Email\n"
        );
    }

    #[test]
    fn select_labels() {
        assert_eq!(
            option_labels::<Qualification>(),
            vec!["High School", "Bachelor's", "Master's", "PhD"]
        );
    }
}
