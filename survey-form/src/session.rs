//! The field model and the submission flow.

use std::fmt;

use tracing::{debug, info, warn};

use crate::{
    AdditionalQuestion, ErrorMap, Field, FieldError, FieldValueError, FormError, FormState,
    QuestionSource, StaticQuestionSource, SurveyResponse, SurveyTopic,
};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The snapshot was valid; carries the response whose `Display` is the summary.
    Accepted(SurveyResponse),

    /// The snapshot had errors. The frontend should show them next to their
    /// fields and bring the top of the form back into view.
    Rejected(ErrorMap),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn response(&self) -> Option<&SurveyResponse> {
        match self {
            Self::Accepted(response) => Some(response),
            Self::Rejected(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(errors) => Some(errors),
        }
    }
}

/// Validate a snapshot and decide the outcome of submitting it.
///
/// The snapshot itself is never modified, so a rejected submit loses no data.
pub fn submit(state: &FormState) -> SubmitOutcome {
    match SurveyResponse::try_from(state) {
        Ok(response) => SubmitOutcome::Accepted(response),
        Err(errors) => SubmitOutcome::Rejected(errors),
    }
}

/// An editing session over one form.
///
/// Holds the current snapshot, the follow-up questions for the chosen topic
/// and the errors from the most recent submit. Edits never trigger
/// validation; only [`submit`](Self::submit) does.
pub struct FormSession {
    state: FormState,
    additional_questions: Vec<AdditionalQuestion>,
    errors: ErrorMap,
    source: Box<dyn QuestionSource>,
}

impl FormSession {
    /// Create an empty session backed by the built-in question table.
    pub fn new() -> Self {
        Self::with_source(StaticQuestionSource)
    }

    /// Create an empty session with a custom question source.
    pub fn with_source(source: impl QuestionSource + 'static) -> Self {
        Self {
            state: FormState::new(),
            additional_questions: Vec::new(),
            errors: ErrorMap::new(),
            source: Box::new(source),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn topic(&self) -> Option<SurveyTopic> {
        self.state.topic
    }

    pub fn additional_questions(&self) -> &[AdditionalQuestion] {
        &self.additional_questions
    }

    /// Errors from the most recent submit. Empty before the first submit.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Set a field by its key, e.g. `("fullName", "Ana Li")`.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field = name.parse::<Field>()?;
        self.set(field, value)?;
        Ok(())
    }

    /// Store a value. Changing the topic refreshes the follow-up questions;
    /// values of other topic groups are kept.
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), FieldValueError> {
        let previous_topic = self.state.topic;
        self.state.set_field(field, value)?;

        if field == Field::Topic && self.state.topic != previous_topic {
            self.refresh_questions();
        }
        Ok(())
    }

    fn refresh_questions(&mut self) {
        let Some(topic) = self.state.topic else {
            debug!("Topic cleared");
            self.additional_questions.clear();
            return;
        };

        self.additional_questions = match self.source.fetch(topic) {
            Ok(questions) => questions,
            Err(err) => {
                warn!(%topic, error = %err, "Failed to fetch additional questions");
                Vec::new()
            }
        };
        debug!(
            %topic,
            count = self.additional_questions.len(),
            "Topic changed"
        );
    }

    /// Validate the current snapshot and record the resulting errors.
    ///
    /// The snapshot is retained either way, so the user can keep editing.
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = submit(&self.state);
        match &outcome {
            SubmitOutcome::Accepted(response) => {
                info!(topic = %response.topic(), "Survey accepted");
                self.errors = ErrorMap::new();
            }
            SubmitOutcome::Rejected(errors) => {
                let fields: Vec<_> = errors.fields().map(Field::key).collect();
                debug!(count = errors.len(), ?fields, "Survey rejected");
                self.errors = errors.clone();
            }
        }
        outcome
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormSession")
            .field("state", &self.state)
            .field("additional_questions", &self.additional_questions)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_do_not_validate() {
        let mut session = FormSession::new();
        session.set(Field::Email, "not-an-email").unwrap();
        assert!(session.errors().is_empty());
    }

    #[test]
    fn topic_change_loads_questions() {
        let mut session = FormSession::new();
        assert!(session.additional_questions().is_empty());

        session.set(Field::Topic, "Education").unwrap();
        let texts: Vec<_> = session
            .additional_questions()
            .iter()
            .map(|q| q.text.as_str())
            .collect();
        assert_eq!(texts, vec!["Current GPA?", "Extracurricular activities?"]);
    }

    #[test]
    fn clearing_topic_clears_questions() {
        let mut session = FormSession::new();
        session.set(Field::Topic, "Health").unwrap();
        session.set(Field::Topic, "").unwrap();
        assert!(session.additional_questions().is_empty());
    }

    #[test]
    fn failing_source_yields_no_questions() {
        struct Offline;
        impl QuestionSource for Offline {
            fn fetch(&self, _topic: SurveyTopic) -> anyhow::Result<Vec<AdditionalQuestion>> {
                anyhow::bail!("service unavailable")
            }
        }

        let mut session = FormSession::with_source(Offline);
        session.set(Field::Topic, "Technology").unwrap();
        assert!(session.additional_questions().is_empty());
        assert_eq!(session.topic(), Some(SurveyTopic::Technology));
    }

    #[test]
    fn unknown_field_name() {
        let mut session = FormSession::new();
        let err = session.set_field("age", "30").unwrap_err();
        assert!(matches!(err, FormError::UnknownField(_)));
    }

    #[test]
    fn rejected_submit_keeps_values_and_records_errors() {
        let mut session = FormSession::new();
        session.set_field("fullName", "Ana Li").unwrap();

        let outcome = session.submit();
        assert!(!outcome.is_accepted());
        assert_eq!(session.state().full_name, "Ana Li");
        assert!(session.error_for(Field::Email).is_some());
        assert!(session.error_for(Field::FullName).is_none());
    }
}
