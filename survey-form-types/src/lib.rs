//! Core types for the survey-form crate.
//!
//! This crate provides the data model of the survey form:
//! - `Field` - Identifiers, labels and keys of every input
//! - `SurveyTopic` and the option enums - The discriminant and select values
//! - `FormState` and `TopicSection` - The editable snapshot and its active group
//! - `FieldError` and `ErrorMap` - Validation results
//! - `QuestionSource` - Pluggable lookup for follow-up questions

mod field;
pub use field::{Field, UnknownField};

mod topic;
pub use topic::{
    DietPreference, ExerciseFrequency, LANGUAGE_SUGGESTIONS, Qualification, SurveyTopic,
};

mod form_state;
pub use form_state::{EducationFields, FormState, HealthFields, TechnologyFields, TopicSection};

mod additional_question;
pub use additional_question::AdditionalQuestion;

mod error;
pub use error::{ErrorMap, FieldError, FieldValueError, FormError};

mod traits;
pub use traits::QuestionSource;

// Select lists are built by iterating the option enums.
pub use strum::IntoEnumIterator;
