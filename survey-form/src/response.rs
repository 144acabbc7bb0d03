use std::fmt;

use crate::{
    DietPreference, ErrorMap, ExerciseFrequency, Field, FormState, Qualification, SurveyTopic,
    TopicSection, validate,
};

/// Header line of the submission summary.
pub const SUMMARY_HEADER: &str = "Survey Form Summary";

/// Answers of the active topic group, with every required value present.
#[derive(Debug, Clone, PartialEq)]
pub enum TopicAnswers {
    Technology {
        favorite_language: String,
        /// As entered, e.g. `"3"`.
        years_of_experience: String,
    },
    Health {
        exercise_frequency: ExerciseFrequency,
        diet_preference: DietPreference,
    },
    Education {
        highest_qualification: Qualification,
        field_of_study: String,
    },
}

impl TopicAnswers {
    pub fn topic(&self) -> SurveyTopic {
        match self {
            Self::Technology { .. } => SurveyTopic::Technology,
            Self::Health { .. } => SurveyTopic::Health,
            Self::Education { .. } => SurveyTopic::Education,
        }
    }

    /// Labelled values in summary order.
    pub fn lines(&self) -> Vec<(Field, String)> {
        match self {
            Self::Technology {
                favorite_language,
                years_of_experience,
            } => vec![
                (Field::FavoriteLanguage, favorite_language.clone()),
                (Field::YearsOfExperience, years_of_experience.clone()),
            ],
            Self::Health {
                exercise_frequency,
                diet_preference,
            } => vec![
                (Field::ExerciseFrequency, exercise_frequency.to_string()),
                (Field::DietPreference, diet_preference.to_string()),
            ],
            Self::Education {
                highest_qualification,
                field_of_study,
            } => vec![
                (Field::HighestQualification, highest_qualification.to_string()),
                (Field::FieldOfStudy, field_of_study.clone()),
            ],
        }
    }
}

/// A snapshot that passed validation.
///
/// Only constructible from a `FormState` with an empty `ErrorMap`; the
/// `Display` impl renders the plain-text summary shown on acceptance.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyResponse {
    pub full_name: String,
    pub email: String,
    pub answers: TopicAnswers,
    pub feedback: String,
}

impl SurveyResponse {
    pub fn topic(&self) -> SurveyTopic {
        self.answers.topic()
    }

    /// The summary as text, identical to `to_string()`.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl TryFrom<&FormState> for SurveyResponse {
    type Error = ErrorMap;

    fn try_from(state: &FormState) -> Result<Self, Self::Error> {
        let errors = validate(state);
        if !errors.is_empty() {
            return Err(errors);
        }

        // An empty error map guarantees a topic and all of its values.
        let answers = match state.active_section() {
            Some(TopicSection::Technology(tech)) => TopicAnswers::Technology {
                favorite_language: tech.favorite_language.clone(),
                years_of_experience: tech.years_of_experience.clone(),
            },
            Some(TopicSection::Health(health)) => {
                match (health.exercise_frequency, health.diet_preference) {
                    (Some(exercise_frequency), Some(diet_preference)) => TopicAnswers::Health {
                        exercise_frequency,
                        diet_preference,
                    },
                    _ => return Err(errors),
                }
            }
            Some(TopicSection::Education(education)) => match education.highest_qualification {
                Some(highest_qualification) => TopicAnswers::Education {
                    highest_qualification,
                    field_of_study: education.field_of_study.clone(),
                },
                None => return Err(errors),
            },
            None => return Err(errors),
        };

        Ok(Self {
            full_name: state.full_name.clone(),
            email: state.email.clone(),
            answers,
            feedback: state.feedback.clone(),
        })
    }
}

impl fmt::Display for SurveyResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SUMMARY_HEADER}")?;
        writeln!(f, "{}: {}", Field::FullName, self.full_name)?;
        writeln!(f, "{}: {}", Field::Email, self.email)?;
        writeln!(f, "{}: {}", Field::Topic, self.topic())?;
        for (field, value) in self.answers.lines() {
            writeln!(f, "{field}: {value}")?;
        }
        write!(f, "{}: {}", Field::Feedback, self.feedback)
    }
}
