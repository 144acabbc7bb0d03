use std::str::FromStr;

use crate::{
    DietPreference, ExerciseFrequency, Field, FieldValueError, Qualification, SurveyTopic,
};

/// Values of the Technology group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechnologyFields {
    pub favorite_language: String,
    /// Kept as entered; parsed only during validation.
    pub years_of_experience: String,
}

/// Values of the Health group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthFields {
    pub exercise_frequency: Option<ExerciseFrequency>,
    pub diet_preference: Option<DietPreference>,
}

/// Values of the Education group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationFields {
    pub highest_qualification: Option<Qualification>,
    pub field_of_study: String,
}

/// Borrowed view of the group selected by the current topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicSection<'a> {
    Technology(&'a TechnologyFields),
    Health(&'a HealthFields),
    Education(&'a EducationFields),
}

/// Snapshot of everything the user has entered.
///
/// All three topic groups are stored side by side. Switching the topic only
/// changes which group is active, so values typed into another group survive
/// a round trip through a different topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub full_name: String,
    pub email: String,
    pub topic: Option<SurveyTopic>,
    pub feedback: String,
    pub technology: TechnologyFields,
    pub health: HealthFields,
    pub education: EducationFields,
}

impl FormState {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` into `field`.
    ///
    /// Select fields take the option label (e.g. `"Bachelor's"`); an empty
    /// string clears the selection. On error the state is left untouched.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), FieldValueError> {
        match field {
            Field::FullName => self.full_name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Topic => self.topic = parse_option(field, value)?,
            Field::FavoriteLanguage => self.technology.favorite_language = value.to_string(),
            Field::YearsOfExperience => self.technology.years_of_experience = value.to_string(),
            Field::ExerciseFrequency => {
                self.health.exercise_frequency = parse_option(field, value)?;
            }
            Field::DietPreference => self.health.diet_preference = parse_option(field, value)?,
            Field::HighestQualification => {
                self.education.highest_qualification = parse_option(field, value)?;
            }
            Field::FieldOfStudy => self.education.field_of_study = value.to_string(),
            Field::Feedback => self.feedback = value.to_string(),
        }
        Ok(())
    }

    /// By-value variant of [`set_field`](Self::set_field) for building snapshots.
    pub fn with_field(mut self, field: Field, value: &str) -> Result<Self, FieldValueError> {
        self.set_field(field, value)?;
        Ok(self)
    }

    /// Current value of `field` as display text. Unset selects are empty.
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::FullName => self.full_name.clone(),
            Field::Email => self.email.clone(),
            Field::Topic => display_option(self.topic),
            Field::FavoriteLanguage => self.technology.favorite_language.clone(),
            Field::YearsOfExperience => self.technology.years_of_experience.clone(),
            Field::ExerciseFrequency => display_option(self.health.exercise_frequency),
            Field::DietPreference => display_option(self.health.diet_preference),
            Field::HighestQualification => display_option(self.education.highest_qualification),
            Field::FieldOfStudy => self.education.field_of_study.clone(),
            Field::Feedback => self.feedback.clone(),
        }
    }

    /// The group that the current topic activates, if any.
    pub fn active_section(&self) -> Option<TopicSection<'_>> {
        self.topic.map(|topic| match topic {
            SurveyTopic::Technology => TopicSection::Technology(&self.technology),
            SurveyTopic::Health => TopicSection::Health(&self.health),
            SurveyTopic::Education => TopicSection::Education(&self.education),
        })
    }

    /// Fields currently visible, in form order.
    pub fn visible_fields(&self) -> Vec<Field> {
        Field::for_topic(self.topic)
    }
}

fn parse_option<T: FromStr>(field: Field, value: &str) -> Result<Option<T>, FieldValueError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| FieldValueError::UnknownOption {
            field,
            value: value.to_string(),
        })
}

fn display_option<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_read_text() {
        let mut state = FormState::new();
        state.set_field(Field::FullName, "Ana Li").unwrap();
        state.set_field(Field::YearsOfExperience, "3").unwrap();
        assert_eq!(state.value(Field::FullName), "Ana Li");
        assert_eq!(state.technology.years_of_experience, "3");
    }

    #[test]
    fn set_select_by_label() {
        let state = FormState::new()
            .with_field(Field::HighestQualification, "Bachelor's")
            .unwrap();
        assert_eq!(
            state.education.highest_qualification,
            Some(Qualification::Bachelors)
        );
        assert_eq!(state.value(Field::HighestQualification), "Bachelor's");
    }

    #[test]
    fn empty_string_clears_select() {
        let mut state = FormState::new()
            .with_field(Field::Topic, "Health")
            .unwrap();
        state.set_field(Field::Topic, "").unwrap();
        assert_eq!(state.topic, None);
        assert_eq!(state.value(Field::Topic), "");
    }

    #[test]
    fn unknown_option_leaves_state_untouched() {
        let mut state = FormState::new()
            .with_field(Field::DietPreference, "Vegan")
            .unwrap();
        let err = state.set_field(Field::DietPreference, "Carnivore").unwrap_err();
        assert!(matches!(
            err,
            FieldValueError::UnknownOption {
                field: Field::DietPreference,
                ..
            }
        ));
        assert_eq!(state.health.diet_preference, Some(DietPreference::Vegan));
    }

    #[test]
    fn topic_switch_keeps_other_groups() {
        let mut state = FormState::new()
            .with_field(Field::Topic, "Technology")
            .unwrap()
            .with_field(Field::FavoriteLanguage, "Rust")
            .unwrap();
        state.set_field(Field::Topic, "Health").unwrap();

        assert_eq!(state.technology.favorite_language, "Rust");
        assert!(matches!(
            state.active_section(),
            Some(TopicSection::Health(_))
        ));
    }

    #[test]
    fn no_section_without_topic() {
        assert_eq!(FormState::new().active_section(), None);
    }
}
