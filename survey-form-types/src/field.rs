use std::fmt;
use std::str::FromStr;

use crate::SurveyTopic;

/// Identifies one input of the survey form.
///
/// Variants are declared in form order, so sorted collections keyed by
/// `Field` (such as `ErrorMap`) iterate top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Topic,
    FavoriteLanguage,
    YearsOfExperience,
    ExerciseFrequency,
    DietPreference,
    HighestQualification,
    FieldOfStudy,
    Feedback,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 10] = [
        Field::FullName,
        Field::Email,
        Field::Topic,
        Field::FavoriteLanguage,
        Field::YearsOfExperience,
        Field::ExerciseFrequency,
        Field::DietPreference,
        Field::HighestQualification,
        Field::FieldOfStudy,
        Field::Feedback,
    ];

    /// The camelCase identifier used as the error-map key.
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Topic => "topic",
            Self::FavoriteLanguage => "favoriteLanguage",
            Self::YearsOfExperience => "yearsOfExperience",
            Self::ExerciseFrequency => "exerciseFrequency",
            Self::DietPreference => "dietPreference",
            Self::HighestQualification => "highestQualification",
            Self::FieldOfStudy => "fieldOfStudy",
            Self::Feedback => "feedback",
        }
    }

    /// The label shown next to the input and in the summary.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Topic => "Survey Topic",
            Self::FavoriteLanguage => "Favorite Programming Language",
            Self::YearsOfExperience => "Years of Experience",
            Self::ExerciseFrequency => "Exercise Frequency",
            Self::DietPreference => "Diet Preference",
            Self::HighestQualification => "Highest Qualification",
            Self::FieldOfStudy => "Field of Study",
            Self::Feedback => "Feedback",
        }
    }

    /// The topic whose group this field belongs to.
    ///
    /// Returns `None` for fields that are always present.
    pub fn topic(self) -> Option<SurveyTopic> {
        match self {
            Self::FullName | Self::Email | Self::Topic | Self::Feedback => None,
            Self::FavoriteLanguage | Self::YearsOfExperience => Some(SurveyTopic::Technology),
            Self::ExerciseFrequency | Self::DietPreference => Some(SurveyTopic::Health),
            Self::HighestQualification | Self::FieldOfStudy => Some(SurveyTopic::Education),
        }
    }

    /// Visible fields for the given topic, in form order.
    pub fn for_topic(topic: Option<SurveyTopic>) -> Vec<Field> {
        Self::ALL
            .into_iter()
            .filter(|field| match field.topic() {
                None => true,
                Some(owner) => Some(owner) == topic,
            })
            .collect()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name a form field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "surveyTopic" {
            return Ok(Self::Topic);
        }
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_roundtrip() {
        for field in Field::ALL {
            assert_eq!(field.key().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn survey_topic_alias() {
        assert_eq!("surveyTopic".parse::<Field>().unwrap(), Field::Topic);
    }

    #[test]
    fn unknown_key() {
        let err = "favouriteColour".parse::<Field>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown field: favouriteColour");
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Field::YearsOfExperience.to_string(), "Years of Experience");
    }

    #[test]
    fn unset_topic_shows_only_common_fields() {
        assert_eq!(
            Field::for_topic(None),
            vec![Field::FullName, Field::Email, Field::Topic, Field::Feedback]
        );
    }

    #[test]
    fn health_group_sits_before_feedback() {
        assert_eq!(
            Field::for_topic(Some(SurveyTopic::Health)),
            vec![
                Field::FullName,
                Field::Email,
                Field::Topic,
                Field::ExerciseFrequency,
                Field::DietPreference,
                Field::Feedback,
            ]
        );
    }

    #[test]
    fn ordering_follows_form() {
        assert!(Field::FullName < Field::Topic);
        assert!(Field::FieldOfStudy < Field::Feedback);
    }
}
