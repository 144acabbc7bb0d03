use strum::{Display, EnumIter, EnumString};

/// The discriminant that decides which topic-specific group is active.
///
/// An unset topic is modelled as `Option<SurveyTopic>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum SurveyTopic {
    Technology,
    Health,
    Education,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum ExerciseFrequency {
    Daily,
    Weekly,
    Monthly,
    Rarely,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum DietPreference {
    Vegetarian,
    Vegan,
    #[strum(to_string = "Non-Vegetarian")]
    NonVegetarian,
}

/// Highest completed qualification (Education group).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Qualification {
    #[strum(to_string = "High School")]
    HighSchool,
    #[strum(to_string = "Bachelor's")]
    Bachelors,
    #[strum(to_string = "Master's")]
    Masters,
    #[strum(to_string = "PhD")]
    Phd,
}

/// Languages offered as suggestions for the favorite-language input.
///
/// The model accepts any non-empty text; these only seed the picker.
pub const LANGUAGE_SUGGESTIONS: [&str; 4] = ["JavaScript", "Python", "Java", "C#"];
