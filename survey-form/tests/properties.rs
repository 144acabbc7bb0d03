//! Property-based tests for the validator.

use proptest::prelude::*;
use survey_form::{Field, FormState, IntoEnumIterator, SurveyTopic, validate};

// Fields that only exist inside a topic group
const TOPIC_FIELDS: [Field; 6] = [
    Field::FavoriteLanguage,
    Field::YearsOfExperience,
    Field::ExerciseFrequency,
    Field::DietPreference,
    Field::HighestQualification,
    Field::FieldOfStudy,
];

fn arb_topic() -> impl Strategy<Value = Option<SurveyTopic>> {
    prop_oneof![
        Just(None),
        proptest::sample::select(SurveyTopic::iter().collect::<Vec<_>>()).prop_map(Some),
    ]
}

prop_compose! {
    fn arb_state()(
        full_name in ".{0,20}",
        email in ".{0,20}",
        topic in arb_topic(),
        feedback in ".{0,80}",
        favorite_language in "[A-Za-z ]{0,10}",
        years_of_experience in "-?[0-9]{0,3}",
        field_of_study in "[A-Za-z ]{0,10}",
    ) -> FormState {
        let mut state = FormState {
            full_name,
            email,
            topic,
            feedback,
            ..FormState::default()
        };
        state.technology.favorite_language = favorite_language;
        state.technology.years_of_experience = years_of_experience;
        state.education.field_of_study = field_of_study;
        state
    }
}

fn with_email(email: &str) -> FormState {
    FormState {
        email: email.to_string(),
        ..FormState::default()
    }
}

proptest! {
    #[test]
    fn unset_topic_reports_topic_and_no_group_fields(mut state in arb_state()) {
        state.topic = None;
        let errors = validate(&state);
        prop_assert!(errors.contains(Field::Topic));
        for field in TOPIC_FIELDS {
            prop_assert!(!errors.contains(field));
        }
    }

    #[test]
    fn only_active_group_fields_are_reported(state in arb_state()) {
        let errors = validate(&state);
        for field in errors.fields() {
            if let Some(owner) = field.topic() {
                prop_assert_eq!(Some(owner), state.topic);
            }
        }
    }

    #[test]
    fn validation_is_idempotent(state in arb_state()) {
        prop_assert_eq!(validate(&state), validate(&state));
    }

    #[test]
    fn well_formed_emails_pass(
        local in "[a-z0-9._+-]{1,12}",
        host in "[a-z0-9-]{1,12}",
        tld in "[a-z]{1,6}",
    ) {
        let email = format!("{local}@{host}.{tld}");
        prop_assert!(!validate(&with_email(&email)).contains(Field::Email));
    }

    #[test]
    fn emails_without_at_fail(email in "[a-z0-9.]{1,20}") {
        prop_assert!(validate(&with_email(&email)).contains(Field::Email));
    }

    #[test]
    fn emails_without_dot_after_at_fail(
        local in "[a-z0-9.]{1,12}",
        domain in "[a-z0-9]{1,12}",
    ) {
        let email = format!("{local}@{domain}");
        prop_assert!(validate(&with_email(&email)).contains(Field::Email));
    }

    #[test]
    fn non_positive_years_are_reported(years in -1000i64..=0) {
        let mut state = FormState {
            topic: Some(SurveyTopic::Technology),
            ..FormState::default()
        };
        state.technology.years_of_experience = years.to_string();
        prop_assert!(validate(&state).contains(Field::YearsOfExperience));
    }

    #[test]
    fn non_numeric_years_are_reported(years in "[a-zA-Z ]{0,8}") {
        let mut state = FormState {
            topic: Some(SurveyTopic::Technology),
            ..FormState::default()
        };
        state.technology.years_of_experience = years;
        prop_assert!(validate(&state).contains(Field::YearsOfExperience));
    }

    #[test]
    fn positive_years_pass(years in 1u32..100) {
        let mut state = FormState {
            topic: Some(SurveyTopic::Technology),
            ..FormState::default()
        };
        state.technology.years_of_experience = years.to_string();
        prop_assert!(!validate(&state).contains(Field::YearsOfExperience));
    }
}
