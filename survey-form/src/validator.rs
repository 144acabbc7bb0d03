//! Field-presence and format rules for a form snapshot.

use crate::{ErrorMap, Field, FieldError, FormState, TopicSection};

/// Minimum feedback length, counted in characters.
pub const MIN_FEEDBACK_CHARS: usize = 50;

/// Validate a snapshot.
///
/// Every rule runs independently, so all failing fields are reported at
/// once. Fields of inactive topic groups are never inspected. An empty map
/// means the snapshot can be submitted.
pub fn validate(state: &FormState) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if is_blank(&state.full_name) {
        errors.insert(FieldError::Required(Field::FullName));
    }

    if state.email.is_empty() {
        errors.insert(FieldError::Required(Field::Email));
    } else if !is_valid_email(&state.email) {
        errors.insert(FieldError::invalid(Field::Email, "is not valid"));
    }

    match state.active_section() {
        None => errors.insert(FieldError::Required(Field::Topic)),
        Some(TopicSection::Technology(tech)) => {
            if tech.favorite_language.is_empty() {
                errors.insert(FieldError::Required(Field::FavoriteLanguage));
            }
            match parse_years(&tech.years_of_experience) {
                None => errors.insert(FieldError::Required(Field::YearsOfExperience)),
                Some(years) if years <= 0.0 => errors.insert(FieldError::invalid(
                    Field::YearsOfExperience,
                    "must be greater than 0",
                )),
                Some(_) => {}
            }
        }
        Some(TopicSection::Health(health)) => {
            if health.exercise_frequency.is_none() {
                errors.insert(FieldError::Required(Field::ExerciseFrequency));
            }
            if health.diet_preference.is_none() {
                errors.insert(FieldError::Required(Field::DietPreference));
            }
        }
        Some(TopicSection::Education(education)) => {
            if education.highest_qualification.is_none() {
                errors.insert(FieldError::Required(Field::HighestQualification));
            }
            if education.field_of_study.is_empty() {
                errors.insert(FieldError::Required(Field::FieldOfStudy));
            }
        }
    }

    if state.feedback.is_empty() {
        errors.insert(FieldError::Required(Field::Feedback));
    } else if state.feedback.chars().count() < MIN_FEEDBACK_CHARS {
        errors.insert(FieldError::invalid(
            Field::Feedback,
            "must be at least 50 characters",
        ));
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Whitespace as matched by `\s` in a browser pattern attribute, which is
/// narrower than `char::is_whitespace` (no U+0085) and includes U+FEFF.
fn is_pattern_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Matches `localpart@domain.tld`: no whitespace, exactly one `@`, and a
/// dot in the domain with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_pattern_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, c)| c == '.' && idx > 0 && idx + 1 < domain.len())
}

/// Parse a years-of-experience entry. Blank or non-numeric input yields `None`.
pub fn parse_years(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|years| years.is_finite())
}
