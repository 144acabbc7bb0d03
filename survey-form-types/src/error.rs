use std::collections::BTreeMap;

use crate::{Field, UnknownField};

/// A single validation failure, attached to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A mandatory field is empty or unset.
    #[error("{0} is required")]
    Required(Field),

    /// The field has content but fails a format or threshold check.
    #[error("{field} {problem}")]
    InvalidFormat { field: Field, problem: &'static str },
}

impl FieldError {
    /// Create a format error with the given problem description.
    pub fn invalid(field: Field, problem: &'static str) -> Self {
        Self::InvalidFormat { field, problem }
    }

    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::Required(field) | Self::InvalidFormat { field, .. } => *field,
        }
    }

    /// Check if this is a missing-value error.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required(_))
    }
}

/// Field-to-error mapping produced by one validation pass.
///
/// An empty map means the snapshot is valid. Iteration follows form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<Field, FieldError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, keyed by the field it names.
    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field(), error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Check if a field key (e.g. `"fullName"`) is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.errors.keys().any(|field| field.key() == key)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Fields with errors, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// `(key, message)` pairs, e.g. `("email", "Email is not valid")`.
    pub fn messages(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        self.iter().map(|(field, error)| (field.key(), error.to_string()))
    }

    /// The topmost field with an error, where the user should look first.
    pub fn first(&self) -> Option<Field> {
        self.errors.keys().next().copied()
    }
}

impl FromIterator<FieldError> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut map = Self::new();
        for error in iter {
            map.insert(error);
        }
        map
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a Field, &'a FieldError);
    type IntoIter = std::collections::btree_map::Iter<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Error returned when an edit cannot be stored in the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldValueError {
    #[error("'{value}' is not an option for {field}")]
    UnknownOption { field: Field, value: String },
}

/// Error type for form session and driver operations.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error(transparent)]
    InvalidValue(#[from] FieldValueError),

    /// Frontend failure (I/O, terminal, cancellation).
    #[error("Frontend error: {0}")]
    Frontend(#[source] anyhow::Error),
}

impl FormError {
    /// Create a frontend error from any error type.
    pub fn frontend(err: impl Into<anyhow::Error>) -> Self {
        Self::Frontend(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            FieldError::Required(Field::FullName).to_string(),
            "Full Name is required"
        );
        assert_eq!(
            FieldError::invalid(Field::Email, "is not valid").to_string(),
            "Email is not valid"
        );
    }

    #[test]
    fn later_insert_replaces_earlier() {
        let mut map = ErrorMap::new();
        map.insert(FieldError::Required(Field::Email));
        map.insert(FieldError::invalid(Field::Email, "is not valid"));
        assert_eq!(map.len(), 1);
        assert!(!map.get(Field::Email).unwrap().is_required());
    }

    #[test]
    fn iterates_in_form_order() {
        let map: ErrorMap = [
            FieldError::Required(Field::Feedback),
            FieldError::Required(Field::FullName),
            FieldError::Required(Field::Topic),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = map.messages().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["fullName", "topic", "feedback"]);
        assert_eq!(map.first(), Some(Field::FullName));
        assert!(map.contains_key("topic"));
        assert!(!map.contains_key("email"));
    }

    #[test]
    fn frontend_error_wraps_anyhow() {
        let err = FormError::frontend(anyhow::anyhow!("terminal closed"));
        assert_eq!(err.to_string(), "Frontend error: terminal closed");
    }
}
