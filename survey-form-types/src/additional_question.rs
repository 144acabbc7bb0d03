/// A follow-up question offered for the selected topic.
///
/// These are informational only: they are neither validated nor part of
/// the submitted summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionalQuestion {
    pub id: u32,
    pub text: String,
}

impl AdditionalQuestion {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}
