use crate::{AdditionalQuestion, SurveyTopic};

/// Source of the follow-up questions shown once a topic is chosen.
///
/// The built-in implementation is a fixed table, but anything that can map a
/// topic to a list of questions (a remote service, a stub in tests) can be
/// plugged into a form session.
pub trait QuestionSource {
    /// Fetch the questions for `topic`.
    ///
    /// Failures are reported to the caller, which decides how to degrade.
    fn fetch(&self, topic: SurveyTopic) -> anyhow::Result<Vec<AdditionalQuestion>>;
}

impl<F> QuestionSource for F
where
    F: Fn(SurveyTopic) -> Vec<AdditionalQuestion>,
{
    fn fetch(&self, topic: SurveyTopic) -> anyhow::Result<Vec<AdditionalQuestion>> {
        Ok(self(topic))
    }
}
