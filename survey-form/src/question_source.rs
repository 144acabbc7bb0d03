use crate::{AdditionalQuestion, QuestionSource, SurveyTopic};

/// Built-in follow-up questions, two per topic.
///
/// Stands in for a remote question service; lookups never fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticQuestionSource;

impl StaticQuestionSource {
    /// The fixed question table.
    pub fn questions(topic: SurveyTopic) -> Vec<AdditionalQuestion> {
        let texts = match topic {
            SurveyTopic::Technology => ["Favorite IDE?", "Open source contributions?"],
            SurveyTopic::Health => ["Daily water intake?", "Hours of sleep per night?"],
            SurveyTopic::Education => ["Current GPA?", "Extracurricular activities?"],
        };
        texts
            .into_iter()
            .zip(1..)
            .map(|(text, id)| AdditionalQuestion::new(id, text))
            .collect()
    }
}

impl QuestionSource for StaticQuestionSource {
    fn fetch(&self, topic: SurveyTopic) -> anyhow::Result<Vec<AdditionalQuestion>> {
        Ok(Self::questions(topic))
    }
}
