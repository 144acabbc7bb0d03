//! Scripted frontend for driving the form without user interaction.
//!
//! `ScriptedFrontend` replays pre-recorded rounds of edits. Each round ends
//! with a submit; every outcome the session reports is recorded so tests can
//! inspect what the user would have seen.
//!
//! # Example
//!
//! ```rust
//! use survey_form::{FormSession, ScriptedFrontend, run_form};
//!
//! let feedback = "Plenty of detail here, comfortably past the fifty character minimum.";
//! let mut frontend = ScriptedFrontend::new()
//!     .round([("fullName", "Ana Li"), ("email", "ana@x.com")])
//!     .round([
//!         ("topic", "Technology"),
//!         ("favoriteLanguage", "Python"),
//!         ("yearsOfExperience", "3"),
//!         ("feedback", feedback),
//!     ]);
//!
//! let mut session = FormSession::new();
//! let response = run_form(&mut frontend, &mut session).unwrap();
//!
//! assert_eq!(response.full_name, "Ana Li");
//! assert_eq!(frontend.outcomes().len(), 2);
//! assert!(!frontend.outcomes()[0].is_accepted());
//! ```

use std::collections::VecDeque;

use crate::{FormError, FormFrontend, FormSession, SubmitOutcome};

/// A frontend that returns pre-configured edits.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrontend {
    rounds: VecDeque<Vec<(String, String)>>,
    outcomes: Vec<SubmitOutcome>,
}

/// Error type for ScriptedFrontend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedFrontendError {
    #[error("No scripted edits left after {submits} submit(s)")]
    Exhausted { submits: usize },

    #[error("Scripted edit '{name}' = '{value}' was rejected: {source}")]
    InvalidEdit {
        name: String,
        value: String,
        source: FormError,
    },
}

impl ScriptedFrontend {
    /// Create a frontend with no scripted rounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a round of `(field key, value)` edits followed by a submit.
    pub fn round<I, K, V>(mut self, edits: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.rounds.push_back(
            edits
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Append a round that submits without editing anything.
    pub fn submit(self) -> Self {
        self.round(std::iter::empty::<(String, String)>())
    }

    /// Outcomes shown so far, oldest first.
    pub fn outcomes(&self) -> &[SubmitOutcome] {
        &self.outcomes
    }

    /// Number of rounds not yet replayed.
    pub fn remaining(&self) -> usize {
        self.rounds.len()
    }
}

impl FormFrontend for ScriptedFrontend {
    type Error = ScriptedFrontendError;

    fn edit(&mut self, session: &mut FormSession) -> Result<(), Self::Error> {
        let round = self
            .rounds
            .pop_front()
            .ok_or(ScriptedFrontendError::Exhausted {
                submits: self.outcomes.len(),
            })?;

        for (name, value) in round {
            if let Err(source) = session.set_field(&name, &value) {
                return Err(ScriptedFrontendError::InvalidEdit {
                    name,
                    value,
                    source,
                });
            }
        }
        Ok(())
    }

    fn show_outcome(
        &mut self,
        _session: &FormSession,
        outcome: &SubmitOutcome,
    ) -> Result<(), Self::Error> {
        self.outcomes.push(outcome.clone());
        Ok(())
    }
}
