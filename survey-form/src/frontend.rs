use crate::{FormError, FormSession, SubmitOutcome, SurveyResponse};

/// Trait for frontends that let a user fill in the form.
///
/// Frontends decide how to present the form (terminal prompts, a scripted
/// replay in tests, ...). Validation is not their concern: they apply edits
/// to the session and show whatever outcome the session reports on submit.
pub trait FormFrontend {
    /// The error type for this frontend.
    type Error: Into<anyhow::Error>;

    /// Apply one round of user edits to `session`.
    ///
    /// Returns once the user asks to submit.
    fn edit(&mut self, session: &mut FormSession) -> Result<(), Self::Error>;

    /// Present the outcome of a submit: the summary, or the errors.
    fn show_outcome(
        &mut self,
        session: &FormSession,
        outcome: &SubmitOutcome,
    ) -> Result<(), Self::Error>;
}

/// Drive `frontend` until the user submits a valid form.
///
/// Each rejected submit returns the user to editing with every value kept.
/// The session still holds the accepted snapshot when this returns.
pub fn run_form<F: FormFrontend>(
    frontend: &mut F,
    session: &mut FormSession,
) -> Result<SurveyResponse, FormError> {
    loop {
        frontend.edit(session).map_err(FormError::frontend)?;

        let outcome = session.submit();
        frontend
            .show_outcome(session, &outcome)
            .map_err(FormError::frontend)?;

        if let SubmitOutcome::Accepted(response) = outcome {
            return Ok(response);
        }
    }
}
