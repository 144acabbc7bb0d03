//! Starts the dialoguer frontend with some answers already filled in.
//!
//! Run with: cargo run -p survey-form-dialoguer --example prefilled

use survey_form::{FormSession, run_form};
use survey_form_dialoguer::DialoguerFrontend;

fn main() -> anyhow::Result<()> {
    let mut session = FormSession::new();
    session.set_field("fullName", "Ana Li")?;
    session.set_field("email", "ana@x.com")?;
    session.set_field("topic", "Technology")?;
    session.set_field("favoriteLanguage", "Python")?;

    let mut frontend = DialoguerFrontend::new();
    let response = run_form(&mut frontend, &mut session)?;
    println!("Submitted as {} <{}>", response.full_name, response.email);
    Ok(())
}
