//! Plain-text views of a form session

use crate::fields::{Field, FormData};
use crate::session::{FormPhase, FormSession, SubmissionResult};
use std::fmt::Write;

pub const FORM_TITLE: &str = "Credit Memo Data";
pub const CONFIRMATION_TITLE: &str = "SAP Data Submitted Successfully!";

/// Label of the submit control in `phase`
#[must_use]
pub fn submit_label(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Submitting => "Generating VBELN...",
        _ => "Submit",
    }
}

/// The form with its prompts, any inline error, and the submit control
#[must_use]
pub fn render_form(session: &FormSession) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{FORM_TITLE}");
    let _ = writeln!(out);
    write_fields(&mut out, session.data(), |field| {
        format!("{} ({}) *", field.label(), field.code())
    });

    if let Some(message) = session.error_message() {
        let _ = writeln!(out);
        let _ = writeln!(out, "! {message}");
    }

    let _ = writeln!(out);
    let state = if session.can_submit() { "" } else { " (disabled)" };
    let _ = writeln!(out, "[{}]{state}", submit_label(session.phase()));
    out
}

/// The confirmation shown after a successful submission
#[must_use]
pub fn render_confirmation(result: &SubmissionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{CONFIRMATION_TITLE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Generated VBELN: {}", result.sap_key);
    let _ = writeln!(out);
    let _ = writeln!(out, "Submitted Data:");
    write_fields(&mut out, &result.form_data, |field| {
        format!("{} ({})", field.label(), field.code())
    });
    out
}

/// Whichever view the session currently shows
#[must_use]
pub fn render_session(session: &FormSession) -> String {
    match session.result() {
        Some(result) => render_confirmation(result),
        None => render_form(session),
    }
}

fn write_fields(out: &mut String, data: &FormData, heading: impl Fn(Field) -> String) {
    for field in Field::ALL {
        let _ = writeln!(out, "  {}: {}", heading(field), data.get(field));
    }
}
