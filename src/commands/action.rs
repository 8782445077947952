use console::style;
use spinners::{Spinner, Spinners};

use crate::api::{Action, ActionKind, Outcome, RequestOrchestrator, Transport};
use crate::ui::render::print_outcome;

/// Runs one backend action behind a spinner and prints its result panel.
///
/// Returns the rendered success text, `None` for a reported or superseded
/// result, and an error for messages the user must acknowledge.
pub async fn perform<A: Action, T: Transport>(
    orchestrator: &RequestOrchestrator<T>,
    input: &A::Input,
) -> Result<Option<String>, String> {
    let mut sp = Spinner::new(Spinners::Dots9, A::KIND.loading_text().into());
    let outcome = orchestrator.run::<A>(input).await;
    match &outcome {
        Outcome::Succeeded(_) => sp.stop_with_symbol("✔"),
        Outcome::Rejected(_) => sp.stop_with_newline(),
        _ => sp.stop_with_symbol("✖"),
    }
    report(A::KIND, outcome)
}

pub fn report(kind: ActionKind, outcome: Outcome) -> Result<Option<String>, String> {
    print_outcome(kind, &outcome);
    match outcome {
        Outcome::Succeeded(text) => Ok(Some(text)),
        Outcome::Reported { .. } | Outcome::Superseded => Ok(None),
        Outcome::Rejected(e) => Err(e.to_string()),
        Outcome::Alerted { alert, error } => {
            eprintln!("{} {}", style("•").red().bold(), style(&error).dim());
            Err(alert.to_string())
        }
    }
}

/// Joins positional words into one text field.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
