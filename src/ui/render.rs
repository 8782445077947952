//! Prints panels, library cards and notices to the terminal.

use console::style;

use super::controller::LibraryView;
use crate::api::{ActionKind, Outcome, OPTIMIZATION_NOTES};
use crate::core::storage::PromptEntry;

/// Prints one library card.
pub fn print_entry(entry: &PromptEntry) {
    let model = entry.model.as_deref().unwrap_or("ChatGPT");
    println!(
        "  {} {} [{}] - {}",
        style("•").green(),
        style(entry.id).yellow(),
        style(model).cyan(),
        style(&entry.name).bold()
    );
    let description = if entry.description.is_empty() {
        "No description provided"
    } else {
        entry.description.as_str()
    };
    println!("    {}", style(description).dim());
    if !entry.tags.is_empty() {
        let tags: Vec<String> = entry.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("    {}", style(tags.join(" ")).magenta());
    }
}

pub fn print_library(view: &LibraryView) {
    if let Some(empty) = view.empty {
        println!("{}", style(empty.message()).yellow());
        return;
    }
    println!("{}", style("Saved Prompts:").green().bold());
    for entry in &view.entries {
        print_entry(entry);
    }
}

/// Prints the result panel of an action.
///
/// Validation and transport failures are not printed here; they come back
/// as errors so the caller shows them as blocking messages.
pub fn print_outcome(kind: ActionKind, outcome: &Outcome) {
    match outcome {
        Outcome::Succeeded(text) => {
            println!("{}", style("Result:").green().bold());
            println!("{}", text);
            if kind == ActionKind::Optimize {
                println!("\n{}", style("Optimization notes:").green().bold());
                for note in OPTIMIZATION_NOTES {
                    println!("  {} {}", style("•").green(), note);
                }
            }
        }
        Outcome::Reported { rendered, .. } => {
            println!("{}", style(rendered).red());
        }
        Outcome::Superseded => {
            println!("{}", style("A newer request replaced this one.").dim());
        }
        Outcome::Rejected(_) | Outcome::Alerted { .. } => {}
    }
}

pub fn print_toast(message: &str) {
    println!("{} {}", style("•").green().bold(), message);
}
