use console::style;
use dialoguer::{theme::ColorfulTheme, Editor, Input};

use crate::cli::SaveArgs;
use crate::commands::action::join_words;
use crate::core::storage::AppCtx;
use crate::ui::render::print_toast;
use crate::ui::{SaveDraft, UiController};

/// Asks for the fields of the save dialog, keeping whatever was typed before.
pub fn fill_draft(draft: &mut SaveDraft) -> Result<(), String> {
    let theme = ColorfulTheme::default();

    draft.name = Input::with_theme(&theme)
        .with_prompt("Prompt name")
        .with_initial_text(draft.name.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| format!("Name error: {}", e))?;

    draft.description = Input::with_theme(&theme)
        .with_prompt("Description (optional)")
        .with_initial_text(draft.description.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| format!("Description error: {}", e))?;

    draft.tags = Input::with_theme(&theme)
        .with_prompt("Tags (comma‑separated, optional)")
        .with_initial_text(draft.tags.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| format!("Tags error: {}", e))?;
    Ok(())
}

/// Save a prompt to the library.
pub fn run(ctx: &AppCtx, args: &SaveArgs) -> Result<(), String> {
    let mut prompt = join_words(&args.prompt);
    if prompt.trim().is_empty() {
        prompt = Editor::new()
            .edit("Enter your prompt here.")
            .map_err(|e| format!("Editor error: {}", e))?
            .unwrap_or_default();
    }
    if prompt.trim().is_empty() {
        return Err("There is no prompt to save".to_string());
    }

    let mut ui = UiController::new(ctx.library(), ctx.config.toast_duration());
    let model = args
        .model
        .clone()
        .unwrap_or_else(|| ctx.config.default_model.clone());
    ui.dialog_mut().open(prompt, Some(model));

    let draft = ui.dialog_mut().draft_mut();
    draft.description = args.description.clone();
    draft.tags = args.tags.clone();
    match &args.name {
        Some(name) => draft.name = name.clone(),
        None => fill_draft(draft)?,
    }

    let saved = ui.confirm_save().map_err(|e| e.to_string())?;
    if let Some(toast) = ui.toast() {
        print_toast(&toast);
    }
    println!(
        "{} Prompt saved with ID {} and name '{}'",
        style("•").green().bold(),
        style(saved.id).yellow(),
        saved.name
    );
    Ok(())
}
