use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::core::storage::AppCtx;
use crate::ui::render::print_toast;
use crate::ui::UiController;

/// Asks before a prompt is removed. Any prompt failure counts as "no".
pub fn confirm_delete() -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Are you sure you want to delete this prompt?")
        .default(false)
        .interact()
        .unwrap_or(false)
}

/// Delete a prompt from the library.
pub fn run(ctx: &AppCtx, id: u64, yes: bool) -> Result<(), String> {
    if !yes && !confirm_delete() {
        return Ok(());
    }
    let mut ui = UiController::new(ctx.library(), ctx.config.toast_duration());
    if !ui.delete(id).map_err(|e| e.to_string())? {
        return Err(format!("No prompt with ID {}", id));
    }
    if let Some(toast) = ui.toast() {
        print_toast(&toast);
    }
    Ok(())
}
