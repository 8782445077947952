use copypasta::{ClipboardContext, ClipboardProvider};

use crate::core::storage::AppCtx;
use crate::ui::render::print_toast;

/// Puts `text` on the system clipboard.
pub fn copy_text(text: &str) -> Result<(), String> {
    let mut clipboard = ClipboardContext::new().map_err(|e| format!("Clipboard error: {}", e))?;
    clipboard
        .set_contents(text.to_owned())
        .map_err(|e| format!("Clipboard set error: {}", e))
}

/// Copy a saved prompt to the clipboard.
pub fn run(ctx: &AppCtx, id: u64) -> Result<(), String> {
    let entry = ctx.library().get(id).map_err(|e| e.to_string())?;
    copy_text(&entry.prompt)?;
    print_toast("Prompt copied to clipboard!");
    Ok(())
}
