use crate::api::ModelFilter;
use crate::core::storage::AppCtx;
use crate::ui::render::print_library;
use crate::ui::{Tab, UiController};

/// List every saved prompt, newest first, optionally for one model.
pub fn run(ctx: &AppCtx, model: Option<&str>) -> Result<(), String> {
    let mut ui = UiController::new(ctx.library(), ctx.config.toast_duration());
    ui.activate(Tab::Library).map_err(|e| e.to_string())?;
    let view = match model {
        Some(model) => {
            let filter: ModelFilter = model.parse().unwrap_or_default();
            ui.search(&filter, "").map_err(|e| e.to_string())?
        }
        None => ui.library(),
    };
    print_library(view);
    Ok(())
}
