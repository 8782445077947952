use crate::api::ModelFilter;
use crate::commands::action::join_words;
use crate::core::storage::AppCtx;
use crate::ui::render::print_library;
use crate::ui::UiController;

/// Search the library by name, description, tag or prompt text within a model.
pub fn run(ctx: &AppCtx, query: &[String], model: &str) -> Result<(), String> {
    let filter: ModelFilter = model.parse().unwrap_or_default();
    let mut ui = UiController::new(ctx.library(), ctx.config.toast_duration());
    let view = ui
        .search(&filter, &join_words(query))
        .map_err(|e| e.to_string())?;
    print_library(view);
    Ok(())
}
