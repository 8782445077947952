use console::style;

use crate::api::Test;
use crate::commands::action::perform;
use crate::core::storage::AppCtx;
use crate::ui::UiController;

/// Test a saved prompt against the model it was saved for.
pub async fn run(ctx: &AppCtx, id: u64, model: Option<String>) -> Result<(), String> {
    let mut ui = UiController::new(ctx.library(), ctx.config.toast_duration());
    let mut request = ui.use_entry(id).map_err(|e| e.to_string())?;
    if let Some(model) = model {
        request = request.model(model);
    }
    println!(
        "{} Testing prompt {} with {}",
        style("•").green().bold(),
        style(id).yellow(),
        style(&request.target_model).cyan()
    );
    let orchestrator = ctx.orchestrator()?;
    perform::<Test, _>(&orchestrator, &request).await?;
    Ok(())
}
