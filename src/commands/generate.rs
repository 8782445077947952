use crate::api::{Generate, GenerateRequest};
use crate::cli::GenerateArgs;
use crate::commands::action::{join_words, perform};
use crate::core::storage::AppCtx;

/// Builds the generate request, falling back to the configured model.
pub fn request(args: &GenerateArgs, default_model: &str) -> GenerateRequest {
    GenerateRequest::new(&join_words(&args.goal))
        .model(args.model.as_deref().unwrap_or(default_model))
        .context(args.context.trim())
        .style(args.style.as_str())
        .formats(args.formats.clone())
}

/// Generate a prompt from a goal.
pub async fn run(ctx: &AppCtx, args: &GenerateArgs) -> Result<(), String> {
    let orchestrator = ctx.orchestrator()?;
    perform::<Generate, _>(&orchestrator, &request(args, &ctx.config.default_model)).await?;
    Ok(())
}
