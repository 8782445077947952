use crate::api::{Optimize, OptimizeRequest};
use crate::cli::OptimizeArgs;
use crate::commands::action::{join_words, perform};
use crate::core::storage::AppCtx;

pub fn request(args: &OptimizeArgs, default_model: &str) -> OptimizeRequest {
    OptimizeRequest::new(&join_words(&args.prompt))
        .model(args.model.as_deref().unwrap_or(default_model))
        .level(args.level.as_str())
}

/// Optimize an existing prompt for a target model.
pub async fn run(ctx: &AppCtx, args: &OptimizeArgs) -> Result<(), String> {
    let orchestrator = ctx.orchestrator()?;
    perform::<Optimize, _>(&orchestrator, &request(args, &ctx.config.default_model)).await?;
    Ok(())
}
